use std::ops::Range;

use regex::Regex;

use crate::{
  error::Result,
  text::Text,
};

/// A compiled regular expression together with its source.
#[derive(Debug, Clone)]
pub struct Pattern {
  source: Text,
  regex:  Regex,
  whole:  Regex,
}

impl Pattern {
  pub fn new(source: impl Into<Text>) -> Result<Self> {
    let source = source.into();
    let regex = Regex::new(source.as_str())?;
    let whole = Regex::new(&format!(r"\A(?:{})\z", source.as_str()))?;
    Ok(Self {
      source,
      regex,
      whole,
    })
  }

  pub fn source(&self) -> &Text {
    &self.source
  }

  pub fn regex(&self) -> &Regex {
    &self.regex
  }

  /// Whether the pattern matches the whole of `haystack`, not just a part
  /// of it.
  pub fn is_full_match(&self, haystack: &str) -> bool {
    self.whole.is_match(haystack)
  }
}

impl PartialEq for Pattern {
  fn eq(&self, other: &Self) -> bool {
    self.source == other.source
  }
}

impl Eq for Pattern {}

/// What to look for: literal text or a pattern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Needle {
  Literal(Text),
  Pattern(Pattern),
}

impl Needle {
  /// Byte ranges of the non-overlapping occurrences in `haystack`, left to
  /// right.
  pub(crate) fn find_ranges<'h>(
    &'h self,
    haystack: &'h str,
  ) -> Box<dyn Iterator<Item = Range<usize>> + 'h> {
    match self {
      Self::Literal(literal) => {
        Box::new(
          haystack
            .match_indices(literal.as_str())
            .map(|(start, m)| start..start + m.len()),
        )
      },
      Self::Pattern(pattern) => Box::new(pattern.regex().find_iter(haystack).map(|m| m.range())),
    }
  }
}

impl From<Text> for Needle {
  fn from(text: Text) -> Self {
    Self::Literal(text)
  }
}

impl From<Pattern> for Needle {
  fn from(pattern: Pattern) -> Self {
    Self::Pattern(pattern)
  }
}

#[cfg(test)]
mod test {
  use super::*;
  use crate::ErrorKind;

  #[test]
  fn malformed_pattern() {
    let err = Pattern::new("a(b").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidArgument);
  }

  #[test]
  fn full_match_needs_whole_haystack() {
    let pattern = Pattern::new("a|ab").unwrap();
    assert!(pattern.is_full_match("ab"));
    assert!(pattern.is_full_match("a"));
    assert!(!pattern.is_full_match("abc"));
  }

  #[test]
  fn literal_ranges() {
    let needle = Needle::Literal(Text::from(","));
    let ranges: Vec<_> = needle.find_ranges("a,b,,c").collect();
    assert_eq!(ranges, vec![1..2, 3..4, 4..5]);
  }
}
