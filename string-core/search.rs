//! Searching text for literals and patterns.
//!
//! Positions returned here are 1-based code point positions. `0` is used
//! by [`index_of`] to report "not found"; it never denotes a real position.

use crate::{
  pattern::{
    Needle,
    Pattern,
  },
  text::Text,
};

/// Position of the first occurrence of `needle`, or `0` when absent.
///
/// An empty needle is found at position 1.
pub fn index_of(text: &Text, needle: &Text) -> usize {
  text
    .as_str()
    .find(needle.as_str())
    .map_or(0, |byte_idx| text.byte_to_char(byte_idx) + 1)
}

/// Positions of every occurrence of `needle`, overlapping ones included.
///
/// An empty needle occurs at every position from 1 to `len + 1`.
pub fn all_indexes_of(text: &Text, needle: &Text) -> Vec<usize> {
  let s = text.as_str();
  let mut positions = Vec::new();
  let mut from = 0;

  while let Some(found) = s[from..].find(needle.as_str()) {
    let byte_idx = from + found;
    positions.push(text.byte_to_char(byte_idx) + 1);

    // Resume one code point further so overlapping occurrences are seen.
    match s[byte_idx..].chars().next() {
      Some(ch) => from = byte_idx + ch.len_utf8(),
      None => break,
    }
  }

  positions
}

pub fn starts_with(text: &Text, prefix: &Text) -> bool {
  text.as_str().starts_with(prefix.as_str())
}

pub fn ends_with(text: &Text, suffix: &Text) -> bool {
  text.as_str().ends_with(suffix.as_str())
}

/// Whether `needle` occurs anywhere in `text`.
pub fn contains(text: &Text, needle: &Needle) -> bool {
  match needle {
    Needle::Literal(literal) => text.as_str().contains(literal.as_str()),
    Needle::Pattern(pattern) => pattern.regex().is_match(text.as_str()),
  }
}

/// Whether `pattern` matches the whole of `text`.
pub fn matches(text: &Text, pattern: &Pattern) -> bool {
  pattern.is_full_match(text.as_str())
}

#[cfg(test)]
mod test {
  use super::*;

  fn t(s: &str) -> Text {
    Text::from(s)
  }

  #[test]
  fn index_of_first_occurrence() {
    assert_eq!(index_of(&t("hello"), &t("l")), 3);
    assert_eq!(index_of(&t("hello"), &t("hello")), 1);
    assert_eq!(index_of(&t("hello"), &t("z")), 0);
    assert_eq!(index_of(&t("hello"), &t("")), 1);
    assert_eq!(index_of(&t("Fōrmulæ"), &t("æ")), 7);
  }

  #[test]
  fn all_indexes() {
    assert_eq!(all_indexes_of(&t("banana"), &t("a")), vec![2, 4, 6]);
    assert_eq!(all_indexes_of(&t("banana"), &t("ana")), vec![2, 4]);
    assert_eq!(all_indexes_of(&t("aaa"), &t("aa")), vec![1, 2]);
    assert_eq!(all_indexes_of(&t("banana"), &t("x")), Vec::<usize>::new());
    assert_eq!(all_indexes_of(&t("ōō"), &t("ō")), vec![1, 2]);
  }

  #[test]
  fn all_indexes_of_empty_needle() {
    assert_eq!(all_indexes_of(&t("ab"), &t("")), vec![1, 2, 3]);
    assert_eq!(all_indexes_of(&t(""), &t("")), vec![1]);
  }

  #[test]
  fn prefixes_and_suffixes() {
    assert!(starts_with(&t("hello"), &t("he")));
    assert!(starts_with(&t("hello"), &t("")));
    assert!(!starts_with(&t("hello"), &t("lo")));
    assert!(ends_with(&t("hello"), &t("lo")));
    assert!(!ends_with(&t("hello"), &t("he")));
  }

  #[test]
  fn contains_literal_or_pattern() {
    assert!(contains(&t("hello"), &Needle::Literal(t("ell"))));
    assert!(!contains(&t("hello"), &Needle::Literal(t("elo"))));

    let digits = Needle::Pattern(Pattern::new(r"\d+").unwrap());
    assert!(contains(&t("abc123"), &digits));
    assert!(!contains(&t("abc"), &digits));
  }

  #[test]
  fn matches_whole_text_only() {
    let pattern = Pattern::new("[a-z]+").unwrap();
    assert!(matches(&t("hello"), &pattern));
    assert!(!matches(&t("hello world"), &pattern));
    assert!(!matches(&t(""), &pattern));
  }
}
