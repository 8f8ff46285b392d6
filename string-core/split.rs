//! Splitting text into segments.
//!
//! Every mode returns at least one segment, and splitting empty text yields
//! a single empty segment.
//!
//! # Cut positions
//!
//! A cut-position list names the boundaries explicitly. The sign of each
//! position decides which side the boundary code point lands on:
//!
//! - a positive `p` cuts *before* code point `p`, so it starts the next
//!   segment;
//! - a negative `-p` cuts *after* code point `p`, so it ends the current
//!   segment.
//!
//! With `"abcdef"`, `[3, -5]` gives `["ab", "cde", "f"]` and `[-2, -4]`
//! gives `["ab", "cd", "ef"]`.

use std::ops::Range;

use crate::{
  error::{
    Error,
    Operand,
    Result,
  },
  pattern::Needle,
  text::Text,
};

/// How to split.
#[derive(Debug, Clone, Copy)]
pub enum SplitBy<'a> {
  /// Consecutive groups of this many code points.
  Chunks(i64),
  /// Every occurrence of a literal separator or a pattern match.
  Needle(&'a Needle),
  /// Explicit 1-based cut positions.
  Cuts(&'a [i64]),
}

pub fn split(text: &Text, by: SplitBy<'_>) -> Result<Vec<Text>> {
  match by {
    SplitBy::Chunks(size) => split_chunks(text, size),
    SplitBy::Needle(needle) => Ok(split_needle(text, needle)),
    SplitBy::Cuts(cuts) => split_cuts(text, cuts),
  }
}

/// Splits into groups of `size` code points; the final group may be
/// shorter.
pub fn split_chunks(text: &Text, size: i64) -> Result<Vec<Text>> {
  if size <= 0 {
    return Err(Error::InvalidArgument {
      operand: Operand::ChunkSize,
      value:   size,
      reason:  "chunk size must be a positive integer",
    });
  }
  let size = usize::try_from(size).unwrap_or(usize::MAX);

  let s = text.as_str();
  let mut segments = Vec::new();
  let mut start = 0;
  for (n, (byte_idx, _)) in s.char_indices().enumerate() {
    if n > 0 && n % size == 0 {
      segments.push(Text::from(&s[start..byte_idx]));
      start = byte_idx;
    }
  }
  segments.push(Text::from(&s[start..]));

  Ok(segments)
}

/// Splits at every occurrence of `needle`.
///
/// An empty occurrence is not a cut when it sits at the start of the
/// current segment or at the very end of the text, so an empty separator
/// splits into single code points.
pub fn split_needle(text: &Text, needle: &Needle) -> Vec<Text> {
  split_at(text.as_str(), needle.find_ranges(text.as_str()))
}

fn split_at(s: &str, occurrences: impl Iterator<Item = Range<usize>>) -> Vec<Text> {
  let mut segments = Vec::new();
  let mut last = 0;
  for found in occurrences {
    if found.end == last || found.start == s.len() {
      continue;
    }
    segments.push(Text::from(&s[last..found.start]));
    last = found.end;
  }
  segments.push(Text::from(&s[last..]));
  segments
}

/// Splits at explicit cut positions, producing `cuts.len() + 1` segments.
pub fn split_cuts(text: &Text, cuts: &[i64]) -> Result<Vec<Text>> {
  let len = text.len_chars();

  let mut offsets = Vec::with_capacity(cuts.len());
  let mut previous = 0;
  for (slot, &cut) in cuts.iter().enumerate() {
    let magnitude = cut.unsigned_abs();
    let reason = if cut == 0 {
      Some("cut position cannot be zero")
    } else if magnitude <= previous {
      Some("cut positions must strictly increase in magnitude")
    } else if magnitude > len as u64 {
      Some("cut position is beyond the end of the text")
    } else {
      None
    };
    if let Some(reason) = reason {
      return Err(Error::InvalidArgument {
        operand: Operand::Cut(slot),
        value: cut,
        reason,
      });
    }

    previous = magnitude;
    let magnitude = magnitude as usize;
    offsets.push(if cut > 0 { magnitude - 1 } else { magnitude });
  }

  let mut segments = Vec::with_capacity(offsets.len() + 1);
  let mut start = 0;
  for end in offsets {
    segments.push(text.slice(start..end));
    start = end;
  }
  segments.push(text.slice(start..len));

  Ok(segments)
}

#[cfg(test)]
mod test {
  use super::*;
  use crate::{
    ErrorKind,
    Pattern,
  };

  fn strings(segments: Vec<Text>) -> Vec<String> {
    segments.into_iter().map(Text::into_string).collect()
  }

  fn literal(s: &str) -> Needle {
    Needle::Literal(Text::from(s))
  }

  #[test]
  fn chunks() {
    let text = Text::from("abcdefg");
    assert_eq!(strings(split_chunks(&text, 1).unwrap()), [
      "a", "b", "c", "d", "e", "f", "g"
    ]);
    assert_eq!(strings(split_chunks(&text, 3).unwrap()), ["abc", "def", "g"]);
    assert_eq!(strings(split_chunks(&text, 7).unwrap()), ["abcdefg"]);
    assert_eq!(strings(split_chunks(&text, 100).unwrap()), ["abcdefg"]);
  }

  #[test]
  fn chunks_count_code_points() {
    let text = Text::from("ōæ😀x");
    assert_eq!(strings(split_chunks(&text, 2).unwrap()), ["ōæ", "😀x"]);
  }

  #[test]
  fn chunks_of_empty_text() {
    assert_eq!(strings(split_chunks(&Text::new(), 2).unwrap()), [""]);
  }

  #[test]
  fn chunk_size_must_be_positive() {
    for size in [0, -1, i64::MIN] {
      let err = split_chunks(&Text::from("abc"), size).unwrap_err();
      assert_eq!(err.kind(), ErrorKind::InvalidArgument);
      assert_eq!(err.operand(), Operand::ChunkSize);
    }
  }

  #[test]
  fn literal_separator() {
    let text = Text::from("a,b,,c");
    assert_eq!(strings(split_needle(&text, &literal(","))), [
      "a", "b", "", "c"
    ]);
    assert_eq!(strings(split_needle(&text, &literal(";"))), ["a,b,,c"]);
    assert_eq!(strings(split_needle(&Text::from(",a,"), &literal(","))), [
      "", "a", ""
    ]);
    assert_eq!(strings(split_needle(&Text::from("a::b"), &literal("::"))), [
      "a", "b"
    ]);
  }

  #[test]
  fn empty_separator_splits_code_points() {
    assert_eq!(strings(split_needle(&Text::from("aōc"), &literal(""))), [
      "a", "ō", "c"
    ]);
    assert_eq!(strings(split_needle(&Text::new(), &literal(""))), [""]);
  }

  #[test]
  fn pattern_separator() {
    let pattern = Needle::Pattern(Pattern::new(r"\s*,\s*").unwrap());
    assert_eq!(strings(split_needle(&Text::from("a , b,c"), &pattern)), [
      "a", "b", "c"
    ]);

    let digits = Needle::Pattern(Pattern::new(r"\d").unwrap());
    assert_eq!(strings(split_needle(&Text::from("a1b22c"), &digits)), [
      "a", "b", "", "c"
    ]);
    assert_eq!(strings(split_needle(&Text::from("abc"), &digits)), ["abc"]);
  }

  #[test]
  fn pattern_with_empty_matches() {
    let pattern = Needle::Pattern(Pattern::new("x*").unwrap());
    assert_eq!(strings(split_needle(&Text::from("axbc"), &pattern)), [
      "a", "b", "c"
    ]);
  }

  #[test]
  fn cut_positions() {
    let text = Text::from("abcdef");
    assert_eq!(strings(split_cuts(&text, &[-2, -4]).unwrap()), [
      "ab", "cd", "ef"
    ]);
    assert_eq!(strings(split_cuts(&text, &[3, -5]).unwrap()), [
      "ab", "cde", "f"
    ]);
    assert_eq!(strings(split_cuts(&text, &[2, 4]).unwrap()), [
      "a", "bc", "def"
    ]);
    assert_eq!(strings(split_cuts(&text, &[-3, 4]).unwrap()), [
      "abc", "", "def"
    ]);
  }

  #[test]
  fn cut_positions_at_the_edges() {
    let text = Text::from("abc");
    assert_eq!(strings(split_cuts(&text, &[1]).unwrap()), ["", "abc"]);
    assert_eq!(strings(split_cuts(&text, &[-3]).unwrap()), ["abc", ""]);
    assert_eq!(strings(split_cuts(&text, &[3]).unwrap()), ["ab", "c"]);
    assert_eq!(strings(split_cuts(&text, &[]).unwrap()), ["abc"]);
    assert_eq!(strings(split_cuts(&Text::new(), &[]).unwrap()), [""]);
  }

  #[test]
  fn invalid_cut_positions() {
    let text = Text::from("abcdef");
    for (cuts, slot) in [
      (&[0][..], 0),
      (&[2, 2][..], 1),
      (&[3, -2][..], 1),
      (&[-4, 4][..], 1),
      (&[1, 2, 7][..], 2),
      (&[-7][..], 0),
    ] {
      let err = split_cuts(&text, cuts).unwrap_err();
      assert_eq!(err.kind(), ErrorKind::InvalidArgument);
      assert_eq!(err.operand(), Operand::Cut(slot), "{cuts:?}");
    }
  }

  #[test]
  fn split_dispatches_on_mode() {
    let text = Text::from("abcd");
    assert_eq!(strings(split(&text, SplitBy::Chunks(2)).unwrap()), [
      "ab", "cd"
    ]);
    assert_eq!(
      strings(split(&text, SplitBy::Needle(&literal("c"))).unwrap()),
      ["ab", "d"]
    );
    assert_eq!(strings(split(&text, SplitBy::Cuts(&[-1])).unwrap()), [
      "a", "bcd"
    ]);
  }

  quickcheck::quickcheck! {
    fn chunks_concatenate_back(s: String, size: u8) -> bool {
      let size = i64::from(size.max(1));
      let text = Text::from(s.as_str());
      let segments = split_chunks(&text, size).unwrap();
      segments.iter().map(Text::as_str).collect::<String>() == s
    }
  }
}
