use std::{
  fmt,
  ops::Range,
};

use ropey::str_utils::{
  byte_to_char_idx,
  char_to_byte_idx,
};

use crate::Tendril;

/// An immutable run of Unicode code points.
///
/// Lengths and offsets exposed by this type are code point counts. Byte
/// offsets only appear in the explicit `*_byte` conversions.
#[derive(Debug, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Text(Tendril);

impl Text {
  pub fn new() -> Self {
    Self(Tendril::new())
  }

  #[inline]
  pub fn as_str(&self) -> &str {
    self.0.as_str()
  }

  #[inline]
  pub fn is_empty(&self) -> bool {
    self.0.is_empty()
  }

  /// Number of code points.
  #[inline]
  pub fn len_chars(&self) -> usize {
    byte_to_char_idx(self.as_str(), self.0.len())
  }

  pub fn chars(&self) -> std::str::Chars<'_> {
    self.as_str().chars()
  }

  #[inline]
  pub fn char_to_byte(&self, char_idx: usize) -> usize {
    char_to_byte_idx(self.as_str(), char_idx)
  }

  #[inline]
  pub fn byte_to_char(&self, byte_idx: usize) -> usize {
    byte_to_char_idx(self.as_str(), byte_idx)
  }

  /// Copies the code points in the 0-based, half-open `range`.
  pub fn slice(&self, range: Range<usize>) -> Text {
    debug_assert!(range.start <= range.end);
    debug_assert!(range.end <= self.len_chars());

    let start = self.char_to_byte(range.start);
    let end = self.char_to_byte(range.end);
    Text::from(&self.as_str()[start..end])
  }

  pub fn into_string(self) -> String {
    self.0.into()
  }
}

impl fmt::Display for Text {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.as_str())
  }
}

impl AsRef<str> for Text {
  fn as_ref(&self) -> &str {
    self.as_str()
  }
}

impl From<&str> for Text {
  fn from(s: &str) -> Self {
    Self(Tendril::from(s))
  }
}

impl From<String> for Text {
  fn from(s: String) -> Self {
    Self(Tendril::from(s))
  }
}

impl From<Tendril> for Text {
  fn from(s: Tendril) -> Self {
    Self(s)
  }
}

impl From<char> for Text {
  fn from(ch: char) -> Self {
    let mut buf = Tendril::new();
    buf.push(ch);
    Self(buf)
  }
}

impl FromIterator<char> for Text {
  fn from_iter<I: IntoIterator<Item = char>>(iter: I) -> Self {
    Self(iter.into_iter().collect())
  }
}

impl<'a> FromIterator<&'a str> for Text {
  fn from_iter<I: IntoIterator<Item = &'a str>>(iter: I) -> Self {
    let mut buf = Tendril::new();
    for part in iter {
      buf.push_str(part);
    }
    Self(buf)
  }
}

impl PartialEq<str> for Text {
  fn eq(&self, other: &str) -> bool {
    self.as_str() == other
  }
}

impl PartialEq<&str> for Text {
  fn eq(&self, other: &&str) -> bool {
    self.as_str() == *other
  }
}
