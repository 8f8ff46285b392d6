//! Replacement of literal or pattern occurrences.
//!
//! A literal needle is replaced verbatim. A pattern needle expands group
//! references (`$1`, `${name}`) in the replacement; write `$$` for a
//! literal dollar sign.

use crate::{
  pattern::Needle,
  text::Text,
};

pub fn replace_first(text: &Text, needle: &Needle, replacement: &Text) -> Text {
  match needle {
    Needle::Literal(literal) => {
      Text::from(
        text
          .as_str()
          .replacen(literal.as_str(), replacement.as_str(), 1),
      )
    },
    Needle::Pattern(pattern) => {
      Text::from(
        pattern
          .regex()
          .replace(text.as_str(), replacement.as_str())
          .as_ref(),
      )
    },
  }
}

pub fn replace_all(text: &Text, needle: &Needle, replacement: &Text) -> Text {
  match needle {
    Needle::Literal(literal) => {
      Text::from(
        text
          .as_str()
          .replace(literal.as_str(), replacement.as_str()),
      )
    },
    Needle::Pattern(pattern) => {
      Text::from(
        pattern
          .regex()
          .replace_all(text.as_str(), replacement.as_str())
          .as_ref(),
      )
    },
  }
}
