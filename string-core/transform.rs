use crate::text::Text;

pub fn length(text: &Text) -> usize {
  text.len_chars()
}

/// Case mapping works on the whole text, so context-dependent rules such as
/// the final sigma apply.
pub fn to_upper_case(text: &Text) -> Text {
  Text::from(text.as_str().to_uppercase())
}

pub fn to_lower_case(text: &Text) -> Text {
  Text::from(text.as_str().to_lowercase())
}

/// Strips leading and trailing whitespace, counting the byte order mark
/// (U+FEFF) as whitespace.
pub fn trim(text: &Text) -> Text {
  Text::from(
    text
      .as_str()
      .trim_matches(|c: char| c.is_whitespace() || c == '\u{FEFF}'),
  )
}

/// Reverses code point order. Combining sequences are not kept together.
pub fn reverse(text: &Text) -> Text {
  text.chars().rev().collect()
}

pub fn concat<'a>(parts: impl IntoIterator<Item = &'a Text>) -> Text {
  parts.into_iter().map(Text::as_str).collect()
}

/// Concatenates `parts` with `separator` between each pair.
pub fn join<'a>(parts: impl IntoIterator<Item = &'a Text>, separator: &Text) -> Text {
  let mut joined = String::new();
  for (i, part) in parts.into_iter().enumerate() {
    if i > 0 {
      joined.push_str(separator.as_str());
    }
    joined.push_str(part.as_str());
  }
  Text::from(joined)
}
