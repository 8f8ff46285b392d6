//! Substring extraction in three addressing modes.

use crate::{
  error::{
    Error,
    Operand,
    Result,
  },
  index::{
    boundary,
    resolve,
  },
  text::Text,
};

/// Code points from `pos` to the end of `text`.
///
/// `pos` may point one past the last code point, which yields empty text.
pub fn substring(text: &Text, pos: i64) -> Result<Text> {
  let len = text.len_chars();
  let start = boundary(pos, len, Operand::Start)?;
  Ok(text.slice(start..len))
}

/// Code points in the half-open range `[pos1, pos2)`.
pub fn substring_to_pos(text: &Text, pos1: i64, pos2: i64) -> Result<Text> {
  let len = text.len_chars();
  let start = boundary(pos1, len, Operand::Start)?;
  let end = boundary(pos2, len, Operand::End)?;

  if start > end {
    return Err(Error::InvalidRange {
      start: start as i64 + 1,
      end:   end as i64 + 1,
    });
  }

  Ok(text.slice(start..end))
}

/// `count` code points starting at `pos`.
///
/// A negative count selects the `|count|` code points that end just
/// before `pos`.
pub fn substring_to_n(text: &Text, pos: i64, count: i64) -> Result<Text> {
  let len = text.len_chars() as i64;
  let mut start = resolve(pos, len as usize, Operand::Start)?;
  let mut count = count;

  let shifted = count < 0;
  if shifted {
    start = start.saturating_add(count);
    count = count.checked_neg().ok_or(Error::InvalidIndex {
      operand: Operand::Count,
      index:   count,
    })?;
  }

  if start < 1 {
    let operand = if shifted { Operand::Count } else { Operand::Start };
    let index = if shifted { -count } else { pos };
    return Err(Error::InvalidIndex { operand, index });
  }
  if start > len + 1 {
    return Err(Error::InvalidIndex {
      operand: Operand::Start,
      index:   pos,
    });
  }

  let end = start.checked_add(count).map(|end| end - 1);
  match end {
    Some(end) if end <= len => Ok(text.slice(start as usize - 1..end as usize)),
    _ => {
      Err(Error::InvalidIndex {
        operand: Operand::Count,
        index:   count,
      })
    },
  }
}

#[cfg(test)]
mod test {
  use super::*;
  use crate::ErrorKind;

  fn hello() -> Text {
    Text::from("hello")
  }

  #[test]
  fn substring_to_end() {
    assert_eq!(substring(&hello(), 1).unwrap(), "hello");
    assert_eq!(substring(&hello(), 2).unwrap(), "ello");
    assert_eq!(substring(&hello(), -1).unwrap(), "o");
    assert_eq!(substring(&hello(), -5).unwrap(), "hello");
    assert_eq!(substring(&hello(), 6).unwrap(), "");
  }

  #[test]
  fn substring_out_of_range() {
    let err = substring(&hello(), 7).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidIndex);
    assert_eq!(err.operand(), Operand::Start);

    assert!(substring(&hello(), 0).is_err());
    assert!(substring(&hello(), -6).is_err());
  }

  #[test]
  fn substring_of_empty_text() {
    assert_eq!(substring(&Text::new(), 1).unwrap(), "");
    assert_eq!(substring(&Text::new(), -1).unwrap(), "");
    assert!(substring(&Text::new(), 2).is_err());
  }

  #[test]
  fn substring_counts_code_points() {
    assert_eq!(substring(&Text::from("Fōrmulæ"), -2).unwrap(), "læ");
  }

  #[test]
  fn to_pos() {
    assert_eq!(substring_to_pos(&hello(), 2, 4).unwrap(), "el");
    assert_eq!(substring_to_pos(&hello(), 1, 6).unwrap(), "hello");
    assert_eq!(substring_to_pos(&hello(), 3, 3).unwrap(), "");
    assert_eq!(substring_to_pos(&hello(), -3, -1).unwrap(), "ll");
  }

  #[test]
  fn to_pos_reversed_range() {
    let err = substring_to_pos(&hello(), 4, 2).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidRange);
    assert_eq!(err, Error::InvalidRange { start: 4, end: 2 });
  }

  #[test]
  fn to_pos_bad_end() {
    let err = substring_to_pos(&hello(), 1, 7).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidIndex);
    assert_eq!(err.operand(), Operand::End);

    let err = substring_to_pos(&hello(), 1, 0).unwrap_err();
    assert_eq!(err.operand(), Operand::End);
  }

  #[test]
  fn to_n() {
    assert_eq!(substring_to_n(&hello(), 2, 3).unwrap(), "ell");
    assert_eq!(substring_to_n(&hello(), 1, 5).unwrap(), "hello");
    assert_eq!(substring_to_n(&hello(), -2, 2).unwrap(), "lo");
    assert_eq!(substring_to_n(&hello(), 6, 0).unwrap(), "");
  }

  #[test]
  fn to_n_negative_count_shifts_back() {
    assert_eq!(substring_to_n(&hello(), 4, -2).unwrap(), "el");
    assert_eq!(substring_to_n(&hello(), 6, -5).unwrap(), "hello");
  }

  #[test]
  fn to_n_out_of_range() {
    let err = substring_to_n(&hello(), 2, -2).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidIndex);
    assert_eq!(err.operand(), Operand::Count);

    let err = substring_to_n(&hello(), 3, 4).unwrap_err();
    assert_eq!(err.operand(), Operand::Count);

    let err = substring_to_n(&hello(), 8, 0).unwrap_err();
    assert_eq!(err.operand(), Operand::Start);

    assert!(substring_to_n(&hello(), 2, i64::MAX).is_err());
    assert!(substring_to_n(&hello(), 2, i64::MIN).is_err());
  }

  quickcheck::quickcheck! {
    fn substring_from_one_is_identity(s: String) -> bool {
      let text = Text::from(s.as_str());
      substring(&text, 1).map(|sub| sub == text).unwrap_or(false)
    }
  }
}
