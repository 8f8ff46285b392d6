//! 1-based index normalization.
//!
//! Positive indices count from the start, negative ones from the end, so
//! for a text of length `n`, `-1` resolves to `n` and `-n` resolves to `1`.
//! Zero is never a valid index.

use crate::error::{
  Error,
  Operand,
  Result,
};

/// Resolves a raw 1-based index against a text of `len` code points.
///
/// The result is still 1-based and is not bounds checked: `-10` against a
/// length of 3 resolves to `-6`. Each operation applies its own range.
pub fn normalize(index: i64, len: usize) -> Result<i64> {
  resolve(index, len, Operand::Start)
}

pub(crate) fn resolve(index: i64, len: usize, operand: Operand) -> Result<i64> {
  match index {
    0 => Err(Error::InvalidIndex { operand, index }),
    i if i > 0 => Ok(i),
    i => Ok(len as i64 + i + 1),
  }
}

/// Resolves `index` to a 0-based code point offset in `0..=len`, i.e. a
/// 1-based position between `1` and `len + 1`.
pub(crate) fn boundary(index: i64, len: usize, operand: Operand) -> Result<usize> {
  let resolved = resolve(index, len, operand)?;
  if resolved < 1 || resolved > len as i64 + 1 {
    return Err(Error::InvalidIndex { operand, index });
  }
  Ok(resolved as usize - 1)
}

#[cfg(test)]
mod test {
  use super::*;
  use crate::ErrorKind;

  #[test]
  fn positive_indices_are_kept() {
    assert_eq!(normalize(1, 5), Ok(1));
    assert_eq!(normalize(5, 5), Ok(5));
    assert_eq!(normalize(9, 5), Ok(9));
  }

  #[test]
  fn negative_indices_count_from_end() {
    assert_eq!(normalize(-1, 5), Ok(5));
    assert_eq!(normalize(-5, 5), Ok(1));
    assert_eq!(normalize(-6, 5), Ok(0));
    assert_eq!(normalize(-1, 0), Ok(0));
  }

  #[test]
  fn zero_is_invalid() {
    let err = normalize(0, 5).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidIndex);
  }

  #[test]
  fn boundary_accepts_one_past_the_end() {
    assert_eq!(boundary(6, 5, Operand::Start), Ok(5));
    assert_eq!(boundary(1, 0, Operand::Start), Ok(0));
    assert!(boundary(7, 5, Operand::Start).is_err());
    assert!(boundary(-6, 5, Operand::End).is_err());
  }

  quickcheck::quickcheck! {
    fn normalize_fails_only_on_zero(index: i64, len: u16) -> bool {
      normalize(index, len as usize).is_err() == (index == 0)
    }
  }
}
