//! Conversion between text and lists of code points.

use crate::{
  error::{
    Error,
    Operand,
    Result,
  },
  text::Text,
};

/// Builds text from code point values.
///
/// Fails on the first value that is not a Unicode scalar value (negative,
/// a surrogate, or above `U+10FFFF`).
pub fn encode(code_points: &[i64]) -> Result<Text> {
  code_points
    .iter()
    .enumerate()
    .map(|(slot, &value)| {
      u32::try_from(value)
        .ok()
        .and_then(char::from_u32)
        .ok_or(Error::InvalidArgument {
          operand: Operand::CodePoint(slot),
          value,
          reason: "not a Unicode scalar value",
        })
    })
    .collect()
}

/// The code point values of `text`, in order.
pub fn decode(text: &Text) -> Vec<u32> {
  text.chars().map(u32::from).collect()
}

#[cfg(test)]
mod test {
  use super::*;
  use crate::ErrorKind;

  #[test]
  fn encode_code_points() {
    assert_eq!(encode(&[72, 105]).unwrap(), "Hi");
    assert_eq!(encode(&[0x14D, 0x1F600]).unwrap(), "ō😀");
    assert_eq!(encode(&[]).unwrap(), "");
  }

  #[test]
  fn encode_rejects_invalid_values() {
    for (values, slot) in [
      (&[65, -1][..], 1),
      (&[0xD800][..], 0),
      (&[65, 66, 0x110000][..], 2),
    ] {
      let err = encode(values).unwrap_err();
      assert_eq!(err.kind(), ErrorKind::InvalidArgument);
      assert_eq!(err.operand(), Operand::CodePoint(slot));
    }
  }

  #[test]
  fn decode_text() {
    assert_eq!(decode(&Text::from("Hi")), vec![72, 105]);
    assert_eq!(decode(&Text::from("ō😀")), vec![0x14D, 0x1F600]);
    assert!(decode(&Text::new()).is_empty());
  }

  quickcheck::quickcheck! {
    fn decode_inverts_encode(chars: Vec<char>) -> bool {
      let values: Vec<i64> = chars.iter().map(|&c| i64::from(u32::from(c))).collect();
      let decoded: Vec<i64> = decode(&encode(&values).unwrap()).into_iter().map(i64::from).collect();
      decoded == values
    }
  }
}
