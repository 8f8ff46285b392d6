use std::cmp::Ordering;

use crate::text::Text;

/// Lexicographic order by code point.
///
/// UTF-8 preserves code point order under byte comparison, so no decoding
/// is needed.
pub fn compare(a: &Text, b: &Text) -> Ordering {
  a.as_str().cmp(b.as_str())
}
