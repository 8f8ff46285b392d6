//! Code-point indexed text operations.
//!
//! Every function here is pure: it takes immutable [`Text`] values and
//! returns new ones. Positions are 1-based and count Unicode code points;
//! negative positions count from the end, `-1` being the last code point.
//!
//! ```
//! use formulae_string_core::{
//!   Text,
//!   substring::substring_to_pos,
//! };
//!
//! let hello = Text::from("hello");
//! assert_eq!(substring_to_pos(&hello, 2, -2).unwrap(), "el");
//! ```

use smartstring::{
  LazyCompact,
  SmartString,
};

pub mod codepoint;
pub mod compare;
pub mod error;
pub mod index;
pub mod pattern;
pub mod replace;
pub mod search;
pub mod split;
pub mod substring;
pub mod text;
pub mod transform;

pub use error::{
  Error,
  ErrorKind,
  Operand,
  Result,
};
pub use pattern::{
  Needle,
  Pattern,
};
pub use text::Text;

pub type Tendril = SmartString<LazyCompact>;
