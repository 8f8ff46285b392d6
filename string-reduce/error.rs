use std::fmt;

use formulae_string_core::Error as TextError;
use smallvec::SmallVec;
use thiserror::Error;

use crate::tag::Tag;

/// Child indices leading from a node down to one of its descendants.
pub type NodePath = SmallVec<[usize; 4]>;

/// What an argument should have been.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Expected {
  String,
  RegularExpression,
  StringOrRegularExpression,
  Integer,
  IntegerOrList,
}

impl fmt::Display for Expected {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(match self {
      Self::String => "a string",
      Self::RegularExpression => "a regular expression",
      Self::StringOrRegularExpression => "a string or a regular expression",
      Self::Integer => "an integer number",
      Self::IntegerOrList => "an integer number or a list of integer numbers",
    })
  }
}

/// A failed reduction. The path locates the node to flag, relative to the
/// node the error was returned for.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ReduceError {
  #[error("expression must be {expected}")]
  TypeMismatch { path: NodePath, expected: Expected },
  #[error("{tag} takes {}, got {actual}", format_arity(*.min, *.max))]
  Arity {
    path:   NodePath,
    tag:    Tag,
    min:    usize,
    max:    Option<usize>,
    actual: usize,
  },
  #[error("{error}")]
  InvalidValue { path: NodePath, error: TextError },
}

fn format_arity(min: usize, max: Option<usize>) -> String {
  let plural = |n| if n == 1 { "" } else { "s" };
  match max {
    Some(max) if max == min => format!("exactly {min} argument{}", plural(min)),
    Some(max) => format!("between {min} and {max} arguments"),
    None => format!("at least {min} argument{}", plural(min)),
  }
}

impl ReduceError {
  pub fn type_mismatch(path: &[usize], expected: Expected) -> Self {
    Self::TypeMismatch {
      path: NodePath::from_slice(path),
      expected,
    }
  }

  pub fn invalid_value(path: &[usize], error: TextError) -> Self {
    Self::InvalidValue {
      path: NodePath::from_slice(path),
      error,
    }
  }

  pub fn path(&self) -> &[usize] {
    match self {
      Self::TypeMismatch { path, .. } | Self::Arity { path, .. } | Self::InvalidValue { path, .. } => {
        path
      },
    }
  }

  /// Re-roots the error one level up, below child `index`.
  pub fn under(mut self, index: usize) -> Self {
    match &mut self {
      Self::TypeMismatch { path, .. } | Self::Arity { path, .. } | Self::InvalidValue { path, .. } => {
        path.insert(0, index)
      },
    }
    self
  }
}

/// Failure to build a leaf node.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EditError {
  #[error(transparent)]
  Pattern(#[from] TextError),
  #[error("invalid URL: {0}")]
  Url(#[from] url::ParseError),
}
