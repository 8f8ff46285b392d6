use thiserror::Error;

pub type Result<T, E = Error> = std::result::Result<T, E>;

/// The argument an error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operand {
  Start,
  End,
  Count,
  ChunkSize,
  /// Slot in a cut-position list.
  Cut(usize),
  /// Slot in a list of code points.
  CodePoint(usize),
  Pattern,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
  InvalidIndex,
  InvalidRange,
  InvalidArgument,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
  #[error("invalid index {index}")]
  InvalidIndex { operand: Operand, index: i64 },
  #[error("invalid range: start {start} is after end {end}")]
  InvalidRange { start: i64, end: i64 },
  #[error("invalid value {value}: {reason}")]
  InvalidArgument {
    operand: Operand,
    value:   i64,
    reason:  &'static str,
  },
  #[error("invalid regular expression: {0}")]
  InvalidPattern(String),
}

impl Error {
  pub fn kind(&self) -> ErrorKind {
    match self {
      Self::InvalidIndex { .. } => ErrorKind::InvalidIndex,
      Self::InvalidRange { .. } => ErrorKind::InvalidRange,
      Self::InvalidArgument { .. } | Self::InvalidPattern(_) => ErrorKind::InvalidArgument,
    }
  }

  /// The argument that caused the failure. A bad range is blamed on its
  /// start.
  pub fn operand(&self) -> Operand {
    match *self {
      Self::InvalidIndex { operand, .. } | Self::InvalidArgument { operand, .. } => operand,
      Self::InvalidRange { .. } => Operand::Start,
      Self::InvalidPattern(_) => Operand::Pattern,
    }
  }
}

impl From<regex::Error> for Error {
  fn from(err: regex::Error) -> Self {
    Self::InvalidPattern(err.to_string())
  }
}
