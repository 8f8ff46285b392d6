use std::{
  fmt,
  str::FromStr,
};

use thiserror::Error;

/// Operations handled by the string package.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tag {
  Concatenation,
  Length,
  Uppercase,
  Lowercase,
  Trim,
  Reverse,
  StartsWith,
  EndsWith,
  Index,
  Indexes,
  Contains,
  Matches,
  Replace,
  ReplaceAll,
  Split,
  Substring,
  SubstringToPos,
  SubstringToN,
  Compare,
  ToString,
  ToText,
  ToRegularExpression,
  ToPassword,
  Encode,
  Decode,
}

/// Allowed number of children. `max == None` means unbounded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Arity {
  pub min: usize,
  pub max: Option<usize>,
}

impl Arity {
  const fn exactly(n: usize) -> Self {
    Self {
      min: n,
      max: Some(n),
    }
  }

  const fn between(min: usize, max: usize) -> Self {
    Self {
      min,
      max: Some(max),
    }
  }

  const fn at_least(min: usize) -> Self {
    Self { min, max: None }
  }

  pub fn accepts(&self, count: usize) -> bool {
    self.min <= count && self.max.is_none_or(|max| count <= max)
  }
}

impl Tag {
  pub const ALL: [Tag; 25] = [
    Tag::Concatenation,
    Tag::Length,
    Tag::Uppercase,
    Tag::Lowercase,
    Tag::Trim,
    Tag::Reverse,
    Tag::StartsWith,
    Tag::EndsWith,
    Tag::Index,
    Tag::Indexes,
    Tag::Contains,
    Tag::Matches,
    Tag::Replace,
    Tag::ReplaceAll,
    Tag::Split,
    Tag::Substring,
    Tag::SubstringToPos,
    Tag::SubstringToN,
    Tag::Compare,
    Tag::ToString,
    Tag::ToText,
    Tag::ToRegularExpression,
    Tag::ToPassword,
    Tag::Encode,
    Tag::Decode,
  ];

  /// The host's name for this tag.
  pub const fn name(self) -> &'static str {
    match self {
      Self::Concatenation => "String.Concatenation",
      Self::Length => "String.Length",
      Self::Uppercase => "String.Uppercase",
      Self::Lowercase => "String.Lowercase",
      Self::Trim => "String.Trim",
      Self::Reverse => "String.Reverse",
      Self::StartsWith => "String.StartsWith",
      Self::EndsWith => "String.EndsWith",
      Self::Index => "String.Index",
      Self::Indexes => "String.Indexes",
      Self::Contains => "String.Contains",
      Self::Matches => "String.Matches",
      Self::Replace => "String.Replace",
      Self::ReplaceAll => "String.ReplaceAll",
      Self::Split => "String.Split",
      Self::Substring => "String.Substring",
      Self::SubstringToPos => "String.SubstringToPos",
      Self::SubstringToN => "String.SubstringToN",
      Self::Compare => "Relation.Compare",
      Self::ToString => "String.ToString",
      Self::ToText => "String.ToText",
      Self::ToRegularExpression => "String.ToRegularExpression",
      Self::ToPassword => "String.ToPassword",
      Self::Encode => "String.Encode",
      Self::Decode => "String.Decode",
    }
  }

  pub const fn arity(self) -> Arity {
    match self {
      Self::Concatenation => Arity::at_least(2),
      Self::Length
      | Self::Uppercase
      | Self::Lowercase
      | Self::Trim
      | Self::Reverse
      | Self::ToText
      | Self::ToRegularExpression
      | Self::ToPassword
      | Self::Encode
      | Self::Decode => Arity::exactly(1),
      Self::StartsWith
      | Self::EndsWith
      | Self::Index
      | Self::Indexes
      | Self::Contains
      | Self::Matches
      | Self::Substring
      | Self::Compare => Arity::exactly(2),
      Self::Replace | Self::ReplaceAll | Self::SubstringToPos | Self::SubstringToN => {
        Arity::exactly(3)
      },
      Self::Split | Self::ToString => Arity::between(1, 2),
    }
  }
}

impl fmt::Display for Tag {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.name())
  }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown tag '{0}'")]
pub struct UnknownTag(pub String);

impl FromStr for Tag {
  type Err = UnknownTag;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    Tag::ALL
      .into_iter()
      .find(|tag| tag.name() == s)
      .ok_or_else(|| UnknownTag(s.to_string()))
  }
}

#[cfg(test)]
mod test {
  use super::*;

  #[test]
  fn names_round_trip() {
    for tag in Tag::ALL {
      assert_eq!(tag.name().parse::<Tag>(), Ok(tag));
    }
  }

  #[test]
  fn unknown_name() {
    assert_eq!(
      "String.Format".parse::<Tag>(),
      Err(UnknownTag("String.Format".to_string()))
    );
  }

  #[test]
  fn arities() {
    assert!(Tag::Concatenation.arity().accepts(5));
    assert!(!Tag::Concatenation.arity().accepts(1));
    assert!(Tag::Split.arity().accepts(1));
    assert!(Tag::Split.arity().accepts(2));
    assert!(!Tag::Split.arity().accepts(3));
    assert!(!Tag::Substring.arity().accepts(3));
  }
}
