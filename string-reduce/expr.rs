use std::cmp::Ordering;

use formulae_string_core::Text;
use serde::{
  Deserialize,
  Serialize,
};
use url::Url;

use crate::tag::Tag;

/// The flavours of text leaf. They share one representation and differ
/// in how they are displayed and validated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TextKind {
  String,
  Text,
  RegularExpression,
  Password,
}

impl TextKind {
  pub const ALL: [TextKind; 4] = [
    TextKind::String,
    TextKind::Text,
    TextKind::RegularExpression,
    TextKind::Password,
  ];

  /// Host tag of leaves of this kind.
  pub const fn tag(self) -> &'static str {
    match self {
      Self::String => "String.String",
      Self::Text => "String.Text",
      Self::RegularExpression => "String.RegularExpression",
      Self::Password => "String.Password",
    }
  }

  pub const fn name(self) -> &'static str {
    match self {
      Self::String => "String",
      Self::Text => "Text",
      Self::RegularExpression => "Regular expression",
      Self::Password => "Password",
    }
  }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Number {
  Integer(i64),
  Real(f64),
}

impl Number {
  /// The value as an integer, if it has no fractional part.
  pub fn as_integer(self) -> Option<i64> {
    match self {
      Self::Integer(n) => Some(n),
      Self::Real(x) if x.fract() == 0.0 && x >= i64::MIN as f64 && x < i64::MAX as f64 => {
        Some(x as i64)
      },
      Self::Real(_) => None,
    }
  }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
  Text {
    kind:  TextKind,
    value: Text,
  },
  Url {
    url:         Url,
    description: String,
  },
  Number(Number),
  Bool(bool),
  /// Result of a comparison.
  Comparison(Ordering),
  List(Vec<Expr>),
  /// A node owned by another package, passed through untouched.
  Symbol(String),
  Apply {
    tag:      Tag,
    children: Vec<Expr>,
  },
}

impl Expr {
  pub fn apply(tag: Tag, children: Vec<Expr>) -> Self {
    Self::Apply { tag, children }
  }

  pub fn integer(n: i64) -> Self {
    Self::Number(Number::Integer(n))
  }

  pub fn real(x: f64) -> Self {
    Self::Number(Number::Real(x))
  }

  pub fn list(items: impl IntoIterator<Item = Expr>) -> Self {
    Self::List(items.into_iter().collect())
  }

  pub fn text_kind(&self) -> Option<TextKind> {
    match self {
      Self::Text { kind, .. } => Some(*kind),
      _ => None,
    }
  }

  /// The value of a text leaf, whatever its kind.
  pub fn text_value(&self) -> Option<&Text> {
    match self {
      Self::Text { value, .. } => Some(value),
      _ => None,
    }
  }

  /// The value of a text leaf of exactly `kind`.
  pub fn text_of(&self, kind: TextKind) -> Option<&Text> {
    match self {
      Self::Text { kind: k, value } if *k == kind => Some(value),
      _ => None,
    }
  }

  pub fn as_integer(&self) -> Option<i64> {
    match self {
      Self::Number(n) => n.as_integer(),
      _ => None,
    }
  }

  pub fn children(&self) -> &[Expr] {
    match self {
      Self::Apply { children, .. } | Self::List(children) => children,
      _ => &[],
    }
  }

  /// Host tag of this node.
  pub fn tag_name(&self) -> &str {
    match self {
      Self::Text { kind, .. } => kind.tag(),
      Self::Url { .. } => "Internet.UniformResourceLocator",
      Self::Number(_) => "Math.Number",
      Self::Bool(true) => "Logic.True",
      Self::Bool(false) => "Logic.False",
      Self::Comparison(Ordering::Less) => "Relation.Comparison.Less",
      Self::Comparison(Ordering::Equal) => "Relation.Comparison.Equals",
      Self::Comparison(Ordering::Greater) => "Relation.Comparison.Greater",
      Self::List(_) => "List.List",
      Self::Symbol(name) => name,
      Self::Apply { tag, .. } => tag.name(),
    }
  }
}
