//! Building and converting text leaves.
//!
//! These are the entry points for editing actions: each produces a
//! well-formed leaf or refuses the input, so a malformed regular expression
//! or URL never makes it into a tree.

use formulae_string_core::{
  Pattern,
  Text,
};
use url::Url;

use crate::{
  error::EditError,
  expr::{
    Expr,
    TextKind,
  },
};

impl Expr {
  pub fn string(value: impl Into<Text>) -> Self {
    Self::Text {
      kind:  TextKind::String,
      value: value.into(),
    }
  }

  pub fn text(value: impl Into<Text>) -> Self {
    Self::Text {
      kind:  TextKind::Text,
      value: value.into(),
    }
  }

  pub fn password(value: impl Into<Text>) -> Self {
    Self::Text {
      kind:  TextKind::Password,
      value: value.into(),
    }
  }

  /// A regular expression leaf; fails if `source` does not compile.
  pub fn regex(source: impl Into<Text>) -> Result<Self, EditError> {
    let value = source.into();
    Pattern::new(value.clone())?;
    Ok(Self::Text {
      kind: TextKind::RegularExpression,
      value,
    })
  }

  /// A link leaf; fails if `url` does not parse.
  pub fn url(url: &str, description: impl Into<String>) -> Result<Self, EditError> {
    Ok(Self::Url {
      url:         Url::parse(url)?,
      description: description.into(),
    })
  }

  /// A text leaf of any kind, validated as that kind requires.
  pub fn text_leaf(kind: TextKind, value: impl Into<Text>) -> Result<Self, EditError> {
    match kind {
      TextKind::RegularExpression => Self::regex(value),
      kind => {
        Ok(Self::Text {
          kind,
          value: value.into(),
        })
      },
    }
  }
}

/// Re-kinds a text leaf, keeping its value.
///
/// Returns `Ok(None)` when `expr` is not a text leaf.
pub fn convert_kind(expr: &Expr, kind: TextKind) -> Result<Option<Expr>, EditError> {
  match expr {
    Expr::Text { value, .. } => Expr::text_leaf(kind, value.clone()).map(Some),
    _ => Ok(None),
  }
}

/// Replaces the value of a text leaf in place, validating it for the leaf's
/// kind. Non-text nodes are left alone.
pub fn update_value(expr: &mut Expr, value: impl Into<Text>) -> Result<(), EditError> {
  if let Expr::Text { kind, value: old } = expr {
    let value = value.into();
    if *kind == TextKind::RegularExpression {
      Pattern::new(value.clone())?;
    }
    *old = value;
  }
  Ok(())
}

/// Updates the address and description of a link in place.
pub fn update_url(expr: &mut Expr, url: &str, description: impl Into<String>) -> Result<(), EditError> {
  if let Expr::Url {
    url: old_url,
    description: old_description,
  } = expr
  {
    *old_url = Url::parse(url)?;
    *old_description = description.into();
  }
  Ok(())
}
