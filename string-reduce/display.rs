//! Plain-text rendering of expressions.

use std::cmp::Ordering;

use crate::{
  config::{
    DisplayConfig,
    StringStyle,
  },
  expr::{
    Expr,
    Number,
    TextKind,
  },
};

/// Renders `expr` the way it is shown to the user.
///
/// Leaves follow `config`; operation nodes render as `Tag.Name(a, b)` and
/// lists as `{a, b}`.
pub fn literal(expr: &Expr, config: &DisplayConfig) -> String {
  match expr {
    Expr::Text { kind, value } => {
      match kind {
        TextKind::String => {
          match config.string_style {
            StringStyle::Quoted => {
              format!("{}{value}{}", config.opening_quote, config.closing_quote)
            },
            StringStyle::Simple if value.is_empty() => "ε".to_string(),
            StringStyle::Simple => value.to_string(),
            StringStyle::Boxed => format!("[{value}]"),
          }
        },
        TextKind::Text => value.to_string(),
        TextKind::RegularExpression => format!("/{value}/"),
        TextKind::Password => config.password_mask.clone(),
      }
    },
    Expr::Url { url, description } if description.is_empty() => url.to_string(),
    Expr::Url { description, .. } => description.clone(),
    Expr::Number(Number::Integer(n)) => n.to_string(),
    Expr::Number(Number::Real(x)) => x.to_string(),
    Expr::Bool(b) => b.to_string(),
    Expr::Comparison(ordering) => {
      match ordering {
        Ordering::Less => "less",
        Ordering::Equal => "equals",
        Ordering::Greater => "greater",
      }
      .to_string()
    },
    Expr::List(items) => format!("{{{}}}", join(items, config)),
    Expr::Symbol(name) => name.clone(),
    Expr::Apply { tag, children } => format!("{tag}({})", join(children, config)),
  }
}

fn join(exprs: &[Expr], config: &DisplayConfig) -> String {
  exprs
    .iter()
    .map(|expr| literal(expr, config))
    .collect::<Vec<_>>()
    .join(", ")
}
