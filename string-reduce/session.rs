use crate::{
  error::{
    NodePath,
    ReduceError,
  },
  expr::Expr,
  registry::{
    ReducerRegistry,
    Reduction,
  },
  tag::Tag,
};

/// Reduces expression trees with the reducers of a registry.
///
/// Children are reduced before their parent. A node whose reducers all
/// decline is kept as is, with its reduced children.
#[derive(Debug, Clone, Copy)]
pub struct Session<'a> {
  registry: &'a ReducerRegistry,
}

impl<'a> Session<'a> {
  pub fn new(registry: &'a ReducerRegistry) -> Self {
    Self { registry }
  }

  /// On failure the error path leads from `expr` to the node to flag.
  pub fn reduce(&self, expr: Expr) -> Result<Expr, ReduceError> {
    match expr {
      Expr::Apply { tag, children } => {
        let children = self.reduce_all(children)?;
        self.rewrite(tag, children)
      },
      Expr::List(items) => self.reduce_all(items).map(Expr::List),
      leaf => Ok(leaf),
    }
  }

  fn reduce_all(&self, exprs: Vec<Expr>) -> Result<Vec<Expr>, ReduceError> {
    exprs
      .into_iter()
      .enumerate()
      .map(|(index, expr)| self.reduce(expr).map_err(|err| err.under(index)))
      .collect()
  }

  fn rewrite(&self, tag: Tag, children: Vec<Expr>) -> Result<Expr, ReduceError> {
    let arity = tag.arity();
    if !arity.accepts(children.len()) {
      return Err(ReduceError::Arity {
        path: NodePath::new(),
        tag,
        min: arity.min,
        max: arity.max,
        actual: children.len(),
      });
    }

    let node = Expr::Apply { tag, children };
    for reducer in self.registry.get(tag) {
      match reducer(&node) {
        Ok(Reduction::Replace(result)) => {
          tracing::debug!(%tag, result = result.tag_name(), "reduced");
          return Ok(result);
        },
        Ok(Reduction::Continue) => tracing::trace!(%tag, "reducer declined"),
        Err(err) => {
          tracing::warn!(%tag, path = ?err.path(), %err, "reduction failed");
          return Err(err);
        },
      }
    }

    Ok(node)
  }
}
