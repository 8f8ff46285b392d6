use std::{
  collections::HashMap,
  sync::Arc,
};

use crate::{
  error::ReduceError,
  expr::Expr,
  tag::Tag,
};

/// Outcome of a single reducer.
#[derive(Debug, Clone, PartialEq)]
pub enum Reduction {
  /// Not applicable here; try the next reducer for the tag.
  Continue,
  /// The node reduces to this expression.
  Replace(Expr),
}

pub type ReduceResult = Result<Reduction, ReduceError>;
pub type DynReducer = Arc<dyn Fn(&Expr) -> ReduceResult + Send + Sync>;

/// Reducer chains keyed by tag. Reducers for one tag run in registration
/// order until one of them replaces the node.
#[derive(Clone, Default)]
pub struct ReducerRegistry {
  reducers: HashMap<Tag, Vec<DynReducer>>,
}

impl std::fmt::Debug for ReducerRegistry {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.debug_map()
      .entries(self.reducers.iter().map(|(tag, chain)| (tag, chain.len())))
      .finish()
  }
}

impl ReducerRegistry {
  pub fn new() -> Self {
    Self {
      reducers: HashMap::new(),
    }
  }

  /// A registry with every string package rule installed.
  pub fn with_string_rules() -> Self {
    let mut registry = Self::new();
    crate::rules::register(&mut registry);
    registry
  }

  /// Appends `reducer` to the chain for `tag`.
  pub fn add<F>(&mut self, tag: Tag, reducer: F)
  where
    F: Fn(&Expr) -> ReduceResult + Send + Sync + 'static,
  {
    self.reducers.entry(tag).or_default().push(Arc::new(reducer));
  }

  pub fn get(&self, tag: Tag) -> &[DynReducer] {
    self.reducers.get(&tag).map(Vec::as_slice).unwrap_or(&[])
  }

  pub fn contains(&self, tag: Tag) -> bool {
    !self.get(tag).is_empty()
  }

  pub fn remove(&mut self, tag: Tag) -> Option<Vec<DynReducer>> {
    self.reducers.remove(&tag)
  }
}
