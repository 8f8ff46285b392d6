//! Reduction rules for the string package.
//!
//! Expressions are trees of [`Expr`] nodes. Operation nodes carry a [`Tag`]
//! and are rewritten by the reducers registered for that tag in a
//! [`ReducerRegistry`]; a [`Session`] walks a tree bottom-up and applies
//! them.
//!
//! ```
//! use formulae_string_reduce::{
//!   Expr,
//!   ReducerRegistry,
//!   Session,
//!   Tag,
//! };
//!
//! let registry = ReducerRegistry::with_string_rules();
//! let session = Session::new(&registry);
//!
//! let expr = Expr::apply(Tag::Substring, vec![Expr::string("hello"), Expr::integer(-3)]);
//! assert_eq!(session.reduce(expr).unwrap(), Expr::string("llo"));
//! ```

pub mod config;
pub mod display;
pub mod edit;
pub mod error;
pub mod expr;
pub mod registry;
pub mod rules;
pub mod session;
pub mod tag;

pub use config::{
  Config,
  ConfigLoadError,
  DisplayConfig,
  StringStyle,
};
pub use error::{
  EditError,
  Expected,
  NodePath,
  ReduceError,
};
pub use expr::{
  Expr,
  Number,
  TextKind,
};
pub use formulae_string_core as string_core;
pub use registry::{
  DynReducer,
  Reduction,
  ReducerRegistry,
};
pub use session::Session;
pub use tag::{
  Arity,
  Tag,
};
