//! Immutable, structurally shared green syntax trees.
//!
//! Nodes and tokens are interned: two trees with the same kind and the same
//! child sequence are the same value. There is no in-place mutation anywhere;
//! "editing" is constructing a new tree.

/// Typed AST wrappers around raw green nodes.
pub mod ast;
mod builder;
mod green;
mod syntax_kind;
mod syntax_set;

/// Event-stream builder for constructing green trees.
pub use builder::Builder;
/// Interned tree values.
pub use green::{Green, GreenNode, GreenToken, NodeOrToken};
/// Token and node kinds used throughout the tree.
pub use syntax_kind::SyntaxKind;
/// Compact set for grouping `SyntaxKind` values.
pub use syntax_set::SyntaxSet;
