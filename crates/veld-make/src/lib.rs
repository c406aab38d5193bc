//! Constructors for well-formed veld syntax fragments.
//!
//! Every function here builds a detached green node from structured inputs,
//! never from raw text (the [`fragment`] module is the one deliberate
//! exception). The contract is token-exact structural correctness: render
//! any constructed node to text and the grammar parser gives back a tree of
//! the same shape, with delimiters, separators, spacing, and precedence
//! parentheses already right.
//!
//! Construction is pure and synchronous. Nodes are interned, so identical
//! requests return the identical node, from any thread, with no locking.

pub use veld_green::ast;

mod builder;
mod error;
mod exprs;
pub mod fragment;
mod items;
mod lists;
mod paths;
mod pats;
mod prec;
pub mod tokens;
mod types;

pub use error::{MakeError, Result};
pub use exprs::*;
pub use items::*;
pub use lists::*;
pub use paths::*;
pub use pats::*;
pub use prec::{
    Assoc, BinOp, POSTFIX_PRECEDENCE, PREFIX_PRECEDENCE, UnaryOp, precedence_of,
};
pub use types::*;
