//! Internal child-sequence assembly with table-driven spacing.
//!
//! Invariant: an assembled node never starts or ends with whitespace of its
//! own. Spacing between siblings is decided here, at the juncture, so it can
//! never double up.

use salsa::Database;
use veld_green::ast::Node;
use veld_green::{Green, GreenNode, GreenToken, SyntaxKind};

use crate::prec::{self, Spacing};
use crate::tokens;

pub(crate) struct NodeBuilder<'db> {
    db: &'db dyn Database,
    kind: SyntaxKind,
    children: Vec<Green<'db>>,
    pending_space: bool,
}

impl<'db> NodeBuilder<'db> {
    pub(crate) fn new(db: &'db dyn Database, kind: SyntaxKind) -> Self {
        Self { db, kind, children: Vec::new(), pending_space: false }
    }

    fn flush_space(&mut self) {
        if std::mem::take(&mut self.pending_space) && !self.children.is_empty() {
            self.children.push(Green::Token(tokens::single_space(self.db)));
        }
    }

    /// A fixed-vocabulary token, spaced according to the formatting table.
    pub(crate) fn fixed(&mut self, kind: SyntaxKind) {
        let spacing = prec::spacing(kind);

        match spacing {
            Spacing::Before | Spacing::Around if !self.children.is_empty() => {
                self.pending_space = true;
            }
            Spacing::Tight => self.pending_space = false,
            _ => {}
        }

        self.flush_space();
        self.children.push(Green::Token(tokens::fixed(self.db, kind)));

        if matches!(spacing, Spacing::After | Spacing::Around) {
            self.pending_space = true;
        }
    }

    /// A fixed token with no implicit spacing, for positions where the
    /// table's default does not apply (prefix operators, closure pipes).
    pub(crate) fn fixed_tight(&mut self, kind: SyntaxKind) {
        self.flush_space();
        self.children.push(Green::Token(tokens::fixed(self.db, kind)));
    }

    pub(crate) fn token(&mut self, token: GreenToken<'db>) {
        self.flush_space();
        self.children.push(Green::Token(token));
    }

    pub(crate) fn node(&mut self, node: GreenNode<'db>) {
        self.flush_space();
        self.children.push(Green::Node(node));
    }

    /// Requests a space before whatever comes next.
    pub(crate) fn space(&mut self) {
        if !self.children.is_empty() {
            self.pending_space = true;
        }
    }

    /// Appends children verbatim, preserving their own spacing.
    pub(crate) fn extend_raw(&mut self, children: impl IntoIterator<Item = Green<'db>>) {
        self.flush_space();
        self.children.extend(children);
    }

    pub(crate) fn finish(self) -> GreenNode<'db> {
        GreenNode::new(self.db, self.kind, self.children)
    }

    pub(crate) fn finish_cast<N: Node<'db>>(self) -> N {
        let db = self.db;
        cast_node(db, self.finish())
    }
}

/// Wraps a node whose kind is known by construction to fit `N`.
pub(crate) fn cast_node<'db, N: Node<'db>>(db: &'db dyn Database, node: GreenNode<'db>) -> N {
    match N::cast(db, node) {
        Some(typed) => typed,
        None => unreachable!("assembled a node that does not cast to its own category"),
    }
}
