//! Stack builder turning a flat start/token/finish event stream into an
//! interned green tree.

use salsa::Database;

use crate::{Green, GreenNode, GreenToken, SyntaxKind};

pub struct Builder<'db> {
    db: &'db dyn Database,
    parents: Vec<(SyntaxKind, usize)>,
    children: Vec<Green<'db>>,
}

impl<'db> Builder<'db> {
    pub fn new(db: &'db dyn Database) -> Self {
        Self { db, parents: Vec::with_capacity(16), children: Vec::with_capacity(64) }
    }

    /// Starts a new node of the given kind.
    pub fn start_node(&mut self, kind: SyntaxKind) {
        self.parents.push((kind, self.children.len()));
    }

    /// Finishes the most recently started node.
    pub fn finish_node(&mut self) {
        let (kind, first_child) = self.parents.pop().expect("no started nodes?");
        let children = self.children.split_off(first_child);
        let node = GreenNode::new(self.db, kind, children);
        self.children.push(Green::Node(node));
    }

    /// Adds a token to the current node.
    pub fn token(&mut self, kind: SyntaxKind, text: &str) {
        let token = GreenToken::new(self.db, kind, Box::<str>::from(text));
        self.children.push(Green::Token(token));
    }

    /// Finishes building and returns the root node.
    pub fn finish(mut self) -> GreenNode<'db> {
        assert!(self.parents.is_empty(), "unfinished nodes at the end of the build");
        assert_eq!(self.children.len(), 1, "expected exactly one root node");
        match self.children.pop() {
            Some(Green::Node(root)) => root,
            _ => panic!("the root must be a node, not a token"),
        }
    }
}
