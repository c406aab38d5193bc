//! Grammar parser for veld source text.
//!
//! The parser never aborts: ill-formed input produces a tree with `ERROR`
//! nodes plus a list of diagnostics. A clean parse has an empty list.

use salsa::Database;
use veld_errors::Diagnostic;
use veld_green::GreenNode;

mod grammar;
mod parser;

/// A parsed source text: the green tree plus everything wrong with it.
#[derive(Debug, Clone)]
pub struct Parse<'db> {
    root: GreenNode<'db>,
    diagnostics: Vec<Diagnostic>,
}

impl<'db> Parse<'db> {
    /// The root of the tree, always a `MODULE` node.
    pub fn root(&self) -> GreenNode<'db> {
        self.root
    }

    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    pub fn into_diagnostics(self) -> Vec<Diagnostic> {
        self.diagnostics
    }
}

/// Parses a whole source text as a module.
pub fn module<'db>(db: &'db dyn Database, text: &str) -> Parse<'db> {
    let mut parser = parser::Parser::new(db, text);
    grammar::items::module(&mut parser);
    let (root, diagnostics) = parser.finish();
    Parse { root, diagnostics }
}
