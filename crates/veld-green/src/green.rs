use salsa::Database;
use text_size::TextSize;

use crate::SyntaxKind;

/// Either branch of the tree: an inner node or a leaf token.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum NodeOrToken<N, T> {
    Node(N),
    Token(T),
}

impl<N, T> NodeOrToken<N, T> {
    pub fn into_node(self) -> Option<N> {
        match self {
            Self::Node(node) => Some(node),
            Self::Token(_) => None,
        }
    }

    pub fn into_token(self) -> Option<T> {
        match self {
            Self::Node(_) => None,
            Self::Token(token) => Some(token),
        }
    }
}

pub type Green<'db> = NodeOrToken<GreenNode<'db>, GreenToken<'db>>;

impl<'db> Green<'db> {
    pub fn kind(self, db: &'db dyn Database) -> SyntaxKind {
        match self {
            NodeOrToken::Node(node) => node.kind(db),
            NodeOrToken::Token(token) => token.kind(db),
        }
    }

    pub fn text_len(self, db: &'db dyn Database) -> TextSize {
        match self {
            NodeOrToken::Node(node) => node.text_len(db),
            NodeOrToken::Token(token) => TextSize::new(token.text(db).len() as u32),
        }
    }
}

#[salsa::interned(constructor = alloc, debug)]
pub struct GreenNode<'db> {
    pub kind: SyntaxKind,
    #[returns(ref)]
    pub children: Vec<Green<'db>>,
    pub text_len: TextSize,
}

impl<'db> GreenNode<'db> {
    pub fn new(db: &'db dyn Database, kind: SyntaxKind, children: Vec<Green<'db>>) -> Self {
        let text_len: TextSize = children.iter().map(|child| child.text_len(db)).sum();
        Self::alloc(db, kind, children, text_len)
    }

    pub fn child_nodes(self, db: &'db dyn Database) -> impl Iterator<Item = Self> + 'db {
        self.children(db).iter().copied().filter_map(Green::into_node)
    }

    pub fn child_tokens(self, db: &'db dyn Database) -> impl Iterator<Item = GreenToken<'db>> + 'db {
        self.children(db).iter().copied().filter_map(Green::into_token)
    }

    /// The exact source text this node renders to.
    pub fn text(self, db: &'db dyn Database) -> String {
        let mut buf = String::with_capacity(self.text_len(db).into());
        self.write_text(db, &mut buf);
        buf
    }

    fn write_text(self, db: &'db dyn Database, buf: &mut String) {
        for child in self.children(db) {
            match *child {
                NodeOrToken::Node(node) => node.write_text(db, buf),
                NodeOrToken::Token(token) => buf.push_str(token.text(db)),
            }
        }
    }

    /// Indented kind tree with token text, for snapshot tests.
    pub fn debug_dump(self, db: &'db dyn Database) -> String {
        let mut buf = String::new();
        self.dump_into(db, &mut buf, 0);
        buf
    }

    fn dump_into(self, db: &'db dyn Database, buf: &mut String, depth: usize) {
        use std::fmt::Write as _;

        _ = writeln!(buf, "{:indent$}{:?}", "", self.kind(db), indent = depth * 2);
        for child in self.children(db) {
            match *child {
                NodeOrToken::Node(node) => node.dump_into(db, buf, depth + 1),
                NodeOrToken::Token(token) => {
                    _ = writeln!(
                        buf,
                        "{:indent$}{:?} {:?}",
                        "",
                        token.kind(db),
                        token.text(db),
                        indent = (depth + 1) * 2
                    );
                }
            }
        }
    }
}

#[salsa::interned(debug)]
pub struct GreenToken<'db> {
    pub kind: SyntaxKind,
    #[returns(ref)]
    pub text: Box<str>,
}

#[cfg(test)]
mod tests {
    use salsa::DatabaseImpl;

    use super::*;
    use crate::SyntaxKind::*;

    #[test]
    fn identical_nodes_intern_to_one() {
        let db = DatabaseImpl::new();

        let one = GreenToken::new(&db, INT_NUMBER, Box::<str>::from("1"));
        let lhs = GreenNode::new(&db, LITERAL, vec![NodeOrToken::Token(one)]);
        let rhs = GreenNode::new(&db, LITERAL, vec![NodeOrToken::Token(one)]);

        assert_eq!(lhs, rhs);
        assert_eq!(lhs.text_len(&db), TextSize::new(1));
    }

    #[test]
    fn text_concatenates_tokens_in_order() {
        let db = DatabaseImpl::new();

        let literal = GreenNode::new(
            &db,
            LITERAL,
            vec![NodeOrToken::Token(GreenToken::new(&db, INT_NUMBER, Box::<str>::from("42")))],
        );
        let node = GreenNode::new(
            &db,
            PAREN_EXPR,
            vec![
                NodeOrToken::Token(GreenToken::new(&db, LEFT_PAREN, Box::<str>::from("("))),
                NodeOrToken::Node(literal),
                NodeOrToken::Token(GreenToken::new(&db, RIGHT_PAREN, Box::<str>::from(")"))),
            ],
        );

        assert_eq!(node.text(&db), "(42)");
        assert_eq!(node.text_len(&db), TextSize::new(4));
    }
}
