use drop_bomb::DropBomb;
use salsa::Database;
use veld_errors::Diagnostic;
use veld_green::SyntaxKind::{self, EOF, ERROR, TOMBSTONE};
use veld_green::{Builder, GreenNode, SyntaxSet};
use veld_tokenizer::{Token, Tokenizer};

pub(crate) struct Parser<'db, 't> {
    db: &'db dyn Database,
    text: &'t str,
    tokenizer: Tokenizer<'t>,
    /// Trivia tokens seen before `current`, not yet placed in the tree.
    pending: Vec<Token>,
    current: Token,
    events: Vec<Event>,
    diagnostics: Vec<Diagnostic>,
}

impl<'db, 't> Parser<'db, 't> {
    pub(crate) fn new(db: &'db dyn Database, text: &'t str) -> Self {
        let mut parser = Self {
            db,
            text,
            tokenizer: Tokenizer::new(text),
            pending: Vec::new(),
            current: Token::EOF,
            events: Vec::new(),
            diagnostics: Vec::new(),
        };
        parser.refill();
        parser
    }

    fn refill(&mut self) {
        loop {
            let token = self.tokenizer.next_token();
            if token.kind.is_trivia() {
                self.pending.push(token);
            } else {
                self.current = token;
                break;
            }
        }
    }

    pub(crate) fn peek_kind(&self) -> SyntaxKind {
        self.current.kind
    }

    /// Kind of the non-trivia token after the current one.
    pub(crate) fn peek_next_kind(&self) -> SyntaxKind {
        let mut tokenizer = self.tokenizer.clone();
        loop {
            let token = tokenizer.next_token();
            if !token.kind.is_trivia() {
                return token.kind;
            }
        }
    }

    fn flush_trivia(&mut self) {
        for token in self.pending.drain(..) {
            self.events.push(Event::Token(token));
        }
    }

    pub(crate) fn advance(&mut self) {
        self.flush_trivia();

        if self.current.kind == EOF {
            return;
        }

        self.events.push(Event::Token(self.current));
        self.refill();
    }

    pub(crate) fn at(&self, kind: SyntaxKind) -> bool {
        self.peek_kind() == kind
    }

    pub(crate) fn eat(&mut self, kind: SyntaxKind) -> bool {
        if self.at(kind) {
            self.advance();
            true
        } else {
            false
        }
    }

    pub(crate) fn expect(&mut self, kind: SyntaxKind) {
        if self.eat(kind) {
            return;
        }

        match kind.static_text() {
            Some(text) => self.error(format!("expected `{text}`")),
            None => self.error(format!("expected {kind:?}")),
        }
    }

    pub(crate) fn error(&mut self, message: impl Into<String>) {
        self.diagnostics.push(Diagnostic::new(message, self.current.range));
    }

    pub(crate) fn error_and_bump(&mut self, message: &str) {
        let m = self.start();
        self.error(message);
        self.advance();
        m.complete(self, ERROR);
    }

    pub(crate) fn error_recover(&mut self, message: &str, recovery: &SyntaxSet) {
        if self.at(EOF) || recovery.contains(self.peek_kind()) {
            self.error(message);
        } else {
            self.error_and_bump(message);
        }
    }

    pub(crate) fn start(&mut self) -> Marker {
        // Trivia before a fresh node belongs to the node already open, not to
        // the one about to start. The root has no enclosing node, so its
        // leading trivia waits for the first advance.
        if !self.events.is_empty() {
            self.flush_trivia();
        }

        let pos = self.events.len() as u32;
        self.events.push(Event::TOMBSTONE);
        Marker::new(pos)
    }

    pub(crate) fn finish(self) -> (GreenNode<'db>, Vec<Diagnostic>) {
        let Self { db, text, mut events, diagnostics, .. } = self;
        let mut builder = Builder::new(db);
        let mut forward_parents = Vec::new();

        for i in 0..events.len() {
            match std::mem::replace(&mut events[i], Event::TOMBSTONE) {
                Event::Start { kind, forward_parent } => {
                    if kind == TOMBSTONE {
                        continue;
                    }

                    forward_parents.push(kind);
                    let mut idx = i;
                    let mut fp = forward_parent;
                    while let Some(fwd) = fp {
                        idx += fwd as usize;

                        fp = match std::mem::replace(&mut events[idx], Event::TOMBSTONE) {
                            Event::Start { kind, forward_parent } => {
                                if kind != TOMBSTONE {
                                    forward_parents.push(kind);
                                }
                                forward_parent
                            }
                            _ => unreachable!(),
                        };
                    }

                    for kind in forward_parents.drain(..).rev() {
                        builder.start_node(kind);
                    }
                }
                Event::Finish => builder.finish_node(),
                Event::Token(token) => builder.token(token.kind, &text[token.range]),
            }
        }

        (builder.finish(), diagnostics)
    }
}

enum Event {
    Start { kind: SyntaxKind, forward_parent: Option<u32> },
    Token(Token),
    Finish,
}

impl Event {
    const TOMBSTONE: Self = Self::Start { kind: TOMBSTONE, forward_parent: None };
}

pub(crate) struct Marker {
    position: u32,
    bomb: DropBomb,
}

impl Marker {
    fn new(pos: u32) -> Self {
        Self { position: pos, bomb: DropBomb::new("Marker must be either completed or abandoned") }
    }

    pub(crate) fn complete(mut self, p: &mut Parser<'_, '_>, kind: SyntaxKind) -> CompletedMarker {
        self.bomb.defuse();

        match &mut p.events[self.position as usize] {
            Event::Start { kind: slot, .. } => {
                *slot = kind;
            }
            _ => unreachable!(),
        }

        p.events.push(Event::Finish);
        CompletedMarker::new(self.position, kind)
    }
}

pub(crate) struct CompletedMarker {
    pos: u32,
    kind: SyntaxKind,
}

impl CompletedMarker {
    fn new(pos: u32, kind: SyntaxKind) -> Self {
        Self { pos, kind }
    }

    pub(crate) fn kind(&self) -> SyntaxKind {
        self.kind
    }

    pub(crate) fn precede(self, p: &mut Parser<'_, '_>) -> Marker {
        let new_pos = p.start();

        match &mut p.events[self.pos as usize] {
            Event::Start { forward_parent, .. } => {
                *forward_parent = Some(new_pos.position - self.pos);
            }
            _ => unreachable!(),
        }

        new_pos
    }
}
