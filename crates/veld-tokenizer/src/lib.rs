//! Hand-written tokenizer for veld source text.
//!
//! Trivia (whitespace and line comments) come out of the stream as ordinary
//! tokens; deciding where they belong in the tree is the parser's business.

mod cursor;

use cursor::{Cursor, EOF_CHAR};
use text_size::{TextRange, TextSize};
pub use veld_green::SyntaxKind;
use veld_green::SyntaxKind::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token {
    pub kind: SyntaxKind,
    pub range: TextRange,
}

impl Token {
    pub const EOF: Self = Self { kind: EOF, range: TextRange::empty(TextSize::new(0)) };
}

#[derive(Clone)]
pub struct Tokenizer<'t> {
    text: &'t str,
    cursor: Cursor<'t>,
}

impl<'t> Tokenizer<'t> {
    pub fn new(text: &'t str) -> Self {
        Self { text, cursor: Cursor::new(text) }
    }

    pub fn is_eof(&self) -> bool {
        self.cursor.is_eof()
    }

    fn offset(&self) -> TextSize {
        TextSize::new(self.text.len() as u32) - self.cursor.len()
    }

    fn range(&self) -> TextRange {
        let end = self.offset();
        let len = self.cursor.pos_within_token();
        TextRange::at(end - len, len)
    }

    fn text(&self) -> &'t str {
        let range: std::ops::Range<usize> = self.range().into();
        &self.text[range]
    }

    /// Returns the next token, including trivia tokens.
    pub fn next_token(&mut self) -> Token {
        let kind = self.syntax_kind();
        let range = self.range();
        self.cursor.reset_pos_within_token();
        Token { kind, range }
    }

    fn syntax_kind(&mut self) -> SyntaxKind {
        match self.cursor.advance() {
            c if c.is_whitespace() => {
                self.cursor.advance_while(char::is_whitespace);
                WHITESPACE
            }
            '/' if self.cursor.matches('/') => {
                self.cursor.advance_while(|c| c != '\n');
                LINE_COMMENT
            }
            '(' => LEFT_PAREN,
            ')' => RIGHT_PAREN,
            '[' => LEFT_BRACKET,
            ']' => RIGHT_BRACKET,
            '{' => LEFT_BRACE,
            '}' => RIGHT_BRACE,
            ',' => COMMA,
            ';' => SEMICOLON,
            ':' => COLON,
            '.' => {
                if self.cursor.matches('.') {
                    self.cursor.advance();
                    DOT2
                } else {
                    DOT
                }
            }
            '=' => match self.cursor.peek() {
                '=' => {
                    self.cursor.advance();
                    EQ2
                }
                '>' => {
                    self.cursor.advance();
                    FAT_ARROW
                }
                _ => EQ,
            },
            '!' => {
                if self.cursor.matches('=') {
                    self.cursor.advance();
                    NEQ
                } else {
                    BANG
                }
            }
            '<' => {
                if self.cursor.matches('=') {
                    self.cursor.advance();
                    LESS_EQ
                } else {
                    LESS
                }
            }
            '>' => {
                if self.cursor.matches('=') {
                    self.cursor.advance();
                    GREATER_EQ
                } else {
                    GREATER
                }
            }
            '&' => {
                if self.cursor.matches('&') {
                    self.cursor.advance();
                    AMP2
                } else {
                    UNKNOWN
                }
            }
            '|' => {
                if self.cursor.matches('|') {
                    self.cursor.advance();
                    PIPE2
                } else {
                    PIPE
                }
            }
            '+' => PLUS,
            '-' => MINUS,
            '*' => STAR,
            '/' => SLASH,
            '%' => PERCENT,
            '?' => QUESTION,
            '"' => self.string(),
            first_char @ '0'..='9' => self.number(first_char),
            'A'..='Z' | 'a'..='z' | '_' => {
                self.cursor.advance_while(|c| c.is_ascii_alphanumeric() || c == '_');

                match self.text() {
                    "_" => UNDERSCORE,
                    text => SyntaxKind::from_keyword(text).unwrap_or(NAME),
                }
            }
            EOF_CHAR if self.cursor.is_eof() => EOF,
            _ => UNKNOWN,
        }
    }

    fn string(&mut self) -> SyntaxKind {
        loop {
            match self.cursor.peek() {
                EOF_CHAR if self.cursor.is_eof() => break,
                '"' => {
                    self.cursor.advance();
                    break;
                }
                '\\' => {
                    self.cursor.advance();
                    self.cursor.advance();
                }
                _ => {
                    self.cursor.advance();
                }
            }
        }

        STRING
    }

    fn number(&mut self, c: char) -> SyntaxKind {
        if c == '0' {
            match self.cursor.peek() {
                'b' | 'o' => {
                    self.cursor.advance();
                    self.digits(false);
                }
                'x' => {
                    self.cursor.advance();
                    self.digits(true);
                }
                '0'..='9' | '_' | '.' | 'e' | 'E' => {
                    self.digits(false);
                }
                _ => return INT_NUMBER,
            }
        } else {
            self.digits(false);
        }

        if self.cursor.matches('.') && self.cursor.second() != '.' {
            self.cursor.advance();
            self.digits(false);
            self.float_exponent();
            return FLOAT_NUMBER;
        }

        if self.cursor.matches('e') || self.cursor.matches('E') {
            self.float_exponent();
            return FLOAT_NUMBER;
        }

        INT_NUMBER
    }

    fn digits(&mut self, allow_hex: bool) {
        loop {
            match self.cursor.peek() {
                '_' | '0'..='9' => {
                    self.cursor.advance();
                }
                'a'..='f' | 'A'..='F' if allow_hex => {
                    self.cursor.advance();
                }
                _ => return,
            }
        }
    }

    fn float_exponent(&mut self) {
        if self.cursor.matches('e') || self.cursor.matches('E') {
            self.cursor.advance();
            if self.cursor.matches('-') || self.cursor.matches('+') {
                self.cursor.advance();
            }
            self.digits(false);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(text: &str) -> Vec<SyntaxKind> {
        let mut tokenizer = Tokenizer::new(text);
        let mut kinds = Vec::new();

        loop {
            let token = tokenizer.next_token();
            if token.kind == EOF {
                break;
            }
            kinds.push(token.kind);
        }

        kinds
    }

    fn token_text<'a>(token: &Token, text: &'a str) -> &'a str {
        &text[token.range]
    }

    #[test]
    fn integer_literals() {
        for input in ["123", "0", "0b1010", "0o755", "0x1f", "123_456"] {
            let mut tokenizer = Tokenizer::new(input);
            let token = tokenizer.next_token();
            assert_eq!(token.kind, INT_NUMBER, "input: {input:?}");
            assert_eq!(token_text(&token, input), input);
            assert!(tokenizer.is_eof(), "did not consume all of {input:?}");
        }
    }

    #[test]
    fn float_literals() {
        for input in ["123.456", "0.0", "1e10", "1.0e-5", "123_456.789_012"] {
            let mut tokenizer = Tokenizer::new(input);
            let token = tokenizer.next_token();
            assert_eq!(token.kind, FLOAT_NUMBER, "input: {input:?}");
            assert!(tokenizer.is_eof(), "did not consume all of {input:?}");
        }
    }

    #[test]
    fn keywords_and_names() {
        assert_eq!(kinds("fun main"), [FUN_KW, WHITESPACE, NAME]);
        assert_eq!(kinds("value"), [NAME]);
        assert_eq!(kinds("val _ x_1"), [VAL_KW, WHITESPACE, UNDERSCORE, WHITESPACE, NAME]);
        assert_eq!(kinds("true false"), [TRUE_KW, WHITESPACE, FALSE_KW]);
    }

    #[test]
    fn maximal_munch_operators() {
        assert_eq!(kinds("= == => ="), [EQ, WHITESPACE, EQ2, WHITESPACE, FAT_ARROW, WHITESPACE, EQ]);
        assert_eq!(kinds("<=>="), [LESS_EQ, GREATER_EQ]);
        assert_eq!(kinds("!a != b"), [BANG, NAME, WHITESPACE, NEQ, WHITESPACE, NAME]);
        assert_eq!(kinds("| ||"), [PIPE, WHITESPACE, PIPE2]);
        assert_eq!(kinds("a..b"), [NAME, DOT2, NAME]);
        assert_eq!(kinds("a.b"), [NAME, DOT, NAME]);
    }

    #[test]
    fn strings_and_escapes() {
        let text = r#""hello" "a\"b""#;
        let mut tokenizer = Tokenizer::new(text);

        let token = tokenizer.next_token();
        assert_eq!(token.kind, STRING);
        assert_eq!(token_text(&token, text), r#""hello""#);

        let token = tokenizer.next_token();
        assert_eq!(token.kind, WHITESPACE);

        let token = tokenizer.next_token();
        assert_eq!(token.kind, STRING);
        assert_eq!(token_text(&token, text), r#""a\"b""#);
    }

    #[test]
    fn comments_are_single_tokens() {
        let text = "1 // one\n2";
        assert_eq!(
            kinds(text),
            [INT_NUMBER, WHITESPACE, LINE_COMMENT, WHITESPACE, INT_NUMBER]
        );
    }

    #[test]
    fn slash_is_not_a_comment() {
        assert_eq!(kinds("a / b"), [NAME, WHITESPACE, SLASH, WHITESPACE, NAME]);
    }

    #[test]
    fn lone_ampersand_is_unknown() {
        assert_eq!(kinds("a & b"), [NAME, WHITESPACE, UNKNOWN, WHITESPACE, NAME]);
        assert_eq!(kinds("a && b"), [NAME, WHITESPACE, AMP2, WHITESPACE, NAME]);
    }
}
