//! Leaf token synthesis.
//!
//! Fixed-vocabulary tokens come from the kind's canonical spelling; free-form
//! tokens (names, literals) are validated by running the tokenizer over the
//! candidate text. Tokens are interned, so equal requests yield the identical
//! token.

use salsa::Database;
use veld_green::SyntaxKind::{self, *};
use veld_green::GreenToken;
use veld_tokenizer::Tokenizer;

use crate::error::{MakeError, Result};

/// A token of a fixed-vocabulary kind: keyword, punctuation, or operator.
pub fn token<'db>(db: &'db dyn Database, kind: SyntaxKind) -> Result<GreenToken<'db>> {
    match kind.static_text() {
        Some(text) => Ok(GreenToken::new(db, kind, Box::<str>::from(text))),
        None => Err(MakeError::NoFixedText { kind }),
    }
}

/// Fixed token for kinds the assemblers know have a canonical spelling.
pub(crate) fn fixed<'db>(db: &'db dyn Database, kind: SyntaxKind) -> GreenToken<'db> {
    match kind.static_text() {
        Some(text) => GreenToken::new(db, kind, Box::<str>::from(text)),
        None => panic!("{kind:?} has no fixed spelling"),
    }
}

pub fn name<'db>(db: &'db dyn Database, text: &str) -> Result<GreenToken<'db>> {
    if !is_valid_name(text) {
        return Err(MakeError::InvalidName { text: text.to_string() });
    }

    Ok(GreenToken::new(db, NAME, Box::<str>::from(text)))
}

fn is_valid_name(text: &str) -> bool {
    if text == "_" || SyntaxKind::from_keyword(text).is_some() {
        return false;
    }

    let mut chars = text.chars();
    let Some(first) = chars.next() else { return false };

    (first.is_ascii_alphabetic() || first == '_')
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

/// Validates `text` by tokenizing it: it must lex as exactly one token of
/// the expected kind, covering the whole input.
fn lexed_exactly<'db>(
    db: &'db dyn Database,
    kinds: &[SyntaxKind],
    what: &'static str,
    text: &str,
) -> Result<GreenToken<'db>> {
    let mut tokenizer = Tokenizer::new(text);
    let token = tokenizer.next_token();

    if kinds.contains(&token.kind)
        && tokenizer.is_eof()
        && usize::from(token.range.len()) == text.len()
    {
        Ok(GreenToken::new(db, token.kind, Box::<str>::from(text)))
    } else {
        Err(MakeError::InvalidLiteral { what, text: text.to_string() })
    }
}

pub fn int_number<'db>(db: &'db dyn Database, text: &str) -> Result<GreenToken<'db>> {
    lexed_exactly(db, &[INT_NUMBER], "integer", text)
}

pub fn float_number<'db>(db: &'db dyn Database, text: &str) -> Result<GreenToken<'db>> {
    lexed_exactly(db, &[FLOAT_NUMBER], "float", text)
}

/// Any literal token: a number, a string, or a boolean keyword.
pub fn literal<'db>(db: &'db dyn Database, text: &str) -> Result<GreenToken<'db>> {
    lexed_exactly(db, &[INT_NUMBER, FLOAT_NUMBER, STRING, TRUE_KW, FALSE_KW], "literal", text)
}

/// A string literal token holding `value`, quoted and escaped.
pub fn string<'db>(db: &'db dyn Database, value: &str) -> GreenToken<'db> {
    let mut text = String::with_capacity(value.len() + 2);
    text.push('"');
    for c in value.chars() {
        match c {
            '"' => text.push_str("\\\""),
            '\\' => text.push_str("\\\\"),
            '\n' => text.push_str("\\n"),
            '\t' => text.push_str("\\t"),
            _ => text.push(c),
        }
    }
    text.push('"');

    GreenToken::new(db, STRING, Box::<str>::from(text))
}

pub fn whitespace<'db>(db: &'db dyn Database, text: &str) -> Result<GreenToken<'db>> {
    if text.is_empty() || !text.chars().all(char::is_whitespace) {
        return Err(MakeError::InvalidLiteral { what: "whitespace", text: text.to_string() });
    }

    Ok(GreenToken::new(db, WHITESPACE, Box::<str>::from(text)))
}

pub fn single_space<'db>(db: &'db dyn Database) -> GreenToken<'db> {
    GreenToken::new(db, WHITESPACE, Box::<str>::from(" "))
}

pub fn newline<'db>(db: &'db dyn Database) -> GreenToken<'db> {
    GreenToken::new(db, WHITESPACE, Box::<str>::from("\n"))
}

pub(crate) fn blank_line<'db>(db: &'db dyn Database) -> GreenToken<'db> {
    GreenToken::new(db, WHITESPACE, Box::<str>::from("\n\n"))
}

/// A `// ...` comment token; the text must not span lines.
pub fn line_comment<'db>(db: &'db dyn Database, text: &str) -> Result<GreenToken<'db>> {
    if text.contains('\n') {
        return Err(MakeError::InvalidLiteral { what: "line comment", text: text.to_string() });
    }

    Ok(GreenToken::new(db, LINE_COMMENT, Box::<str>::from(format!("// {text}"))))
}

#[cfg(test)]
mod tests {
    use salsa::DatabaseImpl;

    use super::*;

    #[test]
    fn fixed_tokens_have_canonical_spelling() {
        let db = DatabaseImpl::new();

        assert_eq!(token(&db, FAT_ARROW).unwrap().text(&db).as_ref(), "=>");
        assert_eq!(token(&db, FUN_KW).unwrap().text(&db).as_ref(), "fun");
        assert_eq!(token(&db, NAME), Err(MakeError::NoFixedText { kind: NAME }));
    }

    #[test]
    fn names_are_validated() {
        let db = DatabaseImpl::new();

        assert!(name(&db, "x").is_ok());
        assert!(name(&db, "snake_case_2").is_ok());
        assert!(name(&db, "_leading").is_ok());

        assert!(name(&db, "").is_err());
        assert!(name(&db, "_").is_err());
        assert!(name(&db, "fun").is_err());
        assert!(name(&db, "1abc").is_err());
        assert!(name(&db, "has space").is_err());
    }

    #[test]
    fn numbers_are_validated_by_the_tokenizer() {
        let db = DatabaseImpl::new();

        assert!(int_number(&db, "42").is_ok());
        assert!(int_number(&db, "0x2a").is_ok());
        assert!(int_number(&db, "4 2").is_err());
        assert!(int_number(&db, "4.2").is_err());
        assert!(float_number(&db, "4.2").is_ok());
        assert!(float_number(&db, "abc").is_err());
    }

    #[test]
    fn strings_are_escaped() {
        let db = DatabaseImpl::new();

        assert_eq!(string(&db, "plain").text(&db).as_ref(), "\"plain\"");
        assert_eq!(string(&db, "a\"b\\c\n").text(&db).as_ref(), "\"a\\\"b\\\\c\\n\"");
    }

    #[test]
    fn same_request_interns_to_the_same_token() {
        let db = DatabaseImpl::new();

        assert_eq!(name(&db, "x").unwrap(), name(&db, "x").unwrap());
        assert_eq!(token(&db, PLUS).unwrap(), token(&db, PLUS).unwrap());
    }
}
