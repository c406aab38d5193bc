use thiserror::Error;
use veld_green::SyntaxKind;

pub type Result<T, E = MakeError> = std::result::Result<T, E>;

/// Everything a constructor can refuse to build.
///
/// The variants split into two disjoint families. Construction errors mean
/// the caller handed in structurally invalid input; the fix is in the
/// caller. Reparse errors mean a synthesized wrapper failed to reparse the
/// way this library promised it would; the fix is in this library. Use
/// [`MakeError::is_internal`] to tell them apart.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MakeError {
    #[error("`{text}` is not a valid identifier")]
    InvalidName { text: String },

    #[error("`{text}` is not a valid {what} literal")]
    InvalidLiteral { what: &'static str, text: String },

    #[error("{kind:?} has no fixed spelling")]
    NoFixedText { kind: SyntaxKind },

    #[error("{kind:?} requires at least one element")]
    EmptyList { kind: SyntaxKind },

    #[error("a {context} takes a single-segment path, but `{path}` is qualified")]
    QualifiedPath { context: &'static str, path: String },

    #[error("a `use` tree cannot be both a glob and a list")]
    GlobAndList,

    #[error("failed to reparse synthesized text\n{details}")]
    Reparse { details: String },

    #[error("expected {expected} at the reparse anchor, found {found:?}")]
    ReparseKind { expected: &'static str, found: SyntaxKind },

    #[error("ambiguous reparse anchor: expected one candidate, found {count}")]
    ReparseAmbiguity { count: usize },
}

impl MakeError {
    /// `true` for the internal-invariant family: the library, not the
    /// caller, is wrong.
    pub fn is_internal(&self) -> bool {
        matches!(
            self,
            Self::Reparse { .. } | Self::ReparseKind { .. } | Self::ReparseAmbiguity { .. }
        )
    }
}
