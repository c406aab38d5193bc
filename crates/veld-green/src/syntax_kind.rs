#[allow(non_camel_case_types)]
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum SyntaxKind {
    LEFT_PAREN,
    RIGHT_PAREN,
    LEFT_BRACKET,
    RIGHT_BRACKET,
    LEFT_BRACE,
    RIGHT_BRACE,
    COMMA,
    SEMICOLON,
    COLON,
    DOT,
    DOT2,
    EQ,
    FAT_ARROW,
    PIPE,
    UNDERSCORE,

    PLUS,
    MINUS,
    STAR,
    SLASH,
    PERCENT,
    EQ2,
    NEQ,
    LESS,
    LESS_EQ,
    GREATER,
    GREATER_EQ,
    AMP2,
    PIPE2,
    BANG,
    QUESTION,

    FUN_KW,
    VAL_KW,
    IF_KW,
    ELSE_KW,
    MATCH_KW,
    LOOP_KW,
    WHILE_KW,
    FOR_KW,
    IN_KW,
    RETURN_KW,
    BREAK_KW,
    CONTINUE_KW,
    STRUCT_KW,
    ENUM_KW,
    USE_KW,
    TRUE_KW,
    FALSE_KW,

    NAME,
    INT_NUMBER,
    FLOAT_NUMBER,
    STRING,

    WHITESPACE,
    LINE_COMMENT,
    UNKNOWN,
    EOF,
    TOMBSTONE,
    ERROR,

    MODULE,
    FN,
    STRUCT,
    ENUM,
    USE,

    PARAM_LIST,
    PARAM,
    RETURN_TYPE,
    GENERIC_PARAM_LIST,
    TYPE_PARAM,
    GENERIC_ARG_LIST,

    RECORD_FIELD_LIST,
    RECORD_FIELD,
    TUPLE_FIELD_LIST,
    TUPLE_FIELD,
    VARIANT_LIST,
    VARIANT,
    USE_TREE,
    USE_TREE_LIST,

    PATH,
    PATH_SEGMENT,

    LITERAL,
    PATH_EXPR,
    PAREN_EXPR,
    TUPLE_EXPR,
    BINARY_EXPR,
    PREFIX_EXPR,
    POSTFIX_EXPR,
    CALL_EXPR,
    METHOD_CALL_EXPR,
    FIELD_EXPR,
    INDEX_EXPR,
    RECORD_EXPR,
    RECORD_EXPR_FIELD_LIST,
    RECORD_EXPR_FIELD,
    IF_EXPR,
    MATCH_EXPR,
    MATCH_ARM_LIST,
    MATCH_ARM,
    MATCH_GUARD,
    CLOSURE_EXPR,
    BLOCK_EXPR,
    LOOP_EXPR,
    WHILE_EXPR,
    FOR_EXPR,
    RETURN_EXPR,
    BREAK_EXPR,
    CONTINUE_EXPR,
    ARG_LIST,

    VAL_STMT,
    EXPR_STMT,

    WILDCARD_PAT,
    IDENT_PAT,
    LITERAL_PAT,
    TUPLE_PAT,
    PAREN_PAT,
    PATH_PAT,
    RECORD_PAT,
    RECORD_PAT_FIELD_LIST,
    RECORD_PAT_FIELD,
    REST_PAT,
    TUPLE_STRUCT_PAT,

    PATH_TYPE,
    TUPLE_TYPE,
    ARRAY_TYPE,
    INFER_TYPE,
}

impl SyntaxKind {
    /// Tokens skipped by the parser and carried in the tree as plain children.
    pub fn is_trivia(self) -> bool {
        matches!(self, Self::WHITESPACE | Self::LINE_COMMENT)
    }

    pub fn is_keyword(self) -> bool {
        matches!(
            self,
            Self::FUN_KW
                | Self::VAL_KW
                | Self::IF_KW
                | Self::ELSE_KW
                | Self::MATCH_KW
                | Self::LOOP_KW
                | Self::WHILE_KW
                | Self::FOR_KW
                | Self::IN_KW
                | Self::RETURN_KW
                | Self::BREAK_KW
                | Self::CONTINUE_KW
                | Self::STRUCT_KW
                | Self::ENUM_KW
                | Self::USE_KW
                | Self::TRUE_KW
                | Self::FALSE_KW
        )
    }

    pub fn from_keyword(text: &str) -> Option<Self> {
        let kind = match text {
            "fun" => Self::FUN_KW,
            "val" => Self::VAL_KW,
            "if" => Self::IF_KW,
            "else" => Self::ELSE_KW,
            "match" => Self::MATCH_KW,
            "loop" => Self::LOOP_KW,
            "while" => Self::WHILE_KW,
            "for" => Self::FOR_KW,
            "in" => Self::IN_KW,
            "return" => Self::RETURN_KW,
            "break" => Self::BREAK_KW,
            "continue" => Self::CONTINUE_KW,
            "struct" => Self::STRUCT_KW,
            "enum" => Self::ENUM_KW,
            "use" => Self::USE_KW,
            "true" => Self::TRUE_KW,
            "false" => Self::FALSE_KW,
            _ => return None,
        };
        Some(kind)
    }

    /// The canonical spelling of tokens with a fixed vocabulary.
    pub fn static_text(self) -> Option<&'static str> {
        let text = match self {
            Self::LEFT_PAREN => "(",
            Self::RIGHT_PAREN => ")",
            Self::LEFT_BRACKET => "[",
            Self::RIGHT_BRACKET => "]",
            Self::LEFT_BRACE => "{",
            Self::RIGHT_BRACE => "}",
            Self::COMMA => ",",
            Self::SEMICOLON => ";",
            Self::COLON => ":",
            Self::DOT => ".",
            Self::DOT2 => "..",
            Self::EQ => "=",
            Self::FAT_ARROW => "=>",
            Self::PIPE => "|",
            Self::UNDERSCORE => "_",
            Self::PLUS => "+",
            Self::MINUS => "-",
            Self::STAR => "*",
            Self::SLASH => "/",
            Self::PERCENT => "%",
            Self::EQ2 => "==",
            Self::NEQ => "!=",
            Self::LESS => "<",
            Self::LESS_EQ => "<=",
            Self::GREATER => ">",
            Self::GREATER_EQ => ">=",
            Self::AMP2 => "&&",
            Self::PIPE2 => "||",
            Self::BANG => "!",
            Self::QUESTION => "?",
            Self::FUN_KW => "fun",
            Self::VAL_KW => "val",
            Self::IF_KW => "if",
            Self::ELSE_KW => "else",
            Self::MATCH_KW => "match",
            Self::LOOP_KW => "loop",
            Self::WHILE_KW => "while",
            Self::FOR_KW => "for",
            Self::IN_KW => "in",
            Self::RETURN_KW => "return",
            Self::BREAK_KW => "break",
            Self::CONTINUE_KW => "continue",
            Self::STRUCT_KW => "struct",
            Self::ENUM_KW => "enum",
            Self::USE_KW => "use",
            Self::TRUE_KW => "true",
            Self::FALSE_KW => "false",
            _ => return None,
        };
        Some(text)
    }

    pub fn is_expr(self) -> bool {
        matches!(
            self,
            Self::LITERAL
                | Self::PATH_EXPR
                | Self::PAREN_EXPR
                | Self::TUPLE_EXPR
                | Self::BINARY_EXPR
                | Self::PREFIX_EXPR
                | Self::POSTFIX_EXPR
                | Self::CALL_EXPR
                | Self::METHOD_CALL_EXPR
                | Self::FIELD_EXPR
                | Self::INDEX_EXPR
                | Self::RECORD_EXPR
                | Self::IF_EXPR
                | Self::MATCH_EXPR
                | Self::CLOSURE_EXPR
                | Self::BLOCK_EXPR
                | Self::LOOP_EXPR
                | Self::WHILE_EXPR
                | Self::FOR_EXPR
                | Self::RETURN_EXPR
                | Self::BREAK_EXPR
                | Self::CONTINUE_EXPR
        )
    }

    pub fn is_pat(self) -> bool {
        matches!(
            self,
            Self::WILDCARD_PAT
                | Self::IDENT_PAT
                | Self::LITERAL_PAT
                | Self::TUPLE_PAT
                | Self::PAREN_PAT
                | Self::PATH_PAT
                | Self::RECORD_PAT
                | Self::REST_PAT
                | Self::TUPLE_STRUCT_PAT
        )
    }

    pub fn is_type(self) -> bool {
        matches!(self, Self::PATH_TYPE | Self::TUPLE_TYPE | Self::ARRAY_TYPE | Self::INFER_TYPE)
    }

    pub fn is_item(self) -> bool {
        matches!(self, Self::FN | Self::STRUCT | Self::ENUM | Self::USE)
    }

    pub fn is_stmt(self) -> bool {
        matches!(self, Self::VAL_STMT | Self::EXPR_STMT)
    }
}
