use thiserror::Error;

/// The failure category of a [`CalcError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Unrecognized character or malformed numeric literal.
    Lex,
    /// Unexpected token, unmatched parenthesis, trailing input or empty expression.
    Parse,
    /// Function name not present in the registry.
    Name,
    /// Function called with the wrong number of arguments.
    Arity,
    /// Division by an exact zero.
    Arithmetic,
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum CalcError {
    #[error("unexpected character '{ch}' at position {pos}")]
    UnexpectedChar { ch: char, pos: usize },
    #[error("malformed number '{lexeme}' at position {pos}")]
    MalformedNumber { lexeme: String, pos: usize },
    #[error("empty expression")]
    EmptyExpression { pos: usize },
    #[error("unexpected {found} at position {pos}, expected {expected}")]
    UnexpectedToken {
        found: String,
        expected: &'static str,
        pos: usize,
    },
    #[error("trailing input {found} at position {pos}")]
    TrailingInput { found: String, pos: usize },
    #[error("expression nested too deeply at position {pos}")]
    TooDeeplyNested { pos: usize },
    #[error("unknown function: {0}")]
    UnknownFunction(String),
    #[error("invalid function signature for {name}")]
    InvalidSignature { name: String, expected: u8, got: usize },
    #[error("division by zero")]
    DivisionByZero,
}

impl CalcError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            CalcError::UnexpectedChar { .. } | CalcError::MalformedNumber { .. } => ErrorKind::Lex,
            CalcError::EmptyExpression { .. }
            | CalcError::UnexpectedToken { .. }
            | CalcError::TrailingInput { .. }
            | CalcError::TooDeeplyNested { .. } => ErrorKind::Parse,
            CalcError::UnknownFunction(_) => ErrorKind::Name,
            CalcError::InvalidSignature { .. } => ErrorKind::Arity,
            CalcError::DivisionByZero => ErrorKind::Arithmetic,
        }
    }

    /// Byte offset into the input, for lexer and parser errors.
    pub fn position(&self) -> Option<usize> {
        match self {
            CalcError::UnexpectedChar { pos, .. }
            | CalcError::MalformedNumber { pos, .. }
            | CalcError::EmptyExpression { pos }
            | CalcError::UnexpectedToken { pos, .. }
            | CalcError::TrailingInput { pos, .. }
            | CalcError::TooDeeplyNested { pos } => Some(*pos),
            CalcError::UnknownFunction(_)
            | CalcError::InvalidSignature { .. }
            | CalcError::DivisionByZero => None,
        }
    }
}
