// error.rs - Error types for lockstep.
//
// Parsing is the only fallible stage: compilation is total over parsed
// trees and matching is total over compiled automata.

use std::fmt;

/// The specific reason a pattern failed to parse.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyntaxErrorKind {
    /// A byte outside the supported alphabet and operator set.
    UnexpectedCharacter(u8),
    /// A `(` without its closing `)`.
    UnmatchedOpenParenthesis,
    /// A `)` without an opening `(`.
    UnmatchedCloseParenthesis,
    /// A quantifier with no preceding unit, as in `*a` or `(?a)`.
    TargetOfRepeatNotSpecified,
    /// A quantifier applied to a quantifier, as in `a**`.
    NestedRepeatOperator,
    /// An alternation with an empty side, as in `a|` or `|a`.
    EmptyAlternative,
    /// A group with nothing inside, `()`.
    EmptyGroup,
    /// `^` anywhere but the first byte, or `$` inside a group.
    MisplacedAnchor,
    /// Pattern text following the `$` end anchor.
    TrailingAfterEndAnchor,
}

impl SyntaxErrorKind {
    /// Human-readable description of the error kind.
    pub fn message(&self) -> String {
        match self {
            SyntaxErrorKind::UnexpectedCharacter(b) => {
                if b.is_ascii_graphic() || *b == b' ' {
                    format!("unexpected character '{}'", *b as char)
                } else {
                    format!("unexpected byte \\x{:02x}", b)
                }
            }
            SyntaxErrorKind::UnmatchedOpenParenthesis => {
                "end pattern with unmatched parenthesis".to_string()
            }
            SyntaxErrorKind::UnmatchedCloseParenthesis => {
                "unmatched close parenthesis".to_string()
            }
            SyntaxErrorKind::TargetOfRepeatNotSpecified => {
                "target of repeat operator is not specified".to_string()
            }
            SyntaxErrorKind::NestedRepeatOperator => "nested repeat operator".to_string(),
            SyntaxErrorKind::EmptyAlternative => "empty alternative".to_string(),
            SyntaxErrorKind::EmptyGroup => "empty group".to_string(),
            SyntaxErrorKind::MisplacedAnchor => "anchor not allowed here".to_string(),
            SyntaxErrorKind::TrailingAfterEndAnchor => {
                "pattern continues after end anchor".to_string()
            }
        }
    }
}

/// Error type for pattern parsing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RegexError {
    /// Syntax error in the pattern, at byte `offset`.
    Syntax { kind: SyntaxErrorKind, offset: usize },
    /// Groups nested deeper than the configured limit.
    ParseDepthLimitOver { limit: u32 },
}

impl fmt::Display for RegexError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RegexError::Syntax { kind, offset } => {
                write!(f, "syntax error at offset {}: {}", offset, kind.message())
            }
            RegexError::ParseDepthLimitOver { limit } => {
                write!(f, "parse depth limit over (limit is {})", limit)
            }
        }
    }
}

impl std::error::Error for RegexError {}

impl RegexError {
    pub(crate) fn syntax(kind: SyntaxErrorKind, offset: usize) -> Self {
        RegexError::Syntax { kind, offset }
    }

    /// Returns the syntax error kind, if this is a syntax error.
    pub fn kind(&self) -> Option<SyntaxErrorKind> {
        match self {
            RegexError::Syntax { kind, .. } => Some(*kind),
            RegexError::ParseDepthLimitOver { .. } => None,
        }
    }

    /// Byte offset in the pattern where the error was detected.
    pub fn offset(&self) -> Option<usize> {
        match self {
            RegexError::Syntax { offset, .. } => Some(*offset),
            RegexError::ParseDepthLimitOver { .. } => None,
        }
    }
}
