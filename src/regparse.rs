// regparse.rs - Pattern parser.
// Recursive descent from pattern bytes to a ParseTree arena.
//
// Grammar, lowest precedence first:
//
//   pattern       = [ '^' ] [ alternation ] [ '$' ] END
//   alternation   = concatenation ( '|' concatenation )*
//   concatenation = quantified+
//   quantified    = unit ( '?' | '*' | '+' )?
//   unit          = [A-Za-z0-9_] | '(' alternation ')'

use log::trace;

use crate::error::{RegexError, SyntaxErrorKind};
use crate::regint::DEFAULT_PARSE_DEPTH_LIMIT;
use crate::regparse_types::*;

/// Parse `pattern` with the default group depth limit.
///
/// # Examples
///
/// ```
/// use lockstep::regparse::parse;
/// use lockstep::regparse_types::Node;
///
/// let tree = parse(b"^ab$").unwrap();
/// assert!(tree.is_begin_anchored() && tree.is_end_anchored());
/// assert_eq!(tree.node(tree.root().unwrap()), &Node::Concatenation(0, 1));
/// ```
pub fn parse(pattern: &[u8]) -> Result<ParseTree, RegexError> {
    parse_with_depth_limit(pattern, DEFAULT_PARSE_DEPTH_LIMIT)
}

/// Parse `pattern`, allowing at most `depth_limit` nested groups.
pub fn parse_with_depth_limit(pattern: &[u8], depth_limit: u32) -> Result<ParseTree, RegexError> {
    let mut parser = Parser {
        pattern,
        pos: 0,
        tree: ParseTree::new(),
        groups: Vec::new(),
        depth_limit,
    };
    parser.parse_pattern()?;

    trace!(
        "parsed {:?}: {} nodes, flags {:?}",
        String::from_utf8_lossy(pattern),
        parser.tree.len(),
        parser.tree.flags()
    );
    Ok(parser.tree)
}

struct Parser<'p> {
    pattern: &'p [u8],
    pos: usize,
    tree: ParseTree,
    /// Offsets of the currently open `(`.
    groups: Vec<usize>,
    depth_limit: u32,
}

impl Parser<'_> {
    #[inline]
    fn peek(&self) -> Option<u8> {
        self.pattern.get(self.pos).copied()
    }

    #[inline]
    fn prev(&self) -> Option<u8> {
        self.pos
            .checked_sub(1)
            .and_then(|i| self.pattern.get(i).copied())
    }

    fn parse_pattern(&mut self) -> Result<(), RegexError> {
        if self.peek() == Some(b'^') {
            self.pos += 1;
            self.tree.set_flags(ParseFlags::BEGIN_ANCHORED);
        }

        if !matches!(self.peek(), None | Some(b'$')) {
            self.parse_alternation()?;
        }

        if self.peek() == Some(b'$') {
            self.pos += 1;
            self.tree.set_flags(ParseFlags::END_ANCHORED);
            if self.pos < self.pattern.len() {
                return Err(RegexError::syntax(
                    SyntaxErrorKind::TrailingAfterEndAnchor,
                    self.pos,
                ));
            }
        }

        if self.pos < self.pattern.len() {
            return Err(self.unexpected());
        }
        Ok(())
    }

    fn parse_alternation(&mut self) -> Result<NodeId, RegexError> {
        let mut first = self.parse_concatenation()?;

        while self.peek() == Some(b'|') {
            self.pos += 1;
            let second = self.parse_concatenation()?;
            first = self.tree.push(Node::Alternation(first, second));
        }

        Ok(first)
    }

    fn parse_concatenation(&mut self) -> Result<NodeId, RegexError> {
        let mut first = match self.parse_quantified()? {
            Some(id) => id,
            None => return Err(self.unexpected()),
        };

        while let Some(second) = self.parse_quantified()? {
            first = self.tree.push(Node::Concatenation(first, second));
        }

        Ok(first)
    }

    fn parse_quantified(&mut self) -> Result<Option<NodeId>, RegexError> {
        let unit = match self.parse_unit()? {
            Some(id) => id,
            None => return Ok(None),
        };

        let node = match self.peek() {
            Some(b'?') => Node::Optional(unit),
            Some(b'*') => Node::OptionalRepetition(unit),
            Some(b'+') => Node::Repetition(unit),
            _ => return Ok(Some(unit)),
        };
        self.pos += 1;

        Ok(Some(self.tree.push(node)))
    }

    /// Returns `Ok(None)` when the current byte cannot start a unit; the
    /// caller decides whether that ends a sequence or is an error.
    fn parse_unit(&mut self) -> Result<Option<NodeId>, RegexError> {
        match self.peek() {
            Some(b) if is_atom_byte(b) => {
                self.pos += 1;
                Ok(Some(self.tree.push(Node::Atom(b))))
            }
            Some(b'(') => self.parse_group().map(Some),
            _ => Ok(None),
        }
    }

    fn parse_group(&mut self) -> Result<NodeId, RegexError> {
        if self.groups.len() as u32 >= self.depth_limit {
            return Err(RegexError::ParseDepthLimitOver {
                limit: self.depth_limit,
            });
        }

        self.groups.push(self.pos);
        self.pos += 1;

        let inner = self.parse_alternation()?;

        if self.peek() != Some(b')') {
            return Err(self.unexpected());
        }
        self.pos += 1;
        self.groups.pop();

        Ok(inner)
    }

    /// Classify the byte at the current position, which the grammar could
    /// not consume.
    fn unexpected(&self) -> RegexError {
        let prev = self.prev();
        let kind = match self.peek() {
            None => match self.groups.last() {
                Some(&open) if prev != Some(b'|') => {
                    return RegexError::syntax(SyntaxErrorKind::UnmatchedOpenParenthesis, open);
                }
                _ => SyntaxErrorKind::EmptyAlternative,
            },
            Some(b'?' | b'*' | b'+') => {
                if matches!(prev, Some(b'?' | b'*' | b'+')) {
                    SyntaxErrorKind::NestedRepeatOperator
                } else {
                    SyntaxErrorKind::TargetOfRepeatNotSpecified
                }
            }
            Some(b'|') => SyntaxErrorKind::EmptyAlternative,
            Some(b')') => {
                if prev == Some(b'|') {
                    SyntaxErrorKind::EmptyAlternative
                } else if !self.groups.is_empty() && prev == Some(b'(') {
                    SyntaxErrorKind::EmptyGroup
                } else {
                    SyntaxErrorKind::UnmatchedCloseParenthesis
                }
            }
            Some(b'$') if prev == Some(b'|') => SyntaxErrorKind::EmptyAlternative,
            Some(b'^' | b'$') => SyntaxErrorKind::MisplacedAnchor,
            Some(b) => SyntaxErrorKind::UnexpectedCharacter(b),
        };
        RegexError::syntax(kind, self.pos)
    }
}

// ============================================================================
// Tests
// ============================================================================
