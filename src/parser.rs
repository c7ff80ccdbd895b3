use std::fmt;

use crate::{
    ast::{Associativity, Node},
    cursor::Cursor,
    registry::{registry, OperatorDescriptor, PrecedenceLevel, Registry},
};

/// Parenthesis nesting allowed by [`Parser::new`] before giving up.
pub const DEFAULT_MAX_DEPTH: usize = 128;

/// Operations allowed on any root-to-leaf path of a parsed tree.
///
/// Evaluating, formatting and dropping a tree recurse once per level, so a
/// long flat chain such as `1+1+1+...` is cut off here.
pub const DEFAULT_MAX_HEIGHT: usize = 1024;

pub struct Parser<'a> {
    cursor: Cursor<'a>,
    registry: &'a Registry,
    depth: usize,
    max_depth: usize,
    max_height: usize,
}

/// A parsed node and the number of operations on its longest path.
struct Subtree {
    node: Node,
    height: usize,
}

impl Subtree {
    fn leaf(node: Node) -> Self {
        Subtree { node, height: 0 }
    }
}

impl<'a> Parser<'a> {
    /// Parser over `source` using the built-in operator table.
    pub fn new(source: &'a str) -> Self {
        Self::with_registry(source, registry())
    }

    pub fn with_registry(source: &'a str, registry: &'a Registry) -> Self {
        Parser {
            cursor: Cursor::new(source),
            registry,
            depth: 0,
            max_depth: DEFAULT_MAX_DEPTH,
            max_height: DEFAULT_MAX_HEIGHT,
        }
    }

    /// Limit how deeply parentheses may nest.
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// Limit how many operations may be stacked on one path of the tree.
    pub fn with_max_height(mut self, max_height: usize) -> Self {
        self.max_height = max_height;
        self
    }

    /// Bytes consumed so far.
    pub fn offset(&self) -> usize {
        self.cursor.offset()
    }

    pub fn is_eof(&self) -> bool {
        self.cursor.is_eof()
    }

    /// Parse the whole input as one expression.
    pub fn parse(&mut self) -> Result<Node, ParseError> {
        let node = self.parse_expression()?;
        self.cursor.skip_whitespace();
        if !self.cursor.is_eof() {
            return Err(ParseError::TrailingInput {
                offset: self.cursor.offset(),
                rest: self.cursor.rest().to_string(),
            });
        }
        log::debug!("parsed {:?}", node);
        Ok(node)
    }

    /// Parse one expression at the loosest level, leaving anything after it.
    pub fn parse_expression(&mut self) -> Result<Node, ParseError> {
        self.parse_level(self.registry.max_precedence())
    }

    /// Parse an expression made only of operators at `level` or tighter.
    ///
    /// Level `0` parses a single atom.
    pub fn parse_level(&mut self, level: u32) -> Result<Node, ParseError> {
        self.parse_subtree(level).map(|t| t.node)
    }

    fn parse_subtree(&mut self, level: u32) -> Result<Subtree, ParseError> {
        if level == 0 {
            return self.parse_atom();
        }
        let registry = self.registry;
        let Some(info) = registry.level_for(level) else {
            return self.parse_subtree(level - 1);
        };
        log::trace!("level {} at offset {}", level, self.cursor.offset());

        let left = self.parse_subtree(level - 1)?;
        match info.associativity() {
            Associativity::LeftToRight => self.parse_left_to_right(left, info),
            Associativity::RightToLeft => self.parse_right_to_left(left, info),
            Associativity::NonAssociative => self.parse_non_associative(left, info),
        }
    }

    fn parse_left_to_right(&mut self, mut left: Subtree, info: &PrecedenceLevel) -> Result<Subtree, ParseError> {
        while let Some((descriptor, offset)) = self.eat_operator(info) {
            let right = self.parse_subtree(info.precedence() - 1)?;
            left = self.combine(descriptor, offset, left, right)?;
        }
        Ok(left)
    }

    fn parse_right_to_left(&mut self, left: Subtree, info: &PrecedenceLevel) -> Result<Subtree, ParseError> {
        let mut pairs: Vec<(OperatorDescriptor, usize, Subtree)> = Vec::new();
        while let Some((descriptor, offset)) = self.eat_operator(info) {
            let operand = self.parse_subtree(info.precedence() - 1)?;
            pairs.push((descriptor, offset, operand));
        }

        // a op1 b op2 c  =>  op1(a, op2(b, c))
        let mut pairs = pairs.into_iter().rev();
        let Some((mut descriptor, mut offset, mut acc)) = pairs.next() else {
            return Ok(left);
        };
        for (previous, previous_offset, operand) in pairs {
            acc = self.combine(descriptor, offset, operand, acc)?;
            descriptor = previous;
            offset = previous_offset;
        }
        self.combine(descriptor, offset, left, acc)
    }

    fn parse_non_associative(&mut self, left: Subtree, info: &PrecedenceLevel) -> Result<Subtree, ParseError> {
        let Some((descriptor, offset)) = self.eat_operator(info) else {
            return Ok(left);
        };
        let right = self.parse_subtree(info.precedence() - 1)?;
        if let Some(token) = self.cursor.peek_any(info.sorted_tokens()) {
            return Err(ParseError::AmbiguousChain {
                token: token.to_string(),
                offset: self.cursor.offset(),
            });
        }
        self.combine(descriptor, offset, left, right)
    }

    /// Build `left <op> right`, where the operator token started at `offset`.
    fn combine(
        &self,
        descriptor: OperatorDescriptor,
        offset: usize,
        left: Subtree,
        right: Subtree,
    ) -> Result<Subtree, ParseError> {
        let height = left.height.max(right.height) + 1;
        if height > self.max_height {
            return Err(ParseError::TreeTooDeep {
                limit: self.max_height,
                offset,
            });
        }
        Ok(Subtree {
            node: (descriptor.build)(left.node, right.node),
            height,
        })
    }

    /// Returns the matched operator and the offset its token started at.
    fn eat_operator(&mut self, info: &PrecedenceLevel) -> Option<(OperatorDescriptor, usize)> {
        let token = self.cursor.eat_any(info.sorted_tokens())?;
        let offset = self.cursor.offset() - token.len();
        log::trace!("matched '{}' at level {}", token, info.precedence());
        info.descriptor_for_token(token).map(|d| (*d, offset))
    }

    /// Parse atoms: a parenthesised expression or a number literal.
    fn parse_atom(&mut self) -> Result<Subtree, ParseError> {
        self.cursor.skip_whitespace();
        match self.cursor.current_char() {
            None => Err(ParseError::UnexpectedEof {
                expected: "a number or '('".to_string(),
            }),
            Some('(') => self.parse_parens(),
            Some(_) => self.parse_number().map(Subtree::leaf),
        }
    }

    fn parse_parens(&mut self) -> Result<Subtree, ParseError> {
        let open = self.cursor.offset();
        self.cursor.advance(); // consume '('

        if self.depth >= self.max_depth {
            return Err(ParseError::NestingTooDeep {
                limit: self.max_depth,
                offset: open,
            });
        }
        self.depth += 1;
        let inner = self.parse_subtree(self.registry.max_precedence())?;
        self.depth -= 1;

        self.expect(')')?;
        Ok(inner)
    }

    fn parse_number(&mut self) -> Result<Node, ParseError> {
        let offset = self.cursor.offset();
        let Some(text) = self.cursor.eat_number() else {
            return Err(ParseError::InvalidNumber {
                found: self.cursor.rest().chars().take(16).collect(),
                offset,
            });
        };
        text.parse::<f64>()
            .map(Node::Number)
            .map_err(|_| ParseError::InvalidNumber {
                found: text.to_string(),
                offset,
            })
    }

    fn expect(&mut self, expected: char) -> Result<(), ParseError> {
        if self.cursor.eat_char(expected) {
            return Ok(());
        }
        match self.cursor.current_char() {
            None => Err(ParseError::UnexpectedEof {
                expected: format!("'{expected}'"),
            }),
            Some(found) => Err(ParseError::ExpectedChar {
                expected,
                found,
                offset: self.cursor.offset(),
            }),
        }
    }
}

/// Why a piece of text is not a valid expression.
///
/// Offsets are byte offsets into the source.
#[derive(Debug, Clone, PartialEq)]
pub enum ParseError {
    /// Input ended where more was required
    UnexpectedEof { expected: String },

    /// A specific character (such as a closing parenthesis) was required
    ExpectedChar {
        expected: char,
        found: char,
        offset: usize,
    },

    /// Neither a number nor '(' where an operand was required
    InvalidNumber { found: String, offset: usize },

    /// A complete expression was followed by something else
    TrailingInput { offset: usize, rest: String },

    /// Two operators of a non-associative level chained without parentheses
    AmbiguousChain { token: String, offset: usize },

    /// Parentheses nested deeper than the parser allows
    NestingTooDeep { limit: usize, offset: usize },

    /// More operations stacked on one path of the tree than the parser allows
    TreeTooDeep { limit: usize, offset: usize },
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseError::UnexpectedEof { expected } => {
                write!(f, "Unexpected end of input, expected {}", expected)
            }
            ParseError::ExpectedChar {
                expected,
                found,
                offset,
            } => write!(f, "Expected '{}', got '{}' at position {}", expected, found, offset),
            ParseError::InvalidNumber { found, offset } => {
                write!(f, "Invalid number at position {}: '{}'", offset, found)
            }
            ParseError::TrailingInput { offset, rest } => write!(
                f,
                "Syntax error: didn't reach end of input, unconsumed '{}' at position {}",
                rest, offset
            ),
            ParseError::AmbiguousChain { token, offset } => write!(
                f,
                "Parentheses are required to chain '{}' at position {}",
                token, offset
            ),
            ParseError::NestingTooDeep { limit, offset } => write!(
                f,
                "Parentheses nested more than {} deep at position {}",
                limit, offset
            ),
            ParseError::TreeTooDeep { limit, offset } => write!(
                f,
                "Expression nests more than {} operations deep at position {}",
                limit, offset
            ),
        }
    }
}

impl std::error::Error for ParseError {}
