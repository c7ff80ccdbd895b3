use once_cell::sync::Lazy;
use regex::Regex;

static NUMBER_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[+-]?(?:[0-9]*\.[0-9]+|[0-9]+\.?)(?:[eE][+-]?[0-9]+)?").expect("number pattern is valid")
});

/// A position in the source text. Only ever moves forward.
///
/// Offsets are byte offsets into the source and always sit on a `char`
/// boundary.
#[derive(Debug, Clone)]
pub struct Cursor<'a> {
    source: &'a str,
    offset: usize,
}

impl<'a> Cursor<'a> {
    pub fn new(source: &'a str) -> Self {
        Cursor { source, offset: 0 }
    }

    pub fn offset(&self) -> usize {
        self.offset
    }

    /// Unconsumed input.
    pub fn rest(&self) -> &'a str {
        &self.source[self.offset..]
    }

    pub fn is_eof(&self) -> bool {
        self.offset >= self.source.len()
    }

    pub fn current_char(&self) -> Option<char> {
        self.rest().chars().next()
    }

    /// Consume one character.
    pub fn advance(&mut self) -> Option<char> {
        let ch = self.current_char()?;
        self.offset += ch.len_utf8();
        Some(ch)
    }

    pub fn skip_whitespace(&mut self) {
        while let Some(ch) = self.current_char() {
            if ch.is_whitespace() {
                self.advance();
            } else {
                break;
            }
        }
    }

    /// First of `tokens` the input continues with, after skipping
    /// whitespace. Nothing but whitespace is consumed.
    ///
    /// `tokens` must be ordered longest first for longest-match behaviour.
    pub fn peek_any(&mut self, tokens: &[&'static str]) -> Option<&'static str> {
        self.skip_whitespace();
        let rest = self.rest();
        tokens.iter().copied().find(|t| rest.starts_with(t))
    }

    /// Like [`peek_any`](Self::peek_any) but consumes the matched token.
    pub fn eat_any(&mut self, tokens: &[&'static str]) -> Option<&'static str> {
        let token = self.peek_any(tokens)?;
        self.offset += token.len();
        Some(token)
    }

    /// Consume `expected` (after whitespace) if it is next.
    pub fn eat_char(&mut self, expected: char) -> bool {
        self.skip_whitespace();
        if self.current_char() == Some(expected) {
            self.advance();
            true
        } else {
            false
        }
    }

    /// Consume a numeric literal at the cursor (after whitespace), returning
    /// its text.
    pub fn eat_number(&mut self) -> Option<&'a str> {
        self.skip_whitespace();
        let rest = self.rest();
        let m = NUMBER_RE.find(rest)?;
        self.offset += m.end();
        Some(m.as_str())
    }
}
