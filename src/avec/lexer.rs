//! Tokenizer for descriptor text.

use alloc::string::String;
use core::fmt;

use log::trace;

/// A 1-based line and column, with columns counted in characters.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Position {
    pub line: usize,
    pub column: usize,
}

impl Position {
    pub fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

/// An inclusive range of source positions.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Span {
    pub start: Position,
    pub end: Position,
}

impl Span {
    /// Whether a position lies within this span.
    pub fn contains(&self, at: Position) -> bool {
        self.start <= at && at <= self.end
    }
}

impl fmt::Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.start, self.end)
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// Candidate byte text, validated by the item decoder.
    #[default]
    Data,
    /// A comma.
    Separator,
    /// `//` and everything after it on the line.
    LineComment,
}

/// Highlighting class of a token, as understood by editors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Highlight {
    Comment,
    Delimiter,
    HexNumber,
}

impl TokenKind {
    pub fn highlight(self) -> Highlight {
        match self {
            Self::Data => Highlight::HexNumber,
            Self::Separator => Highlight::Delimiter,
            Self::LineComment => Highlight::Comment,
        }
    }
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Token {
    pub text: String,
    pub span: Span,
    pub kind: TokenKind,
}

/// Lazy iterator over the tokens of a sequence of lines.
///
/// See [`tokenize`] and [`tokenize_str`].
#[derive(Debug, Clone)]
pub struct Tokens<'a, I> {
    lines: I,
    rest: Option<&'a str>, // Unscanned remainder of the current line.
    line: usize,
    column: usize,
}

impl<'a, I: Iterator<Item = &'a str>> Tokens<'a, I> {
    pub fn new(lines: I) -> Self {
        Self {
            lines,
            rest: None,
            line: 0,
            column: 1,
        }
    }

    /// Scan the next token from the remainder of the current line, returning
    /// it with the text left after it.
    fn scan(&mut self, rest: &'a str) -> Option<(Token, &'a str)> {
        let trimmed = rest.trim_start_matches(char::is_whitespace);
        self.column += rest[..rest.len() - trimmed.len()].chars().count();
        let rest = trimmed;

        let kind = if rest.starts_with(',') {
            TokenKind::Separator
        } else if rest.starts_with("//") {
            TokenKind::LineComment
        } else if !rest.is_empty() {
            TokenKind::Data
        } else {
            return None;
        };

        let len = match kind {
            TokenKind::Separator => 1,
            TokenKind::LineComment => rest.len(),
            TokenKind::Data => rest
                .char_indices()
                .find(|&(i, c)| c == ',' || c.is_whitespace() || rest[i..].starts_with("//"))
                .map_or(rest.len(), |(i, _)| i),
        };

        let (text, tail) = rest.split_at(len);
        let width = text.chars().count();

        let start = Position::new(self.line, self.column);
        let end = Position::new(self.line, self.column + width - 1);
        self.column += width;

        let token = Token {
            text: text.into(),
            span: Span { start, end },
            kind,
        };

        Some((token, tail))
    }
}

impl<'a, I: Iterator<Item = &'a str>> Iterator for Tokens<'a, I> {
    type Item = Token;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let rest = match self.rest {
                Some(rest) => rest,
                None => {
                    let line = self.lines.next()?;
                    self.line += 1;
                    self.column = 1;
                    line
                }
            };

            match self.scan(rest) {
                Some((token, tail)) => {
                    trace!("{:?} `{}` at {}", token.kind, token.text, token.span);
                    self.rest = Some(tail);
                    return Some(token);
                }
                None => self.rest = None,
            }
        }
    }
}

/// Tokenize a slice of lines.
pub fn tokenize<'a, S: AsRef<str>>(
    lines: &'a [S],
) -> Tokens<'a, impl Iterator<Item = &'a str> + Clone> {
    Tokens::new(lines.iter().map(|line| line.as_ref()))
}

/// Tokenize a string, splitting it into lines first.
pub fn tokenize_str(text: &str) -> Tokens<'_, core::str::Lines<'_>> {
    Tokens::new(text.lines())
}
