//! Item decoding over a token stream.

use alloc::vec::Vec;

use either::Either::{Left, Right};
use log::trace;
use tinyvec::ArrayVec;

use crate::sans::{
    Decoder,
    prefix::ByteOrder,
    tag::{Category, SizeClass, Tag},
};

use super::{
    Error,
    lexer::{Position, Span, Token, TokenKind},
};

/// Index of an item in a decoded item list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ItemId(pub usize);

/// A data token together with the byte it spells.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ByteToken {
    pub token: Token,
    pub value: u8,
}

impl ByteToken {
    /// Parse a data token as a hex byte, with or without a `0x` prefix.
    /// Leading zeros are allowed; values over `0xFF` are not.
    pub fn parse(token: Token) -> Result<Self, Error> {
        let text = token.text.as_str();
        let digits = text
            .strip_prefix("0x")
            .or_else(|| text.strip_prefix("0X"))
            .unwrap_or(text);

        let value = if !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            u8::from_str_radix(digits, 16).ok()
        } else {
            None
        };

        match value {
            Some(value) => Ok(Self { token, value }),
            None => Err(Error::Decode {
                text: token.text,
                span: token.span,
            }),
        }
    }
}

/// One decoded item: a prefix byte and its payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Item {
    pub prefix: ByteToken,
    pub data: ArrayVec<[ByteToken; 4]>,
    pub size: SizeClass,
    pub tag: Tag,
    /// Payload bytes folded into a single value.
    pub value: u32,
}

impl Item {
    pub fn category(&self) -> Category {
        self.tag.category()
    }

    pub fn raw_tag(&self) -> u8 {
        self.tag.bits()
    }

    /// All source tokens of this item, prefix first.
    pub fn tokens(&self) -> impl Iterator<Item = &Token> {
        core::iter::once(&self.prefix.token).chain(self.data.iter().map(|b| &b.token))
    }

    /// Source span from the prefix to the last payload token.
    pub fn span(&self) -> Span {
        let start = self.prefix.token.span.start;
        let end = self.data.last().unwrap_or(&self.prefix).token.span.end;
        Span { start, end }
    }

    /// Whether the prefix or a payload token covers a position. Separators
    /// and comments between them do not count.
    pub fn covers(&self, at: Position) -> bool {
        self.tokens().any(|t| t.span.contains(at))
    }
}

/// Decode the data tokens of a token stream into items.
///
/// Other token kinds are skipped. Decoding stops at the first error.
pub fn decode_items(
    tokens: impl IntoIterator<Item = Token>,
    order: ByteOrder,
) -> Result<Vec<Item>, Error> {
    let mut bytes = tokens
        .into_iter()
        .filter(|t| t.kind == TokenKind::Data)
        .map(ByteToken::parse);

    let mut items = Vec::new();
    let mut state = Decoder::default();

    while let Some(prefix) = bytes.next().transpose()? {
        let (header, successor) = state
            .advance([prefix.value], order)
            .map_err(|err| Error::from_prefix(err, prefix.token.span))?;

        let mut data: ArrayVec<[ByteToken; 4]> = ArrayVec::new();

        let (value, successor) = match successor {
            Left(state) => (0, state),
            Right(mut payload) => loop {
                let Some(byte) = bytes.next().transpose()? else {
                    return Err(Error::TruncatedItem {
                        declared: header.size.bytes(),
                        found: data.len(),
                        span: prefix.token.span,
                    });
                };

                let r = [byte.value];
                data.push(byte);

                payload = match payload.advance(r) {
                    Left(done) => break done,
                    Right(payload) => payload,
                };
            },
        };
        state = successor;

        let item = Item {
            prefix,
            data,
            size: header.size,
            tag: header.tag,
            value,
        };

        trace!("{} = {:#x} at {}", item.tag, item.value, item.span());
        items.push(item);
    }

    Ok(items)
}
