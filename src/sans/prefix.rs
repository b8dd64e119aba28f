//! State processing item prefix bytes.

use either::Either::{self, Left, Right};
use tartan_bitfield::bitfield;
use thiserror::Error;

use super::{
    payload::ItemPayload,
    tag::{MainTag, SizeClass, Tag},
};

/// An error advancing over an item prefix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PrefixError {
    /// The category and tag bits name no defined item.
    #[error("Unknown tag ({tag:#x}) for item type {category}.")]
    UnknownTag { category: u8, tag: u8 },
}

/// Order in which payload bytes are folded into an item value.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum ByteOrder {
    /// The first payload byte written is the most significant.
    #[default]
    FirstMostSignificant,
    /// The first payload byte written is the least significant, as on the
    /// USB wire.
    LittleEndian,
}

/// Fields extracted from a prefix byte.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Header {
    /// Declared payload size, forced to zero for `End Collection`.
    pub size: SizeClass,
    pub tag: Tag,
}

/// State token to decode an item prefix.
#[derive(Debug, Default)]
pub struct ItemPrefix;

impl ItemPrefix {
    /// Transition to another state by decoding an item prefix.
    ///
    /// Returns the extracted header, and a successor state token: another
    /// prefix for items without payload, or a payload state otherwise.
    pub fn advance(
        self,
        r: [u8; 1],
        order: ByteOrder,
    ) -> Result<(Header, Either<ItemPrefix, ItemPayload>), PrefixError> {
        bitfield! {
            struct Prefix(u8) {
                [0..2] size: u8,
                [2..4] category: u8,
                [4..8] tag: u8,
            }
        }

        let prefix = Prefix(r[0]);

        let tag = Tag::from_bits(prefix.category(), prefix.tag()).ok_or(
            PrefixError::UnknownTag {
                category: prefix.category(),
                tag: prefix.tag(),
            },
        )?;

        // End Collection never carries data, whatever its size bits say.
        let size = match tag {
            Tag::Main(MainTag::EndCollection) => SizeClass::Zero,
            _ => SizeClass::from_bits(prefix.size()),
        };

        let successor = match size.bytes() {
            0 => Left(ItemPrefix),
            n => Right(ItemPayload::new(n, order)),
        };

        Ok((Header { size, tag }, successor))
    }
}
