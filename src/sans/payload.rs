//! States processing item payload bytes.

use either::Either::{self, Left, Right};

use super::prefix::{ByteOrder, ItemPrefix};

/// State token to decode one byte of an item payload.
#[derive(Debug)]
pub struct ItemPayload {
    pub(super) bytes_read: u8,
    pub(super) bytes_remaining: u8,
    pub(super) value: u32,
    pub(super) order: ByteOrder,
}

impl ItemPayload {
    pub(super) fn new(size: u8, order: ByteOrder) -> Self {
        Self {
            bytes_read: 0,
            bytes_remaining: size,
            value: 0,
            order,
        }
    }

    /// Number of payload bytes still expected, including the next one.
    pub fn bytes_remaining(&self) -> u8 {
        self.bytes_remaining
    }

    /// Transition to another state by decoding a payload byte.
    ///
    /// Returns the folded item value and a prefix state once the final byte
    /// has been read, or the next payload state otherwise.
    pub fn advance(self, r: [u8; 1]) -> Either<(u32, ItemPrefix), Self> {
        let byte = u32::from(r[0]);

        let value = match self.order {
            ByteOrder::FirstMostSignificant => (self.value << 8) | byte,
            ByteOrder::LittleEndian => self.value | (byte << (8 * u32::from(self.bytes_read))),
        };

        if self.bytes_remaining == 1 {
            Left((value, ItemPrefix))
        } else {
            Right(Self {
                bytes_read: self.bytes_read + 1,
                bytes_remaining: self.bytes_remaining - 1,
                value,
                order: self.order,
            })
        }
    }
}
