//! Convenience interfaces for decoding descriptor text.
//!
//! The functions in this module run the whole pipeline in one call:
//! tokenizing lines of text, decoding items, and building the collection
//! tree. The result is a [`Descriptor`], holding both the flat item list
//! (with source positions, for position-based lookups) and the tree.
//!
//! ```
//! let lines = [
//!     "05 01  // Usage Page (Generic Desktop)",
//!     "09 02  // Usage (Mouse)",
//!     "A1 01  // Collection (Application)",
//!     "C0     // End Collection",
//! ];
//! let descriptor = hidscope::avec::decode_slice(&lines)?;
//! assert_eq!(descriptor.tree.roots().len(), 1);
//! ```
//!
//! Each stage is also exposed on its own: [`lexer::tokenize`],
//! [`item::decode_items`] and [`tree::TreeBuilder`].

#[cfg(feature = "std")]
pub mod reader;
pub mod item;
pub mod lexer;
pub mod slice;
pub mod state;
pub mod tree;

#[cfg(feature = "std")]
pub use reader::decode as decode_reader;
pub use slice::{decode as decode_slice, decode_str, decode_with};

use alloc::{string::String, vec::Vec};

use thiserror::Error;

use crate::sans::prefix::{ByteOrder, PrefixError};

use self::{
    item::{Item, ItemId},
    lexer::{Position, Span},
    state::StateError,
    tree::{NodeId, NodeKind, Tree},
};

/// Errors occurring while decoding descriptor text.
///
/// Each variant carries the span of the offending token or item.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// A data token is not a hex byte.
    #[error("Invalid byte `{text}` at {span}.")]
    Decode { text: String, span: Span },
    /// A prefix names no defined item.
    #[error("Unknown tag ({tag:#x}) for item type {category} at {span}.")]
    UnknownTag { category: u8, tag: u8, span: Span },
    /// The input ended inside an item payload.
    #[error("Item at {span} declares {declared} data bytes, but only {found} remain.")]
    TruncatedItem {
        declared: u8,
        found: usize,
        span: Span,
    },
    /// An item cannot apply to the current state.
    #[error("{reason} at {span}.")]
    State { reason: StateError, span: Span },
    /// The input ended with collections still open.
    #[error("Collection opened at {span} is never closed ({open} left open).")]
    UnterminatedCollection { open: usize, span: Span },
}

impl Error {
    pub(crate) fn from_prefix(err: PrefixError, span: Span) -> Self {
        match err {
            PrefixError::UnknownTag { category, tag } => Self::UnknownTag {
                category,
                tag,
                span,
            },
        }
    }

    /// Source span of the offending token or item.
    pub fn span(&self) -> Span {
        match self {
            Self::Decode { span, .. }
            | Self::UnknownTag { span, .. }
            | Self::TruncatedItem { span, .. }
            | Self::State { span, .. }
            | Self::UnterminatedCollection { span, .. } => *span,
        }
    }
}

/// Options controlling a decode.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct DecodeOptions {
    /// How multi-byte payloads are folded into values.
    pub byte_order: ByteOrder,
}

/// A fully decoded descriptor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Descriptor {
    /// Every item, in source order.
    pub items: Vec<Item>,
    pub tree: Tree,
}

impl Descriptor {
    pub fn item(&self, id: ItemId) -> &Item {
        &self.items[id.0]
    }

    /// The item whose prefix or payload token covers a 1-based position.
    pub fn item_at(&self, line: usize, column: usize) -> Option<&Item> {
        let at = Position::new(line, column);
        self.items.iter().find(|item| item.covers(at))
    }

    /// Context items of a node, globals first.
    pub fn context(&self, id: NodeId) -> impl Iterator<Item = &Item> {
        self.tree[id].context.iter().map(|&i| self.item(i))
    }

    /// The main item that created a node.
    pub fn main_item(&self, id: NodeId) -> &Item {
        self.item(self.tree[id].main_item())
    }

    /// Usage items of a report node; empty for collections.
    pub fn usages(&self, id: NodeId) -> impl Iterator<Item = &Item> {
        let usages: &[ItemId] = match &self.tree[id].kind {
            NodeKind::Report { usages, .. } => usages,
            NodeKind::Collection { .. } => &[],
        };
        usages.iter().map(|&i| self.item(i))
    }

    /// Value of the usage page governing a node.
    pub fn usage_page(&self, id: NodeId) -> Option<u32> {
        self.tree.usage_page(id).map(|i| self.item(i).value)
    }
}
