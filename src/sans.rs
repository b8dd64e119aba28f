//! Internal finite-state machine for decoding items from raw bytes.
//!
//! This module works on descriptor bytes alone, with no knowledge of the text
//! they were written in. See [`crate::avec`] for the token-aware pipeline
//! built on top of it, which most users should begin with.
//!
//! # Architecture
//!
//! All states are represented by a non-copy token. Transition to another
//! state by calling the token's `advance` method with the next byte. This
//! will return a successor state token, along with any extracted data.
//!
//! An item starts at [`ItemPrefix`](prefix::ItemPrefix), which extracts the
//! size, category and tag fields of the prefix byte. Items declaring a
//! payload continue through one [`ItemPayload`](payload::ItemPayload) state
//! per byte, which folds the bytes into a single value, before returning to
//! the prefix state.
//!
//! Some parts of decoding are not represented in the finite-state machine
//! and must be handled by the driver:
//!
//! - Detecting a truncated item, where the input ends in a payload state.
//!
//! - Interpreting items: tracking global and local state, and nesting
//! collections. See [`crate::avec::state`] and [`crate::avec::tree`].

pub mod payload;
pub mod prefix;
pub mod tag;

/// Entrypoint to the finite-state machine.
pub type Decoder = prefix::ItemPrefix;
