#![no_std]

//! A decoder and explainer for USB HID report descriptors written as text.
//!
//! Hidscope reads descriptors the way they appear in firmware sources and
//! datasheets: hex byte tokens separated by whitespace or commas, with `//`
//! line comments. It decodes them into items, builds the tree of collections
//! and report fields they describe, and renders human-readable explanations
//! of every item.
//!
//! Most users should begin with the functions in the [`avec`] module, and
//! format results with the [`explain`] module. The byte-level finite-state
//! machine underneath is exposed in the [`sans`] module.
//!
//! ## Cargo Features
//!
//! The following crate feature flags are available:
//!
//! - `std`: enable reader-based decoder (default).

extern crate alloc;

pub mod avec;
pub mod explain;
pub mod sans;
