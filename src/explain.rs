//! Human-readable explanations of decoded descriptors.
//!
//! Nothing here fails: values without a known name fall back to
//! hexadecimal.
//!
//! ```
//! let descriptor = hidscope::avec::decode_str("05 01 09 02 A1 01 C0")?;
//! for item in &descriptor.items {
//!     println!("{}", hidscope::explain::explain_item(item));
//! }
//! // Global::UsagePage = Generic Desktop Controls
//! // Local::Usage = 0x02
//! // Main::Collection = Application
//! // Main::EndCollection = N/A
//! ```

pub mod docs;
pub mod item;
pub mod usage;

pub use docs::{describe_bit, describe_data, describe_flags, describe_position, describe_prefix};
pub use item::{explain_item, explain_item_in};
pub use usage::{explain_usage, explain_usage_page};

use alloc::string::String;
use core::fmt::Write;

use crate::avec::Descriptor;

/// Render a descriptor's tree as indented text, two spaces per level.
///
/// Nodes are visited depth-first. Each node lists its context items, then
/// the item that created it, with usages resolved against the node's usage
/// page.
pub fn render(descriptor: &Descriptor) -> String {
    let mut out = String::new();

    for (depth, id) in descriptor.tree.walk() {
        let page = descriptor.usage_page(id);
        let items = descriptor
            .context(id)
            .chain(core::iter::once(descriptor.main_item(id)));

        for item in items {
            let _ = writeln!(out, "{:indent$}{}", "", explain_item_in(item, page), indent = depth * 2);
        }
    }

    out
}
