//! Line-slice-based decoder implementation.

use log::debug;

use super::{
    DecodeOptions, Descriptor, Error,
    item::{ItemId, decode_items},
    lexer::{Token, tokenize, tokenize_str},
    tree::TreeBuilder,
};

/// Decode a slice of descriptor lines with default options.
///
/// This method is also re-exported as `hidscope::avec::decode_slice`.
pub fn decode<S: AsRef<str>>(lines: &[S]) -> Result<Descriptor, Error> {
    decode_with(lines, DecodeOptions::default())
}

/// Decode a slice of descriptor lines.
pub fn decode_with<S: AsRef<str>>(
    lines: &[S],
    options: DecodeOptions,
) -> Result<Descriptor, Error> {
    decode_tokens(tokenize(lines), options)
}

/// Decode descriptor text with default options, splitting it into lines.
pub fn decode_str(text: &str) -> Result<Descriptor, Error> {
    decode_tokens(tokenize_str(text), DecodeOptions::default())
}

pub(super) fn decode_tokens(
    tokens: impl IntoIterator<Item = Token>,
    options: DecodeOptions,
) -> Result<Descriptor, Error> {
    let items = decode_items(tokens, options.byte_order)?;

    let mut builder = TreeBuilder::new();
    for (i, item) in items.iter().enumerate() {
        builder.push(ItemId(i), item)?;
    }
    let tree = builder.finish()?;

    debug!(
        "decoded {} items into {} nodes ({} roots)",
        items.len(),
        tree.nodes().len(),
        tree.roots().len()
    );

    Ok(Descriptor { items, tree })
}
