//! Documentation for prefix bytes and main item data bits.
//!
//! These strings are meant for hover-style surfaces: each describes a single
//! token of the source, in Markdown.

use alloc::{format, string::String};
use core::fmt::Write;

use crate::{
    avec::{Descriptor, item::Item},
    sans::tag::{MainTag, Tag},
};

/// One of the two states of a main item data bit.
#[derive(Debug)]
pub struct FlagOption {
    /// Label used in one-line explanations.
    pub label: &'static str,
    pub brief: &'static str,
    pub details: &'static str,
}

/// A data bit of an `Input`, `Output` or `Feature` item.
#[derive(Debug)]
pub struct FlagField {
    pub offset: u8,
    /// The options for a clear bit and a set bit, in that order.
    pub options: [FlagOption; 2],
    pub description: &'static str,
}

impl FlagField {
    pub fn is_set(&self, value: u32) -> bool {
        (value >> self.offset) & 1 == 1
    }

    /// The option a value selects.
    pub fn chosen(&self, value: u32) -> &FlagOption {
        &self.options[usize::from(self.is_set(value))]
    }

    /// The option a value does not select.
    pub fn other(&self, value: u32) -> &FlagOption {
        &self.options[usize::from(!self.is_set(value))]
    }
}

const fn option(label: &'static str, brief: &'static str, details: &'static str) -> FlagOption {
    FlagOption {
        label,
        brief,
        details,
    }
}

/// Data bits of main items. Bit 7 (volatile) only applies to `Output` and
/// `Feature` items and is skipped.
pub static MAIN_FLAGS: [FlagField; 8] = [
    FlagField {
        offset: 0,
        options: [
            option("Data", "data", "report fields that contain modifiable device data."),
            option(
                "Constant",
                "constant",
                "static read-only field and cannot be modified (written) by the host.",
            ),
        ],
        description: "",
    },
    FlagField {
        offset: 1,
        options: [
            option("Array", "array", "the report field is an array of data."),
            option("Variable", "variable", "the report field is a variable."),
        ],
        description: "",
    },
    FlagField {
        offset: 2,
        options: [
            option("Absolute", "absolute", "based on a fixed origin"),
            option(
                "Relative",
                "relative",
                "indicating the change in value from the last report",
            ),
        ],
        description: "Mouse devices usually provide relative data, while tablets usually provide absolute data.",
    },
    FlagField {
        offset: 3,
        options: [
            option(
                "NoWrap",
                "no wrap",
                "the value does not wrap to the other side of the range.",
            ),
            option("Wrap", "wrap", "the value wraps to the other side of the range."),
        ],
        description: "if a field's range is 0-10 and the current value is 10, then a 'no wrap' field will stay at 10 until it is explicitly changed to a lower value, while a 'wrap' field will change to 0 on the next increment.",
    },
    FlagField {
        offset: 4,
        options: [
            option("Linear", "linear", "the value is linear."),
            option("NonLinear", "non-linear", "the value is non-linear."),
        ],
        description: "a volume control might be linear, while a brightness control might be non-linear.",
    },
    FlagField {
        offset: 5,
        options: [
            option(
                "PreferredState",
                "preferred state",
                "the value is the preferred state for the control.",
            ),
            option("NoPreferred", "no preferred", "the control has no preferred state."),
        ],
        description: "a power control might have a preferred state of 'on'.",
    },
    FlagField {
        offset: 6,
        options: [
            option("NullState", "null state", "the control has a null state."),
            option(
                "NoNullPosition",
                "no null position",
                "the control has no null position.",
            ),
        ],
        description: "a null state is a position that indicates that the control is not actuated.",
    },
    FlagField {
        offset: 8,
        options: [
            option(
                "BitField",
                "bit field",
                "emits a fixed-size stream of bytes, not interpreted as a single numeric quantity",
            ),
            option(
                "BufferedBytes",
                "buffered bytes",
                "emits a variable-length stream of bytes, not interpreted as a single numeric quantity. must be aligned on an 8-bit boundary",
            ),
        ],
        description: "The data from a bar code reader is an example.",
    },
];

/// Describe each data bit of a main item value, one list entry per bit, with
/// the unselected option struck through.
pub fn describe_flags(value: u32) -> String {
    let mut doc = String::new();
    for field in &MAIN_FLAGS {
        let _ = writeln!(
            doc,
            "- `{}` (bit {}) - {} / ~~{}~~",
            u8::from(field.is_set(value)),
            field.offset,
            field.chosen(value).brief,
            field.other(value).brief,
        );
    }
    doc
}

/// Describe one data bit of a main item value in full: the selected
/// option's details, then a note on the bit if it has one.
pub fn describe_bit(offset: u8, value: u32) -> Option<String> {
    let field = MAIN_FLAGS.iter().find(|f| f.offset == offset)?;
    let chosen = field.chosen(value);

    let mut doc = format!("**{}** - {}
", chosen.brief, chosen.details);
    if !field.description.is_empty() {
        let _ = write!(doc, "
{}
", field.description);
    }
    Some(doc)
}

/// Describe the prefix byte of an item: its value, then its size, type and
/// tag fields.
pub fn describe_prefix(item: &Item) -> String {
    let p = item.prefix.value;
    format!(
        "`{p:#04x} = {p:#010b}`\n\n\
         - `{:02b}`- size: {}\n\
         - `{:02b}`- type: {}\n\
         - `{:04b}`- tag: {}\n",
        item.size.bits(),
        item.size.name(),
        item.category().bits(),
        item.category().name(),
        item.raw_tag(),
        item.tag.name(),
    )
}

/// Describe a payload byte of an item. Main items emitting fields also get
/// their data bits described.
pub fn describe_data(item: &Item, index: usize) -> Option<String> {
    let byte = item.data.get(index)?.value;
    let mut doc = format!("`{byte:#04x} = {byte:#010b}`\n");

    if let Tag::Main(tag @ (MainTag::Input | MainTag::Output | MainTag::Feature)) = item.tag {
        let _ = write!(doc, "Main Item > {}\n\n", tag.name());
        doc.push_str(&describe_flags(item.value));
    }

    Some(doc)
}

/// Describe whichever prefix or payload token covers a 1-based position.
pub fn describe_position(descriptor: &Descriptor, line: usize, column: usize) -> Option<String> {
    let item = descriptor.item_at(line, column)?;
    let at = crate::avec::lexer::Position::new(line, column);

    if item.prefix.token.span.contains(at) {
        return Some(describe_prefix(item));
    }

    let index = item.data.iter().position(|b| b.token.span.contains(at))?;
    describe_data(item, index)
}
