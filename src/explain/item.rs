//! One-line explanations of items.

use alloc::{
    format,
    string::{String, ToString},
    vec::Vec,
};

use crate::{
    avec::item::Item,
    sans::tag::{GlobalTag, LocalTag, MainTag, SizeClass, Tag},
};

use super::{
    docs::MAIN_FLAGS,
    usage::{explain_usage, explain_usage_page},
};

/// Name of a collection type, if defined.
pub fn collection_type_name(value: u32) -> Option<&'static str> {
    Some(match value {
        0x00 => "Physical",
        0x01 => "Application",
        0x02 => "Logical",
        0x03 => "Report",
        0x04 => "NamedArray",
        0x05 => "UsageSwitch",
        0x06 => "UsageModifier",
        _ => return None,
    })
}

/// Explain an item as `"<Category>::<TagName> = <Value>"`.
///
/// The value is formatted according to the tag: data bits for fields,
/// names for usage pages and collection types, hexadecimal for units,
/// report IDs and usages, decimal for other numbers, and `N/A` for items
/// without data.
pub fn explain_item(item: &Item) -> String {
    format!(
        "{}::{} = {}",
        item.category(),
        item.tag.name().replace(' ', ""),
        format_value(item)
    )
}

/// Explain an item, resolving `Usage` items against a usage page.
///
/// Four-byte usages name their own page in the upper 16 bits, overriding
/// the one supplied. Usages with no page are left unresolved.
pub fn explain_item_in(item: &Item, usage_page: Option<u32>) -> String {
    let mut doc = explain_item(item);

    if item.tag == Tag::Local(LocalTag::Usage) {
        let (page, usage) = match item.size {
            SizeClass::Four => (Some(item.value >> 16), item.value & 0xFFFF),
            _ => (usage_page, item.value),
        };

        if let Some(page) = page {
            doc.push_str(&format!(" ({})", explain_usage(page, usage)));
        }
    }

    doc
}

fn format_value(item: &Item) -> String {
    let v = item.value;

    match item.tag {
        Tag::Main(MainTag::Input | MainTag::Output | MainTag::Feature) => explain_flags(v),
        Tag::Main(MainTag::Collection) => {
            collection_type_name(v).map_or_else(|| hex(v), String::from)
        }
        Tag::Main(MainTag::EndCollection)
        | Tag::Global(GlobalTag::Push | GlobalTag::Pop)
        | Tag::Local(LocalTag::Delimiter) => "N/A".into(),
        Tag::Global(GlobalTag::UsagePage) => explain_usage_page(v),
        Tag::Global(GlobalTag::Unit | GlobalTag::ReportId) | Tag::Local(LocalTag::Usage) => hex(v),
        Tag::Global(
            GlobalTag::LogicalMinimum
            | GlobalTag::LogicalMaximum
            | GlobalTag::PhysicalMinimum
            | GlobalTag::PhysicalMaximum
            | GlobalTag::UnitExponent
            | GlobalTag::ReportSize
            | GlobalTag::ReportCount,
        )
        | Tag::Local(
            LocalTag::UsageMinimum
            | LocalTag::UsageMaximum
            | LocalTag::DesignatorIndex
            | LocalTag::DesignatorMinimum
            | LocalTag::DesignatorMaximum
            | LocalTag::StringIndex
            | LocalTag::StringMinimum
            | LocalTag::StringMaximum,
        ) => v.to_string(),
    }
}

/// The value in binary, then the label of every data bit.
fn explain_flags(value: u32) -> String {
    let labels: Vec<_> = MAIN_FLAGS.iter().map(|f| f.chosen(value).label).collect();
    format!("{value:#010b} [{}]", labels.join(", "))
}

fn hex(value: u32) -> String {
    format!("{value:#04x}")
}
