use csv::ReaderBuilder;
use hidscope::{
    avec::{
        decode_str,
        item::{Item, decode_items},
        lexer::tokenize_str,
    },
    explain::{
        describe_bit, describe_flags, describe_position, describe_prefix, explain_item, explain_item_in,
        explain_usage, explain_usage_page,
    },
    sans::prefix::ByteOrder,
};

fn item(text: &str) -> Item {
    let mut items = decode_items(tokenize_str(text), ByteOrder::default()).unwrap();
    assert_eq!(items.len(), 1, "{text}");
    items.remove(0)
}

#[test]
fn explain_items_table() {
    const PATH: &str = "fixtures/items.csv";
    let mut reader = ReaderBuilder::new().from_path(PATH).unwrap();

    for record in reader.records() {
        let record = record.unwrap();
        assert_eq!(explain_item(&item(&record[0])), record[1], "{}", &record[0]);
    }
}

#[test]
fn explain_usage_names() {
    assert_eq!(explain_usage(0x01, 0x02), "GenericDesktopControls/Mouse");
    assert_eq!(explain_usage(0x07, 0x04), "Keyboard/Keypad/KeyboardA");
    assert_eq!(explain_usage(0x09, 0x03), "Button/Button3");
    assert_eq!(explain_usage(0x01, 0xFF), "Generic Desktop Controls: 0xff");
    assert_eq!(explain_usage(0xFF00, 0x01), "0xff00: 0x01");

    assert_eq!(explain_usage_page(0x0C), "Consumer");
    assert_eq!(explain_usage_page(0xFF00), "0xff00");
}

#[test]
fn explain_usage_in_page() {
    let usage = item("09 30");

    assert_eq!(explain_item_in(&usage, None), "Local::Usage = 0x30");
    assert_eq!(
        explain_item_in(&usage, Some(0x01)),
        "Local::Usage = 0x30 (GenericDesktopControls/X)"
    );

    let page = item("05 01");
    assert_eq!(explain_item_in(&page, Some(0x09)), explain_item(&page));
}

#[test]
fn explain_extended_usage() {
    let usage = item("0B 00 01 00 02");

    assert_eq!(
        explain_item_in(&usage, None),
        "Local::Usage = 0x10002 (GenericDesktopControls/Mouse)"
    );
    assert_eq!(
        explain_item_in(&usage, Some(0x09)),
        "Local::Usage = 0x10002 (GenericDesktopControls/Mouse)"
    );
}

#[test]
fn describe_prefix_fields() {
    assert_eq!(
        describe_prefix(&item("05 01")),
        "`0x05 = 0b00000101`\n\n\
         - `01`- size: One byte\n\
         - `01`- type: Global\n\
         - `0000`- tag: Usage Page\n"
    );

    assert_eq!(
        describe_prefix(&item("C0")),
        "`0xc0 = 0b11000000`\n\n\
         - `00`- size: Zero bytes\n\
         - `00`- type: Main\n\
         - `1100`- tag: End Collection\n"
    );
}

#[test]
fn describe_flags_bits() {
    let doc = describe_flags(0x02);
    let lines: Vec<_> = doc.lines().collect();

    assert_eq!(lines.len(), 8);
    assert_eq!(lines[0], "- `0` (bit 0) - data / ~~constant~~");
    assert_eq!(lines[1], "- `1` (bit 1) - variable / ~~array~~");
    assert_eq!(lines[7], "- `0` (bit 8) - bit field / ~~buffered bytes~~");
}

#[test]
fn describe_bit_details() {
    assert_eq!(
        describe_bit(0, 0x01).unwrap(),
        "**constant** - static read-only field and cannot be modified (written) by the host.\n"
    );
    assert_eq!(
        describe_bit(2, 0x04).unwrap(),
        "**relative** - indicating the change in value from the last report\n\n\
         Mouse devices usually provide relative data, while tablets usually provide absolute data.\n"
    );

    // Bit 7 is not described for any main item.
    assert_eq!(describe_bit(7, 0x80), None);
}

#[test]
fn describe_tokens_by_position() {
    let d = decode_str("05 01, A1 01\n81 02 // input\nC0").unwrap();

    assert!(describe_position(&d, 1, 1).unwrap().starts_with("`0x05 = 0b00000101`"));
    assert_eq!(
        describe_position(&d, 1, 4).unwrap(),
        "`0x01 = 0b00000001`\n"
    );

    let data = describe_position(&d, 2, 5).unwrap();
    assert!(data.starts_with("`0x02 = 0b00000010`\nMain Item > Input\n\n"));
    assert!(data.ends_with(&describe_flags(0x02)));

    // Separators, comments and gaps describe nothing.
    assert_eq!(describe_position(&d, 1, 6), None);
    assert_eq!(describe_position(&d, 2, 10), None);
    assert_eq!(describe_position(&d, 4, 1), None);
}
