use std::fs::read_to_string;

use hidscope::{
    avec::{
        Descriptor, Error,
        item::{ItemId, decode_items},
        lexer::{Position, Span, tokenize_str},
        state::StateError,
        tree::{NodeId, NodeKind, TreeBuilder},
    },
    explain::render,
    sans::{prefix::ByteOrder, tag::GlobalTag},
};

fn decode(text: &str) -> Descriptor {
    hidscope::avec::decode_str(text).unwrap()
}

fn span(line: usize, start: usize, end: usize) -> Span {
    Span {
        start: Position::new(line, start),
        end: Position::new(line, end),
    }
}

fn ids(ids: &[usize]) -> Vec<ItemId> {
    ids.iter().copied().map(ItemId).collect()
}

#[test]
fn build_nested_collections() {
    let d = decode("05 01 A1 01 05 01 A1 00 09 01 81 02 C0 C0");
    let tree = &d.tree;

    assert_eq!(tree.roots(), [NodeId(0)]);
    assert_eq!(tree.nodes().len(), 3);

    let application = &tree[NodeId(0)];
    assert_eq!(application.parent, None);
    assert_eq!(application.context, ids(&[0]));
    assert_eq!(application.children(), [NodeId(1)]);
    assert_eq!(
        application.kind,
        NodeKind::Collection {
            opener: ItemId(1),
            closer: Some(ItemId(7)),
            children: vec![NodeId(1)],
        }
    );

    let physical = &tree[NodeId(1)];
    assert_eq!(physical.parent, Some(NodeId(0)));
    assert_eq!(physical.context, ids(&[2]));
    assert_eq!(physical.usage_page, Some(ItemId(2)));
    assert_eq!(physical.children(), [NodeId(2)]);

    let report = &tree[NodeId(2)];
    assert!(!report.is_collection());
    assert_eq!(report.parent, Some(NodeId(1)));
    assert_eq!(report.context, ids(&[2, 4]));
    assert_eq!(report.main_item(), ItemId(5));
    assert_eq!(
        report.kind,
        NodeKind::Report {
            trigger: ItemId(5),
            usages: ids(&[4]),
        }
    );

    assert_eq!(
        tree.ancestors(NodeId(2)).collect::<Vec<_>>(),
        [NodeId(1), NodeId(0)]
    );
    assert_eq!(d.usages(NodeId(2)).map(|u| u.value).collect::<Vec<_>>(), [0x01]);
    assert_eq!(d.usages(NodeId(0)).count(), 0);
}

#[test]
fn walk_multiple_roots() {
    let d = decode("A1 01 C0 A1 02 A1 00 C0 C0");

    assert_eq!(d.tree.roots(), [NodeId(0), NodeId(1)]);
    assert_eq!(
        d.tree.walk().collect::<Vec<_>>(),
        [(0, NodeId(0)), (0, NodeId(1)), (1, NodeId(2))]
    );
}

#[test]
fn end_collection_without_collection() {
    let err = hidscope::avec::decode_str("05 01\nC0").unwrap_err();

    assert_eq!(
        err,
        Error::State {
            reason: StateError::NoOpenCollection,
            span: span(2, 1, 2),
        }
    );
}

#[test]
fn field_outside_collection() {
    let err = hidscope::avec::decode_str("81 02").unwrap_err();

    assert_eq!(
        err,
        Error::State {
            reason: StateError::FieldOutsideCollection,
            span: span(1, 1, 5),
        }
    );
}

#[test]
fn unterminated_collection() {
    let err = hidscope::avec::decode_str("A1 01 A1 00 C0").unwrap_err();

    assert_eq!(
        err,
        Error::UnterminatedCollection {
            open: 1,
            span: span(1, 1, 5),
        }
    );
}

#[test]
fn globals_persist_locals_reset() {
    let d = decode("05 01 A1 01 09 30 81 02 81 02 C0");
    let reports = d.tree[NodeId(0)].children();
    assert_eq!(reports, [NodeId(1), NodeId(2)]);

    assert_eq!(d.tree[NodeId(1)].context, ids(&[0, 2]));
    assert_eq!(d.tree[NodeId(2)].context, ids(&[0]));
    assert_eq!(d.usages(NodeId(2)).count(), 0);
    assert_eq!(d.usage_page(NodeId(2)), Some(0x01));
}

#[test]
fn snapshot_orders_globals_by_tag() {
    let d = decode("75 08 05 01 09 30 09 30 A1 01 C0");

    // Usage Page sorts before Report Size; both usages are kept.
    assert_eq!(d.tree[NodeId(0)].context, ids(&[1, 0, 2, 3]));
}

#[test]
fn push_pop_restores_globals() {
    let d = decode("05 01 A4 05 09 A1 01 81 02 B4 81 02 C0");
    let tree = &d.tree;

    assert_eq!(tree[NodeId(0)].usage_page, Some(ItemId(2)));
    assert_eq!(tree[NodeId(1)].usage_page, Some(ItemId(2)));
    assert_eq!(tree[NodeId(2)].usage_page, Some(ItemId(0)));
    assert_eq!(d.usage_page(NodeId(1)), Some(0x09));
    assert_eq!(d.usage_page(NodeId(2)), Some(0x01));
}

#[test]
fn pop_without_push() {
    let err = hidscope::avec::decode_str("B4").unwrap_err();

    assert_eq!(
        err,
        Error::State {
            reason: StateError::EmptyStack,
            span: span(1, 1, 2),
        }
    );
}

#[test]
fn usage_page_falls_back_to_ancestors() {
    let d = decode("A4 05 01 A1 01 B4 A1 00 81 02 C0 C0");
    let tree = &d.tree;

    assert_eq!(tree[NodeId(1)].usage_page, None);
    assert_eq!(tree[NodeId(2)].usage_page, None);
    assert_eq!(tree.usage_page(NodeId(1)), Some(ItemId(1)));
    assert_eq!(tree.usage_page(NodeId(2)), Some(ItemId(1)));
    assert_eq!(d.usage_page(NodeId(2)), Some(0x01));
}

#[test]
fn build_item_by_item() {
    let text = "05 01 A4 75 08 A1 01 09 30 81 02 C0 B4";
    let items = decode_items(tokenize_str(text), ByteOrder::default()).unwrap();
    let mut builder = TreeBuilder::new();

    for (i, item) in items.iter().enumerate().take(5) {
        builder.push(ItemId(i), item).unwrap();
    }

    assert_eq!(builder.depth(), 1);
    let state = builder.state();
    assert_eq!(state.depth(), 1);
    assert_eq!(state.global(GlobalTag::UsagePage), Some(ItemId(0)));
    assert_eq!(state.global(GlobalTag::ReportSize), Some(ItemId(2)));
    assert_eq!(state.global(GlobalTag::ReportCount), None);
    assert_eq!(state.usages(), [ItemId(4)]);

    for (i, item) in items.iter().enumerate().skip(5) {
        builder.push(ItemId(i), item).unwrap();
    }

    assert_eq!(builder.depth(), 0);
    let state = builder.state();
    assert_eq!(state.depth(), 0);
    assert_eq!(state.global(GlobalTag::UsagePage), Some(ItemId(0)));
    assert_eq!(state.global(GlobalTag::ReportSize), None);
    assert!(state.usages().is_empty());

    let tree = builder.finish().unwrap();
    assert!(tree.get(NodeId(0)).is_some_and(|n| n.is_collection()));
    assert_eq!(tree.get(NodeId(1)).map(|n| n.main_item()), Some(ItemId(5)));
    assert_eq!(tree.get(NodeId(2)), None);
}

#[test]
fn builder_finish_with_open_collection() {
    let items = decode_items(tokenize_str("A1 01"), ByteOrder::default()).unwrap();
    let mut builder = TreeBuilder::new();
    builder.push(ItemId(0), &items[0]).unwrap();

    assert_eq!(builder.depth(), 1);
    assert!(matches!(
        builder.finish(),
        Err(Error::UnterminatedCollection { open: 1, .. })
    ));
}

#[test]
fn render_mouse() {
    let _ = env_logger::builder().is_test(true).try_init();

    let text = read_to_string("fixtures/mouse.hid").unwrap();
    let expected = read_to_string("fixtures/mouse.render").unwrap();

    let d = decode(&text);
    assert_eq!(d.items.len(), 26);
    assert_eq!(render(&d).trim_end(), expected.trim_end());
}
