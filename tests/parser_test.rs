//! Integration tests for parsing: the observable properties of the block
//! parser, splitter and layout estimator working together.

use deckmd::layout::{estimate_content_height, place_tables, LayoutMetrics};
use deckmd::{parse_str, BlockOp, Container, ContainerKind, TableCell, TableSpec, TableStyle};

fn open_close_counts(ops: &[BlockOp]) -> (usize, usize) {
    let opens = ops.iter().filter(|op| op.is_open()).count();
    let closes = ops.iter().filter(|op| op.is_close()).count();
    (opens, closes)
}

#[test]
fn stack_balance_holds_for_any_input() {
    let cases = [
        "plain text only",
        "::: columns 1/1\n::: column\na\n::: column\nb\n:::\n:::",
        "::: box\nunterminated",
        "::: columns 2/1\n::: column\n::: box dark\ntext",
        ":::\n:::\n:::",
        "::: column\nno columns parent\n",
        "# just a title",
        "",
    ];

    for case in cases {
        let deck = parse_str(case).unwrap();
        for slide in &deck.slides {
            let (opens, closes) = open_close_counts(&slide.body);
            assert_eq!(opens, closes, "unbalanced for input: {case:?}");
        }
    }
}

#[test]
fn slide_count_matches_separators() {
    for n in 0..5 {
        let text = vec!["# S\ncontent"; n + 1].join("\n---\n");
        let deck = parse_str(&text).unwrap();
        assert_eq!(deck.slide_count(), n + 1);
    }
}

#[test]
fn title_last_heading_wins() {
    // Current behavior: the last `# ` line provides the title. Covered
    // explicitly so any change to first-wins is a conscious one.
    let deck = parse_str("# First\n\nsome text\n\n# Second\n\nmore\n").unwrap();
    assert_eq!(deck.slides[0].title, "Second");
}

#[test]
fn list_grouping_splits_on_non_list_lines() {
    let deck = parse_str("* one\n* two\nbetween\n* three\n").unwrap();
    let body = &deck.slides[0].body;

    let list_opens = body.iter().filter(|op| **op == BlockOp::ListOpen).count();
    let list_closes = body.iter().filter(|op| **op == BlockOp::ListClose).count();
    assert_eq!(list_opens, 2);
    assert_eq!(list_closes, 2);

    let items: Vec<_> = body
        .iter()
        .filter_map(|op| match op {
            BlockOp::ListItem(t) => Some(t.as_str()),
            _ => None,
        })
        .collect();
    assert_eq!(items, ["one", "two", "three"]);
}

#[test]
fn bad_table_data_yields_no_table_and_keeps_siblings() {
    let text = "# T\n\nbefore\n\n::: table json\n{this is : not json}\n:::\n\nafter\n";
    let deck = parse_str(text).unwrap();
    let slide = &deck.slides[0];

    assert!(slide.tables.is_empty());
    let paragraphs: Vec<_> = slide
        .body
        .iter()
        .filter_map(|op| match op {
            BlockOp::Paragraph(t) => Some(t.as_str()),
            _ => None,
        })
        .collect();
    assert_eq!(paragraphs, ["before", "after"]);
}

#[test]
fn height_estimate_never_decreases_with_more_content() {
    let fence = "::: table json\n{\"headers\": [\"A\"]}\n:::\n";
    let mut prefix = String::new();
    let mut last = -1.0f32;

    for addition in [
        "a paragraph\n",
        "## a heading\n",
        "* item one\n* item two\n",
        "### smaller heading\n",
        "::: box\nboxed paragraph\n:::\n",
    ] {
        prefix.push_str(addition);
        let deck = parse_str(&format!("{prefix}{fence}")).unwrap();
        let estimate = deck.slides[0].tables[0].estimated_content_height;
        assert!(
            estimate > last,
            "estimate did not grow after appending {addition:?}"
        );
        last = estimate;
    }
}

#[test]
fn table_chaining_uses_row_count_and_gap() {
    let first = TableSpec {
        headers: vec!["A".into()],
        rows: vec![
            vec![TableCell::Text("1".into())],
            vec![TableCell::Text("2".into())],
        ],
        style: TableStyle {
            y: Some(2.0),
            ..Default::default()
        },
        ..Default::default()
    };
    let second = TableSpec {
        headers: vec!["B".into()],
        ..Default::default()
    };

    let placements = place_tables(&[first, second], &LayoutMetrics::default());
    assert_eq!(placements[0].y, 2.0);
    // 3 total rows (header + 2) at 0.35 each, then the 0.3 gap.
    assert!((placements[1].y - (2.0 + 3.0 * 0.35 + 0.3)).abs() < 1e-6);
}

#[test]
fn end_to_end_list_then_box() {
    let deck = parse_str("# Title\n\n* a\n* b\n\n::: box\n## Sec\n:::\n").unwrap();
    assert_eq!(deck.slide_count(), 1);

    let slide = &deck.slides[0];
    assert_eq!(slide.title, "Title");
    assert_eq!(
        slide.body,
        vec![
            BlockOp::ListOpen,
            BlockOp::ListItem("a".into()),
            BlockOp::ListItem("b".into()),
            BlockOp::ListClose,
            BlockOp::Open(Container::Box {
                class: String::new()
            }),
            BlockOp::Heading2("Sec".into()),
            BlockOp::Close(ContainerKind::Box),
        ]
    );
}

#[test]
fn estimator_matches_block_weights() {
    let deck = parse_str("para\n## head\n* a\n").unwrap();
    let expected = 0.35 + 0.4 + 0.1 + 0.25;
    let estimate = estimate_content_height(&deck.slides[0].body);
    assert!((estimate - expected).abs() < 1e-6);
}

#[test]
fn directive_soup_degrades_to_paragraphs() {
    // Unknown directives are content, not errors.
    let deck = parse_str("::: columns\n::: unknown thing\n:::: four colons\n").unwrap();
    let body = &deck.slides[0].body;
    assert!(body
        .iter()
        .all(|op| matches!(op, BlockOp::Paragraph(_))));
    assert_eq!(body.len(), 3);
}
