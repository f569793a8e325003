//! Vertical layout estimation for table placement.
//!
//! Table geometry is decided before any real rendering happens, so this
//! module works with two inputs of different quality: a heuristic content
//! height derived from the block sequence at parse time, and — when the
//! external renderer has reported them — measured content bounds for the
//! slide. Measured bounds always beat the heuristic; an explicit `y` in the
//! table style beats both.
//!
//! All distances are in inches on a 16:9 slide.

use serde::{Deserialize, Serialize};

use crate::model::{BlockOp, Container, ContainerKind, TableSpec};

/// Flat overhead added when entering a top-level box.
const BOX_OVERHEAD: f32 = 0.8;
/// Height of a paragraph line.
const PARAGRAPH_HEIGHT: f32 = 0.35;
/// Height of a paragraph line inside a box (boxes pack tighter).
const BOXED_PARAGRAPH_HEIGHT: f32 = 0.25;
/// Height of a section heading.
const HEADING2_HEIGHT: f32 = 0.4;
/// Height of a subsection heading.
const HEADING3_HEIGHT: f32 = 0.35;
/// Height of a list item.
const LIST_ITEM_HEIGHT: f32 = 0.25;
/// Overhead of opening a list.
const LIST_OPEN_HEIGHT: f32 = 0.1;

/// Fixed distances used when placing tables on a slide.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayoutMetrics {
    /// Y position directly under the title region; the fallback placement.
    pub default_table_y: f32,

    /// Lowest allowed table position, leaving room for the table itself.
    pub max_table_y: f32,

    /// Gap between preceding content and a table, and between chained tables.
    pub content_gap: f32,

    /// Fixed height of one table row.
    pub row_height: f32,

    /// Usable table width; columns subdivide it equally.
    pub table_width: f32,

    /// Left edge of every table.
    pub table_x: f32,

    /// Measured bounds at or below this are treated as "no content above
    /// the title" and ignored.
    pub min_content_y: f32,
}

impl LayoutMetrics {
    /// Metrics for the default 16:9 layout.
    pub fn new() -> Self {
        Self::default()
    }
}

impl Default for LayoutMetrics {
    fn default() -> Self {
        Self {
            default_table_y: 1.7,
            max_table_y: 5.5,
            content_gap: 0.3,
            row_height: 0.35,
            table_width: 8.5,
            table_x: 0.5,
            min_content_y: 1.3,
        }
    }
}

/// Computed geometry for one table on a slide.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TablePlacement {
    /// Left edge.
    pub x: f32,

    /// Top edge.
    pub y: f32,

    /// Total width.
    pub width: f32,

    /// Per-column widths; equal subdivisions of `width`.
    pub column_widths: Vec<f32>,
}

impl TablePlacement {
    /// Bottom edge of the table given the fixed row height.
    pub fn end_y(&self, row_count: usize, metrics: &LayoutMetrics) -> f32 {
        self.y + row_count as f32 * metrics.row_height
    }
}

/// Estimate the stacked height of the block content emitted so far.
///
/// This is a pre-render proxy, not a measurement: each op kind contributes a
/// fixed weight. A box adds a flat overhead on each transition into box
/// content (depth 0 to 1); nested boxes add nothing. Columns contribute
/// nothing since their content sits side by side. Raw passthrough lines
/// count by their markup prefix, the same way the emitted markup would.
pub fn estimate_content_height(ops: &[BlockOp]) -> f32 {
    let mut height = 0.0f32;
    let mut box_depth = 0u32;

    for op in ops {
        match op {
            BlockOp::Open(Container::Box { .. }) => {
                box_depth += 1;
                if box_depth == 1 {
                    height += BOX_OVERHEAD;
                }
            }
            // Every container close renders as the same markup close tag,
            // and the depth scan counts them all alike.
            BlockOp::Close(ContainerKind::Box)
            | BlockOp::Close(ContainerKind::Column)
            | BlockOp::Close(ContainerKind::Columns) => {
                box_depth = box_depth.saturating_sub(1);
            }
            BlockOp::Paragraph(_) => {
                height += if box_depth > 0 {
                    BOXED_PARAGRAPH_HEIGHT
                } else {
                    PARAGRAPH_HEIGHT
                };
            }
            BlockOp::Heading2(_) => height += HEADING2_HEIGHT,
            BlockOp::Heading3(_) => height += HEADING3_HEIGHT,
            BlockOp::ListItem(_) => height += LIST_ITEM_HEIGHT,
            BlockOp::ListOpen => height += LIST_OPEN_HEIGHT,
            BlockOp::Raw(line) => {
                let trimmed = line.trim();
                if trimmed.starts_with("<div class=\"box") {
                    box_depth += 1;
                    if box_depth == 1 {
                        height += BOX_OVERHEAD;
                    }
                } else if trimmed == "</div>" {
                    box_depth = box_depth.saturating_sub(1);
                } else if trimmed.starts_with("<p>") {
                    height += if box_depth > 0 {
                        BOXED_PARAGRAPH_HEIGHT
                    } else {
                        PARAGRAPH_HEIGHT
                    };
                } else if trimmed.starts_with("<h2>") {
                    height += HEADING2_HEIGHT;
                } else if trimmed.starts_with("<h3>") {
                    height += HEADING3_HEIGHT;
                } else if trimmed.starts_with("<li>") {
                    height += LIST_ITEM_HEIGHT;
                } else if trimmed.starts_with("<ul>") {
                    height += LIST_OPEN_HEIGHT;
                }
            }
            _ => {}
        }
    }

    height
}

/// Compute placements for all tables on one slide.
///
/// Placement of the first table, highest precedence first: an explicit `y`
/// from the table style; measured content bounds (when above
/// `min_content_y`) plus the content gap, clamped to
/// `[default_table_y, max_table_y]`; otherwise `default_table_y`. The second
/// and subsequent tables chain below the previous table's end regardless of
/// style or bounds. The header row counts toward a table's height when
/// headers are present.
pub fn place_tables(tables: &[TableSpec], metrics: &LayoutMetrics) -> Vec<TablePlacement> {
    let mut placements = Vec::with_capacity(tables.len());
    let mut prev_end_y = 0.0f32;

    for (index, table) in tables.iter().enumerate() {
        let mut y = metrics.default_table_y;

        if let Some(explicit) = table.style.y {
            y = explicit;
        } else if let Some(max_y) = table.measured_content_max_y {
            if max_y > metrics.min_content_y {
                y = (max_y + metrics.content_gap)
                    .max(metrics.default_table_y)
                    .min(metrics.max_table_y);
            }
        }

        if index > 0 && prev_end_y > 0.0 {
            y = prev_end_y + metrics.content_gap;
        }

        let columns = table.column_count();
        let column_width = metrics.table_width / columns as f32;
        let placement = TablePlacement {
            x: metrics.table_x,
            y,
            width: metrics.table_width,
            column_widths: vec![column_width; columns],
        };
        prev_end_y = placement.end_y(table.total_row_count(), metrics);
        placements.push(placement);
    }

    placements
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{TableCell, TableStyle};

    fn table_with_rows(headers: usize, rows: usize) -> TableSpec {
        TableSpec {
            headers: (0..headers).map(|i| format!("h{i}")).collect(),
            rows: (0..rows)
                .map(|_| vec![TableCell::Text("x".into()); headers.max(1)])
                .collect(),
            ..Default::default()
        }
    }

    #[test]
    fn test_estimate_weights() {
        let ops = vec![
            BlockOp::Heading2("Section".into()),
            BlockOp::Paragraph("text".into()),
            BlockOp::ListOpen,
            BlockOp::ListItem("a".into()),
            BlockOp::ListItem("b".into()),
            BlockOp::ListClose,
        ];
        let expected = 0.4 + 0.35 + 0.1 + 0.25 + 0.25;
        assert!((estimate_content_height(&ops) - expected).abs() < 1e-6);
    }

    #[test]
    fn test_estimate_box_overhead_once() {
        let ops = vec![
            BlockOp::Open(Container::Box {
                class: String::new(),
            }),
            BlockOp::Paragraph("inside".into()),
            BlockOp::Close(ContainerKind::Box),
        ];
        // Overhead plus the tighter boxed paragraph weight.
        assert!((estimate_content_height(&ops) - (0.8 + 0.25)).abs() < 1e-6);
    }

    #[test]
    fn test_estimate_nested_box_adds_no_overhead() {
        let ops = vec![
            BlockOp::Open(Container::Box {
                class: String::new(),
            }),
            BlockOp::Open(Container::Box {
                class: "inner".into(),
            }),
            BlockOp::Paragraph("deep".into()),
            BlockOp::Close(ContainerKind::Box),
            BlockOp::Close(ContainerKind::Box),
        ];
        assert!((estimate_content_height(&ops) - (0.8 + 0.25)).abs() < 1e-6);
    }

    #[test]
    fn test_estimate_columns_contribute_nothing() {
        let ops = vec![
            BlockOp::Open(Container::Columns {
                ratios: vec![1, 1],
            }),
            BlockOp::Open(Container::Column { ratio: 1 }),
            BlockOp::Close(ContainerKind::Column),
            BlockOp::Close(ContainerKind::Columns),
        ];
        assert_eq!(estimate_content_height(&ops), 0.0);
    }

    #[test]
    fn test_estimate_monotonic_under_appends() {
        let mut ops = vec![BlockOp::Paragraph("p".into())];
        let mut last = estimate_content_height(&ops);
        for _ in 0..10 {
            ops.push(BlockOp::Heading3("h".into()));
            ops.push(BlockOp::ListOpen);
            ops.push(BlockOp::ListItem("i".into()));
            ops.push(BlockOp::ListClose);
            let next = estimate_content_height(&ops);
            assert!(next >= last);
            last = next;
        }
    }

    #[test]
    fn test_estimate_counts_raw_markup() {
        let ops = vec![
            BlockOp::Raw("<div class=\"box kpi\">".into()),
            BlockOp::Raw("<p>42</p>".into()),
            BlockOp::Raw("</div>".into()),
            BlockOp::Raw("<p>after</p>".into()),
        ];
        assert!((estimate_content_height(&ops) - (0.8 + 0.25 + 0.35)).abs() < 1e-6);
    }

    #[test]
    fn test_place_default_position() {
        let tables = vec![table_with_rows(2, 2)];
        let placements = place_tables(&tables, &LayoutMetrics::default());
        assert_eq!(placements[0].y, 1.7);
        assert_eq!(placements[0].x, 0.5);
        assert_eq!(placements[0].column_widths, vec![4.25, 4.25]);
    }

    #[test]
    fn test_place_explicit_y_wins() {
        let mut table = table_with_rows(2, 2);
        table.style = TableStyle {
            y: Some(3.2),
            ..Default::default()
        };
        table.measured_content_max_y = Some(4.0);
        let placements = place_tables(&[table], &LayoutMetrics::default());
        assert_eq!(placements[0].y, 3.2);
    }

    #[test]
    fn test_place_measured_bounds_with_gap_and_clamp() {
        let mut table = table_with_rows(1, 1);
        table.measured_content_max_y = Some(2.4);
        let placements = place_tables(std::slice::from_ref(&table), &LayoutMetrics::default());
        assert!((placements[0].y - 2.7).abs() < 1e-6);

        // Clamped at the bottom of the safe region.
        table.measured_content_max_y = Some(6.8);
        let placements = place_tables(&[table], &LayoutMetrics::default());
        assert_eq!(placements[0].y, 5.5);
    }

    #[test]
    fn test_place_ignores_shallow_bounds() {
        // Bounds within the title region mean no content above the table.
        let mut table = table_with_rows(1, 1);
        table.measured_content_max_y = Some(1.1);
        let placements = place_tables(&[table], &LayoutMetrics::default());
        assert_eq!(placements[0].y, 1.7);
    }

    #[test]
    fn test_place_chains_second_table() {
        let mut first = table_with_rows(2, 2);
        first.style = TableStyle {
            y: Some(2.0),
            ..Default::default()
        };
        let second = table_with_rows(2, 1);
        let placements = place_tables(&[first, second], &LayoutMetrics::default());

        // First table: 3 total rows at 0.35 each, then the 0.3 gap.
        assert_eq!(placements[0].y, 2.0);
        let expected = 2.0 + 3.0 * 0.35 + 0.3;
        assert!((placements[1].y - expected).abs() < 1e-6);
    }

    #[test]
    fn test_headerless_table_row_count() {
        let mut first = table_with_rows(0, 2);
        first.style = TableStyle {
            y: Some(2.0),
            ..Default::default()
        };
        let second = table_with_rows(0, 1);
        let placements = place_tables(&[first, second], &LayoutMetrics::default());
        let expected = 2.0 + 2.0 * 0.35 + 0.3;
        assert!((placements[1].y - expected).abs() < 1e-6);
    }
}
