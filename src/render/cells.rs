//! Table cell resolution.
//!
//! A [`TableSpec`] describes cells abstractly; renderers want concrete rows
//! with every color and emphasis decided. Resolution applies the header
//! style, row-parity alternation for data rows, and highlight overrides,
//! falling back to the built-in colors for anything the table style leaves
//! unset.

use serde::{Deserialize, Serialize};

use crate::model::{Alignment, TableSpec, DEFAULT_CELL_FG};

/// Background of even (non-alternate) data rows.
const PLAIN_ROW_BG: &str = "FFFFFF";

/// A fully resolved cell, ready for a renderer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResolvedCell {
    /// Cell text.
    pub text: String,
    /// Background color (hex, no leading `#`).
    pub fill: String,
    /// Text color.
    pub color: String,
    /// Whether the text is bold.
    pub bold: bool,
    /// Horizontal alignment.
    pub align: Alignment,
}

/// Resolve a table into renderer rows: the header row first when headers are
/// present, then the data rows in order.
pub fn resolve_rows(spec: &TableSpec) -> Vec<Vec<ResolvedCell>> {
    let style = &spec.style;
    let mut rows = Vec::with_capacity(spec.total_row_count());

    if !spec.headers.is_empty() {
        rows.push(
            spec.headers
                .iter()
                .map(|header| ResolvedCell {
                    text: header.clone(),
                    fill: style.header_bg().to_string(),
                    color: style.header_fg().to_string(),
                    bold: true,
                    align: Alignment::Center,
                })
                .collect(),
        );
    }

    for (row_index, row) in spec.rows.iter().enumerate() {
        let alt_row = row_index % 2 == 1;
        rows.push(
            row.iter()
                .map(|cell| {
                    let highlight = cell.is_highlight();
                    let fill = if highlight {
                        style.highlight_bg().to_string()
                    } else if alt_row {
                        style.row_alt_bg().to_string()
                    } else {
                        PLAIN_ROW_BG.to_string()
                    };
                    let color = if highlight {
                        style.highlight_fg().to_string()
                    } else {
                        DEFAULT_CELL_FG.to_string()
                    };
                    ResolvedCell {
                        text: cell.text(),
                        fill,
                        color,
                        bold: highlight,
                        align: cell.alignment(),
                    }
                })
                .collect(),
        );
    }

    rows
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{TableCell, TableStyle, DEFAULT_HEADER_BG, DEFAULT_HIGHLIGHT_BG};

    fn spec() -> TableSpec {
        TableSpec {
            headers: vec!["A".into(), "B".into()],
            rows: vec![
                vec![TableCell::Text("r0a".into()), TableCell::Text("r0b".into())],
                vec![
                    TableCell::Text("r1a".into()),
                    TableCell::Styled {
                        text: "hot".into(),
                        style: Some("highlight".into()),
                        align: Some(Alignment::Right),
                    },
                ],
            ],
            ..Default::default()
        }
    }

    #[test]
    fn test_header_row_resolution() {
        let rows = resolve_rows(&spec());
        assert_eq!(rows.len(), 3);
        let header = &rows[0];
        assert_eq!(header[0].fill, DEFAULT_HEADER_BG);
        assert!(header[0].bold);
        assert_eq!(header[0].align, Alignment::Center);
    }

    #[test]
    fn test_row_parity_alternation() {
        let rows = resolve_rows(&spec());
        // First data row is even: plain white.
        assert_eq!(rows[1][0].fill, PLAIN_ROW_BG);
        // Second data row is odd: alternate background.
        assert_eq!(rows[2][0].fill, "F9F9F7");
    }

    #[test]
    fn test_highlight_overrides_parity() {
        let rows = resolve_rows(&spec());
        let hot = &rows[2][1];
        assert_eq!(hot.fill, DEFAULT_HIGHLIGHT_BG);
        assert!(hot.bold);
        assert_eq!(hot.align, Alignment::Right);
    }

    #[test]
    fn test_style_overrides_apply() {
        let mut spec = spec();
        spec.style = TableStyle {
            header_bg: Some("101010".into()),
            row_alt_bg: Some("202020".into()),
            ..Default::default()
        };
        let rows = resolve_rows(&spec);
        assert_eq!(rows[0][0].fill, "101010");
        assert_eq!(rows[2][0].fill, "202020");
    }

    #[test]
    fn test_headerless_table_has_no_header_row() {
        let mut spec = spec();
        spec.headers.clear();
        let rows = resolve_rows(&spec);
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0][0].text, "r0a");
    }
}
