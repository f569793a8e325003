//! Table specification types.
//!
//! Tables are declared in a `::: table json` fence whose body is a JSON
//! object `{headers, rows, style, title}`. All fields are optional; rows may
//! mix bare values and styled cell objects.

use serde::{Deserialize, Serialize};

/// Default header row background (hex, no leading `#`).
pub const DEFAULT_HEADER_BG: &str = "AB955F";
/// Default header row foreground.
pub const DEFAULT_HEADER_FG: &str = "F4F0E8";
/// Default alternating row background.
pub const DEFAULT_ROW_ALT_BG: &str = "F9F9F7";
/// Default highlighted cell background.
pub const DEFAULT_HIGHLIGHT_BG: &str = "648651";
/// Default highlighted cell foreground.
pub const DEFAULT_HIGHLIGHT_FG: &str = "F4F0E8";
/// Default data cell text color.
pub const DEFAULT_CELL_FG: &str = "4A4A3E";

/// A parsed table declaration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TableSpec {
    /// Header cells. May be empty, in which case no header row is emitted.
    #[serde(default)]
    pub headers: Vec<String>,

    /// Data rows. May be empty; the table is still emitted as long as
    /// headers are present.
    #[serde(default)]
    pub rows: Vec<Vec<TableCell>>,

    /// Style overrides.
    #[serde(default)]
    pub style: TableStyle,

    /// Optional table title.
    #[serde(default)]
    pub title: Option<String>,

    /// Heuristic height (inches) of the block content emitted before this
    /// table on its slide. Computed at parse time, never from measurement.
    #[serde(default)]
    pub estimated_content_height: f32,

    /// Maximum vertical bound of the slide's rendered content, back-filled
    /// by the assembler once the external renderer reports it.
    #[serde(default)]
    pub measured_content_max_y: Option<f32>,
}

impl TableSpec {
    /// Number of columns, taken from the headers or the first row.
    pub fn column_count(&self) -> usize {
        if !self.headers.is_empty() {
            self.headers.len()
        } else {
            self.rows.first().map(|r| r.len()).unwrap_or(1)
        }
    }

    /// Total row count including the header row when headers are present.
    pub fn total_row_count(&self) -> usize {
        self.rows.len() + usize::from(!self.headers.is_empty())
    }

    /// Whether the table carries no content at all.
    pub fn is_empty(&self) -> bool {
        self.headers.is_empty() && self.rows.is_empty()
    }
}

impl Default for TableSpec {
    fn default() -> Self {
        Self {
            headers: Vec::new(),
            rows: Vec::new(),
            style: TableStyle::default(),
            title: None,
            estimated_content_height: 0.0,
            measured_content_max_y: None,
        }
    }
}

/// Style overrides for a table, as written in the fence body.
///
/// Colors are hex strings without a leading `#`. Missing values fall back to
/// the `DEFAULT_*` constants when the table is resolved for rendering.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TableStyle {
    /// Header row background color.
    pub header_bg: Option<String>,

    /// Header row text color.
    pub header_fg: Option<String>,

    /// Background for odd data rows.
    pub row_alt_bg: Option<String>,

    /// Background for highlighted cells.
    pub highlight_bg: Option<String>,

    /// Text color for highlighted cells.
    pub highlight_fg: Option<String>,

    /// Explicit vertical position (inches). Overrides placement heuristics.
    pub y: Option<f32>,
}

impl TableStyle {
    /// Header background, falling back to the default.
    pub fn header_bg(&self) -> &str {
        self.header_bg.as_deref().unwrap_or(DEFAULT_HEADER_BG)
    }

    /// Header foreground, falling back to the default.
    pub fn header_fg(&self) -> &str {
        self.header_fg.as_deref().unwrap_or(DEFAULT_HEADER_FG)
    }

    /// Alternating row background, falling back to the default.
    pub fn row_alt_bg(&self) -> &str {
        self.row_alt_bg.as_deref().unwrap_or(DEFAULT_ROW_ALT_BG)
    }

    /// Highlight background, falling back to the default.
    pub fn highlight_bg(&self) -> &str {
        self.highlight_bg.as_deref().unwrap_or(DEFAULT_HIGHLIGHT_BG)
    }

    /// Highlight foreground, falling back to the default.
    pub fn highlight_fg(&self) -> &str {
        self.highlight_fg.as_deref().unwrap_or(DEFAULT_HIGHLIGHT_FG)
    }
}

/// A single table cell as written in the fence body.
///
/// Cells are polymorphic: a bare string, a bare number, or an object with
/// text, an optional style tag, and an optional alignment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TableCell {
    /// A plain text cell.
    Text(String),

    /// A bare numeric cell, rendered as its decimal form.
    Number(f64),

    /// A styled cell object.
    Styled {
        /// Cell text. Missing text renders as empty.
        #[serde(default)]
        text: String,

        /// Style tag. `"highlight"` selects the highlight colors; other
        /// tags render as plain cells.
        #[serde(default)]
        style: Option<String>,

        /// Horizontal alignment. Defaults to left.
        #[serde(default)]
        align: Option<Alignment>,
    },
}

impl TableCell {
    /// Cell text as rendered.
    pub fn text(&self) -> String {
        match self {
            TableCell::Text(t) => t.clone(),
            TableCell::Number(n) => format_number(*n),
            TableCell::Styled { text, .. } => text.clone(),
        }
    }

    /// Whether the cell carries the `highlight` style tag.
    pub fn is_highlight(&self) -> bool {
        matches!(self, TableCell::Styled { style: Some(s), .. } if s == "highlight")
    }

    /// The cell's alignment, defaulting to left.
    pub fn alignment(&self) -> Alignment {
        match self {
            TableCell::Styled {
                align: Some(align), ..
            } => *align,
            _ => Alignment::Left,
        }
    }
}

/// Render an f64 the way JSON wrote it: integers without a trailing ".0".
fn format_number(n: f64) -> String {
    if n.fract() == 0.0 && n.abs() < 1e15 {
        format!("{}", n as i64)
    } else {
        format!("{}", n)
    }
}

/// Horizontal cell alignment.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Alignment {
    /// Left alignment
    #[default]
    Left,
    /// Center alignment
    Center,
    /// Right alignment
    Right,
}
