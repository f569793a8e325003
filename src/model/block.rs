//! Block-level types emitted by the slide parser.
//!
//! A slide body is a flat, ordered sequence of [`BlockOp`]s rather than a
//! materialized tree: container nesting is expressed through balanced
//! `Open`/`Close` pairs, which is what the downstream markup serializer
//! consumes. The parser guarantees balance even for malformed input by
//! force-closing whatever is still open at the end of a slide.

use serde::{Deserialize, Serialize};

/// A container directive with its parsed arguments.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Container {
    /// A columns row holding relative width ratios for its columns.
    Columns {
        /// Relative width weights, one per expected column.
        ratios: Vec<u32>,
    },

    /// A single column cell with its flex ratio.
    Column {
        /// Relative width weight taken from the enclosing columns row.
        ratio: u32,
    },

    /// A styled box. The class may be empty.
    Box {
        /// Style class suffix (e.g. "highlight", "dark-gold").
        class: String,
    },
}

impl Container {
    /// The kind of this container, without its arguments.
    pub fn kind(&self) -> ContainerKind {
        match self {
            Container::Columns { .. } => ContainerKind::Columns,
            Container::Column { .. } => ContainerKind::Column,
            Container::Box { .. } => ContainerKind::Box,
        }
    }
}

/// Container kind tag, used by close markers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContainerKind {
    /// A columns row
    Columns,
    /// A single column
    Column,
    /// A styled box
    Box,
}

/// One instruction in a slide's flat block sequence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BlockOp {
    /// Open a container.
    Open(Container),

    /// Close the innermost container of the given kind.
    Close(ContainerKind),

    /// A section heading (`## `).
    Heading2(String),

    /// A subsection heading (`### `).
    Heading3(String),

    /// Start of an implicit list grouping consecutive list items.
    ListOpen,

    /// A single list item (`* `).
    ListItem(String),

    /// End of an implicit list.
    ListClose,

    /// A block quote line (`> `).
    Quote(String),

    /// A plain paragraph line.
    Paragraph(String),

    /// A line already in renderer-native markup, passed through verbatim.
    Raw(String),

    /// Placeholder marking where the table with the given index was declared.
    TableAnchor(usize),

    /// A blank line preserved inside an open column.
    Blank,
}

impl BlockOp {
    /// Whether this op opens a container.
    pub fn is_open(&self) -> bool {
        matches!(self, BlockOp::Open(_))
    }

    /// Whether this op closes a container.
    pub fn is_close(&self) -> bool {
        matches!(self, BlockOp::Close(_))
    }

    /// Plain text carried by this op, if any.
    pub fn text(&self) -> Option<&str> {
        match self {
            BlockOp::Heading2(t)
            | BlockOp::Heading3(t)
            | BlockOp::ListItem(t)
            | BlockOp::Quote(t)
            | BlockOp::Paragraph(t)
            | BlockOp::Raw(t) => Some(t),
            _ => None,
        }
    }
}
