//! Line-oriented block parser for a single slide.
//!
//! Each trimmed line is classified against an ordered list of patterns,
//! first match wins, and handled by a small stack machine that keeps
//! container nesting balanced. The classifier order is load-bearing: the
//! directive patterns overlap (`### ` vs `## `, `::: columns` vs `::: column`
//! vs `::: box` vs bare `:::`) and must be tried in exactly this order.
//!
//! Malformed markup never fails: unknown directives fall through to
//! paragraphs, a close with nothing open is a no-op, and containers still
//! open at the end of the slide are force-closed.

use std::sync::LazyLock;

use regex::Regex;

use crate::error::Result;
use crate::layout;
use crate::model::{BlockOp, Container, ContainerKind, Slide, TableSpec};

use super::options::{ErrorMode, ParseOptions};
use super::table;

/// Columns-open directive with a 2- or 3-way ratio spec.
static COLUMNS_OPEN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^::: columns *(\d+)/(\d+)(?:/(\d+))?").unwrap());

/// Box-open directive with an optional style class.
static BOX_OPEN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^::: box *([a-z-]*)").unwrap());

/// Classification of one trimmed line. Variants are listed in match order.
#[derive(Debug, Clone, PartialEq, Eq)]
enum LineKind<'a> {
    /// `::: table ...` or `:::table...`
    TableOpen,
    /// Empty after trimming
    Blank,
    /// `# ` slide title
    Title(&'a str),
    /// `### ` subsection heading
    Heading3(&'a str),
    /// `::: columns N/M[/K]`
    ColumnsOpen(Vec<u32>),
    /// Bare `::: column`
    ColumnOpen,
    /// `::: box [class]`
    BoxOpen(&'a str),
    /// Bare `:::`
    Close,
    /// `## ` section heading
    Heading2(&'a str),
    /// `* ` list item
    ListItem(&'a str),
    /// `> ` block quote
    Quote(&'a str),
    /// Line already in renderer-native markup
    Raw(&'a str),
    /// Anything else non-empty
    Paragraph(&'a str),
}

/// Classify a trimmed line. First match wins.
fn classify(trimmed: &str) -> LineKind<'_> {
    if trimmed.starts_with("::: table") || trimmed.starts_with(":::table") {
        return LineKind::TableOpen;
    }
    if trimmed.is_empty() {
        return LineKind::Blank;
    }
    if let Some(rest) = trimmed.strip_prefix("# ") {
        return LineKind::Title(rest);
    }
    if let Some(rest) = trimmed.strip_prefix("### ") {
        return LineKind::Heading3(rest);
    }
    if let Some(caps) = COLUMNS_OPEN.captures(trimmed) {
        let ratios = caps
            .iter()
            .skip(1)
            .flatten()
            .map(|m| m.as_str().parse().unwrap_or(1))
            .collect();
        return LineKind::ColumnsOpen(ratios);
    }
    if trimmed == "::: column" {
        return LineKind::ColumnOpen;
    }
    if let Some(caps) = BOX_OPEN.captures(trimmed) {
        let class = caps.get(1).map(|m| m.as_str()).unwrap_or("");
        return LineKind::BoxOpen(class);
    }
    if trimmed == ":::" {
        return LineKind::Close;
    }
    if let Some(rest) = trimmed.strip_prefix("## ") {
        return LineKind::Heading2(rest);
    }
    if let Some(rest) = trimmed.strip_prefix("* ") {
        return LineKind::ListItem(rest);
    }
    if let Some(rest) = trimmed.strip_prefix("> ") {
        return LineKind::Quote(rest);
    }
    if trimmed.starts_with('<') {
        return LineKind::Raw(trimmed);
    }
    LineKind::Paragraph(trimmed)
}

/// An open container on the parse stack.
#[derive(Debug, Clone)]
enum Frame {
    Columns { ratios: Vec<u32> },
    Column { ratio: u32 },
    Box { class: String },
}

impl Frame {
    fn kind(&self) -> ContainerKind {
        match self {
            Frame::Columns { .. } => ContainerKind::Columns,
            Frame::Column { .. } => ContainerKind::Column,
            Frame::Box { .. } => ContainerKind::Box,
        }
    }

    fn to_container(&self) -> Container {
        match self {
            Frame::Columns { ratios } => Container::Columns {
                ratios: ratios.clone(),
            },
            Frame::Column { ratio } => Container::Column { ratio: *ratio },
            Frame::Box { class } => Container::Box {
                class: class.clone(),
            },
        }
    }
}

/// Stateful parser for one slide's text span.
struct SlideParser<'a> {
    options: &'a ParseOptions,
    title: String,
    ops: Vec<BlockOp>,
    tables: Vec<TableSpec>,
    stack: Vec<Frame>,
    /// Ratio vector of the current columns row.
    ratios: Vec<u32>,
    /// Index of the column being filled; resets with each columns row.
    column_index: usize,
}

/// Parse one slide's text span into a [`Slide`].
///
/// Never fails on malformed markup. The only error path is a malformed
/// table fence body under strict table mode.
pub(crate) fn parse_slide(span: &str, options: &ParseOptions) -> Result<Slide> {
    SlideParser {
        options,
        title: String::new(),
        ops: Vec::new(),
        tables: Vec::new(),
        stack: Vec::new(),
        ratios: vec![1, 1],
        column_index: 0,
    }
    .run(span)
}

impl SlideParser<'_> {
    fn run(mut self, span: &str) -> Result<Slide> {
        let lines: Vec<&str> = span.lines().collect();

        let mut i = 0;
        while i < lines.len() {
            let kind = classify(lines[i].trim());

            if kind == LineKind::TableOpen {
                i = self.consume_table_fence(&lines, i)?;
                continue;
            }

            self.handle_line(kind, &lines, i);
            i += 1;
        }

        // Force-close whatever is still open so every emitted container has
        // a matching close, even for unterminated source.
        while let Some(frame) = self.stack.pop() {
            self.ops.push(BlockOp::Close(frame.kind()));
        }

        Ok(Slide {
            title: self.title,
            body: self.ops,
            tables: self.tables,
        })
    }

    /// Accumulate fence content verbatim up to the closing `:::`, parse it,
    /// and return the index of the first line after the fence. An
    /// unterminated fence swallows the rest of the slide and emits nothing.
    fn consume_table_fence(&mut self, lines: &[&str], open: usize) -> Result<usize> {
        let mut body = String::new();
        let mut i = open + 1;

        while i < lines.len() {
            if lines[i].trim() == ":::" {
                match table::parse_table_block(&body) {
                    Ok(mut spec) => {
                        spec.estimated_content_height = layout::estimate_content_height(&self.ops);
                        self.ops.push(BlockOp::TableAnchor(self.tables.len()));
                        self.tables.push(spec);
                    }
                    Err(err) if self.options.error_mode == ErrorMode::Strict => return Err(err),
                    Err(err) => {
                        log::warn!("dropping table with unparseable body: {err}");
                    }
                }
                return Ok(i + 1);
            }
            body.push_str(lines[i]);
            body.push('\n');
            i += 1;
        }

        Ok(i)
    }

    fn handle_line(&mut self, kind: LineKind<'_>, lines: &[&str], i: usize) {
        match kind {
            // Handled by the caller before classification dispatch.
            LineKind::TableOpen => {}

            LineKind::Blank => {
                // Blank lines disappear, except inside an open column where
                // multi-line content depends on them downstream.
                if self.in_column() {
                    self.ops.push(BlockOp::Blank);
                }
            }

            LineKind::Title(text) => {
                // Last occurrence wins; no block is emitted.
                self.title = text.to_string();
            }

            LineKind::Heading3(text) => self.ops.push(BlockOp::Heading3(text.to_string())),

            LineKind::ColumnsOpen(ratios) => {
                self.ratios = ratios.clone();
                self.column_index = 0;
                self.push_frame(Frame::Columns { ratios });
            }

            LineKind::ColumnOpen => {
                // An open column is implicitly closed by the next one.
                if matches!(self.stack.last(), Some(Frame::Column { .. })) {
                    self.stack.pop();
                    self.ops.push(BlockOp::Close(ContainerKind::Column));
                    self.column_index += 1;
                }
                let ratio = match self.ratios.get(self.column_index) {
                    Some(&r) if r > 0 => r,
                    _ => self.ratios.last().copied().unwrap_or(1),
                };
                self.push_frame(Frame::Column { ratio });
            }

            LineKind::BoxOpen(class) => self.push_frame(Frame::Box {
                class: class.to_string(),
            }),

            LineKind::Close => {
                // Popping an empty stack is a deliberate no-op.
                if let Some(frame) = self.stack.pop() {
                    let kind = frame.kind();
                    if kind == ContainerKind::Columns {
                        self.column_index = 0;
                    }
                    self.ops.push(BlockOp::Close(kind));
                }
            }

            LineKind::Heading2(text) => self.ops.push(BlockOp::Heading2(text.to_string())),

            LineKind::ListItem(text) => {
                let in_list = matches!(
                    self.ops.last(),
                    Some(BlockOp::ListOpen | BlockOp::ListItem(_))
                );
                if !in_list {
                    self.ops.push(BlockOp::ListOpen);
                }
                self.ops.push(BlockOp::ListItem(text.to_string()));

                // Lists never span a non-list line.
                let next_is_item = lines
                    .get(i + 1)
                    .map(|l| l.trim().starts_with("* "))
                    .unwrap_or(false);
                if !next_is_item {
                    self.ops.push(BlockOp::ListClose);
                }
            }

            LineKind::Quote(text) => self.ops.push(BlockOp::Quote(text.to_string())),

            LineKind::Raw(line) => self.ops.push(BlockOp::Raw(line.to_string())),

            LineKind::Paragraph(text) => self.ops.push(BlockOp::Paragraph(text.to_string())),
        }
    }

    fn push_frame(&mut self, frame: Frame) {
        self.ops.push(BlockOp::Open(frame.to_container()));
        self.stack.push(frame);
    }

    fn in_column(&self) -> bool {
        self.stack
            .iter()
            .any(|f| matches!(f, Frame::Column { .. }))
    }
}
