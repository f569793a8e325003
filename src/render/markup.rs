//! Markup serialization of block sequences.
//!
//! The external renderer consumes a self-contained markup document per
//! slide: the block sequence serialized into HTML-ish markup, wrapped with
//! the slide title and the shared stylesheet. Table anchors serialize as
//! comments so the renderer can interleave table content in source order.

use std::sync::LazyLock;

use regex::Regex;

use crate::model::{BlockOp, Container, Slide};

/// Inline bold-emphasis spans.
static BOLD: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\*\*(.+?)\*\*").unwrap());

/// Rewrite `**text**` spans to strong-emphasis markers.
pub fn rewrite_emphasis(text: &str) -> String {
    BOLD.replace_all(text, "<strong>$1</strong>").into_owned()
}

/// Serialize one block op to its markup line.
///
/// Emphasis rewriting applies to subsection headings, list items and
/// paragraphs only; section headings and quotes carry their text verbatim.
pub fn op_markup(op: &BlockOp) -> String {
    match op {
        BlockOp::Open(Container::Columns { .. }) => "<div class=\"columns\">".to_string(),
        BlockOp::Open(Container::Column { ratio }) => {
            format!("<div class=\"column\" style=\"flex: {ratio};\">")
        }
        BlockOp::Open(Container::Box { class }) => format!("<div class=\"box {class}\">"),
        BlockOp::Close(_) => "</div>".to_string(),
        BlockOp::Heading2(text) => format!("<h2>{text}</h2>"),
        BlockOp::Heading3(text) => format!("<h3>{}</h3>", rewrite_emphasis(text)),
        BlockOp::ListOpen => "<ul>".to_string(),
        BlockOp::ListItem(text) => format!("<li>{}</li>", rewrite_emphasis(text)),
        BlockOp::ListClose => "</ul>".to_string(),
        BlockOp::Quote(text) => format!("<blockquote>{text}</blockquote>"),
        BlockOp::Paragraph(text) => format!("<p>{}</p>", rewrite_emphasis(text)),
        BlockOp::Raw(line) => line.clone(),
        BlockOp::TableAnchor(index) => format!("<!-- TABLE_PLACEHOLDER_{index} -->"),
        BlockOp::Blank => String::new(),
    }
}

/// Serialize a slide body to its markup form, one op per line.
pub fn body_markup(ops: &[BlockOp]) -> String {
    ops.iter()
        .map(op_markup)
        .collect::<Vec<_>>()
        .join("\n")
}

/// Build the self-contained markup document for one slide.
pub fn slide_document(slide: &Slide, stylesheet: &str) -> String {
    format!(
        "<!DOCTYPE html><html><head><style>{stylesheet}</style></head>\n\
         <body><div class=\"slide-container\"><div class=\"slide-title\"><h1>{title}</h1></div>\n\
         <div class=\"content\">{body}</div></div></body></html>",
        title = slide.title,
        body = body_markup(&slide.body),
    )
}
