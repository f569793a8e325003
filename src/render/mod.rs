//! Rendering: markup serialization, stylesheet generation, deck assembly.

mod assemble;
mod cells;
mod json;
mod markup;
mod stylesheet;

pub use assemble::{Assembler, ContentBounds, SlideRenderer};
pub use cells::{resolve_rows, ResolvedCell};
pub use json::{to_json, JsonFormat};
pub use markup::{body_markup, op_markup, rewrite_emphasis, slide_document};
pub use stylesheet::generate as generate_stylesheet;
