//! Deck source parsing.
//!
//! The pipeline is: normalize and split the raw text into per-slide spans
//! (`normalize`), run the block stack machine over each span (`blocks`,
//! delegating table fences to `table`), and collect the slides into a
//! [`Deck`] in source order. Slide parsing is independent per slide and runs
//! on rayon when enabled; collection restores source order.

mod blocks;
mod normalize;
mod options;
mod table;

pub use options::{ErrorMode, ParseOptions};

use rayon::prelude::*;

use crate::error::Result;
use crate::model::Deck;

pub use normalize::{normalize, split_slides};
pub use table::parse_table_block;

/// Deck source parser.
#[derive(Debug, Clone, Default)]
pub struct DeckParser {
    options: ParseOptions,
}

impl DeckParser {
    /// Create a parser with default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a parser with custom options.
    pub fn with_options(options: ParseOptions) -> Self {
        Self { options }
    }

    /// Parse deck source text into a [`Deck`].
    ///
    /// Every span between separators becomes a slide, including empty ones;
    /// empty slides are only discarded later, at assembly time.
    pub fn parse(&self, text: &str) -> Result<Deck> {
        let spans = split_slides(text);

        let slides = if self.options.parallel {
            spans
                .par_iter()
                .map(|span| blocks::parse_slide(span, &self.options))
                .collect::<Result<Vec<_>>>()?
        } else {
            spans
                .iter()
                .map(|span| blocks::parse_slide(span, &self.options))
                .collect::<Result<Vec<_>>>()?
        };

        Ok(Deck { slides })
    }
}
