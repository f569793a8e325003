//! Deck assembly and the external renderer boundary.
//!
//! The assembler owns the last stage of the pipeline: it discards empty
//! slides, serializes each remaining slide to its markup document, and
//! drives a [`SlideRenderer`] sequentially — render the slide, take the
//! measured content bounds from the renderer's reply, compute table
//! placements, then hand each table over. Per-slide sequencing is
//! deliberate: a slide's table placement depends on that slide's measured
//! bounds, and strictly ordered processing keeps the output deck trivially
//! in source order.

use crate::error::Result;
use crate::layout::{self, LayoutMetrics, TablePlacement};
use crate::model::{Deck, Slide, TableSpec};
use crate::theme::Theme;

use super::{markup, stylesheet};

/// Measured geometry reported by a renderer for one rendered slide.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ContentBounds {
    /// Maximum vertical extent (inches) occupied by rendered content, when
    /// the renderer can measure it.
    pub max_y: Option<f32>,
}

impl ContentBounds {
    /// Bounds with no measurement available.
    pub fn unmeasured() -> Self {
        Self::default()
    }

    /// Bounds with a measured maximum Y.
    pub fn measured(max_y: f32) -> Self {
        Self { max_y: Some(max_y) }
    }
}

/// The external slide renderer, called once per retained slide and once per
/// table after that slide's bounds are known.
pub trait SlideRenderer {
    /// Render one slide from its self-contained markup document and report
    /// the content bounds of what was laid out.
    fn render_slide(&mut self, index: usize, slide: &Slide, document: &str)
        -> Result<ContentBounds>;

    /// Place one table on a previously rendered slide.
    fn place_table(
        &mut self,
        slide_index: usize,
        table: &TableSpec,
        placement: &TablePlacement,
    ) -> Result<()>;
}

/// Assembles parsed decks and feeds them to a renderer.
#[derive(Debug, Clone, Default)]
pub struct Assembler {
    theme: Theme,
    metrics: LayoutMetrics,
}

impl Assembler {
    /// Create an assembler with the default theme and metrics.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the theme.
    pub fn with_theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }

    /// Set the layout metrics.
    pub fn with_metrics(mut self, metrics: LayoutMetrics) -> Self {
        self.metrics = metrics;
        self
    }

    /// The shared stylesheet for this assembler's theme.
    pub fn stylesheet(&self) -> String {
        stylesheet::generate(&self.theme)
    }

    /// Assemble a deck through the renderer.
    ///
    /// Returns the retained deck: empty slides dropped, table specs
    /// back-filled with the measured content bounds the renderer reported.
    pub fn assemble<R: SlideRenderer>(&self, mut deck: Deck, renderer: &mut R) -> Result<Deck> {
        deck.retain_non_empty();
        let stylesheet = self.stylesheet();

        for (index, slide) in deck.slides.iter_mut().enumerate() {
            let document = markup::slide_document(slide, &stylesheet);
            let bounds = renderer.render_slide(index, slide, &document)?;

            if !slide.has_tables() {
                continue;
            }

            if let Some(max_y) = bounds.max_y {
                for table in &mut slide.tables {
                    table.measured_content_max_y = Some(max_y);
                }
            }

            let placements = layout::place_tables(&slide.tables, &self.metrics);
            for (table, placement) in slide.tables.iter().zip(&placements) {
                match bounds.max_y {
                    Some(max_y) => log::info!(
                        "table on slide {} placed at y={:.2}\" (content max y {:.2}\")",
                        index + 1,
                        placement.y,
                        max_y,
                    ),
                    None => log::info!(
                        "table on slide {} placed at y={:.2}\" (no measured bounds)",
                        index + 1,
                        placement.y,
                    ),
                }
                renderer.place_table(index, table, placement)?;
            }
        }

        Ok(deck)
    }
}
