//! # deckmd
//!
//! Compiler for a constrained, directive-based Markdown dialect that
//! produces presentation decks: a sequence of slides, each a balanced tree
//! of typed content blocks plus embedded table specifications.
//!
//! ## Quick Start
//!
//! ```no_run
//! use deckmd::{parse_file, render};
//!
//! fn main() -> deckmd::Result<()> {
//!     // Parse a deck source file
//!     let deck = parse_file("deck.md")?;
//!
//!     // Export the parsed model as JSON
//!     let json = render::to_json(&deck, render::JsonFormat::Pretty)?;
//!     println!("{}", json);
//!
//!     Ok(())
//! }
//! ```
//!
//! ## The dialect
//!
//! - `# title` sets the slide title; `## ` and `### ` are headings
//! - `* ` list items, `> ` quotes, `**bold**` emphasis
//! - `::: columns 2/1` / `::: column` / `::: box [class]` containers,
//!   closed by a bare `:::`
//! - `::: table json` fences holding a JSON table specification
//! - slides separated by `---` rules (or inline `***` metadata blocks)
//!
//! Malformed markup never fails: unknown syntax passes through, unbalanced
//! containers are force-closed, and broken table data is logged and dropped.
//!
//! ## Features
//!
//! - **Typed model**: slides as flat, balanced block-op sequences
//! - **Table sub-language**: JSON fences with styling and polymorphic cells
//! - **Layout estimation**: heuristic table placement, refined once a
//!   renderer reports measured content bounds
//! - **Parallel parsing**: slides parse independently via Rayon
//! - **Theming**: a structured theme document drives the shared stylesheet

pub mod error;
pub mod layout;
pub mod model;
pub mod parser;
pub mod render;
pub mod theme;

// Re-export commonly used types
pub use error::{Error, Result};
pub use layout::{LayoutMetrics, TablePlacement};
pub use model::{
    Alignment, BlockOp, Container, ContainerKind, Deck, Slide, TableCell, TableSpec, TableStyle,
};
pub use parser::{DeckParser, ErrorMode, ParseOptions};
pub use render::{Assembler, ContentBounds, JsonFormat, SlideRenderer};
pub use theme::Theme;

use std::path::Path;

/// Parse deck source text into a [`Deck`].
///
/// # Example
///
/// ```
/// let deck = deckmd::parse_str("# Hello\n\n* a\n* b\n").unwrap();
/// assert_eq!(deck.slide_count(), 1);
/// assert_eq!(deck.slides[0].title, "Hello");
/// ```
pub fn parse_str(text: &str) -> Result<Deck> {
    DeckParser::new().parse(text)
}

/// Parse deck source text with custom options.
pub fn parse_str_with_options(text: &str, options: ParseOptions) -> Result<Deck> {
    DeckParser::with_options(options).parse(text)
}

/// Parse a deck source file.
///
/// # Example
///
/// ```no_run
/// let deck = deckmd::parse_file("deck.md").unwrap();
/// println!("Slides: {}", deck.slide_count());
/// ```
pub fn parse_file<P: AsRef<Path>>(path: P) -> Result<Deck> {
    let text = std::fs::read_to_string(path)?;
    parse_str(&text)
}

/// Parse a deck source file with custom options.
pub fn parse_file_with_options<P: AsRef<Path>>(path: P, options: ParseOptions) -> Result<Deck> {
    let text = std::fs::read_to_string(path)?;
    parse_str_with_options(&text, options)
}

/// Convert a deck source file straight to its JSON model.
pub fn to_json<P: AsRef<Path>>(path: P, format: JsonFormat) -> Result<String> {
    let deck = parse_file(path)?;
    render::to_json(&deck, format)
}

/// Builder for parsing and assembling decks.
///
/// # Example
///
/// ```no_run
/// use deckmd::{Deckmd, JsonFormat};
///
/// let json = Deckmd::new()
///     .sequential()
///     .parse_file("deck.md")?
///     .to_json(JsonFormat::Pretty)?;
/// # Ok::<(), deckmd::Error>(())
/// ```
pub struct Deckmd {
    parse_options: ParseOptions,
    theme: Theme,
    metrics: LayoutMetrics,
}

impl Deckmd {
    /// Create a new builder.
    pub fn new() -> Self {
        Self {
            parse_options: ParseOptions::default(),
            theme: Theme::default(),
            metrics: LayoutMetrics::default(),
        }
    }

    /// Fail on malformed table data instead of dropping it.
    pub fn strict_tables(mut self) -> Self {
        self.parse_options = self.parse_options.strict_tables();
        self
    }

    /// Disable parallel slide parsing.
    pub fn sequential(mut self) -> Self {
        self.parse_options = self.parse_options.sequential();
        self
    }

    /// Use a custom theme.
    pub fn with_theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }

    /// Use custom layout metrics.
    pub fn with_metrics(mut self, metrics: LayoutMetrics) -> Self {
        self.metrics = metrics;
        self
    }

    /// Parse deck source text and return a result wrapper.
    pub fn parse_str(self, text: &str) -> Result<DeckResult> {
        let deck = DeckParser::with_options(self.parse_options.clone()).parse(text)?;
        Ok(DeckResult {
            deck,
            theme: self.theme,
            metrics: self.metrics,
        })
    }

    /// Parse a deck source file and return a result wrapper.
    pub fn parse_file<P: AsRef<Path>>(self, path: P) -> Result<DeckResult> {
        let text = std::fs::read_to_string(path)?;
        self.parse_str(&text)
    }
}

impl Default for Deckmd {
    fn default() -> Self {
        Self::new()
    }
}

/// Result of parsing a deck, carrying the theme and metrics it was built
/// with so assembly and export need no further configuration.
pub struct DeckResult {
    /// The parsed deck
    pub deck: Deck,
    theme: Theme,
    metrics: LayoutMetrics,
}

impl DeckResult {
    /// Export the parsed model as JSON.
    pub fn to_json(&self, format: JsonFormat) -> Result<String> {
        render::to_json(&self.deck, format)
    }

    /// The shared stylesheet for the configured theme.
    pub fn stylesheet(&self) -> String {
        render::generate_stylesheet(&self.theme)
    }

    /// Assemble the deck through a renderer, consuming the result.
    pub fn assemble<R: SlideRenderer>(self, renderer: &mut R) -> Result<Deck> {
        Assembler::new()
            .with_theme(self.theme)
            .with_metrics(self.metrics)
            .assemble(self.deck, renderer)
    }

    /// Get the parsed deck.
    pub fn deck(&self) -> &Deck {
        &self.deck
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_str_basic() {
        let deck = parse_str("# Title\n\ncontent\n").unwrap();
        assert_eq!(deck.slide_count(), 1);
        assert_eq!(deck.slides[0].title, "Title");
    }

    #[test]
    fn test_builder_options_thread_through() {
        let result = Deckmd::new()
            .sequential()
            .parse_str("# A\n\n---\n\n# B\n")
            .unwrap();
        assert_eq!(result.deck().slide_count(), 2);
    }

    #[test]
    fn test_builder_strict_tables() {
        let result = Deckmd::new()
            .strict_tables()
            .parse_str("::: table json\nbroken\n:::\n");
        assert!(result.is_err());
    }

    #[test]
    fn test_result_stylesheet_uses_theme() {
        let mut theme = Theme::default();
        theme.palette.functional.background = "#0A0A0A".to_string();
        let result = Deckmd::new()
            .with_theme(theme)
            .parse_str("# A\n")
            .unwrap();
        assert!(result.stylesheet().contains("#0A0A0A"));
    }

    #[test]
    fn test_to_json_round_trip() {
        let result = Deckmd::new().parse_str("# A\n\n* x\n").unwrap();
        let json = result.to_json(JsonFormat::Compact).unwrap();
        let back: Deck = serde_json::from_str(&json).unwrap();
        assert_eq!(back.slides[0].title, "A");
    }
}
