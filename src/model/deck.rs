//! Deck-level types.

use serde::{Deserialize, Serialize};

use super::{BlockOp, TableSpec};

/// A parsed deck: an ordered sequence of slides.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Deck {
    /// Slides in source order.
    pub slides: Vec<Slide>,
}

impl Deck {
    /// Create a new empty deck.
    pub fn new() -> Self {
        Self { slides: Vec::new() }
    }

    /// Number of slides in the deck.
    pub fn slide_count(&self) -> usize {
        self.slides.len()
    }

    /// Total number of tables across all slides.
    pub fn table_count(&self) -> usize {
        self.slides.iter().map(|s| s.tables.len()).sum()
    }

    /// Add a slide to the deck.
    pub fn add_slide(&mut self, slide: Slide) {
        self.slides.push(slide);
    }

    /// Whether the deck has no slides.
    pub fn is_empty(&self) -> bool {
        self.slides.is_empty()
    }

    /// Drop slides with no title, no content and no tables, preserving the
    /// relative order of the rest.
    pub fn retain_non_empty(&mut self) {
        self.slides.retain(|s| !s.is_empty());
    }
}

/// A single slide: a title, a flat block sequence, and its table specs.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Slide {
    /// Slide title from the last `# ` line. Empty when the slide has none.
    pub title: String,

    /// Flat block instruction sequence in source order.
    pub body: Vec<BlockOp>,

    /// Tables declared on this slide, in source order. Each has a matching
    /// `TableAnchor` op in `body`.
    pub tables: Vec<TableSpec>,
}

impl Slide {
    /// Create an empty slide.
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the body contains nothing that would render visibly.
    pub fn body_is_blank(&self) -> bool {
        self.body.iter().all(|op| matches!(op, BlockOp::Blank))
    }

    /// A slide is empty when it has no title, no visible body and no tables.
    /// Empty slides are discarded at assembly time, never at parse time.
    pub fn is_empty(&self) -> bool {
        self.title.is_empty() && self.body_is_blank() && self.tables.is_empty()
    }

    /// Whether the slide declares any tables.
    pub fn has_tables(&self) -> bool {
        !self.tables.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::TableSpec;

    #[test]
    fn test_deck_counts() {
        let mut deck = Deck::new();
        assert!(deck.is_empty());

        let mut slide = Slide::new();
        slide.tables.push(TableSpec::default());
        slide.tables.push(TableSpec::default());
        deck.add_slide(slide);
        deck.add_slide(Slide::new());

        assert_eq!(deck.slide_count(), 2);
        assert_eq!(deck.table_count(), 2);
    }

    #[test]
    fn test_slide_emptiness() {
        let slide = Slide::new();
        assert!(slide.is_empty());

        let titled = Slide {
            title: "Intro".to_string(),
            ..Slide::new()
        };
        assert!(!titled.is_empty());

        // Blank ops alone do not make a slide worth keeping.
        let blanks = Slide {
            body: vec![BlockOp::Blank, BlockOp::Blank],
            ..Slide::new()
        };
        assert!(blanks.is_empty());

        // A table alone does.
        let tabled = Slide {
            tables: vec![TableSpec::default()],
            ..Slide::new()
        };
        assert!(!tabled.is_empty());
    }

    #[test]
    fn test_retain_non_empty_preserves_order() {
        let mut deck = Deck::new();
        deck.add_slide(Slide {
            title: "one".to_string(),
            ..Slide::new()
        });
        deck.add_slide(Slide::new());
        deck.add_slide(Slide {
            title: "three".to_string(),
            ..Slide::new()
        });

        deck.retain_non_empty();
        let titles: Vec<_> = deck.slides.iter().map(|s| s.title.as_str()).collect();
        assert_eq!(titles, ["one", "three"]);
    }
}
