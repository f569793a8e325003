//! JSON export of parsed decks.

use crate::error::Result;
use crate::model::Deck;

/// JSON output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JsonFormat {
    /// Pretty-printed with indentation.
    Pretty,
    /// Compact single-line output.
    Compact,
}

/// Serialize a deck to JSON.
pub fn to_json(deck: &Deck, format: JsonFormat) -> Result<String> {
    let json = match format {
        JsonFormat::Pretty => serde_json::to_string_pretty(deck)?,
        JsonFormat::Compact => serde_json::to_string(deck)?,
    };
    Ok(json)
}
