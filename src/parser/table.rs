//! Table fence parsing.
//!
//! The body of a `::: table json` fence is a JSON object with optional
//! `headers`, `rows`, `style` and `title` fields. Anything else is a parse
//! failure; in lenient mode the caller logs it and drops the table without
//! affecting the rest of the slide.

use crate::error::{Error, Result};
use crate::model::TableSpec;

/// Parse a table fence body into a [`TableSpec`].
pub fn parse_table_block(body: &str) -> Result<TableSpec> {
    serde_json::from_str(body).map_err(|e| Error::TableData(e.to_string()))
}
