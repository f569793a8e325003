//! Parsing options and configuration.

/// Options for parsing deck source text.
#[derive(Debug, Clone)]
pub struct ParseOptions {
    /// How malformed table fence bodies are handled.
    pub error_mode: ErrorMode,

    /// Whether slides are parsed in parallel. Output order always matches
    /// source order either way.
    pub parallel: bool,
}

impl ParseOptions {
    /// Create new parse options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the error mode.
    pub fn with_error_mode(mut self, mode: ErrorMode) -> Self {
        self.error_mode = mode;
        self
    }

    /// Drop unparseable tables with a logged diagnostic (the default).
    pub fn lenient(mut self) -> Self {
        self.error_mode = ErrorMode::Lenient;
        self
    }

    /// Fail the parse on the first unparseable table body.
    pub fn strict_tables(mut self) -> Self {
        self.error_mode = ErrorMode::Strict;
        self
    }

    /// Enable or disable parallel slide parsing.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Disable parallel slide parsing.
    pub fn sequential(mut self) -> Self {
        self.parallel = false;
        self
    }
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            error_mode: ErrorMode::Lenient,
            parallel: true,
        }
    }
}

/// Error handling mode for table fence bodies.
///
/// Markup itself never errors; this only governs embedded table data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ErrorMode {
    /// Log and drop tables whose body does not parse.
    #[default]
    Lenient,
    /// Fail on the first table whose body does not parse.
    Strict,
}
