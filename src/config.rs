//! Run configuration for extraction.
//!
//! [`ExtractConfig`] is passed explicitly to the readers instead of living in
//! process-wide state.

use std::fmt;

/// JSON layout of an output array.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputStyle {
    /// Single line, no whitespace
    #[default]
    Compact,
    /// Indented with four spaces per level
    Pretty,
}

impl fmt::Display for OutputStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Compact => write!(f, "compact"),
            Self::Pretty => write!(f, "pretty"),
        }
    }
}

/// Configuration for one extraction run.
///
/// # Examples
///
/// ```ignore
/// use srcrec::ExtractConfig;
///
/// let config = ExtractConfig::default().with_verbose(true);
/// assert!(config.verbose);
/// ```
#[derive(Debug, Clone, Default)]
pub struct ExtractConfig {
    /// Log a summary of each record as it is extracted.
    pub verbose: bool,

    /// Override the default JSON layout for the record kind.
    ///
    /// When `None`, papers are written compact and materials pretty.
    pub output_style: Option<OutputStyle>,
}

impl ExtractConfig {
    /// Create a configuration with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable or disable per-record summaries.
    #[must_use]
    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    /// Force a JSON layout for every record kind.
    #[must_use]
    pub fn with_output_style(mut self, style: OutputStyle) -> Self {
        self.output_style = Some(style);
        self
    }

    /// Layout for paper arrays.
    #[must_use]
    pub fn paper_style(&self) -> OutputStyle {
        self.output_style.unwrap_or(OutputStyle::Compact)
    }

    /// Layout for material arrays.
    #[must_use]
    pub fn material_style(&self) -> OutputStyle {
        self.output_style.unwrap_or(OutputStyle::Pretty)
    }
}
