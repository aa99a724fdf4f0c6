//! Output format value object

use serde::{Deserialize, Serialize};

/// Output format for resolved facts
///
/// This is a domain concept representing how the output should be formatted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Boxed cards with colors (default)
    Cards,
    /// One line per fact, no decoration
    Plain,
    /// JSON output
    Json,
}

impl Default for OutputFormat {
    fn default() -> Self {
        Self::Cards
    }
}
