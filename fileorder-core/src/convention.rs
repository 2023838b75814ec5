use serde::{Deserialize, Serialize};
use std::fmt;

/// How numeric prefixes are encoded for one sibling set.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Convention {
    /// Literal text between the digits and the bare title (may be empty)
    pub delimiter: String,
    /// Minimum digit width; `0` means no enforced numbering
    pub prefix_min_length: usize,
    /// Number given to the first entry in final order
    pub starting_index: u64,
}

impl Convention {
    pub fn new(
        delimiter: impl Into<String>,
        prefix_min_length: usize,
        starting_index: u64,
    ) -> Self {
        Self {
            delimiter: delimiter.into(),
            prefix_min_length,
            starting_index,
        }
    }

    /// Copy of this convention with every `Some` override applied.
    pub fn with_overrides(&self, overrides: &ConventionOverrides) -> Self {
        Self {
            delimiter: overrides
                .delimiter
                .clone()
                .unwrap_or_else(|| self.delimiter.clone()),
            prefix_min_length: overrides
                .prefix_min_length
                .unwrap_or(self.prefix_min_length),
            starting_index: overrides.starting_index.unwrap_or(self.starting_index),
        }
    }
}

impl Default for Convention {
    fn default() -> Self {
        Self::new(" ", 0, 0)
    }
}

impl fmt::Display for Convention {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "delimiter {}, min width {}, starting at {}",
            describe_delimiter(&self.delimiter),
            self.prefix_min_length,
            self.starting_index
        )
    }
}

/// Partial convention supplied by the user on top of an inferred one.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConventionOverrides {
    pub delimiter: Option<String>,
    pub prefix_min_length: Option<usize>,
    pub starting_index: Option<u64>,
}

/// Human readable label for a delimiter; whitespace-only delimiters are
/// otherwise invisible in terminal output.
pub fn describe_delimiter(delimiter: &str) -> String {
    if delimiter.is_empty() {
        return "[none]".to_string();
    }
    if delimiter.chars().all(|c| c == ' ') {
        let count = delimiter.len();
        return format!("[{} space{}]", count, if count > 1 { "s" } else { "" });
    }
    format!("{delimiter:?}")
}
