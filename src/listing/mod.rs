//! Module for scanning pre-generated assembly listings for the
//! instructions emitted for a named function.

use serde::{Deserialize, Serialize};

pub mod scanner; // Line scan for a function's instruction region

/// Common error type for listing operations
#[derive(Debug, thiserror::Error)]
pub enum ListingError {
    #[error("failed to open listing {path}: {source}")]
    Open {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Result type for listing operations
pub type Result<T> = std::result::Result<T, ListingError>;

/// Instructions extracted from a listing for one function
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Excerpt {
    /// The function-name substring that was searched for
    pub function: String,
    /// The line that matched the function name, if any
    pub header: Option<String>,
    /// Instruction lines, verbatim
    pub instructions: Vec<String>,
}

impl Excerpt {
    /// Whether the function name was found in the listing
    pub fn found(&self) -> bool {
        self.header.is_some()
    }

    /// Number of instruction lines in the region
    pub fn instruction_count(&self) -> usize {
        self.instructions.len()
    }
}
