//! Command and reply definitions
//!
//! The contract between the presentation layer and the core. Presentation
//! parses raw input into a `Command`, the engine executes it, and the
//! resulting `Reply` (or error) is handed back for rendering. The core never
//! prints anything itself.

use crate::sort::Criterion;
use crate::store::Item;

/// A parsed command from the presentation layer
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Add an item built from raw field values
    ///
    /// Quantity and priority cross this boundary as `i64` so the core can
    /// re-validate ranges even for input the presentation already checked.
    Add {
        name: String,
        category: String,
        quantity: i64,
        priority: i64,
    },

    /// Remove the first item with this exact name
    Remove { name: String },

    /// List the items in current order
    List,

    /// Sort the store by a criterion
    Sort { criterion: Criterion },

    /// Binary-search for an item by name (requires sort-by-name)
    Search { name: String },
}

/// The result of a successfully executed command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    /// Item appended
    Added { name: String },

    /// Item removed (returned so the caller can render it)
    Removed { item: Item },

    /// Current contents plus the criterion they are sorted by, if any
    Listing {
        items: Vec<Item>,
        sorted_by: Option<Criterion>,
    },

    /// Sort completed
    Sorted {
        criterion: Criterion,
        comparisons: u64,
    },

    /// Binary search hit
    Found {
        item: Item,
        index: usize,
        comparisons: u64,
    },
}
