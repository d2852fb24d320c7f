//! Error types for Rucksack
//!
//! Provides a unified error type for all operations. Every error is
//! recoverable and reportable; the core defines no terminating path.

use thiserror::Error;

/// Result type alias using RucksackError
pub type Result<T> = std::result::Result<T, RucksackError>;

/// Unified error type for Rucksack operations
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum RucksackError {
    // -------------------------------------------------------------------------
    // Store Errors
    // -------------------------------------------------------------------------
    /// Add attempted while the store is at capacity; the store is unchanged.
    #[error("backpack full: capacity of {capacity} items reached")]
    Full { capacity: usize },

    /// Quantity or priority out of range on add; the item is discarded.
    #[error("invalid {field}: {value} (quantity must be > 0, priority in 1..=5)")]
    InvalidField { field: &'static str, value: i64 },

    /// Remove or search target absent. `comparisons` is the number of name
    /// comparisons the scan performed before giving up.
    #[error("item '{name}' not found ({comparisons} comparisons)")]
    NotFound { name: String, comparisons: u64 },

    // -------------------------------------------------------------------------
    // Search Precondition Errors
    // -------------------------------------------------------------------------
    /// Binary search attempted without a valid sort-by-name. Sorting by
    /// category or priority does not qualify.
    #[error("binary search requires the backpack to be sorted by name; sort by name first")]
    NotSorted,

    // -------------------------------------------------------------------------
    // Presentation Errors
    // -------------------------------------------------------------------------
    /// Malformed or unrecognized menu selection.
    #[error("invalid command: {input}")]
    InvalidCommand { input: String },
}
