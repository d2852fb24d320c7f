//! Store Module
//!
//! The bounded record store ("backpack") holding the items under management.
//!
//! ## Responsibilities
//! - Enforce the configured capacity at the add boundary
//! - Remove by name with a shifting delete that preserves relative order
//! - Linear lookup by name (first match wins, exact case-sensitive)
//! - Expose a read-only snapshot for listing
//!
//! ## Data Structure Choice
//! A plain `Vec<Item>` with explicit capacity enforcement. The bound is a
//! design choice (the backpack is small and fixed-size), not a memory-safety
//! concern, so rejection happens at the API boundary rather than in the
//! container itself.

mod item;

pub use item::{Item, MAX_PRIORITY, MIN_PRIORITY};

use crate::error::{Result, RucksackError};

/// Fixed-capacity ordered sequence of items
///
/// Order reflects either insertion order or the result of the last
/// successful sort. Invariant: `0 <= len <= capacity`, no gaps.
#[derive(Debug, Clone)]
pub struct Store {
    /// The items, in current order
    items: Vec<Item>,

    /// Maximum number of items accepted
    capacity: usize,
}

impl Store {
    /// Create an empty store with the given capacity
    pub fn new(capacity: usize) -> Self {
        Self {
            items: Vec::with_capacity(capacity),
            capacity,
        }
    }

    /// Append an item at the end
    ///
    /// Fails with `Full` when the store is at capacity; the store is
    /// unchanged in that case.
    pub fn add(&mut self, item: Item) -> Result<()> {
        if self.items.len() >= self.capacity {
            return Err(RucksackError::Full {
                capacity: self.capacity,
            });
        }

        self.items.push(item);
        Ok(())
    }

    /// Remove the first item whose name matches exactly
    ///
    /// All later items shift one position toward the front, so the relative
    /// order of the remainder is preserved. Returns the removed item, or
    /// `NotFound` carrying the number of name comparisons the scan made.
    pub fn remove_by_name(&mut self, name: &str) -> Result<Item> {
        match self.find_index_by_name(name) {
            Some(index) => Ok(self.items.remove(index)),
            None => Err(RucksackError::NotFound {
                name: name.to_string(),
                comparisons: self.items.len() as u64,
            }),
        }
    }

    /// Find the index of the first item with the given name
    ///
    /// Linear scan, no side effects.
    pub fn find_index_by_name(&self, name: &str) -> Option<usize> {
        self.items.iter().position(|item| item.name == name)
    }

    /// Read-only view of the items in current order
    pub fn snapshot(&self) -> &[Item] {
        &self.items
    }

    /// Mutable view for the sort engine
    pub(crate) fn items_mut(&mut self) -> &mut [Item] {
        &mut self.items
    }

    /// Number of items currently held
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the store holds no items
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Whether the store is at capacity
    pub fn is_full(&self) -> bool {
        self.items.len() >= self.capacity
    }

    /// The configured capacity
    pub fn capacity(&self) -> usize {
        self.capacity
    }
}
