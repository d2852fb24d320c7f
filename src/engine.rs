//! Engine Module
//!
//! The owned context object that coordinates all components.
//!
//! ## Responsibilities
//! - Own the store and the sort state as one unit
//! - Couple every store mutation with sort-state invalidation
//! - Gate binary search on the sort-by-name precondition
//! - Route `Command`s to the right operation
//!
//! ## Atomicity Contract
//! Mutation and invalidation happen inside a single `&mut self` method, so
//! there is no observable window where the store has changed but the sort
//! state has not. Execution is single-threaded and synchronous; a concurrent
//! embedding would have to hold one lock across the same pair.

use crate::command::{Command, Reply};
use crate::config::Config;
use crate::error::{Result, RucksackError};
use crate::search;
use crate::sort::{self, Criterion};
use crate::state::SortState;
use crate::store::{Item, Store};

/// The inventory engine
///
/// Replaces the reference program's process-wide globals with an explicit
/// owned context passed into each operation.
#[derive(Debug)]
pub struct Engine {
    /// Engine configuration
    config: Config,

    /// The bounded backpack
    store: Store,

    /// Which criterion (if any) the store is currently sorted by
    sort_state: SortState,
}

impl Engine {
    /// Create an engine with the default configuration (capacity 10)
    pub fn new() -> Self {
        Self::with_config(Config::default())
    }

    /// Create an engine with the given configuration
    pub fn with_config(config: Config) -> Self {
        let store = Store::new(config.capacity);
        Self {
            config,
            store,
            sort_state: SortState::new(),
        }
    }

    /// Execute a command
    ///
    /// Routes commands to the appropriate handlers
    pub fn execute(&mut self, command: Command) -> Result<Reply> {
        match command {
            Command::Add {
                name,
                category,
                quantity,
                priority,
            } => {
                let item = Item::new(name, category, quantity, priority)?;
                let name = item.name.clone();
                self.add(item)?;
                Ok(Reply::Added { name })
            }
            Command::Remove { name } => {
                let item = self.remove_by_name(&name)?;
                Ok(Reply::Removed { item })
            }
            Command::List => Ok(Reply::Listing {
                items: self.store.snapshot().to_vec(),
                sorted_by: self.sort_state.sorted_by(),
            }),
            Command::Sort { criterion } => {
                let comparisons = self.sort(criterion);
                Ok(Reply::Sorted {
                    criterion,
                    comparisons,
                })
            }
            Command::Search { name } => {
                let (index, comparisons) = self.search_by_name(&name)?;
                Ok(Reply::Found {
                    item: self.store.snapshot()[index].clone(),
                    index,
                    comparisons,
                })
            }
        }
    }

    /// Add an item to the backpack
    ///
    /// Steps:
    /// 1. Reject if the store is at capacity
    /// 2. Re-validate the numeric ranges (even pre-checked input)
    /// 3. Truncate text fields to the configured caps
    /// 4. Append and invalidate the sort state in the same call
    pub fn add(&mut self, mut item: Item) -> Result<()> {
        if self.store.is_full() {
            return Err(RucksackError::Full {
                capacity: self.store.capacity(),
            });
        }

        item.validate()?;
        item.truncate_fields(self.config.max_name_len, self.config.max_category_len);

        let name = item.name.clone();
        self.store.add(item)?;
        self.sort_state.mark_invalid();

        tracing::debug!("added item '{}' ({} in backpack)", name, self.store.len());
        Ok(())
    }

    /// Remove the first item with this exact name
    ///
    /// On success the sort state is invalidated in the same call and the
    /// removed item is returned. The store is unchanged on a miss.
    pub fn remove_by_name(&mut self, name: &str) -> Result<Item> {
        let item = self.store.remove_by_name(name)?;
        self.sort_state.mark_invalid();

        tracing::debug!("removed item '{}' ({} in backpack)", name, self.store.len());
        Ok(item)
    }

    /// Linear lookup of the first item with this name, no side effects
    pub fn find_index_by_name(&self, name: &str) -> Option<usize> {
        self.store.find_index_by_name(name)
    }

    /// Read-only view of the items in current order
    pub fn snapshot(&self) -> &[Item] {
        self.store.snapshot()
    }

    /// Sort the backpack by the given criterion
    ///
    /// Returns the number of comparator invocations. A store with 0 or 1
    /// items costs zero comparisons but still becomes validly sorted under
    /// the criterion.
    pub fn sort(&mut self, criterion: Criterion) -> u64 {
        let comparisons = sort::insertion_sort(self.store.items_mut(), criterion);
        self.sort_state.mark_valid(criterion);

        tracing::debug!(
            "sorted {} items by {} in {} comparisons",
            self.store.len(),
            criterion,
            comparisons
        );
        comparisons
    }

    /// Binary-search the backpack for an item by name
    ///
    /// Steps:
    /// 1. Fail fast with `NotSorted` unless the sort state is exactly
    ///    (Name, valid) — no silent fallback to a linear scan
    /// 2. Run the bounded binary search
    /// 3. A miss on a validly sorted store is `NotFound`, carrying the
    ///    comparison count the search performed
    pub fn search_by_name(&self, name: &str) -> Result<(usize, u64)> {
        if !self.sort_state.is_valid_for(Criterion::Name) {
            return Err(RucksackError::NotSorted);
        }

        let probe = search::binary_search_by_name(self.store.snapshot(), name);
        tracing::debug!(
            "binary search for '{}': {:?} in {} comparisons",
            name,
            probe.index,
            probe.comparisons
        );

        match probe.index {
            Some(index) => Ok((index, probe.comparisons)),
            None => Err(RucksackError::NotFound {
                name: name.to_string(),
                comparisons: probe.comparisons,
            }),
        }
    }

    // =========================================================================
    // Accessors (for testing and rendering)
    // =========================================================================

    /// Number of items currently held
    pub fn len(&self) -> usize {
        self.store.len()
    }

    /// Whether the backpack holds no items
    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }

    /// The configured capacity
    pub fn capacity(&self) -> usize {
        self.store.capacity()
    }

    /// Whether the store is currently sorted by exactly this criterion
    pub fn is_sorted_by(&self, criterion: Criterion) -> bool {
        self.sort_state.is_valid_for(criterion)
    }

    /// The criterion the store is currently sorted by, if any
    pub fn sorted_by(&self) -> Option<Criterion> {
        self.sort_state.sorted_by()
    }

    /// The configuration
    pub fn config(&self) -> &Config {
        &self.config
    }
}

impl Default for Engine {
    fn default() -> Self {
        Self::new()
    }
}
