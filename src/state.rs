//! Sort State Tracker
//!
//! Records which criterion the store was last sorted by and whether that
//! sort is still valid. Pure bookkeeping: the engine calls `mark_invalid`
//! as part of every store mutation and `mark_valid` only after a completed
//! sort; the search path queries `is_valid_for` before running.

use crate::sort::Criterion;

/// Tracks the sortedness of the store
///
/// `valid == true` means the store's current order is exactly what a stable
/// sort under `criterion` would produce over the current contents.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortState {
    /// Criterion of the last completed sort, if any
    criterion: Option<Criterion>,

    /// Whether that sort still describes the store's order
    valid: bool,
}

impl SortState {
    /// Fresh state: never sorted
    pub fn new() -> Self {
        Self {
            criterion: None,
            valid: false,
        }
    }

    /// Record that a mutation has broken any previous ordering
    ///
    /// The last criterion is retained for display purposes, but validity is
    /// gone until the next completed sort.
    pub fn mark_invalid(&mut self) {
        self.valid = false;
    }

    /// Record a completed sort under the given criterion
    pub fn mark_valid(&mut self, criterion: Criterion) {
        self.criterion = Some(criterion);
        self.valid = true;
    }

    /// Whether the store is currently sorted by exactly this criterion
    pub fn is_valid_for(&self, criterion: Criterion) -> bool {
        self.valid && self.criterion == Some(criterion)
    }

    /// The criterion the store is currently sorted by, if the sort is valid
    pub fn sorted_by(&self) -> Option<Criterion> {
        if self.valid {
            self.criterion
        } else {
            None
        }
    }
}

impl Default for SortState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_state_is_valid_for_nothing() {
        let state = SortState::new();
        assert!(!state.is_valid_for(Criterion::Name));
        assert!(!state.is_valid_for(Criterion::Category));
        assert!(!state.is_valid_for(Criterion::Priority));
        assert_eq!(state.sorted_by(), None);
    }

    #[test]
    fn mark_valid_applies_to_exactly_one_criterion() {
        let mut state = SortState::new();
        state.mark_valid(Criterion::Category);
        assert!(state.is_valid_for(Criterion::Category));
        assert!(!state.is_valid_for(Criterion::Name));
        assert_eq!(state.sorted_by(), Some(Criterion::Category));
    }

    #[test]
    fn mark_invalid_clears_validity_but_not_the_criterion_memory() {
        let mut state = SortState::new();
        state.mark_valid(Criterion::Name);
        state.mark_invalid();
        assert!(!state.is_valid_for(Criterion::Name));
        assert_eq!(state.sorted_by(), None);

        // A new sort restores validity
        state.mark_valid(Criterion::Name);
        assert!(state.is_valid_for(Criterion::Name));
    }
}
