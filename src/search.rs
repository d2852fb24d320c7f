//! Search Engine
//!
//! Bounded binary search over the name field.
//!
//! ## Responsibilities
//! - Classic low/high/mid binary search, one counted comparison per probe
//! - No precondition checking at this layer: the engine consults the sort
//!   state tracker before calling in, and never falls back to a linear scan
//!
//! The functions here assume the slice is in ascending name order; on an
//! unsorted slice the result is meaningless, which is exactly why the engine
//! gates access.

use std::cmp::Ordering;

use crate::store::Item;

/// Outcome of one binary search run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Probe {
    /// Index of a matching item, if any (with duplicate names, any match)
    pub index: Option<usize>,

    /// Number of name comparisons performed
    pub comparisons: u64,
}

/// Binary search for `target` over a slice sorted ascending by name
///
/// Maintains `low = 0, high = len - 1`; while `low <= high`, probes
/// `mid = low + (high - low) / 2` and narrows the half that cannot contain
/// the target. Exhausting the range yields a miss with the count intact.
pub fn binary_search_by_name(items: &[Item], target: &str) -> Probe {
    let mut comparisons: u64 = 0;

    if items.is_empty() {
        return Probe {
            index: None,
            comparisons,
        };
    }

    let mut low: usize = 0;
    let mut high: usize = items.len() - 1;

    while low <= high {
        let mid = low + (high - low) / 2;
        comparisons += 1;

        match items[mid].name.as_str().cmp(target) {
            Ordering::Equal => {
                return Probe {
                    index: Some(mid),
                    comparisons,
                };
            }
            Ordering::Less => low = mid + 1,
            Ordering::Greater => {
                if mid == 0 {
                    // Target sorts before the first element
                    break;
                }
                high = mid - 1;
            }
        }
    }

    Probe {
        index: None,
        comparisons,
    }
}
