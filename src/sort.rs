//! Sort Engine
//!
//! Stable in-place insertion sort over the store, parameterized by a
//! comparison criterion.
//!
//! ## Responsibilities
//! - One comparator per criterion, selected once per sort call
//! - Stability: equal-keyed items keep their relative input order
//! - Count every comparator invocation and report it to the caller
//!
//! ## Algorithm Choice
//! Insertion sort is O(n²) worst case but the backpack is small and bounded,
//! and the comparison counter makes the cost visible. The swap-based inner
//! loop performs exactly the same comparisons as the classic hold-and-shift
//! formulation and needs no key clone.

use std::cmp::Ordering;
use std::fmt;

use crate::store::Item;

/// The field the store is ordered by
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Criterion {
    /// Lexicographic ascending on the name field
    Name,

    /// Lexicographic ascending on the category field
    Category,

    /// Descending numeric order on priority (highest first)
    Priority,
}

impl Criterion {
    /// The comparator for this criterion
    ///
    /// Returned as a plain `fn` pointer so dispatch happens once per sort
    /// call, not per element.
    pub fn comparator(self) -> fn(&Item, &Item) -> Ordering {
        match self {
            Criterion::Name => |a, b| a.name.cmp(&b.name),
            Criterion::Category => |a, b| a.category.cmp(&b.category),
            Criterion::Priority => |a, b| b.priority.cmp(&a.priority),
        }
    }
}

impl fmt::Display for Criterion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Criterion::Name => write!(f, "name"),
            Criterion::Category => write!(f, "category"),
            Criterion::Priority => write!(f, "priority (descending)"),
        }
    }
}

/// Sort the items in place by the given criterion, returning the number of
/// comparator invocations
///
/// For each position `i` from 1 to n-1 the item is walked backward past every
/// preceding element that compares greater, one swap at a time. An element
/// that compares equal stops the walk, which is what makes the sort stable.
///
/// 0 or 1 items: trivially sorted, zero comparisons.
pub fn insertion_sort(items: &mut [Item], criterion: Criterion) -> u64 {
    let compare = criterion.comparator();
    let mut comparisons: u64 = 0;

    for i in 1..items.len() {
        let mut j = i;
        while j > 0 {
            comparisons += 1;
            if compare(&items[j - 1], &items[j]) == Ordering::Greater {
                items.swap(j - 1, j);
                j -= 1;
            } else {
                break;
            }
        }
    }

    comparisons
}
