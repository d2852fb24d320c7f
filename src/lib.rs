//! # Rucksack
//!
//! A bounded, in-memory inventory core ("backpack") with:
//! - Capacity-enforced record store with shifting remove
//! - Stable insertion sort with a pluggable comparison criterion
//! - Binary search gated on a tracked sortedness precondition
//! - Comparison counters exposed for every sort and search
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                     Menu / Presentation                      │
//! │                   (rucksack-cli binary)                      │
//! └─────────────────────┬───────────────────────────────────────┘
//!                       │ Command / Reply
//! ┌─────────────────────▼───────────────────────────────────────┐
//! │                        Engine                                │
//! │        (owns the store + sort state, routes commands)        │
//! └───────┬──────────────────┬──────────────────┬───────────────┘
//!         │                  │                  │
//!         ▼                  ▼                  ▼
//!  ┌─────────────┐    ┌─────────────┐    ┌─────────────┐
//!  │    Store    │    │ Sort Engine │    │   Search    │
//!  │  (bounded)  │    │ (insertion) │    │  (binary)   │
//!  └──────┬──────┘    └──────┬──────┘    └──────┬──────┘
//!         │ invalidates      │ validates        │ consults
//!         └─────────────┐    │    ┌─────────────┘
//!                       ▼    ▼    ▼
//!                    ┌─────────────┐
//!                    │ Sort State  │
//!                    │  Tracker    │
//!                    └─────────────┘
//! ```
//!
//! Every mutation of the store invalidates the sort state as part of the same
//! call; binary search refuses to run unless the store is currently sorted by
//! name. The core performs no I/O of its own.

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod config;

pub mod store;
pub mod sort;
pub mod search;
pub mod state;
pub mod command;
pub mod engine;

// =============================================================================
// Public API Re-exports
// =============================================================================

pub use error::{Result, RucksackError};
pub use config::Config;
pub use store::{Item, Store};
pub use sort::Criterion;
pub use state::SortState;
pub use command::{Command, Reply};
pub use engine::Engine;

// =============================================================================
// Version Info
// =============================================================================

/// Current version of Rucksack
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
