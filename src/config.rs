//! Configuration for Rucksack
//!
//! Centralized configuration with the reference sizing as defaults.

/// Main configuration for a Rucksack engine instance
#[derive(Debug, Clone)]
pub struct Config {
    // -------------------------------------------------------------------------
    // Store Configuration
    // -------------------------------------------------------------------------
    /// Maximum number of items the store will hold
    pub capacity: usize,

    // -------------------------------------------------------------------------
    // Field Bounds
    // -------------------------------------------------------------------------
    /// Item names longer than this are truncated on entry (in chars)
    pub max_name_len: usize,

    /// Item categories longer than this are truncated on entry (in chars)
    pub max_category_len: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            capacity: 10,
            max_name_len: 50,
            max_category_len: 30,
        }
    }
}

impl Config {
    /// Create a new config builder
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }
}

/// Builder for Config
#[derive(Default)]
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    /// Set the store capacity
    pub fn capacity(mut self, capacity: usize) -> Self {
        self.config.capacity = capacity;
        self
    }

    /// Set the maximum item name length (in chars)
    pub fn max_name_len(mut self, len: usize) -> Self {
        self.config.max_name_len = len;
        self
    }

    /// Set the maximum item category length (in chars)
    pub fn max_category_len(mut self, len: usize) -> Self {
        self.config.max_category_len = len;
        self
    }

    pub fn build(self) -> Config {
        self.config
    }
}
