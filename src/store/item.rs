//! Item record definition and field validation.

use crate::error::{Result, RucksackError};

/// Lowest accepted priority
pub const MIN_PRIORITY: u8 = 1;

/// Highest accepted priority
pub const MAX_PRIORITY: u8 = 5;

/// A single inventory item
///
/// Plain value record; `name` acts as the lookup key but uniqueness is not
/// enforced — lookups take the first match. Fields are not mutated after
/// creation; only the store reorders or removes whole items.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Item {
    /// Lookup key (exact, case-sensitive match)
    pub name: String,

    /// Free-form grouping label
    pub category: String,

    /// How many of this item are carried (always > 0)
    pub quantity: u32,

    /// Importance from 1 (lowest) to 5 (highest)
    pub priority: u8,
}

impl Item {
    /// Build an item from raw field values, validating the numeric ranges
    ///
    /// `quantity` and `priority` arrive as `i64` so that out-of-range raw
    /// input is representable and rejected with `InvalidField` rather than
    /// silently wrapped.
    pub fn new(
        name: impl Into<String>,
        category: impl Into<String>,
        quantity: i64,
        priority: i64,
    ) -> Result<Self> {
        if quantity <= 0 || quantity > u32::MAX as i64 {
            return Err(RucksackError::InvalidField {
                field: "quantity",
                value: quantity,
            });
        }

        if priority < MIN_PRIORITY as i64 || priority > MAX_PRIORITY as i64 {
            return Err(RucksackError::InvalidField {
                field: "priority",
                value: priority,
            });
        }

        Ok(Self {
            name: name.into(),
            category: category.into(),
            quantity: quantity as u32,
            priority: priority as u8,
        })
    }

    /// Re-check the numeric ranges on an already-built item
    ///
    /// Fields are public, so the store boundary validates again even for
    /// items that did not come through [`Item::new`].
    pub fn validate(&self) -> Result<()> {
        if self.quantity == 0 {
            return Err(RucksackError::InvalidField {
                field: "quantity",
                value: self.quantity as i64,
            });
        }

        if !(MIN_PRIORITY..=MAX_PRIORITY).contains(&self.priority) {
            return Err(RucksackError::InvalidField {
                field: "priority",
                value: self.priority as i64,
            });
        }

        Ok(())
    }

    /// Cut the text fields down to the configured caps
    ///
    /// Truncation happens on char boundaries, never mid-codepoint.
    pub fn truncate_fields(&mut self, max_name_len: usize, max_category_len: usize) {
        truncate_chars(&mut self.name, max_name_len);
        truncate_chars(&mut self.category, max_category_len);
    }
}

/// Truncate a string to at most `max` chars, on a char boundary
fn truncate_chars(s: &mut String, max: usize) {
    if let Some((byte_index, _)) = s.char_indices().nth(max) {
        s.truncate(byte_index);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truncate_chars_respects_char_boundaries() {
        let mut s = String::from("caférucksack");
        truncate_chars(&mut s, 4);
        assert_eq!(s, "café");
    }

    #[test]
    fn truncate_chars_leaves_short_strings_alone() {
        let mut s = String::from("axe");
        truncate_chars(&mut s, 50);
        assert_eq!(s, "axe");
    }
}
