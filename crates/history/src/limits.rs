//! Retention limits for the undo/redo stacks.

use serde::{Deserialize, Serialize};

/// Smallest accepted value for the count limits
pub const MIN_COUNT_LIMIT: usize = 1;
/// Largest accepted value for the count limits
pub const MAX_COUNT_LIMIT: usize = 5000;
/// Largest accepted value for the size limit (500 MiB)
pub const MAX_SIZE_LIMIT: usize = 500 * 1024 * 1024;

/// Bounds applied to each stack of a [`CommandHistory`](crate::CommandHistory).
///
/// `min_limit` entries are always kept. Beyond that floor an entry is kept only while its
/// position is below `max_limit` and the cumulative size of the entries up to and
/// including it does not exceed `size_limit`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HistoryLimits {
    /// Number of entries kept regardless of their size
    pub min_limit: usize,
    /// Hard cap on the number of entries
    pub max_limit: usize,
    /// Soft cap, in bytes, on the cumulative size of the entries
    pub size_limit: usize,
}

impl Default for HistoryLimits {
    fn default() -> Self {
        Self {
            min_limit: 5,
            max_limit: 100,
            size_limit: 50 * 1024 * 1024,
        }
    }
}

impl HistoryLimits {
    pub fn new(min_limit: usize, max_limit: usize, size_limit: usize) -> Self {
        Self {
            min_limit,
            max_limit,
            size_limit,
        }
    }

    /// Whether `value` is acceptable for `min_limit` or `max_limit`
    pub fn is_valid_count(value: usize) -> bool {
        (MIN_COUNT_LIMIT..=MAX_COUNT_LIMIT).contains(&value)
    }

    /// Whether `value` is acceptable for `size_limit`
    pub fn is_valid_size(value: usize) -> bool {
        value <= MAX_SIZE_LIMIT
    }

    /// Clamp every field into its accepted range.
    ///
    /// Used for limits coming from a settings file, which may have been edited by hand.
    pub fn sanitized(self) -> Self {
        Self {
            min_limit: self.min_limit.clamp(MIN_COUNT_LIMIT, MAX_COUNT_LIMIT),
            max_limit: self.max_limit.clamp(MIN_COUNT_LIMIT, MAX_COUNT_LIMIT),
            size_limit: self.size_limit.min(MAX_SIZE_LIMIT),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let limits = HistoryLimits::default();
        assert!(HistoryLimits::is_valid_count(limits.min_limit));
        assert!(HistoryLimits::is_valid_count(limits.max_limit));
        assert!(HistoryLimits::is_valid_size(limits.size_limit));
        assert!(limits.min_limit <= limits.max_limit);
    }

    #[test]
    fn test_count_range() {
        assert!(!HistoryLimits::is_valid_count(0));
        assert!(HistoryLimits::is_valid_count(1));
        assert!(HistoryLimits::is_valid_count(5000));
        assert!(!HistoryLimits::is_valid_count(5001));
    }

    #[test]
    fn test_size_range() {
        assert!(HistoryLimits::is_valid_size(0));
        assert!(HistoryLimits::is_valid_size(MAX_SIZE_LIMIT));
        assert!(!HistoryLimits::is_valid_size(MAX_SIZE_LIMIT + 1));
    }

    #[test]
    fn test_sanitized_clamps() {
        let limits = HistoryLimits::new(0, 9000, usize::MAX).sanitized();
        assert_eq!(limits, HistoryLimits::new(1, 5000, MAX_SIZE_LIMIT));
    }

    #[test]
    fn test_deserialize_partial_uses_defaults() {
        let limits: HistoryLimits = serde_json::from_str(r#"{"max_limit": 20}"#).unwrap();
        assert_eq!(limits.max_limit, 20);
        assert_eq!(limits.min_limit, HistoryLimits::default().min_limit);
        assert_eq!(limits.size_limit, HistoryLimits::default().size_limit);
    }
}
