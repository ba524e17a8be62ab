//! Identifier allocation for registry entities.
//!
//! Ids have the shape `{prefix}{n}` where `n` is zero-padded to at least
//! three digits (`ppt_001`, `ppt_042`, `ppt_1000`). Each entity kind owns one
//! monotonic counter, so an id is never handed out twice regardless of how
//! the backing collection changes size.

use std::sync::atomic::{AtomicU64, Ordering};

/// Id prefix for presentations.
pub const PRESENTATION_ID_PREFIX: &str = "ppt_";

/// Id prefix for templates.
pub const TEMPLATE_ID_PREFIX: &str = "template_";

/// Minimum number of digits in the numeric part of an id.
const ID_DIGITS: usize = 3;

/// Format an id from its prefix and sequence number.
///
/// ```
/// use deckgate_core::ids::format_id;
///
/// assert_eq!(format_id("ppt_", 4), "ppt_004");
/// assert_eq!(format_id("ppt_", 1234), "ppt_1234");
/// ```
pub fn format_id(prefix: &str, seq: u64) -> String {
    format!("{prefix}{seq:0width$}", width = ID_DIGITS)
}

/// Parse the numeric suffix of an id carrying `prefix`.
///
/// Returns `None` when the prefix does not match or the remainder is not a
/// plain decimal number.
pub fn parse_seq(prefix: &str, id: &str) -> Option<u64> {
    let digits = id.strip_prefix(prefix)?;
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    digits.parse().ok()
}

/// Monotonic id source for a single entity kind.
#[derive(Debug)]
pub struct IdAllocator {
    prefix: &'static str,
    last: AtomicU64,
}

impl IdAllocator {
    /// Create an allocator whose first id has sequence number 1.
    pub fn new(prefix: &'static str) -> Self {
        Self::starting_after(prefix, 0)
    }

    /// Create an allocator whose first id has sequence number `last + 1`.
    pub fn starting_after(prefix: &'static str, last: u64) -> Self {
        Self {
            prefix,
            last: AtomicU64::new(last),
        }
    }

    /// Allocate the next id.
    pub fn next_id(&self) -> String {
        let seq = self.last.fetch_add(1, Ordering::SeqCst) + 1;
        format_id(self.prefix, seq)
    }

    /// Make sure future ids sort after `id` when it belongs to this kind.
    ///
    /// Ids with a foreign prefix or a non-numeric suffix are ignored.
    pub fn observe(&self, id: &str) {
        if let Some(seq) = parse_seq(self.prefix, id) {
            self.last.fetch_max(seq, Ordering::SeqCst);
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;
    use std::sync::Arc;
    use std::thread;

    use super::*;

    #[test]
    fn first_id_is_one() {
        let ids = IdAllocator::new(PRESENTATION_ID_PREFIX);
        assert_eq!(ids.next_id(), "ppt_001");
        assert_eq!(ids.next_id(), "ppt_002");
    }

    #[test]
    fn continues_after_seed() {
        let ids = IdAllocator::starting_after(PRESENTATION_ID_PREFIX, 3);
        assert_eq!(ids.next_id(), "ppt_004");
    }

    #[test]
    fn pads_to_three_digits_then_grows() {
        assert_eq!(format_id(TEMPLATE_ID_PREFIX, 7), "template_007");
        assert_eq!(format_id(PRESENTATION_ID_PREFIX, 999), "ppt_999");
        assert_eq!(format_id(PRESENTATION_ID_PREFIX, 1000), "ppt_1000");
    }

    #[test]
    fn parse_seq_rejects_foreign_ids() {
        assert_eq!(parse_seq("ppt_", "ppt_012"), Some(12));
        assert_eq!(parse_seq("ppt_", "template_012"), None);
        assert_eq!(parse_seq("ppt_", "ppt_"), None);
        assert_eq!(parse_seq("ppt_", "ppt_1a"), None);
        assert_eq!(parse_seq("ppt_", "ppt_-1"), None);
    }

    #[test]
    fn observe_only_moves_forward() {
        let ids = IdAllocator::new(PRESENTATION_ID_PREFIX);
        ids.observe("ppt_010");
        ids.observe("ppt_002");
        ids.observe("custom");
        assert_eq!(ids.next_id(), "ppt_011");
    }

    #[test]
    fn concurrent_allocation_never_repeats() {
        let ids = Arc::new(IdAllocator::new(PRESENTATION_ID_PREFIX));
        let handles: Vec<_> = (0..8)
            .map(|_| {
                let ids = Arc::clone(&ids);
                thread::spawn(move || (0..100).map(|_| ids.next_id()).collect::<Vec<_>>())
            })
            .collect();

        let mut seen = HashSet::new();
        for handle in handles {
            for id in handle.join().unwrap() {
                assert!(seen.insert(id), "duplicate id allocated");
            }
        }
        assert_eq!(seen.len(), 800);
    }
}
