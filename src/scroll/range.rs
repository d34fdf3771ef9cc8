// src/scroll/range.rs
use std::ops::Range;

/// The slice of the list that is currently materialized, `start..end`.
///
/// Always satisfies `start <= end <= len` for the list it was computed
/// against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct VisibleRange {
    pub start: usize,
    pub end: usize,
}

impl VisibleRange {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// Window for a scroll position, expanded by `buffer_size` rows on each
    /// side and clamped to the list.
    pub fn compute(
        scroll_top: u64,
        container_height: u64,
        item_height: u32,
        buffer_size: usize,
        len: usize,
    ) -> Self {
        let item_height = u64::from(item_height.max(1));

        let raw_start = to_index(scroll_top / item_height);
        let raw_end = to_index((scroll_top.saturating_add(container_height)).div_ceil(item_height));

        let end = raw_end.saturating_add(buffer_size).min(len);
        // A stale offset past the end of the list must not invert the range
        let start = raw_start.saturating_sub(buffer_size).min(end);

        Self { start, end }
    }

    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    pub fn contains(&self, index: usize) -> bool {
        index >= self.start && index < self.end
    }

    pub fn as_range(&self) -> Range<usize> {
        self.start..self.end
    }

    /// Translation of the content node so that row `start` sits at its
    /// absolute position.
    pub fn content_offset(&self, item_height: u32) -> u64 {
        self.start as u64 * u64::from(item_height)
    }
}

fn to_index(value: u64) -> usize {
    usize::try_from(value).unwrap_or(usize::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_initial_window_with_buffer() {
        let range = VisibleRange::compute(0, 200, 50, 1, 100);
        assert_eq!(range, VisibleRange::new(0, 5));
    }

    #[test]
    fn test_scrolled_window_with_buffer() {
        let range = VisibleRange::compute(500, 200, 50, 1, 100);
        assert_eq!(range, VisibleRange::new(9, 15));
        assert_eq!(range.content_offset(50), 450);
    }

    #[test]
    fn test_partial_row_rounds_out() {
        // 30..230 touches rows 0 through 4
        let range = VisibleRange::compute(30, 200, 50, 0, 100);
        assert_eq!(range, VisibleRange::new(0, 5));
    }

    #[test]
    fn test_end_clamped_to_len() {
        let range = VisibleRange::compute(4800, 200, 50, 5, 100);
        assert_eq!(range, VisibleRange::new(91, 100));
    }

    #[test]
    fn test_empty_list() {
        for offset in [0, 50, 10_000] {
            let range = VisibleRange::compute(offset, 200, 50, 5, 0);
            assert_eq!(range, VisibleRange::new(0, 0));
            assert!(range.is_empty());
        }
    }

    #[test]
    fn test_stale_offset_never_inverts() {
        // Offset for row 50 against a five row list
        let range = VisibleRange::compute(2500, 200, 50, 1, 5);
        assert!(range.start <= range.end);
        assert_eq!(range.end, 5);
        assert!(range.is_empty());
    }

    #[test]
    fn test_window_size_is_bounded() {
        let container = 200;
        let item = 50;
        let buffer = 5;
        let bound = (container / item) as usize + 1 + 2 * buffer;

        for len in [10usize, 1_000, 1_000_000] {
            for offset in [0u64, 1234, 49_999] {
                let range = VisibleRange::compute(offset, container, item as u32, buffer, len);
                assert!(range.len() <= bound, "len {} offset {}: {:?}", len, offset, range);
            }
        }
    }

    #[test]
    fn test_contains() {
        let range = VisibleRange::new(3, 6);
        assert!(!range.contains(2));
        assert!(range.contains(3));
        assert!(range.contains(5));
        assert!(!range.contains(6));
        assert_eq!(range.as_range(), 3..6);
    }
}
