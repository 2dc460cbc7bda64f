//! Sticky column normalization and left-offset calculation.
//!
//! Sticky columns are always the leading block of the current visual order.
//! A request like `[0, 2]` can't be honored (column 1 would scroll under
//! column 2), so it degrades to its longest valid prefix, `[0]`.

/// Result of normalizing a sticky-column request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StickyRequest {
    /// Number of leading visual columns that are sticky.
    pub count: usize,
    /// Whether part of the request had to be dropped.
    pub truncated: bool,
}

/// Reduce a requested set of visual positions to a contiguous prefix.
///
/// The request is sorted and deduplicated, then accepted while it reads
/// `0, 1, 2, ...` and stays inside `column_count`.
pub fn normalize(requested: &[usize], column_count: usize) -> StickyRequest {
    let mut sorted = requested.to_vec();
    sorted.sort_unstable();
    sorted.dedup();

    let count = sorted
        .iter()
        .enumerate()
        .take_while(|&(expected, &idx)| idx == expected && idx < column_count)
        .count();

    StickyRequest {
        count,
        truncated: count < sorted.len(),
    }
}

/// Running left offsets for the first `widths.len()` sticky columns.
///
/// `offsets[0] == 0` and `offsets[i] == offsets[i - 1] + widths[i - 1]`.
pub fn offsets(widths: &[u32]) -> Vec<u32> {
    widths
        .iter()
        .scan(0u32, |cumulative, &width| {
            let left = *cumulative;
            *cumulative = cumulative.saturating_add(width);
            Some(left)
        })
        .collect()
}

/// Cached sticky layout for the current visual order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StickyLayout {
    offsets: Vec<u32>,
}

impl StickyLayout {
    /// Rebuild from the widths of the leading sticky columns.
    pub fn recompute(&mut self, sticky_widths: &[u32]) {
        self.offsets = offsets(sticky_widths);
    }

    pub fn count(&self) -> usize {
        self.offsets.len()
    }

    pub fn is_sticky(&self, visual: usize) -> bool {
        visual < self.offsets.len()
    }

    /// Left offset of the sticky column at `visual`.
    pub fn offset(&self, visual: usize) -> Option<u32> {
        self.offsets.get(visual).copied()
    }

    pub fn offsets(&self) -> &[u32] {
        &self.offsets
    }
}
