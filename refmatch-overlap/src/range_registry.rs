/// A mutable union of half-open ranges, scoped to one transcript.
///
/// Ranges are stored sorted and disjoint; registering a range merges it with
/// anything it overlaps or touches. Overlap queries only ever see what was
/// registered before them, so a registry built from one transcript can be
/// used as a read-only coverage map for another. Create one per transcript
/// and discard it after scoring; nothing is shared across transcripts.
#[derive(Debug, Clone, Default)]
pub struct RangeRegistry {
    // sorted by start, pairwise disjoint
    ranges: Vec<(u64, u64)>,
}

impl RangeRegistry {
    pub fn new() -> Self {
        RangeRegistry { ranges: Vec::new() }
    }

    /// Add `start .. end` to the union, merging overlapping or adjacent
    /// stored ranges.
    pub fn register(&mut self, start: u64, end: u64) {
        let lo = self.ranges.partition_point(|r| r.1 < start);

        let mut merged = (start, end);
        let mut hi = lo;
        while hi < self.ranges.len() && self.ranges[hi].0 <= end {
            merged.0 = merged.0.min(self.ranges[hi].0);
            merged.1 = merged.1.max(self.ranges[hi].1);
            hi += 1;
        }

        self.ranges.splice(lo..hi, std::iter::once(merged));
    }

    /// Total overlap between `start .. end` and everything registered so far.
    pub fn overlap_size(&self, start: u64, end: u64) -> u64 {
        let mut total = 0;
        let idx = self.ranges.partition_point(|r| r.1 <= start);
        for range in &self.ranges[idx..] {
            if range.0 >= end {
                break;
            }
            total += range.1.min(end) - range.0.max(start);
        }
        total
    }

    /// Number of disjoint ranges in the union.
    pub fn len(&self) -> usize {
        self.ranges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ranges.is_empty()
    }

    pub fn ranges(&self) -> &[(u64, u64)] {
        &self.ranges
    }
}
