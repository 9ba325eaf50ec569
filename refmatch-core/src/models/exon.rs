use std::cmp::Ordering;
use std::fmt::{self, Display};

use serde::{Deserialize, Serialize};

use crate::errors::CoreError;

/// Represent an exon as a range from [start, end).
/// Inclusive of start, exclusive of end. Immutable once built.
#[derive(Eq, PartialEq, Hash, Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ExonInterval {
    pub start: u64,
    pub end: u64,
}

impl ExonInterval {
    pub fn new(start: u64, end: u64) -> Result<Self, CoreError> {
        if start > end {
            return Err(CoreError::InvalidInterval { start, end });
        }
        Ok(ExonInterval { start, end })
    }

    /// Get the length of the exon.
    #[inline]
    pub fn len(&self) -> u64 {
        self.end - self.start
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Compute the intersect between two exons.
    #[inline]
    pub fn intersect(&self, other: &ExonInterval) -> u64 {
        std::cmp::min(self.end, other.end).saturating_sub(std::cmp::max(self.start, other.start))
    }

    /// Check if the exon overlaps start .. end.
    #[inline]
    pub fn overlaps(&self, start: u64, end: u64) -> bool {
        self.start < end && self.end > start
    }
}

impl Ord for ExonInterval {
    #[inline]
    fn cmp(&self, other: &ExonInterval) -> Ordering {
        match self.start.cmp(&other.start) {
            Ordering::Less => Ordering::Less,
            Ordering::Greater => Ordering::Greater,
            Ordering::Equal => self.end.cmp(&other.end),
        }
    }
}

impl PartialOrd for ExonInterval {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Display for ExonInterval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.start, self.end)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use pretty_assertions::assert_eq;

    #[test]
    fn test_new_rejects_inverted() {
        assert!(ExonInterval::new(10, 5).is_err());
        assert!(ExonInterval::new(5, 5).is_ok());
    }

    #[test]
    fn test_intersect() {
        let a = ExonInterval::new(100, 200).unwrap();
        let b = ExonInterval::new(150, 250).unwrap();
        let c = ExonInterval::new(300, 400).unwrap();

        assert_eq!(a.intersect(&b), 50);
        assert_eq!(b.intersect(&a), 50);
        assert_eq!(a.intersect(&c), 0);
        assert_eq!(a.intersect(&a), 100);
    }

    #[test]
    fn test_overlaps_half_open() {
        let a = ExonInterval::new(100, 200).unwrap();
        assert!(a.overlaps(199, 300));
        assert!(!a.overlaps(200, 300));
        assert!(!a.overlaps(0, 100));
    }

    #[test]
    fn test_ordering() {
        let mut exons = vec![
            ExonInterval::new(200, 250).unwrap(),
            ExonInterval::new(100, 180).unwrap(),
            ExonInterval::new(100, 150).unwrap(),
        ];
        exons.sort();
        assert_eq!(exons[0].end, 150);
        assert_eq!(exons[1].end, 180);
        assert_eq!(exons[2].start, 200);
    }
}
