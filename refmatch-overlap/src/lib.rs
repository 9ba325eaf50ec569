//! Interval-union accumulation and exon overlap scoring.
//!
//! This crate provides the two primitives the transcript matcher is built
//! from: [`RangeRegistry`], a per-transcript interval union that can report
//! how much of a query range it already covers, and
//! [`exon_overlap_fraction`], which folds a transcript's exon list into or
//! against such registries. All overlap arithmetic lives here; higher-level
//! crates combine the fractions into scores but do not reimplement them.
//!
//! ## Quick Start
//!
//! ```rust
//! use refmatch_core::models::ExonInterval;
//! use refmatch_overlap::{RangeRegistry, exon_overlap_fraction};
//!
//! let exons = vec![
//!     ExonInterval { start: 100, end: 200 },
//!     ExonInterval { start: 300, end: 400 },
//! ];
//!
//! // build a registry from one transcript...
//! let mut registry = RangeRegistry::new();
//! exon_overlap_fraction(&exons, Some(&mut registry), None);
//!
//! // ...then measure another transcript against it
//! let other = vec![ExonInterval { start: 150, end: 200 }];
//! let fraction = exon_overlap_fraction(&other, None, Some(&registry));
//! assert_eq!(fraction, 1.0); // fully covered
//! ```

pub mod range_registry;
pub mod scorer;

// re-exports
pub use self::range_registry::RangeRegistry;
pub use self::scorer::exon_overlap_fraction;
