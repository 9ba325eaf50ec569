//! Core infrastructure for refmatch: transcript and gene models, annotation
//! sources, and file ingestion.
//!
//! This crate holds everything the matching pipeline consumes: the coordinate
//! model ([`models::ExonInterval`], [`models::TranscriptModel`],
//! [`models::GeneModel`]), the read-only [`source::AnnotationSource`]
//! abstraction over an annotation set, and BED12 ingestion into those models.
//! The matching and cross-reference logic lives in higher-level crates
//! (`refmatch-overlap`, `refmatch-xref`) and should not reimplement anything
//! found here.

pub mod bed;
pub mod errors;
pub mod models;
pub mod progress;
pub mod source;
pub mod utils;

// re-exports
pub use errors::CoreError;
pub use models::{
    CrossReference, DependentXref, ExonInterval, GeneModel, MatchScore, Strand, TranscriptAttrib,
    TranscriptModel, TranslationModel, XrefTarget,
};
pub use source::{AnnotationSource, MemoryAnnotations};
