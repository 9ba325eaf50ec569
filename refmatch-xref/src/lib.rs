//! Transcript matching and cross-reference emission.
//!
//! Given two annotation sources for one species — a reference set and a
//! secondary set of imported RefSeq models — this crate scores structural
//! similarity between each imported transcript and the reference transcripts
//! at the same locus, picks the best match, and emits cross-reference records
//! through an [`XrefSink`]. A small frameshift-intron scanner over the same
//! models lives here too.

pub mod best;
pub mod config;
pub mod errors;
pub mod frameshift;
pub mod pipeline;
pub mod record;
pub mod score;
pub mod sources;

// re-exports
pub use best::{SCORE_THRESHOLD, select_best};
pub use config::{ConnectionConfig, RunParams};
pub use errors::XrefError;
pub use pipeline::{MatchStats, match_sources, run_species};
pub use record::{JsonSink, MemorySink, TsvSink, XrefSink};
pub use score::{BIOTYPE_PENALTY, score_candidate};
pub use sources::{SourceRegistry, split_accession};
