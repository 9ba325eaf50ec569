use refmatch_core::models::{ExonInterval, MatchScore, TranscriptModel};
use refmatch_overlap::{RangeRegistry, exon_overlap_fraction};

/// Factor applied to both score components when the biotypes differ.
pub const BIOTYPE_PENALTY: f64 = 0.9;

/// Score one candidate against a source transcript.
///
/// The genomic component measures each side's exons against the other side's
/// registered exon union and normalizes by the combined exon count; the
/// coding component is the same computation over coding exons only, fixed at
/// 0 when the source has no coding exons. Biotype mismatch scales both
/// components by [`BIOTYPE_PENALTY`] before any threshold is applied.
pub fn score_candidate(source: &TranscriptModel, candidate: &TranscriptModel) -> MatchScore {
    let genomic = paired_overlap_score(source.exons(), candidate.exons());

    let coding = if source.coding_exon_count() == 0 {
        0.0
    } else {
        paired_overlap_score(source.coding_exons(), candidate.coding_exons())
    };

    let score = MatchScore::new(genomic, coding);
    if source.biotype != candidate.biotype {
        score.penalized(BIOTYPE_PENALTY)
    } else {
        score
    }
}

fn paired_overlap_score(source_exons: &[ExonInterval], candidate_exons: &[ExonInterval]) -> f64 {
    let total = source_exons.len() + candidate_exons.len();
    if total == 0 {
        return 0.0;
    }

    let mut source_registry = RangeRegistry::new();
    exon_overlap_fraction(source_exons, Some(&mut source_registry), None);

    let mut candidate_registry = RangeRegistry::new();
    let candidate_fraction = exon_overlap_fraction(
        candidate_exons,
        Some(&mut candidate_registry),
        Some(&source_registry),
    );
    let source_fraction = exon_overlap_fraction(source_exons, None, Some(&candidate_registry));

    (source_fraction + candidate_fraction) / total as f64
}
