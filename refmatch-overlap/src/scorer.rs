use refmatch_core::models::ExonInterval;

use crate::RangeRegistry;

/// Fold a transcript's exon list into or against range registries and return
/// the summed per-exon overlap fraction.
///
/// The dual accumulators are deliberate: the same routine both builds a
/// registry and measures against one, depending on which argument is present.
///
/// - with `measure`, each exon contributes `overlap_size(exon) / exon length`
///   to the returned sum;
/// - with `register`, each exon is added to that registry;
/// - with both, each exon is measured first and registered after;
/// - with `measure` absent the return value is `0.0`.
///
/// Exons are visited in input order; overlapping exons within the same
/// transcript are not deduplicated. The sum is bounded by the exon count.
pub fn exon_overlap_fraction(
    exons: &[ExonInterval],
    mut register: Option<&mut RangeRegistry>,
    measure: Option<&RangeRegistry>,
) -> f64 {
    let mut matched = 0.0;

    for exon in exons {
        if let Some(measure) = measure {
            if !exon.is_empty() {
                matched += measure.overlap_size(exon.start, exon.end) as f64 / exon.len() as f64;
            }
        }
        if let Some(registry) = register.as_deref_mut() {
            registry.register(exon.start, exon.end);
        }
    }

    matched
}
