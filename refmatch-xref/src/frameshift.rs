use log::info;

use refmatch_core::models::TranscriptAttrib;
use refmatch_core::source::AnnotationSource;

/// Attribute code attached to transcripts with a frameshift intron.
pub const FRAMESHIFT_ATTRIB_CODE: &str = "Frameshift";

/// Intron lengths that shift the reading frame rather than splice it.
pub const FRAMESHIFT_INTRON_LENGTHS: [u64; 4] = [1, 2, 4, 5];

/// Scan every transcript of an annotation set for frameshift introns and
/// return one attribute per hit, carrying the intron length, in transcript
/// order.
pub fn find_frameshift_introns(source: &dyn AnnotationSource) -> Vec<TranscriptAttrib> {
    let mut attribs = Vec::new();

    for chrom in source.chromosome_names() {
        for gene in source.genes_on(&chrom) {
            for transcript in &gene.transcripts {
                for intron in transcript.introns() {
                    if FRAMESHIFT_INTRON_LENGTHS.contains(&intron.len()) {
                        attribs.push(TranscriptAttrib {
                            transcript_id: transcript.id.clone(),
                            code: FRAMESHIFT_ATTRIB_CODE.to_string(),
                            value: intron.len().to_string(),
                        });
                    }
                }
            }
        }
    }

    info!("found {} frameshift introns", attribs.len());
    attribs
}

#[cfg(test)]
mod tests {
    use super::*;

    use pretty_assertions::assert_eq;
    use refmatch_core::models::{ExonInterval, GeneModel, Strand, TranscriptModel};
    use refmatch_core::source::MemoryAnnotations;

    fn transcript(id: &str, exon_pairs: &[(u64, u64)]) -> TranscriptModel {
        TranscriptModel::new(
            id,
            None,
            "protein_coding",
            "chr1",
            Strand::Forward,
            exon_pairs
                .iter()
                .map(|&(start, end)| ExonInterval { start, end })
                .collect(),
            vec![],
            None,
        )
    }

    #[test]
    fn test_short_introns_flagged_long_ones_not() {
        // introns of length 2, 3 and 5; only 2 and 5 shift the frame
        let shifted = transcript("t1", &[(100, 200), (202, 300), (303, 400), (405, 500)]);
        let clean = transcript("t2", &[(1000, 1100), (1200, 1300)]);

        let annotations = MemoryAnnotations::new(vec![GeneModel::new(
            "g1",
            "chr1",
            Strand::Forward,
            vec![shifted, clean],
            vec![],
        )]);

        let attribs = find_frameshift_introns(&annotations);
        assert_eq!(attribs.len(), 2);
        assert_eq!(attribs[0].transcript_id, "t1");
        assert_eq!(attribs[0].code, "Frameshift");
        assert_eq!(attribs[0].value, "2");
        assert_eq!(attribs[1].value, "5");
    }

    #[test]
    fn test_single_exon_transcripts_have_no_introns() {
        let annotations = MemoryAnnotations::new(vec![GeneModel::new(
            "g1",
            "chr1",
            Strand::Forward,
            vec![transcript("t1", &[(100, 200)])],
            vec![],
        )]);

        assert!(find_frameshift_introns(&annotations).is_empty());
    }
}
