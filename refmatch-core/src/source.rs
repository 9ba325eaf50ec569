use std::collections::HashMap;

use crate::models::{GeneModel, TranscriptModel};

/// Read-only view over one annotation set (one species, one database).
///
/// The matching pipeline only ever walks chromosomes, genes and transcripts,
/// and asks for transcripts overlapping a genomic window; anything that can
/// answer those three queries can drive it.
pub trait AnnotationSource {
    /// Chromosome names present in the set, sorted.
    fn chromosome_names(&self) -> Vec<String>;

    /// Genes on a chromosome, ordered by ascending genomic start.
    fn genes_on(&self, chrom: &str) -> Vec<&GeneModel>;

    /// All transcripts overlapping `start .. end` on a chromosome,
    /// regardless of strand.
    fn transcripts_overlapping(&self, chrom: &str, start: u64, end: u64)
    -> Vec<&TranscriptModel>;
}

/// In-memory [`AnnotationSource`] over a list of genes, indexed per
/// chromosome. Construction sorts genes and each gene's transcripts by
/// ascending start so iteration order is deterministic.
pub struct MemoryAnnotations {
    genes: Vec<GeneModel>,
    by_chrom: HashMap<String, Vec<usize>>,
}

impl MemoryAnnotations {
    pub fn new(mut genes: Vec<GeneModel>) -> Self {
        for gene in genes.iter_mut() {
            gene.sort_transcripts();
        }
        genes.sort_by_key(|g| {
            (
                g.chrom.clone(),
                g.span().map(|s| s.0).unwrap_or(u64::MAX),
            )
        });

        let mut by_chrom: HashMap<String, Vec<usize>> = HashMap::new();
        for (idx, gene) in genes.iter().enumerate() {
            by_chrom.entry(gene.chrom.clone()).or_default().push(idx);
        }

        MemoryAnnotations { genes, by_chrom }
    }

    pub fn len(&self) -> usize {
        self.genes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.genes.is_empty()
    }
}

impl AnnotationSource for MemoryAnnotations {
    fn chromosome_names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.by_chrom.keys().cloned().collect();
        names.sort();
        names
    }

    fn genes_on(&self, chrom: &str) -> Vec<&GeneModel> {
        self.by_chrom
            .get(chrom)
            .map(|idxs| idxs.iter().map(|&i| &self.genes[i]).collect())
            .unwrap_or_default()
    }

    fn transcripts_overlapping(
        &self,
        chrom: &str,
        start: u64,
        end: u64,
    ) -> Vec<&TranscriptModel> {
        let mut out = Vec::new();
        for gene in self.genes_on(chrom) {
            for transcript in &gene.transcripts {
                if let Some((t_start, t_end)) = transcript.span() {
                    if t_start < end && t_end > start {
                        out.push(transcript);
                    }
                }
            }
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ExonInterval, Strand, TranscriptModel};

    use pretty_assertions::assert_eq;
    use rstest::{fixture, rstest};

    fn transcript(id: &str, chrom: &str, strand: Strand, start: u64, end: u64) -> TranscriptModel {
        TranscriptModel::new(
            id,
            None,
            "protein_coding",
            chrom,
            strand,
            vec![ExonInterval { start, end }],
            vec![],
            None,
        )
    }

    #[fixture]
    fn annotations() -> MemoryAnnotations {
        MemoryAnnotations::new(vec![
            GeneModel::new(
                "g2",
                "chr2",
                Strand::Forward,
                vec![transcript("t3", "chr2", Strand::Forward, 50, 150)],
                vec![],
            ),
            GeneModel::new(
                "g1",
                "chr1",
                Strand::Forward,
                vec![
                    transcript("t2", "chr1", Strand::Forward, 500, 900),
                    transcript("t1", "chr1", Strand::Forward, 100, 400),
                ],
                vec![],
            ),
        ])
    }

    #[rstest]
    fn test_chromosomes_sorted(annotations: MemoryAnnotations) {
        assert_eq!(annotations.chromosome_names(), vec!["chr1", "chr2"]);
    }

    #[rstest]
    fn test_transcripts_sorted_within_gene(annotations: MemoryAnnotations) {
        let genes = annotations.genes_on("chr1");
        assert_eq!(genes.len(), 1);
        assert_eq!(genes[0].transcripts[0].id, "t1");
        assert_eq!(genes[0].transcripts[1].id, "t2");
    }

    #[rstest]
    fn test_overlap_query(annotations: MemoryAnnotations) {
        let hits = annotations.transcripts_overlapping("chr1", 350, 600);
        let ids: Vec<&str> = hits.iter().map(|t| t.id.as_str()).collect();
        assert_eq!(ids, vec!["t1", "t2"]);

        assert!(annotations.transcripts_overlapping("chr1", 400, 500).is_empty());
        assert!(annotations.transcripts_overlapping("chr9", 0, 100).is_empty());
    }
}
