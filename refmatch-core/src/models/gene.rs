use serde::{Deserialize, Serialize};

use crate::models::{Strand, TranscriptModel};

/// A gene: an ordered set of transcripts on one chromosome and strand, plus
/// any externally assigned gene identifiers imported with the models.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeneModel {
    pub id: String,
    pub chrom: String,
    pub strand: Strand,
    pub transcripts: Vec<TranscriptModel>,
    pub external_ids: Vec<String>,
}

impl GeneModel {
    pub fn new(
        id: impl Into<String>,
        chrom: impl Into<String>,
        strand: Strand,
        transcripts: Vec<TranscriptModel>,
        external_ids: Vec<String>,
    ) -> Self {
        GeneModel {
            id: id.into(),
            chrom: chrom.into(),
            strand,
            transcripts,
            external_ids,
        }
    }

    /// Genomic span over all transcripts, or `None` if the gene is empty.
    pub fn span(&self) -> Option<(u64, u64)> {
        let spans = self
            .transcripts
            .iter()
            .filter_map(|t| t.span())
            .collect::<Vec<_>>();
        let start = spans.iter().map(|s| s.0).min()?;
        let end = spans.iter().map(|s| s.1).max()?;
        Some((start, end))
    }

    /// Order transcripts by ascending genomic start.
    pub fn sort_transcripts(&mut self) {
        self.transcripts
            .sort_by_key(|t| t.span().map(|s| s.0).unwrap_or(u64::MAX));
    }
}
