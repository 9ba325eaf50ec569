use serde::{Deserialize, Serialize};

use crate::models::{ExonInterval, Strand};

/// A transcript model: an ordered list of genomic exons plus the subset of
/// exon ranges that code for protein, as read from the annotation input.
///
/// Exons are kept in input order; callers that need positional order sort a
/// copy. The coding exons are the translateable portions of the genomic
/// exons, already clipped to the coding region.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TranscriptModel {
    pub id: String,
    pub accession: Option<String>,
    pub biotype: String,
    pub chrom: String,
    pub strand: Strand,
    exons: Vec<ExonInterval>,
    coding_exons: Vec<ExonInterval>,
    pub translation: Option<TranslationModel>,
}

impl TranscriptModel {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        id: impl Into<String>,
        accession: Option<String>,
        biotype: impl Into<String>,
        chrom: impl Into<String>,
        strand: Strand,
        exons: Vec<ExonInterval>,
        coding_exons: Vec<ExonInterval>,
        translation: Option<TranslationModel>,
    ) -> Self {
        TranscriptModel {
            id: id.into(),
            accession,
            biotype: biotype.into(),
            chrom: chrom.into(),
            strand,
            exons,
            coding_exons,
            translation,
        }
    }

    pub fn exons(&self) -> &[ExonInterval] {
        &self.exons
    }

    pub fn coding_exons(&self) -> &[ExonInterval] {
        &self.coding_exons
    }

    pub fn exon_count(&self) -> usize {
        self.exons.len()
    }

    pub fn coding_exon_count(&self) -> usize {
        self.coding_exons.len()
    }

    /// The accession shown to the outside world: the external accession when
    /// one was imported, otherwise the stable id.
    pub fn display_accession(&self) -> &str {
        self.accession.as_deref().unwrap_or(&self.id)
    }

    /// Genomic span of the transcript, or `None` for an exonless model.
    pub fn span(&self) -> Option<(u64, u64)> {
        let start = self.exons.iter().map(|e| e.start).min()?;
        let end = self.exons.iter().map(|e| e.end).max()?;
        Some((start, end))
    }

    /// The gaps between consecutive exons in positional order.
    pub fn introns(&self) -> Vec<ExonInterval> {
        let mut sorted = self.exons.clone();
        sorted.sort();

        let mut out = Vec::new();
        for w in sorted.windows(2) {
            // intron is [a.end, b.start)
            if w[0].end < w[1].start {
                out.push(ExonInterval {
                    start: w[0].end,
                    end: w[1].start,
                });
            }
        }
        out
    }
}

/// The protein product of a transcript.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TranslationModel {
    pub id: String,
    pub sequence: String,
    pub alt_accessions: Vec<String>,
}

impl TranslationModel {
    /// The accession a cross-reference should carry for this protein: the
    /// alternate external accession when exactly one is attached, otherwise
    /// the native stable id.
    pub fn preferred_accession(&self) -> &str {
        match self.alt_accessions.as_slice() {
            [only] => only,
            _ => &self.id,
        }
    }
}
