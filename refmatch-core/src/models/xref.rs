use std::fmt::{self, Display};

use serde::{Deserialize, Serialize};

/// The kind of entity a cross-reference points at.
#[derive(Eq, PartialEq, Debug, Clone, Copy, Serialize, Deserialize)]
pub enum XrefTarget {
    Transcript,
    Translation,
}

impl Display for XrefTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            XrefTarget::Transcript => write!(f, "transcript"),
            XrefTarget::Translation => write!(f, "translation"),
        }
    }
}

/// A direct cross-reference: an external accession linked straight to an
/// internal entity. Append-only output, no update or delete semantics.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CrossReference {
    pub accession: String,
    pub version: u32,
    pub label: String,
    pub source_name: String,
    pub species: String,
    pub target_kind: XrefTarget,
    pub target_id: String,
}

impl CrossReference {
    pub fn as_tsv(&self) -> String {
        format!(
            "{}\t{}\t{}\t{}\t{}\t{}\t{}",
            self.accession,
            self.version,
            self.label,
            self.source_name,
            self.species,
            self.target_kind,
            self.target_id,
        )
    }
}

impl Display for CrossReference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_tsv())
    }
}

/// A cross-reference derived from an already-established one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DependentXref {
    pub accession: String,
    pub source_name: String,
    pub master_accession: String,
}

impl DependentXref {
    pub fn as_tsv(&self) -> String {
        format!(
            "{}\t{}\t{}",
            self.accession, self.source_name, self.master_accession
        )
    }
}

impl Display for DependentXref {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_tsv())
    }
}

/// A transcript-level annotation produced by a scan, e.g. a frameshift
/// intron mark.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TranscriptAttrib {
    pub transcript_id: String,
    pub code: String,
    pub value: String,
}

impl TranscriptAttrib {
    pub fn as_tsv(&self) -> String {
        format!("{}\t{}\t{}", self.transcript_id, self.code, self.value)
    }
}

impl Display for TranscriptAttrib {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_tsv())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use pretty_assertions::assert_eq;

    #[test]
    fn test_tsv_rendering() {
        let xref = CrossReference {
            accession: "NM_001".to_string(),
            version: 2,
            label: "NM_001.2".to_string(),
            source_name: "RefSeq_mRNA".to_string(),
            species: "homo_sapiens".to_string(),
            target_kind: XrefTarget::Transcript,
            target_id: "ENST0001".to_string(),
        };
        assert_eq!(
            xref.as_tsv(),
            "NM_001\t2\tNM_001.2\tRefSeq_mRNA\thomo_sapiens\ttranscript\tENST0001"
        );

        let dep = DependentXref {
            accession: "1234".to_string(),
            source_name: "EntrezGene".to_string(),
            master_accession: "NM_001".to_string(),
        };
        assert_eq!(dep.as_tsv(), "1234\tEntrezGene\tNM_001");
    }
}
