use std::io::Write;

use refmatch_core::models::{CrossReference, DependentXref};

use crate::errors::XrefError;

/// Where emitted cross-references go. Append-only; the pipeline decides what
/// to write, implementations decide where and how.
pub trait XrefSink {
    fn add_xref(&mut self, xref: CrossReference) -> Result<(), XrefError>;

    fn add_dependent_xref(&mut self, dependent: DependentXref) -> Result<(), XrefError>;
}

/// Collects records in memory. Used by tests and for post-run inspection.
#[derive(Debug, Default)]
pub struct MemorySink {
    pub xrefs: Vec<CrossReference>,
    pub dependents: Vec<DependentXref>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }
}

impl XrefSink for MemorySink {
    fn add_xref(&mut self, xref: CrossReference) -> Result<(), XrefError> {
        self.xrefs.push(xref);
        Ok(())
    }

    fn add_dependent_xref(&mut self, dependent: DependentXref) -> Result<(), XrefError> {
        self.dependents.push(dependent);
        Ok(())
    }
}

/// Writes records as tab-separated lines, direct cross-references tagged
/// `xref` and dependent ones tagged `dependent`.
pub struct TsvSink<W: Write> {
    writer: W,
}

impl<W: Write> TsvSink<W> {
    pub fn new(writer: W) -> Self {
        TsvSink { writer }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> XrefSink for TsvSink<W> {
    fn add_xref(&mut self, xref: CrossReference) -> Result<(), XrefError> {
        writeln!(self.writer, "xref\t{}", xref.as_tsv())
            .map_err(|e| XrefError::Sink(e.to_string()))
    }

    fn add_dependent_xref(&mut self, dependent: DependentXref) -> Result<(), XrefError> {
        writeln!(self.writer, "dependent\t{}", dependent.as_tsv())
            .map_err(|e| XrefError::Sink(e.to_string()))
    }
}

/// Writes one JSON object per line.
pub struct JsonSink<W: Write> {
    writer: W,
}

impl<W: Write> JsonSink<W> {
    pub fn new(writer: W) -> Self {
        JsonSink { writer }
    }
}

impl<W: Write> XrefSink for JsonSink<W> {
    fn add_xref(&mut self, xref: CrossReference) -> Result<(), XrefError> {
        let line = serde_json::to_string(&xref).map_err(|e| XrefError::Sink(e.to_string()))?;
        writeln!(self.writer, "{}", line).map_err(|e| XrefError::Sink(e.to_string()))
    }

    fn add_dependent_xref(&mut self, dependent: DependentXref) -> Result<(), XrefError> {
        let line =
            serde_json::to_string(&dependent).map_err(|e| XrefError::Sink(e.to_string()))?;
        writeln!(self.writer, "{}", line).map_err(|e| XrefError::Sink(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use pretty_assertions::assert_eq;
    use refmatch_core::models::XrefTarget;

    fn xref() -> CrossReference {
        CrossReference {
            accession: "NM_001".to_string(),
            version: 2,
            label: "NM_001.2".to_string(),
            source_name: "RefSeq_mRNA".to_string(),
            species: "homo_sapiens".to_string(),
            target_kind: XrefTarget::Transcript,
            target_id: "ENST0001".to_string(),
        }
    }

    #[test]
    fn test_tsv_sink_tags_rows() {
        let mut sink = TsvSink::new(Vec::new());
        sink.add_xref(xref()).unwrap();
        sink.add_dependent_xref(DependentXref {
            accession: "1234".to_string(),
            source_name: "EntrezGene".to_string(),
            master_accession: "NM_001".to_string(),
        })
        .unwrap();

        let out = String::from_utf8(sink.into_inner()).unwrap();
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].starts_with("xref\tNM_001\t2\t"));
        assert_eq!(lines[1], "dependent\t1234\tEntrezGene\tNM_001");
    }

    #[test]
    fn test_json_sink_roundtrip() {
        let mut buf = Vec::new();
        {
            let mut sink = JsonSink::new(&mut buf);
            sink.add_xref(xref()).unwrap();
        }

        let parsed: CrossReference = serde_json::from_slice(&buf).unwrap();
        assert_eq!(parsed, xref());
    }
}
