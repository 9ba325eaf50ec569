use std::fs::File;
use std::io::Write;
use std::path::PathBuf;

use pretty_assertions::assert_eq;
use tempfile::TempDir;

use refmatch_core::models::XrefTarget;
use refmatch_xref::record::MemorySink;
use refmatch_xref::{RunParams, SourceRegistry, run_species};

fn write_file(dir: &TempDir, name: &str, contents: &str) -> PathBuf {
    let path = dir.path().join(name);
    let mut f = File::create(&path).unwrap();
    write!(f, "{}", contents).unwrap();
    path
}

#[test]
fn test_bed_inputs_to_emitted_xrefs() {
    let dir = tempfile::tempdir().unwrap();

    // three identical exons on both sides, fully coding, same strand
    let core = write_file(
        &dir,
        "core.bed",
        "chr1\t100\t550\tENST0001||protein_coding|ensg1\t0\t+\t100\t550\t0\t3\t100,100,50\t0,200,400\n",
    );
    let other = write_file(
        &dir,
        "otherfeatures.bed",
        "chr1\t100\t550\tNM_001.2|NM_001.2|protein_coding|locus1|1234;5678\t0\t+\t100\t550\t0\t3\t100,100,50\t0,200,400\n",
    );
    let core_proteins = write_file(&dir, "core.prot.tsv", "ENST0001\tENSP0001\tMKVLAT\n");
    let other_proteins = write_file(&dir, "other.prot.tsv", "NM_001.2\tNP_001.1\tMKVLAT\n");

    let params = RunParams::new(
        Some("RefSeq_import".to_string()),
        Some("homo_sapiens".to_string()),
        Some(core),
        Some(other),
    )
    .unwrap()
    .with_proteins(Some(core_proteins), Some(other_proteins));

    let registry = SourceRegistry::new();
    let mut sink = MemorySink::new();
    let stats = run_species(&params, &registry, &mut sink).unwrap();

    assert_eq!(stats.scanned, 1);
    assert_eq!(stats.matched, 1);
    assert_eq!(stats.transcript_xrefs, 1);
    assert_eq!(stats.translation_xrefs, 1);
    assert_eq!(stats.dependent_xrefs, 2);

    let transcript_xref = &sink.xrefs[0];
    assert_eq!(transcript_xref.accession, "NM_001");
    assert_eq!(transcript_xref.version, 2);
    assert_eq!(transcript_xref.label, "NM_001.2");
    assert_eq!(transcript_xref.source_name, "RefSeq_mRNA");
    assert_eq!(transcript_xref.species, "homo_sapiens");
    assert_eq!(transcript_xref.target_kind, XrefTarget::Transcript);
    assert_eq!(transcript_xref.target_id, "ENST0001");

    let translation_xref = &sink.xrefs[1];
    assert_eq!(translation_xref.accession, "NP_001");
    assert_eq!(translation_xref.version, 1);
    assert_eq!(translation_xref.source_name, "RefSeq_peptide");
    assert_eq!(translation_xref.target_kind, XrefTarget::Translation);
    assert_eq!(translation_xref.target_id, "ENSP0001");

    let gene_ids: Vec<&str> = sink
        .dependents
        .iter()
        .map(|d| d.accession.as_str())
        .collect();
    assert_eq!(gene_ids, vec!["1234", "5678"]);
    assert!(
        sink.dependents
            .iter()
            .all(|d| d.source_name == "EntrezGene" && d.master_accession == "NM_001")
    );
}

#[test]
fn test_partial_candidate_below_threshold_emits_nothing() {
    let dir = tempfile::tempdir().unwrap();

    // candidate shares only the first of three exons
    let core = write_file(
        &dir,
        "core.bed",
        "chr1\t100\t200\tENST0001||protein_coding|ensg1\t0\t+\t100\t200\t0\t1\t100\t0\n",
    );
    let other = write_file(
        &dir,
        "otherfeatures.bed",
        "chr1\t100\t550\tNM_001.2|NM_001.2|protein_coding|locus1\t0\t+\t100\t550\t0\t3\t100,100,50\t0,200,400\n",
    );

    let params = RunParams::new(
        Some("RefSeq_import".to_string()),
        Some("homo_sapiens".to_string()),
        Some(core),
        Some(other),
    )
    .unwrap();

    let registry = SourceRegistry::new();
    let mut sink = MemorySink::new();
    let stats = run_species(&params, &registry, &mut sink).unwrap();

    // genomic = (1 + 1) / 4 = 0.5, coding the same: no eligible match
    assert_eq!(stats.matched, 0);
    assert!(sink.xrefs.is_empty());
}
