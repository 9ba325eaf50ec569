use fxhash::FxHashMap;

/// Accession prefix to cross-reference source name, fixed. Accessions with a
/// prefix outside this table are skipped, never an error.
pub const REFSEQ_PREFIX_SOURCES: &[(&str, &str)] = &[
    ("NM", "RefSeq_mRNA"),
    ("NR", "RefSeq_ncRNA"),
    ("XM", "RefSeq_mRNA_predicted"),
    ("XR", "RefSeq_ncRNA_predicted"),
    ("NP", "RefSeq_peptide"),
    ("XP", "RefSeq_peptide_predicted"),
];

/// Source name used for externally assigned gene identifiers.
pub const ENTREZ_GENE_SOURCE: &str = "EntrezGene";

/// Source-name lookup built once at startup and passed by reference to the
/// scoring and emission steps.
pub struct SourceRegistry {
    by_prefix: FxHashMap<&'static str, &'static str>,
    ids: FxHashMap<&'static str, u32>,
}

impl SourceRegistry {
    pub fn new() -> Self {
        let mut by_prefix = FxHashMap::default();
        let mut ids = FxHashMap::default();

        for (idx, (prefix, name)) in REFSEQ_PREFIX_SOURCES.iter().enumerate() {
            by_prefix.insert(*prefix, *name);
            ids.insert(*name, idx as u32 + 1);
        }
        ids.insert(ENTREZ_GENE_SOURCE, REFSEQ_PREFIX_SOURCES.len() as u32 + 1);

        SourceRegistry { by_prefix, ids }
    }

    /// Resolve an accession's two-letter prefix to a source name.
    pub fn source_for_accession(&self, accession: &str) -> Option<&'static str> {
        let prefix = accession.get(..2)?;
        self.by_prefix.get(prefix).copied()
    }

    /// Numeric id of a source name, if known.
    pub fn id_of(&self, name: &str) -> Option<u32> {
        self.ids.get(name).copied()
    }
}

impl Default for SourceRegistry {
    fn default() -> Self {
        Self::new()
    }
}

/// Split an accession into its bare form and version on the first `.`;
/// a missing or unparseable version becomes 0.
pub fn split_accession(accession: &str) -> (&str, u32) {
    match accession.split_once('.') {
        Some((acc, version)) => (acc, version.parse().unwrap_or(0)),
        None => (accession, 0),
    }
}

/// Whether an accession is shaped like an imported RefSeq identifier
/// (two uppercase letters and an underscore).
pub fn looks_like_refseq(accession: &str) -> bool {
    let bytes = accession.as_bytes();
    bytes.len() > 3
        && bytes[0].is_ascii_uppercase()
        && bytes[1].is_ascii_uppercase()
        && bytes[2] == b'_'
}
