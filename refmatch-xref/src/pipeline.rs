//! The matching pipeline: walk the imported models locus by locus, score the
//! reference transcripts at each locus, pick the winner and emit
//! cross-references. Single-threaded and synchronous; the only state is the
//! accumulated output and the source-name lookup built at startup.

use fxhash::FxHashMap;
use log::{debug, info, warn};

use refmatch_core::bed::{attach_translations, genes_from_records, read_bed12, read_protein_table};
use refmatch_core::models::{
    CrossReference, DependentXref, GeneModel, MatchScore, TranscriptModel, XrefTarget,
};
use refmatch_core::progress::progress_bar;
use refmatch_core::source::{AnnotationSource, MemoryAnnotations};

use crate::best::select_best;
use crate::config::RunParams;
use crate::errors::XrefError;
use crate::record::XrefSink;
use crate::score::score_candidate;
use crate::sources::{ENTREZ_GENE_SOURCE, SourceRegistry, looks_like_refseq, split_accession};

/// Counters for one species run.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct MatchStats {
    pub scanned: u64,
    pub matched: u64,
    pub transcript_xrefs: u64,
    pub translation_xrefs: u64,
    pub dependent_xrefs: u64,
    pub skipped_unmapped: u64,
}

/// Load one species' annotation inputs and run the matcher over them.
///
/// A missing otherfeatures input is a soft skip: the species is reported with
/// a warning and an empty result, not an error.
pub fn run_species(
    params: &RunParams,
    registry: &SourceRegistry,
    sink: &mut dyn XrefSink,
) -> Result<MatchStats, XrefError> {
    info!(
        "running {} for species {}",
        params.source_name, params.species
    );

    if !params.otherfeatures_path.exists() {
        warn!(
            "species {} has no otherfeatures input at {}, skipping",
            params.species,
            params.otherfeatures_path.display()
        );
        return Ok(MatchStats::default());
    }

    let core = load_annotations(&params.core_path, params.core_proteins.as_deref())?;
    let otherfeatures = load_annotations(
        &params.otherfeatures_path,
        params.otherfeatures_proteins.as_deref(),
    )?;

    match_sources(
        &params.species,
        &core,
        &otherfeatures,
        registry,
        sink,
        true,
    )
}

fn load_annotations(
    path: &std::path::Path,
    proteins: Option<&std::path::Path>,
) -> Result<MemoryAnnotations, XrefError> {
    let mut records = read_bed12(path)?;
    if let Some(proteins) = proteins {
        let mut table = read_protein_table(proteins)?;
        attach_translations(&mut records, &mut table);
    }
    Ok(MemoryAnnotations::new(genes_from_records(records)))
}

/// Match every imported transcript in `other_src` against the reference
/// transcripts in `core_src` and emit cross-references for the winners.
pub fn match_sources(
    species: &str,
    core_src: &dyn AnnotationSource,
    other_src: &dyn AnnotationSource,
    registry: &SourceRegistry,
    sink: &mut dyn XrefSink,
    show_progress: bool,
) -> Result<MatchStats, XrefError> {
    let chroms = other_src.chromosome_names();
    let pb = show_progress.then(|| progress_bar(chroms.len() as u64, "chromosomes"));

    let mut stats = MatchStats::default();
    let mut refseq_seen: u64 = 0;

    for chrom in &chroms {
        for gene in other_src.genes_on(chrom) {
            for transcript in &gene.transcripts {
                stats.scanned += 1;

                if !looks_like_refseq(transcript.display_accession()) {
                    continue;
                }
                refseq_seen += 1;

                let Some((start, end)) = transcript.span() else {
                    continue;
                };

                let mut scores: FxHashMap<String, MatchScore> = FxHashMap::default();
                let mut candidates: FxHashMap<String, &TranscriptModel> = FxHashMap::default();
                for candidate in core_src.transcripts_overlapping(chrom, start, end) {
                    // opposite strand is excluded outright, not a zero-score miss
                    if candidate.strand != transcript.strand {
                        continue;
                    }
                    scores.insert(candidate.id.clone(), score_candidate(transcript, candidate));
                    candidates.insert(candidate.id.clone(), candidate);
                }

                if let Some((winner_id, score)) = select_best(&scores) {
                    stats.matched += 1;
                    debug!(
                        "{} -> {} (genomic {:.3}, coding {:.3})",
                        transcript.display_accession(),
                        winner_id,
                        score.genomic,
                        score.coding
                    );
                    if let Some(&winner) = candidates.get(winner_id.as_str()) {
                        emit_match(transcript, gene, winner, species, registry, sink, &mut stats)?;
                    }
                }
            }
        }
        if let Some(pb) = &pb {
            pb.inc(1);
        }
    }

    if let Some(pb) = &pb {
        pb.finish_and_clear();
    }

    if refseq_seen == 0 {
        warn!("no RefSeq-shaped transcript models found for {}", species);
    }
    info!(
        "{}: scanned {} transcripts, matched {}, wrote {} transcript / {} translation / {} dependent xrefs ({} skipped on unmapped prefixes)",
        species,
        stats.scanned,
        stats.matched,
        stats.transcript_xrefs,
        stats.translation_xrefs,
        stats.dependent_xrefs,
        stats.skipped_unmapped
    );

    Ok(stats)
}

/// Write the cross-references for one winning match: the transcript link,
/// the protein link when both sides carry an identical protein product, and
/// one dependent link per external gene identifier.
fn emit_match(
    source: &TranscriptModel,
    gene: &GeneModel,
    winner: &TranscriptModel,
    species: &str,
    registry: &SourceRegistry,
    sink: &mut dyn XrefSink,
    stats: &mut MatchStats,
) -> Result<(), XrefError> {
    let display = source.display_accession();
    let Some(source_name) = registry.source_for_accession(display) else {
        warn!("unmapped accession prefix, skipping {}", display);
        stats.skipped_unmapped += 1;
        return Ok(());
    };

    let (accession, version) = split_accession(display);
    sink.add_xref(CrossReference {
        accession: accession.to_string(),
        version,
        label: display.to_string(),
        source_name: source_name.to_string(),
        species: species.to_string(),
        target_kind: XrefTarget::Transcript,
        target_id: winner.id.clone(),
    })?;
    stats.transcript_xrefs += 1;

    if let (Some(source_tl), Some(winner_tl)) = (&source.translation, &winner.translation) {
        if source_tl.sequence == winner_tl.sequence {
            let protein_display = source_tl.preferred_accession();
            match registry.source_for_accession(protein_display) {
                Some(protein_source) => {
                    let (protein_acc, protein_version) = split_accession(protein_display);
                    sink.add_xref(CrossReference {
                        accession: protein_acc.to_string(),
                        version: protein_version,
                        label: protein_display.to_string(),
                        source_name: protein_source.to_string(),
                        species: species.to_string(),
                        target_kind: XrefTarget::Translation,
                        target_id: winner_tl.id.clone(),
                    })?;
                    stats.translation_xrefs += 1;
                }
                None => {
                    warn!(
                        "unmapped protein accession prefix, skipping {}",
                        protein_display
                    );
                    stats.skipped_unmapped += 1;
                }
            }
        }
    }

    for external_id in &gene.external_ids {
        sink.add_dependent_xref(DependentXref {
            accession: external_id.clone(),
            source_name: ENTREZ_GENE_SOURCE.to_string(),
            master_accession: accession.to_string(),
        })?;
        stats.dependent_xrefs += 1;
    }

    Ok(())
}
