//! BED12 ingestion into transcript and gene models.
//!
//! One transcript per line: genomic exons come from the block columns, coding
//! exons from clipping each block to the `thickStart..thickEnd` region. The
//! `name` column may carry pipe-separated metadata
//! (`id|accession|biotype|gene_id|external_gene_ids`), everything after the
//! id being optional; external gene ids are `;`-separated. Protein products
//! are loaded separately from a tab-separated table
//! (`transcript_id  protein_id  sequence  [alt_accessions]`).

use std::collections::HashMap;
use std::io::BufRead;
use std::path::Path;

use log::debug;

use crate::errors::CoreError;
use crate::models::{ExonInterval, GeneModel, Strand, TranscriptModel, TranslationModel};
use crate::utils::get_dynamic_reader;

/// A parsed BED12 line: the transcript plus the gene grouping metadata that
/// has no place on the transcript model itself.
#[derive(Debug, Clone, PartialEq)]
pub struct BedRecord {
    pub transcript: TranscriptModel,
    pub gene_id: Option<String>,
    pub external_gene_ids: Vec<String>,
}

/// Read a (possibly gzipped) BED12 file into records, one per line.
pub fn read_bed12<P: AsRef<Path>>(path: P) -> Result<Vec<BedRecord>, CoreError> {
    let reader = get_dynamic_reader(path.as_ref())?;

    let mut records = Vec::new();
    for (idx, line) in reader.lines().enumerate() {
        let line = line?;
        let trimmed = line.trim();
        if trimmed.is_empty()
            || trimmed.starts_with('#')
            || trimmed.starts_with("track")
            || trimmed.starts_with("browser")
        {
            continue;
        }
        records.push(parse_bed12_line(trimmed, idx + 1)?);
    }

    debug!(
        "read {} transcript models from {}",
        records.len(),
        path.as_ref().display()
    );
    Ok(records)
}

pub fn parse_bed12_line(line: &str, lineno: usize) -> Result<BedRecord, CoreError> {
    let err = |msg: String| CoreError::BedParse { line: lineno, msg };

    let fields: Vec<&str> = line.split('\t').collect();
    if fields.len() < 12 {
        return Err(err(format!("expected 12 fields, got {}", fields.len())));
    }

    let parse_u64 = |value: &str, what: &str| {
        value
            .parse::<u64>()
            .map_err(|_| err(format!("invalid {}: {}", what, value)))
    };

    let chrom = fields[0].to_string();
    let chrom_start = parse_u64(fields[1], "chromStart")?;
    let strand: Strand = fields[5]
        .parse()
        .map_err(|_| err(format!("invalid strand: {}", fields[5])))?;
    let thick_start = parse_u64(fields[6], "thickStart")?;
    let thick_end = parse_u64(fields[7], "thickEnd")?;
    let block_count = parse_u64(fields[9], "blockCount")? as usize;

    let sizes = split_block_list(fields[10], "blockSizes", &parse_u64)?;
    let starts = split_block_list(fields[11], "blockStarts", &parse_u64)?;
    if sizes.len() != block_count || starts.len() != block_count {
        return Err(err(format!(
            "blockCount {} does not match block lists ({} sizes, {} starts)",
            block_count,
            sizes.len(),
            starts.len()
        )));
    }

    let mut exons = Vec::with_capacity(block_count);
    let mut coding_exons = Vec::new();
    for (size, offset) in sizes.iter().zip(starts.iter()) {
        let start = chrom_start + offset;
        let exon = ExonInterval::new(start, start + size)
            .map_err(|e| err(e.to_string()))?;
        exons.push(exon);

        let cds_start = exon.start.max(thick_start);
        let cds_end = exon.end.min(thick_end);
        if cds_start < cds_end {
            coding_exons.push(ExonInterval {
                start: cds_start,
                end: cds_end,
            });
        }
    }

    // name column metadata: id|accession|biotype|gene_id|external_gene_ids
    let mut meta = fields[3].split('|');
    let id = meta
        .next()
        .filter(|s| !s.is_empty())
        .ok_or_else(|| err("empty name column".to_string()))?;
    let accession = meta.next().filter(|s| !s.is_empty()).map(str::to_string);
    let biotype = match meta.next().filter(|s| !s.is_empty()) {
        Some(b) => b.to_string(),
        None if !coding_exons.is_empty() => "protein_coding".to_string(),
        None => "misc_RNA".to_string(),
    };
    let gene_id = meta.next().filter(|s| !s.is_empty()).map(str::to_string);
    let external_gene_ids = meta
        .next()
        .map(|s| {
            s.split(';')
                .filter(|p| !p.is_empty())
                .map(str::to_string)
                .collect()
        })
        .unwrap_or_default();

    Ok(BedRecord {
        transcript: TranscriptModel::new(
            id, accession, biotype, chrom, strand, exons, coding_exons, None,
        ),
        gene_id,
        external_gene_ids,
    })
}

fn split_block_list(
    value: &str,
    what: &str,
    parse_u64: &dyn Fn(&str, &str) -> Result<u64, CoreError>,
) -> Result<Vec<u64>, CoreError> {
    value
        .split(',')
        .filter(|p| !p.is_empty())
        .map(|p| parse_u64(p, what))
        .collect()
}

/// Read a protein table keyed by transcript id.
pub fn read_protein_table<P: AsRef<Path>>(
    path: P,
) -> Result<HashMap<String, TranslationModel>, CoreError> {
    let reader = get_dynamic_reader(path.as_ref())?;

    let mut table = HashMap::new();
    for (idx, line) in reader.lines().enumerate() {
        let line = line?;
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }

        let fields: Vec<&str> = trimmed.split('\t').collect();
        if fields.len() < 3 {
            return Err(CoreError::ProteinParse {
                line: idx + 1,
                msg: format!("expected at least 3 fields, got {}", fields.len()),
            });
        }

        let alt_accessions = fields
            .get(3)
            .map(|s| {
                s.split(';')
                    .filter(|p| !p.is_empty())
                    .map(str::to_string)
                    .collect()
            })
            .unwrap_or_default();

        table.insert(
            fields[0].to_string(),
            TranslationModel {
                id: fields[1].to_string(),
                sequence: fields[2].to_string(),
                alt_accessions,
            },
        );
    }

    Ok(table)
}

/// Attach protein products to the records that reference them, matching on
/// transcript id first, display accession second.
pub fn attach_translations(
    records: &mut [BedRecord],
    translations: &mut HashMap<String, TranslationModel>,
) {
    for record in records.iter_mut() {
        let transcript = &mut record.transcript;
        let translation = translations
            .remove(&transcript.id)
            .or_else(|| translations.remove(transcript.display_accession()));
        if translation.is_some() {
            transcript.translation = translation;
        }
    }
}

/// Group records into genes: records sharing a `gene_id` tag form one gene,
/// untagged records are chained by span overlap per chromosome and strand.
pub fn genes_from_records(records: Vec<BedRecord>) -> Vec<GeneModel> {
    let mut genes = Vec::new();

    let mut tagged: HashMap<String, GeneModel> = HashMap::new();
    let mut tagged_order = Vec::new();
    let mut untagged = Vec::new();

    for record in records {
        match record.gene_id {
            Some(gene_id) => {
                let gene = tagged.entry(gene_id.clone()).or_insert_with(|| {
                    tagged_order.push(gene_id.clone());
                    GeneModel::new(
                        gene_id,
                        record.transcript.chrom.clone(),
                        record.transcript.strand,
                        vec![],
                        vec![],
                    )
                });
                for ext in record.external_gene_ids {
                    if !gene.external_ids.contains(&ext) {
                        gene.external_ids.push(ext);
                    }
                }
                gene.transcripts.push(record.transcript);
            }
            None => untagged.push((record.transcript, record.external_gene_ids)),
        }
    }

    for gene_id in tagged_order {
        if let Some(gene) = tagged.remove(&gene_id) {
            genes.push(gene);
        }
    }

    // overlap-chain the untagged leftovers per chromosome and strand
    untagged.sort_by_key(|(t, _)| {
        (
            t.chrom.clone(),
            t.strand.to_string(),
            t.span().map(|s| s.0).unwrap_or(u64::MAX),
        )
    });

    let mut current: Option<(GeneModel, u64)> = None;
    for (transcript, external_ids) in untagged {
        let Some((t_start, t_end)) = transcript.span() else {
            continue;
        };

        current = Some(match current.take() {
            Some((mut gene, gene_end))
                if gene.chrom == transcript.chrom
                    && gene.strand == transcript.strand
                    && t_start < gene_end =>
            {
                for ext in external_ids {
                    if !gene.external_ids.contains(&ext) {
                        gene.external_ids.push(ext);
                    }
                }
                gene.transcripts.push(transcript);
                (gene, gene_end.max(t_end))
            }
            previous => {
                if let Some((gene, _)) = previous {
                    genes.push(gene);
                }
                let gene = GeneModel::new(
                    format!("locus_{}", transcript.id),
                    transcript.chrom.clone(),
                    transcript.strand,
                    vec![transcript],
                    external_ids,
                );
                (gene, t_end)
            }
        });
    }
    if let Some((gene, _)) = current.take() {
        genes.push(gene);
    }

    genes
}
