use std::fs::File;
use std::io::{BufWriter, Write};

use anyhow::{Context, Result};
use clap::ArgMatches;
use log::info;

use refmatch_core::bed::{genes_from_records, read_bed12};
use refmatch_core::source::MemoryAnnotations;
use refmatch_xref::frameshift::find_frameshift_introns;

use super::cli::DEFAULT_OUT;

pub fn run_frameshift(matches: &ArgMatches) -> Result<()> {
    let models = matches
        .get_one::<String>("models")
        .expect("A path to a transcript model file is required.");

    let default_out = DEFAULT_OUT.to_string();
    let output = matches.get_one::<String>("output").unwrap_or(&default_out);

    let records = read_bed12(models)?;
    let annotations = MemoryAnnotations::new(genes_from_records(records));
    let attribs = find_frameshift_introns(&annotations);

    let file = File::create(output)
        .with_context(|| format!("Failed to create output file: {}", output))?;
    let mut writer = BufWriter::new(file);
    for attrib in &attribs {
        writeln!(writer, "{}", attrib.as_tsv())?;
    }

    info!("wrote {} transcript attributes to {}", attribs.len(), output);

    Ok(())
}
