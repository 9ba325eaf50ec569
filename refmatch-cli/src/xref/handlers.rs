use std::fs::File;
use std::io::BufWriter;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::ArgMatches;
use log::info;

use refmatch_xref::record::{JsonSink, TsvSink};
use refmatch_xref::{ConnectionConfig, RunParams, SourceRegistry, run_species};

use super::cli::DEFAULT_OUT;

pub fn run_xref(matches: &ArgMatches) -> Result<()> {
    // missing run parameters are caught here, before any input is touched
    let params = RunParams::new(
        matches.get_one::<String>("source").cloned(),
        matches.get_one::<String>("species").cloned(),
        matches.get_one::<String>("core").map(PathBuf::from),
        matches.get_one::<String>("otherfeatures").map(PathBuf::from),
    )?
    .with_proteins(
        matches.get_one::<String>("core-proteins").map(PathBuf::from),
        matches
            .get_one::<String>("otherfeatures-proteins")
            .map(PathBuf::from),
    );

    let connection = match matches.get_one::<String>("connection") {
        Some(raw) => raw.parse::<ConnectionConfig>()?,
        None => ConnectionConfig::default(),
    };
    if let Some(host) = &connection.host {
        info!(
            "annotation server: {}:{} as {}",
            host,
            connection.port.unwrap_or(0),
            connection.user.as_deref().unwrap_or("anonymous")
        );
    }

    let default_out = DEFAULT_OUT.to_string();
    let output = matches.get_one::<String>("output").unwrap_or(&default_out);
    let format = matches
        .get_one::<String>("format")
        .map(String::as_str)
        .unwrap_or("tsv");

    let registry = SourceRegistry::new();
    let file = File::create(output)
        .with_context(|| format!("Failed to create output file: {}", output))?;
    let writer = BufWriter::new(file);

    let stats = match format {
        "tsv" => {
            let mut sink = TsvSink::new(writer);
            run_species(&params, &registry, &mut sink)?
        }
        "json" => {
            let mut sink = JsonSink::new(writer);
            run_species(&params, &registry, &mut sink)?
        }
        other => anyhow::bail!("Unknown output format: {}", other),
    };

    info!(
        "wrote {} cross-references and {} dependent records to {}",
        stats.transcript_xrefs + stats.translation_xrefs,
        stats.dependent_xrefs,
        output
    );

    Ok(())
}
