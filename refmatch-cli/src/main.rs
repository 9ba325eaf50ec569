mod frameshift;
mod xref;

use anyhow::Result;
use clap::Command;
use log::Level;
use simple_logger::init_with_level;

pub mod consts {
    pub const VERSION: &str = env!("CARGO_PKG_VERSION");
    pub const PKG_NAME: &str = "refmatch";
    pub const BIN_NAME: &str = "refmatch";
}

fn build_parser() -> Command {
    Command::new(consts::BIN_NAME)
        .bin_name(consts::BIN_NAME)
        .version(consts::VERSION)
        .about("Tools for matching imported RefSeq transcript models to reference annotation and emitting cross-references.")
        .subcommand_required(true)
        .subcommand(xref::cli::create_xref_cli())
        .subcommand(frameshift::cli::create_frameshift_cli())
}

fn main() -> Result<()> {
    init_with_level(Level::Info)?;

    let app = build_parser();
    let matches = app.get_matches();

    match matches.subcommand() {
        //
        // XREF MATCHING
        //
        Some((xref::cli::XREF_CMD, matches)) => {
            xref::handlers::run_xref(matches)?;
        }

        //
        // FRAMESHIFT INTRON SCAN
        //
        Some((frameshift::cli::FRAMESHIFT_CMD, matches)) => {
            frameshift::handlers::run_frameshift(matches)?;
        }

        _ => unreachable!("Subcommand not found"),
    };

    Ok(())
}
