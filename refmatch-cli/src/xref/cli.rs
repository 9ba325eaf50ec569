use clap::{Command, arg};

pub const XREF_CMD: &str = "xref";
pub const DEFAULT_OUT: &str = "xrefs.tsv";

pub fn create_xref_cli() -> Command {
    Command::new(XREF_CMD)
        .about("Match imported RefSeq transcript models to reference transcripts and write cross-references.")
        .arg(arg!(--source <NAME>).help("Cross-reference source label for this run"))
        .arg(arg!(--species <NAME>).help("Species the inputs belong to"))
        .arg(arg!(--core <PATH>).help("Reference transcript models (BED12, optionally gzipped)"))
        .arg(
            arg!(--otherfeatures <PATH>)
                .help("Imported RefSeq transcript models (BED12, optionally gzipped)"),
        )
        .arg(
            arg!(--"core-proteins" <PATH>)
                .required(false)
                .help("Protein table for the reference models"),
        )
        .arg(
            arg!(--"otherfeatures-proteins" <PATH>)
                .required(false)
                .help("Protein table for the imported models"),
        )
        .arg(
            arg!(--connection <STRING>)
                .required(false)
                .help("Annotation server parameters as comma-separated key=>value pairs"),
        )
        .arg(arg!(--output <PATH>).required(false).help("Output file"))
        .arg(
            arg!(--format <FORMAT>)
                .required(false)
                .help("Output format: tsv or json"),
        )
}
