use clap::{Arg, Command, arg};

pub const FRAMESHIFT_CMD: &str = "frameshift";
pub const DEFAULT_OUT: &str = "frameshift_attribs.tsv";

pub fn create_frameshift_cli() -> Command {
    Command::new(FRAMESHIFT_CMD)
        .about("Scan transcript models for frameshift introns and write transcript attributes.")
        .arg(Arg::new("models").help("Transcript models to scan (BED12, optionally gzipped)"))
        .arg(arg!(--output <PATH>).required(false).help("Output file"))
}
