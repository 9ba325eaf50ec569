use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Can't read file: {0}")]
    FileRead(String),

    #[error("Invalid interval: start {start} is greater than end {end}")]
    InvalidInterval { start: u64, end: u64 },

    #[error("Invalid strand: {0}")]
    InvalidStrand(String),

    #[error("Error parsing BED line {line}: {msg}")]
    BedParse { line: usize, msg: String },

    #[error("Error parsing protein table line {line}: {msg}")]
    ProteinParse { line: usize, msg: String },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
