use thiserror::Error;

use refmatch_core::CoreError;

#[derive(Error, Debug)]
pub enum XrefError {
    #[error("Missing required run parameter: {0}")]
    MissingParam(&'static str),

    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error(transparent)]
    Core(#[from] CoreError),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("Error writing output: {0}")]
    Sink(String),
}
