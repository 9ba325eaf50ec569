use std::fmt::{self, Display};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::CoreError;

/// Genomic strand of a feature.
#[derive(Eq, PartialEq, Hash, Debug, Clone, Copy, Serialize, Deserialize)]
pub enum Strand {
    Forward,
    Reverse,
}

impl FromStr for Strand {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "+" | "1" => Ok(Strand::Forward),
            "-" | "-1" => Ok(Strand::Reverse),
            _ => Err(CoreError::InvalidStrand(s.to_string())),
        }
    }
}

impl Display for Strand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Strand::Forward => write!(f, "+"),
            Strand::Reverse => write!(f, "-"),
        }
    }
}
