use std::ffi::OsStr;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use flate2::read::MultiGzDecoder;

use crate::errors::CoreError;

///
/// Get a reader for either a gzip'd or non-gzip'd file.
///
/// # Arguments
///
/// - path: path to the file to read
///
pub fn get_dynamic_reader(path: &Path) -> Result<BufReader<Box<dyn Read>>, CoreError> {
    let is_gzipped = path.extension() == Some(OsStr::new("gz"));
    let file = File::open(path)
        .map_err(|e| CoreError::FileRead(format!("{}: {}", path.display(), e)))?;
    let file: Box<dyn Read> = match is_gzipped {
        true => Box::new(MultiGzDecoder::new(file)),
        false => Box::new(file),
    };

    Ok(BufReader::new(file))
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::io::{BufRead, Write};

    use pretty_assertions::assert_eq;

    #[test]
    fn test_plain_file_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("lines.txt");
        writeln!(File::create(&path).unwrap(), "chr1\t10\t20").unwrap();

        let reader = get_dynamic_reader(&path).unwrap();
        let lines: Vec<String> = reader.lines().map(|l| l.unwrap()).collect();
        assert_eq!(lines, vec!["chr1\t10\t20"]);
    }

    #[test]
    fn test_missing_file_is_an_error() {
        assert!(get_dynamic_reader(Path::new("/no/such/file.bed")).is_err());
    }
}
