//! File access for the prover
//!
//! Reads the file being proven, and reads or writes header files.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use filepow_core::{parse_str, Header, PartialHeader};
use thiserror::Error;
use tracing::debug;

#[derive(Error, Debug)]
pub enum FileError {
    #[error("failed to read {}: {source}", .path.display())]
    Read { path: PathBuf, source: io::Error },

    #[error("failed to write {}: {source}", .path.display())]
    Write { path: PathBuf, source: io::Error },
}

/// Read the raw bytes of the file to mine or verify
pub fn read_input(path: &Path) -> Result<Vec<u8>, FileError> {
    let bytes = fs::read(path).map_err(|source| FileError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    debug!(path = %path.display(), len = bytes.len(), "read input file");
    Ok(bytes)
}

/// Read and parse a header file
///
/// Invalid UTF-8 is replaced rather than rejected; a damaged line simply
/// fails to match its field during verification.
pub fn read_header(path: &Path) -> Result<PartialHeader, FileError> {
    let bytes = fs::read(path).map_err(|source| FileError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(parse_str(&String::from_utf8_lossy(&bytes)))
}

/// Write `header` as canonical header lines
pub fn write_header(path: &Path, header: &Header) -> Result<(), FileError> {
    fs::write(path, header.to_string()).map_err(|source| FileError::Write {
        path: path.to_path_buf(),
        source,
    })?;
    debug!(path = %path.display(), "wrote header file");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use filepow_core::{mine, verify, Field};

    #[test]
    fn test_header_file_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("proof.header");
        let header = mine(4, b"round trip").header();

        write_header(&path, &header).unwrap();
        let parsed = read_header(&path).unwrap();

        assert_eq!(parsed.to_header(), Some(header));
    }

    #[test]
    fn test_written_header_verifies_against_input() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("input.bin");
        let header_path = dir.path().join("input.header");
        fs::write(&input, [0u8, 1, 2, 3, 255]).unwrap();

        let data = read_input(&input).unwrap();
        write_header(&header_path, &mine(6, &data).header()).unwrap();

        let report = verify(&read_header(&header_path).unwrap(), &read_input(&input).unwrap());
        assert!(report.passed);
    }

    #[test]
    fn test_missing_file_is_read_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent");

        let err = read_input(&path).unwrap_err();
        assert!(matches!(err, FileError::Read { .. }));
        assert!(err.to_string().contains("absent"));
        assert!(read_header(&path).is_err());
    }

    #[test]
    fn test_non_utf8_header_still_parses() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("garbled.header");
        fs::write(&path, b"Hash \xff\xfe\nProof-of-work !\n").unwrap();

        let parsed = read_header(&path).unwrap();
        assert_eq!(parsed.value(Field::ProofOfWork), Some("!"));
        assert!(parsed.contains(Field::Hash));
    }
}
