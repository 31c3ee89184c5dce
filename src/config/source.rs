//! Where config documents come from

use std::fs::File;
use std::io::{self, BufReader, Read};

/// Opens a config document by identifier.
///
/// The returned reader is owned by the caller and closed when dropped.
pub trait DocumentSource {
    fn open(&self, identifier: &str) -> io::Result<Box<dyn Read + '_>>;
}

/// Reads documents from the filesystem; the identifier is a path
#[derive(Debug, Clone, Copy, Default)]
pub struct FsSource;

impl DocumentSource for FsSource {
    fn open(&self, identifier: &str) -> io::Result<Box<dyn Read + '_>> {
        let file = File::open(identifier)?;
        Ok(Box::new(BufReader::new(file)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::NamedTempFile;

    #[test]
    fn test_fs_source_reads_file() {
        let mut file = NamedTempFile::new().unwrap();
        std::io::Write::write_all(&mut file, b"{\"Filters\": []}").unwrap();

        let mut content = String::new();
        FsSource
            .open(file.path().to_str().unwrap())
            .unwrap()
            .read_to_string(&mut content)
            .unwrap();
        assert_eq!(content, "{\"Filters\": []}");
    }

    #[test]
    fn test_fs_source_missing_file() {
        let err = FsSource.open("/definitely/not/here/timber.json").err().unwrap();
        assert_eq!(err.kind(), io::ErrorKind::NotFound);
    }
}
