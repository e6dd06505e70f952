// File: src/corpus.rs
use crate::core::types::Document;
use crate::error::{ClassifierError, Result};
use csv::StringRecord;
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

const REQUIRED_COLUMNS: [&str; 2] = ["tag", "content"];

/// Streams labeled posts out of a CSV file with a header row.
///
/// Columns are located by name, so `tag` and `content` may appear in any
/// position and extra columns are ignored. The first malformed row ends the
/// useful part of the stream: callers collecting into `Result<Vec<_>>` stop
/// there.
pub struct CorpusReader {
    path: PathBuf,
    reader: csv::Reader<BufReader<File>>,
    headers: StringRecord,
    record: u64,
}

impl CorpusReader {
    /// Opens the file and validates its header row.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let file = File::open(&path).map_err(|source| ClassifierError::InputAccess {
            path: path.clone(),
            source,
        })?;

        let mut reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .from_reader(BufReader::new(file));
        let headers = reader.headers()?.clone();

        for column in REQUIRED_COLUMNS {
            if !headers.iter().any(|header| header == column) {
                return Err(ClassifierError::MissingColumn { path, column });
            }
        }

        tracing::debug!(path = %path.display(), columns = headers.len(), "opened corpus");
        Ok(Self {
            path,
            reader,
            headers,
            record: 0,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn malformed(&self, source: csv::Error) -> ClassifierError {
        ClassifierError::MalformedRow {
            path: self.path.clone(),
            record: self.record,
            source,
        }
    }
}

impl Iterator for CorpusReader {
    type Item = Result<Document>;

    fn next(&mut self) -> Option<Self::Item> {
        let mut row = StringRecord::new();
        match self.reader.read_record(&mut row) {
            Ok(false) => None,
            Ok(true) => {
                self.record += 1;
                Some(
                    row.deserialize::<Document>(Some(&self.headers))
                        .map_err(|source| self.malformed(source)),
                )
            }
            Err(source) => {
                self.record += 1;
                Some(Err(self.malformed(source)))
            }
        }
    }
}
