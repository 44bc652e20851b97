/*! Line-delimited case reader.
 * !*/
use std::fs::File;
use std::io::{BufRead, Lines, Read};

use std::io::BufReader;
use std::path::Path;

use crate::error::{Error, LineError};
use crate::pipelines::cail::types::RawCase;

/// Streams raw case records out of a line-delimited JSON source,
/// one record per line.
#[derive(Debug)]
pub struct CaseReader<T>
where
    T: Read,
{
    lines: Lines<BufReader<T>>,
}

pub type FileReader = CaseReader<File>;

impl FileReader {
    pub fn from_path(src: &Path) -> Result<Self, Error> {
        let handle = File::open(src)?;
        Ok(CaseReader::new(handle))
    }
}

impl<T> CaseReader<T>
where
    T: Read,
{
    pub fn new(src: T) -> Self {
        let br = BufReader::new(src);
        Self { lines: br.lines() }
    }
}

impl<T> Iterator for CaseReader<T>
where
    T: Read,
{
    type Item = Result<RawCase, LineError>;

    /// Iterates over case entries. Failures are yielded per line so that
    /// callers can log and skip without losing the rest of the file.
    fn next(&mut self) -> Option<Self::Item> {
        let line = match self.lines.next()? {
            Ok(line) => line,
            Err(e) => return Some(Err(LineError::Io(e))),
        };

        Some(
            serde_json::from_str::<RawCase>(&line)
                .map_err(|e| LineError::from_parse(e, &line)),
        )
    }
}
