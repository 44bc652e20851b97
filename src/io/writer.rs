/*! Corpus writer.

Serializes the whole accumulated corpus once, as a single pretty-printed
JSON array. Non-ASCII text is written literally, not escaped.
!*/
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use log::debug;

use crate::error::Error;
use crate::pipelines::cail::types::NormalizedCase;

pub struct CorpusWriter {
    dst: PathBuf,
}

impl CorpusWriter {
    /// Creates a writer for `dst`, creating parent directories if needed.
    pub fn new(dst: &Path) -> Result<Self, Error> {
        if let Some(parent) = dst.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        Ok(Self {
            dst: dst.to_path_buf(),
        })
    }

    /// Writes all cases as one JSON array. Overwrites any previous output.
    pub fn write(&self, cases: &[NormalizedCase]) -> Result<(), Error> {
        debug!("writing {} cases to {:?}", cases.len(), self.dst);
        let handle = File::create(&self.dst)?;
        let mut bw = BufWriter::new(handle);
        serde_json::to_writer_pretty(&mut bw, cases)?;
        bw.flush()?;

        Ok(())
    }

    pub fn dst(&self) -> &Path {
        &self.dst
    }
}
