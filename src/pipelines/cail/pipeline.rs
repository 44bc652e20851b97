//! CAIL2018 dataset normalization pipeline.
//!
//! The dataset ships as a handful of line-delimited JSON files spread
//! over a root directory. Each file is streamed line by line, each line
//! decoded into a raw case and flattened into a [NormalizedCase]; the
//! accumulated corpus is then written once, as a single JSON array.
//!
//! # Processing
//! 1. Each candidate file of [DATA_FILES] is checked for existence;
//!    missing ones are skipped with a warning.
//! 1. Each line of an existing file is parsed and normalized. Bad lines
//!    (invalid JSON, unexpected shape) are logged and dropped, never
//!    aborting the file or the run.
//! 1. The whole accumulated sequence is serialized to the destination
//!    file, creating its parent directory when absent.
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

use log::{error, info, warn};

use crate::error::{Error, LineError};
use crate::io::{CorpusWriter, FileReader};
use crate::pipelines::cail::types::NormalizedCase;
use crate::pipelines::pipeline::Pipeline;
use crate::progress::Progress;

/// Candidate dataset files, relative to the dataset root.
/// The exercise_contest entries are optional in most dumps.
const DATA_FILES: [&str; 7] = [
    "first_stage/train.json",
    "first_stage/test.json",
    "restData/rest_data.json",
    "final_test.json",
    "exercise_contest/data_train.json",
    "exercise_contest/data_test.json",
    "exercise_contest/data_valid.json",
];

pub struct CailNormalizer {
    src: PathBuf,
    dst: PathBuf,
}

impl CailNormalizer {
    pub fn new(src: PathBuf, dst: PathBuf) -> Self {
        Self { src, dst }
    }

    /// Counts lines for progress reporting. Instrumentation only:
    /// a failure here never fails the file.
    fn count_lines(path: &Path) -> Option<usize> {
        let handle = File::open(path).ok()?;
        Some(BufReader::new(handle).lines().count())
    }

    /// Processes one line-delimited JSON file, in line order.
    ///
    /// Bad lines are logged and skipped. A file that cannot be opened
    /// yields an empty sequence and an error log, not a failure.
    pub fn process_file(path: &Path) -> Vec<NormalizedCase> {
        let reader = match FileReader::from_path(path) {
            Ok(reader) => reader,
            Err(e) => {
                error!("could not open {:?}: {:?}", path, e);
                return Vec::new();
            }
        };

        let total = Self::count_lines(path).unwrap_or(0);
        info!("processing {:?} (~{} cases)", path, total);
        let mut progress = Progress::new(&path.display().to_string(), total);

        let mut cases = Vec::new();
        for entry in reader {
            progress.tick();
            match entry {
                Ok(raw) => cases.push(NormalizedCase::from(raw)),
                Err(LineError::Malformed(preview)) => {
                    warn!("json parse failure, skipping line: {}", preview);
                }
                Err(LineError::Shape(e)) => {
                    error!("unexpected record shape, dropping case: {}", e);
                }
                Err(LineError::Io(e)) => {
                    error!("read error, skipping line: {}", e);
                }
            }
        }

        cases
    }

    /// Processes every candidate file under the dataset root,
    /// in [DATA_FILES] order.
    pub fn process_dataset(&self) -> Vec<NormalizedCase> {
        let mut all_cases = Vec::new();

        for relative in DATA_FILES {
            let path = self.src.join(relative);
            if !path.exists() {
                warn!("file not found: {:?}", path);
                continue;
            }

            let cases = Self::process_file(&path);
            info!(
                "processed {} cases from {:?}, {} total",
                cases.len(),
                path,
                all_cases.len() + cases.len()
            );
            all_cases.extend(cases);
        }

        all_cases
    }
}

impl Pipeline<()> for CailNormalizer {
    fn run(&self) -> Result<(), Error> {
        info!("start processing CAIL2018 dataset at {:?}", self.src);

        let cases = self.process_dataset();

        let writer = CorpusWriter::new(&self.dst)?;
        writer.write(&cases)?;

        info!("done: {} cases processed", cases.len());
        info!("normalized corpus written to {:?}", self.dst);
        Ok(())
    }
}
