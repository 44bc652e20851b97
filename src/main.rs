//! # cailnorm
//!
//! Pipeline to obtain a normalized legal-case corpus from a CAIL2018 dump.
//!
//! The `normalize` subcommand flattens the line-delimited dataset files
//! into a single JSON array of enriched case records; `sample` and
//! `head` are small helpers for inspecting dataset files by hand.
//!
//! ## Getting started
//!
//! ```sh
//! cailnorm 0.1.0
//! CAIL2018 corpus normalization tool.
//!
//! USAGE:
//!     cailnorm <SUBCOMMAND>
//!
//! FLAGS:
//!     -h, --help       Prints help information
//!     -V, --version    Prints version information
//!
//! SUBCOMMANDS:
//!     head         Preview the first lines of a large text file
//!     help         Prints this message or the help of the given subcommand(s)
//!     normalize    Normalize the CAIL2018 dataset into a flat JSON corpus
//!     sample       Preview the first records of a JSON file
//! ```
//!
use std::io::{self, Write};
use std::path::Path;

use log::debug;
use structopt::StructOpt;

use cailnorm::cli;
use cailnorm::error;
use cailnorm::inspect;
use cailnorm::logging;
use cailnorm::pipelines::{CailNormalizer, Pipeline};

const LOG_FILE: &str = "process.log";

fn main() -> Result<(), error::Error> {
    logging::init(Path::new(LOG_FILE));

    let opt = cli::Cailnorm::from_args();
    debug!("cli args\n{:#?}", opt);

    match opt {
        cli::Cailnorm::Normalize(n) => {
            let p = CailNormalizer::new(n.src, n.dst);
            p.run()?;
        }

        cli::Cailnorm::Sample(s) => {
            let stdout = io::stdout();
            let mut out = stdout.lock();
            inspect::sample(&s.file, s.records, &mut out)?;
            out.flush()?;
        }

        cli::Cailnorm::Head(h) => {
            let stdout = io::stdout();
            let mut out = stdout.lock();
            inspect::head(&h.file, h.lines, &mut out)?;
            out.flush()?;
        }
    };
    Ok(())
}
