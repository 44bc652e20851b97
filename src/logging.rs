//! Logger setup.
//!
//! Diagnostics go to the console and to an append-mode log file, through
//! a single env_logger target. Defaults to `info` unless `RUST_LOG` says
//! otherwise. Observability only: nothing reads the log back.
use std::fs::{File, OpenOptions};
use std::io::{self, Write};
use std::path::Path;

use env_logger::{Builder, Env, Target};

/// Duplicates everything written to it into a file and stderr.
struct Tee {
    file: File,
}

impl Write for Tee {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        io::stderr().write_all(buf)?;
        self.file.write_all(buf)?;
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        io::stderr().flush()?;
        self.file.flush()
    }
}

/// Initializes the process-wide logger. Call once, before any logging.
///
/// If the log file cannot be opened, logging degrades to console only.
pub fn init(log_path: &Path) {
    let env = Env::default().default_filter_or("info");
    let mut builder = Builder::from_env(env);

    match OpenOptions::new().create(true).append(true).open(log_path) {
        Ok(file) => {
            builder.target(Target::Pipe(Box::new(Tee { file })));
        }
        Err(e) => eprintln!("cannot open log file {:?}: {}", log_path, e),
    }

    builder.init();
}
