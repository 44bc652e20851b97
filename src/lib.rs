pub mod cli;
pub mod error;
pub mod inspect;
pub mod io;
pub mod logging;
pub mod pipelines;
pub mod progress;
