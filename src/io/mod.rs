/*!
# IO utilities

Reading of line-delimited case files and one-shot writing of the
normalized corpus.
!*/
pub mod reader;
pub mod writer;

pub use reader::{CaseReader, FileReader};
pub use writer::CorpusWriter;
