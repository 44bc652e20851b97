/*!
# Inspection utilities

Ad-hoc helpers for eyeballing dataset files: first N records of a JSON
file, first N lines of a large text file. Diagnostic only, not part of
the corpus data contract.
!*/
pub mod head;
pub mod sample;

pub use head::head;
pub use sample::sample;
