//! CAIL2018 normalization pipeline.
pub mod pipeline;
pub mod types;

pub use pipeline::CailNormalizer;
