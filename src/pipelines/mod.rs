//! Pipelines.
//!
//! The corpus-producing stages live here, behind a light
//! [pipeline::Pipeline] trait so that drivers stay interchangeable.
pub mod cail;
#[allow(clippy::module_inception)]
pub mod pipeline;

pub use cail::CailNormalizer;
pub use pipeline::Pipeline;
