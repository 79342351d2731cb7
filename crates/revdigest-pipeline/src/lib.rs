//! End-to-end review digest: resolve, collect, select, summarize.
//!
//! Shared by the HTTP server and the command line so both run the exact same
//! sequence against the same collaborators.

pub mod error;
pub mod pipeline;

pub use error::PipelineError;
pub use pipeline::ReviewPipeline;
