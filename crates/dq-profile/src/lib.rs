//! Statistical summarization engine.
//!
//! The profiling layer tolerates dirty data: malformed numbers are
//! excluded from aggregates, missing cells are counted rather than
//! rejected, and the correlation estimator substitutes zero for values
//! that fail coercion. Nothing in this crate returns an error.

pub mod correlation;
pub mod profile;
pub mod summarize;

pub use correlation::correlate;
pub use profile::profile_column;
pub use summarize::summarize;
