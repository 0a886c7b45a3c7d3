//! Model output formatters.

pub mod json;
pub mod summary;

pub use json::format_json;
pub use summary::{format_summary, summarize, ModelSummary};
