//! Search module.
//!
//! Contains the filter specification, the query engine, and pagination.

mod filter;
mod query;
mod results;

pub use filter::FilterSpec;
pub use query::{query, query_refs};
pub use results::Page;
