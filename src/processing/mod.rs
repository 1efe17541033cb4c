//! Network aggregation logic.
//!
//! This module contains the reduction algorithm:
//! - [`supernet`] - nearest enclosing block lookup
//! - [`aggregate`] - the descending per-prefix-length pass

mod aggregate;
mod supernet;

// Re-export public functions
pub use aggregate::{sibling_parent, AggregationEngine, AggregationReport, TraceEvent};
pub use supernet::find_enclosing;
