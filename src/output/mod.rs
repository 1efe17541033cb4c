//! Output formatting for aggregated networks.
//!
//! This module handles everything written after aggregation:
//! - [`expand`] - optional splitting of large blocks
//! - [`render`] - text or JSON network lists
//! - [`terminal`] - verbose trace and rejected-line reporting

mod expand;
mod render;
mod terminal;

pub use expand::{expand, DEFAULT_SPLIT_PREFIX_LEN};
pub use render::write_networks;
pub use terminal::{format_event, write_rejected, write_trace};
