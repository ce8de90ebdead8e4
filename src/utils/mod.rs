//! Small shared helpers.
//!
//! - [`path`]: filesystem path normalization and display
//! - [`plural`]: count formatting for log lines

pub mod path;
mod plural;

pub use path::{display_path, normalize_path};
pub use plural::plural_count;
