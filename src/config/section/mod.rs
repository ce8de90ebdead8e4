//! Configuration section definitions.
//!
//! Each module corresponds to a section in `sap.toml`:
//!
//! | Module     | TOML Section    | Purpose                              |
//! |------------|-----------------|--------------------------------------|
//! | `minify`   | `[minify]`      | Stages on which minification runs    |
//! | `provider` | `[provider]`    | Provider defaults (stage)            |
//! | `task`     | `[tasks.<name>]`| Source glob and destination per task |

mod minify;
mod provider;
mod task;

pub use minify::MinifyConfig;
pub use provider::ProviderConfig;
pub use task::TaskEntry;
