//! File-level asset handling: discovery, path mapping, transforms, writing.

mod fs;
mod kind;
pub mod minify;
mod process;
mod route;
mod scan;

// Capabilities
pub use fs::{AssetFs, StdFs};
pub use minify::{Minifier, MinifyError, OxcMinifier};
pub use scan::{DiscoveryError, Discoverer, GlobDiscoverer};

// Types
pub use kind::TransformKind;
pub use route::AssetRoute;

// Pure functions
pub use kind::extension;
pub use route::dest_path;

// Processing (side effects)
pub use minify::transform;
pub use process::{ProcessContext, ProcessError, process_file};
