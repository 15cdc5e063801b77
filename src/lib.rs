pub mod plugin;
pub mod prefix;
pub mod utils;

// Re-export main types and functions for easier access
pub use prefix::types::{PrefixOptions, RewriteStats, TransformOutput};
pub use prefix::ClassPrefixer;
pub use prefix::TokenPrefixer;

pub use plugin::{PrefixPlugin, PLUGIN_NAME};

// Re-export utility functions
pub use utils::file_utils;
