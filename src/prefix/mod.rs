pub mod attribute;
pub mod prefixer;
pub mod token;
pub mod types;

// Re-export the main API for easier access
pub use attribute::AttributeRewriter;
pub use prefixer::ClassPrefixer;
pub use token::TokenPrefixer;
pub use types::{ClassListRewrite, PrefixOptions, QuoteStyle, RewriteStats, TransformOutput};
