use std::path::Path;

use anyhow::{bail, Context, Result};
use log::{debug, trace};
use regex::Regex;

use crate::prefix::attribute::AttributeRewriter;
use crate::prefix::token::TokenPrefixer;
use crate::prefix::types::{PrefixOptions, TransformOutput};

/// Source-to-source rewriter that prefixes utility class names in markup
///
/// A prefixer is built once from options and then applied to any number of
/// source units. It keeps no mutable state, so a single instance can serve
/// concurrent callers.
#[derive(Debug)]
pub struct ClassPrefixer {
    /// Options the prefixer was created with
    options: PrefixOptions,

    /// Compiled exclusion patterns matched against resource paths
    exclude: Vec<Regex>,

    /// Attribute rewriter carrying the token policy
    rewriter: AttributeRewriter,
}

impl ClassPrefixer {
    /// Create a new prefixer from the given options
    ///
    /// Fails when the prefix is empty or when an exclusion pattern is not a
    /// valid regular expression. A silently inert prefixer would be worse
    /// than an early error here.
    pub fn new(options: PrefixOptions) -> Result<Self> {
        if options.prefix.trim().is_empty() {
            bail!("Class prefix must not be empty");
        }

        let mut exclude = Vec::with_capacity(options.exclude.len());
        for pattern in &options.exclude {
            let re = Regex::new(pattern)
                .with_context(|| format!("Failed to compile exclude pattern '{}'", pattern))?;
            exclude.push(re);
        }

        let rewriter = AttributeRewriter::new(TokenPrefixer::new(options.prefix.as_str()));

        Ok(Self {
            options,
            exclude,
            rewriter,
        })
    }

    /// The options this prefixer was created with
    pub fn options(&self) -> &PrefixOptions {
        &self.options
    }

    /// The class prefix applied to utility tokens
    pub fn prefix(&self) -> &str {
        self.rewriter.tokens().prefix()
    }

    /// Whether a resource path matches any exclusion pattern
    pub fn is_excluded(&self, resource_path: impl AsRef<Path>) -> bool {
        let path = resource_path.as_ref().to_string_lossy();
        self.exclude.iter().any(|re| re.is_match(&path))
    }

    /// Apply the token policy to a single class name
    pub fn prefix_class(&self, cls: &str) -> String {
        self.rewriter.tokens().prefix_token(cls)
    }

    /// Transform one source unit, returning the rewritten code
    ///
    /// Excluded units come back byte-for-byte identical.
    pub fn transform(&self, code: &str, resource_path: impl AsRef<Path>) -> String {
        self.transform_with_stats(code, resource_path).code
    }

    /// Transform one source unit, returning the rewritten code with counters
    pub fn transform_with_stats(
        &self,
        code: &str,
        resource_path: impl AsRef<Path>,
    ) -> TransformOutput {
        let resource_path = resource_path.as_ref();

        if self.is_excluded(resource_path) {
            trace!("Excluded from prefixing: {}", resource_path.display());
            return TransformOutput::unchanged(code.to_string());
        }

        let (code, stats) = self.rewriter.rewrite(code);
        debug!(
            "Rewrote {} of {} class attributes in {}",
            stats.attributes_rewritten,
            stats.attributes_matched,
            resource_path.display()
        );

        TransformOutput { code, stats }
    }
}
