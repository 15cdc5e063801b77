use std::path::Path;

use anyhow::Result;
use log::debug;

use crate::prefix::{ClassPrefixer, PrefixOptions, TransformOutput};
use crate::utils::file_utils;

/// Name the transform registers under in build tooling diagnostics
pub const PLUGIN_NAME: &str = "plugin-tailwind-prefix";

/// Default source extensions the transform applies to
const DEFAULT_EXTENSIONS: [&str; 2] = ["jsx", "tsx"];

/// Build-pipeline wrapper around [`ClassPrefixer`]
///
/// Pairs a prefixer with the file filter a build host uses to decide which
/// modules flow through the transform hook.
#[derive(Debug)]
pub struct PrefixPlugin {
    /// Prefixer applied to matching sources
    prefixer: ClassPrefixer,

    /// File extensions (without the dot) the transform applies to
    extensions: Vec<String>,
}

impl PrefixPlugin {
    /// Create a new plugin transforming .jsx and .tsx sources
    pub fn new(options: PrefixOptions) -> Result<Self> {
        let extensions = DEFAULT_EXTENSIONS.iter().map(|s| s.to_string()).collect();
        Self::with_extensions(options, extensions)
    }

    /// Create a new plugin transforming sources with the given extensions
    pub fn with_extensions(options: PrefixOptions, extensions: Vec<String>) -> Result<Self> {
        let prefixer = ClassPrefixer::new(options)?;

        Ok(Self {
            prefixer,
            extensions,
        })
    }

    /// The name the plugin registers under
    pub fn name(&self) -> &'static str {
        PLUGIN_NAME
    }

    /// The prefixer backing this plugin
    pub fn prefixer(&self) -> &ClassPrefixer {
        &self.prefixer
    }

    /// The file extensions the transform applies to
    pub fn extensions(&self) -> &[String] {
        &self.extensions
    }

    /// Whether the transform applies to the given resource path
    pub fn applies_to(&self, resource_path: impl AsRef<Path>) -> bool {
        file_utils::has_any_extension(resource_path, &self.extensions)
    }

    /// Transform module source, passing non-matching resources through unchanged
    pub fn transform(&self, code: &str, resource_path: impl AsRef<Path>) -> String {
        let resource_path = resource_path.as_ref();

        if !self.applies_to(resource_path) {
            return code.to_string();
        }

        self.prefixer.transform(code, resource_path)
    }

    /// Read a file and transform it, returning the result without writing back
    pub fn transform_file(&self, path: impl AsRef<Path>) -> Result<TransformOutput> {
        let path = path.as_ref();

        // Read the file content
        let code = file_utils::read_file_to_string(path)?;

        if !self.applies_to(path) {
            debug!("Leaving non-matching file untouched: {}", path.display());
            return Ok(TransformOutput::unchanged(code));
        }

        Ok(self.prefixer.transform_with_stats(&code, path))
    }
}
