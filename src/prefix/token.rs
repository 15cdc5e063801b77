use log::trace;

use crate::prefix::types::ClassListRewrite;

/// Applies the per-token prefixing policy to individual class names
#[derive(Debug, Clone)]
pub struct TokenPrefixer {
    /// The prefix prepended to bare utility names
    prefix: String,
}

impl TokenPrefixer {
    /// Create a new token prefixer for the given prefix
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
        }
    }

    /// The configured prefix
    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// Apply the prefixing policy to a single class token
    ///
    /// Already-prefixed tokens and arbitrary-value tokens (leading `[`) pass
    /// through unchanged. A modifier chain (`hover:`, `focus:`, `dark:`, ...)
    /// keeps its modifiers and the prefix lands on the final segment; an
    /// important marker (`!`) stays in front of the prefix. Rule order matters:
    /// the already-prefixed and arbitrary-value checks run before modifier and
    /// important handling.
    pub fn prefix_token(&self, cls: &str) -> String {
        let cls = cls.trim();
        if cls.is_empty() {
            return cls.to_string();
        }

        // Already prefixed, nothing to do
        if cls.starts_with(&self.prefix) {
            return cls.to_string();
        }

        // Arbitrary values like [color:red] or [&_svg]:something keep their spelling
        if cls.starts_with('[') {
            return cls.to_string();
        }

        // Modifier chain: the prefix goes on the last segment, the base utility name.
        // A final segment that already carries the prefix stays untouched; re-running
        // the transform must never stack prefixes.
        if cls.contains(':') {
            let mut parts: Vec<&str> = cls.split(':').collect();
            let last = parts.len() - 1;
            if parts[last].starts_with(&self.prefix) {
                return cls.to_string();
            }
            let prefixed = format!("{}{}", self.prefix, parts[last]);
            parts[last] = prefixed.as_str();
            return parts.join(":");
        }

        // Important marker stays in front of the prefix
        if let Some(rest) = cls.strip_prefix('!') {
            if rest.starts_with(&self.prefix) {
                return cls.to_string();
            }
            return format!("!{}{}", self.prefix, rest);
        }

        format!("{}{}", self.prefix, cls)
    }

    /// Prefix every token of a whitespace-separated class list
    ///
    /// Tokens keep their original order; runs of whitespace collapse to a
    /// single space and never produce empty tokens.
    pub fn prefix_class_list(&self, classes: &str) -> ClassListRewrite {
        let mut tokens_prefixed = 0;
        let mut tokens_passed_through = 0;
        let mut rewritten = Vec::new();

        for cls in classes.split_whitespace() {
            let prefixed = self.prefix_token(cls);
            if prefixed == cls {
                tokens_passed_through += 1;
            } else {
                trace!("Prefixed class token: {} -> {}", cls, prefixed);
                tokens_prefixed += 1;
            }
            rewritten.push(prefixed);
        }

        ClassListRewrite {
            classes: rewritten.join(" "),
            tokens_prefixed,
            tokens_passed_through,
        }
    }
}
