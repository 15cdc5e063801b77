use log::trace;
use once_cell::sync::Lazy;
use regex::{Captures, Regex};

use crate::prefix::token::TokenPrefixer;
use crate::prefix::types::{QuoteStyle, RewriteStats};

// Quoted-literal form: className="flex items-center"
static QUOTED_ATTRIBUTE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"className\s*=\s*"([^"]*?)""#).unwrap());

// Brace-wrapped literal form: className={"..."}, className={'...'} or
// className={`...`}. The content class excludes the interpolation marker, so
// template literals with expressions never match.
static BRACED_ATTRIBUTE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"className\s*=\s*\{(['"`])([^'"`$]*?)['"`]\}"#).unwrap());

/// Whether a raw class-list string is unsafe to rewrite textually
///
/// Arbitrary-value syntax and template interpolation both carry structure a
/// flat substitution would corrupt, so such occurrences pass through untouched.
fn is_unsafe_class_list(classes: &str) -> bool {
    classes.contains('[') || classes.contains("${")
}

/// Rewrites class attribute occurrences found in source text
///
/// Two substitution passes run in order, the brace-wrapped pass over the result
/// of the quoted pass. Spans outside matched occurrences are copied verbatim.
#[derive(Debug)]
pub struct AttributeRewriter {
    /// Token policy applied to each class name in a matched occurrence
    tokens: TokenPrefixer,
}

impl AttributeRewriter {
    /// Create a new attribute rewriter around the given token policy
    pub fn new(tokens: TokenPrefixer) -> Self {
        Self { tokens }
    }

    /// The token policy this rewriter applies
    pub fn tokens(&self) -> &TokenPrefixer {
        &self.tokens
    }

    /// Rewrite every recognized class attribute occurrence in the source text
    pub fn rewrite(&self, code: &str) -> (String, RewriteStats) {
        let mut stats = RewriteStats::new();
        let quoted = self.rewrite_quoted(code, &mut stats);
        let braced = self.rewrite_braced(&quoted, &mut stats);
        (braced, stats)
    }

    /// First pass: double-quoted string literal attribute values
    fn rewrite_quoted(&self, code: &str, stats: &mut RewriteStats) -> String {
        QUOTED_ATTRIBUTE_RE
            .replace_all(code, |caps: &Captures| {
                let raw = &caps[0];
                let classes = &caps[1];
                stats.attributes_matched += 1;

                if is_unsafe_class_list(classes) {
                    trace!("Skipping class list with arbitrary or interpolated content: {}", classes);
                    stats.attributes_skipped += 1;
                    return raw.to_string();
                }

                let rewrite = self.tokens.prefix_class_list(classes);
                stats.tokens_prefixed += rewrite.tokens_prefixed;
                stats.tokens_passed_through += rewrite.tokens_passed_through;

                let replacement = format!("className=\"{}\"", rewrite.classes);
                if replacement != raw {
                    stats.attributes_rewritten += 1;
                }
                replacement
            })
            .into_owned()
    }

    /// Second pass: brace-wrapped string literal attribute values
    ///
    /// The delimiter that opened the literal decides the output style, so
    /// double stays double, single stays single and backtick stays backtick.
    fn rewrite_braced(&self, code: &str, stats: &mut RewriteStats) -> String {
        BRACED_ATTRIBUTE_RE
            .replace_all(code, |caps: &Captures| {
                let raw = &caps[0];
                let classes = &caps[2];
                stats.attributes_matched += 1;

                if is_unsafe_class_list(classes) {
                    trace!("Skipping class list with arbitrary or interpolated content: {}", classes);
                    stats.attributes_skipped += 1;
                    return raw.to_string();
                }

                let style = match QuoteStyle::from_delimiter(&caps[1]) {
                    Some(style) => style,
                    None => {
                        stats.attributes_skipped += 1;
                        return raw.to_string();
                    }
                };

                let rewrite = self.tokens.prefix_class_list(classes);
                stats.tokens_prefixed += rewrite.tokens_prefixed;
                stats.tokens_passed_through += rewrite.tokens_passed_through;

                let delimiter = style.delimiter();
                let replacement = format!(
                    "className={{{}{}{}}}",
                    delimiter, rewrite.classes, delimiter
                );
                if replacement != raw {
                    stats.attributes_rewritten += 1;
                }
                replacement
            })
            .into_owned()
    }
}
