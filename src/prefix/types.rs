use serde::{Serialize, Deserialize};

/// Configuration for the class prefixer, supplied by the host build pipeline
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PrefixOptions {
    /// Prefix prepended to class tokens (must be non-empty)
    pub prefix: String,

    /// Path patterns (regular expressions); matching files pass through unchanged
    #[serde(default)]
    pub exclude: Vec<String>,
}

impl PrefixOptions {
    /// Create options with the given prefix and no exclusions
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            exclude: Vec::new(),
        }
    }

    /// Create options with the given prefix and exclusion patterns
    pub fn with_exclude(prefix: impl Into<String>, exclude: Vec<String>) -> Self {
        Self {
            prefix: prefix.into(),
            exclude,
        }
    }
}

/// Delimiter style of a brace-wrapped class attribute value
///
/// Rewritten occurrences must reproduce the delimiter they were written with,
/// so the style is carried from match to output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuoteStyle {
    /// `className={"..."}`
    Double,

    /// `className={'...'}`
    Single,

    /// `className={`...`}` (template literal without interpolation)
    Backtick,
}

impl QuoteStyle {
    /// Identify the style from the delimiter that opened the literal
    pub fn from_delimiter(delimiter: &str) -> Option<Self> {
        match delimiter {
            "\"" => Some(Self::Double),
            "'" => Some(Self::Single),
            "`" => Some(Self::Backtick),
            _ => None,
        }
    }

    /// The delimiter character this style is written with
    pub fn delimiter(self) -> char {
        match self {
            Self::Double => '"',
            Self::Single => '\'',
            Self::Backtick => '`',
        }
    }
}

/// Result of rewriting one class-list string
#[derive(Debug, Clone)]
pub struct ClassListRewrite {
    /// The rewritten class list, tokens joined with single spaces
    pub classes: String,

    /// Number of tokens that received the prefix
    pub tokens_prefixed: usize,

    /// Number of tokens the policy passed through unchanged
    pub tokens_passed_through: usize,
}

/// Statistics about a single transform invocation
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct RewriteStats {
    /// Number of class attribute occurrences matched by either pass
    pub attributes_matched: usize,

    /// Number of occurrences whose text was actually rewritten
    pub attributes_rewritten: usize,

    /// Number of occurrences skipped because they contain arbitrary values or interpolation
    pub attributes_skipped: usize,

    /// Number of class tokens that received the prefix
    pub tokens_prefixed: usize,

    /// Number of class tokens passed through unchanged by the token policy
    pub tokens_passed_through: usize,
}

impl RewriteStats {
    /// Create a new stats instance
    pub fn new() -> Self {
        Self::default()
    }

    /// Merge another stats instance into this one
    pub fn merge(&mut self, other: &Self) {
        self.attributes_matched += other.attributes_matched;
        self.attributes_rewritten += other.attributes_rewritten;
        self.attributes_skipped += other.attributes_skipped;
        self.tokens_prefixed += other.tokens_prefixed;
        self.tokens_passed_through += other.tokens_passed_through;
    }

    /// Whether the invocation changed the source text
    pub fn changed(&self) -> bool {
        self.attributes_rewritten > 0
    }
}

/// Result of transforming one source unit
#[derive(Debug, Clone)]
pub struct TransformOutput {
    /// The rewritten source text (equal to the input when nothing was rewritten)
    pub code: String,

    /// Statistics about the rewrite
    pub stats: RewriteStats,
}

impl TransformOutput {
    /// Wrap source text that was passed through without transformation
    pub fn unchanged(code: String) -> Self {
        Self {
            code,
            stats: RewriteStats::new(),
        }
    }
}
