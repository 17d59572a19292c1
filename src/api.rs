// api.rs - Idiomatic Rust API for lockstep.
//
// Wraps the parse / compile / match pipeline with Rust-native types:
// Regex and RegexBuilder.

use std::str::FromStr;

use crate::error::RegexError;
use crate::regcomp::compile;
use crate::regexec::matches;
use crate::regint::{Nfa, Prefilter, DEFAULT_PARSE_DEPTH_LIMIT};
use crate::regparse::parse_with_depth_limit;

/// A compiled regular expression.
///
/// Matching does not mutate the `Regex`, so it can be shared freely
/// between threads.
///
/// # Examples
///
/// ```
/// use lockstep::api::Regex;
///
/// let re = Regex::new("(ab)+c").unwrap();
/// assert!(re.is_match("xxababc"));
/// assert!(!re.is_match("xxabac"));
/// ```
#[derive(Clone)]
pub struct Regex {
    pattern: Box<[u8]>,
    nfa: Nfa,
}

impl Regex {
    /// Compile a pattern using default options.
    pub fn new(pattern: &str) -> Result<Regex, RegexError> {
        Self::new_bytes(pattern.as_bytes())
    }

    /// Compile a pattern from raw bytes using default options.
    pub fn new_bytes(pattern: &[u8]) -> Result<Regex, RegexError> {
        RegexBuilder::new_bytes(pattern).build()
    }

    /// Create a [`RegexBuilder`] for fine-grained control over compilation.
    pub fn builder(pattern: &str) -> RegexBuilder {
        RegexBuilder::new(pattern)
    }

    /// Check whether `text` matches the pattern.
    pub fn is_match(&self, text: &str) -> bool {
        self.is_match_bytes(text.as_bytes())
    }

    /// Check whether `text` (as bytes) matches the pattern.
    pub fn is_match_bytes(&self, text: &[u8]) -> bool {
        matches(&self.nfa, text)
    }

    /// The pattern this regex was compiled from.
    pub fn as_bytes(&self) -> &[u8] {
        &self.pattern
    }

    /// Access the compiled automaton.
    pub fn as_nfa(&self) -> &Nfa {
        &self.nfa
    }
}

impl FromStr for Regex {
    type Err = RegexError;

    fn from_str(pattern: &str) -> Result<Regex, RegexError> {
        Regex::new(pattern)
    }
}

impl std::fmt::Debug for Regex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Regex")
            .field("pattern", &String::from_utf8_lossy(&self.pattern))
            .field("states", &self.nfa.len())
            .finish_non_exhaustive()
    }
}

// === RegexBuilder ===

/// Builder for compiling a [`Regex`] with custom options.
///
/// # Examples
///
/// ```
/// use lockstep::api::Regex;
///
/// let re = Regex::builder("^(a(b)?)+$")
///     .parse_depth_limit(2)
///     .prefilter(false)
///     .build()
///     .unwrap();
/// assert!(re.is_match("abaab"));
/// ```
#[derive(Clone, Debug)]
pub struct RegexBuilder {
    pattern: Vec<u8>,
    parse_depth_limit: u32,
    prefilter: bool,
}

impl RegexBuilder {
    /// Create a new builder for the given pattern.
    pub fn new(pattern: &str) -> Self {
        Self::new_bytes(pattern.as_bytes())
    }

    /// Create a new builder for a pattern given as raw bytes.
    pub fn new_bytes(pattern: &[u8]) -> Self {
        RegexBuilder {
            pattern: pattern.to_vec(),
            parse_depth_limit: DEFAULT_PARSE_DEPTH_LIMIT,
            prefilter: true,
        }
    }

    /// Maximum nesting of groups. `0` restores the default,
    /// [`DEFAULT_PARSE_DEPTH_LIMIT`].
    pub fn parse_depth_limit(mut self, limit: u32) -> Self {
        self.parse_depth_limit = if limit == 0 {
            DEFAULT_PARSE_DEPTH_LIMIT
        } else {
            limit
        };
        self
    }

    /// Enable or disable the first-byte prefilter for unanchored patterns.
    /// Results are the same either way.
    pub fn prefilter(mut self, yes: bool) -> Self {
        self.prefilter = yes;
        self
    }

    /// Compile the pattern into a [`Regex`].
    pub fn build(self) -> Result<Regex, RegexError> {
        let tree = parse_with_depth_limit(&self.pattern, self.parse_depth_limit)?;
        let mut nfa = compile(tree);
        if !self.prefilter {
            nfa.set_prefilter(Prefilter::None);
        }
        Ok(Regex {
            pattern: self.pattern.into_boxed_slice(),
            nfa,
        })
    }
}
