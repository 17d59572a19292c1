// prelude.rs - Convenient re-exports for the idiomatic API.
//
//! # Prelude
//!
//! ```
//! use lockstep::prelude::*;
//!
//! let re = Regex::new("^(ab)+$").unwrap();
//! assert!(re.is_match("abab"));
//! ```

pub use crate::api::{Regex, RegexBuilder};
pub use crate::error::{RegexError, SyntaxErrorKind};
