//! # lockstep
//!
//! A minimal regular-expression engine: a recursive-descent parser, a
//! Thompson-construction compiler, and a non-backtracking NFA engine that
//! advances every active state in lockstep over the input.
//!
//! Supported syntax: literal atoms `[A-Za-z0-9_]`, grouping `( )`,
//! alternation `|`, the quantifiers `?`, `*` and `+`, and the anchors `^`
//! (first byte only) and `$` (last byte only). Unless anchored, a pattern
//! matches anywhere in the subject.
//!
//! ## Quick Start
//!
//! ```rust
//! use lockstep::prelude::*;
//!
//! let re = Regex::new("^(ab)+$").unwrap();
//! assert!(re.is_match("ababab"));
//! assert!(!re.is_match("aba"));
//! ```
//!
//! ## Pipeline API
//!
//! Each stage is also available on its own:
//!
//! ```rust
//! use lockstep::regparse::parse;
//! use lockstep::regcomp::compile;
//! use lockstep::regexec::matches;
//!
//! let tree = parse(b"a|b").unwrap();
//! let nfa = compile(tree);
//! assert!(matches(&nfa, b"b"));
//! assert!(!matches(&nfa, b"c"));
//!
//! // Human-readable dump of every state and transition.
//! println!("{}", nfa);
//! ```
//!
//! ## Module Structure
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`regparse`] | Pattern parser |
//! | [`regparse_types`] | Parse tree nodes and flags |
//! | [`regcomp`] | Parse tree to NFA compiler |
//! | [`regexec`] | NFA simulation |
//! | [`regint`] | Automaton types and constants |
//! | [`error`] | Error types |
//! | [`api`] | `Regex` and `RegexBuilder` |

pub mod api;
pub mod error;
pub mod prelude;
pub mod regcomp;
pub mod regexec;
pub mod regint;
pub mod regparse;
pub mod regparse_types;

pub use regcomp::compile;
pub use regexec::matches;
pub use regparse::parse;
