// regint.rs - Internal automaton types.
// Config constants, Symbol, Transition, State, Nfa, Prefilter, and the
// human-readable automaton dump.

use std::fmt;

use bitflags::bitflags;
use smallvec::{smallvec, SmallVec};

// === Config Constants ===
pub const DEFAULT_PARSE_DEPTH_LIMIT: u32 = 256;

// === Internal Constants ===
pub const CHAR_MAP_SIZE: usize = 256;

/// Index of a state in its [`Nfa`] arena. The index is the state's identity.
pub type StateId = u32;

/// The input symbol a transition consumes.
///
/// Ordered so that byte transitions sort first and epsilon last.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Symbol {
    /// A literal input byte.
    Byte(u8),
    /// The sentinel seen once, after the last input byte.
    EndOfInput,
    /// No input consumed.
    Epsilon,
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Symbol::Byte(b) => fmt_byte(f, *b),
            Symbol::EndOfInput => write!(f, "$end"),
            Symbol::Epsilon => write!(f, "ε"),
        }
    }
}

fn fmt_byte(f: &mut fmt::Formatter<'_>, b: u8) -> fmt::Result {
    if b.is_ascii_graphic() {
        write!(f, "'{}'", b as char)
    } else {
        write!(f, "'\\x{:02x}'", b)
    }
}

/// All destinations reachable from one state on one symbol.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Transition {
    symbol: Symbol,
    targets: SmallVec<[StateId; 2]>,
}

impl Transition {
    pub fn symbol(&self) -> Symbol {
        self.symbol
    }

    /// Destination states, in insertion order and without duplicates.
    pub fn targets(&self) -> &[StateId] {
        &self.targets
    }
}

bitflags! {
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct StateFlags: u8 {
        const ACCEPTING = 0x1;
    }
}

/// A single automaton state: flags plus at most one transition per symbol.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct State {
    flags: StateFlags,
    /// Sorted by symbol.
    transitions: SmallVec<[Transition; 2]>,
}

impl State {
    pub fn flags(&self) -> StateFlags {
        self.flags
    }

    #[inline]
    pub fn is_accepting(&self) -> bool {
        self.flags.contains(StateFlags::ACCEPTING)
    }

    pub fn transitions(&self) -> &[Transition] {
        &self.transitions
    }

    /// The transition on `symbol`, if any.
    #[inline]
    pub fn find(&self, symbol: Symbol) -> Option<&Transition> {
        self.transitions
            .binary_search_by(|t| t.symbol.cmp(&symbol))
            .ok()
            .map(|i| &self.transitions[i])
    }

    /// Destinations on `symbol`; empty if there is no such transition.
    #[inline]
    pub fn targets(&self, symbol: Symbol) -> &[StateId] {
        match self.find(symbol) {
            Some(t) => t.targets(),
            None => &[],
        }
    }

    fn add(&mut self, symbol: Symbol, target: StateId) {
        match self.transitions.binary_search_by(|t| t.symbol.cmp(&symbol)) {
            Ok(i) => {
                let targets = &mut self.transitions[i].targets;
                if !targets.contains(&target) {
                    targets.push(target);
                }
            }
            Err(i) => self.transitions.insert(
                i,
                Transition {
                    symbol,
                    targets: smallvec![target],
                },
            ),
        }
    }
}

/// Bytes that every match must begin with, for unanchored searches.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Prefilter {
    #[default]
    None,
    One(u8),
    Two(u8, u8),
    Three(u8, u8, u8),
}

/// A compiled automaton: a state arena with a single start state.
///
/// An `Nfa` is immutable once compiled. Matching keeps its scratch data
/// outside of the automaton, so one `Nfa` can be shared between threads.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Nfa {
    states: Vec<State>,
    start: StateId,
    prefilter: Prefilter,
}

impl Nfa {
    pub(crate) fn new() -> Self {
        Nfa::default()
    }

    pub(crate) fn add_state(&mut self, flags: StateFlags) -> StateId {
        let id = self.states.len() as StateId;
        self.states.push(State {
            flags,
            transitions: SmallVec::new(),
        });
        id
    }

    pub(crate) fn add_transition(&mut self, from: StateId, symbol: Symbol, to: StateId) {
        debug_assert!((to as usize) < self.states.len());
        self.states[from as usize].add(symbol, to);
    }

    pub(crate) fn set_start(&mut self, start: StateId) {
        self.start = start;
    }

    pub(crate) fn set_prefilter(&mut self, prefilter: Prefilter) {
        self.prefilter = prefilter;
    }

    pub fn start(&self) -> StateId {
        self.start
    }

    pub fn prefilter(&self) -> Prefilter {
        self.prefilter
    }

    pub fn states(&self) -> &[State] {
        &self.states
    }

    /// The state at `id`.
    ///
    /// # Panics
    ///
    /// Panics if `id` is out of range.
    #[inline]
    pub fn state(&self, id: StateId) -> &State {
        &self.states[id as usize]
    }

    pub fn len(&self) -> usize {
        self.states.len()
    }

    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }

    /// Iterate over the ids of accepting states.
    pub fn accepting_states(&self) -> impl Iterator<Item = StateId> + '_ {
        self.states
            .iter()
            .enumerate()
            .filter(|(_, s)| s.is_accepting())
            .map(|(i, _)| i as StateId)
    }
}

// ============================================================================
// Debug dump
// ============================================================================

fn fmt_targets(f: &mut fmt::Formatter<'_>, targets: &[StateId]) -> fmt::Result {
    write!(f, " ->")?;
    for t in targets {
        write!(f, " {}", t)?;
    }
    writeln!(f)
}

/// Lists every state with its transitions. Runs of consecutive bytes with
/// identical destinations are printed as one range.
impl fmt::Display for Nfa {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "start: {}", self.start)?;
        match self.prefilter {
            Prefilter::None => {}
            Prefilter::One(a) => writeln!(f, "prefilter: {}", Symbol::Byte(a))?,
            Prefilter::Two(a, b) => {
                writeln!(f, "prefilter: {} {}", Symbol::Byte(a), Symbol::Byte(b))?
            }
            Prefilter::Three(a, b, c) => writeln!(
                f,
                "prefilter: {} {} {}",
                Symbol::Byte(a),
                Symbol::Byte(b),
                Symbol::Byte(c)
            )?,
        }

        for (id, state) in self.states.iter().enumerate() {
            if state.is_accepting() {
                writeln!(f, "{}: accepting", id)?;
            } else {
                writeln!(f, "{}:", id)?;
            }

            let transitions = state.transitions();
            let mut i = 0;
            while i < transitions.len() {
                let t = &transitions[i];
                let lo = match t.symbol {
                    Symbol::Byte(b) => b,
                    other => {
                        write!(f, "  {}", other)?;
                        fmt_targets(f, t.targets())?;
                        i += 1;
                        continue;
                    }
                };

                let mut hi = lo;
                let mut j = i + 1;
                while let Some(next) = transitions.get(j) {
                    match next.symbol {
                        Symbol::Byte(b) if hi < u8::MAX && b == hi + 1 && next.targets == t.targets => {
                            hi = b;
                            j += 1;
                        }
                        _ => break,
                    }
                }

                if lo == hi {
                    write!(f, "  {}", Symbol::Byte(lo))?;
                } else {
                    write!(f, "  [{}-{}]", Symbol::Byte(lo), Symbol::Byte(hi))?;
                }
                fmt_targets(f, t.targets())?;
                i = j;
            }
        }

        Ok(())
    }
}
