// regexec.rs - NFA engine.
// Lockstep frontier simulation: every active state advances on the same
// input byte, so matching never backtracks and runs in
// O(text length x state count).

use log::trace;
use memchr::{memchr, memchr2, memchr3};

use crate::regint::*;

/// Decide whether `text` is matched by `nfa`.
///
/// Unless the pattern was begin-anchored, a match may start at any
/// offset. Scratch space is allocated per call, so the same automaton can
/// be matched from several threads at once.
///
/// # Examples
///
/// ```
/// use lockstep::regcomp::compile;
/// use lockstep::regexec::matches;
/// use lockstep::regparse::parse;
///
/// let nfa = compile(parse(b"a|b").unwrap());
/// assert!(matches(&nfa, b"xbx"));
/// assert!(!matches(&nfa, b"xyz"));
/// ```
pub fn matches(nfa: &Nfa, text: &[u8]) -> bool {
    let text = match find_candidate(nfa.prefilter(), text) {
        Some(at) => &text[at..],
        None => return false,
    };
    Engine::new(nfa).execute(text)
}

/// Like [`matches`], but never consults the prefilter.
pub fn matches_unfiltered(nfa: &Nfa, text: &[u8]) -> bool {
    Engine::new(nfa).execute(text)
}

/// Offset of the first byte a match could begin at. `None` means no match
/// is possible.
fn find_candidate(prefilter: Prefilter, text: &[u8]) -> Option<usize> {
    let found = match prefilter {
        Prefilter::None => return Some(0),
        Prefilter::One(a) => memchr(a, text),
        Prefilter::Two(a, b) => memchr2(a, b, text),
        Prefilter::Three(a, b, c) => memchr3(a, b, c, text),
    };
    if let Some(at) = found {
        if at > 0 {
            trace!("prefilter skipped {} bytes", at);
        }
    }
    found
}

/// Call-local simulation state.
struct Engine<'n> {
    nfa: &'n Nfa,
    current: Vec<StateId>,
    next: Vec<StateId>,
    /// Step counter; 0 never appears in the stamps below.
    step: usize,
    /// Last step at which each state was inserted into `next`.
    step_stamps: Vec<usize>,
    /// Last step at which each state joined the epsilon closure of `current`.
    closure_stamps: Vec<usize>,
}

impl<'n> Engine<'n> {
    fn new(nfa: &'n Nfa) -> Self {
        let n = nfa.len();
        Engine {
            nfa,
            current: Vec::with_capacity(n),
            next: Vec::with_capacity(n),
            step: 0,
            step_stamps: vec![0; n],
            closure_stamps: vec![0; n],
        }
    }

    fn execute(&mut self, text: &[u8]) -> bool {
        if self.nfa.is_empty() {
            return false;
        }

        self.next.push(self.nfa.start());
        let mut at = 0;

        loop {
            std::mem::swap(&mut self.current, &mut self.next);
            self.next.clear();
            self.step += 1;

            self.close_current();

            if self.current.iter().any(|&s| self.nfa.state(s).is_accepting()) {
                return true;
            }
            if self.current.is_empty() {
                return false;
            }

            let symbol = match text.get(at) {
                Some(&b) => Symbol::Byte(b),
                None if at == text.len() => Symbol::EndOfInput,
                None => return false,
            };
            self.advance(symbol);
            at += 1;
        }
    }

    /// Grow `current` to its epsilon closure. States appended during the
    /// pass are visited by the same pass; the closure stamp keeps each
    /// state from being appended twice, which bounds the pass even when
    /// epsilon edges form a cycle.
    fn close_current(&mut self) {
        let nfa = self.nfa;
        let step = self.step;
        for &s in &self.current {
            self.closure_stamps[s as usize] = step;
        }

        let mut i = 0;
        while i < self.current.len() {
            let state = nfa.state(self.current[i]);
            for &t in state.targets(Symbol::Epsilon) {
                if self.closure_stamps[t as usize] != step {
                    self.closure_stamps[t as usize] = step;
                    self.current.push(t);
                }
            }
            i += 1;
        }
    }

    /// Follow `symbol` from every state of the closed frontier into `next`.
    fn advance(&mut self, symbol: Symbol) {
        let nfa = self.nfa;
        let step = self.step;
        for &s in &self.current {
            for &t in nfa.state(s).targets(symbol) {
                if self.step_stamps[t as usize] != step {
                    self.step_stamps[t as usize] = step;
                    self.next.push(t);
                }
            }
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
