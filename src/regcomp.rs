// regcomp.rs - NFA compiler.
// Lowers a ParseTree into an Nfa with Thompson's construction, then wires
// up the unanchored scan state, the final accept state and the prefilter.

use log::{debug, trace};

use crate::regint::*;
use crate::regparse_types::*;

/// Start and accept states of a partially built sub-automaton.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct Fragment {
    start: StateId,
    accept: StateId,
}

/// Compile a parsed pattern into an automaton.
///
/// Every accepting path ends in a single dedicated accept state. An empty
/// tree compiles to an automaton that accepts only the empty subject.
///
/// # Examples
///
/// ```
/// use lockstep::regcomp::compile;
/// use lockstep::regexec::matches;
/// use lockstep::regparse::parse;
///
/// let nfa = compile(parse(b"^(ab)+$").unwrap());
/// assert!(matches(&nfa, b"abab"));
/// assert!(!matches(&nfa, b"aba"));
/// ```
pub fn compile(tree: ParseTree) -> Nfa {
    let mut compiler = Compiler {
        nfa: Nfa::new(),
        stack: Vec::new(),
    };

    if tree.is_empty() {
        trace!("empty pattern, compiling to an end-of-input matcher");
        compiler.compile_empty();
    } else {
        compiler.compile_tree(&tree);
    }

    let nfa = compiler.nfa;
    debug!(
        "compiled {} nodes into {} states (start {}, prefilter {:?})",
        tree.len(),
        nfa.len(),
        nfa.start(),
        nfa.prefilter()
    );
    nfa
}

struct Compiler {
    nfa: Nfa,
    /// Fragments of the nodes lowered so far, tagged with their node id.
    stack: Vec<(NodeId, Fragment)>,
}

impl Compiler {
    fn new_state(&mut self) -> StateId {
        self.nfa.add_state(StateFlags::empty())
    }

    fn epsilon(&mut self, from: StateId, to: StateId) {
        self.nfa.add_transition(from, Symbol::Epsilon, to);
    }

    fn push(&mut self, node: NodeId, start: StateId, accept: StateId) {
        self.stack.push((node, Fragment { start, accept }));
    }

    fn pop(&mut self, node: NodeId) -> Fragment {
        let (id, fragment) = self
            .stack
            .pop()
            .expect("operand lowered before its parent");
        debug_assert_eq!(id, node);
        fragment
    }

    fn compile_empty(&mut self) {
        let start = self.new_state();
        let accept = self.nfa.add_state(StateFlags::ACCEPTING);
        self.nfa.add_transition(start, Symbol::EndOfInput, accept);
        self.nfa.set_start(start);
    }

    fn compile_tree(&mut self, tree: &ParseTree) {
        // The arena is in post-order, so a forward walk lowers every operand
        // before the node that uses it.
        for (id, node) in tree.nodes().iter().enumerate() {
            self.emit_node(id as NodeId, node);
        }

        let root_id = tree.root().unwrap_or_default();
        let root = self.pop(root_id);
        debug_assert!(self.stack.is_empty());

        let start = if tree.is_begin_anchored() {
            root.start
        } else {
            // Loops on every byte so that a match may begin at any offset.
            let scan = self.new_state();
            for b in 0..CHAR_MAP_SIZE {
                self.nfa.add_transition(scan, Symbol::Byte(b as u8), scan);
            }
            self.epsilon(scan, root.start);
            scan
        };
        self.nfa.set_start(start);

        let accept = self.nfa.add_state(StateFlags::ACCEPTING);
        if tree.is_end_anchored() {
            self.nfa
                .add_transition(root.accept, Symbol::EndOfInput, accept);
        } else {
            self.epsilon(root.accept, accept);
        }

        if !tree.is_begin_anchored() {
            let prefilter = first_bytes_prefilter(&self.nfa, root);
            self.nfa.set_prefilter(prefilter);
        }
    }

    fn emit_node(&mut self, id: NodeId, node: &Node) {
        match *node {
            Node::Atom(c) => {
                let start = self.new_state();
                let accept = self.new_state();
                self.nfa.add_transition(start, Symbol::Byte(c), accept);
                self.push(id, start, accept);
            }

            Node::Concatenation(l, r) => {
                let right = self.pop(r);
                let left = self.pop(l);
                let start = self.new_state();
                let accept = self.new_state();
                self.epsilon(start, left.start);
                self.epsilon(left.accept, right.start);
                self.epsilon(right.accept, accept);
                self.push(id, start, accept);
            }

            Node::Alternation(l, r) => {
                let right = self.pop(r);
                let left = self.pop(l);
                let start = self.new_state();
                let accept = self.new_state();
                self.epsilon(start, left.start);
                self.epsilon(start, right.start);
                self.epsilon(left.accept, accept);
                self.epsilon(right.accept, accept);
                self.push(id, start, accept);
            }

            Node::Optional(x) => {
                let inner = self.pop(x);
                let start = self.new_state();
                let accept = self.new_state();
                self.epsilon(start, inner.start);
                self.epsilon(start, accept);
                self.epsilon(inner.accept, accept);
                self.push(id, start, accept);
            }

            Node::OptionalRepetition(x) => {
                let inner = self.pop(x);
                let start = self.new_state();
                let accept = self.new_state();
                self.epsilon(start, inner.start);
                self.epsilon(start, accept);
                self.epsilon(inner.accept, start);
                self.epsilon(inner.accept, accept);
                self.push(id, start, accept);
            }

            Node::Repetition(x) => {
                let inner = self.pop(x);
                let start = self.new_state();
                let accept = self.new_state();
                self.epsilon(start, inner.start);
                self.epsilon(inner.accept, inner.start);
                self.epsilon(inner.accept, accept);
                self.push(id, start, accept);
            }
        }
    }
}

/// Collect the bytes a match of `root` can begin with. Gives up when the
/// fragment can match the empty string or starts with more than three
/// distinct bytes.
fn first_bytes_prefilter(nfa: &Nfa, root: Fragment) -> Prefilter {
    let mut visited = vec![false; nfa.len()];
    let mut pending = vec![root.start];
    visited[root.start as usize] = true;

    let mut first = [false; CHAR_MAP_SIZE];
    while let Some(id) = pending.pop() {
        if id == root.accept {
            return Prefilter::None;
        }
        for t in nfa.state(id).transitions() {
            match t.symbol() {
                Symbol::Byte(b) => first[b as usize] = true,
                Symbol::Epsilon => {
                    for &next in t.targets() {
                        if !visited[next as usize] {
                            visited[next as usize] = true;
                            pending.push(next);
                        }
                    }
                }
                Symbol::EndOfInput => {}
            }
        }
    }

    let bytes: Vec<u8> = (0..CHAR_MAP_SIZE)
        .filter(|&b| first[b])
        .map(|b| b as u8)
        .collect();
    match bytes[..] {
        [a] => Prefilter::One(a),
        [a, b] => Prefilter::Two(a, b),
        [a, b, c] => Prefilter::Three(a, b, c),
        _ => Prefilter::None,
    }
}

// ============================================================================
// Tests
// ============================================================================
