// regparse_types.rs - Parse tree types.
// AST node enum, anchoring flags, and the node arena produced by the parser.

use bitflags::bitflags;

/// Index of a node in its [`ParseTree`] arena.
pub type NodeId = u32;

/// A node of the regex abstract syntax.
///
/// Operands are referenced by index into the owning tree's arena and are
/// always stored before the node that refers to them.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Node {
    /// `l|r`
    Alternation(NodeId, NodeId),
    /// `lr`
    Concatenation(NodeId, NodeId),
    /// `x+`
    Repetition(NodeId),
    /// `x*`
    OptionalRepetition(NodeId),
    /// `x?`
    Optional(NodeId),
    /// A single literal byte from `[A-Za-z0-9_]`.
    Atom(u8),
}

impl Node {
    /// Iterate over the operand indices of this node, left to right.
    pub fn children(&self) -> impl Iterator<Item = NodeId> {
        let (a, b) = match *self {
            Node::Alternation(l, r) | Node::Concatenation(l, r) => (Some(l), Some(r)),
            Node::Repetition(x) | Node::OptionalRepetition(x) | Node::Optional(x) => {
                (Some(x), None)
            }
            Node::Atom(_) => (None, None),
        };
        a.into_iter().chain(b)
    }
}

/// Returns true for bytes accepted as an atom.
#[inline]
pub fn is_atom_byte(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b == b'_'
}

bitflags! {
    /// Anchoring flags recorded by the parser.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct ParseFlags: u8 {
        /// The pattern started with `^`.
        const BEGIN_ANCHORED = 0x1;
        /// The pattern ended with `$`.
        const END_ANCHORED = 0x2;
    }
}

/// The parsed form of a pattern: an append-only node arena plus flags.
///
/// Trees are only built by [`crate::regparse::parse`]; the last node in
/// the arena is the root.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ParseTree {
    flags: ParseFlags,
    nodes: Vec<Node>,
}

impl ParseTree {
    pub(crate) fn new() -> Self {
        ParseTree::default()
    }

    /// Append a node and return its index.
    pub(crate) fn push(&mut self, node: Node) -> NodeId {
        debug_assert!(node.children().all(|c| (c as usize) < self.nodes.len()));
        let id = self.nodes.len() as NodeId;
        self.nodes.push(node);
        id
    }

    pub(crate) fn set_flags(&mut self, flags: ParseFlags) {
        self.flags |= flags;
    }

    /// Index of the most recently appended node.
    pub(crate) fn last(&self) -> Option<NodeId> {
        self.nodes.len().checked_sub(1).map(|i| i as NodeId)
    }

    /// All nodes in arena order.
    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    /// The node at `id`.
    ///
    /// # Panics
    ///
    /// Panics if `id` is out of range.
    pub fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id as usize]
    }

    /// The root node, or `None` for an empty pattern.
    pub fn root(&self) -> Option<NodeId> {
        self.last()
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn flags(&self) -> ParseFlags {
        self.flags
    }

    pub fn is_begin_anchored(&self) -> bool {
        self.flags.contains(ParseFlags::BEGIN_ANCHORED)
    }

    pub fn is_end_anchored(&self) -> bool {
        self.flags.contains(ParseFlags::END_ANCHORED)
    }
}
