//! Trie node with direct 256-way child indexing.

/// A single trie node.
///
/// Each node owns up to 256 children, one per byte value. A node is
/// `terminal` when a registered CID ends at it.
pub(crate) struct Node {
    /// Child nodes (direct indexing by byte). Boxed so the node itself stays small.
    children: Box<[Option<Box<Node>>; 256]>,
    /// Number of occupied child slots.
    num_children: u16,
    terminal: bool,
}

impl Node {
    pub(crate) fn new() -> Self {
        Self {
            children: Box::new(std::array::from_fn(|_| None)),
            num_children: 0,
            terminal: false,
        }
    }

    #[inline]
    pub(crate) fn child(&self, byte: u8) -> Option<&Node> {
        self.children[byte as usize].as_deref()
    }

    /// Return the child for `byte`, creating it if the slot is empty.
    ///
    /// The second element is `true` when a new node was allocated.
    pub(crate) fn child_or_insert(&mut self, byte: u8) -> (&mut Node, bool) {
        let slot = &mut self.children[byte as usize];
        let created = slot.is_none();
        if created {
            self.num_children += 1;
        }
        (slot.get_or_insert_with(|| Box::new(Node::new())), created)
    }

    #[cfg(test)]
    pub(crate) fn children(&self) -> impl Iterator<Item = &Node> {
        self.children.iter().filter_map(|c| c.as_deref())
    }

    #[inline]
    pub(crate) fn has_children(&self) -> bool {
        self.num_children != 0
    }

    #[inline]
    pub(crate) fn is_terminal(&self) -> bool {
        self.terminal
    }

    #[inline]
    pub(crate) fn set_terminal(&mut self) {
        debug_assert!(!self.terminal);
        debug_assert!(!self.has_children());
        self.terminal = true;
    }

    /// Heap bytes owned by a single node (the child table plus the box
    /// holding the node itself).
    pub(crate) const HEAP_SIZE: usize =
        std::mem::size_of::<[Option<Box<Node>>; 256]>() + std::mem::size_of::<Node>();
}
