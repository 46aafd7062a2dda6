//! The prefix-free CID trie.

use crate::error::{InsertError, LookupError};
use crate::node::Node;
use crate::Config;

/// A prefix-free set of byte-string CIDs with first-match prefix lookup.
///
/// No registered CID is ever a prefix of another, so at most one CID can
/// prefix any given buffer. [`lookup`](Self::lookup) therefore stops at the
/// first terminal node it reaches.
pub struct CidTrie {
    root: Node,
    config: Config,
    /// Registered CIDs
    count: usize,
    /// Allocated nodes, excluding the root
    nodes: usize,
}

impl CidTrie {
    /// Create an empty trie accepting CIDs of up to [`DEFAULT_MAX_CID_LEN`](crate::DEFAULT_MAX_CID_LEN) bytes.
    pub fn new() -> Self {
        Self::with_config(Config::default())
    }

    /// Create an empty trie with the given configuration.
    pub fn with_config(config: Config) -> Self {
        Self {
            root: Node::new(),
            config,
            count: 0,
            nodes: 0,
        }
    }

    /// The configuration this trie was built with.
    #[inline]
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Longest accepted CID, in bytes.
    #[inline]
    pub fn max_len(&self) -> usize {
        self.config.max_len
    }

    /// Number of registered CIDs.
    #[inline]
    pub fn len(&self) -> usize {
        self.count
    }

    /// Check if no CID is registered.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Number of allocated nodes, not counting the root.
    #[inline]
    pub fn node_count(&self) -> usize {
        self.nodes
    }

    #[cfg(test)]
    pub(crate) fn root(&self) -> &Node {
        &self.root
    }

    /// Approximate heap bytes held by the trie.
    pub fn memory_usage(&self) -> usize {
        // The root lives inline; only its child table is on the heap.
        std::mem::size_of::<[Option<Box<Node>>; 256]>() + self.nodes * Node::HEAP_SIZE
    }

    /// Register `key`.
    ///
    /// Fails with [`InsertError::Collision`] if `key` is already registered,
    /// extends a registered CID, or is a prefix of one. A rejected key leaves
    /// the trie untouched.
    pub fn insert(&mut self, key: &[u8]) -> Result<(), InsertError> {
        if key.is_empty() || key.len() > self.config.max_len {
            return Err(InsertError::KeyTooLong {
                len: key.len(),
                max: self.config.max_len,
            });
        }

        let mut created = 0usize;
        let mut node = &mut self.root;
        for &byte in key {
            let (child, is_new) = node.child_or_insert(byte);
            if child.is_terminal() {
                // Only pre-existing nodes can be terminal, so nothing was allocated.
                debug_assert_eq!(created, 0);
                #[cfg(feature = "tracing")]
                tracing::debug!(key_len = key.len(), "CID extends a registered CID");
                return Err(InsertError::Collision);
            }
            created += usize::from(is_new);
            node = child;
        }

        if node.has_children() {
            // A node with children existed before this call, so again nothing was allocated.
            debug_assert_eq!(created, 0);
            #[cfg(feature = "tracing")]
            tracing::debug!(key_len = key.len(), "CID is a prefix of a registered CID");
            return Err(InsertError::Collision);
        }

        node.set_terminal();
        self.nodes += created;
        self.count += 1;

        #[cfg(feature = "tracing")]
        tracing::trace!(key_len = key.len(), new_nodes = created, "registered CID");

        Ok(())
    }

    /// Length of the registered CID that prefixes `data`.
    pub fn match_len(&self, data: &[u8]) -> Result<usize, LookupError> {
        if data.len() > self.config.max_len {
            return Err(LookupError::KeyTooLong {
                len: data.len(),
                max: self.config.max_len,
            });
        }

        let mut node = &self.root;
        for (i, &byte) in data.iter().enumerate() {
            node = node.child(byte).ok_or(LookupError::NotFound)?;
            if node.is_terminal() {
                return Ok(i + 1);
            }
        }
        Err(LookupError::NotFound)
    }

    /// Return the registered CID at the start of `data`.
    ///
    /// `data` may carry trailing bytes after the CID; the returned slice
    /// borrows the matched prefix of `data`.
    pub fn lookup<'a>(&self, data: &'a [u8]) -> Result<&'a [u8], LookupError> {
        let len = self.match_len(data)?;
        Ok(&data[..len])
    }

    /// Whether `key` itself is registered.
    pub fn contains(&self, key: &[u8]) -> bool {
        matches!(self.match_len(key), Ok(len) if len == key.len())
    }
}

impl Default for CidTrie {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for CidTrie {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CidTrie")
            .field("len", &self.count)
            .field("nodes", &self.nodes)
            .field("max_len", &self.config.max_len)
            .finish()
    }
}
