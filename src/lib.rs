//! # cid-trie
//!
//! A prefix-free byte trie for recognising connection IDs (CIDs) at the start
//! of a packet.
//!
//! Every registered CID is a path through a 256-way trie. Insertion rejects
//! any CID that is a prefix of, or has as a prefix, a CID already registered,
//! so a lookup can stop at the first terminal node it reaches: that node is
//! the only CID that can match.
//!
//! ## Example
//!
//! ```rust
//! use cid_trie::{CidTrie, InsertError, LookupError};
//!
//! let mut trie = CidTrie::new();
//! trie.insert(&[1, 2, 3, 4]).unwrap();
//! trie.insert(&[1, 2, 3, 6]).unwrap();
//! assert_eq!(trie.insert(&[1, 2, 3]), Err(InsertError::Collision));
//!
//! let packet = [1, 2, 3, 6, 0xde, 0xad, 0xbe, 0xef];
//! assert_eq!(trie.lookup(&packet), Ok(&[1u8, 2, 3, 6][..]));
//! assert_eq!(trie.lookup(&[9, 9, 9]), Err(LookupError::NotFound));
//! ```
//!
//! ## Concurrency
//!
//! [`CidTrie`] has no interior locking: `insert` takes `&mut self` and
//! `lookup` takes `&self`. Build the set first, then share `&CidTrie`
//! between readers; no lock is needed. Callers that register CIDs while
//! other threads look them up must serialize access themselves.

#![warn(missing_docs)]
#![warn(clippy::all)]

mod error;
mod node;
mod trie;

pub use error::{InsertError, LookupError};
pub use trie::CidTrie;

/// Default upper bound on CID length, in bytes.
pub const DEFAULT_MAX_CID_LEN: usize = 20;

/// Configuration for a [`CidTrie`].
///
/// ```rust
/// use cid_trie::{CidTrie, Config, InsertError};
///
/// let mut trie = CidTrie::with_config(Config::with_max_len(8));
/// assert_eq!(trie.insert(&[0; 9]), Err(InsertError::KeyTooLong { len: 9, max: 8 }));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub struct Config {
    /// Longest CID accepted by `insert`, and longest buffer accepted by `lookup`
    pub max_len: usize,
}

impl Config {
    /// Configuration with the given maximum CID length.
    pub fn with_max_len(max_len: usize) -> Self {
        Self { max_len }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            max_len: DEFAULT_MAX_CID_LEN,
        }
    }
}
