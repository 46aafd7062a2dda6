use thiserror::Error;

/// Errors returned by [`CidTrie::insert`](crate::CidTrie::insert).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum InsertError {
    /// The key is empty or longer than the configured maximum.
    #[error("CID length {len} is outside 1..={max}")]
    KeyTooLong {
        /// Length of the rejected key
        len: usize,
        /// Configured maximum CID length
        max: usize,
    },

    /// The key is a prefix of, or has as a prefix, a registered CID.
    #[error("CID collides with a registered CID")]
    Collision,
}

/// Errors returned by [`CidTrie::lookup`](crate::CidTrie::lookup).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum LookupError {
    /// The buffer is longer than the configured maximum.
    #[error("lookup buffer length {len} exceeds {max}")]
    KeyTooLong {
        /// Length of the rejected buffer
        len: usize,
        /// Configured maximum CID length
        max: usize,
    },

    /// No registered CID is a prefix of the buffer.
    #[error("no registered CID prefixes the buffer")]
    NotFound,
}
