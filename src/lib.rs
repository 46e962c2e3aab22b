//! # art-index
//!
//! An in-memory Adaptive Radix Tree (ART) index: an ordered mapping from
//! byte-string keys to byte-string values.
//!
//! Every inner node adapts its fan-out representation to the number of
//! children it actually holds, switching between four layouts (4, 16, 48 and
//! 256 slots) as children accumulate. Runs of key bytes shared by all
//! descendants are collapsed into a per-node compressed prefix, so lookups
//! touch one node per divergence point rather than one node per byte.
//!
//! ## Quick start
//!
//! ```rust
//! use art_index::AdaptiveRadixTree;
//!
//! let mut tree = AdaptiveRadixTree::new();
//!
//! tree.insert("hello", "world");
//! tree.insert(b"raw\x00bytes".as_slice(), [1, 2, 3]);
//!
//! assert_eq!(tree.get("hello"), Some(b"world".as_slice()));
//! assert_eq!(tree.get("missing"), None);
//! ```
//!
//! Keys and values are arbitrary byte sequences; interior `0x00` bytes and
//! the empty key are both fine. Re-inserting a key replaces its value and
//! hands the previous one back.
//!
//! The tree is single-threaded: no operation suspends, and callers that
//! share a tree across threads must serialize access externally.

mod mapping;
mod node;
mod prefix;
pub mod stats;
pub mod tree;

pub use prefix::MAX_PREFIX_LEN;
pub use stats::{NodeStats, TreeStats};
pub use tree::AdaptiveRadixTree;
