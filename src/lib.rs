//! # dictc - Binary Trie Dictionary Compiler
//!
//! dictc compiles plain-text word/frequency lists into compact binary trie
//! dictionaries for fast prefix lookup in constrained runtimes, such as
//! mobile input-method dictionaries.
//!
//! ## Architecture
//!
//! - [`dict::parser`] - Word-list text parsing (separators, clamping, caps)
//! - [`dict::builder`] - Arena trie with breadth-first byte-offset layout
//! - [`dict::encoder`] - Fixed 10-byte record serialization
//! - [`dict::reader`] - Decoder for inspection and round-trip verification
//! - [`dict::build`] - Language discovery and whole-run orchestration
//! - [`output`] - Console result reporting
//!
//! ## Format
//!
//! Each node is a fixed 10-byte record: a 16-bit big-endian code unit, an
//! 8-bit frequency, two 24-bit big-endian byte offsets (first child, next
//! sibling; 0 for none), and one zero padding byte. The root sentinel is
//! always the first record, so the file is exactly `10 * node_count` bytes
//! with no header or trailer. Offsets are capped at 16 MiB - 1.
//!
//! ## Quick Start
//!
//! ```ignore
//! use dictc::dict::{TrieBuilder, encoder};
//! use dictc::dict::parser::parse_words;
//!
//! let words = parse_words("cat 50\ncar 30\ncan 10\n", 50_000);
//! let layout = TrieBuilder::from_words(&words)?;
//! let bytes = encoder::encode(&layout)?;
//! assert_eq!(bytes.len(), 10 * layout.node_count());
//! ```

pub mod dict;
pub mod output;
