use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use thiserror::Error;

/// Index of a node in the trie arena
pub type NodeId = u32;

/// Size of one serialized node record in bytes
pub const NODE_SIZE: usize = 10;

/// Largest byte offset addressable by a 3-byte field (16 MiB - 1)
pub const MAX_OFFSET: u32 = 0xFF_FFFF;

/// Character stored on the root node. The root is never a valid link target,
/// so this code unit never collides with dictionary content on disk.
pub const ROOT_CHAR: u16 = b'^' as u16;

/// Fatal compilation failures. Every variant aborts the current run; the
/// transformation is deterministic, so retrying is never appropriate.
#[derive(Debug, Error)]
pub enum CompileError {
    /// A requested language's word list file does not exist
    #[error("missing word list: {}", .0.display())]
    MissingInput(PathBuf),

    /// The breadth-first offset counter would pass the 3-byte addressable range
    #[error("trie exceeds the 16 MiB offset limit ({nodes} nodes)")]
    CapacityExceeded { nodes: usize },

    /// A record field value does not fit its fixed-width encoding
    #[error("{field} value {value} out of range")]
    EncodingRange { field: &'static str, value: u64 },
}

/// Configuration for one compilation. Passed explicitly so runs with
/// different limits can execute side by side without shared state.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompilerConfig {
    /// Maximum number of accepted entries per word list
    pub max_words: usize,
}

impl Default for CompilerConfig {
    fn default() -> Self {
        Self { max_words: 50_000 }
    }
}

/// Per-language result, also the manifest.json record
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompileStats {
    pub language: String,
    pub word_count: usize,
    pub node_count: usize,
    pub bytes_written: u64,
    pub out_file: PathBuf,
}
