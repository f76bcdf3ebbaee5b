pub mod build;
pub mod builder;
pub mod encoder;
pub mod parser;
pub mod reader;
pub mod stats;
pub mod types;

pub use builder::{TrieBuilder, TrieLayout};
pub use reader::TrieReader;
pub use types::*;
