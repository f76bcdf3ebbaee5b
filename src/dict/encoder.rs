//! Binary encoding of a trie layout.
//!
//! Each node becomes a fixed 10-byte record, big-endian where multi-byte:
//! char (u16), freq (u8), first-child offset (u24), next-sibling offset
//! (u24), one zero padding byte. No header, no trailer; the buffer is
//! exactly `10 * node_count` bytes.

use crate::dict::builder::TrieLayout;
use crate::dict::types::{CompileError, MAX_OFFSET, NODE_SIZE};
use anyhow::{Context, Result};
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;

/// Serialize the layout into one contiguous buffer.
///
/// Both 24-bit fields are re-validated before any byte of a record is
/// written, so a range failure never leaves a truncated record behind. The
/// char and freq fields are range-safe by type (u16/u8).
pub fn encode(layout: &TrieLayout) -> Result<Vec<u8>, CompileError> {
    let mut buf = Vec::with_capacity(layout.node_count() * NODE_SIZE);
    for node in layout.iter() {
        let child = u24_be("first_child offset", layout.link_offset(node.first_child))?;
        let sibling = u24_be("next_sibling offset", layout.link_offset(node.next_sibling))?;
        buf.extend_from_slice(&node.ch.to_be_bytes());
        buf.push(node.freq);
        buf.extend_from_slice(&child);
        buf.extend_from_slice(&sibling);
        buf.push(0); // padding, always zero
    }
    Ok(buf)
}

/// Encode the layout and write it to `out_file`, creating parent directories
/// as needed. Returns the number of bytes written.
pub fn write_bin(layout: &TrieLayout, out_file: &Path) -> Result<u64> {
    let buf = encode(layout)?;
    if let Some(parent) = out_file.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create {}", parent.display()))?;
    }
    let file = File::create(out_file)
        .with_context(|| format!("Failed to create {}", out_file.display()))?;
    let mut writer = BufWriter::new(file);
    writer.write_all(&buf)?;
    writer.flush()?;
    Ok(buf.len() as u64)
}

/// Validate a 24-bit field and return its big-endian bytes.
fn u24_be(field: &'static str, value: u32) -> Result<[u8; 3], CompileError> {
    if value > MAX_OFFSET {
        return Err(CompileError::EncodingRange {
            field,
            value: value as u64,
        });
    }
    let [_, b0, b1, b2] = value.to_be_bytes();
    Ok([b0, b1, b2])
}
