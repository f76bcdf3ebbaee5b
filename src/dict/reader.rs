//! Decoder for compiled dictionary buffers.
//!
//! Used by `inspect` and by the round-trip tests. This walks the raw record
//! links to enumerate the stored words; prefix search stays in the consumer.

use crate::dict::types::{NODE_SIZE, ROOT_CHAR};
use anyhow::{Result, bail, ensure};

/// One decoded 10-byte record
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RawNode {
    pub ch: u16,
    pub freq: u8,
    /// Byte offset of the first child, 0 for none
    pub first_child: u32,
    /// Byte offset of the next sibling, 0 for none
    pub next_sibling: u32,
}

/// Read-only view over a compiled dictionary buffer
pub struct TrieReader<'a> {
    buf: &'a [u8],
}

impl<'a> TrieReader<'a> {
    /// Wrap a buffer, validating the record framing and the root sentinel.
    pub fn new(buf: &'a [u8]) -> Result<Self> {
        ensure!(!buf.is_empty(), "empty dictionary buffer");
        ensure!(
            buf.len() % NODE_SIZE == 0,
            "buffer length {} is not a multiple of the {}-byte record size",
            buf.len(),
            NODE_SIZE
        );
        let reader = Self { buf };
        let root = reader.node_at(0)?;
        ensure!(
            root.ch == ROOT_CHAR && root.freq == 0,
            "first record is not a root sentinel"
        );
        Ok(reader)
    }

    pub fn node_count(&self) -> usize {
        self.buf.len() / NODE_SIZE
    }

    /// Decode the record at a byte offset.
    pub fn node_at(&self, offset: u32) -> Result<RawNode> {
        let off = offset as usize;
        ensure!(off % NODE_SIZE == 0, "offset {off} is not record-aligned");
        ensure!(
            off + NODE_SIZE <= self.buf.len(),
            "offset {off} past end of buffer"
        );
        let rec = &self.buf[off..off + NODE_SIZE];
        Ok(RawNode {
            ch: u16::from_be_bytes([rec[0], rec[1]]),
            freq: rec[2],
            first_child: u24_from_be(&rec[3..6]),
            next_sibling: u24_from_be(&rec[6..9]),
        })
    }

    /// Enumerate every stored word (freq >= 1) with its frequency, sorted.
    ///
    /// A node with freq 0 is an internal prefix node and is not reported.
    /// The traversal is iterative with an explicit frame stack: word length
    /// is bounded only by the offset cap, so chains of over a million nodes
    /// are valid input and must not consume call-stack depth.
    pub fn words(&self) -> Result<Vec<(String, u8)>> {
        let root = self.node_at(0)?;
        let mut out = Vec::new();
        let mut prefix: Vec<char> = Vec::new();
        let mut visited = 0usize;
        // Each frame is (record offset, prefix depth the node extends).
        // Offset 0 is the "no node" sentinel; a well-formed trie never links
        // back to the root.
        let mut stack = vec![(root.first_child, 0usize)];

        while let Some((offset, depth)) = stack.pop() {
            if offset == 0 {
                continue;
            }
            visited += 1;
            ensure!(
                visited < self.node_count(),
                "link cycle detected at offset {offset}"
            );
            let node = self.node_at(offset)?;
            let Some(ch) = char::from_u32(node.ch as u32) else {
                bail!("record at offset {offset} holds an unpaired surrogate");
            };
            prefix.truncate(depth);
            prefix.push(ch);
            if node.freq >= 1 {
                out.push((prefix.iter().collect(), node.freq));
            }
            // Child frame last so the subtree is walked before the sibling
            // frame restores the shorter prefix.
            stack.push((node.next_sibling, depth));
            stack.push((node.first_child, depth + 1));
        }

        out.sort();
        Ok(out)
    }
}

fn u24_from_be(b: &[u8]) -> u32 {
    ((b[0] as u32) << 16) | ((b[1] as u32) << 8) | b[2] as u32
}
