//! Trie construction and breadth-first layout.
//!
//! Nodes live in a `Vec` arena and refer to each other by integer id, so the
//! left-child/right-sibling links need no shared ownership. Layout assigns
//! byte offsets at dequeue time, which guarantees every link points at an
//! offset already computed in the same pass.

use crate::dict::types::{CompileError, MAX_OFFSET, NODE_SIZE, NodeId, ROOT_CHAR};
use rustc_hash::FxHashMap;
use std::collections::{BTreeMap, VecDeque};

/// One character position in the trie
#[derive(Debug)]
pub struct TrieNode {
    /// 16-bit code unit this node matches (`ROOT_CHAR` on the root)
    pub ch: u16,
    /// Word weight; 0 marks an internal prefix node, not a word
    pub freq: u8,
    /// Children keyed by code unit; BTreeMap keeps sibling order deterministic
    children: BTreeMap<u16, NodeId>,
    /// Byte offset of this node's record, assigned during layout
    pub offset: u32,
    pub first_child: Option<NodeId>,
    pub next_sibling: Option<NodeId>,
}

impl TrieNode {
    fn new(ch: u16) -> Self {
        Self {
            ch,
            freq: 0,
            children: BTreeMap::new(),
            offset: 0,
            first_child: None,
            next_sibling: None,
        }
    }
}

/// Arena-backed trie builder. The root is created up front at id 0.
pub struct TrieBuilder {
    arena: Vec<TrieNode>,
}

impl TrieBuilder {
    pub fn new() -> Self {
        Self {
            arena: vec![TrieNode::new(ROOT_CHAR)],
        }
    }

    /// Build a complete layout from a finalized word table.
    pub fn from_words(words: &FxHashMap<String, u8>) -> Result<TrieLayout, CompileError> {
        let mut builder = Self::new();
        for (word, &freq) in words {
            builder.insert(word, freq)?;
        }
        builder.into_layout()
    }

    /// Walk/create the node path for `word` and set the terminal frequency.
    ///
    /// Characters must fit a single 16-bit code unit; anything above U+FFFF
    /// is rejected since the record format stores raw code points.
    pub fn insert(&mut self, word: &str, freq: u8) -> Result<(), CompileError> {
        let mut node: NodeId = 0;
        for ch in word.chars() {
            let unit = u16::try_from(ch as u32).map_err(|_| CompileError::EncodingRange {
                field: "char",
                value: ch as u64,
            })?;
            let existing = self.arena[node as usize].children.get(&unit).copied();
            node = match existing {
                Some(child) => child,
                None => {
                    let child = self.arena.len() as NodeId;
                    self.arena.push(TrieNode::new(unit));
                    self.arena[node as usize].children.insert(unit, child);
                    child
                }
            };
        }
        self.arena[node as usize].freq = freq;
        Ok(())
    }

    /// Number of nodes created so far, root included.
    pub fn node_count(&self) -> usize {
        self.arena.len()
    }

    /// Breadth-first layout pass. For each dequeued node: check the offset
    /// counter against the 3-byte limit, assign the offset, fix the
    /// first-child link and the sibling chain (ascending by code unit), and
    /// enqueue the children in that order.
    pub fn into_layout(mut self) -> Result<TrieLayout, CompileError> {
        let mut order = Vec::with_capacity(self.arena.len());
        let mut queue: VecDeque<NodeId> = VecDeque::new();
        queue.push_back(0);
        let mut offset: u64 = 0;

        while let Some(id) = queue.pop_front() {
            if offset > MAX_OFFSET as u64 {
                return Err(CompileError::CapacityExceeded {
                    nodes: self.arena.len(),
                });
            }
            self.arena[id as usize].offset = offset as u32;
            order.push(id);
            offset += NODE_SIZE as u64;

            let children: Vec<NodeId> =
                self.arena[id as usize].children.values().copied().collect();
            self.arena[id as usize].first_child = children.first().copied();
            for pair in children.windows(2) {
                self.arena[pair[0] as usize].next_sibling = Some(pair[1]);
            }
            queue.extend(children);
        }

        Ok(TrieLayout {
            arena: self.arena,
            order,
        })
    }
}

impl Default for TrieBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Finished layout: the arena plus the order records are written in.
/// Byte position of the n-th record is `10 * n` by construction.
#[derive(Debug)]
pub struct TrieLayout {
    arena: Vec<TrieNode>,
    order: Vec<NodeId>,
}

impl TrieLayout {
    pub fn node_count(&self) -> usize {
        self.order.len()
    }

    /// Nodes in record order.
    pub fn iter(&self) -> impl Iterator<Item = &TrieNode> {
        self.order.iter().map(|&id| &self.arena[id as usize])
    }

    /// Byte offset a link field carries on disk; `None` encodes as 0, which
    /// is unambiguous because the root (the only node at offset 0) can never
    /// be a child or sibling target.
    pub fn link_offset(&self, link: Option<NodeId>) -> u32 {
        link.map_or(0, |id| self.arena[id as usize].offset)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table(entries: &[(&str, u8)]) -> FxHashMap<String, u8> {
        entries
            .iter()
            .map(|&(w, f)| (w.to_string(), f))
            .collect()
    }

    #[test]
    fn test_empty_table_is_root_only() {
        let layout = TrieBuilder::from_words(&FxHashMap::default()).unwrap();
        assert_eq!(layout.node_count(), 1);
        let root = layout.iter().next().unwrap();
        assert_eq!(root.ch, ROOT_CHAR);
        assert_eq!(root.freq, 0);
        assert_eq!(root.offset, 0);
        assert!(root.first_child.is_none());
        assert!(root.next_sibling.is_none());
    }

    #[test]
    fn test_shared_prefix_layout() {
        // root + c + a + {n, r, t}
        let layout = TrieBuilder::from_words(&table(&[("cat", 50), ("car", 30), ("can", 10)]))
            .unwrap();
        assert_eq!(layout.node_count(), 6);

        let nodes: Vec<_> = layout.iter().collect();
        let chars: Vec<u16> = nodes.iter().map(|n| n.ch).collect();
        assert_eq!(
            chars,
            vec![ROOT_CHAR, 'c' as u16, 'a' as u16, 'n' as u16, 'r' as u16, 't' as u16]
        );

        // Offsets are 10 * record index.
        for (i, node) in nodes.iter().enumerate() {
            assert_eq!(node.offset, (i * NODE_SIZE) as u32);
        }

        // Internal nodes carry no weight; terminals carry theirs.
        assert_eq!(nodes[1].freq, 0);
        assert_eq!(nodes[2].freq, 0);
        assert_eq!(nodes[3].freq, 10);
        assert_eq!(nodes[4].freq, 30);
        assert_eq!(nodes[5].freq, 50);

        // Sibling chain under 'a': n -> r -> t -> end.
        assert_eq!(layout.link_offset(nodes[2].first_child), 30);
        assert_eq!(layout.link_offset(nodes[3].next_sibling), 40);
        assert_eq!(layout.link_offset(nodes[4].next_sibling), 50);
        assert_eq!(layout.link_offset(nodes[5].next_sibling), 0);
        assert_eq!(layout.link_offset(nodes[5].first_child), 0);
    }

    #[test]
    fn test_sibling_order_is_ascending_by_code_unit() {
        let mut builder = TrieBuilder::new();
        // Insert out of order; layout must not care.
        builder.insert("z", 1).unwrap();
        builder.insert("a", 2).unwrap();
        builder.insert("m", 3).unwrap();
        let layout = builder.into_layout().unwrap();
        let chars: Vec<u16> = layout.iter().skip(1).map(|n| n.ch).collect();
        assert_eq!(chars, vec!['a' as u16, 'm' as u16, 'z' as u16]);
    }

    #[test]
    fn test_word_revisit_overwrites_frequency() {
        let mut builder = TrieBuilder::new();
        builder.insert("go", 7).unwrap();
        builder.insert("go", 9).unwrap();
        assert_eq!(builder.node_count(), 3);
        let layout = builder.into_layout().unwrap();
        let terminal = layout.iter().last().unwrap();
        assert_eq!(terminal.ch, 'o' as u16);
        assert_eq!(terminal.freq, 9);
    }

    #[test]
    fn test_rejects_characters_above_16_bits() {
        let mut builder = TrieBuilder::new();
        let err = builder.insert("a\u{1F600}b", 1).unwrap_err();
        assert!(matches!(
            err,
            CompileError::EncodingRange { field: "char", .. }
        ));
    }

    #[test]
    fn test_capacity_limit_is_enforced() {
        // A single chain long enough that the last node's offset would pass
        // 0xFFFFFF. 1,677,722 characters puts the final node at offset
        // 16,777,220.
        let mut builder = TrieBuilder::new();
        builder.insert(&"a".repeat(1_677_722), 1).unwrap();
        let err = builder.into_layout().unwrap_err();
        assert!(matches!(err, CompileError::CapacityExceeded { .. }));
    }
}
