//! `MerkleTree` - a binary hash tree over a list of data blocks.
//!
//! Leaves hold the MD5 digest of one block; an internal node holds the digest
//! of its children's digests concatenated left then right. Levels are built
//! by pairing neighbors; an unpaired last node gets a parent of its own whose
//! digest covers that single child.

use md5::{Digest, Md5};

/// An MD5 digest.
pub type MerkleHash = [u8; 16];

fn digest(parts: &[&[u8]]) -> MerkleHash {
    let mut hasher = Md5::new();
    for part in parts {
        hasher.update(part);
    }
    hasher.finalize().into()
}

/// A node of a [`MerkleTree`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MerkleNode {
    hash: MerkleHash,
    left: Option<Box<MerkleNode>>,
    right: Option<Box<MerkleNode>>,
}

impl MerkleNode {
    /// A leaf for one data block.
    pub fn leaf(data: &[u8]) -> Self {
        Self {
            hash: digest(&[data]),
            left: None,
            right: None,
        }
    }

    /// An internal node over `left` and, if present, `right`.
    pub fn parent(left: MerkleNode, right: Option<MerkleNode>) -> Self {
        let hash = match &right {
            Some(r) => digest(&[left.hash.as_slice(), r.hash.as_slice()]),
            None => digest(&[left.hash.as_slice()]),
        };
        Self {
            hash,
            left: Some(Box::new(left)),
            right: right.map(Box::new),
        }
    }

    /// This node's digest.
    pub fn hash(&self) -> &MerkleHash {
        &self.hash
    }

    /// Left child.
    pub fn left(&self) -> Option<&MerkleNode> {
        self.left.as_deref()
    }

    /// Right child.
    pub fn right(&self) -> Option<&MerkleNode> {
        self.right.as_deref()
    }

    /// Returns `true` for leaves.
    pub fn is_leaf(&self) -> bool {
        self.left.is_none() && self.right.is_none()
    }
}

/// A Merkle tree; empty when built from no blocks.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct MerkleTree {
    root: Option<MerkleNode>,
    leaf_count: usize,
    height: usize,
}

impl MerkleTree {
    /// Builds the tree bottom-up from `blocks`.
    pub fn new<I>(blocks: I) -> Self
    where
        I: IntoIterator,
        I::Item: AsRef<[u8]>,
    {
        let mut level: Vec<MerkleNode> = blocks
            .into_iter()
            .map(|b| MerkleNode::leaf(b.as_ref()))
            .collect();
        let leaf_count = level.len();
        let mut height = usize::from(leaf_count > 0);

        while level.len() > 1 {
            let mut nodes = level.into_iter();
            let mut next = Vec::with_capacity(leaf_count.div_ceil(2));
            while let Some(left) = nodes.next() {
                next.push(MerkleNode::parent(left, nodes.next()));
            }
            level = next;
            height += 1;
        }

        tracing::trace!(leaf_count, height, "merkle tree built");
        Self {
            root: level.pop(),
            leaf_count,
            height,
        }
    }

    /// The root node.
    pub fn root(&self) -> Option<&MerkleNode> {
        self.root.as_ref()
    }

    /// The root digest, which commits to every block and their order.
    pub fn root_hash(&self) -> Option<&MerkleHash> {
        self.root().map(MerkleNode::hash)
    }

    /// Number of data blocks.
    pub fn leaf_count(&self) -> usize {
        self.leaf_count
    }

    /// Number of levels, leaves included; 0 when empty.
    pub fn height(&self) -> usize {
        self.height
    }

    /// Returns `true` if the tree was built from no blocks.
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_leaf_is_md5_of_block() {
        // RFC 1321 test vector for "abc".
        let tree = MerkleTree::new(["abc"]);
        let expected: MerkleHash = [
            0x90, 0x01, 0x50, 0x98, 0x3c, 0xd2, 0x4f, 0xb0, 0xd6, 0x96, 0x3f, 0x7d, 0x28, 0xe1,
            0x7f, 0x72,
        ];
        assert_eq!(tree.root_hash(), Some(&expected));
        assert_eq!(tree.height(), 1);
        assert!(tree.root().is_some_and(MerkleNode::is_leaf));
    }

    #[test]
    fn test_parent_hashes_children() {
        let tree = MerkleTree::new([b"a".as_slice(), b"b".as_slice()]);
        let (a, b) = (MerkleNode::leaf(b"a"), MerkleNode::leaf(b"b"));
        let root = tree.root().unwrap();
        assert_eq!(root.hash(), &digest(&[a.hash().as_slice(), b.hash().as_slice()]));
        assert_eq!(root.left(), Some(&a));
        assert_eq!(root.right(), Some(&b));
    }

    #[test]
    fn test_odd_block_count() {
        let tree = MerkleTree::new(["a", "b", "c"]);
        assert_eq!(tree.leaf_count(), 3);
        assert_eq!(tree.height(), 3);
        let root = tree.root().unwrap();
        let lone = root.right().unwrap();
        assert!(lone.right().is_none());
        assert_eq!(lone.hash(), &digest(&[MerkleNode::leaf(b"c").hash().as_slice()]));
    }

    #[test]
    fn test_root_commits_to_content_and_order() {
        let base = MerkleTree::new(["x", "y", "z", "w"]);
        let swapped = MerkleTree::new(["y", "x", "z", "w"]);
        let edited = MerkleTree::new(["x", "y", "z", "W"]);
        assert_ne!(base.root_hash(), swapped.root_hash());
        assert_ne!(base.root_hash(), edited.root_hash());
        assert_eq!(base.root_hash(), MerkleTree::new(vec!["x", "y", "z", "w"]).root_hash());
    }

    #[test]
    fn test_empty() {
        let tree = MerkleTree::new(Vec::<Vec<u8>>::new());
        assert!(tree.is_empty());
        assert_eq!(tree.root_hash(), None);
        assert_eq!(tree.height(), 0);
    }
}
