//! `BTree` - a B-tree set with a configurable minimum degree.
//!
//! With minimum degree `t`, every node other than the root holds between
//! `t - 1` and `2t - 1` keys, and an internal node with `k` keys has `k + 1`
//! children. Insertion splits full nodes on the way down, so it never has to
//! walk back up; all leaves stay at the same depth.

use core::borrow::Borrow;
use core::fmt;
use core::mem;

/// Minimum degree used by [`BTree::new`].
pub const DEFAULT_MIN_DEGREE: usize = 2;

struct BNode<K> {
    keys: Vec<K>,
    /// Empty for leaves.
    children: Vec<BNode<K>>,
}

impl<K> BNode<K> {
    const fn leaf() -> Self {
        Self {
            keys: Vec::new(),
            children: Vec::new(),
        }
    }

    fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }
}

impl<K: Ord> BNode<K> {
    /// Splits the full child `i` around its median, which moves up into `self`.
    fn split_child(&mut self, i: usize, t: usize) {
        let child = &mut self.children[i];
        let right_keys = child.keys.split_off(t);
        let Some(median) = child.keys.pop() else {
            return;
        };
        let right_children = if child.is_leaf() {
            Vec::new()
        } else {
            child.children.split_off(t)
        };
        self.keys.insert(i, median);
        self.children.insert(
            i + 1,
            BNode {
                keys: right_keys,
                children: right_children,
            },
        );
    }

    fn insert_non_full(&mut self, key: K, t: usize) {
        let mut node = self;
        loop {
            let mut i = node.keys.partition_point(|k| *k < key);
            if node.is_leaf() {
                node.keys.insert(i, key);
                return;
            }
            if node.children[i].keys.len() == 2 * t - 1 {
                node.split_child(i, t);
                if key > node.keys[i] {
                    i += 1;
                }
            }
            node = &mut node.children[i];
        }
    }
}

/// A set of ordered keys stored in a B-tree.
pub struct BTree<K> {
    root: BNode<K>,
    min_degree: usize,
    len: usize,
}

impl<K> BTree<K> {
    /// Creates an empty tree with minimum degree 2 (a 2-3-4 tree).
    pub const fn new() -> Self {
        Self {
            root: BNode::leaf(),
            min_degree: DEFAULT_MIN_DEGREE,
            len: 0,
        }
    }

    /// Creates an empty tree with minimum degree `t`; values below 2 are raised to 2.
    pub fn with_min_degree(t: usize) -> Self {
        Self {
            min_degree: t.max(DEFAULT_MIN_DEGREE),
            ..Self::new()
        }
    }

    /// The minimum degree `t`.
    pub fn min_degree(&self) -> usize {
        self.min_degree
    }

    /// Number of keys.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the tree holds no keys.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Number of levels; 0 when empty.
    pub fn height(&self) -> usize {
        if self.is_empty() {
            return 0;
        }
        let mut levels = 1;
        let mut node = &self.root;
        while let Some(first) = node.children.first() {
            levels += 1;
            node = first;
        }
        levels
    }

    /// In-order iterator over the keys.
    pub fn iter(&self) -> Iter<'_, K> {
        let mut iter = Iter { stack: Vec::new() };
        iter.push_left(&self.root);
        iter
    }
}

impl<K: Ord> BTree<K> {
    /// Returns `true` if `key` is present.
    pub fn contains<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        let mut node = &self.root;
        loop {
            match node.keys.binary_search_by(|k| k.borrow().cmp(key)) {
                Ok(_) => return true,
                Err(i) => match node.children.get(i) {
                    Some(child) => node = child,
                    None => return false,
                },
            }
        }
    }

    /// Adds `key`. Returns `false` if it was already present.
    pub fn insert(&mut self, key: K) -> bool {
        if self.contains(&key) {
            return false;
        }
        let t = self.min_degree;
        if self.root.keys.len() == 2 * t - 1 {
            let old_root = mem::replace(&mut self.root, BNode::leaf());
            self.root.children.push(old_root);
            self.root.split_child(0, t);
            tracing::trace!(height = self.height(), "b-tree root split");
        }
        self.root.insert_non_full(key, t);
        self.len += 1;
        true
    }
}

impl<K> Default for BTree<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Ord> FromIterator<K> for BTree<K> {
    fn from_iter<I: IntoIterator<Item = K>>(iter: I) -> Self {
        let mut tree = Self::new();
        for key in iter {
            tree.insert(key);
        }
        tree
    }
}

impl<K: fmt::Debug> fmt::Debug for BTree<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

/// In-order iterator over a [`BTree`].
pub struct Iter<'a, K> {
    /// Nodes on the current path with the index of their next key.
    stack: Vec<(&'a BNode<K>, usize)>,
}

impl<'a, K> Iter<'a, K> {
    fn push_left(&mut self, mut node: &'a BNode<K>) {
        loop {
            self.stack.push((node, 0));
            match node.children.first() {
                Some(child) => node = child,
                None => break,
            }
        }
    }
}

impl<'a, K> Iterator for Iter<'a, K> {
    type Item = &'a K;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let (node, idx) = self.stack.last_mut()?;
            let node: &'a BNode<K> = *node;
            if let Some(key) = node.keys.get(*idx) {
                *idx += 1;
                if let Some(child) = node.children.get(*idx) {
                    self.push_left(child);
                }
                return Some(key);
            }
            self.stack.pop();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Checks key counts, ordering and uniform leaf depth; returns the depth.
    fn check<K: Ord>(node: &BNode<K>, t: usize, is_root: bool) -> usize {
        assert!(node.keys.len() <= 2 * t - 1, "overfull node");
        if !is_root {
            assert!(node.keys.len() >= t - 1, "underfull node");
        }
        assert!(node.keys.windows(2).all(|w| w[0] < w[1]));
        if node.is_leaf() {
            return 1;
        }
        assert_eq!(node.children.len(), node.keys.len() + 1);
        let depths: Vec<usize> = node.children.iter().map(|c| check(c, t, false)).collect();
        assert!(depths.windows(2).all(|w| w[0] == w[1]), "leaves at different depths");
        depths[0] + 1
    }

    #[test]
    fn test_root_split() {
        let mut tree = BTree::new();
        for k in [10, 20, 30] {
            tree.insert(k);
        }
        assert_eq!(tree.height(), 1);
        tree.insert(40);
        assert_eq!(tree.height(), 2);
        assert_eq!(tree.root.keys, vec![20]);
        assert_eq!(tree.root.children[0].keys, vec![10]);
        assert_eq!(tree.root.children[1].keys, vec![30, 40]);
        check(&tree.root, 2, true);
    }

    #[test]
    fn test_many_keys_every_degree() {
        for t in [2, 3, 5] {
            let mut tree = BTree::with_min_degree(t);
            // A scrambled but deterministic order.
            for k in (0..500u32).map(|i| (i * 7919) % 500) {
                assert!(tree.insert(k));
            }
            assert_eq!(tree.len(), 500);
            assert_eq!(tree.min_degree(), t);
            check(&tree.root, t, true);
            assert!(tree.iter().copied().eq(0..500));
            assert!(tree.contains(&499));
            assert!(!tree.contains(&500));
        }
    }

    #[test]
    fn test_duplicates_and_degenerate_degree() {
        let mut tree = BTree::with_min_degree(0);
        assert_eq!(tree.min_degree(), 2);
        assert!(tree.insert("a"));
        assert!(!tree.insert("a"));
        assert_eq!(tree.len(), 1);
        assert_eq!(BTree::<u8>::new().height(), 0);
        assert_eq!(BTree::<u8>::new().iter().next(), None);
        assert_eq!(format!("{tree:?}"), r#"{"a"}"#);
    }
}
