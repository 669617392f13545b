//! A minimal binary search tree whose nodes track their subtree sizes.
//!
//! `BinaryTree` keeps keys in binary-search-tree order so that `insert` can
//! maintain every node's `count` on the way down. The tree is not balanced;
//! insert, lookup, iteration and drop all walk it without recursion so a
//! degenerate chain costs time, not stack.

use core::cmp::Ordering;
use core::fmt;

/// A tree node carrying a key, a value, and the size of its subtree.
pub struct TreeNode<K, V> {
    key: K,
    value: V,
    count: usize,
    left: Option<Box<TreeNode<K, V>>>,
    right: Option<Box<TreeNode<K, V>>>,
}

impl<K, V> TreeNode<K, V> {
    /// Creates a leaf; its subtree holds just itself.
    pub fn new(key: K, value: V) -> Self {
        Self::with_count(key, value, 1)
    }

    /// Creates a childless node with an explicit subtree count.
    pub fn with_count(key: K, value: V, count: usize) -> Self {
        Self {
            key,
            value,
            count,
            left: None,
            right: None,
        }
    }

    /// The node's key.
    pub fn key(&self) -> &K {
        &self.key
    }

    /// The node's value.
    pub fn value(&self) -> &V {
        &self.value
    }

    /// Mutable access to the value.
    pub fn value_mut(&mut self) -> &mut V {
        &mut self.value
    }

    /// Number of nodes in the subtree rooted here.
    pub fn count(&self) -> usize {
        self.count
    }

    /// Left child.
    pub fn left(&self) -> Option<&TreeNode<K, V>> {
        self.left.as_deref()
    }

    /// Right child.
    pub fn right(&self) -> Option<&TreeNode<K, V>> {
        self.right.as_deref()
    }
}

// Children are left out: a derived impl would recurse down the whole subtree.
impl<K: fmt::Debug, V: fmt::Debug> fmt::Debug for TreeNode<K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TreeNode")
            .field("key", &self.key)
            .field("value", &self.value)
            .field("count", &self.count)
            .finish_non_exhaustive()
    }
}

/// A binary search tree keyed by `K`.
pub struct BinaryTree<K, V> {
    root: Option<Box<TreeNode<K, V>>>,
}

impl<K: Ord, V> BinaryTree<K, V> {
    /// Creates an empty tree.
    pub const fn new() -> Self {
        Self { root: None }
    }

    /// Creates a tree rooted at `root`.
    pub fn with_root(root: TreeNode<K, V>) -> Self {
        Self {
            root: Some(Box::new(root)),
        }
    }

    /// The root node, if any.
    pub fn root(&self) -> Option<&TreeNode<K, V>> {
        self.root.as_deref()
    }

    /// Number of nodes, read from the root's count.
    pub fn size(&self) -> usize {
        self.root().map_or(0, TreeNode::count)
    }

    /// Returns `true` if the tree has no nodes.
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Inserts `key` with `value`, returning the previous value for that key.
    pub fn insert(&mut self, key: K, value: V) -> Option<V> {
        if let Some(slot) = self.get_mut(&key) {
            return Some(core::mem::replace(slot, value));
        }

        // The key is new, so every node on the way down gains one descendant.
        let mut slot = &mut self.root;
        while let Some(node) = slot {
            node.count += 1;
            slot = if key < node.key {
                &mut node.left
            } else {
                &mut node.right
            };
        }
        *slot = Some(Box::new(TreeNode::new(key, value)));
        None
    }

    /// Returns the value stored under `key`.
    pub fn get(&self, key: &K) -> Option<&V> {
        let mut current = self.root();
        while let Some(node) = current {
            current = match key.cmp(&node.key) {
                Ordering::Less => node.left(),
                Ordering::Greater => node.right(),
                Ordering::Equal => return Some(&node.value),
            };
        }
        None
    }

    /// Returns a mutable reference to the value stored under `key`.
    pub fn get_mut(&mut self, key: &K) -> Option<&mut V> {
        let mut current = self.root.as_deref_mut();
        while let Some(node) = current {
            current = match key.cmp(&node.key) {
                Ordering::Less => node.left.as_deref_mut(),
                Ordering::Greater => node.right.as_deref_mut(),
                Ordering::Equal => return Some(node.value_mut()),
            };
        }
        None
    }

    /// Returns `true` if `key` is present.
    pub fn contains_key(&self, key: &K) -> bool {
        self.get(key).is_some()
    }

    /// In-order iterator over `(key, value)` pairs.
    pub fn iter(&self) -> Iter<'_, K, V> {
        let mut iter = Iter { stack: Vec::new() };
        iter.push_left(self.root());
        iter
    }
}

impl<K: Ord, V> Default for BinaryTree<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Ord + fmt::Debug, V: fmt::Debug> fmt::Debug for BinaryTree<K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

impl<K, V> Drop for BinaryTree<K, V> {
    fn drop(&mut self) {
        let mut pending: Vec<Box<TreeNode<K, V>>> = self.root.take().into_iter().collect();
        while let Some(mut node) = pending.pop() {
            pending.extend(node.left.take());
            pending.extend(node.right.take());
        }
    }
}

/// In-order iterator over a [`BinaryTree`].
pub struct Iter<'a, K, V> {
    stack: Vec<&'a TreeNode<K, V>>,
}

impl<'a, K, V> Iter<'a, K, V> {
    fn push_left(&mut self, mut node: Option<&'a TreeNode<K, V>>) {
        while let Some(n) = node {
            self.stack.push(n);
            node = n.left();
        }
    }
}

impl<'a, K, V> Iterator for Iter<'a, K, V> {
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.push_left(node.right());
        Some((&node.key, &node.value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_size_comes_from_root_count() {
        assert_eq!(BinaryTree::<i32, i32>::new().size(), 0);
        let tree = BinaryTree::with_root(TreeNode::with_count(1, 10, 7));
        assert_eq!(tree.size(), 7);
        assert_eq!(tree.root().map(TreeNode::key), Some(&1));
    }

    #[test]
    fn test_insert_maintains_counts() {
        let mut tree = BinaryTree::new();
        for k in [5, 2, 8, 1, 3, 9] {
            assert_eq!(tree.insert(k, k * 10), None);
        }
        assert_eq!(tree.size(), 6);
        let root = tree.root().unwrap();
        assert_eq!(*root.key(), 5);
        assert_eq!(root.left().map(TreeNode::count), Some(3));
        assert_eq!(root.right().map(TreeNode::count), Some(2));

        assert_eq!(tree.insert(3, 33), Some(30));
        assert_eq!(tree.size(), 6);
        assert_eq!(tree.get(&3), Some(&33));
        assert!(tree.contains_key(&9));
        assert!(!tree.contains_key(&4));
    }

    #[test]
    fn test_value_mut_updates_in_place() {
        let mut node = TreeNode::new("k", 1);
        *node.value_mut() += 41;
        assert_eq!(*node.value(), 42);

        let mut tree = BinaryTree::new();
        tree.insert(2, String::from("two"));
        if let Some(v) = tree.get_mut(&2) {
            v.push('!');
        }
        assert_eq!(tree.get(&2).map(String::as_str), Some("two!"));
        assert_eq!(tree.get_mut(&7), None);
    }

    #[test]
    fn test_iter_is_in_key_order() {
        let mut tree = BinaryTree::new();
        for k in [4, 1, 6, 0, 3, 5, 9] {
            tree.insert(k, ());
        }
        let keys: Vec<i32> = tree.iter().map(|(k, _)| *k).collect();
        assert_eq!(keys, vec![0, 1, 3, 4, 5, 6, 9]);
        assert_eq!(format!("{:?}", BinaryTree::<u8, u8>::new()), "{}");
    }

    #[test]
    fn test_sorted_insert_builds_deep_chain() {
        const N: u32 = 200_000;
        let mut tree = BinaryTree::new();
        for k in 0..N {
            tree.insert(k, k);
        }
        assert_eq!(tree.size(), N as usize);
        assert_eq!(tree.get(&(N - 1)), Some(&(N - 1)));
        assert_eq!(tree.insert(N / 2, 0), Some(N / 2));
        assert_eq!(tree.size(), N as usize);
        assert_eq!(tree.iter().count(), N as usize);
        drop(tree);
    }
}
