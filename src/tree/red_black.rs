//! `RedBlackTree` - a left-leaning red-black map.
//!
//! Red links lean left and no node has two red links, which is the 2-3 tree
//! encoding: every root-to-leaf path crosses the same number of black links,
//! so the height stays under \(2 \log_2 (n + 1)\). Balance is restored on the
//! way back up from each insertion by rotations and color flips.

use core::borrow::Borrow;
use core::cmp::Ordering;
use core::fmt;
use core::mem;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Color {
    Red,
    Black,
}

type Link<K, V> = Option<Box<RbNode<K, V>>>;

struct RbNode<K, V> {
    key: K,
    value: V,
    color: Color,
    left: Link<K, V>,
    right: Link<K, V>,
}

fn is_red<K, V>(link: &Link<K, V>) -> bool {
    link.as_ref().is_some_and(|n| n.color == Color::Red)
}

fn rotate_left<K, V>(mut node: Box<RbNode<K, V>>) -> Box<RbNode<K, V>> {
    let Some(mut pivot) = node.right.take() else {
        return node;
    };
    node.right = pivot.left.take();
    pivot.color = node.color;
    node.color = Color::Red;
    pivot.left = Some(node);
    pivot
}

fn rotate_right<K, V>(mut node: Box<RbNode<K, V>>) -> Box<RbNode<K, V>> {
    let Some(mut pivot) = node.left.take() else {
        return node;
    };
    node.left = pivot.right.take();
    pivot.color = node.color;
    node.color = Color::Red;
    pivot.right = Some(node);
    pivot
}

fn flip_colors<K, V>(node: &mut RbNode<K, V>) {
    node.color = Color::Red;
    for child in [&mut node.left, &mut node.right].into_iter().flatten() {
        child.color = Color::Black;
    }
}

fn insert<K: Ord, V>(link: Link<K, V>, key: K, value: V, old: &mut Option<V>) -> Box<RbNode<K, V>> {
    let Some(mut node) = link else {
        return Box::new(RbNode {
            key,
            value,
            color: Color::Red,
            left: None,
            right: None,
        });
    };
    match key.cmp(&node.key) {
        Ordering::Less => node.left = Some(insert(node.left.take(), key, value, old)),
        Ordering::Greater => node.right = Some(insert(node.right.take(), key, value, old)),
        Ordering::Equal => *old = Some(mem::replace(&mut node.value, value)),
    }

    if is_red(&node.right) && !is_red(&node.left) {
        node = rotate_left(node);
    }
    if is_red(&node.left) && node.left.as_ref().is_some_and(|l| is_red(&l.left)) {
        node = rotate_right(node);
    }
    if is_red(&node.left) && is_red(&node.right) {
        flip_colors(&mut node);
    }
    node
}

/// An ordered map kept in a left-leaning red-black tree.
pub struct RedBlackTree<K, V> {
    root: Link<K, V>,
    len: usize,
}

impl<K, V> RedBlackTree<K, V> {
    /// Creates an empty tree.
    pub const fn new() -> Self {
        Self { root: None, len: 0 }
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the map is empty.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Longest root-to-leaf path, counted in nodes.
    pub fn height(&self) -> usize {
        let mut deepest = 0;
        let mut pending: Vec<(&RbNode<K, V>, usize)> =
            self.root.as_deref().map(|n| (n, 1)).into_iter().collect();
        while let Some((node, depth)) = pending.pop() {
            deepest = deepest.max(depth);
            for child in [&node.left, &node.right].into_iter().flatten() {
                pending.push((&**child, depth + 1));
            }
        }
        deepest
    }

    /// In-order iterator over `(key, value)` pairs.
    pub fn iter(&self) -> Iter<'_, K, V> {
        let mut iter = Iter { stack: Vec::new() };
        iter.push_left(self.root.as_deref());
        iter
    }
}

impl<K: Ord, V> RedBlackTree<K, V> {
    /// Inserts `key` with `value`, returning the previous value for that key.
    pub fn insert(&mut self, key: K, value: V) -> Option<V> {
        let mut old = None;
        let mut root = insert(self.root.take(), key, value, &mut old);
        root.color = Color::Black;
        self.root = Some(root);
        if old.is_none() {
            self.len += 1;
        }
        old
    }

    /// Returns the value stored under `key`.
    pub fn get<Q>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        let mut current = self.root.as_deref();
        while let Some(node) = current {
            current = match key.cmp(node.key.borrow()) {
                Ordering::Less => node.left.as_deref(),
                Ordering::Greater => node.right.as_deref(),
                Ordering::Equal => return Some(&node.value),
            };
        }
        None
    }

    /// Returns `true` if `key` is present.
    pub fn contains_key<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.get(key).is_some()
    }
}

impl<K, V> Default for RedBlackTree<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Ord, V> FromIterator<(K, V)> for RedBlackTree<K, V> {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut tree = Self::new();
        for (k, v) in iter {
            tree.insert(k, v);
        }
        tree
    }
}

impl<K: fmt::Debug, V: fmt::Debug> fmt::Debug for RedBlackTree<K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

/// In-order iterator over a [`RedBlackTree`].
pub struct Iter<'a, K, V> {
    stack: Vec<&'a RbNode<K, V>>,
}

impl<'a, K, V> Iter<'a, K, V> {
    fn push_left(&mut self, mut node: Option<&'a RbNode<K, V>>) {
        while let Some(n) = node {
            self.stack.push(n);
            node = n.left.as_deref();
        }
    }
}

impl<'a, K, V> Iterator for Iter<'a, K, V> {
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.push_left(node.right.as_deref());
        Some((&node.key, &node.value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Asserts the red-black invariants, returning the black height.
    fn check<K: Ord, V>(link: &Link<K, V>) -> usize {
        let Some(node) = link else { return 1 };
        assert!(!is_red(&node.right), "red link leans right");
        if node.color == Color::Red {
            assert!(!is_red(&node.left), "two reds in a row");
        }
        if let Some(l) = &node.left {
            assert!(l.key < node.key);
        }
        if let Some(r) = &node.right {
            assert!(r.key > node.key);
        }
        let (lb, rb) = (check(&node.left), check(&node.right));
        assert_eq!(lb, rb, "black heights differ");
        lb + usize::from(node.color == Color::Black)
    }

    #[test]
    fn test_ascending_insert_stays_balanced() {
        let tree: RedBlackTree<u32, u32> = (0..1000).map(|k| (k, k * 2)).collect();
        assert_eq!(tree.len(), 1000);
        assert_eq!(tree.root.as_ref().map(|n| n.color), Some(Color::Black));
        check(&tree.root);
        assert!(tree.height() <= 20);
        assert_eq!(tree.get(&999), Some(&1998));
        assert!(tree.iter().map(|(k, _)| *k).eq(0..1000));
    }

    #[test]
    fn test_mixed_insert_order() {
        let mut tree = RedBlackTree::new();
        for k in [50, 20, 80, 10, 30, 70, 90, 25, 35, 5, 1, 99, 60] {
            assert_eq!(tree.insert(k, ()), None);
            check(&tree.root);
        }
        assert_eq!(tree.len(), 13);
        assert!(tree.contains_key(&35));
        assert!(!tree.contains_key(&36));
    }

    #[test]
    fn test_insert_replaces_value() {
        let mut tree = RedBlackTree::new();
        assert_eq!(tree.insert("b", 1), None);
        assert_eq!(tree.insert("a", 2), None);
        assert_eq!(tree.insert("b", 3), Some(1));
        assert_eq!(tree.len(), 2);
        assert_eq!(format!("{tree:?}"), r#"{"a": 2, "b": 3}"#);
        assert!(RedBlackTree::<u8, u8>::new().is_empty());
    }
}
