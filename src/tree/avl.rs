//! `AvlTree` - a height-balanced binary search tree of keys.
//!
//! Every node's subtrees differ in height by at most one, restored after each
//! insertion or removal by single or double rotations.
//!
//! ### Performance Characteristics
//!
//! | Operation | Time |
//! |-----------|------|
//! | `insert` | \(O(\log n)\) |
//! | `remove` | \(O(\log n)\) |
//! | `contains` | \(O(\log n)\) |
//! | `iter` | \(O(n)\) |

use core::borrow::Borrow;
use core::cmp::Ordering;
use core::fmt;

type Link<K> = Option<Box<AvlNode<K>>>;

struct AvlNode<K> {
    key: K,
    height: usize,
    left: Link<K>,
    right: Link<K>,
}

impl<K> AvlNode<K> {
    fn leaf(key: K) -> Self {
        Self {
            key,
            height: 1,
            left: None,
            right: None,
        }
    }

    fn fix_height(&mut self) {
        self.height = 1 + height(&self.left).max(height(&self.right));
    }

    /// Left height minus right height.
    fn balance(&self) -> isize {
        height(&self.left) as isize - height(&self.right) as isize
    }
}

fn height<K>(link: &Link<K>) -> usize {
    link.as_ref().map_or(0, |n| n.height)
}

fn rotate_right<K>(mut node: Box<AvlNode<K>>) -> Box<AvlNode<K>> {
    let Some(mut pivot) = node.left.take() else {
        return node;
    };
    node.left = pivot.right.take();
    node.fix_height();
    pivot.right = Some(node);
    pivot.fix_height();
    pivot
}

fn rotate_left<K>(mut node: Box<AvlNode<K>>) -> Box<AvlNode<K>> {
    let Some(mut pivot) = node.right.take() else {
        return node;
    };
    node.right = pivot.left.take();
    node.fix_height();
    pivot.left = Some(node);
    pivot.fix_height();
    pivot
}

fn rebalance<K>(mut node: Box<AvlNode<K>>) -> Box<AvlNode<K>> {
    node.fix_height();
    match node.balance() {
        2.. => {
            if node.left.as_ref().is_some_and(|l| l.balance() < 0) {
                node.left = node.left.take().map(rotate_left);
            }
            rotate_right(node)
        }
        ..=-2 => {
            if node.right.as_ref().is_some_and(|r| r.balance() > 0) {
                node.right = node.right.take().map(rotate_right);
            }
            rotate_left(node)
        }
        _ => node,
    }
}

fn insert<K: Ord>(link: Link<K>, key: K, inserted: &mut bool) -> Box<AvlNode<K>> {
    let Some(mut node) = link else {
        *inserted = true;
        return Box::new(AvlNode::leaf(key));
    };
    match key.cmp(&node.key) {
        Ordering::Less => node.left = Some(insert(node.left.take(), key, inserted)),
        Ordering::Greater => node.right = Some(insert(node.right.take(), key, inserted)),
        Ordering::Equal => return node,
    }
    rebalance(node)
}

fn remove<K, Q>(link: Link<K>, key: &Q, removed: &mut bool) -> Link<K>
where
    K: Borrow<Q>,
    Q: Ord + ?Sized,
{
    let mut node = link?;
    match key.cmp(node.key.borrow()) {
        Ordering::Less => node.left = remove(node.left.take(), key, removed),
        Ordering::Greater => node.right = remove(node.right.take(), key, removed),
        Ordering::Equal => {
            *removed = true;
            match (node.left.take(), node.right.take()) {
                (None, child) | (child, None) => return child,
                (Some(left), Some(right)) => {
                    // Two children: the in-order successor takes this node's place.
                    let (rest, successor) = take_min(right);
                    node.key = successor;
                    node.left = Some(left);
                    node.right = rest;
                }
            }
        }
    }
    Some(rebalance(node))
}

/// Detaches the smallest key under `node`, returning the rebalanced remainder.
fn take_min<K>(mut node: Box<AvlNode<K>>) -> (Link<K>, K) {
    match node.left.take() {
        None => {
            let AvlNode { key, right, .. } = *node;
            (right, key)
        }
        Some(left) => {
            let (rest, min) = take_min(left);
            node.left = rest;
            (Some(rebalance(node)), min)
        }
    }
}

/// A set of ordered keys kept in an AVL tree.
pub struct AvlTree<K> {
    root: Link<K>,
    len: usize,
}

impl<K> AvlTree<K> {
    /// Creates an empty tree.
    pub const fn new() -> Self {
        Self { root: None, len: 0 }
    }

    /// Number of keys.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the tree holds no keys.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Height of the tree; 0 when empty, 1 for a single key.
    pub fn height(&self) -> usize {
        height(&self.root)
    }

    /// In-order iterator over the keys.
    pub fn iter(&self) -> Iter<'_, K> {
        let mut iter = Iter { stack: Vec::new() };
        iter.push_left(self.root.as_deref());
        iter
    }

    /// Smallest key.
    pub fn first(&self) -> Option<&K> {
        self.iter().next()
    }
}

impl<K: Ord> AvlTree<K> {
    /// Adds `key`. Returns `false` if it was already present.
    pub fn insert(&mut self, key: K) -> bool {
        let mut inserted = false;
        self.root = Some(insert(self.root.take(), key, &mut inserted));
        if inserted {
            self.len += 1;
        }
        inserted
    }

    /// Removes `key`. Returns `false` if it was absent.
    pub fn remove<Q>(&mut self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        let mut removed = false;
        self.root = remove(self.root.take(), key, &mut removed);
        if removed {
            self.len -= 1;
        }
        removed
    }

    /// Returns `true` if `key` is present.
    pub fn contains<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.get(key).is_some()
    }

    /// Returns the stored key equal to `key`.
    pub fn get<Q>(&self, key: &Q) -> Option<&K>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        let mut current = self.root.as_deref();
        while let Some(node) = current {
            current = match key.cmp(node.key.borrow()) {
                Ordering::Less => node.left.as_deref(),
                Ordering::Greater => node.right.as_deref(),
                Ordering::Equal => return Some(&node.key),
            };
        }
        None
    }
}

impl<K> Default for AvlTree<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Ord> FromIterator<K> for AvlTree<K> {
    fn from_iter<I: IntoIterator<Item = K>>(iter: I) -> Self {
        let mut tree = Self::new();
        for key in iter {
            tree.insert(key);
        }
        tree
    }
}

impl<K: fmt::Debug> fmt::Debug for AvlTree<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

/// In-order iterator over an [`AvlTree`].
pub struct Iter<'a, K> {
    stack: Vec<&'a AvlNode<K>>,
}

impl<'a, K> Iter<'a, K> {
    fn push_left(&mut self, mut node: Option<&'a AvlNode<K>>) {
        while let Some(n) = node {
            self.stack.push(n);
            node = n.left.as_deref();
        }
    }
}

impl<'a, K> Iterator for Iter<'a, K> {
    type Item = &'a K;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.push_left(node.right.as_deref());
        Some(&node.key)
    }
}
