//! `SkipList` - an ordered map built from layered linked lists.
//!
//! Level 0 links every entry in key order; each higher level links a subset
//! of the level below it, so a search drops down a level whenever the next
//! key would overshoot. How far a new entry is promoted is decided by a
//! [`LevelDecider`], by default a seeded coin flip.
//!
//! Nodes live in one `Vec` and link to each other by index, so the list
//! needs no per-link allocation and no `unsafe`.

use core::borrow::Borrow;
use core::cmp::Ordering;
use core::fmt;

/// Maximum number of levels.
pub const MAX_LEVEL: usize = 16;

/// Decides whether a newly inserted entry is promoted to the next level.
pub trait LevelDecider {
    /// Returns `true` to link the entry into one more level.
    fn promote(&mut self) -> bool;
}

/// Promotes with probability one half, using a xorshift generator.
#[derive(Debug, Clone)]
pub struct CoinFlip {
    state: u64,
}

impl CoinFlip {
    /// A generator seeded with `seed`; zero is replaced by a fixed nonzero seed.
    pub fn new(seed: u64) -> Self {
        Self {
            state: if seed == 0 { 0xDEAD_BEEF_CAFE } else { seed },
        }
    }

    fn next_u64(&mut self) -> u64 {
        let mut x = self.state;
        x ^= x << 13;
        x ^= x >> 7;
        x ^= x << 17;
        self.state = x;
        x
    }
}

impl Default for CoinFlip {
    fn default() -> Self {
        Self::new(0x1234_5678)
    }
}

impl LevelDecider for CoinFlip {
    fn promote(&mut self) -> bool {
        self.next_u64() & 1 == 0
    }
}

impl<F: FnMut() -> bool> LevelDecider for F {
    fn promote(&mut self) -> bool {
        self()
    }
}

struct Node<K, V> {
    key: K,
    value: V,
    /// Successor at each level this node is linked into.
    next: Vec<Option<usize>>,
}

/// An ordered map stored as a skip list.
pub struct SkipList<K, V, D = CoinFlip> {
    nodes: Vec<Node<K, V>>,
    head: [Option<usize>; MAX_LEVEL],
    /// Levels in use.
    levels: usize,
    decider: D,
}

impl<K, V> SkipList<K, V> {
    /// Creates an empty list with the default coin flip.
    pub fn new() -> Self {
        Self::with_decider(CoinFlip::default())
    }

    /// Creates an empty list whose coin flip is seeded with `seed`.
    pub fn with_seed(seed: u64) -> Self {
        Self::with_decider(CoinFlip::new(seed))
    }
}

impl<K, V, D> SkipList<K, V, D> {
    /// Creates an empty list that promotes entries as `decider` says.
    pub fn with_decider(decider: D) -> Self {
        Self {
            nodes: Vec::new(),
            head: [None; MAX_LEVEL],
            levels: 0,
            decider,
        }
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Returns `true` if the list is empty.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Number of levels currently linked.
    pub fn levels(&self) -> usize {
        self.levels
    }

    /// Iterator over `(key, value)` pairs in key order.
    pub fn iter(&self) -> Iter<'_, K, V, D> {
        Iter {
            list: self,
            at: self.head[0],
        }
    }

    /// Successor of `at` (`None` is the head) on `level`.
    fn successor(&self, at: Option<usize>, level: usize) -> Option<usize> {
        match at {
            None => self.head[level],
            Some(i) => self.nodes[i].next.get(level).copied().flatten(),
        }
    }

    fn set_next(&mut self, at: Option<usize>, level: usize, to: Option<usize>) {
        match at {
            None => self.head[level] = to,
            Some(i) => self.nodes[i].next[level] = to,
        }
    }
}

impl<K: Ord, V, D> SkipList<K, V, D> {
    /// For each level in use, the last node whose key is below `key`.
    fn predecessors<Q>(&self, key: &Q) -> [Option<usize>; MAX_LEVEL]
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        let mut preds = [None; MAX_LEVEL];
        let mut at = None;
        for level in (0..self.levels).rev() {
            while let Some(n) = self.successor(at, level) {
                if self.nodes[n].key.borrow() < key {
                    at = Some(n);
                } else {
                    break;
                }
            }
            preds[level] = at;
        }
        preds
    }

    fn find<Q>(&self, key: &Q) -> Option<usize>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        let mut at = None;
        for level in (0..self.levels).rev() {
            while let Some(n) = self.successor(at, level) {
                match self.nodes[n].key.borrow().cmp(key) {
                    Ordering::Less => at = Some(n),
                    Ordering::Equal => return Some(n),
                    Ordering::Greater => break,
                }
            }
        }
        None
    }

    /// Returns the value stored under `key`.
    pub fn get<Q>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.find(key).map(|i| &self.nodes[i].value)
    }

    /// Returns a mutable reference to the value stored under `key`.
    pub fn get_mut<Q>(&mut self, key: &Q) -> Option<&mut V>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        let i = self.find(key)?;
        Some(&mut self.nodes[i].value)
    }

    /// Returns `true` if `key` is present.
    pub fn contains_key<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.find(key).is_some()
    }

    /// Replaces the value under an existing `key`, returning the old value.
    ///
    /// Does nothing and returns `None` if `key` is absent.
    pub fn update<Q>(&mut self, key: &Q, value: V) -> Option<V>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.get_mut(key).map(|slot| core::mem::replace(slot, value))
    }

    /// Removes `key`, returning its value.
    pub fn remove<Q>(&mut self, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        let preds = self.predecessors(key);
        let target = self
            .successor(preds[0], 0)
            .filter(|&n| self.nodes[n].key.borrow() == key)?;

        for level in 0..self.nodes[target].next.len() {
            if self.successor(preds[level], level) == Some(target) {
                let after = self.nodes[target].next[level];
                self.set_next(preds[level], level, after);
            }
        }
        while self.levels > 0 && self.head[self.levels - 1].is_none() {
            self.levels -= 1;
        }

        // `swap_remove` moves the last node into `target`; repoint its links first.
        let last = self.nodes.len() - 1;
        if target != last {
            let moved = self.predecessors::<K>(&self.nodes[last].key);
            for level in 0..self.nodes[last].next.len() {
                if self.successor(moved[level], level) == Some(last) {
                    self.set_next(moved[level], level, Some(target));
                }
            }
        }
        Some(self.nodes.swap_remove(target).value)
    }
}

impl<K: Ord, V, D: LevelDecider> SkipList<K, V, D> {
    fn random_level(&mut self) -> usize {
        let mut level = 1;
        while level < MAX_LEVEL && self.decider.promote() {
            level += 1;
        }
        level
    }

    /// Inserts `key` with `value`, returning the previous value for that key.
    pub fn insert(&mut self, key: K, value: V) -> Option<V> {
        let mut preds = self.predecessors(&key);
        if let Some(n) = self.successor(preds[0], 0) {
            if self.nodes[n].key == key {
                return Some(core::mem::replace(&mut self.nodes[n].value, value));
            }
        }

        let height = self.random_level();
        if height > self.levels {
            // New levels start at the head.
            for pred in &mut preds[self.levels..height] {
                *pred = None;
            }
            tracing::trace!(from = self.levels, to = height, "skip list grew");
            self.levels = height;
        }

        let idx = self.nodes.len();
        let next = (0..height).map(|level| self.successor(preds[level], level)).collect();
        self.nodes.push(Node { key, value, next });
        for (level, &pred) in preds.iter().enumerate().take(height) {
            self.set_next(pred, level, Some(idx));
        }
        None
    }
}

impl<K, V> Default for SkipList<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Ord, V> FromIterator<(K, V)> for SkipList<K, V> {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut list = Self::new();
        for (k, v) in iter {
            list.insert(k, v);
        }
        list
    }
}

impl<K: fmt::Debug, V: fmt::Debug, D> fmt::Debug for SkipList<K, V, D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

/// Iterator over a [`SkipList`] in key order.
pub struct Iter<'a, K, V, D> {
    list: &'a SkipList<K, V, D>,
    at: Option<usize>,
}

impl<'a, K, V, D> Iterator for Iter<'a, K, V, D> {
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        let i = self.at?;
        let node = &self.list.nodes[i];
        self.at = self.list.successor(Some(i), 0);
        Some((&node.key, &node.value))
    }
}
