//! Per-query vertex state for graph traversals.
//!
//! - `VisitedFlags`: one flag per vertex (visited, on-stack, processed)
//! - `Predecessors`: the vertex each vertex was first reached from
//!
//! Both tolerate out-of-range ids on reads so callers can keep the
//! "no result" policy for bad input without bounds checks of their own.

/// A per-vertex flag vector.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct VisitedFlags {
    flags: Vec<bool>,
}

impl VisitedFlags {
    pub(crate) fn new(len: usize) -> Self {
        Self {
            flags: vec![false; len],
        }
    }

    /// `false` for ids outside the vector.
    #[inline(always)]
    pub(crate) fn is_visited(&self, idx: usize) -> bool {
        self.flags.get(idx).copied().unwrap_or(false)
    }

    #[inline(always)]
    pub(crate) fn mark(&mut self, idx: usize) {
        if let Some(flag) = self.flags.get_mut(idx) {
            *flag = true;
        }
    }

    #[inline(always)]
    pub(crate) fn unmark(&mut self, idx: usize) {
        if let Some(flag) = self.flags.get_mut(idx) {
            *flag = false;
        }
    }

    /// Returns `true` iff this call observed the vertex as not-yet-visited and marked it.
    #[inline(always)]
    pub(crate) fn try_visit(&mut self, idx: usize) -> bool {
        match self.flags.get_mut(idx) {
            Some(flag) if !*flag => {
                *flag = true;
                true
            }
            _ => false,
        }
    }

    pub(crate) fn count(&self) -> usize {
        self.flags.iter().filter(|&&f| f).count()
    }
}

/// Predecessor links of a search tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Predecessors {
    links: Vec<Option<usize>>,
}

impl Predecessors {
    pub(crate) fn new(len: usize) -> Self {
        Self {
            links: vec![None; len],
        }
    }

    #[inline(always)]
    pub(crate) fn get(&self, idx: usize) -> Option<usize> {
        self.links.get(idx).copied().flatten()
    }

    #[inline(always)]
    pub(crate) fn set(&mut self, idx: usize, prior: usize) {
        if let Some(link) = self.links.get_mut(idx) {
            *link = Some(prior);
        }
    }

    /// Walks links from `to` until `source`, returning `[to, ..., source]`.
    ///
    /// Stops early (without reaching `source`) at a vertex that has no link,
    /// and never walks more than `len` steps, so a malformed chain cannot loop.
    pub(crate) fn walk(&self, to: usize, source: usize) -> Vec<usize> {
        let mut path = vec![to];
        let mut current = to;
        while current != source && path.len() <= self.links.len() {
            match self.get(current) {
                Some(prior) => {
                    path.push(prior);
                    current = prior;
                }
                None => break,
            }
        }
        path
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_try_visit_marks_once() {
        let mut flags = VisitedFlags::new(3);
        assert!(flags.try_visit(1));
        assert!(!flags.try_visit(1));
        assert!(flags.is_visited(1));
        assert!(!flags.is_visited(0));
        assert!(!flags.try_visit(10));
        assert!(!flags.is_visited(10));
        assert_eq!(flags.count(), 1);

        flags.unmark(1);
        assert!(!flags.is_visited(1));
    }

    #[test]
    fn test_walk_follows_links_to_source() {
        let mut prior = Predecessors::new(4);
        prior.set(1, 0);
        prior.set(2, 1);
        prior.set(3, 2);
        assert_eq!(prior.walk(3, 0), vec![3, 2, 1, 0]);
        assert_eq!(prior.walk(0, 0), vec![0]);
        assert_eq!(prior.get(0), None);
        assert_eq!(prior.get(99), None);
    }

    #[test]
    fn test_walk_stops_at_missing_link() {
        let mut prior = Predecessors::new(3);
        prior.set(2, 1);
        assert_eq!(prior.walk(2, 0), vec![2, 1]);
    }
}
