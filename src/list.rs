//! The rank-indexed skip list engine.
//!
//! Entries are kept in ascending score order across a stack of doubly
//! linked rows. Each node carries a skip count: the number of base-row
//! entries between its left neighbor (exclusive) and itself (inclusive).
//! Summing skip counts along a search path yields an entry's rank without
//! a base-row scan, which is what makes `at` and `index_of_score` run in
//! expected O(log n).
//!
//! Three access paths share the structure:
//!
//! - by key, through a hash index onto the base row (`get`, `remove`)
//! - by rank, descending the row stack (`at`)
//! - by score, the same descent keyed on scores (`index_of_score`,
//!   `range_by_score`)
//!
//! The list is single-threaded and never reclaims rows; node slots are
//! recycled through a free list.

use std::borrow::Borrow;
use std::fmt::Write as _;
use std::hash::Hash;

use rustc_hash::FxHashMap;
use smallvec::SmallVec;

use crate::error::{Error, Result};
use crate::level::{DEFAULT_SIZE_HINT, LevelSampler};
use crate::node::{Idx, Node, Row, Slot};
use crate::trace::trace_op;

/// A score-ordered map with O(1) key lookup and O(log n) rank and range
/// queries.
///
/// Scores are `f64`; NaN scores are not supported. Among equal scores the
/// most recently inserted entry takes the lowest rank.
pub struct SkipList<K, V> {
    /// Arena of nodes; all rows index into it.
    nodes: Vec<Node<V>>,
    /// Recycled arena slots.
    free_list: Vec<Idx>,
    /// Sentinel pair of the current highest row.
    top: Row,
    /// Key to base-row node.
    index: FxHashMap<K, Idx>,
    sampler: LevelSampler,
    len: usize,
}

impl<K: Hash + Eq, V> SkipList<K, V> {
    pub fn new() -> Self {
        Self::with_size_hint(DEFAULT_SIZE_HINT)
    }

    /// The size hint sets the column height cap and the key index's
    /// initial capacity; it does not preallocate rows.
    pub fn with_size_hint(size_hint: usize) -> Self {
        Self::build(size_hint, LevelSampler::from_entropy(size_hint))
    }

    /// Like [`with_size_hint`](Self::with_size_hint), but with a seeded
    /// height sampler so column heights are reproducible.
    pub fn with_seed(size_hint: usize, seed: u64) -> Self {
        Self::build(size_hint, LevelSampler::from_seed(size_hint, seed))
    }

    fn build(size_hint: usize, sampler: LevelSampler) -> Self {
        let mut list = SkipList {
            nodes: Vec::new(),
            free_list: Vec::new(),
            top: Row { left: 0, right: 0 },
            index: FxHashMap::with_capacity_and_hasher(size_hint, Default::default()),
            sampler,
            len: 0,
        };
        let left = list.alloc(Slot::LeftSentinel);
        let right = list.alloc(Slot::RightSentinel);
        list.node_mut(left).right = Some(right);
        list.node_mut(right).left = Some(left);
        list.top = Row { left, right };
        list
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Adjust a node's skip count. The left sentinel's is permanently
    /// zero, so reaching one here means a walk went wrong.
    fn add_skip(&mut self, idx: Idx, delta: isize) -> Result<()> {
        if matches!(self.node(idx).slot, Slot::LeftSentinel) {
            return Err(Error::InvalidSentinelMutation(idx));
        }
        let node = self.node_mut(idx);
        debug_assert!(node.skip as isize + delta >= 0);
        node.skip = (node.skip as isize + delta) as usize;
        Ok(())
    }

    // --- Public operations ---

    /// Insert or overwrite. Overwriting a present key removes its whole
    /// column first and inserts a fresh one; there is no score update in
    /// place, so the entry's position among equal scores resets.
    pub fn put(&mut self, key: K, value: V, score: f64) -> Result<()> {
        debug_assert!(!score.is_nan(), "NaN scores are not supported");
        if self.index.contains_key(&key) {
            self.remove(&key)?;
        }
        self.insert(key, value, score)
    }

    /// Look a key up without touching the rows. O(1), never mutates.
    pub fn get<Q>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let idx = *self.index.get(key)?;
        match &self.node(idx).slot {
            Slot::Entry { value, .. } => Some(value),
            _ => None,
        }
    }

    /// Remove a key's entry and return its value.
    ///
    /// A key that is not present reports [`Error::KeyNotFound`].
    pub fn remove<Q>(&mut self, key: &Q) -> Result<V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let base = self.index.remove(key).ok_or(Error::KeyNotFound)?;
        trace_op!(node = base, "remove");

        // Splice the column out row by row, bottom up. At each row the new
        // right neighbor absorbs the removed node's span minus the one
        // slot that disappeared.
        let mut column: SmallVec<[Idx; 8]> = SmallVec::new();
        let mut cursor = base;
        let top = loop {
            column.push(cursor);
            let right = self.right_of(cursor)?;
            let left = self.left_of(cursor)?;
            self.node_mut(left).right = Some(right);
            self.node_mut(right).left = Some(left);
            let removed_skip = self.node(cursor).skip;
            self.add_skip(right, removed_skip as isize - 1)?;
            match self.node(cursor).up {
                Some(up) => cursor = up,
                None => break cursor,
            }
        };

        // The spliced top node keeps its own links, so the repair walk can
        // still step off it into the rows above.
        self.repair_ancestors(top, -1)?;

        let mut value = None;
        for idx in column {
            if let Slot::Entry { value: v, .. } = self.free(idx) {
                value = Some(v);
            }
        }
        self.len -= 1;
        self.check_invariants();
        value.ok_or(Error::NotAnEntry(base))
    }

    /// Value of the entry with the i-th smallest score, or `None` when
    /// `rank` is outside `[0, len)`.
    pub fn at(&self, rank: usize) -> Result<Option<&V>> {
        let Some(found) = self.node_at(rank)? else {
            return Ok(None);
        };
        let base = self.base_of(found);
        match &self.node(base).slot {
            Slot::Entry { value, .. } => Ok(Some(value)),
            _ => Err(Error::NotAnEntry(base)),
        }
    }

    /// Number of entries with score strictly less than `score`.
    pub fn index_of_score(&self, score: f64) -> Result<usize> {
        let mut position = 0;
        let mut current = self.top.left;
        loop {
            let next = self.right_of(current)?;
            if self.node(next).score() < score {
                position += self.node(next).skip;
                current = next;
                continue;
            }
            match self.node(current).down {
                Some(down) => current = down,
                None => return Ok(position),
            }
        }
    }

    /// Lazy forward iteration over values with score in
    /// `[min_inclusive, max_exclusive)`, ascending. Single pass; call
    /// again for a fresh traversal.
    pub fn range_by_score(&self, min_inclusive: f64, max_exclusive: f64) -> Result<Range<'_, K, V>> {
        let start = self.index_of_score(min_inclusive)?;
        let cursor = match self.node_at(start)? {
            Some(found) => Some(self.base_of(found)),
            None => None,
        };
        Ok(Range {
            list: self,
            cursor,
            max_exclusive,
        })
    }

    /// Multi-line rendering of every row, top row first. Diagnostic only;
    /// the format is not stable.
    pub fn dump(&self) -> String
    where
        V: std::fmt::Debug,
    {
        let mut out = String::from("{\n");
        let mut row_left = Some(self.top.left);
        while let Some(left) = row_left {
            let mut line = String::new();
            let mut cursor = Some(left);
            while let Some(idx) = cursor {
                let node = self.node(idx);
                if !line.is_empty() {
                    line.push_str(", ");
                }
                match &node.slot {
                    Slot::LeftSentinel => {
                        let _ = write!(line, "[LEFT skip: {}]", node.skip);
                    }
                    Slot::RightSentinel => {
                        let _ = write!(line, "[RIGHT skip: {}]", node.skip);
                    }
                    Slot::Entry { score, value } => {
                        let _ = write!(line, "[val: {value:?} score: {score} skip: {}]", node.skip);
                    }
                    Slot::Pillar { score } => {
                        let _ = write!(line, "[col score: {score} skip: {}]", node.skip);
                    }
                    Slot::Vacant => line.push_str("[vacant]"),
                }
                cursor = node.right;
            }
            out.push_str(&line);
            out.push('\n');
            row_left = self.node(left).down;
        }
        out.push('}');
        out
    }

    // --- Insertion engine ---

    /// Requires `key` to be absent; `put` guarantees it.
    fn insert(&mut self, key: K, value: V, score: f64) -> Result<()> {
        let height = self.sampler.sample();
        let right = self.insert_point(score)?;
        let left = self.left_of(right)?;

        // Base node spans only itself.
        let base = self.alloc(Slot::Entry { score, value });
        self.node_mut(base).left = Some(left);
        self.node_mut(base).right = Some(right);
        self.node_mut(base).skip = 1;
        self.node_mut(right).left = Some(base);
        self.node_mut(left).right = Some(base);
        trace_op!(node = base, score, height, "insert");

        let mut below = base;
        let mut bound_left = left;
        let mut bound_right = right;
        for _ in 1..height {
            // Entries walked over on the way to this level's boundaries
            // end up hidden beneath the new node's span.
            let mut distance_to_left = self.node(below).skip;

            bound_right = loop {
                let node = self.node(bound_right);
                if let Some(up) = node.up {
                    break up;
                }
                match node.right {
                    Some(right) => bound_right = right,
                    // Ran off the top row: grow one. The next pass finds
                    // the fresh sentinel through the new up link.
                    None => self.grow_top_row()?,
                }
            };
            bound_left = loop {
                let node = self.node(bound_left);
                if let Some(up) = node.up {
                    break up;
                }
                distance_to_left += node.skip;
                bound_left = self.left_of(bound_left)?;
            };

            let pillar = self.alloc(Slot::Pillar { score });
            self.node_mut(pillar).left = Some(bound_left);
            self.node_mut(pillar).right = Some(bound_right);
            self.node_mut(pillar).down = Some(below);
            self.node_mut(pillar).skip = distance_to_left;
            self.node_mut(below).up = Some(pillar);
            // The right boundary's span now starts just after the pillar.
            self.add_skip(bound_right, 1 - distance_to_left as isize)?;
            self.node_mut(bound_right).left = Some(pillar);
            self.node_mut(bound_left).right = Some(pillar);
            below = pillar;
        }

        self.repair_ancestors(bound_right, 1)?;
        self.len += 1;
        self.index.insert(key, base);
        self.check_invariants();
        Ok(())
    }

    /// Base-row node with the smallest score >= the target; among equal
    /// scores the new entry lands to the left of the whole group.
    fn insert_point(&self, score: f64) -> Result<Idx> {
        let mut current = self.top.left;
        loop {
            let next = self.right_of(current)?;
            if self.node(next).score() < score {
                current = next;
                continue;
            }
            match self.node(current).down {
                Some(down) => current = down,
                None => return Ok(next),
            }
        }
    }

    /// Stack a fresh sentinel pair above the current top row. The new
    /// right sentinel's skip count is primed with the base-row population,
    /// which during an insertion already includes the entry being linked.
    fn grow_top_row(&mut self) -> Result<()> {
        let left = self.alloc(Slot::LeftSentinel);
        let right = self.alloc(Slot::RightSentinel);
        let old = self.top;
        self.node_mut(left).right = Some(right);
        self.node_mut(left).down = Some(old.left);
        self.node_mut(right).left = Some(left);
        self.node_mut(right).down = Some(old.right);
        self.node_mut(old.left).up = Some(left);
        self.node_mut(old.right).up = Some(right);
        self.add_skip(right, self.len as isize + 1)?;
        self.top = Row { left, right };
        trace_op!(left, right, "grow top row");
        Ok(())
    }

    /// Propagate a size change to every row above a column: climb when an
    /// up link exists (that ancestor's span covers the column), otherwise
    /// step right, stopping at the top-right sentinel.
    fn repair_ancestors(&mut self, start: Idx, delta: isize) -> Result<()> {
        let mut cursor = start;
        loop {
            let node = self.node(cursor);
            if let Some(up) = node.up {
                cursor = up;
                self.add_skip(cursor, delta)?;
            } else if let Some(right) = node.right {
                cursor = right;
            } else {
                return Ok(());
            }
        }
    }

    // --- Rank descent ---

    /// Node holding the entry of the given rank, possibly at an upper
    /// level of its column. `None` outside `[0, len)`.
    fn node_at(&self, rank: usize) -> Result<Option<Idx>> {
        if rank >= self.len {
            return Ok(None);
        }
        // 1-based so accumulated skip sums compare against it directly.
        let target = rank + 1;
        let mut position = 0;
        let mut current = self.top.left;
        let mut next = self.right_of(current)?;
        loop {
            while position + self.node(next).skip > target {
                current = self.down_of(current)?;
                next = self.right_of(current)?;
            }
            if position + self.node(next).skip == target {
                return Ok(Some(next));
            }
            position += self.node(next).skip;
            current = next;
            next = self.right_of(current)?;
        }
    }

    /// Bottom of a node's column.
    fn base_of(&self, mut idx: Idx) -> Idx {
        while let Some(down) = self.node(idx).down {
            idx = down;
        }
        idx
    }

    // --- Invariant checking ---

    /// Full structural validation: per-row span sums, base-row ordering,
    /// column consistency, and key-index agreement. Mutating operations
    /// run this in debug builds; release builds compile it out.
    #[cfg(debug_assertions)]
    fn check_invariants(&self) {
        // 1-based base rank of every entry.
        let mut base_rank: FxHashMap<Idx, usize> = FxHashMap::default();
        let base_left = self.base_of(self.top.left);
        let mut rank = 0usize;
        let mut prev_score = f64::NEG_INFINITY;
        let mut cursor = self.node(base_left).right;
        while let Some(idx) = cursor {
            let node = self.node(idx);
            if let Slot::Entry { score, .. } = node.slot {
                rank += 1;
                base_rank.insert(idx, rank);
                assert!(prev_score <= score, "base row out of score order");
                prev_score = score;
                assert_eq!(node.skip, 1, "base entries span only themselves");
            }
            cursor = node.right;
        }
        assert_eq!(rank, self.len, "len disagrees with base row population");
        assert_eq!(self.index.len(), self.len, "key index size mismatch");
        for &idx in self.index.values() {
            assert!(
                base_rank.contains_key(&idx),
                "key index points off the base row"
            );
        }

        // Walking any row left to right, the running skip sum at a node
        // equals the base rank of that node's column. Full rows account
        // for every entry (the base row's right sentinel spans nothing;
        // upper right sentinels also count their own slot).
        let mut row_left = Some(self.top.left);
        while let Some(left) = row_left {
            let is_base = self.node(left).down.is_none();
            assert_eq!(self.node(left).skip, 0, "left sentinel skip must stay 0");
            let mut prefix = 0usize;
            let mut cursor = self.node(left).right;
            while let Some(idx) = cursor {
                let node = self.node(idx);
                prefix += node.skip;
                match node.slot {
                    Slot::Entry { .. } | Slot::Pillar { .. } => {
                        let base = self.base_of(idx);
                        assert_eq!(
                            base_rank.get(&base),
                            Some(&prefix),
                            "skip prefix disagrees with base rank"
                        );
                    }
                    Slot::RightSentinel => {
                        let expected = if is_base { self.len } else { self.len + 1 };
                        assert_eq!(prefix, expected, "row span sum mismatch");
                        assert!(node.right.is_none(), "right sentinel has a right link");
                    }
                    _ => panic!("unexpected slot linked into a row"),
                }
                cursor = node.right;
            }
            row_left = self.node(left).down;
        }
    }

    #[cfg(not(debug_assertions))]
    #[inline(always)]
    fn check_invariants(&self) {}
}

// Arena plumbing never looks at the key type, so it lives outside the
// `Hash + Eq` bound and stays callable from the range iterator.
impl<K, V> SkipList<K, V> {
    fn node(&self, idx: Idx) -> &Node<V> {
        &self.nodes[idx as usize]
    }

    fn node_mut(&mut self, idx: Idx) -> &mut Node<V> {
        &mut self.nodes[idx as usize]
    }

    fn alloc(&mut self, slot: Slot<V>) -> Idx {
        if let Some(idx) = self.free_list.pop() {
            *self.node_mut(idx) = Node::new(slot);
            idx
        } else {
            let idx = self.nodes.len() as Idx;
            self.nodes.push(Node::new(slot));
            idx
        }
    }

    /// Vacate a slot and recycle its index, returning the old payload.
    fn free(&mut self, idx: Idx) -> Slot<V> {
        self.free_list.push(idx);
        let node = self.node_mut(idx);
        node.skip = 0;
        node.left = None;
        node.right = None;
        node.up = None;
        node.down = None;
        std::mem::replace(&mut node.slot, Slot::Vacant)
    }

    fn right_of(&self, idx: Idx) -> Result<Idx> {
        self.node(idx).right.ok_or(Error::MissingRightLink(idx))
    }

    fn left_of(&self, idx: Idx) -> Result<Idx> {
        self.node(idx).left.ok_or(Error::MissingLeftLink(idx))
    }

    fn down_of(&self, idx: Idx) -> Result<Idx> {
        self.node(idx).down.ok_or(Error::MissingDownLink(idx))
    }
}

impl<K: Hash + Eq, V> Default for SkipList<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

/// Forward iterator over a score interval, produced by
/// [`SkipList::range_by_score`]. Borrows the list, so the list cannot be
/// mutated while the iterator is alive.
pub struct Range<'a, K, V> {
    list: &'a SkipList<K, V>,
    cursor: Option<Idx>,
    max_exclusive: f64,
}

impl<'a, K, V> Iterator for Range<'a, K, V> {
    type Item = &'a V;

    fn next(&mut self) -> Option<&'a V> {
        let idx = self.cursor?;
        let node = self.list.node(idx);
        match &node.slot {
            Slot::Entry { score, value } if *score < self.max_exclusive => {
                self.cursor = node.right;
                Some(value)
            }
            // A sentinel or an out-of-range score ends the walk.
            _ => {
                self.cursor = None;
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seeded() -> SkipList<u32, &'static str> {
        SkipList::with_seed(0x1000, 0xdecade)
    }

    #[test]
    fn empty_list() {
        let list: SkipList<u32, &str> = seeded();
        assert_eq!(list.len(), 0);
        assert!(list.is_empty());
        assert_eq!(list.get(&1), None);
        assert_eq!(list.at(0), Ok(None));
        assert_eq!(list.index_of_score(10.0), Ok(0));
    }

    #[test]
    fn put_then_get_roundtrip() {
        let mut list = seeded();
        list.put(1, "one", 10.0).unwrap();
        assert_eq!(list.len(), 1);
        assert_eq!(list.get(&1), Some(&"one"));
        assert_eq!(list.at(0), Ok(Some(&"one")));
        assert_eq!(list.at(1), Ok(None));
    }

    #[test]
    fn remove_then_get_is_absent() {
        let mut list = seeded();
        list.put(1, "one", 10.0).unwrap();
        assert_eq!(list.remove(&1), Ok("one"));
        assert_eq!(list.len(), 0);
        assert_eq!(list.get(&1), None);
        assert_eq!(list.at(0), Ok(None));
    }

    #[test]
    fn remove_missing_key_is_reported() {
        let mut list = seeded();
        list.put(1, "one", 10.0).unwrap();
        assert_eq!(list.remove(&2), Err(Error::KeyNotFound));
        assert_eq!(list.len(), 1);
    }

    #[test]
    fn ranks_follow_scores_not_insertion_order() {
        let mut list = seeded();
        list.put(1, "c", 30.0).unwrap();
        list.put(2, "a", 10.0).unwrap();
        list.put(3, "e", 50.0).unwrap();
        list.put(4, "b", 20.0).unwrap();
        list.put(5, "d", 40.0).unwrap();

        let ranked: Vec<_> = (0..5).map(|i| *list.at(i).unwrap().unwrap()).collect();
        assert_eq!(ranked, ["a", "b", "c", "d", "e"]);
    }

    #[test]
    fn equal_scores_rank_newest_first() {
        let mut list = seeded();
        list.put(1, "first", 10.0).unwrap();
        list.put(2, "second", 10.0).unwrap();
        list.put(3, "third", 10.0).unwrap();

        assert_eq!(list.at(0), Ok(Some(&"third")));
        assert_eq!(list.at(1), Ok(Some(&"second")));
        assert_eq!(list.at(2), Ok(Some(&"first")));
    }

    #[test]
    fn overwrite_rebuilds_the_entry() {
        let mut list = seeded();
        list.put(1, "Alice", 10.0).unwrap();
        list.put(2, "Bob", 20.0).unwrap();
        list.put(3, "Chuck", 30.0).unwrap();
        list.put(4, "Dan", 40.0).unwrap();
        list.put(5, "Erin", 50.0).unwrap();

        let before: Vec<_> = (0..5).map(|i| *list.at(i).unwrap().unwrap()).collect();
        assert_eq!(before, ["Alice", "Bob", "Chuck", "Dan", "Erin"]);

        // Key 1 moves from score 10 to 35 with a new value.
        list.put(1, "Franc", 35.0).unwrap();
        assert_eq!(list.len(), 5);

        let after: Vec<_> = (0..5).map(|i| *list.at(i).unwrap().unwrap()).collect();
        assert_eq!(after, ["Bob", "Chuck", "Franc", "Dan", "Erin"]);
        assert_eq!(list.get(&1), Some(&"Franc"));
    }

    #[test]
    fn index_of_score_counts_strictly_smaller() {
        let mut list = seeded();
        list.put(1, "a", 10.0).unwrap();
        list.put(2, "b", 20.0).unwrap();
        list.put(3, "b2", 20.0).unwrap();
        list.put(4, "c", 30.0).unwrap();

        assert_eq!(list.index_of_score(5.0), Ok(0));
        assert_eq!(list.index_of_score(10.0), Ok(0));
        assert_eq!(list.index_of_score(15.0), Ok(1));
        assert_eq!(list.index_of_score(20.0), Ok(1));
        assert_eq!(list.index_of_score(25.0), Ok(3));
        assert_eq!(list.index_of_score(100.0), Ok(4));
    }

    #[test]
    fn range_is_min_inclusive_max_exclusive() {
        let mut list = seeded();
        list.put(1, "a", 10.0).unwrap();
        list.put(2, "b", 20.0).unwrap();
        list.put(3, "c", 30.0).unwrap();
        list.put(4, "d", 40.0).unwrap();

        let mid: Vec<_> = list.range_by_score(20.0, 40.0).unwrap().copied().collect();
        assert_eq!(mid, ["b", "c"]);

        let all: Vec<_> = list.range_by_score(0.0, 100.0).unwrap().copied().collect();
        assert_eq!(all, ["a", "b", "c", "d"]);

        let none: Vec<_> = list.range_by_score(41.0, 100.0).unwrap().copied().collect();
        assert!(none.is_empty());

        let inverted: Vec<_> = list.range_by_score(30.0, 30.0).unwrap().copied().collect();
        assert!(inverted.is_empty());
    }

    #[test]
    fn range_on_empty_list() {
        let list: SkipList<u32, &str> = seeded();
        let got: Vec<_> = list.range_by_score(0.0, 100.0).unwrap().copied().collect();
        assert!(got.is_empty());
    }

    #[test]
    fn range_iterates_under_any_key_type() {
        // Compiles only while the iterator asks nothing of the key type.
        fn drain<K, V>(range: Range<'_, K, V>) -> Vec<&V> {
            range.collect()
        }

        let mut list = seeded();
        list.put(1, "one", 10.0).unwrap();
        list.put(2, "two", 20.0).unwrap();
        let got = drain(list.range_by_score(0.0, 100.0).unwrap());
        assert_eq!(got, [&"one", &"two"]);
    }

    #[test]
    fn seeded_lists_build_identical_structures() {
        let mut a = SkipList::with_seed(0x1000, 31);
        let mut b = SkipList::with_seed(0x1000, 31);
        for i in 0..50u32 {
            a.put(i, i, (i % 7) as f64).unwrap();
            b.put(i, i, (i % 7) as f64).unwrap();
        }
        assert_eq!(a.dump(), b.dump());
    }

    #[test]
    fn dump_renders_every_row() {
        let mut list = seeded();
        for i in 0..20u32 {
            list.put(i, "x", i as f64).unwrap();
        }
        let dump = list.dump();
        assert!(dump.starts_with("{\n"));
        assert!(dump.ends_with('}'));
        // Every row shows both sentinels.
        for line in dump.lines().filter(|l| l.starts_with('[')) {
            assert!(line.starts_with("[LEFT"), "row missing left sentinel: {line}");
            assert!(line.ends_with(']'), "row missing right sentinel: {line}");
            assert!(line.contains("[RIGHT"), "row missing right sentinel: {line}");
        }
    }

    #[test]
    fn interleaved_puts_and_removes_hold_up() {
        let mut list = SkipList::with_seed(0, 7);
        for i in 0..300u32 {
            list.put(i, i, ((i * 37) % 50) as f64).unwrap();
        }
        assert_eq!(list.len(), 300);

        for i in (0..300).step_by(2) {
            list.remove(&i).unwrap();
        }
        assert_eq!(list.len(), 150);

        for i in 0..300u32 {
            if i % 2 == 0 {
                assert_eq!(list.get(&i), None);
            } else {
                assert_eq!(list.get(&i), Some(&i));
            }
        }

        // Scores stay sorted across the survivors.
        let mut prev = f64::NEG_INFINITY;
        for rank in 0..list.len() {
            let v = *list.at(rank).unwrap().unwrap();
            let score = ((v * 37) % 50) as f64;
            assert!(prev <= score, "rank {rank} out of order");
            prev = score;
        }
    }

    #[test]
    fn tiny_size_hint_still_works() {
        let mut list = SkipList::with_seed(0, 3);
        for i in 0..100u32 {
            list.put(i, i, i as f64).unwrap();
        }
        assert_eq!(list.len(), 100);
        for i in 0..100 {
            assert_eq!(list.at(i as usize), Ok(Some(&i)));
        }
    }
}
