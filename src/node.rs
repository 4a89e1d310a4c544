//! Arena node model.
//!
//! Every node of every row lives in one growable arena owned by the list;
//! neighbor links are arena indices, with `None` marking a legitimately
//! absent neighbor (sentinels and column boundaries). Removed nodes have
//! their slots vacated and recycled through a free list.

/// Arena index type. u32 saves space vs usize on 64-bit.
pub(crate) type Idx = u32;

/// Payload of one arena slot.
pub(crate) enum Slot<V> {
    /// Left boundary of a row; score −∞, skip count permanently 0.
    LeftSentinel,
    /// Right boundary of a row; score +∞.
    RightSentinel,
    /// Base-row entry carrying the value.
    Entry { score: f64, value: V },
    /// Upper-level node of an entry's column; the value lives at the base.
    Pillar { score: f64 },
    /// Freed slot awaiting reuse. Never linked into a row.
    Vacant,
}

impl<V> Slot<V> {
    pub(crate) fn score(&self) -> f64 {
        match self {
            Slot::LeftSentinel => f64::NEG_INFINITY,
            Slot::RightSentinel => f64::INFINITY,
            Slot::Entry { score, .. } | Slot::Pillar { score } => *score,
            Slot::Vacant => f64::NAN,
        }
    }
}

/// One node at one level.
pub(crate) struct Node<V> {
    pub(crate) slot: Slot<V>,
    /// Base-row entries spanned between this node's left neighbor
    /// (exclusive) and this node (inclusive). Always 0 on a left sentinel.
    pub(crate) skip: usize,
    pub(crate) left: Option<Idx>,
    pub(crate) right: Option<Idx>,
    pub(crate) up: Option<Idx>,
    pub(crate) down: Option<Idx>,
}

impl<V> Node<V> {
    pub(crate) fn new(slot: Slot<V>) -> Self {
        Node {
            slot,
            skip: 0,
            left: None,
            right: None,
            up: None,
            down: None,
        }
    }

    pub(crate) fn score(&self) -> f64 {
        self.slot.score()
    }
}

/// Sentinel pair bounding one level.
#[derive(Clone, Copy)]
pub(crate) struct Row {
    pub(crate) left: Idx,
    pub(crate) right: Idx,
}
