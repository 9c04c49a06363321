//! Bounded per-key history and recency-weighted smoothing.

use std::collections::VecDeque;

use super::snapshot::Point;

/// Number of recent samples retained per landmark key.
pub const HISTORY_SIZE: usize = 5;

/// Bounded FIFO of the most recent samples for one landmark key.
///
/// Each push evicts the oldest sample beyond [`HISTORY_SIZE`] and
/// returns the linearly recency-weighted mean of what remains: the i-th
/// oldest of L samples carries weight `i / L`, so a single-sample
/// history returns that sample unchanged.
#[derive(Debug, Clone, Default)]
pub struct HistoryBuffer {
    points: VecDeque<Point>,
}

impl HistoryBuffer {
    pub fn new() -> Self {
        Self {
            points: VecDeque::with_capacity(HISTORY_SIZE),
        }
    }

    /// Append a sample and return the smoothed position.
    pub fn push(&mut self, point: Point) -> Point {
        if self.points.len() >= HISTORY_SIZE {
            self.points.pop_front();
        }
        self.points.push_back(point);
        self.weighted_mean()
    }

    fn weighted_mean(&self) -> Point {
        let len = self.points.len() as f32;
        let mut total_weight = 0.0;
        let mut sum = Point::default();

        for (i, point) in self.points.iter().enumerate() {
            let weight = (i as f32 + 1.0) / len;
            total_weight += weight;
            sum.x += point.x * weight;
            sum.y += point.y * weight;
            sum.z += point.z * weight;
        }

        Point {
            x: sum.x / total_weight,
            y: sum.y / total_weight,
            z: sum.z / total_weight,
        }
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn clear(&mut self) {
        self.points.clear();
    }
}

/// Fixed arena of history buffers, one slot per landmark key.
///
/// `N` is the key enum's variant count; slots are addressed by
/// `key.slot()` so there is no string lookup on the per-frame path.
#[derive(Debug, Clone)]
pub struct HistoryBank<const N: usize> {
    slots: [HistoryBuffer; N],
}

impl<const N: usize> HistoryBank<N> {
    pub fn new() -> Self {
        Self {
            slots: std::array::from_fn(|_| HistoryBuffer::new()),
        }
    }

    /// Push a sample into the given slot and return the smoothed position.
    pub fn push(&mut self, slot: usize, point: Point) -> Point {
        self.slots[slot].push(point)
    }

    pub fn slot_len(&self, slot: usize) -> usize {
        self.slots[slot].len()
    }

    /// Discard all accumulated history in every slot.
    pub fn clear(&mut self) {
        for slot in &mut self.slots {
            slot.clear();
        }
    }
}

impl<const N: usize> Default for HistoryBank<N> {
    fn default() -> Self {
        Self::new()
    }
}
