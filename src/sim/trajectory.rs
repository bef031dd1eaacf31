//! Capacity-bounded trajectory of render-space points

use std::collections::VecDeque;

use glam::DVec3;

use crate::consts::MAX_POINTS_LIMIT;

/// Ordered centerline points, oldest first
#[derive(Debug, Clone, Default)]
pub struct TrajectoryBuffer {
    points: VecDeque<DVec3>,
    capacity: usize,
}

impl TrajectoryBuffer {
    pub fn new(capacity: usize) -> Self {
        Self {
            points: VecDeque::with_capacity(capacity.min(MAX_POINTS_LIMIT)),
            capacity,
        }
    }

    /// Maximum number of points retained after a trim
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Append the newest point
    #[inline]
    pub fn append(&mut self, point: DVec3) {
        self.points.push_back(point);
    }

    /// Evict `batch` oldest points if the buffer is over capacity.
    ///
    /// Eviction happens in whole batches, so the length may settle below
    /// capacity. If appends ran ahead of trims by more than one batch, enough
    /// extra points are dropped to get back under capacity.
    pub fn trim_if_overflow(&mut self, batch: usize) -> usize {
        let len = self.points.len();
        if len <= self.capacity {
            return 0;
        }
        let evict = batch.max(len - self.capacity).min(len);
        self.points.drain(..evict);
        evict
    }

    pub fn clear(&mut self) {
        self.points.clear();
    }

    /// Points in temporal order as one contiguous slice
    pub fn points(&mut self) -> &[DVec3] {
        self.points.make_contiguous()
    }

    /// Most recently appended point
    pub fn newest(&self) -> Option<DVec3> {
        self.points.back().copied()
    }
}
