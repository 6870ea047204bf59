use crate::constants::{TRAIL_CAPACITY, TRAIL_TTL};
use glam::Vec2;
use smallvec::SmallVec;
use std::time::Duration;

/// One pointer position with the time it was observed (since page origin).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointerSample {
    pub position: Vec2,
    pub at: Duration,
}

impl PointerSample {
    pub fn new(x: f32, y: f32, at: Duration) -> Self {
        Self {
            position: Vec2::new(x, y),
            at,
        }
    }
}

/// Short-lived history of recent samples for the trailing cursor.
///
/// Holds at most `capacity` samples (never more than [`TRAIL_CAPACITY`]), newest last.
/// A sample older than `ttl` relative to the query time is treated as gone.
#[derive(Clone, Debug)]
pub struct PointerTrail {
    samples: SmallVec<[PointerSample; TRAIL_CAPACITY]>,
    capacity: usize,
    ttl: Duration,
}

impl Default for PointerTrail {
    fn default() -> Self {
        Self::new(TRAIL_CAPACITY, TRAIL_TTL)
    }
}

impl PointerTrail {
    pub fn new(capacity: usize, ttl: Duration) -> Self {
        Self {
            samples: SmallVec::new(),
            capacity: capacity.clamp(1, TRAIL_CAPACITY),
            ttl,
        }
    }

    pub fn push(&mut self, sample: PointerSample) {
        self.prune(sample.at);
        if self.samples.len() == self.capacity {
            self.samples.remove(0);
        }
        self.samples.push(sample);
    }

    /// Drop every sample that has expired at `now`.
    pub fn prune(&mut self, now: Duration) {
        let ttl = self.ttl;
        self.samples.retain(|s| now.saturating_sub(s.at) <= ttl);
    }

    /// Live samples at `now`, oldest first, each with its remaining life in [0, 1].
    pub fn live(&self, now: Duration) -> impl Iterator<Item = (PointerSample, f32)> + '_ {
        let ttl = self.ttl.as_secs_f32().max(f32::EPSILON);
        self.samples.iter().filter_map(move |s| {
            let age = now.saturating_sub(s.at);
            (age <= self.ttl).then(|| (*s, 1.0 - age.as_secs_f32() / ttl))
        })
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn latest(&self) -> Option<PointerSample> {
        self.samples.last().copied()
    }

    pub fn clear(&mut self) {
        self.samples.clear();
    }
}
