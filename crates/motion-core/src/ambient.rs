//! Ambient pointer offset and its single-writer broadcast channel.

use glam::Vec2;
use std::cell::Cell;
use std::rc::Rc;

/// Directional signal derived from the pointer, read by background layers.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct AmbientOffset {
    pub mouse_x: f32,
    pub mouse_y: f32,
    pub normalized_x: f32,
    pub normalized_y: f32,
    pub parallax_x: f32,
    pub parallax_y: f32,
}

impl AmbientOffset {
    /// Derive the offset for `pointer` inside a `viewport` (width, height).
    ///
    /// Normalized values are roughly in [-1, 1] measured from the viewport centre.
    /// Parallax is `normalized * max_px`, clamped to `±max_px` so a pointer outside
    /// the viewport never pushes a layer further than the edge would.
    pub fn compute(pointer: Vec2, viewport: Vec2, max_px: f32) -> Self {
        let half = viewport * 0.5;
        let normalized = Vec2::new(
            if half.x > 0.0 { (pointer.x - half.x) / half.x } else { 0.0 },
            if half.y > 0.0 { (pointer.y - half.y) / half.y } else { 0.0 },
        );
        let bound = max_px.abs();
        let parallax = (normalized * bound).clamp(Vec2::splat(-bound), Vec2::splat(bound));
        Self {
            mouse_x: pointer.x,
            mouse_y: pointer.y,
            normalized_x: normalized.x,
            normalized_y: normalized.y,
            parallax_x: parallax.x,
            parallax_y: parallax.y,
        }
    }

    #[inline]
    pub fn parallax(&self) -> Vec2 {
        Vec2::new(self.parallax_x, self.parallax_y)
    }
}

#[derive(Debug, Default)]
struct Shared {
    value: Cell<AmbientOffset>,
    version: Cell<u64>,
}

/// Create the ambient channel. Exactly one writer exists per channel.
pub fn channel() -> (AmbientWriter, AmbientReader) {
    let shared = Rc::new(Shared::default());
    (
        AmbientWriter {
            shared: shared.clone(),
        },
        AmbientReader { shared },
    )
}

/// Sole publishing end. Deliberately not `Clone`.
#[derive(Debug)]
pub struct AmbientWriter {
    shared: Rc<Shared>,
}

impl AmbientWriter {
    pub fn publish(&mut self, offset: AmbientOffset) {
        self.shared.value.set(offset);
        self.shared.version.set(self.shared.version.get() + 1);
    }

    pub fn reader(&self) -> AmbientReader {
        AmbientReader {
            shared: self.shared.clone(),
        }
    }
}

/// Read-only polling end; clone freely.
#[derive(Clone, Debug)]
pub struct AmbientReader {
    shared: Rc<Shared>,
}

impl AmbientReader {
    #[inline]
    pub fn get(&self) -> AmbientOffset {
        self.shared.value.get()
    }

    /// Number of publishes so far; 0 means nothing has been written yet.
    #[inline]
    pub fn version(&self) -> u64 {
        self.shared.version.get()
    }

    /// The current value if it was published after `seen`.
    pub fn changed_since(&self, seen: u64) -> Option<(u64, AmbientOffset)> {
        let v = self.version();
        (v > seen).then(|| (v, self.get()))
    }
}
