//! Magnetic hover: an element leans toward the pointer within a clamped radius.

use crate::capabilities::Capabilities;
use crate::constants::{MAGNET_HOVER_TRANSITION_MS, MAGNET_RELEASE_TRANSITION_MS};
use crate::schedule::{FrameSlot, Scheduler, TaskId};
use glam::Vec2;

/// Live layout of the hovered element. Rebuilt from the element's rectangle on every
/// move so scrolling or reflow never leaves a stale centre behind.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MagnetTarget {
    pub center_x: f32,
    pub center_y: f32,
    pub width: f32,
    pub height: f32,
}

impl MagnetTarget {
    pub fn from_rect(left: f32, top: f32, width: f32, height: f32) -> Self {
        Self {
            center_x: left + width / 2.0,
            center_y: top + height / 2.0,
            width,
            height,
        }
    }

    #[inline]
    pub fn center(&self) -> Vec2 {
        Vec2::new(self.center_x, self.center_y)
    }
}

/// `clamp((pointer - centre) * intensity, -max, max)` on each axis independently.
pub fn attraction(target: &MagnetTarget, pointer: Vec2, intensity: f32, max_px: f32) -> Vec2 {
    let bound = Vec2::splat(max_px.abs());
    ((pointer - target.center()) * intensity).clamp(-bound, bound)
}

/// Which transition the element should animate with.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Easing {
    /// Short ease while following the pointer.
    Follow,
    /// Longer ease when returning to rest.
    Settle,
}

impl Easing {
    pub fn duration_ms(self) -> u32 {
        match self {
            Easing::Follow => MAGNET_HOVER_TRANSITION_MS,
            Easing::Settle => MAGNET_RELEASE_TRANSITION_MS,
        }
    }
}

/// Style change for the host to apply to the element.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MagnetUpdate {
    pub translate: Vec2,
    pub easing: Option<Easing>,
}

pub struct MagneticController {
    enabled: bool,
    intensity: f32,
    max_px: f32,
    hovering: bool,
    slot: FrameSlot<Vec2>,
    applied: Vec2,
    torn_down: bool,
}

impl MagneticController {
    pub fn new(capabilities: Capabilities, intensity: f32, max_px: f32) -> Self {
        Self {
            enabled: capabilities.allows_pointer_effects(),
            intensity,
            max_px,
            hovering: false,
            slot: FrameSlot::default(),
            applied: Vec2::ZERO,
            torn_down: false,
        }
    }

    #[inline]
    fn live(&self) -> bool {
        self.enabled && !self.torn_down
    }

    pub fn pointer_enter(&mut self) -> Option<MagnetUpdate> {
        if !self.live() {
            return None;
        }
        self.hovering = true;
        Some(MagnetUpdate {
            translate: self.applied,
            easing: Some(Easing::Follow),
        })
    }

    /// `target` is `None` once the element has left the layout; the move is dropped.
    pub fn pointer_move(
        &mut self,
        scheduler: &mut dyn Scheduler,
        pointer: Vec2,
        target: Option<MagnetTarget>,
    ) {
        if !self.live() || !self.hovering {
            return;
        }
        let Some(target) = target else {
            self.slot.cancel(scheduler);
            return;
        };
        let translate = attraction(&target, pointer, self.intensity, self.max_px);
        self.slot.submit(scheduler, translate);
    }

    pub fn on_frame(&mut self, task: TaskId) -> Option<MagnetUpdate> {
        if !self.live() {
            return None;
        }
        let translate = self.slot.fire(task)?;
        self.applied = translate;
        Some(MagnetUpdate {
            translate,
            easing: None,
        })
    }

    pub fn pointer_leave(&mut self, scheduler: &mut dyn Scheduler) -> Option<MagnetUpdate> {
        if !self.live() {
            return None;
        }
        self.hovering = false;
        self.slot.cancel(scheduler);
        self.applied = Vec2::ZERO;
        Some(MagnetUpdate {
            translate: Vec2::ZERO,
            easing: Some(Easing::Settle),
        })
    }

    /// Release the pending frame. Every later call is a no-op.
    pub fn teardown(&mut self, scheduler: &mut dyn Scheduler) {
        self.slot.cancel(scheduler);
        self.hovering = false;
        self.torn_down = true;
    }

    #[inline]
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    #[inline]
    pub fn is_hovering(&self) -> bool {
        self.hovering
    }

    #[inline]
    pub fn applied(&self) -> Vec2 {
        self.applied
    }
}
