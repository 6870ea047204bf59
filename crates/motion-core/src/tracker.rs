//! Pointer interaction tracker: raw moves in, one ambient publish per frame out.

use crate::ambient::{AmbientOffset, AmbientWriter};
use crate::capabilities::Capabilities;
use crate::config::MotionConfig;
use crate::schedule::{FrameSlot, Scheduler, TaskId};
use crate::trail::{PointerSample, PointerTrail};
use glam::Vec2;
use std::time::Duration;

pub struct PointerTracker {
    writer: AmbientWriter,
    slot: FrameSlot<PointerSample>,
    fade: FrameSlot<()>,
    trail: PointerTrail,
    bound_px: f32,
    torn_down: bool,
}

impl PointerTracker {
    /// Returns `None` when the environment disallows pointer effects; the tracker
    /// then never exists and the ambient channel keeps its resting value.
    pub fn activate(
        capabilities: Capabilities,
        config: &MotionConfig,
        writer: AmbientWriter,
    ) -> Option<Self> {
        if !capabilities.allows_pointer_effects() {
            log::debug!("[tracker] inactive: {:?}", capabilities);
            return None;
        }
        Some(Self {
            writer,
            slot: FrameSlot::default(),
            fade: FrameSlot::default(),
            trail: PointerTrail::new(config.trail_capacity, config.trail_ttl),
            bound_px: config.parallax_bound(),
            torn_down: false,
        })
    }

    /// Record a move and make sure exactly one recompute is pending.
    pub fn pointer_move(&mut self, scheduler: &mut dyn Scheduler, sample: PointerSample) {
        if self.torn_down {
            return;
        }
        self.trail.push(sample);
        // the move frame repaints the trail itself
        self.fade.cancel(scheduler);
        self.slot.submit(scheduler, sample);
    }

    /// Frame callback. Publishes only for the frame this tracker is waiting on.
    pub fn on_frame(&mut self, task: TaskId, viewport: Vec2) -> Option<AmbientOffset> {
        if self.torn_down {
            return None;
        }
        let sample = self.slot.fire(task)?;
        let offset = AmbientOffset::compute(sample.position, viewport, self.bound_px);
        self.writer.publish(offset);
        Some(offset)
    }

    /// True while some trail sample is still fading at `now`.
    pub fn needs_fade_frame(&self, now: Duration) -> bool {
        !self.torn_down && self.trail.live(now).next().is_some()
    }

    /// Call after painting the trail at `now`: keeps one repaint frame pending until
    /// every sample has expired. Does nothing while a move frame is already pending.
    pub fn schedule_fade(&mut self, scheduler: &mut dyn Scheduler, now: Duration) {
        if self.needs_fade_frame(now) && !self.slot.is_pending() && !self.fade.is_pending() {
            self.fade.submit(scheduler, ());
        }
    }

    /// Fade frame callback. True when `task` is this tracker's repaint frame.
    pub fn on_fade_frame(&mut self, task: TaskId, now: Duration) -> bool {
        if self.torn_down || self.fade.fire(task).is_none() {
            return false;
        }
        self.trail.prune(now);
        true
    }

    #[inline]
    pub fn trail(&self) -> &PointerTrail {
        &self.trail
    }

    #[inline]
    pub fn has_pending_frame(&self) -> bool {
        self.slot.is_pending() || self.fade.is_pending()
    }

    pub fn teardown(&mut self, scheduler: &mut dyn Scheduler) {
        self.slot.cancel(scheduler);
        self.fade.cancel(scheduler);
        self.trail.clear();
        self.torn_down = true;
    }
}
