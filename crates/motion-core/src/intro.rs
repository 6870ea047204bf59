//! Staged intro ("reactor ignition") sequencer.
//!
//! A one-shot timeline: the visitor ignites the reactor, the phases advance on a
//! fixed schedule measured from that moment, and the completion signal releases the
//! rest of the page. One timer is owned at a time and re-armed on every transition,
//! so skipping or tearing down only ever has a single task to cancel.

use crate::capabilities::Capabilities;
use crate::config::IntroSchedule;
use crate::schedule::{Scheduler, TaskId};
use std::time::Duration;

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum IntroPhase {
    Idle,
    Igniting,
    RisingPower,
    SystemsOnline,
    Active,
    Exiting,
    Done,
}

/// Phases reached by the timer, in schedule order.
const TIMELINE: [IntroPhase; 6] = [
    IntroPhase::Igniting,
    IntroPhase::RisingPower,
    IntroPhase::SystemsOnline,
    IntroPhase::Active,
    IntroPhase::Exiting,
    IntroPhase::Done,
];

pub const PROGRESS_DOTS: usize = 5;

impl IntroPhase {
    pub fn as_str(self) -> &'static str {
        match self {
            IntroPhase::Idle => "idle",
            IntroPhase::Igniting => "igniting",
            IntroPhase::RisingPower => "rising-power",
            IntroPhase::SystemsOnline => "systems-online",
            IntroPhase::Active => "active",
            IntroPhase::Exiting => "exiting",
            IntroPhase::Done => "done",
        }
    }

    pub fn headline(self) -> &'static str {
        match self {
            IntroPhase::Idle => "Intelligence Engine Offline",
            IntroPhase::Igniting => "Igniting Core…",
            IntroPhase::RisingPower => "Power Levels Rising…",
            IntroPhase::SystemsOnline => "Systems Online…",
            IntroPhase::Active | IntroPhase::Exiting | IntroPhase::Done => "STARKLABS CORE ACTIVE",
        }
    }

    pub fn subtext(self) -> &'static str {
        match self {
            IntroPhase::Idle => "Awaiting Ignition",
            IntroPhase::Igniting => "Power Signature Detected",
            IntroPhase::RisingPower => "Calibrating Systems",
            IntroPhase::SystemsOnline => "Neural Networks Active",
            IntroPhase::Active | IntroPhase::Exiting | IntroPhase::Done => "Welcome",
        }
    }

    /// Core glow opacity in [0, 1].
    pub fn intensity(self) -> f32 {
        match self {
            IntroPhase::Idle => 0.3,
            IntroPhase::Igniting | IntroPhase::RisingPower => 0.5,
            IntroPhase::SystemsOnline => 0.7,
            IntroPhase::Active | IntroPhase::Exiting | IntroPhase::Done => 0.9,
        }
    }

    /// Whether progress dot `index` (0..PROGRESS_DOTS) is lit.
    pub fn progress_lit(self, index: usize) -> bool {
        let reached = match self {
            IntroPhase::Idle => 0,
            IntroPhase::Igniting => 1,
            IntroPhase::RisingPower => 2,
            IntroPhase::SystemsOnline => 3,
            _ => 4,
        };
        index <= reached
    }

    #[inline]
    pub fn is_terminal(self) -> bool {
        self == IntroPhase::Done
    }
}

pub struct IntroSequencer {
    phase: IntroPhase,
    schedule: IntroSchedule,
    ignited: bool,
    next_step: usize,
    timer: Option<TaskId>,
    on_complete: Option<Box<dyn FnOnce()>>,
    completed: bool,
    torn_down: bool,
}

impl IntroSequencer {
    pub fn new(schedule: IntroSchedule, on_complete: impl FnOnce() + 'static) -> Self {
        Self {
            phase: IntroPhase::Idle,
            schedule,
            ignited: false,
            next_step: 0,
            timer: None,
            on_complete: Some(Box::new(on_complete)),
            completed: false,
            torn_down: false,
        }
    }

    /// Resolve the startup bypass. Reduced motion goes straight to `Done`.
    pub fn start(&mut self, capabilities: Capabilities, scheduler: &mut dyn Scheduler) -> IntroPhase {
        if !capabilities.allows_animation() && !self.phase.is_terminal() {
            log::info!("[intro] reduced motion, bypassing intro");
            self.finish(scheduler);
        }
        self.phase
    }

    /// Begin the timeline. Only the first call from `Idle` has any effect.
    pub fn ignite(&mut self, scheduler: &mut dyn Scheduler) -> bool {
        if self.torn_down || self.ignited || self.phase != IntroPhase::Idle {
            return false;
        }
        self.ignited = true;
        self.next_step = 0;
        self.arm(scheduler, self.schedule.igniting);
        true
    }

    /// Timer callback. Returns the phase entered, or `None` for stale ids.
    pub fn on_timer(&mut self, scheduler: &mut dyn Scheduler, task: TaskId) -> Option<IntroPhase> {
        if self.torn_down || self.timer != Some(task) {
            return None;
        }
        self.timer = None;
        let offsets = self.schedule.offsets();
        let step = self.next_step;
        let next = *TIMELINE.get(step)?;
        debug_assert!(next > self.phase, "intro phase must only move forward");
        self.phase = next;
        self.next_step += 1;

        if next.is_terminal() {
            self.complete();
        } else {
            let delay = offsets[step + 1].saturating_sub(offsets[step]);
            self.arm(scheduler, delay);
        }
        Some(next)
    }

    /// Jump to `Done` from any non-terminal phase.
    pub fn skip(&mut self, scheduler: &mut dyn Scheduler) -> bool {
        if self.torn_down || self.phase.is_terminal() {
            return false;
        }
        log::info!("[intro] skipped at {}", self.phase.as_str());
        self.finish(scheduler);
        true
    }

    /// Cancel the pending transition without signalling completion.
    pub fn teardown(&mut self, scheduler: &mut dyn Scheduler) {
        if let Some(task) = self.timer.take() {
            scheduler.cancel(task);
        }
        self.on_complete = None;
        self.torn_down = true;
    }

    #[inline]
    pub fn phase(&self) -> IntroPhase {
        self.phase
    }

    #[inline]
    pub fn is_ignited(&self) -> bool {
        self.ignited
    }

    #[inline]
    pub fn is_exiting(&self) -> bool {
        self.phase == IntroPhase::Exiting
    }

    #[inline]
    pub fn is_completed(&self) -> bool {
        self.completed
    }

    #[inline]
    pub fn has_pending_timer(&self) -> bool {
        self.timer.is_some()
    }

    pub fn shows_ignite_prompt(&self) -> bool {
        !self.ignited && !self.phase.is_terminal()
    }

    pub fn shows_progress(&self) -> bool {
        self.ignited && self.phase < IntroPhase::Exiting
    }

    fn arm(&mut self, scheduler: &mut dyn Scheduler, delay: Duration) {
        if let Some(old) = self.timer.take() {
            scheduler.cancel(old);
        }
        self.timer = Some(scheduler.set_timeout(delay));
    }

    fn finish(&mut self, scheduler: &mut dyn Scheduler) {
        if let Some(task) = self.timer.take() {
            scheduler.cancel(task);
        }
        self.phase = IntroPhase::Done;
        self.complete();
    }

    fn complete(&mut self) {
        if self.completed {
            return;
        }
        self.completed = true;
        if let Some(on_complete) = self.on_complete.take() {
            on_complete();
        }
    }
}
