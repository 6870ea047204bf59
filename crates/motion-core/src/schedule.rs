//! Cooperative scheduling primitives.
//!
//! Components never hold host callbacks. They ask a [`Scheduler`] for a frame or a
//! timer, keep the returned [`TaskId`], and are later handed that id back by the host.
//! Anything they no longer want is cancelled through the same scheduler, so a stale
//! callback can always be recognised and dropped.

use fnv::FnvHashMap;
use std::time::Duration;

/// Opaque handle for one pending frame or timer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TaskId(pub u64);

pub trait Scheduler {
    /// Run once on the next display refresh.
    fn request_frame(&mut self) -> TaskId;
    /// Run once after `delay`.
    fn set_timeout(&mut self, delay: Duration) -> TaskId;
    /// Drop a pending task. Unknown or already-fired ids are ignored.
    fn cancel(&mut self, task: TaskId);
}

/// At most one pending frame plus the payload it will apply.
///
/// A new submission supersedes the previous one: the old frame is cancelled
/// and only the latest payload survives (last sample wins).
#[derive(Debug)]
pub struct FrameSlot<T> {
    pending: Option<(TaskId, T)>,
}

impl<T> Default for FrameSlot<T> {
    fn default() -> Self {
        Self { pending: None }
    }
}

impl<T> FrameSlot<T> {
    pub fn submit(&mut self, scheduler: &mut dyn Scheduler, payload: T) -> TaskId {
        if let Some((old, _)) = self.pending.take() {
            scheduler.cancel(old);
        }
        let task = scheduler.request_frame();
        self.pending = Some((task, payload));
        task
    }

    /// Take the payload if `task` is the frame this slot is waiting for.
    pub fn fire(&mut self, task: TaskId) -> Option<T> {
        match &self.pending {
            Some((id, _)) if *id == task => self.pending.take().map(|(_, p)| p),
            _ => None,
        }
    }

    pub fn cancel(&mut self, scheduler: &mut dyn Scheduler) {
        if let Some((task, _)) = self.pending.take() {
            scheduler.cancel(task);
        }
    }

    #[inline]
    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }
}

#[derive(Clone, Copy, Debug)]
enum TaskKind {
    Frame,
    Timer { deadline: Duration },
}

/// Deterministic scheduler on a virtual clock.
///
/// Frames fire on [`ManualScheduler::run_frame`]; timers fire on
/// [`ManualScheduler::advance`] in deadline order (ties by creation order).
#[derive(Debug, Default)]
pub struct ManualScheduler {
    now: Duration,
    next_id: u64,
    tasks: FnvHashMap<TaskId, TaskKind>,
    frames_requested: usize,
    cancelled: usize,
}

impl ManualScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn now(&self) -> Duration {
        self.now
    }

    /// Outstanding frames and timers.
    #[inline]
    pub fn pending(&self) -> usize {
        self.tasks.len()
    }

    pub fn pending_frames(&self) -> usize {
        self.tasks
            .values()
            .filter(|k| matches!(k, TaskKind::Frame))
            .count()
    }

    pub fn pending_timers(&self) -> usize {
        self.pending() - self.pending_frames()
    }

    /// Total frames ever requested, including cancelled ones.
    #[inline]
    pub fn frames_requested(&self) -> usize {
        self.frames_requested
    }

    #[inline]
    pub fn cancelled(&self) -> usize {
        self.cancelled
    }

    /// Fire every pending frame, oldest first.
    pub fn run_frame(&mut self) -> Vec<TaskId> {
        let mut due: Vec<TaskId> = self
            .tasks
            .iter()
            .filter(|(_, k)| matches!(k, TaskKind::Frame))
            .map(|(id, _)| *id)
            .collect();
        due.sort();
        for id in &due {
            self.tasks.remove(id);
        }
        due
    }

    /// Move the clock forward and return the next due timer, if any.
    ///
    /// Fires one timer at a time so callers can re-arm between fires; the clock
    /// stops at the fired timer's deadline.
    pub fn advance_to_next(&mut self, limit: Duration) -> Option<TaskId> {
        let next = self
            .tasks
            .iter()
            .filter_map(|(id, k)| match k {
                TaskKind::Timer { deadline } if *deadline <= limit => Some((*deadline, *id)),
                _ => None,
            })
            .min();
        match next {
            Some((deadline, id)) => {
                self.tasks.remove(&id);
                self.now = self.now.max(deadline);
                Some(id)
            }
            None => {
                self.now = self.now.max(limit);
                None
            }
        }
    }

    /// Advance by `by`, returning every timer that came due, in order.
    ///
    /// Timers armed by the caller while handling these ids are not seen here;
    /// use [`ManualScheduler::advance_to_next`] when handlers re-arm.
    pub fn advance(&mut self, by: Duration) -> Vec<TaskId> {
        let limit = self.now + by;
        let mut fired = Vec::new();
        while let Some(id) = self.advance_to_next(limit) {
            fired.push(id);
        }
        fired
    }

    fn alloc(&mut self, kind: TaskKind) -> TaskId {
        self.next_id += 1;
        let id = TaskId(self.next_id);
        self.tasks.insert(id, kind);
        id
    }
}

impl Scheduler for ManualScheduler {
    fn request_frame(&mut self) -> TaskId {
        self.frames_requested += 1;
        self.alloc(TaskKind::Frame)
    }

    fn set_timeout(&mut self, delay: Duration) -> TaskId {
        let deadline = self.now + delay;
        self.alloc(TaskKind::Timer { deadline })
    }

    fn cancel(&mut self, task: TaskId) {
        if self.tasks.remove(&task).is_some() {
            self.cancelled += 1;
        }
    }
}
