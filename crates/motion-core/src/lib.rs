//! Platform-free interaction logic for the Starklabs site.
//!
//! Everything here is driven through the [`schedule::Scheduler`] trait and plain values,
//! so the web frontend supplies browser frames and timers while host tests use
//! [`schedule::ManualScheduler`].

pub mod ambient;
pub mod capabilities;
pub mod config;
pub mod constants;
pub mod intro;
pub mod magnetic;
pub mod schedule;
pub mod tilt;
pub mod tracker;
pub mod trail;
pub mod typewriter;

pub use ambient::{AmbientOffset, AmbientReader, AmbientWriter};
pub use capabilities::Capabilities;
pub use config::{ConfigError, IntroSchedule, MotionConfig};
pub use intro::{IntroPhase, IntroSequencer};
pub use magnetic::{MagnetTarget, MagnetUpdate, MagneticController};
pub use schedule::{FrameSlot, ManualScheduler, Scheduler, TaskId};
pub use tracker::PointerTracker;
pub use trail::{PointerSample, PointerTrail};
