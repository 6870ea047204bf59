//! Tunable parameters for the interaction layer.

use crate::constants::*;
use std::time::Duration;
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("{name} must be a finite, non-negative number (got {value})")]
    InvalidNumber { name: &'static str, value: f32 },
    #[error("trail capacity must be between 1 and 6 (got {0})")]
    TrailCapacity(usize),
    #[error("intro schedule must be strictly increasing (offset {index} is not after the previous one)")]
    ScheduleOrder { index: usize },
}

/// Offsets from the ignition moment at which each intro phase begins.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct IntroSchedule {
    pub igniting: Duration,
    pub rising_power: Duration,
    pub systems_online: Duration,
    pub active: Duration,
    pub exiting: Duration,
    pub done: Duration,
}

impl Default for IntroSchedule {
    fn default() -> Self {
        Self {
            igniting: INTRO_IGNITING_AT,
            rising_power: INTRO_RISING_AT,
            systems_online: INTRO_ONLINE_AT,
            active: INTRO_ACTIVE_AT,
            exiting: INTRO_EXITING_AT,
            done: INTRO_DONE_AT,
        }
    }
}

impl IntroSchedule {
    pub fn offsets(&self) -> [Duration; 6] {
        [
            self.igniting,
            self.rising_power,
            self.systems_online,
            self.active,
            self.exiting,
            self.done,
        ]
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let offsets = self.offsets();
        for (i, pair) in offsets.windows(2).enumerate() {
            if pair[1] <= pair[0] {
                return Err(ConfigError::ScheduleOrder { index: i + 1 });
            }
        }
        Ok(())
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MotionConfig {
    pub parallax_intensity: f32,
    pub parallax_max_px: f32,
    pub magnetic_intensity: f32,
    pub magnetic_max_px: f32,
    pub trail_capacity: usize,
    pub trail_ttl: Duration,
    pub intro: IntroSchedule,
}

impl Default for MotionConfig {
    fn default() -> Self {
        Self {
            parallax_intensity: DEFAULT_PARALLAX_INTENSITY,
            parallax_max_px: PARALLAX_MAX_PX,
            magnetic_intensity: DEFAULT_MAGNET_INTENSITY,
            magnetic_max_px: MAGNET_MAX_PX,
            trail_capacity: TRAIL_CAPACITY,
            trail_ttl: TRAIL_TTL,
            intro: IntroSchedule::default(),
        }
    }
}

impl MotionConfig {
    /// Largest parallax displacement actually applied, in px.
    #[inline]
    pub fn parallax_bound(&self) -> f32 {
        self.parallax_max_px * self.parallax_intensity
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        check("parallax_intensity", self.parallax_intensity)?;
        check("parallax_max_px", self.parallax_max_px)?;
        check("magnetic_intensity", self.magnetic_intensity)?;
        check("magnetic_max_px", self.magnetic_max_px)?;
        if self.trail_capacity == 0 || self.trail_capacity > TRAIL_CAPACITY {
            return Err(ConfigError::TrailCapacity(self.trail_capacity));
        }
        self.intro.validate()
    }
}

fn check(name: &'static str, value: f32) -> Result<(), ConfigError> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(ConfigError::InvalidNumber { name, value })
    }
}
