use std::time::Duration;

// Shared interaction tuning constants used by the web frontend and tests.

// Ambient parallax
pub const PARALLAX_MAX_PX: f32 = 6.0; // full-edge displacement at intensity 1.0
pub const DEFAULT_PARALLAX_INTENSITY: f32 = 1.0;

// Magnetic hover
pub const MAGNET_MAX_PX: f32 = 6.0; // per-axis clamp
pub const DEFAULT_MAGNET_INTENSITY: f32 = 0.3; // fraction of pointer offset applied
pub const MAGNET_HOVER_TRANSITION_MS: u32 = 100; // snappy while tracking
pub const MAGNET_RELEASE_TRANSITION_MS: u32 = 300; // slower settle on leave

// Cursor trail
pub const TRAIL_CAPACITY: usize = 6;
pub const TRAIL_TTL: Duration = Duration::from_millis(150);

// Intro timeline, offsets from the ignition moment
pub const INTRO_IGNITING_AT: Duration = Duration::from_millis(100);
pub const INTRO_RISING_AT: Duration = Duration::from_millis(1200);
pub const INTRO_ONLINE_AT: Duration = Duration::from_millis(2400);
pub const INTRO_ACTIVE_AT: Duration = Duration::from_millis(3600);
pub const INTRO_EXITING_AT: Duration = Duration::from_millis(4200);
pub const INTRO_DONE_AT: Duration = Duration::from_millis(5000);

// Card tilt and section parallax
pub const CARD_TILT_MAX_DEG: f32 = 10.0;
pub const NARROW_VIEWPORT_PX: f32 = 768.0; // below this, pointer effects are off
pub const DEFAULT_SCROLL_OFFSET_PX: f32 = 50.0;
pub const DEFAULT_SCROLL_SPEED: f32 = 0.5;

// Typewriter
pub const TYPEWRITER_CHAR_INTERVAL: Duration = Duration::from_millis(50);
