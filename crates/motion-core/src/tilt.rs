//! Card tilt and scroll-linked section parallax.

use crate::capabilities::Capabilities;
use crate::constants::{CARD_TILT_MAX_DEG, NARROW_VIEWPORT_PX};
use glam::Vec2;

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct CardTilt {
    pub rotate_x_deg: f32,
    pub rotate_y_deg: f32,
    /// Light spot position inside the card, in percent of width/height.
    pub light_x_pct: f32,
    pub light_y_pct: f32,
}

impl CardTilt {
    pub const REST: Self = Self {
        rotate_x_deg: 0.0,
        rotate_y_deg: 0.0,
        light_x_pct: 50.0,
        light_y_pct: 50.0,
    };
}

// Card and section motion is gated by reduced motion and width only, so it
// still runs on touch screens.
#[inline]
fn motion_allowed(capabilities: Capabilities, viewport_width: f32) -> bool {
    capabilities.allows_animation() && viewport_width >= NARROW_VIEWPORT_PX
}

/// Tilt for a pointer over a card whose rectangle is `origin` + `size`.
///
/// The pointer's offset from the card centre, as a fraction of the card size in
/// [-0.5, 0.5], maps linearly to ±[`CARD_TILT_MAX_DEG`]: right tilts around Y, down tilts
/// back around X.
pub fn card_tilt(
    pointer: Vec2,
    origin: Vec2,
    size: Vec2,
    capabilities: Capabilities,
    viewport_width: f32,
) -> CardTilt {
    if !motion_allowed(capabilities, viewport_width) || size.x <= 0.0 || size.y <= 0.0 {
        return CardTilt::REST;
    }
    let half = Vec2::splat(0.5);
    let uv = ((pointer - origin) / size - half).clamp(-half, half);
    let span = CARD_TILT_MAX_DEG * 2.0;
    CardTilt {
        rotate_x_deg: -uv.y * span,
        rotate_y_deg: uv.x * span,
        light_x_pct: (uv.x + 0.5) * 100.0,
        light_y_pct: (uv.y + 0.5) * 100.0,
    }
}

/// Vertical offset for a section given how far it has scrolled through the viewport.
///
/// `progress` 0 is "section top meets viewport bottom", 1 is "section bottom meets
/// viewport top"; the offset sweeps linearly from `-offset * speed` to `offset * speed`.
pub fn scroll_parallax_y(
    progress: f32,
    offset: f32,
    speed: f32,
    capabilities: Capabilities,
    viewport_width: f32,
) -> f32 {
    if !motion_allowed(capabilities, viewport_width) || !progress.is_finite() {
        return 0.0;
    }
    let reach = offset * speed;
    -reach + 2.0 * reach * progress.clamp(0.0, 1.0)
}

/// Scroll progress of a section with `top` and `height` in a viewport of `viewport_height`.
pub fn scroll_progress(top: f32, height: f32, viewport_height: f32) -> f32 {
    let travel = viewport_height + height;
    if travel <= 0.0 {
        return 0.0;
    }
    ((viewport_height - top) / travel).clamp(0.0, 1.0)
}
