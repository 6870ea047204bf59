// CSS value formatting. Pure so it can be tested on the host.

use glam::Vec2;

#[inline]
pub fn px(v: f32) -> String {
    format!("{}px", round3(v))
}

#[inline]
pub fn unitless(v: f32) -> String {
    format!("{}", round3(v))
}

pub fn translate3d(offset: Vec2) -> String {
    format!("translate3d({}, {}, 0)", px(offset.x), px(offset.y))
}

pub fn transform_transition(duration_ms: u32) -> String {
    format!("transform {}s ease-out", duration_ms as f32 / 1000.0)
}

/// Trail dot placement: centred on the sample, faded by remaining life.
pub fn trail_dot(position: Vec2, life: f32, size_px: f32) -> (String, String) {
    let half = size_px / 2.0;
    (
        translate3d(position - Vec2::splat(half)),
        unitless(life.clamp(0.0, 1.0)),
    )
}

// Three decimals are plenty for sub-pixel transforms and keep style strings short.
#[inline]
fn round3(v: f32) -> f32 {
    let r = (v * 1000.0).round() / 1000.0;
    if r == 0.0 {
        0.0
    } else {
        r
    }
}

pub fn card_transform(rotate_x_deg: f32, rotate_y_deg: f32) -> String {
    format!(
        "perspective(1000px) rotateX({}deg) rotateY({}deg)",
        round3(rotate_x_deg),
        round3(rotate_y_deg)
    )
}

#[inline]
pub fn percent(v: f32) -> String {
    format!("{}%", round3(v))
}
