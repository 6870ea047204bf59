use crate::constants::TRAIL_DOT_SELECTOR;
use crate::dom;
use crate::style;
use motion_core::PointerTrail;
use std::time::Duration;
use web_sys as web;

const DOT_SIZE_PX: f32 = 6.0;

/// Optional trailing-dot cursor. Present only when the markup provides the dots;
/// dot 0 follows the newest sample.
pub struct TrailDots {
    dots: Vec<web::HtmlElement>,
}

impl TrailDots {
    pub fn find(document: &web::Document) -> Option<Self> {
        let dots = dom::html_all(document, TRAIL_DOT_SELECTOR);
        if dots.is_empty() {
            return None;
        }
        log::debug!("[cursor] {} trail dots", dots.len());
        Some(Self { dots })
    }

    pub fn render(&self, trail: &PointerTrail, now: Duration) {
        let mut live: Vec<_> = trail.live(now).collect();
        live.reverse();
        for (i, dot) in self.dots.iter().enumerate() {
            match live.get(i) {
                Some((sample, life)) => {
                    let (transform, opacity) = style::trail_dot(sample.position, *life, DOT_SIZE_PX);
                    dom::set_style(dot, "transform", &transform);
                    dom::set_style(dot, "opacity", &opacity);
                }
                None => dom::set_style(dot, "opacity", "0"),
            }
        }
    }
}
