use crate::constants::*;
use crate::dom;
use crate::overrides;
use motion_core::{Capabilities, MotionConfig};
use web_sys as web;

/// Log level requested by `<html data-log-level>`, read before the logger exists.
pub fn log_level(document: Option<&web::Document>) -> log::Level {
    document
        .and_then(|d| d.document_element())
        .and_then(|root| root.get_attribute(ATTR_LOG_LEVEL))
        .as_deref()
        .and_then(overrides::parse_level)
        .unwrap_or(log::Level::Info)
}

/// Defaults plus any `data-*` overrides on `<html>`. Invalid overrides fall back
/// to the defaults.
pub fn load(document: &web::Document) -> MotionConfig {
    let root = document.document_element();
    let attr = |name: &str| root.as_ref().and_then(|r| r.get_attribute(name));
    let parallax = attr(ATTR_PARALLAX_INTENSITY);
    let magnetic = attr(MAGNETIC_INTENSITY_ATTR);

    match overrides::apply(
        MotionConfig::default(),
        parallax.as_deref(),
        magnetic.as_deref(),
    ) {
        Ok(config) => config,
        Err(e) => {
            log::warn!("[config] ignoring overrides: {}", e);
            MotionConfig::default()
        }
    }
}

/// Resolve reduced-motion and coarse-pointer once for the whole page.
pub fn capabilities(window: &web::Window) -> Capabilities {
    Capabilities::from_queries(
        dom::media_matches(window, QUERY_REDUCED_MOTION),
        dom::media_matches(window, QUERY_COARSE_POINTER),
    )
}
