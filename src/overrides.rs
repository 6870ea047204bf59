// Parsing of configuration overrides taken from `data-*` attributes.

use motion_core::{ConfigError, MotionConfig};

/// Apply optional attribute values on top of `base`.
///
/// Values that do not parse are ignored; values that parse but fail validation
/// reject the whole override so the caller can fall back to `base`.
pub fn apply(
    base: MotionConfig,
    parallax_intensity: Option<&str>,
    magnetic_intensity: Option<&str>,
) -> Result<MotionConfig, ConfigError> {
    let mut config = base;
    if let Some(v) = parallax_intensity.and_then(parse_number) {
        config.parallax_intensity = v;
    }
    if let Some(v) = magnetic_intensity.and_then(parse_number) {
        config.magnetic_intensity = v;
    }
    config.validate()?;
    Ok(config)
}

pub fn parse_number(raw: &str) -> Option<f32> {
    raw.trim().parse::<f32>().ok()
}

pub fn parse_level(raw: &str) -> Option<log::Level> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "error" => Some(log::Level::Error),
        "warn" | "warning" => Some(log::Level::Warn),
        "info" => Some(log::Level::Info),
        "debug" => Some(log::Level::Debug),
        "trace" => Some(log::Level::Trace),
        _ => None,
    }
}
