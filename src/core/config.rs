//! Runtime configuration with defaults from [`super::constants`].
//!
//! Overrides come from `data-gallery-*` attributes on the container element,
//! e.g. `<div id="container" data-gallery-hover-duration="0.6">`.

use super::constants::*;
use super::error::ConfigError;
use std::str::FromStr;

/// Attribute prefix recognized by [`SketchConfig::apply_attribute`].
pub const ATTRIBUTE_PREFIX: &str = "data-gallery-";

/// Every attribute name the web frontend looks up on the container.
pub const CONFIG_ATTRIBUTES: [&str; 10] = [
    "data-gallery-camera-distance",
    "data-gallery-grid-segments",
    "data-gallery-hover-duration",
    "data-gallery-warp-strength",
    "data-gallery-scroll-ease",
    "data-gallery-max-pixel-ratio",
    "data-gallery-fonts",
    "data-gallery-readiness-timeout-ms",
    "data-gallery-orbit-controls",
    "data-gallery-recapture-on-resize",
];

#[derive(Clone, Debug, PartialEq)]
pub struct SketchConfig {
    pub container_id: String,
    pub camera_distance: f32,
    pub camera_near: f32,
    pub camera_far: f32,
    pub grid_segments: u32,
    pub hover_duration: f32,
    pub warp_strength: f32,
    pub scroll_ease: f32,
    pub max_pixel_ratio: f64,
    pub font_families: Vec<String>,
    pub readiness_timeout_ms: u32,
    pub orbit_controls: bool,
    /// Re-query image rects on resize. Off by default: planes then only
    /// follow layout through the scroll offset.
    pub recapture_on_resize: bool,
}

impl Default for SketchConfig {
    fn default() -> Self {
        Self {
            container_id: CONTAINER_ID.to_string(),
            camera_distance: CAMERA_DISTANCE,
            camera_near: CAMERA_NEAR,
            camera_far: CAMERA_FAR,
            grid_segments: GRID_SEGMENTS,
            hover_duration: HOVER_DURATION_SEC,
            warp_strength: WARP_STRENGTH,
            scroll_ease: SCROLL_EASE,
            max_pixel_ratio: MAX_PIXEL_RATIO,
            font_families: DEFAULT_FONT_FAMILIES.iter().map(|f| f.to_string()).collect(),
            readiness_timeout_ms: READINESS_TIMEOUT_MS,
            orbit_controls: true,
            recapture_on_resize: false,
        }
    }
}

impl SketchConfig {
    /// Apply a single `data-gallery-*` attribute.
    pub fn apply_attribute(&mut self, name: &str, value: &str) -> Result<(), ConfigError> {
        let key = name
            .strip_prefix(ATTRIBUTE_PREFIX)
            .ok_or_else(|| ConfigError::UnknownKey(name.to_string()))?;
        let value = value.trim();
        match key {
            "camera-distance" => self.camera_distance = positive(key, value)?,
            "grid-segments" => {
                let segments: u32 = parse(key, value)?;
                if segments == 0 || segments > MAX_GRID_SEGMENTS {
                    return Err(invalid(key, value));
                }
                self.grid_segments = segments;
            }
            "hover-duration" => self.hover_duration = positive(key, value)?,
            "warp-strength" => self.warp_strength = finite(key, value)?,
            "scroll-ease" => {
                let ease: f32 = finite(key, value)?;
                if !(ease > 0.0 && ease <= 1.0) {
                    return Err(invalid(key, value));
                }
                self.scroll_ease = ease;
            }
            "max-pixel-ratio" => self.max_pixel_ratio = positive(key, value)?,
            "fonts" => {
                self.font_families = value
                    .split(',')
                    .map(str::trim)
                    .filter(|f| !f.is_empty())
                    .map(str::to_string)
                    .collect();
            }
            "readiness-timeout-ms" => self.readiness_timeout_ms = parse(key, value)?,
            "orbit-controls" => self.orbit_controls = flag(key, value)?,
            "recapture-on-resize" => self.recapture_on_resize = flag(key, value)?,
            _ => return Err(ConfigError::UnknownKey(name.to_string())),
        }
        Ok(())
    }
}

fn invalid(key: &str, value: &str) -> ConfigError {
    ConfigError::InvalidValue {
        key: key.to_string(),
        value: value.to_string(),
    }
}

fn parse<T: FromStr>(key: &str, value: &str) -> Result<T, ConfigError> {
    value.parse().map_err(|_| invalid(key, value))
}

/// Rejects `NaN` and infinities, which float `FromStr` accepts.
fn finite<T: FromStr + Into<f64> + Copy>(key: &str, value: &str) -> Result<T, ConfigError> {
    let v: T = parse(key, value)?;
    if Into::<f64>::into(v).is_finite() {
        Ok(v)
    } else {
        Err(invalid(key, value))
    }
}

fn positive<T: FromStr + Into<f64> + Copy>(key: &str, value: &str) -> Result<T, ConfigError> {
    let v: T = finite(key, value)?;
    if Into::<f64>::into(v) > 0.0 {
        Ok(v)
    } else {
        Err(invalid(key, value))
    }
}

fn flag(key: &str, value: &str) -> Result<bool, ConfigError> {
    match value {
        "" | "true" | "1" | "on" => Ok(true),
        "false" | "0" | "off" => Ok(false),
        _ => Err(invalid(key, value)),
    }
}
