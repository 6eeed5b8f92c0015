// Host-side tests for container attribute overrides.

use scroll_gallery::core::config::{SketchConfig, CONFIG_ATTRIBUTES};
use scroll_gallery::core::error::ConfigError;

#[test]
fn defaults_match_the_gallery_setup() {
    let c = SketchConfig::default();
    assert_eq!(c.container_id, "container");
    assert_eq!(c.camera_distance, 600.0);
    assert_eq!((c.camera_near, c.camera_far), (100.0, 2000.0));
    assert_eq!(c.grid_segments, 10);
    assert_eq!(c.hover_duration, 1.0);
    assert_eq!(c.font_families, vec!["Open Sans", "Playfair Display"]);
    assert!(c.orbit_controls);
    assert!(!c.recapture_on_resize);
}

#[test]
fn every_listed_attribute_is_accepted() {
    let values = ["700", "12", "0.5", "0.4", "0.2", "1.5", "Inter, Lora", "2500", "off", "on"];
    let mut c = SketchConfig::default();
    for (name, value) in CONFIG_ATTRIBUTES.iter().zip(values) {
        c.apply_attribute(name, value)
            .unwrap_or_else(|e| panic!("{} rejected: {}", name, e));
    }
    assert_eq!(c.camera_distance, 700.0);
    assert_eq!(c.grid_segments, 12);
    assert_eq!(c.hover_duration, 0.5);
    assert_eq!(c.font_families, vec!["Inter", "Lora"]);
    assert_eq!(c.readiness_timeout_ms, 2500);
    assert!(!c.orbit_controls);
    assert!(c.recapture_on_resize);
}

#[test]
fn bare_flag_attribute_means_true() {
    let mut c = SketchConfig::default();
    c.apply_attribute("data-gallery-recapture-on-resize", "").unwrap();
    assert!(c.recapture_on_resize);
}

#[test]
fn rejects_unknown_and_invalid_values() {
    let mut c = SketchConfig::default();
    assert_eq!(
        c.apply_attribute("data-gallery-nope", "1"),
        Err(ConfigError::UnknownKey("data-gallery-nope".into()))
    );
    assert_eq!(
        c.apply_attribute("data-other", "1"),
        Err(ConfigError::UnknownKey("data-other".into()))
    );
    assert!(matches!(
        c.apply_attribute("data-gallery-hover-duration", "-1"),
        Err(ConfigError::InvalidValue { .. })
    ));
    assert!(c.apply_attribute("data-gallery-grid-segments", "0").is_err());
    assert!(c.apply_attribute("data-gallery-scroll-ease", "1.5").is_err());
    assert!(c.apply_attribute("data-gallery-orbit-controls", "maybe").is_err());
    // Failed overrides leave the previous value in place.
    assert_eq!(c, SketchConfig::default());
}

#[test]
fn grid_segments_capped_for_u16_indices() {
    let mut c = SketchConfig::default();
    assert!(c.apply_attribute("data-gallery-grid-segments", "255").is_ok());
    assert_eq!(c.grid_segments, 255);
    assert!(c.apply_attribute("data-gallery-grid-segments", "256").is_err());
    assert!(c.apply_attribute("data-gallery-grid-segments", "300").is_err());
    assert_eq!(c.grid_segments, 255);
}

#[test]
fn rejects_non_finite_floats() {
    let mut c = SketchConfig::default();
    for (name, value) in [
        ("data-gallery-warp-strength", "NaN"),
        ("data-gallery-warp-strength", "inf"),
        ("data-gallery-hover-duration", "inf"),
        ("data-gallery-camera-distance", "infinity"),
        ("data-gallery-scroll-ease", "NaN"),
        ("data-gallery-max-pixel-ratio", "inf"),
    ] {
        assert!(
            matches!(c.apply_attribute(name, value), Err(ConfigError::InvalidValue { .. })),
            "{}={} accepted",
            name,
            value
        );
    }
    assert_eq!(c, SketchConfig::default());
}
