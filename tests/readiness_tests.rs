// Host-side tests for the startup readiness report.

use scroll_gallery::core::readiness::{background_image_urls, font_query, ReadinessReport};

fn report(timed_out: bool, loaded: usize, fonts: &[(&str, bool)]) -> ReadinessReport {
    ReadinessReport {
        fonts: fonts.iter().map(|(n, ok)| (n.to_string(), *ok)).collect(),
        images_total: 3,
        images_loaded: loaded,
        timed_out,
    }
}

#[test]
fn complete_only_when_everything_settled() {
    let all = [("Open Sans", true), ("Playfair Display", true)];
    assert!(report(false, 3, &all).is_complete());
    assert!(!report(true, 3, &all).is_complete());
    assert!(!report(false, 2, &all).is_complete());
}

#[test]
fn reports_missing_fonts() {
    let r = report(true, 3, &[("Open Sans", true), ("Playfair Display", false)]);
    assert_eq!(r.fonts_ready(), 1);
    assert_eq!(r.missing_fonts().collect::<Vec<_>>(), vec!["Playfair Display"]);
    assert!(!r.is_complete());
}

#[test]
fn empty_wait_is_complete() {
    assert!(ReadinessReport::default().is_complete());
}

#[test]
fn font_query_quotes_family() {
    assert_eq!(font_query("Open Sans"), "1em \"Open Sans\"");
    assert_eq!(font_query("Bad\"Name"), "1em \"BadName\"");
}

#[test]
fn background_urls_from_computed_style() {
    assert!(background_image_urls("none").is_empty());
    assert_eq!(
        background_image_urls(r#"url("https://x.test/a (1).png")"#),
        vec!["https://x.test/a (1).png"]
    );
    assert_eq!(
        background_image_urls(r#"linear-gradient(red, blue), url('b.jpg'), url(c.webp)"#),
        vec!["b.jpg", "c.webp"]
    );
}
