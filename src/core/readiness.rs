//! Outcome of the bounded startup wait for fonts and images.

/// What had finished loading when the startup wait ended.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ReadinessReport {
    pub fonts: Vec<(String, bool)>,
    pub images_total: usize,
    pub images_loaded: usize,
    /// The joint wait hit its timeout before every signal resolved.
    pub timed_out: bool,
}

impl ReadinessReport {
    pub fn fonts_ready(&self) -> usize {
        self.fonts.iter().filter(|(_, ok)| *ok).count()
    }

    pub fn is_complete(&self) -> bool {
        !self.timed_out
            && self.images_loaded == self.images_total
            && self.fonts.iter().all(|(_, ok)| *ok)
    }

    pub fn missing_fonts(&self) -> impl Iterator<Item = &str> {
        self.fonts
            .iter()
            .filter(|(_, ok)| !*ok)
            .map(|(name, _)| name.as_str())
    }

    pub fn log(&self) {
        if self.is_complete() {
            log::info!(
                "[startup] ready: fonts={} images={}",
                self.fonts.len(),
                self.images_total
            );
            return;
        }
        let missing: Vec<&str> = self.missing_fonts().collect();
        log::warn!(
            "[startup] proceeding with partial assets (timed_out={}): images {}/{}, missing fonts {:?}",
            self.timed_out,
            self.images_loaded,
            self.images_total,
            missing
        );
    }
}

/// CSS font shorthand used to request a family from the font set.
pub fn font_query(family: &str) -> String {
    format!("1em \"{}\"", family.replace('"', ""))
}

/// URLs referenced by a computed `background-image` value, in order.
///
/// Handles quoted and bare `url(...)` entries; gradients and `none` yield
/// nothing.
pub fn background_image_urls(value: &str) -> Vec<String> {
    let mut urls = Vec::new();
    let mut rest = value;
    while let Some(start) = rest.find("url(") {
        let inner = rest[start + 4..].trim_start();
        let (url, tail) = match inner.chars().next() {
            Some(q @ ('"' | '\'')) => match inner[1..].find(q) {
                Some(end) => (&inner[1..1 + end], &inner[end + 2..]),
                None => break,
            },
            _ => match inner.find(')') {
                Some(end) => (inner[..end].trim(), &inner[end..]),
                None => break,
            },
        };
        if !url.is_empty() {
            urls.push(url.to_string());
        }
        rest = match tail.find(')') {
            Some(end) => &tail[end + 1..],
            None => "",
        };
    }
    urls
}
