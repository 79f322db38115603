//! Unified enclosure over the dialect-specific representations.

use crate::ns;
use crate::{atom, rss2};

/// An attached media file in the unified model.
#[derive(Debug, Clone)]
pub enum Enclosure {
    /// An RSS 2.0 enclosure; keeps its item for the iTunes extensions.
    Rss2 {
        item: rss2::Item,
        enclosure: rss2::Enclosure,
    },
    /// An Atom link with `rel="enclosure"`.
    Atom(atom::Link),
}

impl Enclosure {
    pub fn url(&self) -> String {
        match self {
            Enclosure::Rss2 { enclosure, .. } => enclosure.url(),
            Enclosure::Atom(link) => link.href(),
        }
    }

    pub fn title(&self) -> String {
        match self {
            Enclosure::Rss2 { .. } => String::new(),
            Enclosure::Atom(link) => link.title(),
        }
    }

    pub fn mime_type(&self) -> String {
        match self {
            Enclosure::Rss2 { enclosure, .. } => enclosure.mime_type(),
            Enclosure::Atom(link) => link.link_type(),
        }
    }

    /// Size in bytes, `0` when unknown.
    pub fn length(&self) -> u32 {
        match self {
            Enclosure::Rss2 { enclosure, .. } => enclosure.length(),
            Enclosure::Atom(link) => link.length(),
        }
    }

    /// Play length in seconds, from `itunes:duration`; `0` when unknown.
    pub fn duration(&self) -> u32 {
        match self {
            Enclosure::Rss2 { item, .. } => {
                let raw = item
                    .element()
                    .extract_element_text_ns(ns::ITUNES, "duration")
                    .unwrap_or_default();
                parse_itunes_duration(&raw)
            }
            Enclosure::Atom(_) => 0,
        }
    }

    pub fn is_null(&self) -> bool {
        self.url().is_empty()
    }
}

/// Parse `HH:MM:SS`, `MM:SS`, or bare seconds. Malformed input, negative
/// parts, or too many fields yield `0`.
fn parse_itunes_duration(raw: &str) -> u32 {
    let raw = raw.trim();
    if raw.is_empty() {
        return 0;
    }
    let parts: Vec<&str> = raw.split(':').collect();
    if parts.len() > 3 {
        return 0;
    }
    let mut total: u32 = 0;
    for part in &parts {
        let Ok(value) = part.trim().parse::<u32>() else {
            return 0;
        };
        total = match total.checked_mul(60).and_then(|t| t.checked_add(value)) {
            Some(t) => t,
            None => return 0,
        };
    }
    total
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_itunes_duration_grid() {
        assert_eq!(parse_itunes_duration("1:02:03"), 3723);
        assert_eq!(parse_itunes_duration("02:03"), 123);
        assert_eq!(parse_itunes_duration("45"), 45);
        assert_eq!(parse_itunes_duration(""), 0);
        assert_eq!(parse_itunes_duration("1:2:3:4"), 0);
        assert_eq!(parse_itunes_duration("one:30"), 0);
        assert_eq!(parse_itunes_duration("-1:30"), 0);
    }

    #[test]
    fn test_itunes_duration_overflow_is_zero() {
        assert_eq!(parse_itunes_duration("100000000:00"), 0);
        assert_eq!(parse_itunes_duration("4294967295:59:59"), 0);
    }
}
