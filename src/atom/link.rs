//! Atom `<link>` element wrapper.

use crate::xml::ElementView;

#[derive(Debug, Clone)]
pub struct Link {
    elem: ElementView,
}

impl Link {
    pub(crate) fn new(elem: ElementView) -> Link {
        Link { elem }
    }

    pub fn is_null(&self) -> bool {
        self.elem.is_null()
    }

    /// Link target, resolved against `xml:base`.
    pub fn href(&self) -> String {
        self.elem.complete_uri(&self.elem.attribute("href", ""))
    }

    /// Link relation; the format default is `alternate`.
    pub fn rel(&self) -> String {
        self.elem.attribute("rel", "alternate")
    }

    pub fn href_language(&self) -> String {
        self.elem.attribute("hreflang", "")
    }

    pub fn title(&self) -> String {
        self.elem.attribute("title", "")
    }

    /// MIME type of the target.
    pub fn link_type(&self) -> String {
        self.elem.attribute("type", "")
    }

    /// Advisory size of the target in bytes, `0` when missing or invalid.
    pub fn length(&self) -> u32 {
        self.elem.attribute("length", "").parse().unwrap_or(0)
    }
}
