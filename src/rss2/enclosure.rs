//! `<enclosure>` element wrapper.

use crate::xml::ElementView;

/// A media file attached to an RSS 2.0 item.
#[derive(Debug, Clone)]
pub struct Enclosure {
    elem: ElementView,
}

impl Enclosure {
    pub(crate) fn new(elem: ElementView) -> Enclosure {
        Enclosure { elem }
    }

    pub fn is_null(&self) -> bool {
        self.elem.is_null()
    }

    pub(crate) fn element(&self) -> &ElementView {
        &self.elem
    }

    pub fn url(&self) -> String {
        self.elem.attribute("url", "")
    }

    /// Size in bytes, `0` when missing or invalid.
    pub fn length(&self) -> u32 {
        self.elem.attribute("length", "").parse().unwrap_or(0)
    }

    /// MIME type of the enclosed file.
    pub fn mime_type(&self) -> String {
        self.elem.attribute("type", "")
    }
}
