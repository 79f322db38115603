//! `<image>` element wrapper.

use crate::xml::ElementView;

/// The channel image of an RSS 2.0 feed.
#[derive(Debug, Clone)]
pub struct Image {
    elem: ElementView,
}

impl Image {
    pub(crate) fn new(elem: ElementView) -> Image {
        Image { elem }
    }

    pub fn is_null(&self) -> bool {
        self.elem.is_null()
    }

    pub fn url(&self) -> String {
        self.elem.extract_element_text("url").unwrap_or_default()
    }

    pub fn title(&self) -> String {
        self.elem.extract_element_text("title").unwrap_or_default()
    }

    pub fn link(&self) -> String {
        self.elem.extract_element_text("link").unwrap_or_default()
    }

    /// Image width in pixels; the format default is 88.
    pub fn width(&self) -> u32 {
        match self.elem.extract_element_text("width") {
            Some(w) => w.parse().unwrap_or(88),
            None => 88,
        }
    }

    /// Image height in pixels; the format default is 31.
    pub fn height(&self) -> u32 {
        match self.elem.extract_element_text("height") {
            Some(h) => h.parse().unwrap_or(31),
            None => 31,
        }
    }

    pub fn description(&self) -> String {
        self.elem.extract_element_text("description").unwrap_or_default()
    }
}
