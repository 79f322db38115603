//! `<source>` element wrapper, pointing at the channel an item came from.

use crate::xml::ElementView;

#[derive(Debug, Clone)]
pub struct Source {
    elem: ElementView,
}

impl Source {
    pub(crate) fn new(elem: ElementView) -> Source {
        Source { elem }
    }

    pub fn is_null(&self) -> bool {
        self.elem.is_null()
    }

    /// Title of the originating channel.
    pub fn source(&self) -> String {
        self.elem.text().trim().to_owned()
    }

    /// URL of the originating channel.
    pub fn url(&self) -> String {
        self.elem.attribute("url", "")
    }
}
