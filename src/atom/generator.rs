//! Atom `<generator>` element wrapper.

use crate::xml::ElementView;

#[derive(Debug, Clone)]
pub struct Generator {
    elem: ElementView,
}

impl Generator {
    pub(crate) fn new(elem: ElementView) -> Generator {
        Generator { elem }
    }

    pub fn is_null(&self) -> bool {
        self.elem.is_null()
    }

    /// Human-readable name of the generating software.
    pub fn name(&self) -> String {
        self.elem.text().trim().to_owned()
    }

    /// Home page of the generating software, resolved against `xml:base`.
    pub fn uri(&self) -> String {
        self.elem.complete_uri(&self.elem.attribute("uri", ""))
    }

    pub fn version(&self) -> String {
        self.elem.attribute("version", "")
    }
}
