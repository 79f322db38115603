//! Atom `<category>` element wrapper.

use crate::xml::ElementView;

#[derive(Debug, Clone)]
pub struct Category {
    elem: ElementView,
}

impl Category {
    pub(crate) fn new(elem: ElementView) -> Category {
        Category { elem }
    }

    pub fn is_null(&self) -> bool {
        self.elem.is_null()
    }

    pub fn term(&self) -> String {
        self.elem.attribute("term", "")
    }

    /// Categorization scheme IRI. Left exactly as written: schemes are
    /// identifiers, not links, so `xml:base` does not apply.
    pub fn scheme(&self) -> String {
        self.elem.attribute("scheme", "")
    }

    pub fn label(&self) -> String {
        self.elem.attribute("label", "")
    }
}
