//! `<category>` element wrapper.

use crate::xml::ElementView;

/// A category an RSS 2.0 channel or item is filed under.
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

    /// The category term itself.
    pub fn category(&self) -> String {
        self.elem.text().trim().to_owned()
    }

    /// Identifier of the categorization scheme, often a URL.
    pub fn domain(&self) -> String {
        self.elem.attribute("domain", "")
    }
}
