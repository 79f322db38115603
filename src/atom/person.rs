//! Atom person construct (`author`, `contributor`).

use crate::ns;
use crate::xml::ElementView;

#[derive(Debug, Clone)]
pub struct Person {
    elem: ElementView,
}

impl Person {
    pub(crate) fn new(elem: ElementView) -> Person {
        Person { elem }
    }

    pub fn is_null(&self) -> bool {
        self.elem.is_null()
    }

    pub fn name(&self) -> String {
        self.elem
            .extract_element_text_ns(ns::ATOM10, "name")
            .unwrap_or_default()
    }

    /// Home page of the person, resolved against `xml:base`.
    pub fn uri(&self) -> String {
        let uri = self
            .elem
            .extract_element_text_ns(ns::ATOM10, "uri")
            .unwrap_or_default();
        self.elem.complete_uri(&uri)
    }

    pub fn email(&self) -> String {
        self.elem
            .extract_element_text_ns(ns::ATOM10, "email")
            .unwrap_or_default()
    }
}
