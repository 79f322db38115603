//! Atom `<source>` element: feed metadata embedded in a copied entry.

use crate::atom::tools::extract_atom_text;
use crate::atom::{Category, Generator, Link, Person};
use crate::ns;
use crate::util::dates::{DateFormat, parse_date};
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

    pub fn authors(&self) -> Vec<Person> {
        self.elem
            .elements_by_tag_name_ns(ns::ATOM10, "author")
            .into_iter()
            .map(Person::new)
            .collect()
    }

    pub fn contributors(&self) -> Vec<Person> {
        self.elem
            .elements_by_tag_name_ns(ns::ATOM10, "contributor")
            .into_iter()
            .map(Person::new)
            .collect()
    }

    pub fn categories(&self) -> Vec<Category> {
        self.elem
            .elements_by_tag_name_ns(ns::ATOM10, "category")
            .into_iter()
            .map(Category::new)
            .collect()
    }

    pub fn generator(&self) -> Generator {
        Generator::new(self.elem.first_element_by_tag_name_ns(ns::ATOM10, "generator"))
    }

    pub fn icon(&self) -> String {
        self.elem
            .extract_element_text_ns(ns::ATOM10, "icon")
            .map(|uri| self.elem.complete_uri(&uri))
            .unwrap_or_default()
    }

    pub fn id(&self) -> String {
        self.elem.extract_element_text_ns(ns::ATOM10, "id").unwrap_or_default()
    }

    pub fn links(&self) -> Vec<Link> {
        self.elem
            .elements_by_tag_name_ns(ns::ATOM10, "link")
            .into_iter()
            .map(Link::new)
            .collect()
    }

    pub fn logo(&self) -> String {
        let logo = self
            .elem
            .extract_element_text_ns(ns::ATOM10, "logo")
            .unwrap_or_default();
        self.elem.complete_uri(&logo)
    }

    pub fn rights(&self) -> String {
        extract_atom_text(&self.elem, "rights")
    }

    pub fn subtitle(&self) -> String {
        extract_atom_text(&self.elem, "subtitle")
    }

    pub fn title(&self) -> String {
        extract_atom_text(&self.elem, "title")
    }

    pub fn updated(&self) -> i64 {
        let raw = self
            .elem
            .extract_element_text_ns(ns::ATOM10, "updated")
            .unwrap_or_default();
        parse_date(&raw, DateFormat::Iso)
    }
}
