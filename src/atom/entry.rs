//! Atom `<entry>` element model.

use std::rc::Rc;

use crate::atom::tools::extract_atom_text;
use crate::atom::{Category, Content, Link, Person, Source};
use crate::ns;
use crate::util::dates::{DateFormat, parse_date};
use crate::xml::ElementView;

/// Entry children the unified mapping consumes directly.
const HANDLED: &[&str] = &[
    "author",
    "contributor",
    "category",
    "id",
    "link",
    "rights",
    "source",
    "published",
    "updated",
    "summary",
    "title",
    "content",
];

/// One entry of an Atom feed.
///
/// Entries carry the feed-level authors so that [`authors`](Entry::authors)
/// can apply the Atom inheritance rule: entry authors, else source
/// authors, else feed authors.
#[derive(Debug, Clone)]
pub struct Entry {
    elem: ElementView,
    feed_authors: Rc<Vec<ElementView>>,
}

impl Entry {
    pub(crate) fn new(elem: ElementView, feed_authors: Rc<Vec<ElementView>>) -> Entry {
        Entry { elem, feed_authors }
    }

    pub(crate) fn element(&self) -> &ElementView {
        &self.elem
    }

    pub fn authors(&self) -> Vec<Person> {
        let own = self.elem.elements_by_tag_name_ns(ns::ATOM10, "author");
        if !own.is_empty() {
            return own.into_iter().map(Person::new).collect();
        }
        let source = self.source();
        if !source.is_null() {
            let inherited = source.authors();
            if !inherited.is_empty() {
                return inherited;
            }
        }
        self.feed_authors.iter().cloned().map(Person::new).collect()
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

    pub fn rights(&self) -> String {
        extract_atom_text(&self.elem, "rights")
    }

    pub fn source(&self) -> Source {
        Source::new(self.elem.first_element_by_tag_name_ns(ns::ATOM10, "source"))
    }

    pub fn published(&self) -> i64 {
        let raw = self
            .elem
            .extract_element_text_ns(ns::ATOM10, "published")
            .unwrap_or_default();
        parse_date(&raw, DateFormat::Iso)
    }

    pub fn updated(&self) -> i64 {
        let raw = self
            .elem
            .extract_element_text_ns(ns::ATOM10, "updated")
            .unwrap_or_default();
        parse_date(&raw, DateFormat::Iso)
    }

    pub fn summary(&self) -> String {
        extract_atom_text(&self.elem, "summary")
    }

    pub fn title(&self) -> String {
        extract_atom_text(&self.elem, "title")
    }

    /// The entry content, null when the entry has none.
    pub fn content(&self) -> Content {
        Content::new(self.elem.first_element_by_tag_name_ns(ns::ATOM10, "content"))
    }

    pub fn xml_lang(&self) -> String {
        self.elem.xml_lang()
    }

    /// Entry children the model does not map, for extension access.
    pub fn unhandled_elements(&self) -> Vec<ElementView> {
        self.elem
            .child_elements()
            .into_iter()
            .filter(|el| {
                !(el.namespace() == ns::ATOM10 && HANDLED.contains(&el.local_name().as_str()))
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::xml::XmlTree;

    fn entry(feed_body: &str) -> Entry {
        let xml = format!(r#"<feed xmlns="http://www.w3.org/2005/Atom">{feed_body}</feed>"#);
        let tree = Rc::new(XmlTree::parse(xml.as_bytes()).unwrap());
        let root = tree.document_element().unwrap();
        let feed = ElementView::new(tree, root);
        let feed_authors = Rc::new(feed.elements_by_tag_name_ns(ns::ATOM10, "author"));
        let el = feed.first_element_by_tag_name_ns(ns::ATOM10, "entry");
        Entry::new(el, feed_authors)
    }

    #[test]
    fn test_own_authors_win() {
        let e = entry(concat!(
            "<author><name>Feed Author</name></author>",
            "<entry><author><name>Entry Author</name></author></entry>",
        ));
        let authors = e.authors();
        assert_eq!(authors.len(), 1);
        assert_eq!(authors[0].name(), "Entry Author");
    }

    #[test]
    fn test_source_authors_inherited() {
        let e = entry(concat!(
            "<author><name>Feed Author</name></author>",
            "<entry><source><author><name>Origin Author</name></author></source></entry>",
        ));
        assert_eq!(e.authors()[0].name(), "Origin Author");
    }

    #[test]
    fn test_feed_authors_are_fallback() {
        let e = entry(concat!(
            "<author><name>Feed Author</name></author>",
            "<entry><title>t</title></entry>",
        ));
        assert_eq!(e.authors()[0].name(), "Feed Author");
    }

    #[test]
    fn test_dates() {
        let e = entry(concat!(
            "<entry><published>2002-09-07T00:00:01Z</published>",
            "<updated>2002-09-08T00:00:01Z</updated></entry>",
        ));
        assert_eq!(e.published(), 1031356801);
        assert_eq!(e.updated(), 1031443201);
    }

    #[test]
    fn test_unhandled_elements() {
        let e = entry(concat!(
            r#"<entry xmlns:x="urn:x"><title>t</title><x:extra>1</x:extra></entry>"#,
        ));
        let extra = e.unhandled_elements();
        assert_eq!(extra.len(), 1);
        assert_eq!(extra[0].namespace(), "urn:x");
    }
}
