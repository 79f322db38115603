//! Format detector and parser for Atom 0.3 and 1.0.
//!
//! Atom 0.3 documents are rewritten into an equivalent 1.0 tree before the
//! document model is built: elements move to the 1.0 namespace, renamed
//! tags (`issued`, `modified`, `tagline`, …) get their 1.0 names, and the
//! 0.3 media types on text constructs collapse to `text`/`html`/`xhtml`.

use std::rc::Rc;

use crate::atom::content::{map_type_to_format, Format};
use crate::atom::{EntryDocument, FeedDocument};
use crate::error::{Error, Result};
use crate::ns;
use crate::registry::{FormatParser, SpecificDocument};
use crate::source::DocumentSource;
use crate::xml::{Attribute, ElementData, ElementView, NodeId, NodeKind, XmlTree};

const RENAMES: &[(&str, &str)] = &[
    ("issued", "published"),
    ("modified", "updated"),
    ("url", "uri"),
    ("copyright", "rights"),
    ("tagline", "subtitle"),
];

const TEXT_CONSTRUCTS: &[&str] = &["title", "rights", "subtitle", "summary"];

/// Accepts documents whose root element is in either Atom namespace.
#[derive(Debug, Default)]
pub struct Parser;

impl FormatParser for Parser {
    fn accept(&self, source: &DocumentSource) -> bool {
        let ns_uri = source.root_element().namespace();
        ns_uri == ns::ATOM10 || ns_uri == ns::ATOM03
    }

    fn parse(&self, source: &DocumentSource) -> Result<SpecificDocument> {
        let mut root = source.root_element();
        if root.namespace() == ns::ATOM03 {
            if let Some(tree) = source.as_tree() {
                let converted = Rc::new(convert_0_3(&tree));
                root = match converted.document_element() {
                    Some(id) => ElementView::new(Rc::clone(&converted), id),
                    None => ElementView::null(),
                };
            }
        }
        if root.namespace() != ns::ATOM10 {
            return Err(Error::InvalidFormat);
        }
        match root.local_name().as_str() {
            "feed" => Ok(SpecificDocument::AtomFeed(FeedDocument::new(root))),
            "entry" => Ok(SpecificDocument::AtomEntry(EntryDocument::new(root))),
            _ => Err(Error::InvalidFormat),
        }
    }

    fn format(&self) -> &'static str {
        "atom"
    }
}

fn rename(local: &str) -> &str {
    RENAMES
        .iter()
        .find(|&&(old, _)| old == local)
        .map(|&(_, new)| new)
        .unwrap_or(local)
}

/// Rewrite a whole 0.3 tree into a 1.0 tree.
fn convert_0_3(tree: &XmlTree) -> XmlTree {
    let mut out = XmlTree::new();
    let doc = out.document();
    if let Some(root) = tree.document_element() {
        convert_node(tree, root, &mut out, doc);
    }
    out
}

fn convert_node(src: &XmlTree, id: NodeId, out: &mut XmlTree, parent: NodeId) {
    let kind = match src.kind(id) {
        NodeKind::Element(el) => NodeKind::Element(convert_element(el)),
        other => other.clone(),
    };
    let new_id = out.append(parent, kind);
    for &child in src.children(id) {
        convert_node(src, child, out, new_id);
    }
}

fn convert_element(el: &ElementData) -> ElementData {
    if el.ns != ns::ATOM03 {
        return el.clone();
    }
    let local = rename(&el.local).to_owned();
    let mut attributes: Vec<Attribute> = el
        .attributes
        .iter()
        .map(|a| {
            let mut a = a.clone();
            // namespace declarations follow the element into 1.0
            if a.ns == ns::XMLNS && a.value == ns::ATOM03 {
                a.value = ns::ATOM10.to_owned();
            }
            a
        })
        .collect();

    if TEXT_CONSTRUCTS.contains(&local.as_str()) {
        let old_type = el
            .attribute("type")
            .map(|a| a.value.clone())
            .unwrap_or_else(|| "text/plain".to_owned());
        let new_type = match map_type_to_format(&old_type, "") {
            Format::Xml => Some("xhtml"),
            Format::EscapedHtml => Some("html"),
            Format::PlainText => Some("text"),
            Format::Binary => None,
        };
        if let Some(new_type) = new_type {
            set_attribute(&mut attributes, "type", new_type);
        }
    }
    if local == "generator" {
        if let Some(url) = el.attribute("url").map(|a| a.value.clone()) {
            set_attribute(&mut attributes, "uri", &url);
        }
    }

    ElementData {
        qname: local.clone(),
        ns: ns::ATOM10.to_owned(),
        local,
        attributes,
    }
}

fn set_attribute(attributes: &mut Vec<Attribute>, name: &str, value: &str) {
    if let Some(attr) = attributes.iter_mut().find(|a| a.qname == name) {
        attr.value = value.to_owned();
        return;
    }
    attributes.push(Attribute {
        qname: name.to_owned(),
        ns: String::new(),
        local: name.to_owned(),
        value: value.to_owned(),
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    fn src(xml: &str) -> DocumentSource {
        DocumentSource::new(xml.as_bytes().to_vec(), "")
    }

    fn parse_feed(xml: &str) -> FeedDocument {
        match Parser.parse(&src(xml)) {
            Ok(SpecificDocument::AtomFeed(doc)) => doc,
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn test_accepts_both_namespaces() {
        assert!(Parser.accept(&src(r#"<feed xmlns="http://www.w3.org/2005/Atom"/>"#)));
        assert!(Parser.accept(&src(r#"<feed xmlns="http://purl.org/atom/ns#" version="0.3"/>"#)));
        assert!(!Parser.accept(&src("<rss version=\"2.0\"><channel/></rss>")));
    }

    #[test]
    fn test_standalone_entry_document() {
        let doc = match Parser.parse(&src(concat!(
            r#"<entry xmlns="http://www.w3.org/2005/Atom">"#,
            "<title>Lone Entry</title></entry>",
        ))) {
            Ok(SpecificDocument::AtomEntry(doc)) => doc,
            other => panic!("unexpected result: {other:?}"),
        };
        assert_eq!(doc.entry().title(), "Lone Entry");
    }

    #[test]
    fn test_atom_03_is_converted() {
        let doc = parse_feed(concat!(
            r#"<feed xmlns="http://purl.org/atom/ns#" version="0.3">"#,
            r#"<title>Old Feed</title>"#,
            r#"<tagline type="text/plain">a tagline</tagline>"#,
            r#"<entry><title type="text/html">&lt;em&gt;hi&lt;/em&gt;</title>"#,
            r#"<issued>2003-12-13T18:30:02Z</issued>"#,
            r#"<modified>2003-12-14T18:30:02Z</modified></entry>"#,
            r#"</feed>"#,
        ));
        assert_eq!(doc.title(), "Old Feed");
        assert_eq!(doc.subtitle(), "a tagline");
        let entries = doc.entries();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].title(), "<em>hi</em>");
        assert_eq!(entries[0].published(), 1071340202);
        assert_eq!(entries[0].updated(), 1071426602);
    }

    #[test]
    fn test_atom_03_generator_url_becomes_uri() {
        let doc = parse_feed(concat!(
            r#"<feed xmlns="http://purl.org/atom/ns#" version="0.3">"#,
            r#"<generator url="http://example.com/gen">Gen</generator></feed>"#,
        ));
        assert_eq!(doc.generator().uri(), "http://example.com/gen");
        assert_eq!(doc.generator().name(), "Gen");
    }
}
