//! Text construct extraction shared by feed, entry, and source models.

use crate::ns;
use crate::util::text::{escape_special_characters, resolve_entities};
use crate::xml::ElementView;

/// Extract an Atom text construct child (`title`, `rights`, `subtitle`,
/// `summary`) as HTML.
///
/// Plain text gets escaped, escaped HTML passes through, and XHTML is
/// serialized back to markup. Unknown types yield an empty string.
pub(crate) fn extract_atom_text(parent: &ElementView, name: &str) -> String {
    let el = parent.first_element_by_tag_name_ns(ns::ATOM10, name);
    if el.is_null() {
        return String::new();
    }
    match el.attribute("type", "text").as_str() {
        "text" => {
            let mut text = el.text().trim().to_owned();
            if el.first_child_is_cdata() {
                text = resolve_entities(&text);
            }
            escape_special_characters(&text)
        }
        "html" => el.text().trim().to_owned(),
        "xhtml" => el.child_nodes_as_xml(),
        _ => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use std::rc::Rc;

    use super::*;
    use crate::xml::XmlTree;

    fn feed(inner: &str) -> ElementView {
        let xml = format!(r#"<feed xmlns="http://www.w3.org/2005/Atom">{inner}</feed>"#);
        let tree = Rc::new(XmlTree::parse(xml.as_bytes()).unwrap());
        let root = tree.document_element().unwrap();
        ElementView::new(tree, root)
    }

    #[test]
    fn test_plain_text_is_escaped() {
        let el = feed("<title>Dive into &amp; out</title>");
        assert_eq!(extract_atom_text(&el, "title"), "Dive into &amp; out");
    }

    #[test]
    fn test_html_passes_through() {
        let el = feed(r#"<title type="html">Less: &lt;b&gt;bold&lt;/b&gt;</title>"#);
        assert_eq!(extract_atom_text(&el, "title"), "Less: <b>bold</b>");
    }

    #[test]
    fn test_xhtml_is_serialized() {
        let el = feed(concat!(
            r#"<title type="xhtml"><div xmlns="http://www.w3.org/1999/xhtml">"#,
            r#"Less: <b>bold</b></div></title>"#,
        ));
        assert_eq!(
            extract_atom_text(&el, "title"),
            r#"<div xmlns="http://www.w3.org/1999/xhtml">Less: <b>bold</b></div>"#
        );
    }

    #[test]
    fn test_missing_and_unknown_types_are_empty() {
        let el = feed(r#"<title type="application/octet-stream">x</title>"#);
        assert_eq!(extract_atom_text(&el, "title"), "");
        assert_eq!(extract_atom_text(&el, "rights"), "");
    }
}
