//! Shared extraction helpers for the RSS 2.0 model.

use crate::ns;
use crate::xml::ElementView;

/// Extract rich item content.
///
/// `content:encoded` wins when present. Failing that, inline XHTML in a
/// `body` or `div` child is serialized back to markup.
pub(crate) fn extract_content(parent: &ElementView) -> String {
    if let Some(encoded) = parent.extract_element_text_ns(ns::CONTENT, "encoded") {
        return encoded;
    }
    let body = parent.first_element_by_tag_name_ns(ns::XHTML, "body");
    if !body.is_null() {
        return body.child_nodes_as_xml();
    }
    let div = parent.first_element_by_tag_name_ns(ns::XHTML, "div");
    if !div.is_null() {
        return div.child_nodes_as_xml();
    }
    String::new()
}

#[cfg(test)]
mod tests {
    use std::rc::Rc;

    use super::*;
    use crate::xml::XmlTree;

    fn view(s: &str) -> ElementView {
        let tree = Rc::new(XmlTree::parse(s.as_bytes()).unwrap());
        let root = tree.document_element().unwrap();
        ElementView::new(tree, root)
    }

    #[test]
    fn test_content_encoded_wins() {
        let el = view(concat!(
            r#"<item xmlns:content="http://purl.org/rss/1.0/modules/content/""#,
            r#" xmlns:xhtml="http://www.w3.org/1999/xhtml">"#,
            r#"<content:encoded> &lt;b&gt;rich&lt;/b&gt; </content:encoded>"#,
            r#"<xhtml:body><p>ignored</p></xhtml:body></item>"#,
        ));
        assert_eq!(extract_content(&el), "<b>rich</b>");
    }

    #[test]
    fn test_xhtml_body_fallback() {
        let el = view(concat!(
            r#"<item xmlns:xhtml="http://www.w3.org/1999/xhtml">"#,
            r#"<xhtml:body><p>inline</p></xhtml:body></item>"#,
        ));
        assert_eq!(extract_content(&el), "<p>inline</p>");
    }

    #[test]
    fn test_no_content_is_empty() {
        assert_eq!(extract_content(&view("<item><title>t</title></item>")), "");
    }
}
