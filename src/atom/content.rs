//! Atom `<content>` element wrapper and content-type classification.

use std::rc::Rc;

use base64::Engine;
use base64::engine::general_purpose::STANDARD as BASE64;
use once_cell::unsync::OnceCell;

use crate::util::text::plain_text_to_html;
use crate::xml::ElementView;

/// How a content payload is to be interpreted, derived from its declared
/// media type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    /// Plain text; must be escaped before embedding in HTML.
    PlainText,
    /// HTML carried as escaped character data.
    EscapedHtml,
    /// Inline XML (XHTML or an arbitrary vocabulary).
    Xml,
    /// Base64-encoded binary data.
    Binary,
}

/// Media types that denote inline XML payloads.
const XML_TYPES: &[&str] = &[
    "xhtml",
    "application/xhtml+xml",
    "text/xml",
    "application/xml",
    "text/xml-external-parsed-entity",
    "application/xml-external-parsed-entity",
    "application/xml-dtd",
    "text/x-dtd",
];

/// Classify a `type` attribute value, also honoring the Atom rule that an
/// absent type with a `src` attribute means the payload is out of line.
pub(crate) fn map_type_to_format(type_attr: &str, src: &str) -> Format {
    if type_attr.is_empty() && src.is_empty() {
        return Format::PlainText;
    }
    let lower = type_attr.to_ascii_lowercase();
    if lower == "html" || lower == "text/html" {
        return Format::EscapedHtml;
    }
    if lower == "text" || (lower.starts_with("text/") && !lower.starts_with("text/xml")) {
        return Format::PlainText;
    }
    if XML_TYPES.contains(&lower.as_str()) || lower.ends_with("+xml") || lower.ends_with("/xml") {
        return Format::Xml;
    }
    Format::Binary
}

/// The content of an Atom entry.
#[derive(Debug, Clone)]
pub struct Content {
    elem: ElementView,
    format: Rc<OnceCell<Format>>,
}

impl Content {
    pub(crate) fn new(elem: ElementView) -> Content {
        Content {
            elem,
            format: Rc::new(OnceCell::new()),
        }
    }

    pub fn is_null(&self) -> bool {
        self.elem.is_null()
    }

    /// Declared media type, empty when none was given.
    pub fn content_type(&self) -> String {
        self.elem.attribute("type", "")
    }

    /// URI of out-of-line content, resolved against `xml:base`.
    pub fn src(&self) -> String {
        let src = self.elem.attribute("src", "");
        if src.is_empty() { src } else { self.elem.complete_uri(&src) }
    }

    pub fn format(&self) -> Format {
        *self.format.get_or_init(|| {
            map_type_to_format(&self.content_type(), &self.elem.attribute("src", ""))
        })
    }

    pub fn is_binary(&self) -> bool {
        self.format() == Format::Binary
    }

    /// Content rendered as HTML. Binary content yields an empty string.
    pub fn as_string(&self) -> String {
        match self.format() {
            Format::PlainText => plain_text_to_html(self.elem.text().trim()),
            Format::EscapedHtml => self.elem.text().trim().to_owned(),
            Format::Xml => self.elem.child_nodes_as_xml(),
            Format::Binary => String::new(),
        }
    }

    /// Decoded binary content; empty for non-binary formats or when the
    /// base64 payload is damaged.
    pub fn as_bytes(&self) -> Vec<u8> {
        if !self.is_binary() {
            return Vec::new();
        }
        let compact: String = self.elem.text().chars().filter(|c| !c.is_whitespace()).collect();
        BASE64.decode(compact.as_bytes()).unwrap_or_default()
    }
}
