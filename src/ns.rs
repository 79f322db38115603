//! Namespace URIs used by the supported feed dialects and their common
//! extension modules.

/// The `xml:` namespace, carrying `xml:base` and `xml:lang`.
pub const XML: &str = "http://www.w3.org/XML/1998/namespace";

/// Namespace bound to `xmlns` declarations themselves.
pub const XMLNS: &str = "http://www.w3.org/2000/xmlns/";

/// XHTML, used for inline `body`/`div` content payloads.
pub const XHTML: &str = "http://www.w3.org/1999/xhtml";

/// Atom 1.0.
pub const ATOM10: &str = "http://www.w3.org/2005/Atom";

/// Atom 0.3, converted to the 1.0 model on parse.
pub const ATOM03: &str = "http://purl.org/atom/ns#";

/// RDF syntax namespace, the root namespace of RDF/RSS 1.0 documents.
pub const RDF: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#";

/// RSS 1.0 vocabulary.
pub const RSS10: &str = "http://purl.org/rss/1.0/";

/// RSS 0.9 vocabulary, remapped onto the RSS 1.0 vocabulary on parse.
pub const RSS09: &str = "http://my.netscape.com/rdf/simple/0.9/";

/// Dublin Core metadata terms (`dc:`).
pub const DUBLIN_CORE: &str = "http://purl.org/dc/elements/1.1/";

/// RSS 1.0 content module (`content:encoded`).
pub const CONTENT: &str = "http://purl.org/rss/1.0/modules/content/";

/// RSS 1.0 syndication module (update period/frequency/base).
pub const SYNDICATION: &str = "http://purl.org/rss/1.0/modules/syndication/";

/// Slash module (`slash:comments`).
pub const SLASH: &str = "http://purl.org/rss/1.0/modules/slash/";

/// Well-Formed Web comment API (`wfw:`).
pub const COMMENT_API: &str = "http://wellformedweb.org/CommentAPI/";

/// iTunes podcast extensions.
pub const ITUNES: &str = "http://www.itunes.com/dtds/podcast-1.0.dtd";
