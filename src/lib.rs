//! Syndic - A Rust library for parsing syndication feeds
//!
//! This library parses the common web feed formats into one unified data
//! model, so applications can consume RSS and Atom feeds through a single
//! API without caring which dialect a site publishes.
//!
//! # Features
//!
//! - **RSS 2.0 Parser**: RSS 0.91/0.92/2.0, with Dublin Core fallbacks
//! - **RDF Parser**: RDF-based RSS 1.0, with RSS 0.9 remapped onto 1.0
//! - **Atom Parser**: Atom 1.0 feeds and standalone entries; Atom 0.3
//!   converted on the fly
//! - **Format detection**: Parsers are probed from the document structure,
//!   no MIME types needed
//! - **Unified model**: `Feed`/`Item`/`Category`/`Enclosure`/`Image`/
//!   `Person` abstract over the dialects; all text fields come back as HTML
//!
//! # Example - Parsing a feed
//!
//! ```
//! use syndic::{DocumentSource, ParserRegistry};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let xml = br#"<rss version="2.0"><channel>
//!     <title>Example Feed</title>
//!     <link>http://example.com/</link>
//!     <item><title>First Post</title><guid>http://example.com/1</guid></item>
//! </channel></rss>"#;
//!
//! let source = DocumentSource::new(xml.to_vec(), "http://example.com/feed");
//! let registry = ParserRegistry::with_default_parsers();
//! let feed = registry.parse(&source, None)?;
//!
//! println!("{}", feed.title());
//! for item in feed.items() {
//!     println!("- {} ({})", item.title(), item.id());
//! }
//! # Ok(())
//! # }
//! ```
//!
//! # Example - Accessing dialect-specific fields
//!
//! ```
//! use syndic::{DocumentSource, SpecificDocument, parse};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let xml = br#"<rss version="2.0"><channel>
//!     <title>t</title><ttl>60</ttl>
//! </channel></rss>"#;
//!
//! let source = DocumentSource::new(xml.to_vec(), "");
//! let feed = parse(&source, Some("rss2"))?;
//!
//! if let SpecificDocument::Rss2(doc) = feed.specific_document() {
//!     assert_eq!(doc.ttl(), 60);
//! }
//! # Ok(())
//! # }
//! ```

pub mod atom;
pub mod category;
pub mod enclosure;
pub mod error;
pub mod feed;
pub mod image;
pub mod item;
pub mod mapper;
pub mod ns;
pub mod person;
pub mod rdf;
pub mod registry;
pub mod rss2;
pub mod source;
pub mod util;
pub mod xml;

pub use category::Category;
pub use enclosure::Enclosure;
pub use error::{Error, ErrorCode, Result};
pub use feed::Feed;
pub use image::Image;
pub use item::{Item, SpecificItem};
pub use person::Person;
pub use registry::{FormatParser, Mapper, ParserRegistry, SpecificDocument};
pub use source::DocumentSource;

/// Parse a source with a fresh default registry.
///
/// Convenience for one-off parsing; reuse a [`ParserRegistry`] when
/// parsing many documents or when custom parsers are registered.
pub fn parse(source: &DocumentSource, format_hint: Option<&str>) -> Result<Feed> {
    ParserRegistry::with_default_parsers().parse(source, format_hint)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_crate_level_parse() {
        let source = DocumentSource::new(
            br#"<feed xmlns="http://www.w3.org/2005/Atom"><title>t</title></feed>"#.to_vec(),
            "",
        );
        let feed = parse(&source, None).unwrap();
        assert_eq!(feed.title(), "t");
    }

    #[test]
    fn test_crate_level_parse_reports_errors() {
        let source = DocumentSource::new(b"no feed here".to_vec(), "");
        assert!(matches!(parse(&source, None), Err(Error::InvalidXml)));
    }
}
