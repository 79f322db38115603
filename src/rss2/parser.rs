//! Format detector and parser for RSS 0.91/0.92/2.0.

use crate::error::{Error, Result};
use crate::registry::{FormatParser, SpecificDocument};
use crate::rss2::Document;
use crate::source::DocumentSource;

/// Accepts documents whose root element is `<rss>`.
#[derive(Debug, Default)]
pub struct Parser;

impl FormatParser for Parser {
    fn accept(&self, source: &DocumentSource) -> bool {
        source.root_element().name() == "rss"
    }

    fn parse(&self, source: &DocumentSource) -> Result<SpecificDocument> {
        let doc = Document::from_source(source);
        if !doc.is_valid() {
            return Err(Error::InvalidFormat);
        }
        Ok(SpecificDocument::Rss2(doc))
    }

    fn format(&self) -> &'static str {
        "rss2"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_rss_root_only() {
        let parser = Parser;
        let rss = DocumentSource::new(b"<rss version=\"0.92\"><channel/></rss>".to_vec(), "");
        assert!(parser.accept(&rss));
        let atom = DocumentSource::new(
            b"<feed xmlns=\"http://www.w3.org/2005/Atom\"/>".to_vec(),
            "",
        );
        assert!(!parser.accept(&atom));
        let garbage = DocumentSource::new(b"nope".to_vec(), "");
        assert!(!parser.accept(&garbage));
    }

    #[test]
    fn test_rss_without_channel_fails_validation() {
        let parser = Parser;
        let src = DocumentSource::new(b"<rss version=\"2.0\"/>".to_vec(), "");
        assert!(parser.accept(&src));
        assert!(matches!(parser.parse(&src), Err(Error::InvalidFormat)));
    }

    #[test]
    fn test_parse_valid_document() {
        let parser = Parser;
        let src = DocumentSource::new(
            b"<rss version=\"2.0\"><channel><title>t</title></channel></rss>".to_vec(),
            "",
        );
        match parser.parse(&src) {
            Ok(SpecificDocument::Rss2(doc)) => assert_eq!(doc.title(), "t"),
            other => panic!("unexpected result: {other:?}"),
        }
    }
}
