//! Format parser registry and dispatch.

use std::cell::Cell;

use crate::error::{Error, ErrorCode, Result};
use crate::feed::Feed;
use crate::mapper::{AtomMapper, RdfMapper, Rss2Mapper};
use crate::source::DocumentSource;
use crate::{atom, rdf, rss2};

/// A parsed document in its native dialect.
#[derive(Debug, Clone)]
pub enum SpecificDocument {
    Rss2(rss2::Document),
    Rdf(rdf::Document),
    AtomFeed(atom::FeedDocument),
    AtomEntry(atom::EntryDocument),
}

/// Detection and parsing for one feed dialect.
pub trait FormatParser {
    /// Cheap structural check whether this parser handles the document.
    fn accept(&self, source: &DocumentSource) -> bool;

    /// Parse an accepted document. Fails with [`Error::InvalidFormat`]
    /// when the document lacks the dialect's required structure.
    fn parse(&self, source: &DocumentSource) -> Result<SpecificDocument>;

    /// Stable identifier of the dialect, usable as a parse hint.
    fn format(&self) -> &'static str;
}

/// Lifts a dialect document into the unified [`Feed`] model.
pub trait Mapper {
    fn map(&self, doc: &SpecificDocument) -> Feed;
}

/// Registry of format parsers, tried in registration order.
///
/// Each registry tracks the outcome of its most recent
/// [`parse`](ParserRegistry::parse) call in [`last_error`](ParserRegistry::last_error).
pub struct ParserRegistry {
    entries: Vec<(Box<dyn FormatParser>, Box<dyn Mapper>)>,
    last_error: Cell<ErrorCode>,
}

impl ParserRegistry {
    /// An empty registry with no parsers.
    pub fn new() -> ParserRegistry {
        ParserRegistry {
            entries: Vec::new(),
            last_error: Cell::new(ErrorCode::Success),
        }
    }

    /// A registry with the built-in parsers: RSS 2.0, then Atom, then RDF.
    pub fn with_default_parsers() -> ParserRegistry {
        let mut registry = ParserRegistry::new();
        registry.register_parser(Box::new(rss2::Parser), Box::new(Rss2Mapper));
        registry.register_parser(Box::new(atom::Parser), Box::new(AtomMapper));
        registry.register_parser(Box::new(rdf::Parser), Box::new(RdfMapper));
        registry
    }

    /// Register a parser together with its mapper. Rejects a second
    /// parser for an already-registered format.
    pub fn register_parser(&mut self, parser: Box<dyn FormatParser>, mapper: Box<dyn Mapper>) -> bool {
        if self.entries.iter().any(|(p, _)| p.format() == parser.format()) {
            return false;
        }
        self.entries.push((parser, mapper));
        true
    }

    /// Replace the mapper of a registered format. Returns `false` when
    /// the format is unknown.
    pub fn change_mapper(&mut self, format: &str, mapper: Box<dyn Mapper>) -> bool {
        for (parser, slot) in &mut self.entries {
            if parser.format() == format {
                *slot = mapper;
                return true;
            }
        }
        false
    }

    /// Formats currently registered, in registration order.
    pub fn formats(&self) -> Vec<&'static str> {
        self.entries.iter().map(|(p, _)| p.format()).collect()
    }

    /// Outcome of the most recent parse call on this registry.
    pub fn last_error(&self) -> ErrorCode {
        self.last_error.get()
    }

    /// Parse a source into the unified feed model.
    ///
    /// With a `format_hint` naming a registered format that accepts the
    /// document, only that parser runs. Otherwise parsers are tried in
    /// registration order and the first acceptor decides the outcome;
    /// acceptance is terminal, a failed parse does not fall through to
    /// later parsers.
    pub fn parse(&self, source: &DocumentSource, format_hint: Option<&str>) -> Result<Feed> {
        self.last_error.set(ErrorCode::Success);

        if let Some(hint) = format_hint {
            if let Some((parser, mapper)) = self
                .entries
                .iter()
                .find(|(p, _)| p.format() == hint)
            {
                if parser.accept(source) {
                    return self.run(parser.as_ref(), mapper.as_ref(), source);
                }
            }
        }

        for (parser, mapper) in &self.entries {
            if parser.accept(source) {
                return self.run(parser.as_ref(), mapper.as_ref(), source);
            }
        }

        let error = if source.as_tree().is_none() {
            Error::InvalidXml
        } else {
            Error::XmlNotAccepted
        };
        self.last_error.set(error.code());
        Err(error)
    }

    fn run(&self, parser: &dyn FormatParser, mapper: &dyn Mapper, source: &DocumentSource) -> Result<Feed> {
        match parser.parse(source) {
            Ok(doc) => Ok(mapper.map(&doc)),
            Err(error) => {
                self.last_error.set(error.code());
                Err(error)
            }
        }
    }
}

impl Default for ParserRegistry {
    fn default() -> ParserRegistry {
        ParserRegistry::with_default_parsers()
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;
    use std::rc::Rc;

    use super::*;

    fn src(xml: &str) -> DocumentSource {
        DocumentSource::new(xml.as_bytes().to_vec(), "")
    }

    const RSS2: &str = "<rss version=\"2.0\"><channel><title>t</title></channel></rss>";
    const ATOM: &str = r#"<feed xmlns="http://www.w3.org/2005/Atom"><title>t</title></feed>"#;

    struct CountingParser {
        format: &'static str,
        accepts: bool,
        accept_calls: Rc<Cell<u32>>,
    }

    impl FormatParser for CountingParser {
        fn accept(&self, _source: &DocumentSource) -> bool {
            self.accept_calls.set(self.accept_calls.get() + 1);
            self.accepts
        }

        fn parse(&self, source: &DocumentSource) -> Result<SpecificDocument> {
            Ok(SpecificDocument::Rss2(rss2::Document::from_source(source)))
        }

        fn format(&self) -> &'static str {
            self.format
        }
    }

    struct PassMapper;

    impl Mapper for PassMapper {
        fn map(&self, doc: &SpecificDocument) -> Feed {
            match doc {
                SpecificDocument::Rss2(d) => Feed::Rss2(crate::mapper::FeedRss2::new(d.clone())),
                _ => unreachable!(),
            }
        }
    }

    #[test]
    fn test_dispatch_by_root_element() {
        let registry = ParserRegistry::with_default_parsers();
        assert!(matches!(
            registry.parse(&src(RSS2), None).unwrap().specific_document(),
            SpecificDocument::Rss2(_)
        ));
        assert!(matches!(
            registry.parse(&src(ATOM), None).unwrap().specific_document(),
            SpecificDocument::AtomFeed(_)
        ));
        assert_eq!(registry.last_error(), ErrorCode::Success);
    }

    #[test]
    fn test_error_classification() {
        let registry = ParserRegistry::with_default_parsers();
        assert!(matches!(registry.parse(&src("not xml"), None), Err(Error::InvalidXml)));
        assert_eq!(registry.last_error(), ErrorCode::InvalidXml);

        assert!(matches!(
            registry.parse(&src("<unrelated/>"), None),
            Err(Error::XmlNotAccepted)
        ));
        assert_eq!(registry.last_error(), ErrorCode::XmlNotAccepted);

        assert!(matches!(
            registry.parse(&src("<rss version=\"2.0\"/>"), None),
            Err(Error::InvalidFormat)
        ));
        assert_eq!(registry.last_error(), ErrorCode::InvalidFormat);

        // success resets the sticky error
        registry.parse(&src(RSS2), None).unwrap();
        assert_eq!(registry.last_error(), ErrorCode::Success);
    }

    #[test]
    fn test_hint_short_circuits_detection() {
        let calls_a = Rc::new(Cell::new(0));
        let calls_b = Rc::new(Cell::new(0));
        let mut registry = ParserRegistry::new();
        registry.register_parser(
            Box::new(CountingParser { format: "a", accepts: true, accept_calls: Rc::clone(&calls_a) }),
            Box::new(PassMapper),
        );
        registry.register_parser(
            Box::new(CountingParser { format: "b", accepts: true, accept_calls: Rc::clone(&calls_b) }),
            Box::new(PassMapper),
        );

        registry.parse(&src(RSS2), Some("b")).unwrap();
        assert_eq!(calls_a.get(), 0);
        assert_eq!(calls_b.get(), 1);
    }

    #[test]
    fn test_rejecting_hint_falls_back_to_detection() {
        let calls_a = Rc::new(Cell::new(0));
        let calls_b = Rc::new(Cell::new(0));
        let mut registry = ParserRegistry::new();
        registry.register_parser(
            Box::new(CountingParser { format: "b", accepts: false, accept_calls: Rc::clone(&calls_b) }),
            Box::new(PassMapper),
        );
        registry.register_parser(
            Box::new(CountingParser { format: "a", accepts: true, accept_calls: Rc::clone(&calls_a) }),
            Box::new(PassMapper),
        );

        registry.parse(&src(RSS2), Some("b")).unwrap();
        // hint probed once, then detection re-probed it in registration order
        assert_eq!(calls_b.get(), 2);
        assert_eq!(calls_a.get(), 1);
    }

    #[test]
    fn test_duplicate_format_rejected() {
        let mut registry = ParserRegistry::with_default_parsers();
        assert!(!registry.register_parser(Box::new(rss2::Parser), Box::new(PassMapper)));
        assert_eq!(registry.formats(), vec!["rss2", "atom", "rdf"]);
    }

    #[test]
    fn test_change_mapper() {
        let mut registry = ParserRegistry::with_default_parsers();
        assert!(registry.change_mapper("rss2", Box::new(PassMapper)));
        assert!(!registry.change_mapper("unknown", Box::new(PassMapper)));
        registry.parse(&src(RSS2), None).unwrap();
    }

    #[test]
    fn test_parse_is_deterministic() {
        let registry = ParserRegistry::with_default_parsers();
        let a = registry.parse(&src(RSS2), None).unwrap();
        let b = registry.parse(&src(RSS2), None).unwrap();
        assert_eq!(a.title(), b.title());
    }
}
