//! Format detector and parser for RDF-based feeds (RSS 0.9 and 1.0).

use std::rc::Rc;

use crate::error::{Error, Result};
use crate::ns;
use crate::rdf::model::{Model, Node};
use crate::rdf::reader::read_graph;
use crate::rdf::vocab;
use crate::rdf::Document;
use crate::registry::{FormatParser, SpecificDocument};
use crate::source::DocumentSource;

/// Properties shared by RSS 0.9 and 1.0, remapped term for term.
const SHARED_PROPERTIES: &[&str] = &[
    "title",
    "description",
    "link",
    "name",
    "url",
    "image",
    "textinput",
];

/// Accepts documents whose root element is in the RDF namespace.
#[derive(Debug, Default)]
pub struct Parser;

impl FormatParser for Parser {
    fn accept(&self, source: &DocumentSource) -> bool {
        source.root_element().namespace() == ns::RDF
    }

    fn parse(&self, source: &DocumentSource) -> Result<SpecificDocument> {
        let root = source.root_element();
        let mut model = read_graph(&root);

        let is_09 = !model.resources_with_type(&vocab::rss09("channel")).is_empty();
        if is_09 {
            map_09_to_10(&mut model);
            add_sequence_for_09(&mut model);
        }

        let channels = model.resources_with_type(&vocab::rss10("channel"));
        let Some(channel) = channels.into_iter().next() else {
            return Err(Error::InvalidFormat);
        };
        Ok(SpecificDocument::Rdf(Document::new(Rc::new(model), channel)))
    }

    fn format(&self) -> &'static str {
        "rdf"
    }
}

/// Mirror every RSS 0.9 statement onto the RSS 1.0 vocabulary and retype
/// the channel.
fn map_09_to_10(model: &mut Model) {
    for term in SHARED_PROPERTIES {
        let old = vocab::rss09(term);
        let new = vocab::rss10(term);
        let mapped: Vec<(String, Node)> = model
            .statements()
            .iter()
            .filter(|s| s.predicate == old)
            .map(|s| (s.subject.clone(), s.object.clone()))
            .collect();
        for (subject, object) in mapped {
            model.add_statement(subject, new.clone(), object);
        }
    }

    let channels = model.resources_with_type(&vocab::rss09("channel"));
    let rdf_type = vocab::rdf("type");
    for channel in channels {
        model.remove_statements(&channel, &rdf_type);
        model.add_statement(
            channel,
            rdf_type.clone(),
            Node::Resource { uri: vocab::rss10("channel") },
        );
    }
}

/// RSS 0.9 has no `rdf:Seq`; synthesize one in document order so item
/// ordering survives the vocabulary mapping.
fn add_sequence_for_09(model: &mut Model) {
    let channels = model.resources_with_type(&vocab::rss10("channel"));
    let Some(channel) = channels.into_iter().next() else {
        return;
    };
    let items = model.resources_with_type(&vocab::rss09("item"));

    let seq_id = model.next_anon_id();
    model.register_sequence(seq_id.clone());
    model.add_statement(
        channel,
        vocab::rss10("items"),
        Node::Sequence { id: seq_id.clone() },
    );
    let rdf_type = vocab::rdf("type");
    let item_type = vocab::rss10("item");
    for item in items {
        model.append_to_sequence(&seq_id, Node::Resource { uri: item.clone() });
        model.add_statement(item, rdf_type.clone(), Node::Resource { uri: item_type.clone() });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn src(xml: &str) -> DocumentSource {
        DocumentSource::new(xml.as_bytes().to_vec(), "")
    }

    const RSS09: &str = concat!(
        r#"<rdf:RDF xmlns:rdf="http://www.w3.org/1999/02/22-rdf-syntax-ns#""#,
        r#" xmlns="http://my.netscape.com/rdf/simple/0.9/">"#,
        r#"<channel><title>Mozilla Dot Org</title>"#,
        r#"<link>http://www.mozilla.org</link></channel>"#,
        r#"<item><title>New Status Updates</title>"#,
        r#"<link>http://www.mozilla.org/status/</link></item>"#,
        r#"<item><title>Bugzilla Reorganized</title>"#,
        r#"<link>http://www.mozilla.org/bugs/</link></item>"#,
        r#"</rdf:RDF>"#,
    );

    #[test]
    fn test_accepts_rdf_root_namespace() {
        assert!(Parser.accept(&src(RSS09)));
        assert!(!Parser.accept(&src("<rss version=\"2.0\"><channel/></rss>")));
    }

    #[test]
    fn test_rss09_is_parsed_as_rss10() {
        let doc = match Parser.parse(&src(RSS09)) {
            Ok(SpecificDocument::Rdf(doc)) => doc,
            other => panic!("unexpected result: {other:?}"),
        };
        assert_eq!(doc.title(), "Mozilla Dot Org");
        assert_eq!(doc.link(), "http://www.mozilla.org");
        let titles: Vec<String> = doc.items().iter().map(|i| i.title()).collect();
        // document order survives despite anonymous resource ids
        assert_eq!(
            titles,
            vec!["New Status Updates".to_owned(), "Bugzilla Reorganized".to_owned()]
        );
    }

    #[test]
    fn test_rdf_without_channel_fails_validation() {
        let xml = concat!(
            r#"<rdf:RDF xmlns:rdf="http://www.w3.org/1999/02/22-rdf-syntax-ns#""#,
            r#" xmlns="http://purl.org/rss/1.0/">"#,
            r#"<item rdf:about="x"><title>t</title></item></rdf:RDF>"#,
        );
        assert!(matches!(Parser.parse(&src(xml)), Err(Error::InvalidFormat)));
    }
}
