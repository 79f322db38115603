//! RSS 1.0 channel document model over a statement graph.

use std::rc::Rc;

use once_cell::unsync::OnceCell;

use crate::rdf::model::{Model, Node};
use crate::rdf::vocab;
use crate::rdf::{DublinCore, Image, Item, SyndicationInfo, TextInput};
use crate::util::text::{normalize, string_contains_markup};

#[derive(Debug, Default)]
pub(crate) struct FormatHints {
    title_has_markup: OnceCell<bool>,
    description_has_markup: OnceCell<bool>,
}

/// An RSS 0.9/1.0 document: the channel resource plus the graph it
/// lives in. RSS 0.9 input is remapped to 1.0 vocabulary before a
/// document is built, so accessors only speak RSS 1.0.
#[derive(Debug, Clone)]
pub struct Document {
    model: Rc<Model>,
    subject: String,
    hints: Rc<FormatHints>,
}

impl Document {
    pub(crate) fn new(model: Rc<Model>, subject: String) -> Document {
        Document {
            model,
            subject,
            hints: Rc::new(FormatHints::default()),
        }
    }

    pub fn is_valid(&self) -> bool {
        !self.subject.is_empty()
    }

    pub(crate) fn model(&self) -> &Rc<Model> {
        &self.model
    }

    pub(crate) fn subject(&self) -> &str {
        &self.subject
    }

    pub fn title(&self) -> String {
        normalize(&self.model.property_text(&self.subject, &vocab::rss10("title")))
    }

    pub fn description(&self) -> String {
        normalize(&self.model.property_text(&self.subject, &vocab::rss10("description")))
    }

    pub fn link(&self) -> String {
        self.model.property_text(&self.subject, &vocab::rss10("link"))
    }

    pub fn dc(&self) -> DublinCore {
        DublinCore::new(Rc::clone(&self.model), self.subject.clone())
    }

    pub fn syndication_info(&self) -> SyndicationInfo {
        SyndicationInfo::new(Rc::clone(&self.model), self.subject.clone())
    }

    pub fn image(&self) -> Image {
        match self.model.property(&self.subject, &vocab::rss10("image")) {
            Some(node) if !node.resource_uri().is_empty() => {
                Image::new(Rc::clone(&self.model), node.resource_uri().to_owned())
            }
            _ => Image::null(),
        }
    }

    pub fn text_input(&self) -> TextInput {
        match self.model.property(&self.subject, &vocab::rss10("textinput")) {
            Some(node) if !node.resource_uri().is_empty() => {
                TextInput::new(Rc::clone(&self.model), node.resource_uri().to_owned())
            }
            _ => TextInput::null(),
        }
    }

    /// Items of the channel.
    ///
    /// Items are first sorted by resource URI, then reordered by the
    /// channel's `rdf:Seq` when it has one; items missing from the
    /// sequence sort first. RSS 0.9 feeds get a synthesized sequence
    /// during parsing, so document order wins there too.
    pub fn items(&self) -> Vec<Item> {
        let mut uris = self.model.resources_with_type(&vocab::rss10("item"));
        uris.sort();

        if let Some(Node::Sequence { id }) = self.model.property(&self.subject, &vocab::rss10("items")) {
            let seq_id = id.clone();
            let order: Vec<&str> = self
                .model
                .sequence(&seq_id)
                .iter()
                .map(Node::resource_uri)
                .collect();
            let index_of = |uri: &str| order.iter().position(|&o| o == uri).map_or(-1, |i| i as i64);
            uris.sort_by_key(|uri| index_of(uri));
        }

        uris.into_iter()
            .map(|uri| Item::new(Rc::clone(&self.model), uri, Some(self.clone())))
            .collect()
    }

    pub(crate) fn item_title_has_markup(&self) -> bool {
        *self
            .hints
            .title_has_markup
            .get_or_init(|| self.probe_items("title"))
    }

    pub(crate) fn item_description_has_markup(&self) -> bool {
        *self
            .hints
            .description_has_markup
            .get_or_init(|| self.probe_items("description"))
    }

    /// Inspect up to ten items to decide whether their `term` literals
    /// carry markup, so all items normalize consistently.
    fn probe_items(&self, term: &str) -> bool {
        let predicate = vocab::rss10(term);
        let mut combined = String::new();
        for uri in self.model.resources_with_type(&vocab::rss10("item")).iter().take(10) {
            combined.push_str(&self.model.property_text(uri, &predicate));
        }
        string_contains_markup(&combined)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rdf::Parser;
    use crate::registry::{FormatParser, SpecificDocument};
    use crate::source::DocumentSource;

    fn parse(xml: &str) -> Document {
        let src = DocumentSource::new(xml.as_bytes().to_vec(), "");
        match Parser.parse(&src) {
            Ok(SpecificDocument::Rdf(doc)) => doc,
            other => panic!("unexpected result: {other:?}"),
        }
    }

    const RSS10: &str = concat!(
        r#"<rdf:RDF xmlns:rdf="http://www.w3.org/1999/02/22-rdf-syntax-ns#""#,
        r#" xmlns="http://purl.org/rss/1.0/">"#,
        r#"<channel rdf:about="http://example.com/"><title>Meerkat</title>"#,
        r#"<description>An open wire service</description>"#,
        r#"<link>http://example.com/news</link>"#,
        r#"<items><rdf:Seq>"#,
        r#"<rdf:li rdf:resource="http://example.com/2"/>"#,
        r#"<rdf:li rdf:resource="http://example.com/1"/>"#,
        r#"</rdf:Seq></items></channel>"#,
        r#"<item rdf:about="http://example.com/1"><title>First by URI</title></item>"#,
        r#"<item rdf:about="http://example.com/2"><title>Second by URI</title></item>"#,
        r#"</rdf:RDF>"#,
    );

    #[test]
    fn test_channel_fields() {
        let doc = parse(RSS10);
        assert_eq!(doc.title(), "Meerkat");
        assert_eq!(doc.description(), "An open wire service");
        assert_eq!(doc.link(), "http://example.com/news");
    }

    #[test]
    fn test_sequence_controls_item_order() {
        let doc = parse(RSS10);
        let titles: Vec<String> = doc.items().iter().map(Item::title).collect();
        assert_eq!(titles, vec!["Second by URI".to_owned(), "First by URI".to_owned()]);
    }

    #[test]
    fn test_items_without_sequence_sort_by_uri() {
        let doc = parse(concat!(
            r#"<rdf:RDF xmlns:rdf="http://www.w3.org/1999/02/22-rdf-syntax-ns#""#,
            r#" xmlns="http://purl.org/rss/1.0/">"#,
            r#"<channel rdf:about="c"><title>t</title></channel>"#,
            r#"<item rdf:about="http://example.com/b"><title>B</title></item>"#,
            r#"<item rdf:about="http://example.com/a"><title>A</title></item>"#,
            r#"</rdf:RDF>"#,
        ));
        let titles: Vec<String> = doc.items().iter().map(Item::title).collect();
        assert_eq!(titles, vec!["A".to_owned(), "B".to_owned()]);
    }
}
