//! RDF (RSS 0.9/1.0) adapters for the unified feed model.

use std::collections::BTreeMap;
use std::rc::Rc;

use crate::category::Category;
use crate::enclosure::Enclosure;
use crate::feed::Feed;
use crate::image::Image;
use crate::item::Item;
use crate::mapper::synthetic_id;
use crate::person::Person;
use crate::rdf;
use crate::registry::{Mapper, SpecificDocument};

/// Maps RDF documents into the unified model. Any other dialect yields
/// an empty RDF feed.
pub struct RdfMapper;

impl Mapper for RdfMapper {
    fn map(&self, doc: &SpecificDocument) -> Feed {
        let doc = match doc {
            SpecificDocument::Rdf(doc) => doc.clone(),
            _ => rdf::Document::new(Rc::new(rdf::Model::new()), String::new()),
        };
        Feed::Rdf(FeedRdf::new(doc))
    }
}

/// Authors and contributors from Dublin Core, parsed from their
/// free-form strings; unparseable entries are dropped.
fn dc_persons(dc: &rdf::DublinCore) -> Vec<Person> {
    dc.creators()
        .iter()
        .chain(dc.contributors().iter())
        .filter_map(|s| Person::from_string(s))
        .collect()
}

/// Unified-feed view of an RDF document.
#[derive(Debug, Clone)]
pub struct FeedRdf {
    doc: rdf::Document,
}

impl FeedRdf {
    pub(crate) fn new(doc: rdf::Document) -> FeedRdf {
        FeedRdf { doc }
    }

    pub(crate) fn document(&self) -> &rdf::Document {
        &self.doc
    }

    pub fn title(&self) -> String {
        self.doc.title()
    }

    pub fn description(&self) -> String {
        self.doc.description()
    }

    pub fn link(&self) -> String {
        self.doc.link()
    }

    pub fn authors(&self) -> Vec<Person> {
        dc_persons(&self.doc.dc())
    }

    /// RSS 1.0 has no channel-level category vocabulary.
    pub fn categories(&self) -> Vec<Category> {
        Vec::new()
    }

    pub fn items(&self) -> Vec<Item> {
        self.doc
            .items()
            .into_iter()
            .map(|item| Item::Rdf(ItemRdf::new(item)))
            .collect()
    }

    pub fn language(&self) -> String {
        self.doc.dc().language()
    }

    pub fn copyright(&self) -> String {
        self.doc.dc().rights()
    }

    pub fn image(&self) -> Image {
        let image = self.doc.image();
        if image.is_null() { Image::None } else { Image::Rdf(image) }
    }

    pub fn icon(&self) -> Image {
        Image::None
    }

    pub fn additional_properties(&self) -> BTreeMap<String, String> {
        BTreeMap::new()
    }
}

/// Unified-item view of an RDF item.
#[derive(Debug, Clone)]
pub struct ItemRdf {
    item: rdf::Item,
}

impl ItemRdf {
    pub(crate) fn new(item: rdf::Item) -> ItemRdf {
        ItemRdf { item }
    }

    pub(crate) fn item(&self) -> &rdf::Item {
        &self.item
    }

    pub fn title(&self) -> String {
        self.item.title()
    }

    pub fn link(&self) -> String {
        self.item.link()
    }

    pub fn description(&self) -> String {
        self.item.description()
    }

    pub fn content(&self) -> String {
        self.item.encoded_content()
    }

    pub fn date_published(&self) -> i64 {
        self.item.dc().date()
    }

    /// RSS 1.0 has no separate update date.
    pub fn date_updated(&self) -> i64 {
        self.date_published()
    }

    pub fn language(&self) -> String {
        String::new()
    }

    /// The item's resource URI, or a stable synthetic id for anonymous
    /// resources.
    pub fn id(&self) -> String {
        if !self.item.is_anonymous() {
            return self.item.subject().to_owned();
        }
        synthetic_id(&self.title(), &self.description(), &self.link(), &self.content())
    }

    pub fn authors(&self) -> Vec<Person> {
        dc_persons(&self.item.dc())
    }

    pub fn categories(&self) -> Vec<Category> {
        self.item
            .dc()
            .subjects()
            .into_iter()
            .map(|term| Category::Rdf { term })
            .collect()
    }

    /// RSS 1.0 has no enclosure vocabulary.
    pub fn enclosures(&self) -> Vec<Enclosure> {
        Vec::new()
    }

    pub fn comments_count(&self) -> i32 {
        self.item.comments_count()
    }

    pub fn comments_link(&self) -> String {
        String::new()
    }

    pub fn comments_feed(&self) -> String {
        self.item.comments_feed()
    }

    pub fn comment_post_uri(&self) -> String {
        String::new()
    }

    pub fn additional_properties(&self) -> BTreeMap<String, String> {
        BTreeMap::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::ParserRegistry;
    use crate::source::DocumentSource;

    fn feed(xml: &str) -> Feed {
        ParserRegistry::with_default_parsers()
            .parse(&DocumentSource::new(xml.as_bytes().to_vec(), ""), None)
            .expect("valid feed")
    }

    const FEED: &str = concat!(
        r#"<rdf:RDF xmlns:rdf="http://www.w3.org/1999/02/22-rdf-syntax-ns#""#,
        r#" xmlns="http://purl.org/rss/1.0/""#,
        r#" xmlns:dc="http://purl.org/dc/elements/1.1/""#,
        r#" xmlns:content="http://purl.org/rss/1.0/modules/content/">"#,
        r#"<channel rdf:about="http://example.com/"><title>Chan</title>"#,
        r#"<description>desc</description><link>http://example.com/news</link>"#,
        r#"<dc:creator>Jane Doe &lt;jane@example.com&gt;</dc:creator>"#,
        r#"<dc:language>en</dc:language>"#,
        r#"<items><rdf:Seq><rdf:li rdf:resource="http://example.com/1"/></rdf:Seq></items>"#,
        r#"</channel>"#,
        r#"<item rdf:about="http://example.com/1"><title>Story</title>"#,
        r#"<dc:date>2002-09-07T00:00:01Z</dc:date>"#,
        r#"<dc:subject>science</dc:subject>"#,
        r#"<content:encoded>&lt;p&gt;full&lt;/p&gt;</content:encoded></item>"#,
        r#"</rdf:RDF>"#,
    );

    #[test]
    fn test_feed_mapping() {
        let f = feed(FEED);
        assert_eq!(f.title(), "Chan");
        assert_eq!(f.language(), "en");
        let authors = f.authors();
        assert_eq!(authors.len(), 1);
        assert_eq!(authors[0].name.as_deref(), Some("Jane Doe"));
        assert_eq!(authors[0].email.as_deref(), Some("jane@example.com"));
    }

    #[test]
    fn test_item_mapping() {
        let f = feed(FEED);
        let items = f.items();
        assert_eq!(items.len(), 1);
        let item = &items[0];
        assert_eq!(item.id(), "http://example.com/1");
        assert_eq!(item.date_published(), 1031356801);
        assert_eq!(item.date_updated(), 1031356801);
        assert_eq!(item.content(), "<p>full</p>");
        assert_eq!(item.categories()[0].term(), "science");
        assert!(item.enclosures().is_empty());
    }

    #[test]
    fn test_anonymous_item_gets_synthetic_id() {
        let f = feed(concat!(
            r#"<rdf:RDF xmlns:rdf="http://www.w3.org/1999/02/22-rdf-syntax-ns#""#,
            r#" xmlns="http://purl.org/rss/1.0/">"#,
            r#"<channel rdf:about="c"><title>t</title></channel>"#,
            r#"<item><title>anon</title></item></rdf:RDF>"#,
        ));
        let id = f.items()[0].id();
        assert!(id.starts_with("hash:"));
    }
}
