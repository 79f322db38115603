//! Atom adapters for the unified feed model.

use std::collections::BTreeMap;

use crate::atom;
use crate::category::Category;
use crate::enclosure::Enclosure;
use crate::feed::Feed;
use crate::image::Image;
use crate::item::Item;
use crate::mapper::{element_markup, property_key, synthetic_id};
use crate::ns;
use crate::person::Person;
use crate::registry::{Mapper, SpecificDocument};
use crate::xml::ElementView;

/// Maps Atom documents, both whole feeds and standalone entries, into
/// the unified model. A standalone entry becomes a single-item feed with
/// empty feed metadata.
pub struct AtomMapper;

impl Mapper for AtomMapper {
    fn map(&self, doc: &SpecificDocument) -> Feed {
        let feed = match doc {
            SpecificDocument::AtomFeed(doc) => FeedAtom::from_feed(doc.clone()),
            SpecificDocument::AtomEntry(doc) => FeedAtom::from_entry(doc.clone()),
            _ => FeedAtom::from_feed(atom::FeedDocument::new(ElementView::null())),
        };
        Feed::Atom(feed)
    }
}

fn person(p: &atom::Person) -> Person {
    let opt = |s: String| if s.is_empty() { None } else { Some(s) };
    Person::new(opt(p.name()), opt(p.uri()), opt(p.email()))
}

fn alternate_href(links: &[atom::Link]) -> String {
    links
        .iter()
        .find(|l| l.rel() == "alternate")
        .map(atom::Link::href)
        .unwrap_or_default()
}

#[derive(Debug, Clone)]
enum AtomDoc {
    Feed(atom::FeedDocument),
    Entry(atom::EntryDocument),
}

/// Unified-feed view of an Atom document.
#[derive(Debug, Clone)]
pub struct FeedAtom {
    doc: AtomDoc,
}

impl FeedAtom {
    pub(crate) fn from_feed(doc: atom::FeedDocument) -> FeedAtom {
        FeedAtom { doc: AtomDoc::Feed(doc) }
    }

    pub(crate) fn from_entry(doc: atom::EntryDocument) -> FeedAtom {
        FeedAtom { doc: AtomDoc::Entry(doc) }
    }

    pub(crate) fn specific_document(&self) -> SpecificDocument {
        match &self.doc {
            AtomDoc::Feed(doc) => SpecificDocument::AtomFeed(doc.clone()),
            AtomDoc::Entry(doc) => SpecificDocument::AtomEntry(doc.clone()),
        }
    }

    fn feed(&self) -> Option<&atom::FeedDocument> {
        match &self.doc {
            AtomDoc::Feed(doc) => Some(doc),
            AtomDoc::Entry(_) => None,
        }
    }

    pub fn title(&self) -> String {
        self.feed().map(atom::FeedDocument::title).unwrap_or_default()
    }

    pub fn description(&self) -> String {
        self.feed().map(atom::FeedDocument::subtitle).unwrap_or_default()
    }

    pub fn link(&self) -> String {
        self.feed()
            .map(|doc| alternate_href(&doc.links()))
            .unwrap_or_default()
    }

    pub fn authors(&self) -> Vec<Person> {
        match self.feed() {
            Some(doc) => doc
                .authors()
                .iter()
                .chain(doc.contributors().iter())
                .map(person)
                .collect(),
            None => Vec::new(),
        }
    }

    pub fn categories(&self) -> Vec<Category> {
        match self.feed() {
            Some(doc) => doc.categories().into_iter().map(Category::Atom).collect(),
            None => Vec::new(),
        }
    }

    pub fn items(&self) -> Vec<Item> {
        match &self.doc {
            AtomDoc::Feed(doc) => doc
                .entries()
                .into_iter()
                .map(|entry| Item::Atom(ItemAtom::new(entry)))
                .collect(),
            AtomDoc::Entry(doc) => vec![Item::Atom(ItemAtom::new(doc.entry()))],
        }
    }

    pub fn language(&self) -> String {
        self.feed().map(atom::FeedDocument::xml_lang).unwrap_or_default()
    }

    pub fn copyright(&self) -> String {
        self.feed().map(atom::FeedDocument::rights).unwrap_or_default()
    }

    pub fn image(&self) -> Image {
        match self.feed() {
            Some(doc) => Image::Atom { uri: doc.logo() },
            None => Image::None,
        }
    }

    pub fn icon(&self) -> Image {
        match self.feed() {
            Some(doc) => Image::Atom { uri: doc.icon() },
            None => Image::None,
        }
    }

    pub fn additional_properties(&self) -> BTreeMap<String, String> {
        BTreeMap::new()
    }
}

/// Unified-item view of an Atom entry.
#[derive(Debug, Clone)]
pub struct ItemAtom {
    entry: atom::Entry,
}

impl ItemAtom {
    pub(crate) fn new(entry: atom::Entry) -> ItemAtom {
        ItemAtom { entry }
    }

    pub(crate) fn entry(&self) -> &atom::Entry {
        &self.entry
    }

    pub fn title(&self) -> String {
        self.entry.title()
    }

    pub fn link(&self) -> String {
        alternate_href(&self.entry.links())
    }

    pub fn description(&self) -> String {
        self.entry.summary()
    }

    pub fn content(&self) -> String {
        self.entry.content().as_string()
    }

    pub fn date_published(&self) -> i64 {
        let published = self.entry.published();
        if published != 0 { published } else { self.entry.updated() }
    }

    pub fn date_updated(&self) -> i64 {
        let updated = self.entry.updated();
        if updated != 0 { updated } else { self.entry.published() }
    }

    pub fn language(&self) -> String {
        self.entry.xml_lang()
    }

    /// The `atom:id`, or a stable synthetic id when the feed breaks the
    /// spec and omits one.
    pub fn id(&self) -> String {
        let id = self.entry.id();
        if !id.is_empty() {
            return id;
        }
        synthetic_id(&self.title(), &self.description(), &self.link(), &self.content())
    }

    pub fn authors(&self) -> Vec<Person> {
        self.entry
            .authors()
            .iter()
            .chain(self.entry.contributors().iter())
            .map(person)
            .collect()
    }

    pub fn categories(&self) -> Vec<Category> {
        self.entry.categories().into_iter().map(Category::Atom).collect()
    }

    pub fn enclosures(&self) -> Vec<Enclosure> {
        self.entry
            .links()
            .into_iter()
            .filter(|l| l.rel() == "enclosure")
            .map(Enclosure::Atom)
            .collect()
    }

    pub fn comments_count(&self) -> i32 {
        self.entry
            .element()
            .extract_element_text_ns(ns::SLASH, "comments")
            .and_then(|c| c.trim().parse().ok())
            .unwrap_or(-1)
    }

    pub fn comments_link(&self) -> String {
        String::new()
    }

    pub fn comments_feed(&self) -> String {
        self.entry
            .element()
            .extract_element_text_ns(ns::COMMENT_API, "commentRss")
            .unwrap_or_default()
    }

    pub fn comment_post_uri(&self) -> String {
        self.entry
            .element()
            .extract_element_text_ns(ns::COMMENT_API, "comment")
            .unwrap_or_default()
    }

    pub fn additional_properties(&self) -> BTreeMap<String, String> {
        self.entry
            .unhandled_elements()
            .iter()
            .map(|el| (property_key(el), element_markup(el)))
            .collect()
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
        r#"<feed xmlns="http://www.w3.org/2005/Atom" xml:lang="en">"#,
        r#"<title>Example Feed</title><subtitle>all the news</subtitle>"#,
        r#"<link rel="self" href="http://example.com/feed.atom"/>"#,
        r#"<link href="http://example.com/"/>"#,
        r#"<author><name>Shared Author</name><email>a@example.com</email></author>"#,
        r#"<logo>http://example.com/logo.png</logo>"#,
        r#"<entry><id>urn:uuid:1</id><title>Entry One</title>"#,
        r#"<link rel="alternate" href="http://example.com/1"/>"#,
        r#"<link rel="enclosure" href="http://example.com/1.mp3" type="audio/mpeg" length="1234"/>"#,
        r#"<published>2003-12-13T18:30:02Z</published>"#,
        r#"<summary>first</summary></entry>"#,
        r#"</feed>"#,
    );

    #[test]
    fn test_feed_mapping() {
        let f = feed(FEED);
        assert_eq!(f.title(), "Example Feed");
        assert_eq!(f.description(), "all the news");
        // implicit rel="alternate"
        assert_eq!(f.link(), "http://example.com/");
        assert_eq!(f.language(), "en");
        assert_eq!(f.image().url(), "http://example.com/logo.png");
        assert!(f.icon().is_null());
        assert_eq!(f.authors()[0].name.as_deref(), Some("Shared Author"));
    }

    #[test]
    fn test_item_mapping() {
        let f = feed(FEED);
        let items = f.items();
        assert_eq!(items.len(), 1);
        let item = &items[0];
        assert_eq!(item.id(), "urn:uuid:1");
        assert_eq!(item.link(), "http://example.com/1");
        assert_eq!(item.description(), "first");
        // published fills the missing updated date
        assert_eq!(item.date_published(), 1071340202);
        assert_eq!(item.date_updated(), 1071340202);
        let enclosures = item.enclosures();
        assert_eq!(enclosures.len(), 1);
        assert_eq!(enclosures[0].url(), "http://example.com/1.mp3");
        assert_eq!(enclosures[0].length(), 1234);
        assert_eq!(item.authors()[0].name.as_deref(), Some("Shared Author"));
    }

    #[test]
    fn test_standalone_entry_becomes_single_item_feed() {
        let f = feed(concat!(
            r#"<entry xmlns="http://www.w3.org/2005/Atom">"#,
            r#"<id>urn:uuid:9</id><title>Lone</title></entry>"#,
        ));
        assert_eq!(f.title(), "");
        assert!(f.link().is_empty());
        let items = f.items();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].id(), "urn:uuid:9");
        assert_eq!(items[0].title(), "Lone");
    }
}
