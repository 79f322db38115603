//! RSS 2.0 adapters for the unified feed model.

use std::collections::BTreeMap;

use crate::category::Category;
use crate::enclosure::Enclosure;
use crate::feed::Feed;
use crate::image::Image;
use crate::item::Item;
use crate::mapper::{element_markup, property_key, synthetic_id};
use crate::ns;
use crate::person::Person;
use crate::registry::{Mapper, SpecificDocument};
use crate::rss2;
use crate::source::DocumentSource;
use crate::util::dates::{DateFormat, parse_date};

/// Maps RSS 2.0 documents into the unified model. Any other dialect
/// yields an empty RSS 2.0 feed.
pub struct Rss2Mapper;

impl Mapper for Rss2Mapper {
    fn map(&self, doc: &SpecificDocument) -> Feed {
        let doc = match doc {
            SpecificDocument::Rss2(doc) => doc.clone(),
            _ => rss2::Document::from_source(&DocumentSource::new(Vec::new(), "")),
        };
        Feed::Rss2(FeedRss2::new(doc))
    }
}

/// Unified-feed view of an RSS 2.0 document.
#[derive(Debug, Clone)]
pub struct FeedRss2 {
    doc: rss2::Document,
}

impl FeedRss2 {
    pub(crate) fn new(doc: rss2::Document) -> FeedRss2 {
        FeedRss2 { doc }
    }

    pub(crate) fn document(&self) -> &rss2::Document {
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

    /// RSS 2.0 has no feed-level author field.
    pub fn authors(&self) -> Vec<Person> {
        Vec::new()
    }

    pub fn categories(&self) -> Vec<Category> {
        self.doc.categories().into_iter().map(Category::Rss2).collect()
    }

    pub fn items(&self) -> Vec<Item> {
        self.doc
            .items()
            .into_iter()
            .map(|item| Item::Rss2(ItemRss2::new(item)))
            .collect()
    }

    pub fn language(&self) -> String {
        self.doc.language()
    }

    pub fn copyright(&self) -> String {
        self.doc.copyright()
    }

    pub fn image(&self) -> Image {
        let image = self.doc.image();
        if image.is_null() { Image::None } else { Image::Rss2(image) }
    }

    /// RSS 2.0 has no feed icon.
    pub fn icon(&self) -> Image {
        Image::None
    }

    pub fn additional_properties(&self) -> BTreeMap<String, String> {
        self.doc
            .unhandled_elements()
            .iter()
            .map(|el| (property_key(el), element_markup(el)))
            .collect()
    }
}

/// Unified-item view of an RSS 2.0 item.
#[derive(Debug, Clone)]
pub struct ItemRss2 {
    item: rss2::Item,
}

impl ItemRss2 {
    pub(crate) fn new(item: rss2::Item) -> ItemRss2 {
        ItemRss2 { item }
    }

    pub(crate) fn item(&self) -> &rss2::Item {
        &self.item
    }

    pub fn title(&self) -> String {
        self.item.title()
    }

    /// Item link; a permalink guid substitutes for a missing `<link>`.
    pub fn link(&self) -> String {
        let link = self.item.link();
        if !link.is_empty() {
            return link;
        }
        if self.item.guid_is_perma_link() {
            return self.item.guid();
        }
        String::new()
    }

    pub fn description(&self) -> String {
        self.item.description()
    }

    pub fn content(&self) -> String {
        self.item.content()
    }

    pub fn date_published(&self) -> i64 {
        self.item.pub_date()
    }

    /// Last update; feeds carrying `atom:updated` on items get it honored,
    /// everything else falls back to the publication date.
    pub fn date_updated(&self) -> i64 {
        match self.item.element().extract_element_text_ns(ns::ATOM10, "updated") {
            Some(date) => parse_date(&date, DateFormat::Iso),
            None => self.date_published(),
        }
    }

    /// RSS 2.0 items carry no language of their own.
    pub fn language(&self) -> String {
        String::new()
    }

    /// The guid, or a stable synthetic id derived from the item fields.
    pub fn id(&self) -> String {
        let guid = self.item.guid();
        if !guid.is_empty() {
            return guid;
        }
        synthetic_id(&self.title(), &self.description(), &self.link(), &self.content())
    }

    pub fn authors(&self) -> Vec<Person> {
        Person::from_string(&self.item.author()).into_iter().collect()
    }

    pub fn categories(&self) -> Vec<Category> {
        self.item.categories().into_iter().map(Category::Rss2).collect()
    }

    pub fn enclosures(&self) -> Vec<Enclosure> {
        self.item
            .enclosures()
            .into_iter()
            .map(|enclosure| Enclosure::Rss2 {
                item: self.item.clone(),
                enclosure,
            })
            .collect()
    }

    /// Comment count from `slash:comments`, `-1` when absent.
    pub fn comments_count(&self) -> i32 {
        self.item
            .element()
            .extract_element_text_ns(ns::SLASH, "comments")
            .and_then(|c| c.trim().parse().ok())
            .unwrap_or(-1)
    }

    pub fn comments_link(&self) -> String {
        self.item.comments()
    }

    /// Comment feed URL from the wfw module. Both capitalizations of
    /// `commentRss` occur in the wild.
    pub fn comments_feed(&self) -> String {
        self.item
            .element()
            .extract_element_text_ns(ns::COMMENT_API, "commentRss")
            .or_else(|| {
                self.item
                    .element()
                    .extract_element_text_ns(ns::COMMENT_API, "commentRSS")
            })
            .unwrap_or_default()
    }

    pub fn comment_post_uri(&self) -> String {
        self.item
            .element()
            .extract_element_text_ns(ns::COMMENT_API, "comment")
            .unwrap_or_default()
    }

    pub fn additional_properties(&self) -> BTreeMap<String, String> {
        self.item
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

    fn feed(channel: &str) -> Feed {
        let xml = format!(
            concat!(
                r#"<rss version="2.0" xmlns:slash="http://purl.org/rss/1.0/modules/slash/""#,
                r#" xmlns:wfw="http://wellformedweb.org/CommentAPI/""#,
                r#" xmlns:atom="http://www.w3.org/2005/Atom">"#,
                "<channel>{}</channel></rss>",
            ),
            channel
        );
        ParserRegistry::with_default_parsers()
            .parse(&DocumentSource::new(xml.into_bytes(), ""), None)
            .expect("valid feed")
    }

    fn first_item(channel: &str) -> Item {
        feed(channel).items().into_iter().next().expect("one item")
    }

    #[test]
    fn test_permalink_guid_substitutes_for_link() {
        let item = first_item("<item><guid>http://example.com/1</guid></item>");
        assert_eq!(item.link(), "http://example.com/1");
        assert_eq!(item.id(), "http://example.com/1");

        let item = first_item(r#"<item><guid isPermaLink="false">tag:1</guid></item>"#);
        assert_eq!(item.link(), "");
        assert_eq!(item.id(), "tag:1");
    }

    #[test]
    fn test_synthetic_id_when_guid_missing() {
        let item = first_item("<item><title>t</title></item>");
        let id = item.id();
        assert!(id.starts_with("hash:"));
        let again = first_item("<item><title>t</title></item>");
        assert_eq!(id, again.id());
        let changed = first_item("<item><title>u</title></item>");
        assert_ne!(id, changed.id());
    }

    #[test]
    fn test_comment_extensions() {
        let item = first_item(concat!(
            "<item><slash:comments>12</slash:comments>",
            "<comments>http://example.com/c</comments>",
            "<wfw:commentRss>http://example.com/c.rss</wfw:commentRss>",
            "<wfw:comment>http://example.com/post</wfw:comment></item>",
        ));
        assert_eq!(item.comments_count(), 12);
        assert_eq!(item.comments_link(), "http://example.com/c");
        assert_eq!(item.comments_feed(), "http://example.com/c.rss");
        assert_eq!(item.comment_post_uri(), "http://example.com/post");
    }

    #[test]
    fn test_comments_count_defaults() {
        let item = first_item("<item><title>t</title></item>");
        assert_eq!(item.comments_count(), -1);
    }

    #[test]
    fn test_atom_updated_on_item() {
        let item = first_item(concat!(
            "<item><pubDate>Sat, 07 Sep 2002 00:00:01 GMT</pubDate>",
            "<atom:updated>2002-09-08T00:00:01Z</atom:updated></item>",
        ));
        assert_eq!(item.date_published(), 1031356801);
        assert_eq!(item.date_updated(), 1031443201);
    }

    #[test]
    fn test_date_updated_falls_back_to_published() {
        let item = first_item("<item><pubDate>Sat, 07 Sep 2002 00:00:01 GMT</pubDate></item>");
        assert_eq!(item.date_updated(), 1031356801);
    }

    #[test]
    fn test_author_parsing() {
        let item = first_item("<item><author>joe@example.com (Joe User)</author></item>");
        let authors = item.authors();
        assert_eq!(authors.len(), 1);
        assert_eq!(authors[0].name.as_deref(), Some("Joe User"));
        assert_eq!(authors[0].email.as_deref(), Some("joe@example.com"));

        let item = first_item("<item><title>t</title></item>");
        assert!(item.authors().is_empty());
    }

    #[test]
    fn test_feed_level_mapping() {
        let f = feed(concat!(
            "<title>Chan</title><link>http://example.com/</link>",
            "<description>desc</description><language>en</language>",
            "<image><url>http://example.com/i.png</url><title>i</title></image>",
        ));
        assert_eq!(f.title(), "Chan");
        assert_eq!(f.language(), "en");
        assert!(f.authors().is_empty());
        assert_eq!(f.image().url(), "http://example.com/i.png");
        assert!(f.icon().is_null());
    }
}
