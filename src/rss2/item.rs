//! RSS 2.0 `<item>` element model.

use crate::ns;
use crate::rss2::document::Document;
use crate::rss2::{Category, Enclosure, Source};
use crate::util::dates::{DateFormat, parse_date};
use crate::util::text::normalize_as;
use crate::xml::ElementView;

/// One item of an RSS 2.0 channel.
///
/// Items keep a handle to their document so that title and description
/// normalization can use the document-wide format probe; an item built
/// without a document returns those fields raw.
#[derive(Debug, Clone)]
pub struct Item {
    elem: ElementView,
    doc: Option<Document>,
}

/// Item children the unified mapping consumes directly.
const HANDLED: &[(&str, &str)] = &[
    ("", "title"),
    ("", "link"),
    ("", "description"),
    ("", "pubDate"),
    ("", "expirationDate"),
    ("", "rating"),
    ("", "source"),
    ("", "guid"),
    ("", "comments"),
    ("", "author"),
    (ns::DUBLIN_CORE, "date"),
];

impl Item {
    pub(crate) fn new(elem: ElementView, doc: Option<Document>) -> Item {
        Item { elem, doc }
    }

    pub(crate) fn element(&self) -> &ElementView {
        &self.elem
    }

    /// Title, normalized to HTML using the document-wide format probe.
    pub fn title(&self) -> String {
        let original = self.original_title();
        match &self.doc {
            Some(doc) => {
                let fmt = doc.item_title_format();
                normalize_as(&original, fmt.is_cdata, fmt.contains_markup)
            }
            None => original,
        }
    }

    /// Description, normalized to HTML like [`title`](Self::title).
    pub fn description(&self) -> String {
        let original = self.original_description();
        match &self.doc {
            Some(doc) => {
                let fmt = doc.item_description_format();
                normalize_as(&original, fmt.is_cdata, fmt.contains_markup)
            }
            None => original,
        }
    }

    /// Title exactly as found in the feed.
    pub fn original_title(&self) -> String {
        self.extract("title")
    }

    /// Description exactly as found in the feed.
    pub fn original_description(&self) -> String {
        self.extract("description")
    }

    /// Item link, resolved against the channel link when relative.
    ///
    /// Some feeds put paths instead of full URLs into `<link>`; those are
    /// joined with the channel link so the result is usable.
    pub fn link(&self) -> String {
        let url = self.extract("link");
        if url.starts_with("http://") || url.starts_with("https://") {
            return url;
        }
        if url.is_empty() {
            return String::new();
        }
        let base = self.doc.as_ref().map(|d| d.link()).unwrap_or_default();
        if base.is_empty() {
            return url;
        }
        if url.starts_with('/') || base.ends_with('/') {
            format!("{base}{url}")
        } else {
            format!("{base}/{url}")
        }
    }

    /// Rich content from `content:encoded` or inline XHTML.
    pub fn content(&self) -> String {
        super::tools::extract_content(&self.elem)
    }

    /// Author, falling back to `dc:creator`.
    pub fn author(&self) -> String {
        self.elem
            .extract_element_text_ns("", "author")
            .or_else(|| self.elem.extract_element_text_ns(ns::DUBLIN_CORE, "creator"))
            .unwrap_or_default()
    }

    pub fn categories(&self) -> Vec<Category> {
        self.elem
            .elements_by_tag_name_ns("", "category")
            .into_iter()
            .map(Category::new)
            .collect()
    }

    pub fn enclosures(&self) -> Vec<Enclosure> {
        self.elem
            .elements_by_tag_name_ns("", "enclosure")
            .into_iter()
            .map(Enclosure::new)
            .collect()
    }

    pub fn guid(&self) -> String {
        self.extract("guid")
    }

    /// Whether the guid doubles as the item's permanent link. True unless
    /// the feed says `isPermaLink="false"`.
    pub fn guid_is_perma_link(&self) -> bool {
        self.elem
            .first_element_by_tag_name_ns("", "guid")
            .attribute("isPermaLink", "true")
            != "false"
    }

    /// Publication date, falling back to `dc:date`.
    pub fn pub_date(&self) -> i64 {
        match self.elem.extract_element_text_ns("", "pubDate") {
            Some(date) => parse_date(&date, DateFormat::Rfc822),
            None => match self.elem.extract_element_text_ns(ns::DUBLIN_CORE, "date") {
                Some(date) => parse_date(&date, DateFormat::Iso),
                None => 0,
            },
        }
    }

    pub fn expiration_date(&self) -> i64 {
        parse_date(&self.extract("expirationDate"), DateFormat::Rfc822)
    }

    pub fn rating(&self) -> String {
        self.extract("rating")
    }

    pub fn source(&self) -> Source {
        Source::new(self.elem.first_element_by_tag_name_ns("", "source"))
    }

    /// URL of the comments page.
    pub fn comments(&self) -> String {
        self.extract("comments")
    }

    /// Item children the model does not map, for extension access.
    pub fn unhandled_elements(&self) -> Vec<ElementView> {
        self.elem
            .child_elements()
            .into_iter()
            .filter(|el| {
                let ns_uri = el.namespace();
                let local = el.local_name();
                !HANDLED.iter().any(|&(n, l)| n == ns_uri && l == local)
            })
            .collect()
    }

    fn extract(&self, name: &str) -> String {
        self.elem.extract_element_text_ns("", name).unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::DocumentSource;

    fn first_item(channel: &str) -> Item {
        let xml = format!(
            r#"<rss version="2.0" xmlns:dc="{dc}" xmlns:content="{content}"><channel>{channel}</channel></rss>"#,
            dc = ns::DUBLIN_CORE,
            content = ns::CONTENT,
        );
        let doc = Document::from_source(&DocumentSource::new(xml.into_bytes(), ""));
        doc.items().into_iter().next().expect("one item")
    }

    #[test]
    fn test_absolute_link_passes_through() {
        let item = first_item("<item><link>https://example.com/a</link></item>");
        assert_eq!(item.link(), "https://example.com/a");
    }

    #[test]
    fn test_relative_link_joins_channel_link() {
        let item = first_item(concat!(
            "<link>http://example.com</link>",
            "<item><link>/story/1</link></item>",
        ));
        assert_eq!(item.link(), "http://example.com/story/1");

        let item = first_item(concat!(
            "<link>http://example.com</link>",
            "<item><link>story/1</link></item>",
        ));
        assert_eq!(item.link(), "http://example.com/story/1");

        let item = first_item(concat!(
            "<link>http://example.com/</link>",
            "<item><link>story/1</link></item>",
        ));
        assert_eq!(item.link(), "http://example.com/story/1");
    }

    #[test]
    fn test_empty_link_stays_empty() {
        let item = first_item("<link>http://example.com/</link><item><title>t</title></item>");
        assert_eq!(item.link(), "");
    }

    #[test]
    fn test_guid_permalink_flag() {
        let item = first_item(r#"<item><guid isPermaLink="false">tag:1</guid></item>"#);
        assert_eq!(item.guid(), "tag:1");
        assert!(!item.guid_is_perma_link());

        let item = first_item("<item><guid>http://example.com/1</guid></item>");
        assert!(item.guid_is_perma_link());

        // the flag defaults to true even without a guid element
        let item = first_item("<item/>");
        assert!(item.guid_is_perma_link());
        assert_eq!(item.guid(), "");
    }

    #[test]
    fn test_author_falls_back_to_dc_creator() {
        let item = first_item("<item><dc:creator>Jane</dc:creator></item>");
        assert_eq!(item.author(), "Jane");
        let item = first_item("<item><author>joe@example.com</author></item>");
        assert_eq!(item.author(), "joe@example.com");
    }

    #[test]
    fn test_pub_date_falls_back_to_dc_date() {
        let item = first_item("<item><dc:date>2002-09-07T00:00:01Z</dc:date></item>");
        assert_eq!(item.pub_date(), 1031356801);
    }

    #[test]
    fn test_cdata_titles_normalize_consistently() {
        let item = first_item("<item><title><![CDATA[a & b\nc]]></title></item>");
        assert_eq!(item.title(), "a &amp; b<br/>c");
    }

    #[test]
    fn test_markup_titles_pass_through() {
        let item = first_item(concat!(
            "<item><title>one &lt;b&gt;bold&lt;/b&gt;</title></item>",
            "<item><title>two</title></item>",
        ));
        assert_eq!(item.title(), "one <b>bold</b>");
    }

    #[test]
    fn test_multiple_enclosures() {
        let item = first_item(concat!(
            r#"<item><enclosure url="http://x/a.mp3" length="12" type="audio/mpeg"/>"#,
            r#"<enclosure url="http://x/b.ogg" type="audio/ogg"/></item>"#,
        ));
        let enc = item.enclosures();
        assert_eq!(enc.len(), 2);
        assert_eq!(enc[0].url(), "http://x/a.mp3");
        assert_eq!(enc[0].length(), 12);
        assert_eq!(enc[1].length(), 0);
        assert_eq!(enc[1].mime_type(), "audio/ogg");
    }

    #[test]
    fn test_content_encoded() {
        let item = first_item(
            "<item><content:encoded>&lt;p&gt;rich&lt;/p&gt;</content:encoded></item>",
        );
        assert_eq!(item.content(), "<p>rich</p>");
    }
}
