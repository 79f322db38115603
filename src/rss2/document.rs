//! RSS 2.0 `<channel>` document model.

use std::rc::Rc;

use once_cell::unsync::OnceCell;

use crate::ns;
use crate::rss2::{Category, Cloud, Image, Item, TextInput};
use crate::source::DocumentSource;
use crate::util::dates::{DateFormat, parse_date};
use crate::util::text::{normalize, string_contains_markup};
use crate::xml::ElementView;

/// Format hints probed lazily from the document's items, so that every
/// item normalizes its title and description the same way.
#[derive(Debug, Default)]
pub(crate) struct FormatHints {
    title: OnceCell<TextFormat>,
    description: OnceCell<TextFormat>,
}

#[derive(Debug, Clone, Copy, Default)]
pub(crate) struct TextFormat {
    pub is_cdata: bool,
    pub contains_markup: bool,
}

/// An RSS 0.91/0.92/2.0 document, wrapping its `<channel>` element.
#[derive(Debug, Clone)]
pub struct Document {
    channel: ElementView,
    hints: Rc<FormatHints>,
}

/// Channel elements the unified mapping consumes directly. Anything else
/// is surfaced through [`Document::unhandled_elements`].
const HANDLED: &[(&str, &str)] = &[
    ("", "title"),
    ("", "link"),
    ("", "description"),
    ("", "language"),
    ("", "copyright"),
    ("", "managingEditor"),
    ("", "webMaster"),
    ("", "pubDate"),
    ("", "lastBuildDate"),
    ("", "skipDays"),
    ("", "skipHours"),
    ("", "item"),
    ("", "textinput"),
    ("", "textInput"),
    ("", "image"),
    ("", "ttl"),
    ("", "generator"),
    ("", "docs"),
    ("", "cloud"),
    (ns::DUBLIN_CORE, "language"),
    (ns::DUBLIN_CORE, "rights"),
    (ns::DUBLIN_CORE, "date"),
];

/// Days of the week, for `<skipDays>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum DayOfWeek {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

impl DayOfWeek {
    fn from_name(name: &str) -> Option<DayOfWeek> {
        match name {
            "Monday" => Some(DayOfWeek::Monday),
            "Tuesday" => Some(DayOfWeek::Tuesday),
            "Wednesday" => Some(DayOfWeek::Wednesday),
            "Thursday" => Some(DayOfWeek::Thursday),
            "Friday" => Some(DayOfWeek::Friday),
            "Saturday" => Some(DayOfWeek::Saturday),
            "Sunday" => Some(DayOfWeek::Sunday),
            _ => None,
        }
    }
}

impl Document {
    /// Build a document from a source whose root is an `<rss>` element.
    pub fn from_source(source: &DocumentSource) -> Document {
        let root = source.root_element();
        let channel = root.first_element_by_tag_name_ns("", "channel");
        Document {
            channel,
            hints: Rc::new(FormatHints::default()),
        }
    }

    /// A valid document has a `<channel>` element.
    pub fn is_valid(&self) -> bool {
        !self.channel.is_null()
    }

    pub fn title(&self) -> String {
        self.extract("title")
    }

    pub fn description(&self) -> String {
        normalize(&self.extract("description"))
    }

    pub fn link(&self) -> String {
        self.extract("link")
    }

    pub fn language(&self) -> String {
        self.channel
            .extract_element_text_ns("", "language")
            .or_else(|| self.channel.extract_element_text_ns(ns::DUBLIN_CORE, "language"))
            .unwrap_or_default()
    }

    pub fn copyright(&self) -> String {
        self.channel
            .extract_element_text_ns("", "copyright")
            .or_else(|| self.channel.extract_element_text_ns(ns::DUBLIN_CORE, "rights"))
            .unwrap_or_default()
    }

    pub fn managing_editor(&self) -> String {
        self.extract("managingEditor")
    }

    pub fn web_master(&self) -> String {
        self.extract("webMaster")
    }

    /// Publication date as a Unix timestamp, `0` when absent. Falls back
    /// to `dc:date` when `<pubDate>` is missing.
    pub fn pub_date(&self) -> i64 {
        match self.channel.extract_element_text_ns("", "pubDate") {
            Some(date) => parse_date(&date, DateFormat::Rfc822),
            None => match self.channel.extract_element_text_ns(ns::DUBLIN_CORE, "date") {
                Some(date) => parse_date(&date, DateFormat::Iso),
                None => 0,
            },
        }
    }

    pub fn last_build_date(&self) -> i64 {
        parse_date(&self.extract("lastBuildDate"), DateFormat::Rfc822)
    }

    pub fn categories(&self) -> Vec<Category> {
        self.channel
            .elements_by_tag_name_ns("", "category")
            .into_iter()
            .map(Category::new)
            .collect()
    }

    pub fn generator(&self) -> String {
        self.extract("generator")
    }

    pub fn docs(&self) -> String {
        self.extract("docs")
    }

    pub fn cloud(&self) -> Cloud {
        Cloud::new(self.channel.first_element_by_tag_name_ns("", "cloud"))
    }

    /// Suggested cache lifetime in minutes, `0` when absent or invalid.
    pub fn ttl(&self) -> i32 {
        self.extract("ttl").parse().unwrap_or(0)
    }

    /// PICS rating of the channel.
    pub fn rating(&self) -> String {
        self.extract("rating")
    }

    pub fn image(&self) -> Image {
        Image::new(self.channel.first_element_by_tag_name_ns("", "image"))
    }

    /// The text input box. Both spellings found in the wild are accepted.
    pub fn text_input(&self) -> TextInput {
        let mut el = self.channel.first_element_by_tag_name_ns("", "textInput");
        if el.is_null() {
            el = self.channel.first_element_by_tag_name_ns("", "textinput");
        }
        TextInput::new(el)
    }

    /// Hours of the day (0..23) on which readers should skip updates.
    pub fn skip_hours(&self) -> Vec<i32> {
        self.channel
            .first_element_by_tag_name_ns("", "skipHours")
            .elements_by_tag_name_ns("", "hour")
            .iter()
            .filter_map(|h| h.text().trim().parse().ok())
            .collect()
    }

    pub fn skip_days(&self) -> Vec<DayOfWeek> {
        self.channel
            .first_element_by_tag_name_ns("", "skipDays")
            .elements_by_tag_name_ns("", "day")
            .iter()
            .filter_map(|d| DayOfWeek::from_name(d.text().trim()))
            .collect()
    }

    pub fn items(&self) -> Vec<Item> {
        self.channel
            .elements_by_tag_name_ns("", "item")
            .into_iter()
            .map(|el| Item::new(el, Some(self.clone())))
            .collect()
    }

    /// Channel children the model does not map, for extension access.
    pub fn unhandled_elements(&self) -> Vec<ElementView> {
        self.channel
            .child_elements()
            .into_iter()
            .filter(|el| {
                let ns_uri = el.namespace();
                let local = el.local_name();
                !HANDLED.iter().any(|&(n, l)| n == ns_uri && l == local)
            })
            .collect()
    }

    pub(crate) fn item_title_format(&self) -> TextFormat {
        *self.hints.title.get_or_init(|| self.probe_items("title"))
    }

    pub(crate) fn item_description_format(&self) -> TextFormat {
        *self
            .hints
            .description
            .get_or_init(|| self.probe_items("description"))
    }

    /// Inspect up to ten items to decide how their `name` fields are
    /// encoded, so all items of a document are normalized consistently.
    fn probe_items(&self, name: &str) -> TextFormat {
        let items = self.channel.elements_by_tag_name_ns("", "item");
        let Some(first) = items.first() else {
            return TextFormat::default();
        };
        let is_cdata = first.first_element_by_tag_name_ns("", name).first_child_is_cdata();
        let mut combined = String::new();
        for item in items.iter().take(10) {
            if let Some(text) = item.extract_element_text_ns("", name) {
                combined.push_str(&text);
            }
        }
        TextFormat {
            is_cdata,
            contains_markup: string_contains_markup(&combined),
        }
    }

    fn extract(&self, name: &str) -> String {
        self.channel.extract_element_text_ns("", name).unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn doc(body: &str) -> Document {
        let xml = format!(r#"<rss version="2.0"><channel>{body}</channel></rss>"#);
        Document::from_source(&DocumentSource::new(xml.into_bytes(), ""))
    }

    #[test]
    fn test_channel_fields() {
        let d = doc(concat!(
            "<title>Scripting News</title>",
            "<link>http://www.scripting.com/</link>",
            "<description>A weblog about scripting.</description>",
            "<language>en-us</language>",
            "<ttl>60</ttl>",
            "<generator>Radio UserLand</generator>",
        ));
        assert!(d.is_valid());
        assert_eq!(d.title(), "Scripting News");
        assert_eq!(d.link(), "http://www.scripting.com/");
        assert_eq!(d.description(), "A weblog about scripting.");
        assert_eq!(d.language(), "en-us");
        assert_eq!(d.ttl(), 60);
        assert_eq!(d.generator(), "Radio UserLand");
    }

    #[test]
    fn test_dublin_core_fallbacks() {
        let xml = format!(
            concat!(
                r#"<rss version="2.0" xmlns:dc="{dc}"><channel>"#,
                "<dc:language>de</dc:language>",
                "<dc:rights>CC-BY</dc:rights>",
                "<dc:date>2002-09-07T00:00:01Z</dc:date>",
                "</channel></rss>",
            ),
            dc = ns::DUBLIN_CORE,
        );
        let d = Document::from_source(&DocumentSource::new(xml.into_bytes(), ""));
        assert_eq!(d.language(), "de");
        assert_eq!(d.copyright(), "CC-BY");
        assert_eq!(d.pub_date(), 1031356801);
    }

    #[test]
    fn test_pub_date_prefers_pubdate() {
        let d = doc("<pubDate>Sat, 07 Sep 2002 00:00:01 GMT</pubDate>");
        assert_eq!(d.pub_date(), 1031356801);
    }

    #[test]
    fn test_skip_hours_and_days() {
        let d = doc(concat!(
            "<skipHours><hour>0</hour><hour>23</hour><hour>bad</hour></skipHours>",
            "<skipDays><day>Monday</day><day>Funday</day><day>Sunday</day></skipDays>",
        ));
        assert_eq!(d.skip_hours(), vec![0, 23]);
        assert_eq!(d.skip_days(), vec![DayOfWeek::Monday, DayOfWeek::Sunday]);
    }

    #[test]
    fn test_textinput_spellings() {
        let d = doc("<textinput><title>Search</title></textinput>");
        assert_eq!(d.text_input().title(), "Search");
        let d = doc("<textInput><title>Search</title></textInput>");
        assert_eq!(d.text_input().title(), "Search");
    }

    #[test]
    fn test_missing_channel_is_invalid() {
        let src = DocumentSource::new(b"<rss version=\"2.0\"/>".to_vec(), "");
        assert!(!Document::from_source(&src).is_valid());
    }

    #[test]
    fn test_unhandled_elements_include_category() {
        // category is deliberately not consumed by the unified mapping
        let d = doc("<category>tech</category><title>t</title>");
        let extra = d.unhandled_elements();
        assert_eq!(extra.len(), 1);
        assert_eq!(extra[0].local_name(), "category");
    }
}
