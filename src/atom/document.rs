//! Atom feed and standalone-entry documents.

use std::rc::Rc;

use crate::atom::tools::extract_atom_text;
use crate::atom::{Category, Entry, Generator, Link, Person};
use crate::ns;
use crate::util::dates::{DateFormat, parse_date};
use crate::xml::ElementView;

/// An Atom 1.0 feed document, wrapping its `<feed>` element.
#[derive(Debug, Clone)]
pub struct FeedDocument {
    feed: ElementView,
}

impl FeedDocument {
    pub(crate) fn new(feed: ElementView) -> FeedDocument {
        FeedDocument { feed }
    }

    pub fn is_valid(&self) -> bool {
        !self.feed.is_null()
    }

    pub fn title(&self) -> String {
        extract_atom_text(&self.feed, "title")
    }

    pub fn subtitle(&self) -> String {
        extract_atom_text(&self.feed, "subtitle")
    }

    pub fn rights(&self) -> String {
        extract_atom_text(&self.feed, "rights")
    }

    pub fn id(&self) -> String {
        self.feed.extract_element_text_ns(ns::ATOM10, "id").unwrap_or_default()
    }

    pub fn authors(&self) -> Vec<Person> {
        self.feed
            .elements_by_tag_name_ns(ns::ATOM10, "author")
            .into_iter()
            .map(Person::new)
            .collect()
    }

    pub fn contributors(&self) -> Vec<Person> {
        self.feed
            .elements_by_tag_name_ns(ns::ATOM10, "contributor")
            .into_iter()
            .map(Person::new)
            .collect()
    }

    pub fn categories(&self) -> Vec<Category> {
        self.feed
            .elements_by_tag_name_ns(ns::ATOM10, "category")
            .into_iter()
            .map(Category::new)
            .collect()
    }

    pub fn generator(&self) -> Generator {
        Generator::new(self.feed.first_element_by_tag_name_ns(ns::ATOM10, "generator"))
    }

    /// Feed icon URI, resolved against `xml:base`; empty when absent.
    pub fn icon(&self) -> String {
        match self.feed.extract_element_text_ns(ns::ATOM10, "icon") {
            Some(uri) if !uri.is_empty() => self.feed.complete_uri(&uri),
            _ => String::new(),
        }
    }

    /// Feed logo URI, resolved against `xml:base`.
    pub fn logo(&self) -> String {
        let logo = self
            .feed
            .extract_element_text_ns(ns::ATOM10, "logo")
            .unwrap_or_default();
        self.feed.complete_uri(&logo)
    }

    pub fn links(&self) -> Vec<Link> {
        self.feed
            .elements_by_tag_name_ns(ns::ATOM10, "link")
            .into_iter()
            .map(Link::new)
            .collect()
    }

    pub fn updated(&self) -> i64 {
        let raw = self
            .feed
            .extract_element_text_ns(ns::ATOM10, "updated")
            .unwrap_or_default();
        parse_date(&raw, DateFormat::Iso)
    }

    pub fn xml_lang(&self) -> String {
        self.feed.xml_lang()
    }

    /// All entries, each carrying the feed authors for inheritance.
    pub fn entries(&self) -> Vec<Entry> {
        let feed_authors = Rc::new(self.feed.elements_by_tag_name_ns(ns::ATOM10, "author"));
        self.feed
            .elements_by_tag_name_ns(ns::ATOM10, "entry")
            .into_iter()
            .map(|el| Entry::new(el, Rc::clone(&feed_authors)))
            .collect()
    }
}

/// A document holding a single Atom entry outside any feed.
#[derive(Debug, Clone)]
pub struct EntryDocument {
    entry: ElementView,
}

impl EntryDocument {
    pub(crate) fn new(entry: ElementView) -> EntryDocument {
        EntryDocument { entry }
    }

    pub fn is_valid(&self) -> bool {
        !self.entry.is_null()
    }

    pub fn entry(&self) -> Entry {
        Entry::new(self.entry.clone(), Rc::new(Vec::new()))
    }
}
