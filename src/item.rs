//! The unified item model.

use std::collections::BTreeMap;

use crate::category::Category;
use crate::enclosure::Enclosure;
use crate::mapper::{ItemAtom, ItemRdf, ItemRss2};
use crate::person::Person;
use crate::{atom, rdf, rss2};

/// An item in its source dialect.
#[derive(Debug, Clone)]
pub enum SpecificItem {
    Rss2(rss2::Item),
    Rdf(rdf::Item),
    Atom(atom::Entry),
}

/// An item in the unified model, abstracting over the source dialect.
///
/// Like [`Feed`](crate::Feed), all text accessors return HTML and absent
/// fields come back empty. [`id`](Item::id) is always non-empty for a
/// parsed item: dialects without identifiers get a stable hash-based one.
#[derive(Debug, Clone)]
pub enum Item {
    Rss2(ItemRss2),
    Rdf(ItemRdf),
    Atom(ItemAtom),
}

impl Item {
    /// The item in its source dialect.
    pub fn specific_item(&self) -> SpecificItem {
        match self {
            Item::Rss2(i) => SpecificItem::Rss2(i.item().clone()),
            Item::Rdf(i) => SpecificItem::Rdf(i.item().clone()),
            Item::Atom(i) => SpecificItem::Atom(i.entry().clone()),
        }
    }

    pub fn title(&self) -> String {
        match self {
            Item::Rss2(i) => i.title(),
            Item::Rdf(i) => i.title(),
            Item::Atom(i) => i.title(),
        }
    }

    pub fn link(&self) -> String {
        match self {
            Item::Rss2(i) => i.link(),
            Item::Rdf(i) => i.link(),
            Item::Atom(i) => i.link(),
        }
    }

    pub fn description(&self) -> String {
        match self {
            Item::Rss2(i) => i.description(),
            Item::Rdf(i) => i.description(),
            Item::Atom(i) => i.description(),
        }
    }

    /// Full item content, empty when the dialect carries none for this
    /// item.
    pub fn content(&self) -> String {
        match self {
            Item::Rss2(i) => i.content(),
            Item::Rdf(i) => i.content(),
            Item::Atom(i) => i.content(),
        }
    }

    /// Publication time as a Unix timestamp, `0` when unknown.
    pub fn date_published(&self) -> i64 {
        match self {
            Item::Rss2(i) => i.date_published(),
            Item::Rdf(i) => i.date_published(),
            Item::Atom(i) => i.date_published(),
        }
    }

    /// Last update time; equals the publication time for dialects
    /// without a separate update field.
    pub fn date_updated(&self) -> i64 {
        match self {
            Item::Rss2(i) => i.date_updated(),
            Item::Rdf(i) => i.date_updated(),
            Item::Atom(i) => i.date_updated(),
        }
    }

    pub fn language(&self) -> String {
        match self {
            Item::Rss2(i) => i.language(),
            Item::Rdf(i) => i.language(),
            Item::Atom(i) => i.language(),
        }
    }

    pub fn id(&self) -> String {
        match self {
            Item::Rss2(i) => i.id(),
            Item::Rdf(i) => i.id(),
            Item::Atom(i) => i.id(),
        }
    }

    pub fn authors(&self) -> Vec<Person> {
        match self {
            Item::Rss2(i) => i.authors(),
            Item::Rdf(i) => i.authors(),
            Item::Atom(i) => i.authors(),
        }
    }

    pub fn categories(&self) -> Vec<Category> {
        match self {
            Item::Rss2(i) => i.categories(),
            Item::Rdf(i) => i.categories(),
            Item::Atom(i) => i.categories(),
        }
    }

    pub fn enclosures(&self) -> Vec<Enclosure> {
        match self {
            Item::Rss2(i) => i.enclosures(),
            Item::Rdf(i) => i.enclosures(),
            Item::Atom(i) => i.enclosures(),
        }
    }

    /// Number of comments, `-1` when unknown.
    pub fn comments_count(&self) -> i32 {
        match self {
            Item::Rss2(i) => i.comments_count(),
            Item::Rdf(i) => i.comments_count(),
            Item::Atom(i) => i.comments_count(),
        }
    }

    /// URL of a page with the item's comments.
    pub fn comments_link(&self) -> String {
        match self {
            Item::Rss2(i) => i.comments_link(),
            Item::Rdf(i) => i.comments_link(),
            Item::Atom(i) => i.comments_link(),
        }
    }

    /// URL of a feed carrying the item's comments.
    pub fn comments_feed(&self) -> String {
        match self {
            Item::Rss2(i) => i.comments_feed(),
            Item::Rdf(i) => i.comments_feed(),
            Item::Atom(i) => i.comments_feed(),
        }
    }

    /// URI to post comments to, from the wfw module.
    pub fn comment_post_uri(&self) -> String {
        match self {
            Item::Rss2(i) => i.comment_post_uri(),
            Item::Rdf(i) => i.comment_post_uri(),
            Item::Atom(i) => i.comment_post_uri(),
        }
    }

    /// Source-dialect elements the unified model does not map, keyed by
    /// namespace URI plus local name.
    pub fn additional_properties(&self) -> BTreeMap<String, String> {
        match self {
            Item::Rss2(i) => i.additional_properties(),
            Item::Rdf(i) => i.additional_properties(),
            Item::Atom(i) => i.additional_properties(),
        }
    }
}
