//! The unified feed model.

use std::collections::BTreeMap;

use crate::category::Category;
use crate::image::Image;
use crate::item::Item;
use crate::mapper::{FeedAtom, FeedRdf, FeedRss2};
use crate::person::Person;
use crate::registry::SpecificDocument;

/// A feed in the unified model, abstracting over the source dialect.
///
/// All text accessors return HTML: plain-text source fields are escaped
/// during mapping, so values can be embedded in HTML output directly.
/// Fields the dialect does not carry come back empty rather than failing.
#[derive(Debug, Clone)]
pub enum Feed {
    Rss2(FeedRss2),
    Rdf(FeedRdf),
    Atom(FeedAtom),
}

impl Feed {
    /// The document in its source dialect, for access to fields the
    /// unified model does not cover.
    pub fn specific_document(&self) -> SpecificDocument {
        match self {
            Feed::Rss2(f) => SpecificDocument::Rss2(f.document().clone()),
            Feed::Rdf(f) => SpecificDocument::Rdf(f.document().clone()),
            Feed::Atom(f) => f.specific_document(),
        }
    }

    pub fn title(&self) -> String {
        match self {
            Feed::Rss2(f) => f.title(),
            Feed::Rdf(f) => f.title(),
            Feed::Atom(f) => f.title(),
        }
    }

    pub fn description(&self) -> String {
        match self {
            Feed::Rss2(f) => f.description(),
            Feed::Rdf(f) => f.description(),
            Feed::Atom(f) => f.description(),
        }
    }

    pub fn link(&self) -> String {
        match self {
            Feed::Rss2(f) => f.link(),
            Feed::Rdf(f) => f.link(),
            Feed::Atom(f) => f.link(),
        }
    }

    pub fn authors(&self) -> Vec<Person> {
        match self {
            Feed::Rss2(f) => f.authors(),
            Feed::Rdf(f) => f.authors(),
            Feed::Atom(f) => f.authors(),
        }
    }

    pub fn categories(&self) -> Vec<Category> {
        match self {
            Feed::Rss2(f) => f.categories(),
            Feed::Rdf(f) => f.categories(),
            Feed::Atom(f) => f.categories(),
        }
    }

    pub fn items(&self) -> Vec<Item> {
        match self {
            Feed::Rss2(f) => f.items(),
            Feed::Rdf(f) => f.items(),
            Feed::Atom(f) => f.items(),
        }
    }

    pub fn language(&self) -> String {
        match self {
            Feed::Rss2(f) => f.language(),
            Feed::Rdf(f) => f.language(),
            Feed::Atom(f) => f.language(),
        }
    }

    pub fn copyright(&self) -> String {
        match self {
            Feed::Rss2(f) => f.copyright(),
            Feed::Rdf(f) => f.copyright(),
            Feed::Atom(f) => f.copyright(),
        }
    }

    pub fn image(&self) -> Image {
        match self {
            Feed::Rss2(f) => f.image(),
            Feed::Rdf(f) => f.image(),
            Feed::Atom(f) => f.image(),
        }
    }

    pub fn icon(&self) -> Image {
        match self {
            Feed::Rss2(f) => f.icon(),
            Feed::Rdf(f) => f.icon(),
            Feed::Atom(f) => f.icon(),
        }
    }

    /// Source-dialect elements the unified model does not map, keyed by
    /// namespace URI plus local name.
    pub fn additional_properties(&self) -> BTreeMap<String, String> {
        match self {
            Feed::Rss2(f) => f.additional_properties(),
            Feed::Rdf(f) => f.additional_properties(),
            Feed::Atom(f) => f.additional_properties(),
        }
    }
}

impl std::fmt::Display for Feed {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "title: {}", self.title())?;
        writeln!(f, "link: {}", self.link())?;
        writeln!(f, "description: {}", self.description())?;
        for item in self.items() {
            writeln!(f, "item: {}", item.title())?;
        }
        Ok(())
    }
}
