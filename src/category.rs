//! Unified category over the dialect-specific representations.

use crate::{atom, rss2};

/// A category in the unified model.
#[derive(Debug, Clone)]
pub enum Category {
    Rss2(rss2::Category),
    /// RDF feeds carry categories as bare `dc:subject` literals.
    Rdf { term: String },
    Atom(atom::Category),
}

impl Category {
    /// The category term. Empty terms denote a null category.
    pub fn term(&self) -> String {
        match self {
            Category::Rss2(c) => c.category(),
            Category::Rdf { term } => term.clone(),
            Category::Atom(c) => c.term(),
        }
    }

    /// Identifier of the categorization scheme, when the dialect has one.
    pub fn scheme(&self) -> String {
        match self {
            Category::Rss2(c) => c.domain(),
            Category::Rdf { .. } => String::new(),
            Category::Atom(c) => c.scheme(),
        }
    }

    /// Human-readable label; only Atom carries one.
    pub fn label(&self) -> String {
        match self {
            Category::Atom(c) => c.label(),
            _ => String::new(),
        }
    }

    pub fn is_null(&self) -> bool {
        self.term().is_empty()
    }
}
