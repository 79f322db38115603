//! Atom 0.3/1.0 document model.
//!
//! Only Atom 1.0 has a real model here; 0.3 documents are rewritten into
//! an equivalent 1.0 tree by the parser before a document is built. Both
//! whole feeds and standalone entry documents are supported.

pub mod category;
pub mod content;
pub mod document;
pub mod entry;
pub mod generator;
pub mod link;
pub mod parser;
pub mod person;
pub mod source;
pub(crate) mod tools;

pub use category::Category;
pub use content::{Content, Format};
pub use document::{EntryDocument, FeedDocument};
pub use entry::Entry;
pub use generator::Generator;
pub use link::Link;
pub use parser::Parser;
pub use person::Person;
pub use source::Source;
