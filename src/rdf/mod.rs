//! RDF (RSS 0.9/1.0) document model.
//!
//! Unlike the other dialects, RDF feeds are first lowered into a statement
//! graph ([`Model`]) and the document model reads from the graph rather
//! than the XML tree. RSS 0.9 vocabulary is remapped onto the RSS 1.0
//! vocabulary during parsing, so downstream code only ever sees RSS 1.0
//! terms.

pub mod document;
pub mod dublincore;
pub mod image;
pub mod item;
pub mod model;
pub mod parser;
pub(crate) mod reader;
pub mod syninfo;
pub mod textinput;
pub(crate) mod vocab;

pub use document::Document;
pub use dublincore::DublinCore;
pub use image::Image;
pub use item::Item;
pub use model::{Model, Node, Statement};
pub use parser::Parser;
pub use syninfo::{SyndicationInfo, UpdatePeriod};
pub use textinput::TextInput;
