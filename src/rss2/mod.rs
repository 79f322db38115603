//! RSS 0.91/0.92/2.0 document model.
//!
//! The model is a thin, lazy layer over the XML tree: every accessor walks
//! the `<channel>` element on demand, so constructing a [`Document`] is
//! cheap and fields the caller never asks for are never touched. Dublin
//! Core fallbacks (`dc:date` for `pubDate`, `dc:creator` for `author`, …)
//! are folded into the accessors, matching what aggregators expect from
//! feeds in the wild.

pub mod category;
pub mod cloud;
pub mod document;
pub mod enclosure;
pub mod image;
pub mod item;
pub mod parser;
pub mod source;
pub mod textinput;
pub(crate) mod tools;

pub use category::Category;
pub use cloud::Cloud;
pub use document::Document;
pub use enclosure::Enclosure;
pub use image::Image;
pub use item::Item;
pub use parser::Parser;
pub use source::Source;
pub use textinput::TextInput;
