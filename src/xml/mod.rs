//! XML tree construction and element access.
//!
//! Feed documents are small, so the streamed events from quick-xml are
//! materialized into an arena-backed tree ([`XmlTree`]) that the format
//! models can navigate freely. [`ElementView`] is the cheaply-copyable,
//! namespace-aware handle over one element of that tree; it resolves
//! `xml:base`/`xml:lang` scoping and can serialize subtrees back to markup.

pub mod element;
pub(crate) mod escape;
pub mod tree;

pub use element::ElementView;
pub use tree::{Attribute, ElementData, NodeId, NodeKind, XmlTree};
