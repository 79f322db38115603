//! Mappers lifting dialect documents into the unified feed model.
//!
//! Each dialect gets a feed and an item adapter plus a [`Mapper`]
//! implementation wiring them into the registry. The adapters are plain
//! value types over the dialect documents, so mapping is lazy: unified
//! accessors read through to the dialect model on every call.
//!
//! [`Mapper`]: crate::registry::Mapper

pub mod atom;
pub mod rdf;
pub mod rss2;

pub use atom::{AtomMapper, FeedAtom, ItemAtom};
pub use rdf::{FeedRdf, ItemRdf, RdfMapper};
pub use rss2::{FeedRss2, ItemRss2, Rss2Mapper};

use crate::util::hash::calc_md5_sum;
use crate::xml::ElementView;

/// Serialize a whole element back to markup.
pub(crate) fn element_markup(el: &ElementView) -> String {
    match (el.tree(), el.node()) {
        (Some(tree), Some(node)) => {
            let mut out = String::new();
            tree.serialize_node(node, None, &mut out);
            out
        }
        _ => String::new(),
    }
}

/// Key for extension properties: namespace URI concatenated with the
/// local name.
pub(crate) fn property_key(el: &ElementView) -> String {
    format!("{}{}", el.namespace(), el.local_name())
}

/// Synthetic identifier for items whose feed carries none, derived from
/// the item's visible fields. Stable across runs.
pub(crate) fn synthetic_id(title: &str, description: &str, link: &str, content: &str) -> String {
    format!("hash:{}", calc_md5_sum(&format!("{title}{description}{link}{content}")))
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    #[test]
    fn test_synthetic_id_is_stable() {
        let a = synthetic_id("t", "d", "l", "c");
        let b = synthetic_id("t", "d", "l", "c");
        assert_eq!(a, b);
        assert!(a.starts_with("hash:"));
        assert_eq!(a.len(), "hash:".len() + 32);
        assert_ne!(a, synthetic_id("t", "d", "l", "x"));
    }

    proptest! {
        #[test]
        fn test_synthetic_id_deterministic(
            title in "[a-z0-9 ]{0,32}",
            description in "[a-z0-9 ]{0,32}",
            link in "[a-z0-9:/.]{0,32}",
        ) {
            let a = synthetic_id(&title, &description, &link, "");
            let b = synthetic_id(&title, &description, &link, "");
            prop_assert_eq!(&a, &b);
            prop_assert!(a.starts_with("hash:"));
        }
    }
}
