//! Raw feed source bytes plus lazily computed derived state.

use std::rc::Rc;

use once_cell::unsync::OnceCell;

use crate::util::hash::calc_hash;
use crate::xml::{ElementView, XmlTree};

struct Inner {
    bytes: Vec<u8>,
    url: String,
    tree: OnceCell<Option<Rc<XmlTree>>>,
    hash: OnceCell<u32>,
}

/// The raw bytes of a retrieved document, together with the URL they came
/// from.
///
/// The XML tree and the content hash are computed on first use and cached;
/// clones share the cache, so handing a source to several parsers during
/// format detection parses the XML at most once.
#[derive(Clone)]
pub struct DocumentSource {
    inner: Rc<Inner>,
}

impl DocumentSource {
    /// Wrap raw bytes retrieved from `url`.
    pub fn new(bytes: Vec<u8>, url: impl Into<String>) -> DocumentSource {
        DocumentSource {
            inner: Rc::new(Inner {
                bytes,
                url: url.into(),
                tree: OnceCell::new(),
                hash: OnceCell::new(),
            }),
        }
    }

    /// The raw bytes as retrieved.
    pub fn as_bytes(&self) -> &[u8] {
        &self.inner.bytes
    }

    /// The URL the bytes were retrieved from.
    pub fn url(&self) -> &str {
        &self.inner.url
    }

    /// The parsed XML tree, or `None` when the bytes are not well-formed
    /// XML. Parsed once, then cached.
    pub fn as_tree(&self) -> Option<Rc<XmlTree>> {
        self.inner
            .tree
            .get_or_init(|| XmlTree::parse(&self.inner.bytes).ok().map(Rc::new))
            .clone()
    }

    /// A view onto the root element, null when the source is not XML.
    pub fn root_element(&self) -> ElementView {
        match self.as_tree() {
            Some(tree) => match tree.document_element() {
                Some(root) => ElementView::new(tree, root),
                None => ElementView::null(),
            },
            None => ElementView::null(),
        }
    }

    /// Content hash of the raw bytes; `0` for an empty source.
    pub fn hash(&self) -> u32 {
        *self.inner.hash.get_or_init(|| calc_hash(&self.inner.bytes))
    }
}

impl std::fmt::Debug for DocumentSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DocumentSource")
            .field("url", &self.inner.url)
            .field("len", &self.inner.bytes.len())
            .finish()
    }
}
