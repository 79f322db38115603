//! Namespace-aware element handle with `xml:base`/`xml:lang` resolution.

use std::rc::Rc;

use once_cell::unsync::OnceCell;
use url::Url;

use crate::ns;
use crate::xml::tree::{NodeId, NodeKind, XmlTree};

struct ViewInner {
    tree: Rc<XmlTree>,
    node: NodeId,
    base: OnceCell<String>,
    lang: OnceCell<String>,
}

/// A view onto one element of an [`XmlTree`].
///
/// Views are cheap to clone and may be *null* (wrapping no element at all);
/// every accessor on a null view returns an empty or default value. This
/// lets format models chain lookups without checking each step.
#[derive(Clone)]
pub struct ElementView {
    inner: Option<Rc<ViewInner>>,
}

impl ElementView {
    /// A view wrapping no element.
    pub fn null() -> ElementView {
        ElementView { inner: None }
    }

    pub(crate) fn new(tree: Rc<XmlTree>, node: NodeId) -> ElementView {
        ElementView {
            inner: Some(Rc::new(ViewInner {
                tree,
                node,
                base: OnceCell::new(),
                lang: OnceCell::new(),
            })),
        }
    }

    /// Whether this view wraps no element.
    pub fn is_null(&self) -> bool {
        self.inner.is_none()
    }

    fn view(&self, node: NodeId) -> ElementView {
        match &self.inner {
            Some(inner) => ElementView::new(Rc::clone(&inner.tree), node),
            None => ElementView::null(),
        }
    }

    pub(crate) fn tree(&self) -> Option<&Rc<XmlTree>> {
        self.inner.as_ref().map(|i| &i.tree)
    }

    pub(crate) fn node(&self) -> Option<NodeId> {
        self.inner.as_ref().map(|i| i.node)
    }

    /// Qualified tag name as written in the source.
    pub fn name(&self) -> String {
        self.with_element(|tree, node| {
            tree.element(node).map(|el| el.qname.clone()).unwrap_or_default()
        })
    }

    /// Local part of the tag name.
    pub fn local_name(&self) -> String {
        self.with_element(|tree, node| {
            tree.element(node).map(|el| el.local.clone()).unwrap_or_default()
        })
    }

    /// Resolved namespace URI of the element; empty when in no namespace.
    pub fn namespace(&self) -> String {
        self.with_element(|tree, node| {
            tree.element(node).map(|el| el.ns.clone()).unwrap_or_default()
        })
    }

    fn with_element<T: Default>(&self, f: impl FnOnce(&XmlTree, NodeId) -> T) -> T {
        match &self.inner {
            Some(inner) => f(&inner.tree, inner.node),
            None => T::default(),
        }
    }

    /// Attribute value by qualified name, or `default` when the attribute
    /// is absent or the view is null.
    pub fn attribute(&self, qname: &str, default: &str) -> String {
        match &self.inner {
            Some(inner) => inner
                .tree
                .element(inner.node)
                .and_then(|el| el.attribute(qname))
                .map(|a| a.value.clone())
                .unwrap_or_else(|| default.to_owned()),
            None => default.to_owned(),
        }
    }

    /// Attribute value by namespace URI and local name, or `default`.
    pub fn attribute_ns(&self, ns_uri: &str, local: &str, default: &str) -> String {
        match &self.inner {
            Some(inner) => inner
                .tree
                .element(inner.node)
                .and_then(|el| el.attribute_ns(ns_uri, local))
                .map(|a| a.value.clone())
                .unwrap_or_else(|| default.to_owned()),
            None => default.to_owned(),
        }
    }

    pub fn has_attribute(&self, qname: &str) -> bool {
        self.with_element(|tree, node| {
            tree.element(node).is_some_and(|el| el.attribute(qname).is_some())
        })
    }

    pub fn has_attribute_ns(&self, ns_uri: &str, local: &str) -> bool {
        self.with_element(|tree, node| {
            tree.element(node)
                .is_some_and(|el| el.attribute_ns(ns_uri, local).is_some())
        })
    }

    /// All child elements, in document order.
    pub fn child_elements(&self) -> Vec<ElementView> {
        match &self.inner {
            Some(inner) => inner
                .tree
                .children(inner.node)
                .iter()
                .filter(|&&c| inner.tree.element(c).is_some())
                .map(|&c| self.view(c))
                .collect(),
            None => Vec::new(),
        }
    }

    /// First child element matching the qualified tag name.
    pub fn first_element_by_tag_name(&self, qname: &str) -> ElementView {
        self.child_elements()
            .into_iter()
            .find(|el| el.name() == qname)
            .unwrap_or_else(ElementView::null)
    }

    /// First child element matching namespace URI and local name.
    pub fn first_element_by_tag_name_ns(&self, ns_uri: &str, local: &str) -> ElementView {
        self.child_elements()
            .into_iter()
            .find(|el| el.namespace() == ns_uri && el.local_name() == local)
            .unwrap_or_else(ElementView::null)
    }

    /// All child elements matching the qualified tag name.
    pub fn elements_by_tag_name(&self, qname: &str) -> Vec<ElementView> {
        self.child_elements()
            .into_iter()
            .filter(|el| el.name() == qname)
            .collect()
    }

    /// All child elements matching namespace URI and local name.
    pub fn elements_by_tag_name_ns(&self, ns_uri: &str, local: &str) -> Vec<ElementView> {
        self.child_elements()
            .into_iter()
            .filter(|el| el.namespace() == ns_uri && el.local_name() == local)
            .collect()
    }

    /// Direct text content of the element (text and CDATA descendants).
    pub fn text(&self) -> String {
        self.with_element(|tree, node| tree.text_content(node))
    }

    /// Trimmed text of the first matching child element, or `None` when
    /// there is no such child.
    pub fn extract_element_text(&self, qname: &str) -> Option<String> {
        let el = self.first_element_by_tag_name(qname);
        if el.is_null() { None } else { Some(el.text().trim().to_owned()) }
    }

    /// Namespace-aware variant of [`extract_element_text`](Self::extract_element_text).
    pub fn extract_element_text_ns(&self, ns_uri: &str, local: &str) -> Option<String> {
        let el = self.first_element_by_tag_name_ns(ns_uri, local);
        if el.is_null() { None } else { Some(el.text().trim().to_owned()) }
    }

    /// Whether the element's first child node is a CDATA section.
    pub fn first_child_is_cdata(&self) -> bool {
        self.with_element(|tree, node| {
            tree.children(node)
                .first()
                .is_some_and(|&c| matches!(tree.kind(c), NodeKind::CData(_)))
        })
    }

    /// The effective `xml:base` of this element.
    ///
    /// Bases declared on ancestors are resolved top-down, so a relative
    /// `xml:base` combines with the bases above it. Memoized per view;
    /// clones of a view share the memo.
    pub fn xml_base(&self) -> String {
        match &self.inner {
            Some(inner) => inner
                .base
                .get_or_init(|| compute_base(&inner.tree, inner.node))
                .clone(),
            None => String::new(),
        }
    }

    /// The effective `xml:lang`, taken from the nearest element that
    /// declares one.
    pub fn xml_lang(&self) -> String {
        match &self.inner {
            Some(inner) => inner
                .lang
                .get_or_init(|| compute_lang(&inner.tree, inner.node))
                .clone(),
            None => String::new(),
        }
    }

    /// Resolve a possibly-relative URI against the effective `xml:base`.
    ///
    /// With no base in scope, or when resolution fails, the URI is
    /// returned unchanged.
    pub fn complete_uri(&self, uri: &str) -> String {
        let base = self.xml_base();
        resolve_reference(&base, uri)
    }

    /// Serialize all child nodes back to markup, trimmed.
    ///
    /// When a base URI is in effect, child elements without their own
    /// `xml:base` get one stamped on, so the markup keeps resolving
    /// relative references correctly once detached from this document.
    pub fn child_nodes_as_xml(&self) -> String {
        let Some(inner) = &self.inner else {
            return String::new();
        };
        let base = self.xml_base();
        let extra = if base.is_empty() { None } else { Some(base.as_str()) };
        let mut out = String::new();
        for &child in inner.tree.children(inner.node) {
            inner.tree.serialize_node(child, extra, &mut out);
        }
        out.trim().to_owned()
    }
}

impl std::fmt::Debug for ElementView {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.inner {
            Some(_) => f.debug_struct("ElementView").field("name", &self.name()).finish(),
            None => f.write_str("ElementView(null)"),
        }
    }
}

/// Resolve `reference` against `base`, falling back to the reference
/// itself when either side does not form a usable URL.
pub(crate) fn resolve_reference(base: &str, reference: &str) -> String {
    if base.is_empty() {
        return reference.to_owned();
    }
    match Url::parse(reference) {
        // already absolute
        Ok(url) => url.to_string(),
        Err(_) => match Url::parse(base).and_then(|b| b.join(reference)) {
            Ok(url) => url.to_string(),
            Err(_) => reference.to_owned(),
        },
    }
}

fn compute_base(tree: &XmlTree, node: NodeId) -> String {
    // collect declared bases from the root down, then fold them together
    let mut chain = Vec::new();
    let mut cursor = Some(node);
    while let Some(id) = cursor {
        if let Some(el) = tree.element(id) {
            if let Some(attr) = el.attribute_ns(ns::XML, "base") {
                chain.push(attr.value.clone());
            }
        }
        cursor = tree.parent(id);
    }
    let mut base = String::new();
    for declared in chain.iter().rev() {
        base = resolve_reference(&base, declared);
    }
    base
}

fn compute_lang(tree: &XmlTree, node: NodeId) -> String {
    let mut cursor = Some(node);
    while let Some(id) = cursor {
        if let Some(el) = tree.element(id) {
            if let Some(attr) = el.attribute_ns(ns::XML, "lang") {
                return attr.value.clone();
            }
        }
        cursor = tree.parent(id);
    }
    String::new()
}
