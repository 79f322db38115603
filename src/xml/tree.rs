//! Arena-backed XML document tree.
//!
//! The tree owns every node in a flat arena and hands out [`NodeId`] index
//! handles, so views into the tree stay cheap to copy and can never dangle.
//! Namespace prefixes are resolved while the event stream is consumed; each
//! element and attribute carries both its qualified name as written and its
//! resolved `(namespace, local name)` pair.

use std::collections::HashMap;

use quick_xml::Reader;
use quick_xml::events::{BytesStart, Event};

use crate::error::{Error, Result};
use crate::ns;
use crate::xml::escape::{escape_attribute, escape_text};

/// Handle to one node inside an [`XmlTree`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(u32);

impl NodeId {
    fn index(self) -> usize {
        self.0 as usize
    }
}

/// A single attribute of an element node.
#[derive(Debug, Clone)]
pub struct Attribute {
    /// Name as written in the source, prefix included.
    pub qname: String,
    /// Resolved namespace URI; empty for unprefixed attributes.
    pub ns: String,
    /// Local part of the name.
    pub local: String,
    /// Unescaped attribute value.
    pub value: String,
}

/// Payload of an element node.
#[derive(Debug, Clone)]
pub struct ElementData {
    /// Tag name as written, prefix included.
    pub qname: String,
    /// Resolved namespace URI; empty when the element is in no namespace.
    pub ns: String,
    /// Local part of the tag name.
    pub local: String,
    /// Attributes in document order, namespace declarations included.
    pub attributes: Vec<Attribute>,
}

impl ElementData {
    /// Look up an attribute by its qualified name.
    pub fn attribute(&self, qname: &str) -> Option<&Attribute> {
        self.attributes.iter().find(|a| a.qname == qname)
    }

    /// Look up an attribute by resolved namespace URI and local name.
    pub fn attribute_ns(&self, ns: &str, local: &str) -> Option<&Attribute> {
        self.attributes.iter().find(|a| a.ns == ns && a.local == local)
    }
}

/// Node payload variants.
#[derive(Debug, Clone)]
pub enum NodeKind {
    /// The document node; always the arena root.
    Document,
    Element(ElementData),
    Text(String),
    CData(String),
    Comment(String),
    ProcessingInstruction(String),
}

#[derive(Debug, Clone)]
struct NodeData {
    parent: Option<NodeId>,
    children: Vec<NodeId>,
    kind: NodeKind,
}

/// An XML document materialized into an arena of nodes.
#[derive(Debug, Clone)]
pub struct XmlTree {
    nodes: Vec<NodeData>,
}

impl XmlTree {
    /// Create an empty tree containing only the document node.
    pub(crate) fn new() -> XmlTree {
        XmlTree {
            nodes: vec![NodeData {
                parent: None,
                children: Vec::new(),
                kind: NodeKind::Document,
            }],
        }
    }

    /// Parse a byte buffer into a tree.
    ///
    /// Fails with [`Error::InvalidXml`] on malformed markup or when the
    /// input does not contain exactly one root element.
    pub fn parse(input: &[u8]) -> Result<XmlTree> {
        let mut reader = Reader::from_reader(input);
        let mut tree = XmlTree::new();
        let mut stack: Vec<NodeId> = vec![tree.document()];
        let mut scopes = NamespaceScopes::default();
        let mut buf = Vec::new();

        loop {
            match reader.read_event_into(&mut buf).map_err(|_| Error::InvalidXml)? {
                Event::Start(start) => {
                    let parent = current(&stack)?;
                    let id = open_element(&mut tree, &mut scopes, parent, &start)?;
                    stack.push(id);
                }
                Event::Empty(start) => {
                    let parent = current(&stack)?;
                    open_element(&mut tree, &mut scopes, parent, &start)?;
                    scopes.pop();
                }
                Event::End(_) => {
                    if stack.len() <= 1 {
                        return Err(Error::InvalidXml);
                    }
                    stack.pop();
                    scopes.pop();
                }
                Event::Text(text) => {
                    let parent = current(&stack)?;
                    let content = text.decode().map_err(|_| Error::InvalidXml)?;
                    if parent == tree.document() {
                        // character data outside the root element
                        if !content.trim().is_empty() {
                            return Err(Error::InvalidXml);
                        }
                    } else {
                        tree.append_text(parent, &content);
                    }
                }
                Event::GeneralRef(entity) => {
                    let parent = current(&stack)?;
                    if parent == tree.document() {
                        return Err(Error::InvalidXml);
                    }
                    let name = String::from_utf8_lossy(entity.as_ref()).into_owned();
                    let resolved = match name.as_str() {
                        "amp" => "&".to_owned(),
                        "lt" => "<".to_owned(),
                        "gt" => ">".to_owned(),
                        "quot" => "\"".to_owned(),
                        "apos" => "'".to_owned(),
                        _ => match entity.resolve_char_ref().ok().flatten() {
                            Some(c) => c.to_string(),
                            // unknown entity, keep the reference verbatim
                            None => format!("&{name};"),
                        },
                    };
                    tree.append_text(parent, &resolved);
                }
                Event::CData(data) => {
                    let parent = current(&stack)?;
                    if parent == tree.document() {
                        return Err(Error::InvalidXml);
                    }
                    let content = String::from_utf8_lossy(data.as_ref()).into_owned();
                    tree.append(parent, NodeKind::CData(content));
                }
                Event::Comment(comment) => {
                    let parent = current(&stack)?;
                    let content = String::from_utf8_lossy(comment.as_ref()).into_owned();
                    tree.append(parent, NodeKind::Comment(content));
                }
                Event::PI(pi) => {
                    let parent = current(&stack)?;
                    let content = String::from_utf8_lossy(pi.as_ref()).into_owned();
                    tree.append(parent, NodeKind::ProcessingInstruction(content));
                }
                Event::Decl(_) | Event::DocType(_) => {}
                Event::Eof => break,
            }
            buf.clear();
        }

        if stack.len() != 1 {
            return Err(Error::InvalidXml);
        }
        let element_count = tree
            .children(tree.document())
            .iter()
            .filter(|&&c| matches!(tree.kind(c), NodeKind::Element(_)))
            .count();
        if element_count != 1 {
            return Err(Error::InvalidXml);
        }
        Ok(tree)
    }

    /// The document node.
    pub fn document(&self) -> NodeId {
        NodeId(0)
    }

    /// The single root element, if the tree has one.
    pub fn document_element(&self) -> Option<NodeId> {
        self.children(self.document())
            .iter()
            .copied()
            .find(|&c| matches!(self.kind(c), NodeKind::Element(_)))
    }

    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.nodes[id.index()].parent
    }

    pub fn children(&self, id: NodeId) -> &[NodeId] {
        &self.nodes[id.index()].children
    }

    pub fn kind(&self, id: NodeId) -> &NodeKind {
        &self.nodes[id.index()].kind
    }

    /// The element payload of `id`, if it is an element node.
    pub fn element(&self, id: NodeId) -> Option<&ElementData> {
        match self.kind(id) {
            NodeKind::Element(el) => Some(el),
            _ => None,
        }
    }

    /// Concatenated text and CDATA content of all descendants.
    pub fn text_content(&self, id: NodeId) -> String {
        let mut out = String::new();
        self.collect_text(id, &mut out);
        out
    }

    fn collect_text(&self, id: NodeId, out: &mut String) {
        for &child in self.children(id) {
            match self.kind(child) {
                NodeKind::Text(t) | NodeKind::CData(t) => out.push_str(t),
                NodeKind::Element(_) => self.collect_text(child, out),
                _ => {}
            }
        }
    }

    /// Append a node under `parent` and return its handle.
    pub(crate) fn append(&mut self, parent: NodeId, kind: NodeKind) -> NodeId {
        let id = NodeId(self.nodes.len() as u32);
        self.nodes.push(NodeData {
            parent: Some(parent),
            children: Vec::new(),
            kind,
        });
        self.nodes[parent.index()].children.push(id);
        id
    }

    /// Append character data, merging into a preceding text node so entity
    /// references do not split one logical run of text.
    pub(crate) fn append_text(&mut self, parent: NodeId, text: &str) {
        if let Some(&last) = self.nodes[parent.index()].children.last() {
            if let NodeKind::Text(existing) = &mut self.nodes[last.index()].kind {
                existing.push_str(text);
                return;
            }
        }
        self.append(parent, NodeKind::Text(text.to_owned()));
    }

    /// Serialize one node back to markup.
    ///
    /// `extra_base` is an `xml:base` value to stamp onto the node when it is
    /// an element without an explicit base of its own.
    pub(crate) fn serialize_node(&self, id: NodeId, extra_base: Option<&str>, out: &mut String) {
        match self.kind(id) {
            NodeKind::Document => {
                for &child in self.children(id) {
                    self.serialize_node(child, None, out);
                }
            }
            NodeKind::Element(el) => {
                out.push('<');
                out.push_str(&el.qname);
                for attr in &el.attributes {
                    out.push(' ');
                    out.push_str(&attr.qname);
                    out.push_str("=\"");
                    out.push_str(&escape_attribute(&attr.value));
                    out.push('"');
                }
                if let Some(base) = extra_base {
                    if el.attribute_ns(ns::XML, "base").is_none() {
                        out.push_str(" xml:base=\"");
                        out.push_str(&escape_attribute(base));
                        out.push('"');
                    }
                }
                let children = self.children(id);
                if children.is_empty() {
                    out.push_str("/>");
                } else {
                    out.push('>');
                    for &child in children {
                        self.serialize_node(child, None, out);
                    }
                    out.push_str("</");
                    out.push_str(&el.qname);
                    out.push('>');
                }
            }
            NodeKind::Text(t) => out.push_str(&escape_text(t)),
            NodeKind::CData(t) => {
                out.push_str("<![CDATA[");
                out.push_str(t);
                out.push_str("]]>");
            }
            NodeKind::Comment(t) => {
                out.push_str("<!--");
                out.push_str(t);
                out.push_str("-->");
            }
            NodeKind::ProcessingInstruction(t) => {
                out.push_str("<?");
                out.push_str(t);
                out.push_str("?>");
            }
        }
    }
}

fn current(stack: &[NodeId]) -> Result<NodeId> {
    stack.last().copied().ok_or(Error::InvalidXml)
}

/// Prefix-to-namespace bindings, one scope per open element.
#[derive(Debug, Default)]
struct NamespaceScopes {
    scopes: Vec<HashMap<String, String>>,
}

impl NamespaceScopes {
    fn push(&mut self, declarations: HashMap<String, String>) {
        self.scopes.push(declarations);
    }

    fn pop(&mut self) {
        self.scopes.pop();
    }

    /// Resolve a prefix; the empty prefix resolves the default namespace.
    fn resolve(&self, prefix: &str) -> String {
        if prefix == "xml" {
            return ns::XML.to_owned();
        }
        if prefix == "xmlns" {
            return ns::XMLNS.to_owned();
        }
        for scope in self.scopes.iter().rev() {
            if let Some(uri) = scope.get(prefix) {
                return uri.clone();
            }
        }
        String::new()
    }
}

fn split_qname(qname: &str) -> (&str, &str) {
    match qname.split_once(':') {
        Some((prefix, local)) => (prefix, local),
        None => ("", qname),
    }
}

fn open_element(
    tree: &mut XmlTree,
    scopes: &mut NamespaceScopes,
    parent: NodeId,
    start: &BytesStart<'_>,
) -> Result<NodeId> {
    // first pass: collect namespace declarations so they are in scope for
    // the element's own name and its other attributes
    let mut declarations = HashMap::new();
    let mut raw_attributes: Vec<(String, String)> = Vec::new();
    for attr in start.attributes() {
        let attr = attr.map_err(|_| Error::InvalidXml)?;
        let key = String::from_utf8_lossy(attr.key.as_ref()).into_owned();
        let value = attr
            .unescape_value()
            .map_err(|_| Error::InvalidXml)?
            .into_owned();
        if key == "xmlns" {
            declarations.insert(String::new(), value.clone());
        } else if let Some(prefix) = key.strip_prefix("xmlns:") {
            declarations.insert(prefix.to_owned(), value.clone());
        }
        raw_attributes.push((key, value));
    }
    scopes.push(declarations);

    let qname = String::from_utf8_lossy(start.name().as_ref()).into_owned();
    let (prefix, local) = split_qname(&qname);
    let element_ns = scopes.resolve(prefix);
    let local = local.to_owned();

    let mut attributes = Vec::with_capacity(raw_attributes.len());
    for (key, value) in raw_attributes {
        let (attr_prefix, attr_local) = split_qname(&key);
        let (attr_ns, attr_local) = if key == "xmlns" {
            (ns::XMLNS.to_owned(), "xmlns".to_owned())
        } else if attr_prefix.is_empty() {
            // unprefixed attributes are never in the default namespace
            (String::new(), attr_local.to_owned())
        } else {
            (scopes.resolve(attr_prefix), attr_local.to_owned())
        };
        attributes.push(Attribute {
            qname: key,
            ns: attr_ns,
            local: attr_local,
            value,
        });
    }

    Ok(tree.append(
        parent,
        NodeKind::Element(ElementData {
            qname,
            ns: element_ns,
            local,
            attributes,
        }),
    ))
}
