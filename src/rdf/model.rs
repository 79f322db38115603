//! Statement graph backing the RDF document model.

use std::collections::{HashMap, HashSet};

use crate::rdf::vocab;

/// A node of the graph: the object position of a statement, or a
/// sequence member.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    /// A resource identified by URI.
    Resource { uri: String },
    /// A property used as a value.
    Property { uri: String },
    /// A literal string value.
    Literal { text: String },
    /// An `rdf:Seq` container, identified by its resource id.
    Sequence { id: String },
}

impl Node {
    /// Literal text, empty for non-literals.
    pub fn text(&self) -> &str {
        match self {
            Node::Literal { text } => text,
            _ => "",
        }
    }

    /// Resource or sequence URI, empty for literals and properties.
    pub fn resource_uri(&self) -> &str {
        match self {
            Node::Resource { uri } => uri,
            Node::Sequence { id } => id,
            _ => "",
        }
    }
}

/// One `(subject, predicate, object)` triple.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Statement {
    pub subject: String,
    pub predicate: String,
    pub object: Node,
}

/// An RDF graph: statements in insertion order plus sequence containers.
///
/// Insertion order matters: it is the document order of the source and
/// drives item ordering for RSS 0.9 feeds, which carry no `rdf:Seq`.
#[derive(Debug, Default)]
pub struct Model {
    statements: Vec<Statement>,
    sequences: HashMap<String, Vec<Node>>,
    anonymous: HashSet<String>,
    anon_counter: u32,
}

impl Model {
    pub fn new() -> Model {
        Model::default()
    }

    /// Mint an identifier for a resource the document left unnamed.
    pub(crate) fn next_anon_id(&mut self) -> String {
        self.anon_counter += 1;
        let id = format!("genid{}", self.anon_counter);
        self.anonymous.insert(id.clone());
        id
    }

    /// Whether `uri` was minted rather than found in the document.
    pub fn is_anonymous(&self, uri: &str) -> bool {
        self.anonymous.contains(uri)
    }

    pub fn add_statement(&mut self, subject: impl Into<String>, predicate: impl Into<String>, object: Node) {
        self.statements.push(Statement {
            subject: subject.into(),
            predicate: predicate.into(),
            object,
        });
    }

    pub(crate) fn remove_statements(&mut self, subject: &str, predicate: &str) {
        self.statements
            .retain(|s| !(s.subject == subject && s.predicate == predicate));
    }

    pub(crate) fn register_sequence(&mut self, id: impl Into<String>) {
        self.sequences.entry(id.into()).or_default();
    }

    pub(crate) fn append_to_sequence(&mut self, id: &str, node: Node) {
        self.sequences.entry(id.to_owned()).or_default().push(node);
    }

    /// Members of a sequence, in document order.
    pub fn sequence(&self, id: &str) -> &[Node] {
        self.sequences.get(id).map(Vec::as_slice).unwrap_or(&[])
    }

    /// First object of `(subject, predicate, _)`, if any.
    pub fn property(&self, subject: &str, predicate: &str) -> Option<&Node> {
        self.statements
            .iter()
            .find(|s| s.subject == subject && s.predicate == predicate)
            .map(|s| &s.object)
    }

    /// All objects of `(subject, predicate, _)`, in insertion order.
    pub fn properties(&self, subject: &str, predicate: &str) -> Vec<&Node> {
        self.statements
            .iter()
            .filter(|s| s.subject == subject && s.predicate == predicate)
            .map(|s| &s.object)
            .collect()
    }

    /// Literal text of the first `(subject, predicate, _)` statement,
    /// empty when absent or not a literal.
    pub fn property_text(&self, subject: &str, predicate: &str) -> String {
        self.property(subject, predicate)
            .map(|n| n.text().to_owned())
            .unwrap_or_default()
    }

    /// Subjects carrying an `rdf:type` statement naming `type_uri`, in
    /// document order, deduplicated.
    pub fn resources_with_type(&self, type_uri: &str) -> Vec<String> {
        let rdf_type = vocab::rdf("type");
        let mut seen = HashSet::new();
        let mut out = Vec::new();
        for s in &self.statements {
            if s.predicate == rdf_type
                && s.object.resource_uri() == type_uri
                && seen.insert(s.subject.clone())
            {
                out.push(s.subject.clone());
            }
        }
        out
    }

    pub fn statements(&self) -> &[Statement] {
        &self.statements
    }
}
