//! Lowering of an `rdf:RDF` element tree into a statement graph.

use crate::ns;
use crate::rdf::model::{Model, Node};
use crate::rdf::vocab;
use crate::xml::ElementView;

/// Read every top-level resource description under the `rdf:RDF` root
/// into a fresh model.
pub(crate) fn read_graph(root: &ElementView) -> Model {
    let mut model = Model::new();
    for child in root.child_elements() {
        read_resource(&mut model, &child);
    }
    model
}

/// Attribute in the RDF namespace, tolerating the common unprefixed form.
fn rdf_attribute(el: &ElementView, local: &str) -> Option<String> {
    if el.has_attribute_ns(ns::RDF, local) {
        return Some(el.attribute_ns(ns::RDF, local, ""));
    }
    if el.has_attribute(local) {
        return Some(el.attribute(local, ""));
    }
    None
}

fn read_resource(model: &mut Model, el: &ElementView) -> Node {
    let type_uri = format!("{}{}", el.namespace(), el.local_name());
    let is_seq = type_uri == vocab::rdf("Seq");

    let uri = match rdf_attribute(el, "about") {
        Some(about) if !about.is_empty() => about,
        _ => model.next_anon_id(),
    };
    let subject = if is_seq {
        model.register_sequence(uri.clone());
        Node::Sequence { id: uri.clone() }
    } else {
        Node::Resource { uri: uri.clone() }
    };
    model.add_statement(&uri, vocab::rdf("type"), Node::Resource { uri: type_uri });

    for child in el.child_elements() {
        let predicate = format!("{}{}", child.namespace(), child.local_name());
        let object = if let Some(resource) = rdf_attribute(&child, "resource") {
            Node::Resource { uri: resource }
        } else {
            let nested = child.child_elements();
            match nested.last() {
                Some(last) => read_resource(model, last),
                None => Node::Literal { text: child.text() },
            }
        };
        if is_seq && predicate == vocab::rdf("li") {
            model.append_to_sequence(&uri, object);
        } else {
            model.add_statement(&uri, predicate, object);
        }
    }
    subject
}
