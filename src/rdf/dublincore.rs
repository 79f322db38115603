//! Dublin Core metadata view over a graph resource.

use std::rc::Rc;

use crate::rdf::model::{Model, Node};
use crate::rdf::vocab;
use crate::util::dates::{DateFormat, parse_date};

/// Read access to the `dc:` properties of one resource.
#[derive(Debug, Clone)]
pub struct DublinCore {
    model: Rc<Model>,
    subject: String,
}

impl DublinCore {
    pub(crate) fn new(model: Rc<Model>, subject: String) -> DublinCore {
        DublinCore { model, subject }
    }

    fn text(&self, term: &str) -> String {
        self.model.property_text(&self.subject, &vocab::dc(term))
    }

    fn texts(&self, term: &str) -> Vec<String> {
        self.model
            .properties(&self.subject, &vocab::dc(term))
            .into_iter()
            .filter_map(|n| match n {
                Node::Literal { text } if !text.is_empty() => Some(text.clone()),
                _ => None,
            })
            .collect()
    }

    pub fn contributor(&self) -> String {
        self.text("contributor")
    }

    pub fn contributors(&self) -> Vec<String> {
        self.texts("contributor")
    }

    pub fn coverage(&self) -> String {
        self.text("coverage")
    }

    pub fn creator(&self) -> String {
        self.text("creator")
    }

    pub fn creators(&self) -> Vec<String> {
        self.texts("creator")
    }

    /// `dc:date` as a Unix timestamp, `0` when absent.
    pub fn date(&self) -> i64 {
        parse_date(&self.text("date"), DateFormat::Iso)
    }

    pub fn description(&self) -> String {
        self.text("description")
    }

    pub fn format(&self) -> String {
        self.text("format")
    }

    pub fn identifier(&self) -> String {
        self.text("identifier")
    }

    pub fn language(&self) -> String {
        self.text("language")
    }

    pub fn publisher(&self) -> String {
        self.text("publisher")
    }

    pub fn relation(&self) -> String {
        self.text("relation")
    }

    pub fn rights(&self) -> String {
        self.text("rights")
    }

    pub fn source(&self) -> String {
        self.text("source")
    }

    pub fn subject(&self) -> String {
        self.text("subject")
    }

    pub fn subjects(&self) -> Vec<String> {
        self.texts("subject")
    }

    pub fn title(&self) -> String {
        self.text("title")
    }

    pub fn resource_type(&self) -> String {
        self.text("type")
    }
}
