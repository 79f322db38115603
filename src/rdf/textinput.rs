//! RSS 1.0 text input view.

use std::rc::Rc;

use crate::rdf::model::Model;
use crate::rdf::vocab;

#[derive(Debug, Clone)]
pub struct TextInput {
    model: Option<Rc<Model>>,
    subject: String,
}

impl TextInput {
    pub(crate) fn new(model: Rc<Model>, subject: String) -> TextInput {
        TextInput { model: Some(model), subject }
    }

    pub(crate) fn null() -> TextInput {
        TextInput { model: None, subject: String::new() }
    }

    pub fn is_null(&self) -> bool {
        self.model.is_none()
    }

    fn text(&self, term: &str) -> String {
        match &self.model {
            Some(model) => model.property_text(&self.subject, &vocab::rss10(term)),
            None => String::new(),
        }
    }

    pub fn title(&self) -> String {
        self.text("title")
    }

    pub fn description(&self) -> String {
        self.text("description")
    }

    pub fn name(&self) -> String {
        self.text("name")
    }

    pub fn link(&self) -> String {
        self.text("link")
    }
}
