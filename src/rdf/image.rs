//! RSS 1.0 channel image view.

use std::rc::Rc;

use crate::rdf::model::Model;
use crate::rdf::vocab;

#[derive(Debug, Clone)]
pub struct Image {
    model: Option<Rc<Model>>,
    subject: String,
}

impl Image {
    pub(crate) fn new(model: Rc<Model>, subject: String) -> Image {
        Image { model: Some(model), subject }
    }

    pub(crate) fn null() -> Image {
        Image { model: None, subject: String::new() }
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

    pub fn url(&self) -> String {
        self.text("url")
    }

    pub fn link(&self) -> String {
        self.text("link")
    }
}
