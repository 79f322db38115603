//! RSS 1.0 item view over a statement graph.

use std::rc::Rc;

use crate::rdf::document::Document;
use crate::rdf::model::Model;
use crate::rdf::vocab;
use crate::rdf::DublinCore;
use crate::util::text::normalize_as;

/// One item resource of an RSS 0.9/1.0 channel.
#[derive(Debug, Clone)]
pub struct Item {
    model: Rc<Model>,
    subject: String,
    doc: Option<Document>,
}

impl Item {
    pub(crate) fn new(model: Rc<Model>, subject: String, doc: Option<Document>) -> Item {
        Item { model, subject, doc }
    }

    pub(crate) fn model(&self) -> &Rc<Model> {
        &self.model
    }

    pub(crate) fn subject(&self) -> &str {
        &self.subject
    }

    /// Whether the item resource was unnamed in the document.
    pub fn is_anonymous(&self) -> bool {
        self.model.is_anonymous(&self.subject)
    }

    /// Title, normalized to HTML using the document-wide format probe.
    pub fn title(&self) -> String {
        let original = self.original_title();
        match &self.doc {
            Some(doc) => normalize_as(&original, false, doc.item_title_has_markup()),
            None => original,
        }
    }

    pub fn description(&self) -> String {
        let original = self.original_description();
        match &self.doc {
            Some(doc) => normalize_as(&original, false, doc.item_description_has_markup()),
            None => original,
        }
    }

    pub fn original_title(&self) -> String {
        self.model.property_text(&self.subject, &vocab::rss10("title"))
    }

    pub fn original_description(&self) -> String {
        self.model.property_text(&self.subject, &vocab::rss10("description"))
    }

    pub fn link(&self) -> String {
        self.model.property_text(&self.subject, &vocab::rss10("link"))
    }

    /// Full item content from the content module (`content:encoded`).
    pub fn encoded_content(&self) -> String {
        self.model
            .property_text(&self.subject, &vocab::content("encoded"))
    }

    pub fn dc(&self) -> DublinCore {
        DublinCore::new(Rc::clone(&self.model), self.subject.clone())
    }

    /// Number of comments, from the slash module; `-1` when absent.
    pub fn comments_count(&self) -> i32 {
        let raw = self.model.property_text(&self.subject, &vocab::slash("comments"));
        raw.trim().parse().unwrap_or(-1)
    }

    /// Comment feed URL from the wfw module.
    pub fn comments_feed(&self) -> String {
        self.model
            .property_text(&self.subject, &vocab::comment_api("commentRss"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rdf::model::Node;

    fn item_with(predicate: String, value: &str) -> Item {
        let mut m = Model::new();
        m.add_statement("i", predicate, Node::Literal { text: value.into() });
        Item::new(Rc::new(m), "i".into(), None)
    }

    #[test]
    fn test_title_raw_without_document() {
        let item = item_with(vocab::rss10("title"), "a < b");
        assert_eq!(item.title(), "a < b");
    }

    #[test]
    fn test_encoded_content() {
        let item = item_with(vocab::content("encoded"), "<p>full</p>");
        assert_eq!(item.encoded_content(), "<p>full</p>");
    }

    #[test]
    fn test_comments_count_defaults_to_minus_one() {
        let item = item_with(vocab::slash("comments"), "17");
        assert_eq!(item.comments_count(), 17);
        let item = item_with(vocab::rss10("title"), "t");
        assert_eq!(item.comments_count(), -1);
    }
}
