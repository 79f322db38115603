//! `<textInput>` element wrapper.

use crate::xml::ElementView;

/// The mostly-historical text input box of an RSS 2.0 channel.
#[derive(Debug, Clone)]
pub struct TextInput {
    elem: ElementView,
}

impl TextInput {
    pub(crate) fn new(elem: ElementView) -> TextInput {
        TextInput { elem }
    }

    pub fn is_null(&self) -> bool {
        self.elem.is_null()
    }

    pub fn title(&self) -> String {
        self.elem.extract_element_text("title").unwrap_or_default()
    }

    pub fn description(&self) -> String {
        self.elem.extract_element_text("description").unwrap_or_default()
    }

    pub fn name(&self) -> String {
        self.elem.extract_element_text("name").unwrap_or_default()
    }

    pub fn link(&self) -> String {
        self.elem.extract_element_text("link").unwrap_or_default()
    }
}
