//! Vocabulary URI builders for the RDF dialects and their modules.

use crate::ns;

pub(crate) fn rdf(term: &str) -> String {
    format!("{}{term}", ns::RDF)
}

pub(crate) fn rss10(term: &str) -> String {
    format!("{}{term}", ns::RSS10)
}

pub(crate) fn rss09(term: &str) -> String {
    format!("{}{term}", ns::RSS09)
}

pub(crate) fn dc(term: &str) -> String {
    format!("{}{term}", ns::DUBLIN_CORE)
}

pub(crate) fn syndication(term: &str) -> String {
    format!("{}{term}", ns::SYNDICATION)
}

pub(crate) fn content(term: &str) -> String {
    format!("{}{term}", ns::CONTENT)
}

pub(crate) fn slash(term: &str) -> String {
    format!("{}{term}", ns::SLASH)
}

pub(crate) fn comment_api(term: &str) -> String {
    format!("{}{term}", ns::COMMENT_API)
}
