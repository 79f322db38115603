//! Unified feed image over the dialect-specific representations.

use crate::{rdf, rss2};

/// A feed image or icon in the unified model.
#[derive(Debug, Clone)]
pub enum Image {
    /// The feed has no image.
    None,
    Rss2(rss2::Image),
    Rdf(rdf::Image),
    /// Atom only gives a URI (`logo` or `icon`).
    Atom { uri: String },
}

impl Image {
    pub fn is_null(&self) -> bool {
        match self {
            Image::None => true,
            Image::Rss2(i) => i.is_null(),
            Image::Rdf(i) => i.is_null(),
            Image::Atom { uri } => uri.is_empty(),
        }
    }

    pub fn url(&self) -> String {
        match self {
            Image::None => String::new(),
            Image::Rss2(i) => i.url(),
            Image::Rdf(i) => i.url(),
            Image::Atom { uri } => uri.clone(),
        }
    }

    pub fn title(&self) -> String {
        match self {
            Image::Rss2(i) => i.title(),
            Image::Rdf(i) => i.title(),
            _ => String::new(),
        }
    }

    pub fn link(&self) -> String {
        match self {
            Image::Rss2(i) => i.link(),
            Image::Rdf(i) => i.link(),
            _ => String::new(),
        }
    }

    pub fn description(&self) -> String {
        match self {
            Image::Rss2(i) => i.description(),
            _ => String::new(),
        }
    }

    /// Width in pixels, `0` when the dialect does not carry one.
    pub fn width(&self) -> u32 {
        match self {
            Image::Rss2(i) => i.width(),
            _ => 0,
        }
    }

    pub fn height(&self) -> u32 {
        match self {
            Image::Rss2(i) => i.height(),
            _ => 0,
        }
    }
}
