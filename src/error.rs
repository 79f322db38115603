//! Error types for feed parsing.
//!
//! A call to [`ParserRegistry::parse`](crate::ParserRegistry::parse) has
//! exactly one of four outcomes, captured by [`ErrorCode`]. The three failing
//! outcomes are surfaced as [`Error`] values; field extraction on a parsed
//! document never fails and degrades to defaults instead.
use thiserror::Error;

/// Main error type for syndic operations.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// The source bytes could not be parsed as XML at all.
    #[error("the document is not well-formed XML")]
    InvalidXml,

    /// The XML parsed fine, but no registered format parser recognized
    /// the document structure.
    #[error("no registered format parser accepted the document")]
    XmlNotAccepted,

    /// A format parser accepted the document, but the resulting document
    /// failed its validity check (e.g. `<rss>` without a `<channel>`).
    #[error("the document was accepted but failed format validation")]
    InvalidFormat,
}

impl Error {
    /// The [`ErrorCode`] corresponding to this error.
    pub fn code(&self) -> ErrorCode {
        match self {
            Error::InvalidXml => ErrorCode::InvalidXml,
            Error::XmlNotAccepted => ErrorCode::XmlNotAccepted,
            Error::InvalidFormat => ErrorCode::InvalidFormat,
        }
    }
}

/// Outcome classification of the most recent `parse()` call on a registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ErrorCode {
    /// Parsing succeeded.
    #[default]
    Success,
    /// The source was not well-formed XML.
    InvalidXml,
    /// No registered parser accepted the document.
    XmlNotAccepted,
    /// A parser accepted the document but it failed validation.
    InvalidFormat,
}

/// Result type for syndic operations.
pub type Result<T> = std::result::Result<T, Error>;
