//! Shared helpers for date parsing, text normalization, and hashing.

pub mod dates;
pub mod hash;
pub mod text;
