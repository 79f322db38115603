//! Unified person value and the free-form person string parser.

use crate::util::text::simplified;

/// A person, as extracted from author/contributor style fields.
///
/// Any of the fields may be absent; a person with all three absent is
/// considered null.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Person {
    pub name: Option<String>,
    pub uri: Option<String>,
    pub email: Option<String>,
}

impl Person {
    pub fn new(name: Option<String>, uri: Option<String>, email: Option<String>) -> Person {
        Person { name, uri, email }
    }

    /// Whether the person carries no information at all.
    pub fn is_null(&self) -> bool {
        self.name.is_none() && self.uri.is_none() && self.email.is_none()
    }

    /// Parse free-form author strings as found in RSS feeds.
    ///
    /// Handles the common layouts: `Joe User <joe@example.com>`,
    /// `joe@example.com (Joe User)`, a bare address, or a bare name.
    /// Returns `None` when nothing usable is found.
    pub fn from_string(s: &str) -> Option<Person> {
        let s = simplified(s);
        if s.is_empty() {
            return None;
        }
        let chars: Vec<char> = s.chars().collect();

        // look for an e-mail address: expand around '@'
        let mut email_span: Option<(usize, usize)> = None;
        if let Some(at) = chars.iter().position(|&c| c == '@') {
            let mut start = at;
            while start > 0 && !chars[start - 1].is_whitespace() && chars[start - 1] != '<' {
                start -= 1;
            }
            let mut end = at + 1;
            while end < chars.len() && !chars[end].is_whitespace() && chars[end] != '>' {
                end += 1;
            }
            if start < at && end > at + 1 {
                email_span = Some((start, end));
            }
        }

        let (email, remainder) = match email_span {
            Some((start, end)) => {
                let address: String = chars[start..end].iter().collect();
                let address = address.strip_prefix("mailto:").unwrap_or(&address).to_owned();
                // widen the removal span over enclosing angle brackets
                let mut cut_start = start;
                let mut cut_end = end;
                if start > 0 && chars[start - 1] == '<' && end < chars.len() && chars[end] == '>' {
                    cut_start -= 1;
                    cut_end += 1;
                }
                let mut rest: String = chars[..cut_start].iter().collect();
                rest.extend(chars[cut_end..].iter());
                (Some(address), rest)
            }
            None => (None, s.clone()),
        };

        let mut name = simplified(&remainder);
        // a name set in parentheses next to the address
        if name.starts_with('(') && name.ends_with(')') && name.len() >= 2 {
            name = simplified(&name[1..name.len() - 1]);
        }
        let name = if name.is_empty() { None } else { Some(name) };

        if name.is_none() && email.is_none() {
            return None;
        }
        Some(Person { name, uri: None, email })
    }
}

impl std::fmt::Display for Person {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match (&self.name, &self.email) {
            (Some(name), Some(email)) => write!(f, "{name} <{email}>"),
            (Some(name), None) => write!(f, "{name}"),
            (None, Some(email)) => write!(f, "{email}"),
            (None, None) => Ok(()),
        }
    }
}
