//! Text normalization between plain text and HTML.
//!
//! Feeds give no reliable signal whether a field holds plain text or HTML,
//! so the unified API settles on HTML everywhere: values that look like
//! markup pass through, plain-looking values get their special characters
//! escaped. The detection is heuristic by necessity.

/// Replace the predefined XML entities and numeric character references
/// with the characters they denote. Unknown entities stay verbatim.
pub fn resolve_entities(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut rest = s;
    while let Some(pos) = rest.find('&') {
        out.push_str(&rest[..pos]);
        rest = &rest[pos..];
        match rest[1..].find(';') {
            Some(end) => {
                let name = &rest[1..end + 1];
                match resolve_entity(name) {
                    Some(replacement) => {
                        out.push_str(&replacement);
                        rest = &rest[end + 2..];
                    }
                    None => {
                        out.push('&');
                        rest = &rest[1..];
                    }
                }
            }
            None => {
                out.push('&');
                rest = &rest[1..];
            }
        }
    }
    out.push_str(rest);
    out
}

fn resolve_entity(name: &str) -> Option<String> {
    match name {
        "amp" => return Some("&".to_owned()),
        "lt" => return Some("<".to_owned()),
        "gt" => return Some(">".to_owned()),
        "quot" => return Some("\"".to_owned()),
        "apos" => return Some("'".to_owned()),
        "nbsp" => return Some("\u{a0}".to_owned()),
        _ => {}
    }
    let code = if let Some(hex) = name.strip_prefix("#x").or_else(|| name.strip_prefix("#X")) {
        u32::from_str_radix(hex, 16).ok()?
    } else if let Some(dec) = name.strip_prefix('#') {
        dec.parse::<u32>().ok()?
    } else {
        return None;
    };
    char::from_u32(code).map(|c| c.to_string())
}

/// Escape `& " < > '` to their entities. The result is trimmed.
pub fn escape_special_characters(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '"' => out.push_str("&quot;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(c),
        }
    }
    out.trim().to_owned()
}

/// Replace line feeds with `<br/>`.
pub fn convert_newlines(s: &str) -> String {
    s.replace('\n', "<br/>")
}

/// Convert plain text to HTML: escape `& " <`, turn newlines into
/// `<br/>`, and trim.
pub fn plain_text_to_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '"' => out.push_str("&quot;"),
            '<' => out.push_str("&lt;"),
            '\n' => out.push_str("<br/>"),
            _ => out.push(c),
        }
    }
    out.trim().to_owned()
}

/// Convert HTML to plain text: drop tags, resolve entities, trim.
pub fn html_to_plain_text(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut in_tag = false;
    for c in s.chars() {
        match c {
            '<' => in_tag = true,
            '>' if in_tag => in_tag = false,
            _ if !in_tag => out.push(c),
            _ => {}
        }
    }
    resolve_entities(&out).trim().to_owned()
}

/// Heuristic check whether a string contains HTML/XML markup: either an
/// entity reference or something that looks like a tag.
pub fn string_contains_markup(s: &str) -> bool {
    if contains_entity(s) {
        return true;
    }
    let bytes = s.as_bytes();
    for (i, &b) in bytes.iter().enumerate() {
        if b == b'<' {
            let after_word = bytes
                .get(i + 1)
                .is_some_and(|&c| c.is_ascii_alphanumeric() || c == b'_' || c == b'/');
            if after_word && bytes[i + 1..].contains(&b'>') {
                return true;
            }
        }
    }
    false
}

fn contains_entity(s: &str) -> bool {
    let bytes = s.as_bytes();
    let mut i = 0;
    while let Some(pos) = s[i..].find('&') {
        let start = i + pos + 1;
        let mut end = start;
        while end < bytes.len()
            && (bytes[end].is_ascii_alphanumeric() || bytes[end] == b'#')
        {
            end += 1;
        }
        if end > start && bytes.get(end) == Some(&b';') {
            return true;
        }
        i = start;
    }
    false
}

/// Whether a string should be treated as HTML rather than plain text.
pub fn is_html(s: &str) -> bool {
    string_contains_markup(s)
}

/// Normalize a string of unknown nature to HTML: markup passes through
/// trimmed, plain text gets escaped.
pub fn normalize(s: &str) -> String {
    if is_html(s) {
        s.trim().to_owned()
    } else {
        plain_text_to_html(s)
    }
}

/// Normalize a string whose nature is already known from document-wide
/// probing: whether it came from a CDATA section and whether sibling
/// values contain markup.
pub fn normalize_as(s: &str, is_cdata: bool, contains_markup: bool) -> String {
    if contains_markup {
        s.trim().to_owned()
    } else if is_cdata {
        convert_newlines(&escape_special_characters(&resolve_entities(s)))
    } else {
        escape_special_characters(s)
    }
}

/// Collapse runs of whitespace to single spaces and trim.
pub fn simplified(s: &str) -> String {
    s.split_whitespace().collect::<Vec<_>>().join(" ")
}
