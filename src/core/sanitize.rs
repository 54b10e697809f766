// src/core/sanitize.rs

const ENTITIES: &[(&str, &str)] = &[
    ("&nbsp;", " "),
    ("&#39;", "'"),
    ("&#x27;", "'"),
    ("&apos;", "'"),
    ("&quot;", "\""),
    ("&lt;", "<"),
    ("&gt;", ">"),
    // last, so "&amp;lt;" stays "&lt;"
    ("&amp;", "&"),
];

/// Decode the handful of entities the sources actually emit in names and labels.
pub fn normalize_entities(s: &str) -> String {
    if !s.contains('&') {
        return s.to_string();
    }
    let mut out = s.to_string();
    for (from, to) in ENTITIES {
        if out.contains(from) {
            out = out.replace(from, to);
        }
    }
    out
}

pub fn normalize_ws(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut prev_space = false;
    for ch in s.chars() {
        if ch.is_whitespace() {
            if !prev_space { out.push(' '); prev_space = true; }
        } else { out.push(ch); prev_space = false; }
    }
    out.trim().to_string()
}

/// Entity-decoded, whitespace-collapsed visible text.
pub fn clean_text(s: &str) -> String {
    normalize_ws(&normalize_entities(s))
}
