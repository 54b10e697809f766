// src/core/html.rs
use super::sanitize::{clean_text, normalize_entities, normalize_ws};
use super::tokens::{Token, Tokens};
use crate::error::ParseError;

/// One tag or one text run per line, whitespace-collapsed; blank runs are dropped.
/// Entities stay encoded so an escaped `<` cannot pass for a tag.
/// Flattening flattened markup is a no-op.
pub fn flatten(doc: &str) -> String {
    let mut out = String::with_capacity(doc.len());
    for tok in Tokens::new(doc) {
        let line = match tok {
            Token::Tag(run) | Token::Text(run) => normalize_ws(run),
        };
        if line.is_empty() { continue; }
        if !out.is_empty() { out.push('\n'); }
        out.push_str(&line);
    }
    out
}

/// `s[open..close)` where `open` is the first occurrence of `open_pat` and `close` the
/// first occurrence of `close_pat` after it. The opening landmark stays in the slice.
pub fn region<'a>(s: &'a str, open_pat: &str, close_pat: &str) -> Result<&'a str, ParseError> {
    let o = s.find(open_pat).ok_or_else(|| ParseError::LandmarkNotFound { landmark: s!(open_pat) })?;
    let from = o + open_pat.len();
    let c = s[from..]
        .find(close_pat)
        .ok_or_else(|| ParseError::LandmarkNotFound { landmark: s!(close_pat) })?
        + from;
    Ok(&s[o..c])
}

/// Trimmed lines that are not markup, entity-decoded. Blank lines and lines opening
/// with `<` are skipped before decoding.
pub fn text_lines(region: &str) -> impl Iterator<Item = String> {
    region
        .lines()
        .map(str::trim)
        .filter(|l| !l.is_empty() && !l.starts_with('<'))
        .map(normalize_entities)
}

/// Inner text between the first `open` and the following `close`, no tag awareness.
pub fn between<'a>(s: &'a str, open: &str, close: &str) -> Option<&'a str> {
    let o = s.find(open)? + open.len();
    let c = s[o..].find(close)? + o;
    Some(&s[o..c])
}

const VOID: &[&str] = &["br", "hr", "img", "input", "link", "meta"];

/// Tag name of an opener like `<div class="x">` → `div`.
fn tag_name(opener: &str) -> &str {
    let body = opener.trim_start_matches('<');
    let end = body
        .find(|c: char| !(c.is_ascii_alphanumeric() || c == '-'))
        .unwrap_or(body.len());
    &body[..end]
}

/// End (exclusive) of the element whose opener starts at `start`, counting nested
/// same-name elements. Unclosed elements run to the end of the input.
fn element_end(s: &str, start: usize, name: &str) -> usize {
    let mut depth = 0usize;
    let mut pos = start;
    for tok in Tokens::new(&s[start..]) {
        let len = match tok { Token::Tag(t) | Token::Text(t) => t.len() };
        if let Token::Tag(t) = tok {
            let self_closing = t.ends_with("/>");
            if let Some(rest) = t.strip_prefix("</") {
                if tag_name(rest).eq_ignore_ascii_case(name) {
                    depth = depth.saturating_sub(1);
                    if depth == 0 {
                        return pos + len;
                    }
                }
            } else if !self_closing && !t.starts_with("<!") && tag_name(t).eq_ignore_ascii_case(name) {
                depth += 1;
            }
        }
        pos += len;
    }
    s.len()
}

/// Byte ranges of every element whose opening tag mentions `class_fragment`.
/// Matches are non-overlapping: scanning resumes after each element's end.
pub fn class_block_ranges(s: &str, class_fragment: &str) -> Vec<(usize, usize)> {
    let mut out = Vec::new();
    let mut pos = 0usize;
    while pos < s.len() {
        let Some(start) = find_opener_with(s, class_fragment, pos) else { break };
        let opener_end = s[start..].find('>').map_or(s.len(), |e| start + e + 1);
        let name = tag_name(&s[start..opener_end]);
        let void = name.is_empty() || VOID.iter().any(|v| v.eq_ignore_ascii_case(name));
        let end = if void { opener_end } else { element_end(s, start, name) };
        out.push((start, end));
        pos = end.max(opener_end);
    }
    out
}

/// Every element whose opening tag mentions `class_fragment`, as full outer markup.
pub fn blocks_with_class<'a>(s: &'a str, class_fragment: &str) -> Vec<&'a str> {
    class_block_ranges(s, class_fragment)
        .into_iter()
        .map(|(a, b)| &s[a..b])
        .collect()
}

/// First `<name …>…</name>` element, as full outer markup.
pub fn first_element<'a>(s: &'a str, name: &str) -> Option<&'a str> {
    let mut pos = 0usize;
    for tok in Tokens::new(s) {
        let len = match tok { Token::Tag(t) | Token::Text(t) => t.len() };
        if let Token::Tag(t) = tok {
            if !t.starts_with("</") && tag_name(t).eq_ignore_ascii_case(name) {
                return Some(&s[pos..element_end(s, pos, name)]);
            }
        }
        pos += len;
    }
    None
}

/// Number of opening tags that mention `class_fragment`.
pub fn count_openers_with(s: &str, class_fragment: &str) -> usize {
    Tokens::new(s)
        .filter(|t| matches!(t, Token::Tag(tag) if !tag.starts_with("</") && tag.contains(class_fragment)))
        .count()
}

fn find_opener_with(s: &str, class_fragment: &str, from: usize) -> Option<usize> {
    let mut pos = from;
    for tok in Tokens::new(&s[from..]) {
        let len = match tok { Token::Tag(t) | Token::Text(t) => t.len() };
        if let Token::Tag(t) = tok {
            if !t.starts_with("</") && t.contains(class_fragment) {
                return Some(pos);
            }
        }
        pos += len;
    }
    None
}

pub fn inner_after_open_tag(block: &str) -> String {
    if let Some(oe) = block.find('>') {
        if let Some(cs) = block.rfind('<') {
            if cs > oe {
                return block[oe + 1..cs].to_string();
            }
        }
    }
    s!()
}

pub fn strip_tags<S: AsRef<str>>(s: S) -> String {
    let mut out = String::with_capacity(s.as_ref().len());
    for tok in Tokens::new(s.as_ref()) {
        if let Token::Text(t) = tok {
            out.push_str(t);
            out.push(' ');
        }
    }
    clean_text(&out)
}
