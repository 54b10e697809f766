// src/core/tokens.rs
// Splits markup into tags (<...>) and the text runs between them.
// Quote-aware inside tags, so `>` in an attribute value does not end the tag.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Token<'a> {
    Tag(&'a str),
    Text(&'a str),
}

pub struct Tokens<'a> {
    s: &'a str,
    b: &'a [u8],
    i: usize,
    n: usize,
}

impl<'a> Tokens<'a> {
    pub fn new(s: &'a str) -> Self { Self { s, b: s.as_bytes(), i: 0, n: s.len() } }

    #[inline]
    fn tag_end(&self, from: usize) -> usize {
        // `from` is the byte after '<'
        let mut j = from;
        let mut in_s = false; // '
        let mut in_d = false; // "
        while j < self.n {
            match self.b[j] {
                b'\'' if !in_d => in_s = !in_s,
                b'"'  if !in_s => in_d = !in_d,
                b'>' if !in_s && !in_d => return j + 1,
                _ => {}
            }
            j += 1;
        }
        self.n
    }
}

impl<'a> Iterator for Tokens<'a> {
    type Item = Token<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.i >= self.n {
            return None;
        }
        let start = self.i;
        if self.b[start] == b'<' {
            let end = self.tag_end(start + 1);
            self.i = end;
            return Some(Token::Tag(&self.s[start..end]));
        }
        // '<' is ASCII, so the byte offset is always a char boundary
        let end = self.b[start..].iter().position(|&c| c == b'<').map_or(self.n, |off| start + off);
        self.i = end;
        Some(Token::Text(&self.s[start..end]))
    }
}
