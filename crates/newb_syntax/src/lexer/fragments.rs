//! Splitting a source line into candidate fragments.
//!
//! A fragment boundary is placed on every whitespace run and immediately before and after each of the
//! boundary characters `(){};,<>=:+*-!`. Each boundary character therefore always forms a fragment of its
//! own, e.g. `a:=1` splits into `a`, `:`, `=`, `1`.
//!
//! `#`, `.`, `/` and `_` are *not* boundaries, so `#include`, `3.14` and `a_b` stay whole (and `a/b` is a
//! single, unrecognizable fragment).

/// A slice of one source line, with its byte range inside that line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Fragment<'s> {
    pub text: &'s str,
    pub start: usize,
    pub end: usize,
}

impl<'s> Fragment<'s> {
    fn new(line: &'s str, start: usize, end: usize) -> Self {
        Self {
            text: &line[start..end],
            start,
            end,
        }
    }

    /// 1-based byte column of the first character.
    pub fn column(&self) -> usize {
        self.start + 1
    }

    /// `true` when `next` begins exactly where this fragment ends (no whitespace between them).
    pub fn touches(&self, next: &Fragment<'_>) -> bool {
        self.end == next.start
    }
}

pub(crate) fn is_boundary_char(c: char) -> bool {
    matches!(
        c,
        '(' | ')' | '{' | '}' | ';' | ',' | '<' | '>' | '=' | ':' | '+' | '*' | '-' | '!'
    )
}

/// Split `line` into non-blank fragments, left to right.
pub(crate) fn split(line: &str) -> Vec<Fragment<'_>> {
    let mut fragments = Vec::new();
    let mut start: Option<usize> = None;

    for (i, c) in line.char_indices() {
        if c.is_whitespace() || is_boundary_char(c) {
            if let Some(s) = start.take() {
                fragments.push(Fragment::new(line, s, i));
            }
            if is_boundary_char(c) {
                fragments.push(Fragment::new(line, i, i + c.len_utf8()));
            }
        } else if start.is_none() {
            start = Some(i);
        }
    }

    if let Some(s) = start {
        fragments.push(Fragment::new(line, s, line.len()));
    }

    fragments
}

#[cfg(test)]
mod tests {
    use super::*;

    fn texts(line: &str) -> Vec<&str> {
        split(line).into_iter().map(|f| f.text).collect()
    }

    #[test]
    fn test_splits_around_boundary_characters() {
        assert_eq!(texts("a:=1"), vec!["a", ":", "=", "1"]);
        assert_eq!(texts("x:=(y+2)*z;"), vec!["x", ":", "=", "(", "y", "+", "2", ")", "*", "z", ";"]);
    }

    #[test]
    fn test_whitespace_is_discarded() {
        assert_eq!(texts("   \t  "), Vec::<&str>::new());
        assert_eq!(texts("  var   int  y ;"), vec!["var", "int", "y", ";"]);
    }

    #[test]
    fn test_non_boundary_characters_stay_joined() {
        assert_eq!(texts("#include<io>;"), vec!["#include", "<", "io", ">", ";"]);
        assert_eq!(texts("3.14 a/b"), vec!["3.14", "a/b"]);
    }

    #[test]
    fn test_touching_fragments() {
        let frags = split("x := y : =");
        assert!(frags[1].touches(&frags[2]));
        assert!(!frags[4].touches(&frags[5]));
        assert_eq!(frags[1].column(), 3);
    }
}
