//! Case-insensitive substring filtering and match highlighting.
//!
//! # Design
//! Both operations are plain substring scans — no tokenization, no fuzzy
//! matching, and deliberately no regex: the query is user input and may
//! contain anything, so it is never compiled into a pattern. Matching is
//! case-insensitive via `str::to_lowercase`; the highlighter keeps a byte
//! map from the lowered text back to the original, so queries stay correct
//! even for characters whose lowercase form has a different byte length.

use crate::types::Post;

/// One run of output text from [`highlight`]. Concatenating the `text` of
/// every span in order reproduces the input exactly, original casing
/// included.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Span {
    pub text: String,
    pub emphasized: bool,
}

impl Span {
    fn plain(text: &str) -> Self {
        Self {
            text: text.to_string(),
            emphasized: false,
        }
    }

    fn emphasized(text: &str) -> Self {
        Self {
            text: text.to_string(),
            emphasized: true,
        }
    }
}

/// Posts whose title or body contains `query` case-insensitively.
///
/// An empty query matches everything. Input order is preserved.
pub fn filter_posts<'a>(posts: &'a [Post], query: &str) -> Vec<&'a Post> {
    if query.is_empty() {
        return posts.iter().collect();
    }
    let needle = query.to_lowercase();
    posts
        .iter()
        .filter(|post| {
            post.title.to_lowercase().contains(&needle)
                || post.body.to_lowercase().contains(&needle)
        })
        .collect()
}

/// Split `text` into spans, emphasizing every case-insensitive occurrence
/// of `query`, left to right, non-overlapping.
///
/// An empty query yields the input back as a single unemphasized span.
pub fn highlight(text: &str, query: &str) -> Vec<Span> {
    if query.is_empty() || text.is_empty() {
        return vec![Span::plain(text)];
    }

    // Lowered copy of `text` plus, for each of its bytes, the byte offset of
    // the original character it came from. A sentinel entry maps one past the
    // end so match ends at the boundary resolve without a special case.
    let mut lowered = String::with_capacity(text.len());
    let mut origin = Vec::with_capacity(text.len() + 1);
    for (offset, ch) in text.char_indices() {
        for lc in ch.to_lowercase() {
            let before = lowered.len();
            lowered.push(lc);
            origin.resize(lowered.len(), offset);
            debug_assert!(lowered.len() > before);
        }
    }
    origin.push(text.len());

    let needle = query.to_lowercase();
    let mut spans = Vec::new();
    let mut cursor = 0usize;
    for (at, _) in lowered.match_indices(&needle) {
        let start = origin[at];
        let end = origin[at + needle.len()];
        // A match that begins or ends inside one original character's
        // multi-byte lowercase expansion cannot be sliced cleanly; skip it.
        if start < cursor || end <= start {
            continue;
        }
        if start > cursor {
            spans.push(Span::plain(&text[cursor..start]));
        }
        spans.push(Span::emphasized(&text[start..end]));
        cursor = end;
    }
    if cursor < text.len() || spans.is_empty() {
        spans.push(Span::plain(&text[cursor..]));
    }
    spans
}
