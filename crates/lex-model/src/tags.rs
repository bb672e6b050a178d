//! Grammatical tag lists and their CSV rendering.

use serde::Deserialize;
use std::fmt::Write as _;

/// Ordered grammatical annotations attached to one inflected form.
#[derive(Debug, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Deserialize)]
#[serde(transparent)]
pub struct Tags(pub Vec<String>);

impl Tags {
    pub fn new<I, S>(tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self(tags.into_iter().map(Into::into).collect())
    }

    /// Renders the list literal written to the `tags` column,
    /// e.g. `['first-person', 'singular']`.
    pub fn render(&self) -> String {
        let mut out = String::from("[");
        for (idx, tag) in self.0.iter().enumerate() {
            if idx > 0 {
                out.push_str(", ");
            }
            push_quoted(&mut out, tag);
        }
        out.push(']');
        out
    }
}

/// Renders an optional tag list as a CSV cell (absent tags become an empty cell).
pub fn render_tags_cell(tags: Option<&Tags>) -> String {
    tags.map(Tags::render).unwrap_or_default()
}

// Single quotes unless the value holds a single quote and no double quote.
fn push_quoted(out: &mut String, value: &str) {
    let quote = if value.contains('\'') && !value.contains('"') {
        '"'
    } else {
        '\''
    };
    out.push(quote);
    for ch in value.chars() {
        match ch {
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c if c == quote => {
                out.push('\\');
                out.push(c);
            }
            c if is_unprintable(c) => push_code_point(out, c),
            c => out.push(c),
        }
    }
    out.push(quote);
}

// Hex escape widths follow the code point: \xNN, \uNNNN, \UNNNNNNNN.
fn push_code_point(out: &mut String, ch: char) {
    let code = u32::from(ch);
    let _ = if code < 0x100 {
        write!(out, "\\x{code:02x}")
    } else if code < 0x1_0000 {
        write!(out, "\\u{code:04x}")
    } else {
        write!(out, "\\U{code:08x}")
    };
}

// Control characters, separators other than the ASCII space, and the common
// invisible format characters.
fn is_unprintable(ch: char) -> bool {
    ch.is_control()
        || matches!(
            ch,
            '\u{a0}'
                | '\u{ad}'
                | '\u{1680}'
                | '\u{2000}'..='\u{200f}'
                | '\u{2028}'..='\u{202f}'
                | '\u{205f}'..='\u{2064}'
                | '\u{3000}'
                | '\u{feff}'
        )
}
