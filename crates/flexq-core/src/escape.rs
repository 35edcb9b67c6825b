//! Escaping strategies for query syntax.
//!
//! The writer never decides what is special: it hands every field name
//! and term text to an [`EscapeQuerySyntax`] supplied by the caller, so a
//! whole tree is escaped consistently.

use std::borrow::Cow;

pub trait EscapeQuerySyntax {
    fn escape<'a>(&self, text: &'a str) -> Cow<'a, str>;

    /// Escaping inside a double-quoted phrase.
    fn escape_quoted<'a>(&self, text: &'a str) -> Cow<'a, str> {
        escape_chars(text, |c| matches!(c, '"' | '\\'))
    }
}

/// Characters with a meaning of their own in standard query syntax.
const SPECIAL_CHARS: &[char] = &[
    '\\', '+', '-', '!', '(', ')', ':', '^', '[', ']', '"', '{', '}', '~', '*', '?', '|', '&', '/',
];

const OPERATORS: &[&str] = &["AND", "OR", "NOT"];

/// Backslash-escapes special characters, whitespace, and bare operator words.
#[derive(Clone, Copy, Debug, Default)]
pub struct StandardEscaper;

impl EscapeQuerySyntax for StandardEscaper {
    fn escape<'a>(&self, text: &'a str) -> Cow<'a, str> {
        let escaped = escape_chars(text, |c| SPECIAL_CHARS.contains(&c) || c.is_whitespace());
        if OPERATORS.iter().any(|op| text.eq_ignore_ascii_case(op)) {
            return Cow::Owned(format!("\\{escaped}"));
        }
        escaped
    }
}

/// Leaves text untouched.
#[derive(Clone, Copy, Debug, Default)]
pub struct Verbatim;

impl EscapeQuerySyntax for Verbatim {
    fn escape<'a>(&self, text: &'a str) -> Cow<'a, str> {
        Cow::Borrowed(text)
    }

    fn escape_quoted<'a>(&self, text: &'a str) -> Cow<'a, str> {
        Cow::Borrowed(text)
    }
}

fn escape_chars(text: &str, needs_escape: impl Fn(char) -> bool) -> Cow<'_, str> {
    if !text.chars().any(&needs_escape) {
        return Cow::Borrowed(text);
    }
    let mut out = String::with_capacity(text.len() + 4);
    for c in text.chars() {
        if needs_escape(c) {
            out.push('\\');
        }
        out.push(c);
    }
    Cow::Owned(out)
}
