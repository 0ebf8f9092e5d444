//! Placeholder token matching
//!
//! A placeholder is `{{ base }}` or `{{ base.modifier }}`, with optional
//! whitespace inside the braces. The same matcher serves relative paths and
//! file contents.

use std::ops::Range;

use once_cell::sync::Lazy;
use regex::{Captures, Regex};

static TOKEN_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\{\{\s*([A-Za-z0-9_]+)(?:\.([A-Za-z0-9_]+))?\s*\}\}")
        .expect("Failed to compile regex pattern for TOKEN_PATTERN")
});

/// A placeholder found in a piece of text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token<'t> {
    /// Variable identifier, without the modifier
    pub base: &'t str,
    /// Modifier name after the dot, if any; not validated here
    pub modifier: Option<&'t str>,
    /// Byte range of the whole `{{ ... }}` marker
    pub span: Range<usize>,
}

impl Token<'_> {
    /// Key of this token in an expanded variable map: `base` or `base.modifier`
    pub fn key(&self) -> String {
        match self.modifier {
            Some(modifier) => format!("{}.{}", self.base, modifier),
            None => self.base.to_string(),
        }
    }

    fn from_captures<'t>(captures: &Captures<'t>) -> Option<Token<'t>> {
        let whole = captures.get(0)?;
        Some(Token {
            base: captures.get(1)?.as_str(),
            modifier: captures.get(2).map(|m| m.as_str()),
            span: whole.range(),
        })
    }
}

/// Finds every placeholder token in `text`, left to right
pub fn find_tokens(text: &str) -> impl Iterator<Item = Token<'_>> {
    TOKEN_PATTERN
        .captures_iter(text)
        .filter_map(|captures| Token::from_captures(&captures))
}

/// Replaces every token in `text` with the value chosen by `resolve`
pub fn replace_tokens<F>(text: &str, mut resolve: F) -> String
where
    F: FnMut(&Token<'_>) -> String,
{
    TOKEN_PATTERN
        .replace_all(text, |captures: &Captures<'_>| {
            match Token::from_captures(captures) {
                Some(token) => resolve(&token),
                None => String::new(),
            }
        })
        .into_owned()
}
