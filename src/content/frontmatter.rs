//! Front-matter parsing
//!
//! A document may start with a block of flat `key: value` lines between two
//! `---` marker lines. Only scalar values are understood: there is no list,
//! map or multi-line syntax, and such lines are either skipped (no colon) or
//! kept as plain text.

use indexmap::IndexMap;
use lazy_static::lazy_static;
use regex::Regex;
use serde::Serialize;
use std::fmt;

lazy_static! {
    /// Opening marker, metadata lines, closing marker, body.
    static ref FRONT_MATTER_RE: Regex =
        Regex::new(r"^---\s*\n([\s\S]*?)\n---\s*\n([\s\S]*)$").expect("valid front-matter regex");
}

/// A decoded front-matter value
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Value {
    Bool(bool),
    Text(String),
}

impl Value {
    /// The text of a `Text` value
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Text(s) => Some(s),
            Value::Bool(_) => None,
        }
    }

    /// The flag of a `Bool` value
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            Value::Text(_) => None,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Bool(b) => write!(f, "{}", b),
            Value::Text(s) => f.write_str(s),
        }
    }
}

/// Front-matter data from a post
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FrontMatter {
    data: IndexMap<String, Value>,
}

impl FrontMatter {
    /// Split a document into front-matter and body.
    ///
    /// Never fails: a document without a complete `---` block yields empty
    /// front-matter and the whole input as body.
    pub fn parse(content: &str) -> (Self, &str) {
        let Some(captures) = FRONT_MATTER_RE.captures(content) else {
            return (FrontMatter::default(), content);
        };

        let block = captures.get(1).map_or("", |m| m.as_str());
        let body = captures.get(2).map_or("", |m| m.as_str());

        let mut data = IndexMap::new();
        for line in block.split('\n') {
            let Some((key, value)) = line.split_once(':') else {
                continue;
            };
            data.insert(key.trim().to_string(), decode_value(value.trim()));
        }

        (Self { data }, body)
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.data.get(key)
    }

    /// Text of a field, or an empty string when absent.
    ///
    /// `true` renders as its literal; `false` counts as absent.
    pub fn text(&self, key: &str) -> String {
        match self.data.get(key) {
            Some(Value::Text(s)) => s.clone(),
            Some(Value::Bool(true)) => "true".to_string(),
            Some(Value::Bool(false)) | None => String::new(),
        }
    }

    /// Whether a field holds the unquoted literal `true`
    pub fn flag(&self, key: &str) -> bool {
        matches!(self.data.get(key), Some(Value::Bool(true)))
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.data.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

/// Decode a trimmed raw value: quoted text, boolean literal, or text
fn decode_value(raw: &str) -> Value {
    if let Some(inner) = strip_quotes(raw) {
        return Value::Text(inner.to_string());
    }
    match raw {
        "true" => Value::Bool(true),
        "false" => Value::Bool(false),
        _ => Value::Text(raw.to_string()),
    }
}

/// Strip one layer of matching `"` or `'` quotes.
///
/// A lone quote character opens and closes at once, so it strips to `""`.
fn strip_quotes(raw: &str) -> Option<&str> {
    ['"', '\'']
        .into_iter()
        .find(|&q| raw.starts_with(q) && raw.ends_with(q))
        .map(|_| if raw.len() < 2 { "" } else { &raw[1..raw.len() - 1] })
}
