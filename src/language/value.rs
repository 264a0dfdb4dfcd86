//! Typed scalar values as they appear on the right hand side of a key or
//! inside an attribute block.

use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Value {
    Boolean(bool),
    Number(f64),
    Text(String),
    Quoted(String),
}

impl Value {
    /// The value rendered back to text, without any quotes.
    pub fn as_text(&self) -> String {
        self.to_string()
    }

    pub fn as_number(&self) -> Option<f64> {
        match self {
            Value::Number(number) => Some(*number),
            Value::Text(text) | Value::Quoted(text) => text
                .trim()
                .parse::<f64>()
                .ok(),
            Value::Boolean(_) => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Boolean(flag) => Some(*flag),
            _ => None,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Boolean(flag) => write!(f, "{}", flag),
            Value::Number(number) => write!(f, "{}", number),
            Value::Text(text) => write!(f, "{}", text),
            Value::Quoted(text) => write!(f, "{}", text),
        }
    }
}

/// Convert a scalar token into the most specific Value it can represent.
/// The token is expected to have been trimmed already. Every input has an
/// answer; anything not otherwise recognized is returned as Text.
pub fn coerce(token: &str) -> Value {
    if let Some(inner) = unquote(token) {
        return Value::Quoted(inner.to_string());
    }

    match token {
        "true" => return Value::Boolean(true),
        "false" => return Value::Boolean(false),
        _ => {}
    }

    if is_numeric(token) {
        if let Ok(number) = token.parse::<f64>() {
            return Value::Number(number);
        }
    }

    Value::Text(token.to_string())
}

/// Strip one pair of matching single or double quotes. No escape
/// processing is done on the content.
fn unquote(token: &str) -> Option<&str> {
    if token.len() < 2 {
        return None;
    }

    let first = token.as_bytes()[0];
    let last = token.as_bytes()[token.len() - 1];

    if first == last && (first == b'"' || first == b'\'') {
        Some(&token[1..token.len() - 1])
    } else {
        None
    }
}

fn is_numeric(token: &str) -> bool {
    let re = regex!(r"^[+-]?(?:\d+\.?\d*|\.\d+)(?:[eE][+-]?\d+)?$");

    re.is_match(token)
}
