//! JSON interop for the tree model.
//!
//! JSON arrays map onto [`Seq`], JSON scalars onto the closed scalar set.
//! JSON objects have no tree counterpart and are rejected.

use std::fmt;

use crate::{Seq, Value};

/// Failure to build a tree from JSON text.
#[derive(Debug)]
pub enum FromJsonError {
    /// The text is not valid JSON.
    Parse(serde_json::Error),
    /// The JSON contains an object, which the tree model cannot represent.
    ObjectUnsupported,
}

impl fmt::Display for FromJsonError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FromJsonError::Parse(e) => write!(f, "invalid JSON: {e}"),
            FromJsonError::ObjectUnsupported => {
                f.write_str("JSON objects have no tree representation")
            }
        }
    }
}

impl std::error::Error for FromJsonError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            FromJsonError::Parse(e) => Some(e),
            FromJsonError::ObjectUnsupported => None,
        }
    }
}

impl Value {
    /// Parse JSON text into a tree element.
    pub fn from_json(text: &str) -> Result<Value, FromJsonError> {
        let parsed: serde_json::Value =
            serde_json::from_str(text).map_err(FromJsonError::Parse)?;
        convert(&parsed)
    }

    /// Render this element as compact JSON text.
    ///
    /// Non-finite floats have no JSON spelling and render as `null`.
    pub fn to_json(&self) -> String {
        unconvert(self).to_string()
    }
}

fn convert(json: &serde_json::Value) -> Result<Value, FromJsonError> {
    Ok(match json {
        serde_json::Value::Null => Value::Null,
        serde_json::Value::Bool(b) => Value::Bool(*b),
        serde_json::Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                Value::Int(i)
            } else {
                // u64 beyond i64::MAX or a float spelling.
                Value::Float(n.as_f64().unwrap_or(f64::NAN))
            }
        }
        serde_json::Value::String(s) => Value::Str(s.clone()),
        serde_json::Value::Array(items) => {
            let elements = items.iter().map(convert).collect::<Result<Vec<_>, _>>()?;
            Value::Seq(Seq::from_vec(elements))
        }
        serde_json::Value::Object(_) => return Err(FromJsonError::ObjectUnsupported),
    })
}

fn unconvert(value: &Value) -> serde_json::Value {
    match value {
        Value::Null => serde_json::Value::Null,
        Value::Bool(b) => serde_json::Value::Bool(*b),
        Value::Int(n) => serde_json::Value::Number((*n).into()),
        Value::Float(x) => serde_json::Number::from_f64(*x)
            .map(serde_json::Value::Number)
            .unwrap_or(serde_json::Value::Null),
        Value::Str(s) => serde_json::Value::String(s.clone()),
        Value::Seq(seq) => {
            serde_json::Value::Array(seq.borrow().iter().map(unconvert).collect())
        }
    }
}
