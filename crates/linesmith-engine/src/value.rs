use serde::{Deserialize, Serialize};

/// A caller-supplied value before it becomes part of the output.
///
/// Values are presence-checked with [`is_present`] and turned into text with
/// [`normalize`]. Deserializes untagged, so any JSON/TOML scalar or array maps
/// onto the matching variant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    Text(String),
    List(Vec<Value>),
}

/// Whether a value carries meaningful content.
///
/// Numeric zero and the string `"0"` are present: zero is data, not absence.
/// Null, empty or whitespace-only strings and empty lists are not.
pub fn is_present(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Text(s) => !s.trim().is_empty(),
        Value::List(items) => !items.is_empty(),
        Value::Bool(_) | Value::Int(_) | Value::Float(_) => true,
    }
}

/// Renders a value as text. Total over every variant.
///
/// Lists drop their non-present elements and join the rest with `", "`.
/// Booleans render as `Yes`/`No`.
pub fn normalize(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::Bool(true) => "Yes".to_string(),
        Value::Bool(false) => "No".to_string(),
        Value::Int(n) => n.to_string(),
        Value::Float(f) => f.to_string(),
        Value::Text(s) => s.clone(),
        Value::List(items) => items
            .iter()
            .filter(|v| is_present(v))
            .map(normalize)
            .collect::<Vec<_>>()
            .join(", "),
    }
}

impl Value {
    pub fn is_present(&self) -> bool {
        is_present(self)
    }

    pub fn normalize(&self) -> String {
        normalize(self)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Text(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Text(s)
    }
}

impl From<&String> for Value {
    fn from(s: &String) -> Self {
        Value::Text(s.clone())
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

macro_rules! int_into_value {
    ($($t:ty),*) => {
        $(impl From<$t> for Value {
            fn from(n: $t) -> Self {
                Value::Int(i64::from(n))
            }
        })*
    };
}

int_into_value!(i8, i16, i32, i64, u8, u16, u32);

impl From<u64> for Value {
    fn from(n: u64) -> Self {
        i64::try_from(n).map_or_else(|_| Value::Text(n.to_string()), Value::Int)
    }
}

impl From<usize> for Value {
    fn from(n: usize) -> Self {
        i64::try_from(n).map_or_else(|_| Value::Text(n.to_string()), Value::Int)
    }
}

impl From<f32> for Value {
    fn from(f: f32) -> Self {
        Value::Float(f64::from(f))
    }
}

impl From<f64> for Value {
    fn from(f: f64) -> Self {
        Value::Float(f)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(opt: Option<T>) -> Self {
        opt.map_or(Value::Null, Into::into)
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(items: Vec<T>) -> Self {
        Value::List(items.into_iter().map(Into::into).collect())
    }
}

impl From<&Value> for Value {
    fn from(v: &Value) -> Self {
        v.clone()
    }
}
