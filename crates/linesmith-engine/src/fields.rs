use std::collections::{BTreeMap, HashMap};
use std::hash::BuildHasher;

use crate::value::Value;

/// Selects one field of a [`FieldSource`] for a grouped inline append.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldSpec {
    /// The field's value alone.
    Key(String),
    /// The field's value behind a prefix, e.g. `M: 0123`.
    KeyWithPrefix(String, String),
}

impl FieldSpec {
    pub fn key(name: impl Into<String>) -> Self {
        FieldSpec::Key(name.into())
    }

    pub fn prefixed(name: impl Into<String>, prefix: impl Into<String>) -> Self {
        FieldSpec::KeyWithPrefix(name.into(), prefix.into())
    }

    pub fn name(&self) -> &str {
        match self {
            FieldSpec::Key(name) | FieldSpec::KeyWithPrefix(name, _) => name,
        }
    }

    pub fn prefix(&self) -> &str {
        match self {
            FieldSpec::Key(_) => "",
            FieldSpec::KeyWithPrefix(_, prefix) => prefix,
        }
    }
}

impl From<&str> for FieldSpec {
    fn from(name: &str) -> Self {
        FieldSpec::key(name)
    }
}

impl From<(&str, &str)> for FieldSpec {
    fn from((name, prefix): (&str, &str)) -> Self {
        FieldSpec::prefixed(name, prefix)
    }
}

/// Keyed data a formatter can pull values from.
///
/// A missing key is treated exactly like an absent value.
pub trait FieldSource {
    fn field(&self, name: &str) -> Option<Value>;
}

impl<K, V, S> FieldSource for HashMap<K, V, S>
where
    K: std::borrow::Borrow<str> + Eq + std::hash::Hash,
    V: Clone + Into<Value>,
    S: BuildHasher,
{
    fn field(&self, name: &str) -> Option<Value> {
        self.get(name).cloned().map(Into::into)
    }
}

impl<K, V> FieldSource for BTreeMap<K, V>
where
    K: std::borrow::Borrow<str> + Ord,
    V: Clone + Into<Value>,
{
    fn field(&self, name: &str) -> Option<Value> {
        self.get(name).cloned().map(Into::into)
    }
}

impl<T: FieldSource + ?Sized> FieldSource for &T {
    fn field(&self, name: &str) -> Option<Value> {
        (**self).field(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn spec_accessors() {
        let spec = FieldSpec::from(("mobile", "M"));
        assert_eq!(spec.name(), "mobile");
        assert_eq!(spec.prefix(), "M");
        assert_eq!(FieldSpec::from("pan").prefix(), "");
    }

    #[test]
    fn maps_resolve_fields() {
        let mut data = HashMap::new();
        data.insert("qty", 0);
        assert_eq!(data.field("qty"), Some(Value::Int(0)));
        assert_eq!(data.field("missing"), None);

        let data: BTreeMap<String, Value> =
            BTreeMap::from([("name".to_string(), Value::from("Bob"))]);
        assert_eq!(data.field("name"), Some(Value::from("Bob")));
    }
}
