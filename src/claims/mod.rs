//! JWT claim sets and typed claim access.
use std::collections::BTreeMap;

use serde_json::Value;

use crate::NumericDate;

mod registered;
pub use registered::*;

/// Any set of JWT claims.
///
/// This is the decoded form of a JWT header or payload. It can only be
/// deserialized from a JSON object.
#[derive(Debug, Default, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(transparent)]
pub struct AnyClaims(BTreeMap<String, Value>);

impl AnyClaims {
    pub fn contains(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// Returns a typed view over the claim named `key`.
    ///
    /// The claim is absent if `key` is not in this set.
    pub fn claim(&self, key: &str) -> Claim {
        Claim::new(self.get(key))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::collections::btree_map::Iter<String, Value> {
        self.0.iter()
    }
}

impl<'a> IntoIterator for &'a AnyClaims {
    type IntoIter = std::collections::btree_map::Iter<'a, String, Value>;
    type Item = (&'a String, &'a Value);

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl IntoIterator for AnyClaims {
    type IntoIter = std::collections::btree_map::IntoIter<String, Value>;
    type Item = (String, Value);

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl FromIterator<(String, Value)> for AnyClaims {
    fn from_iter<T: IntoIterator<Item = (String, Value)>>(iter: T) -> Self {
        Self(BTreeMap::from_iter(iter))
    }
}

impl From<AnyClaims> for Value {
    fn from(claims: AnyClaims) -> Self {
        Value::Object(claims.into_iter().collect())
    }
}

/// Read-only view over a single claim value.
///
/// Every accessor is total: when the claim is absent or its JSON type does
/// not fit the requested view, the accessor returns `None`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Claim<'a> {
    value: Option<&'a Value>,
}

impl<'a> Claim<'a> {
    pub fn new(value: Option<&'a Value>) -> Self {
        Self { value }
    }

    /// Checks if the claim is present, even with a `null` value.
    pub fn exists(&self) -> bool {
        self.value.is_some()
    }

    pub fn is_null(&self) -> bool {
        matches!(self.value, Some(Value::Null))
    }

    /// Underlying JSON value, unmodified.
    pub fn raw_value(&self) -> Option<&'a Value> {
        self.value
    }

    /// Claim value, if it is a JSON string.
    pub fn string(&self) -> Option<&'a str> {
        self.value?.as_str()
    }

    /// Claim value as a list of strings.
    ///
    /// A JSON string yields a single-element list. For a JSON array, numbers
    /// and booleans are rendered in their JSON textual form while `null`,
    /// objects and nested arrays are skipped.
    pub fn array(&self) -> Option<Vec<String>> {
        match self.value? {
            Value::Array(items) => Some(
                items
                    .iter()
                    .filter_map(|item| match item {
                        Value::String(s) => Some(s.clone()),
                        Value::Number(n) => Some(n.to_string()),
                        Value::Bool(b) => Some(b.to_string()),
                        _ => None,
                    })
                    .collect(),
            ),
            Value::String(s) => Some(vec![s.clone()]),
            _ => None,
        }
    }

    /// Claim value as an integer.
    ///
    /// JSON numbers are truncated toward zero and saturate beyond the `i64`
    /// range. JSON strings must hold a whole decimal integer (e.g. `"10"`,
    /// but not `"1.3"`).
    pub fn integer(&self) -> Option<i64> {
        match self.value? {
            Value::Number(n) => n
                .as_i64()
                .or_else(|| n.as_u64().map(|_| i64::MAX))
                .or_else(|| n.as_f64().map(|f| f.trunc() as i64)),
            Value::String(s) => s.parse::<i64>().ok(),
            _ => None,
        }
    }

    /// Claim value as a floating point number.
    ///
    /// Present for JSON numbers and for JSON strings holding a finite
    /// number literal (e.g. `"1.3"`).
    pub fn double(&self) -> Option<f64> {
        match self.value? {
            Value::Number(n) => n.as_f64(),
            Value::String(s) => s.parse::<f64>().ok().filter(|f| f.is_finite()),
            _ => None,
        }
    }

    /// Claim value as a date, in seconds since the Unix epoch.
    ///
    /// Follows [`Self::double`].
    pub fn date(&self) -> Option<NumericDate> {
        self.double()
            .and_then(|seconds| NumericDate::try_from_seconds(seconds).ok())
    }

    /// Claim value, if it is a JSON boolean.
    pub fn boolean(&self) -> Option<bool> {
        self.value?.as_bool()
    }
}
