//! Flat request parameter bundles and query-string encoding.

use serde_json::Value;
use url::form_urlencoded;

/// Values that can be sent as a request parameter.
pub trait ParamValue {
    fn to_param(&self) -> String;
}

macro_rules! display_param {
    ($($t:ty),*) => {
        $(impl ParamValue for $t {
            fn to_param(&self) -> String {
                self.to_string()
            }
        })*
    };
}

display_param!(str, String, bool, i32, i64, u32, u64, usize, f64);

impl<T: ParamValue + ?Sized> ParamValue for &T {
    fn to_param(&self) -> String {
        (**self).to_param()
    }
}

/// Ordered key/value parameters of one request.
///
/// Absent values are never stored, so they can never be emitted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Params {
    entries: Vec<(String, String)>,
}

impl Params {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set `key`, replacing an existing value in place.
    pub fn insert(&mut self, key: impl Into<String>, value: impl ParamValue) {
        let key = key.into();
        let value = value.to_param();
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((key, value)),
        }
    }

    /// Set `key` only when `value` is present.
    pub fn insert_opt<V: ParamValue>(&mut self, key: impl Into<String>, value: Option<V>) {
        if let Some(v) = value {
            self.insert(key, v);
        }
    }

    pub fn with(mut self, key: impl Into<String>, value: impl ParamValue) -> Self {
        self.insert(key, value);
        self
    }

    pub fn with_opt<V: ParamValue>(mut self, key: impl Into<String>, value: Option<V>) -> Self {
        self.insert_opt(key, value);
        self
    }

    /// Build from a flat JSON object. `null` entries are dropped, scalars are
    /// stringified and nested values are sent as their JSON text.
    pub fn from_json(value: &Value) -> Self {
        let mut params = Params::new();
        if let Value::Object(map) = value {
            for (key, v) in map {
                match v {
                    Value::Null => {}
                    Value::String(s) => params.insert(key.as_str(), s.as_str()),
                    other => params.insert(key.as_str(), other.to_string()),
                }
            }
        }
        params
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn entries(&self) -> &[(String, String)] {
        &self.entries
    }

    pub fn to_query_string(&self) -> String {
        query_string(self)
    }
}

impl<K: Into<String>, V: ParamValue> FromIterator<(K, V)> for Params {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut params = Params::new();
        for (k, v) in iter {
            params.insert(k, v);
        }
        params
    }
}

/// Serialize `params` as `k=v&k2=v2`, percent-encoding keys and values.
///
/// Spaces become `%20`, not `+`.
pub fn query_string(params: &Params) -> String {
    params
        .iter()
        .map(|(k, v)| format!("{}={}", encode(k), encode(v)))
        .collect::<Vec<_>>()
        .join("&")
}

fn encode(s: &str) -> String {
    // byte_serialize escapes a literal '+' as %2B, so any '+' left is a space.
    form_urlencoded::byte_serialize(s.as_bytes())
        .collect::<String>()
        .replace('+', "%20")
}
