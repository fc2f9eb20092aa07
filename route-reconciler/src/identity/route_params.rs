//! Runtime parameter bag handed over by the host navigation runtime.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt::{Display, Formatter};

/// Parameter bag keyed by parameter name.
///
/// A sorted map, so two bags holding the same bindings always serialize the same way.
pub type RouteParams = BTreeMap<String, ParamValue>;

/// Keys owned by nested navigation, never treated as search parameters.
pub const RESERVED_PARAM_KEYS: [&str; 2] = ["screen", "params"];

#[derive(Deserialize, Serialize, Debug, Clone, Eq, PartialEq)]
#[serde(untagged)]
pub enum ParamValue {
    Single(String),
    Multi(Vec<String>),
}

impl ParamValue {
    /// A present value: a non-empty string or a non-empty list.
    pub fn is_present(&self) -> bool {
        match self {
            ParamValue::Single(value) => !value.is_empty(),
            ParamValue::Multi(values) => !values.is_empty(),
        }
    }
}

impl Display for ParamValue {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            ParamValue::Single(value) => f.write_str(value),
            ParamValue::Multi(values) => f.write_str(&values.join(",")),
        }
    }
}

impl From<&str> for ParamValue {
    fn from(value: &str) -> Self {
        ParamValue::Single(value.to_string())
    }
}

impl From<String> for ParamValue {
    fn from(value: String) -> Self {
        ParamValue::Single(value)
    }
}

impl From<Vec<&str>> for ParamValue {
    fn from(values: Vec<&str>) -> Self {
        ParamValue::Multi(values.into_iter().map(str::to_string).collect())
    }
}

/// Builds a [`RouteParams`] bag from `(key, value)` pairs.
pub fn route_params<K, V>(pairs: impl IntoIterator<Item = (K, V)>) -> RouteParams
where
    K: Into<String>,
    V: Into<ParamValue>,
{
    pairs
        .into_iter()
        .map(|(key, value)| (key.into(), value.into()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::{route_params, ParamValue, RouteParams};

    #[test]
    fn values_deserialize_from_strings_and_lists() {
        let params: RouteParams =
            serde_json::from_str(r#"{"post": "42", "rest": ["a", "b"]}"#).expect("params parse");

        assert_eq!(params["post"], ParamValue::Single("42".to_string()));
        assert_eq!(params["rest"], ParamValue::from(vec!["a", "b"]));
    }

    #[test]
    fn presence_ignores_empty_values() {
        assert!(!ParamValue::from("").is_present());
        assert!(!ParamValue::Multi(Vec::new()).is_present());
        assert!(ParamValue::from("x").is_present());
    }

    #[test]
    fn bag_iteration_order_is_independent_of_insertion_order() {
        let first = route_params([("b", "2"), ("a", "1")]);
        let second = route_params([("a", "1"), ("b", "2")]);

        let keys: Vec<&String> = first.keys().collect();
        assert_eq!(keys, vec!["a", "b"]);
        assert_eq!(first, second);
    }
}
