use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Keyed level of a locale file. Keeps the key order found on disk.
pub type Mapping = IndexMap<String, LocaleTree>;

/// One node of a language dictionary
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum LocaleTree {
    Text(String),
    /// Translated element-wise; non-string elements are carried as-is
    List(Vec<Value>),
    Map(Mapping),
    /// Numbers, booleans and null
    Literal(Value),
}

impl LocaleTree {
    /// JSON truthiness: empty strings, `null`, `false` and zero are falsy.
    /// Lists and maps are truthy even when empty.
    pub fn is_truthy(&self) -> bool {
        match self {
            LocaleTree::Text(text) => !text.is_empty(),
            LocaleTree::List(_) | LocaleTree::Map(_) => true,
            LocaleTree::Literal(value) => literal_is_truthy(value),
        }
    }

    pub fn as_map(&self) -> Option<&Mapping> {
        match self {
            LocaleTree::Map(map) => Some(map),
            _ => None,
        }
    }
}

impl From<&str> for LocaleTree {
    fn from(text: &str) -> Self {
        LocaleTree::Text(text.to_string())
    }
}

impl From<String> for LocaleTree {
    fn from(text: String) -> Self {
        LocaleTree::Text(text)
    }
}

impl From<Mapping> for LocaleTree {
    fn from(map: Mapping) -> Self {
        LocaleTree::Map(map)
    }
}

fn literal_is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// Dotted paths of every non-map node, in traversal order
pub fn leaf_paths(map: &Mapping) -> Vec<String> {
    let mut paths = Vec::new();
    collect_paths(map, "", &mut paths);
    paths
}

fn collect_paths(map: &Mapping, prefix: &str, out: &mut Vec<String>) {
    for (key, value) in map {
        let path = if prefix.is_empty() {
            key.clone()
        } else {
            format!("{prefix}.{key}")
        };

        match value {
            LocaleTree::Map(nested) => collect_paths(nested, &path, out),
            _ => out.push(path),
        }
    }
}

/// Number of strings a translation of `map` will request
pub fn text_count(map: &Mapping) -> usize {
    map.values()
        .map(|value| match value {
            LocaleTree::Text(_) => 1,
            LocaleTree::List(items) => items.iter().filter(|item| item.is_string()).count(),
            LocaleTree::Map(nested) => text_count(nested),
            LocaleTree::Literal(_) => 0,
        })
        .sum()
}
