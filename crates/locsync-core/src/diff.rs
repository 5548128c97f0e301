use crate::tree::{LocaleTree, Mapping};

/// Collect every source entry that is absent or falsy in `target`.
///
/// Nested maps are walked key by key and only kept when something below them
/// is missing, so fully translated branches never show up in the result.
/// Lists are compared as whole leaves. An empty result means the target is
/// complete.
pub fn detect_missing(source: &Mapping, target: Option<&Mapping>) -> Mapping {
    let mut missing = Mapping::new();

    for (key, source_value) in source {
        let target_value = target.and_then(|t| t.get(key));

        match source_value {
            LocaleTree::Map(nested) => {
                let nested_missing = detect_missing(nested, target_value.and_then(LocaleTree::as_map));
                if !nested_missing.is_empty() {
                    missing.insert(key.clone(), LocaleTree::Map(nested_missing));
                }
            }
            _ => {
                if !target_value.is_some_and(LocaleTree::is_truthy) {
                    missing.insert(key.clone(), source_value.clone());
                }
            }
        }
    }

    missing
}
