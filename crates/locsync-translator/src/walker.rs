use futures_util::future::{BoxFuture, FutureExt, try_join_all};
use locsync_core::{LocaleTree, Mapping};
use serde_json::Value;

use crate::retry::{LeafTranslator, TranslationFailure};

/// Translate every string in `missing`, keeping its shape and key order.
///
/// Keys are handled one after another. Strings inside a single list are sent
/// together. Any text that runs out of retries fails the whole tree.
pub async fn translate_tree(
    missing: &Mapping,
    leaf: &LeafTranslator<'_>,
) -> Result<Mapping, TranslationFailure> {
    translate_map(missing, leaf, String::new()).await
}

fn translate_map<'a>(
    map: &'a Mapping,
    leaf: &'a LeafTranslator<'a>,
    prefix: String,
) -> BoxFuture<'a, Result<Mapping, TranslationFailure>> {
    async move {
        let mut translated = Mapping::with_capacity(map.len());

        for (key, value) in map {
            let path = if prefix.is_empty() {
                key.clone()
            } else {
                format!("{prefix}.{key}")
            };
            tracing::info!("Translating key: {} ({})", path, leaf.language());

            let value = match value {
                LocaleTree::Text(text) => LocaleTree::Text(leaf.translate_leaf(text).await?),
                LocaleTree::List(items) => LocaleTree::List(translate_list(items, leaf).await?),
                LocaleTree::Map(nested) => LocaleTree::Map(translate_map(nested, leaf, path).await?),
                LocaleTree::Literal(literal) => LocaleTree::Literal(literal.clone()),
            };
            translated.insert(key.clone(), value);
        }

        Ok(translated)
    }
    .boxed()
}

async fn translate_list(
    items: &[Value],
    leaf: &LeafTranslator<'_>,
) -> Result<Vec<Value>, TranslationFailure> {
    try_join_all(items.iter().map(|item| async move {
        match item {
            Value::String(text) => leaf.translate_leaf(text).await.map(Value::String),
            other => Ok(other.clone()),
        }
    }))
    .await
}
