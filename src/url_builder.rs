//! Request URL construction.

use url::form_urlencoded;

/// Builds `{base_url}/{endpoint}?{query}` from `(key, value)` pairs.
///
/// Pairs with a `None` value are left out. Keys and values are
/// form-urlencoded in the order given. Exactly one `/` is inserted between
/// `base_url` and `endpoint`.
pub fn build_url<I, K, V>(base_url: &str, endpoint: &str, pairs: I) -> String
where
    I: IntoIterator<Item = (K, Option<V>)>,
    K: AsRef<str>,
    V: AsRef<str>,
{
    let mut serializer = form_urlencoded::Serializer::new(String::new());
    for (key, value) in pairs {
        if let Some(value) = value {
            serializer.append_pair(key.as_ref(), value.as_ref());
        }
    }

    format!("{}/{}?{}", base_url, endpoint, serializer.finish())
}
