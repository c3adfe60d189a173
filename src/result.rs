//! Search response types.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

/// A single search hit.
///
/// Fields a given result template does not use are left at their defaults.
/// Fields this crate has no slot for are kept in `extra`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchResult {
    #[serde(deserialize_with = "null_as_default")]
    pub url: String,
    #[serde(deserialize_with = "null_as_default")]
    pub title: String,
    /// Description/snippet.
    pub content: Option<String>,
    /// Engine that produced the winning copy of this hit.
    #[serde(deserialize_with = "null_as_default")]
    pub engine: String,
    /// Engines that returned this hit.
    #[serde(deserialize_with = "null_as_default")]
    pub engines: Vec<String>,
    /// Positions in each engine's results.
    #[serde(deserialize_with = "null_as_default")]
    pub positions: Vec<u32>,
    #[serde(deserialize_with = "null_as_default")]
    pub score: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub category: String,
    /// Server-side template used to render the hit, e.g. `default.html`.
    pub template: Option<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub parsed_url: Vec<String>,
    pub pretty_url: Option<String>,
    pub img_src: Option<String>,
    pub thumbnail: Option<String>,
    pub thumbnail_src: Option<String>,
    pub iframe_src: Option<String>,
    pub resolution: Option<String>,
    pub img_format: Option<String>,
    pub author: Option<String>,
    #[serde(rename = "publishedDate")]
    pub published_date: Option<String>,
    /// Media duration, as the engine reported it.
    pub duration: Option<Value>,
    pub length: Option<Value>,
    pub open_group: Option<bool>,
    pub close_group: Option<bool>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Rich information panel.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Infobox {
    #[serde(deserialize_with = "null_as_default")]
    pub infobox: String,
    #[serde(deserialize_with = "null_as_default")]
    pub content: String,
    #[serde(deserialize_with = "null_as_default")]
    pub engine: String,
    #[serde(deserialize_with = "null_as_default")]
    pub engines: Vec<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Response payload of the `search` endpoint.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchResults {
    #[serde(deserialize_with = "null_as_default")]
    pub query: String,
    #[serde(deserialize_with = "null_as_default")]
    pub number_of_results: u64,
    #[serde(deserialize_with = "null_as_default")]
    pub results: Vec<SearchResult>,
    /// Answer texts. Object-shaped answers contribute their `answer` field.
    #[serde(deserialize_with = "lenient_strings")]
    pub answers: Vec<String>,
    #[serde(deserialize_with = "lenient_strings")]
    pub corrections: Vec<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub infoboxes: Vec<Infobox>,
    #[serde(deserialize_with = "lenient_strings")]
    pub suggestions: Vec<String>,
    /// Engine names only; servers that report `[engine, reason]` pairs
    /// have the reason dropped.
    #[serde(deserialize_with = "lenient_strings")]
    pub unresponsive_engines: Vec<String>,
}

impl SearchResults {
    /// The canonical zero-result response for `query`.
    ///
    /// Every sequence is empty, `unresponsive_engines` included.
    pub fn empty(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            ..Self::default()
        }
    }

    /// See [`is_empty_results`].
    pub fn is_empty(&self) -> bool {
        is_empty_results(self)
    }
}

/// Returns true when a response carries no results, answers, infoboxes or
/// suggestions. `corrections` and `unresponsive_engines` are not consulted.
pub fn is_empty_results(results: &SearchResults) -> bool {
    results.results.is_empty()
        && results.answers.is_empty()
        && results.infoboxes.is_empty()
        && results.suggestions.is_empty()
}

/// Reads a list of strings from whatever the server sent. Strings are kept,
/// pairs contribute their first element, objects their `answer` field, and
/// any other value its JSON text. Nulls are skipped.
fn lenient_strings<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let values: Vec<Value> = null_as_default(deserializer)?;
    Ok(values.into_iter().filter_map(string_of).collect())
}

fn string_of(value: Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(text) => Some(text),
        Value::Array(mut items) => {
            if items.is_empty() {
                None
            } else {
                string_of(items.swap_remove(0))
            }
        }
        Value::Object(mut fields) => match fields.remove("answer") {
            Some(answer) => string_of(answer),
            None => Some(Value::Object(fields).to_string()),
        },
        other => Some(other.to_string()),
    }
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn hit(url: &str) -> SearchResult {
        SearchResult {
            url: url.to_string(),
            title: "title".to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_empty_shape() {
        let results = SearchResults::empty("cats");
        assert_eq!(results.query, "cats");
        assert_eq!(results.number_of_results, 0);
        assert!(results.results.is_empty());
        assert!(results.answers.is_empty());
        assert!(results.corrections.is_empty());
        assert!(results.infoboxes.is_empty());
        assert!(results.suggestions.is_empty());
        assert!(results.unresponsive_engines.is_empty());
        assert!(results.is_empty());
    }

    #[test]
    fn test_corrections_and_unresponsive_do_not_count() {
        let results = SearchResults {
            corrections: vec!["x".to_string()],
            unresponsive_engines: vec!["e1".to_string()],
            ..SearchResults::empty("q")
        };
        assert!(is_empty_results(&results));
    }

    #[test]
    fn test_each_counted_sequence_makes_non_empty() {
        let with_result = SearchResults {
            results: vec![hit("https://example.com")],
            ..SearchResults::empty("q")
        };
        let with_answer = SearchResults {
            answers: vec!["42".to_string()],
            ..SearchResults::empty("q")
        };
        let with_infobox = SearchResults {
            infoboxes: vec![Infobox::default()],
            ..SearchResults::empty("q")
        };
        let with_suggestion = SearchResults {
            suggestions: vec!["cats and dogs".to_string()],
            ..SearchResults::empty("q")
        };

        assert!(!with_result.is_empty());
        assert!(!with_answer.is_empty());
        assert!(!with_infobox.is_empty());
        assert!(!with_suggestion.is_empty());
    }

    #[test]
    fn test_deserialize_full_payload() {
        let payload = json!({
            "query": "rust",
            "number_of_results": 1200,
            "results": [{
                "url": "https://www.rust-lang.org/",
                "title": "Rust Programming Language",
                "content": "A language empowering everyone",
                "engine": "duckduckgo",
                "engines": ["duckduckgo", "google"],
                "positions": [1, 2],
                "score": 4.5,
                "category": "general",
                "template": "default.html",
                "parsed_url": ["https", "www.rust-lang.org", "/", "", "", ""],
                "pretty_url": "https://www.rust-lang.org",
                "publishedDate": null,
                "priority": ""
            }],
            "answers": [],
            "corrections": [],
            "infoboxes": [{
                "infobox": "Rust",
                "content": "Systems language",
                "engine": "wikipedia",
                "engines": ["wikipedia"],
                "id": "https://en.wikipedia.org/wiki/Rust"
            }],
            "suggestions": ["rust lang"],
            "unresponsive_engines": []
        });

        let results: SearchResults = serde_json::from_value(payload).unwrap();
        assert_eq!(results.query, "rust");
        assert_eq!(results.number_of_results, 1200);
        assert_eq!(results.results.len(), 1);

        let first = &results.results[0];
        assert_eq!(first.engines, vec!["duckduckgo", "google"]);
        assert_eq!(first.positions, vec![1, 2]);
        assert_eq!(first.template.as_deref(), Some("default.html"));
        assert!(first.published_date.is_none());
        assert_eq!(first.extra.get("priority"), Some(&json!("")));

        assert_eq!(results.infoboxes[0].infobox, "Rust");
        assert_eq!(
            results.infoboxes[0].extra.get("id"),
            Some(&json!("https://en.wikipedia.org/wiki/Rust"))
        );
        assert!(!results.is_empty());
    }

    #[test]
    fn test_deserialize_missing_and_null_fields() {
        let results: SearchResults =
            serde_json::from_str(r#"{"query":"x","results":null,"answers":["a"]}"#).unwrap();
        assert!(results.results.is_empty());
        assert_eq!(results.answers, vec!["a"]);
        assert!(results.unresponsive_engines.is_empty());
    }

    #[test]
    fn test_deserialize_media_fields() {
        let result: SearchResult = serde_json::from_value(json!({
            "url": "https://video.example/1",
            "title": "clip",
            "template": "videos.html",
            "thumbnail": "https://video.example/1.jpg",
            "duration": "3:21",
            "resolution": "1920x1080"
        }))
        .unwrap();

        assert_eq!(result.thumbnail.as_deref(), Some("https://video.example/1.jpg"));
        assert_eq!(result.duration, Some(json!("3:21")));
        assert_eq!(result.resolution.as_deref(), Some("1920x1080"));
        assert!(result.extra.is_empty());
    }

    #[test]
    fn test_deserialize_unresponsive_engine_pairs() {
        let payload = r#"{
            "query": "rust",
            "number_of_results": 1,
            "results": [{"url": "https://www.rust-lang.org/", "title": "Rust"}],
            "unresponsive_engines": [["brave", "timeout"], ["google", "CAPTCHA"]]
        }"#;

        let results: SearchResults = serde_json::from_str(payload).unwrap();
        assert_eq!(results.results.len(), 1);
        assert_eq!(results.unresponsive_engines, vec!["brave", "google"]);
        assert!(!results.is_empty());
    }

    #[test]
    fn test_deserialize_object_answers() {
        let results: SearchResults = serde_json::from_value(json!({
            "query": "1+1",
            "answers": [
                {"answer": "2", "engine": "calculator", "url": null},
                {"url": "https://example.com"},
                "plain",
                null,
                42
            ]
        }))
        .unwrap();

        assert_eq!(
            results.answers,
            vec![
                "2".to_string(),
                r#"{"url":"https://example.com"}"#.to_string(),
                "plain".to_string(),
                "42".to_string()
            ]
        );
        assert!(!results.is_empty());
    }

    #[test]
    fn test_pair_shaped_empty_response_still_counts_as_empty() {
        let results: SearchResults = serde_json::from_value(json!({
            "query": "zzzz",
            "results": [],
            "answers": [],
            "corrections": ["zzz"],
            "infoboxes": [],
            "suggestions": [],
            "unresponsive_engines": [["brave", "timeout"]]
        }))
        .unwrap();

        assert!(results.is_empty());
        assert_eq!(results.unresponsive_engines, vec!["brave"]);
    }

    #[test]
    fn test_search_results_serialization() {
        let results = SearchResults {
            results: vec![hit("https://example.com")],
            ..SearchResults::empty("q")
        };
        let json = serde_json::to_string(&results).unwrap();
        assert!(json.contains("\"url\":\"https://example.com\""));
        assert!(json.contains("\"unresponsive_engines\":[]"));
    }
}
