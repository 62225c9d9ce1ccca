use icebreaker_core::{IcebreakerError, Result};
use serde::Serialize;
use serde_json::Value;
use std::collections::BTreeMap;

/// Keys dropped outright during cleaning. Certifications bloat the prompt
/// without adding conversational value.
const DROPPED_KEYS: &[&str] = &["certifications"];

/// A cleaned profile: the raw person object with empty and dropped fields
/// removed, keyed deterministically.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProfileRecord {
    #[serde(flatten)]
    fields: BTreeMap<String, Value>,
}

impl ProfileRecord {
    /// Build a record from a raw `person` object, dropping null values, empty
    /// strings, empty arrays, and the keys in [`DROPPED_KEYS`].
    pub fn from_person(person: Value) -> Result<Self> {
        let Value::Object(map) = person else {
            return Err(IcebreakerError::Profile(
                "profile person payload is not a JSON object".to_string(),
            ));
        };

        let fields = map
            .into_iter()
            .filter(|(key, value)| keep_field(key, value))
            .collect();

        Ok(Self { fields })
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.fields.get(key)
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Profile photo URL, when the scrape carried one.
    pub fn photo_url(&self) -> Option<&str> {
        self.fields.get("photoUrl").and_then(Value::as_str)
    }

    pub fn full_name(&self) -> Option<String> {
        let first = self.fields.get("firstName").and_then(Value::as_str);
        let last = self.fields.get("lastName").and_then(Value::as_str);

        match (first, last) {
            (Some(f), Some(l)) => Some(format!("{f} {l}")),
            (Some(f), None) => Some(f.to_string()),
            (None, Some(l)) => Some(l.to_string()),
            (None, None) => None,
        }
    }

    /// Serialize the cleaned fields for embedding in a model prompt.
    pub fn to_prompt_text(&self) -> String {
        serde_json::to_string(&self.fields).unwrap_or_default()
    }
}

fn keep_field(key: &str, value: &Value) -> bool {
    if DROPPED_KEYS.contains(&key) {
        return false;
    }

    match value {
        Value::Null => false,
        Value::String(s) => !s.is_empty(),
        Value::Array(a) => !a.is_empty(),
        _ => true,
    }
}
