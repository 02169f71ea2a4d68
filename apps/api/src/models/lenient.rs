//! Lenient serde helpers for untrusted oracle deltas.
//!
//! The oracle's response is only required to be syntactically valid JSON —
//! a wrong-typed FIELD must become `None` (so the merge engine falls back to
//! the authoritative value), and a wrong-typed ELEMENT inside an array must
//! be skipped, never propagated. Strict serde would fail the whole parse in
//! both cases, which would wrongly escalate a sparse response into an error.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Accepts a JSON string; any other type (including null) becomes `None`.
pub fn opt_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(match value {
        Value::String(s) => Some(s),
        _ => None,
    })
}

/// Accepts a JSON number, rounding floats; any other type becomes `None`.
/// Negative values are treated as absent — scores are never negative.
pub fn opt_score<'de, D>(deserializer: D) -> Result<Option<u32>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(value
        .as_f64()
        .filter(|f| f.is_finite() && *f >= 0.0)
        .map(|f| f.round() as u32))
}

/// Accepts a JSON array, keeping only the elements that deserialize as `T`;
/// a non-array value becomes `None`.
pub fn opt_vec<'de, D, T>(deserializer: D) -> Result<Option<Vec<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = Value::deserialize(deserializer)?;
    Ok(match value {
        Value::Array(items) => Some(
            items
                .into_iter()
                .filter_map(|item| serde_json::from_value(item).ok())
                .collect(),
        ),
        _ => None,
    })
}

#[cfg(test)]
mod tests {
    use serde::Deserialize;

    #[derive(Debug, Default, Deserialize)]
    #[serde(default)]
    struct Sample {
        #[serde(deserialize_with = "super::opt_string")]
        text: Option<String>,
        #[serde(deserialize_with = "super::opt_score")]
        score: Option<u32>,
        #[serde(deserialize_with = "super::opt_vec")]
        items: Option<Vec<String>>,
    }

    #[test]
    fn test_wrong_typed_string_field_becomes_none() {
        let sample: Sample = serde_json::from_str(r#"{"text": 42}"#).unwrap();
        assert_eq!(sample.text, None);
    }

    #[test]
    fn test_null_field_becomes_none() {
        let sample: Sample = serde_json::from_str(r#"{"text": null}"#).unwrap();
        assert_eq!(sample.text, None);
    }

    #[test]
    fn test_absent_fields_default_to_none() {
        let sample: Sample = serde_json::from_str("{}").unwrap();
        assert_eq!(sample.text, None);
        assert_eq!(sample.score, None);
        assert_eq!(sample.items, None);
    }

    #[test]
    fn test_score_accepts_float_and_rounds() {
        let sample: Sample = serde_json::from_str(r#"{"score": 86.6}"#).unwrap();
        assert_eq!(sample.score, Some(87));
    }

    #[test]
    fn test_negative_score_becomes_none() {
        let sample: Sample = serde_json::from_str(r#"{"score": -3}"#).unwrap();
        assert_eq!(sample.score, None);
    }

    #[test]
    fn test_non_array_list_field_becomes_none() {
        let sample: Sample = serde_json::from_str(r#"{"items": "oops"}"#).unwrap();
        assert_eq!(sample.items, None);
    }

    #[test]
    fn test_wrong_typed_array_elements_are_skipped() {
        let sample: Sample =
            serde_json::from_str(r#"{"items": ["keep", 7, null, "also"]}"#).unwrap();
        assert_eq!(
            sample.items,
            Some(vec!["keep".to_string(), "also".to_string()])
        );
    }
}
