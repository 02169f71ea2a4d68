//! Untrusted oracle deltas, one per use-case.
//!
//! A delta never stands alone as a valid record — its fields only *suggest*
//! changes, and every field is optional. Deserialization is lenient (see
//! `models::lenient`): wrong-typed fields fall back to `None`, wrong-typed or
//! id-less array elements are skipped. Only syntactic invalidity of the whole
//! response is fatal, and that is caught upstream in the oracle adapter.

use serde::{Deserialize, Serialize};

use crate::models::lenient;

/// Oracle output for the initial parse. Carries no identifiers — the
/// bootstrap merge assigns fresh ones.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ParsedResumeDelta {
    #[serde(deserialize_with = "lenient::opt_string")]
    pub name: Option<String>,
    #[serde(deserialize_with = "lenient::opt_string")]
    pub email: Option<String>,
    #[serde(deserialize_with = "lenient::opt_string")]
    pub phone: Option<String>,
    #[serde(deserialize_with = "lenient::opt_string")]
    pub location: Option<String>,
    #[serde(deserialize_with = "lenient::opt_string")]
    pub summary: Option<String>,
    #[serde(deserialize_with = "lenient::opt_vec")]
    pub skills: Option<Vec<String>>,
    #[serde(deserialize_with = "lenient::opt_vec")]
    pub experience: Option<Vec<ParsedExperience>>,
    #[serde(deserialize_with = "lenient::opt_vec")]
    pub education: Option<Vec<ParsedEducation>>,
    #[serde(deserialize_with = "lenient::opt_vec")]
    pub links: Option<Vec<ParsedLink>>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ParsedExperience {
    #[serde(deserialize_with = "lenient::opt_string")]
    pub company: Option<String>,
    #[serde(deserialize_with = "lenient::opt_string")]
    pub role: Option<String>,
    #[serde(deserialize_with = "lenient::opt_string")]
    pub start_date: Option<String>,
    #[serde(deserialize_with = "lenient::opt_string")]
    pub end_date: Option<String>,
    #[serde(deserialize_with = "lenient::opt_vec")]
    pub description: Option<Vec<String>>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ParsedEducation {
    #[serde(deserialize_with = "lenient::opt_string")]
    pub institution: Option<String>,
    #[serde(deserialize_with = "lenient::opt_string")]
    pub degree: Option<String>,
    #[serde(deserialize_with = "lenient::opt_string")]
    pub year: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ParsedLink {
    #[serde(deserialize_with = "lenient::opt_string")]
    pub label: Option<String>,
    #[serde(deserialize_with = "lenient::opt_string")]
    pub url: Option<String>,
}

/// A proposed rewrite of one experience entry, keyed by the authoritative
/// identifier. Elements without a usable string `id` never deserialize and
/// are dropped at the lenient-array layer.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExperiencePatch {
    pub id: String,
    #[serde(default, deserialize_with = "lenient::opt_vec")]
    pub description: Option<Vec<String>>,
}

/// Oracle output for the tailoring use-case.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TailorDelta {
    #[serde(deserialize_with = "lenient::opt_string")]
    pub tailored_summary: Option<String>,
    #[serde(deserialize_with = "lenient::opt_vec")]
    pub tailored_skills: Option<Vec<String>>,
    #[serde(deserialize_with = "lenient::opt_vec")]
    pub tailored_experience: Option<Vec<ExperiencePatch>>,
    #[serde(deserialize_with = "lenient::opt_string")]
    pub cover_letter: Option<String>,
    #[serde(deserialize_with = "lenient::opt_score")]
    pub match_score: Option<u32>,
    #[serde(deserialize_with = "lenient::opt_vec")]
    pub keywords: Option<Vec<String>>,
}

/// Oracle output for resume condensation. Skills are selected by INDEX into
/// the original skills array; experience and education by identifier.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CondenseDelta {
    #[serde(deserialize_with = "lenient::opt_vec")]
    pub selected_skill_indices: Option<Vec<i64>>,
    #[serde(deserialize_with = "lenient::opt_vec")]
    pub condensed_experience: Option<Vec<ExperiencePatch>>,
    #[serde(deserialize_with = "lenient::opt_vec")]
    pub education_ids: Option<Vec<String>>,
}

/// Oracle output for cover-letter condensation — a single scalar.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LetterDelta {
    #[serde(deserialize_with = "lenient::opt_string")]
    pub condensed_letter: Option<String>,
}

/// A retrieval-source citation from the research call, passed through to the
/// caller unmodified.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Citation {
    pub title: String,
    pub url: String,
}

/// Oracle output for the best-effort company research call.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ResearchDelta {
    #[serde(deserialize_with = "lenient::opt_string")]
    pub summary: Option<String>,
    #[serde(deserialize_with = "lenient::opt_vec")]
    pub sources: Option<Vec<Citation>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tailor_delta_deserializes_from_empty_object() {
        let delta: TailorDelta = serde_json::from_str("{}").unwrap();
        assert!(delta.tailored_summary.is_none());
        assert!(delta.tailored_experience.is_none());
        assert!(delta.match_score.is_none());
    }

    #[test]
    fn test_experience_patch_without_id_is_dropped() {
        let json = r#"{
            "tailoredExperience": [
                {"id": "exp-1", "description": ["kept"]},
                {"description": ["no id, dropped"]},
                {"id": 42, "description": ["non-string id, dropped"]}
            ]
        }"#;
        let delta: TailorDelta = serde_json::from_str(json).unwrap();
        let patches = delta.tailored_experience.unwrap();
        assert_eq!(patches.len(), 1);
        assert_eq!(patches[0].id, "exp-1");
    }

    #[test]
    fn test_non_list_tailored_experience_becomes_none() {
        let json = r#"{"tailoredExperience": "not a list"}"#;
        let delta: TailorDelta = serde_json::from_str(json).unwrap();
        assert!(delta.tailored_experience.is_none());
    }

    #[test]
    fn test_patch_with_wrong_typed_description_keeps_id() {
        // The id still matches an authoritative entry; the bullets fall back.
        let json = r#"{"condensedExperience": [{"id": "exp-1", "description": "oops"}]}"#;
        let delta: CondenseDelta = serde_json::from_str(json).unwrap();
        let patches = delta.condensed_experience.unwrap();
        assert_eq!(patches[0].id, "exp-1");
        assert!(patches[0].description.is_none());
    }

    #[test]
    fn test_condense_delta_accepts_negative_indices() {
        // Range filtering happens in the merge engine, not at parse time.
        let json = r#"{"selectedSkillIndices": [0, -1, 99]}"#;
        let delta: CondenseDelta = serde_json::from_str(json).unwrap();
        assert_eq!(delta.selected_skill_indices, Some(vec![0, -1, 99]));
    }

    #[test]
    fn test_parsed_resume_delta_skips_corrupt_entries() {
        let json = r#"{
            "experience": [
                {"company": "Acme", "description": ["built things"]},
                "just a string"
            ],
            "skills": ["Rust", {"nested": true}, "SQL"]
        }"#;
        let delta: ParsedResumeDelta = serde_json::from_str(json).unwrap();
        assert_eq!(delta.experience.unwrap().len(), 1);
        assert_eq!(
            delta.skills.unwrap(),
            vec!["Rust".to_string(), "SQL".to_string()]
        );
    }

    #[test]
    fn test_research_delta_sources_pass_through() {
        let json = r#"{
            "summary": "Acme builds rockets.",
            "sources": [{"title": "Acme — About", "url": "https://acme.example/about"}]
        }"#;
        let delta: ResearchDelta = serde_json::from_str(json).unwrap();
        assert_eq!(delta.sources.unwrap()[0].title, "Acme — About");
    }
}
