//! Parse bootstrap — the one use-case where wholesale acceptance is correct,
//! because no prior authoritative state exists to corrupt.

use uuid::Uuid;

use crate::models::delta::ParsedResumeDelta;
use crate::models::profile::{Education, Experience, Profile, SocialLink};

/// Builds the initial Profile from a parse delta.
///
/// Every list entry is assigned a freshly generated identifier here — the
/// oracle never supplies identifiers at parse time. Absent fields default to
/// the empty string / empty list, never null.
pub fn bootstrap_profile(delta: ParsedResumeDelta) -> Profile {
    Profile {
        name: delta.name.unwrap_or_default(),
        email: delta.email.unwrap_or_default(),
        phone: delta.phone.unwrap_or_default(),
        location: delta.location.unwrap_or_default(),
        summary: delta.summary.unwrap_or_default(),
        skills: delta.skills.unwrap_or_default(),
        experience: delta
            .experience
            .unwrap_or_default()
            .into_iter()
            .map(|entry| Experience {
                id: fresh_id(),
                company: entry.company.unwrap_or_default(),
                role: entry.role.unwrap_or_default(),
                start_date: entry.start_date.unwrap_or_default(),
                end_date: entry.end_date.unwrap_or_default(),
                description: entry.description.unwrap_or_default(),
            })
            .collect(),
        education: delta
            .education
            .unwrap_or_default()
            .into_iter()
            .map(|entry| Education {
                id: fresh_id(),
                institution: entry.institution.unwrap_or_default(),
                degree: entry.degree.unwrap_or_default(),
                year: entry.year.unwrap_or_default(),
            })
            .collect(),
        links: delta
            .links
            .unwrap_or_default()
            .into_iter()
            .map(|link| SocialLink {
                label: link.label.unwrap_or_default(),
                url: link.url.unwrap_or_default(),
            })
            .collect(),
    }
}

fn fresh_id() -> String {
    Uuid::new_v4().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_empty_delta_yields_empty_profile_not_nulls() {
        let profile = bootstrap_profile(ParsedResumeDelta::default());
        assert_eq!(profile, Profile::default());

        // Serialized form must carry empty values, never null.
        let json = serde_json::to_value(&profile).unwrap();
        assert_eq!(json["name"], "");
        assert!(json["skills"].as_array().unwrap().is_empty());
    }

    #[test]
    fn test_every_entry_gets_a_fresh_unique_id() {
        let json = r#"{
            "experience": [
                {"company": "Acme", "role": "Engineer"},
                {"company": "Globex", "role": "Lead"}
            ],
            "education": [{"institution": "MIT", "degree": "BSc", "year": "2015"}]
        }"#;
        let delta: ParsedResumeDelta = serde_json::from_str(json).unwrap();
        let profile = bootstrap_profile(delta);

        let mut ids: HashSet<&str> = HashSet::new();
        for entry in &profile.experience {
            assert!(!entry.id.is_empty());
            assert!(ids.insert(&entry.id), "duplicate experience id");
        }
        for entry in &profile.education {
            assert!(!entry.id.is_empty());
            assert!(ids.insert(&entry.id), "education id collides with experience");
        }
    }

    #[test]
    fn test_partial_entry_fields_default_to_empty_strings() {
        let json = r#"{"experience": [{"company": "Acme"}]}"#;
        let delta: ParsedResumeDelta = serde_json::from_str(json).unwrap();
        let profile = bootstrap_profile(delta);

        let entry = &profile.experience[0];
        assert_eq!(entry.company, "Acme");
        assert_eq!(entry.role, "");
        assert_eq!(entry.start_date, "");
        assert!(entry.description.is_empty());
    }
}
