//! Authoritative domain records owned by the caller.
//!
//! A `Profile` is created once (parse bootstrap) and afterwards mutated only
//! through the merge engine, which is told explicitly which fields may change.
//! All fields are owned values — absence is the empty string / empty list,
//! never `null`.

use serde::{Deserialize, Serialize};

/// The caller-owned resume record. Survives across oracle calls and must
/// never be silently corrupted by oracle output.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Profile {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub location: String,
    pub summary: String,
    pub skills: Vec<String>,
    pub experience: Vec<Experience>,
    pub education: Vec<Education>,
    pub links: Vec<SocialLink>,
}

/// A single work-history entry.
///
/// `id` is a caller-assigned opaque string, unique within a Profile and never
/// reassigned. It is the join key between oracle output and the authoritative
/// record — the oracle is never trusted to invent identifiers.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Experience {
    pub id: String,
    pub company: String,
    pub role: String,
    pub start_date: String,
    pub end_date: String,
    pub description: Vec<String>,
}

/// A single education entry, identified by the same convention as Experience.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Education {
    pub id: String,
    pub institution: String,
    pub degree: String,
    pub year: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SocialLink {
    pub label: String,
    pub url: String,
}

/// Ephemeral tailoring input — not persisted by this service.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct JobDescription {
    pub company: String,
    pub role: String,
    pub text: String,
}

impl Profile {
    /// Looks up an experience entry by its stable identifier.
    pub fn experience_by_id(&self, id: &str) -> Option<&Experience> {
        self.experience.iter().find(|e| e.id == id)
    }

    /// Looks up an education entry by its stable identifier.
    pub fn education_by_id(&self, id: &str) -> Option<&Education> {
        self.education.iter().find(|e| e.id == id)
    }
}
