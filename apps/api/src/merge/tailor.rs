//! Tailoring merge — reconciles a `TailorDelta` against the original Profile.
//!
//! The oracle's `tailoredExperience` order IS the output order: it encodes
//! the relevance-reordering rule (an older but more relevant role may be
//! promoted ahead of a recent one). Everything else is per-field fallback.

use tracing::warn;

use crate::merge::COVER_LETTER_FAILURE_SENTINEL;
use crate::models::delta::TailorDelta;
use crate::models::profile::{Experience, Profile};

/// Result of the tailoring merge: the updated profile plus side artifacts.
///
/// `match_score` is always computed here; whether it is exposed to the caller
/// is decided by the response layer, independent of computation.
#[derive(Debug, Clone)]
pub struct TailoredOutcome {
    pub profile: Profile,
    pub cover_letter: String,
    pub match_score: u32,
    pub keywords: Vec<String>,
    /// Oracle suggestions discarded for referencing unknown identifiers.
    /// Surfaced as a non-fatal quality signal (possible prompt drift).
    pub discarded_suggestions: u32,
}

/// Applies a tailoring delta to the original profile.
pub fn apply_tailor(original: &Profile, delta: TailorDelta) -> TailoredOutcome {
    let mut discarded = 0u32;

    let experience = match delta.tailored_experience {
        // A non-empty list drives both membership and order, even if every
        // entry ends up discarded for a foreign id. An EMPTY list (including
        // one emptied by lenient element filtering) means "no opinion", the
        // same as an absent field — never "clear the experience".
        Some(patches) if !patches.is_empty() => {
            let mut merged: Vec<Experience> = Vec::with_capacity(patches.len());
            for patch in patches {
                match original.experience_by_id(&patch.id) {
                    Some(entry) => {
                        let description = match patch.description {
                            Some(bullets) if !bullets.is_empty() => bullets,
                            _ => entry.description.clone(),
                        };
                        merged.push(Experience {
                            description,
                            ..entry.clone()
                        });
                    }
                    None => {
                        warn!("tailor delta references unknown experience id {}", patch.id);
                        discarded += 1;
                    }
                }
            }
            merged
        }
        // Absent, non-list, or empty: fail-safe default, keep the original
        // untouched.
        _ => original.experience.clone(),
    };

    let skills = match delta.tailored_skills {
        Some(skills) if !skills.is_empty() => skills,
        _ => original.skills.clone(),
    };

    let summary = match delta.tailored_summary {
        Some(summary) if !summary.trim().is_empty() => summary,
        _ => original.summary.clone(),
    };

    let cover_letter = match delta.cover_letter {
        Some(text) if !text.trim().is_empty() => text,
        _ => COVER_LETTER_FAILURE_SENTINEL.to_string(),
    };

    TailoredOutcome {
        profile: Profile {
            summary,
            skills,
            experience,
            ..original.clone()
        },
        cover_letter,
        match_score: delta.match_score.unwrap_or(0),
        keywords: delta.keywords.unwrap_or_default(),
        discarded_suggestions: discarded,
    }
}
