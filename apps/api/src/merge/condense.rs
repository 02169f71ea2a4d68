//! Condensation merges — project a Profile (or cover letter) down to a
//! shorter form using oracle-selected subsets, with do-no-harm fallbacks.
//!
//! Skills are selected by INDEX into the original skills array; experience
//! and education by identifier. Losing entries the oracle forgot to mention
//! is worse than over-retaining, so empty selections fall back to truncation
//! (experience, skills) or full retention (education).

use tracing::warn;

use crate::merge::{FALLBACK_EXPERIENCE_LIMIT, FALLBACK_SKILL_LIMIT, LINK_LIMIT};
use crate::models::delta::{CondenseDelta, LetterDelta};
use crate::models::profile::{Experience, Profile};

/// Result of the condense merge.
#[derive(Debug, Clone)]
pub struct CondensedOutcome {
    pub profile: Profile,
    /// Out-of-range skill indices plus foreign identifiers discarded from the
    /// delta. Non-fatal quality signal.
    pub discarded_suggestions: u32,
}

/// Condenses a profile per the oracle's selections.
pub fn condense_profile(original: &Profile, delta: CondenseDelta) -> CondensedOutcome {
    let mut discarded = 0u32;

    // Skills: project by index, silently dropping out-of-range values.
    let mut skills: Vec<String> = Vec::new();
    for index in delta.selected_skill_indices.unwrap_or_default() {
        match usize::try_from(index).ok().and_then(|i| original.skills.get(i)) {
            Some(skill) => skills.push(skill.clone()),
            None => {
                warn!("condense delta skill index {index} out of range");
                discarded += 1;
            }
        }
    }
    if skills.is_empty() {
        skills = original
            .skills
            .iter()
            .take(FALLBACK_SKILL_LIMIT)
            .cloned()
            .collect();
    }

    // Experience: match by identifier, per-entry bullet fallback.
    let mut experience: Vec<Experience> = Vec::new();
    for patch in delta.condensed_experience.unwrap_or_default() {
        match original.experience_by_id(&patch.id) {
            Some(entry) => {
                let description = match patch.description {
                    Some(bullets) if !bullets.is_empty() => bullets,
                    _ => entry.description.clone(),
                };
                experience.push(Experience {
                    description,
                    ..entry.clone()
                });
            }
            None => {
                warn!("condense delta references unknown experience id {}", patch.id);
                discarded += 1;
            }
        }
    }
    if experience.is_empty() {
        experience = original
            .experience
            .iter()
            .take(FALLBACK_EXPERIENCE_LIMIT)
            .cloned()
            .collect();
    }

    // Education: filter to the ids the oracle names; none named keeps all.
    let education = match delta.education_ids {
        Some(ids) if !ids.is_empty() => {
            for id in &ids {
                if original.education_by_id(id).is_none() {
                    warn!("condense delta references unknown education id {id}");
                    discarded += 1;
                }
            }
            original
                .education
                .iter()
                .filter(|entry| ids.iter().any(|id| *id == entry.id))
                .cloned()
                .collect()
        }
        _ => original.education.clone(),
    };

    // Links: hard formatting constraint, applied regardless of the delta.
    let links = original.links.iter().take(LINK_LIMIT).cloned().collect();

    CondensedOutcome {
        profile: Profile {
            skills,
            experience,
            education,
            links,
            ..original.clone()
        },
        discarded_suggestions: discarded,
    }
}

/// Condenses a cover letter: the oracle's text wins only when non-empty.
pub fn condense_letter(original: &str, delta: LetterDelta) -> String {
    match delta.condensed_letter {
        Some(text) if !text.trim().is_empty() => text,
        _ => original.to_string(),
    }
}
