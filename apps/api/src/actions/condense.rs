//! Condense use-cases — shorten a resume profile or a cover letter.

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::actions::prompts::{
    CONDENSE_PROMPT_TEMPLATE, CONDENSE_SYSTEM, LETTER_PROMPT_TEMPLATE, LETTER_SYSTEM,
};
use crate::errors::AppError;
use crate::llm_client::prompts::IDENTIFIER_INSTRUCTION;
use crate::llm_client::LlmClient;
use crate::merge::condense::{condense_letter, condense_profile};
use crate::models::delta::{CondenseDelta, LetterDelta};
use crate::models::profile::Profile;
use crate::schema::{condense_letter_schema, condense_resume_schema};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CondenseResumePayload {
    pub profile: Profile,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CondenseResumeResponse {
    pub profile: Profile,
    /// Out-of-range indices and foreign identifiers discarded from the delta.
    pub discarded_suggestions: u32,
    pub raw: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CondenseLetterPayload {
    pub cover_letter: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CondenseLetterResponse {
    pub cover_letter: String,
    pub raw: String,
}

pub async fn condense_resume(
    llm: &LlmClient,
    payload: CondenseResumePayload,
) -> Result<CondenseResumeResponse, AppError> {
    let prompt = build_condense_prompt(&payload.profile)?;
    let (delta, raw) = llm
        .call_json::<CondenseDelta>(&prompt, CONDENSE_SYSTEM)
        .await?;

    let outcome = condense_profile(&payload.profile, delta);
    if outcome.discarded_suggestions > 0 {
        warn!(
            "condense merge discarded {} oracle suggestions",
            outcome.discarded_suggestions
        );
    }

    Ok(CondenseResumeResponse {
        profile: outcome.profile,
        discarded_suggestions: outcome.discarded_suggestions,
        raw,
    })
}

pub async fn condense_cover_letter(
    llm: &LlmClient,
    payload: CondenseLetterPayload,
) -> Result<CondenseLetterResponse, AppError> {
    if payload.cover_letter.trim().is_empty() {
        return Err(AppError::Validation(
            "coverLetter cannot be empty".to_string(),
        ));
    }

    let prompt = LETTER_PROMPT_TEMPLATE
        .replace("{schema}", &condense_letter_schema().render())
        .replace("{letter_text}", &payload.cover_letter);
    let (delta, raw) = llm.call_json::<LetterDelta>(&prompt, LETTER_SYSTEM).await?;

    Ok(CondenseLetterResponse {
        cover_letter: condense_letter(&payload.cover_letter, delta),
        raw,
    })
}

fn build_condense_prompt(profile: &Profile) -> Result<String, AppError> {
    let profile_json = serde_json::to_string_pretty(profile)
        .map_err(|e| AppError::Internal(anyhow::anyhow!("failed to serialize profile: {e}")))?;

    Ok(CONDENSE_PROMPT_TEMPLATE
        .replace("{identifier_instruction}", IDENTIFIER_INSTRUCTION)
        .replace("{schema}", &condense_resume_schema().render())
        .replace("{skills_indexed}", &index_skills(&profile.skills))
        .replace("{profile_json}", &profile_json))
}

/// Numbers the skill list for index-based selection: `0: Rust`, `1: SQL`, ...
fn index_skills(skills: &[String]) -> String {
    skills
        .iter()
        .enumerate()
        .map(|(i, skill)| format!("{i}: {skill}"))
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_skills_numbers_from_zero() {
        let skills = vec!["Rust".to_string(), "SQL".to_string()];
        assert_eq!(index_skills(&skills), "0: Rust\n1: SQL");
        assert_eq!(index_skills(&[]), "");
    }

    #[test]
    fn test_condense_prompt_embeds_indexed_skills_and_schema() {
        let profile = Profile {
            skills: vec!["Rust".to_string(), "Kafka".to_string()],
            ..Default::default()
        };
        let prompt = build_condense_prompt(&profile).unwrap();
        assert!(prompt.contains("0: Rust"));
        assert!(prompt.contains("1: Kafka"));
        assert!(prompt.contains("\"selectedSkillIndices\": [number]"));
        assert!(!prompt.contains("{skills_indexed}"));
    }

    #[tokio::test]
    async fn test_empty_letter_rejected_before_any_oracle_call() {
        let llm = LlmClient::new("test-key".to_string());
        let result = condense_cover_letter(
            &llm,
            CondenseLetterPayload {
                cover_letter: "\n".to_string(),
            },
        )
        .await;

        assert!(matches!(result, Err(AppError::Validation(_))));
    }
}
