//! Tailor use-case — reshapes a Profile for a specific job posting.
//!
//! Two oracle calls in a fixed order: the best-effort company research call
//! first (its summary feeds the tailoring prompt), then the main tailoring
//! call. Research failure is absorbed; tailoring failure propagates.

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::actions::prompts::{TAILOR_PROMPT_TEMPLATE, TAILOR_SYSTEM};
use crate::actions::research::{research_company, ResearchBrief};
use crate::errors::AppError;
use crate::llm_client::prompts::IDENTIFIER_INSTRUCTION;
use crate::llm_client::LlmClient;
use crate::merge::tailor::apply_tailor;
use crate::models::delta::{Citation, TailorDelta};
use crate::models::profile::{JobDescription, Profile};
use crate::schema::tailor_schema;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TailorPayload {
    pub profile: Profile,
    pub job: JobDescription,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TailorResponse {
    pub profile: Profile,
    pub cover_letter: String,
    /// Omitted entirely when score exposure is disabled — the score is still
    /// computed either way.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub match_score: Option<u32>,
    pub keywords: Vec<String>,
    /// Research citations, passed through from the oracle unmodified.
    pub research_sources: Vec<Citation>,
    /// Oracle suggestions discarded for referencing unknown identifiers.
    pub discarded_suggestions: u32,
    pub raw: String,
}

pub async fn tailor_resume(
    llm: &LlmClient,
    expose_match_score: bool,
    payload: TailorPayload,
) -> Result<TailorResponse, AppError> {
    if payload.job.text.trim().is_empty() {
        return Err(AppError::Validation("job.text cannot be empty".to_string()));
    }

    // Research must complete (or fall back) before the main call — its
    // summary is embedded in the tailoring prompt.
    let research = research_company(llm, &payload.job).await;
    if research.is_fallback() {
        info!("tailoring {} at {} with neutral research brief", payload.job.role, payload.job.company);
    }

    let prompt = build_tailor_prompt(&payload.profile, &payload.job, research.value())?;
    let (delta, raw) = llm.call_json::<TailorDelta>(&prompt, TAILOR_SYSTEM).await?;

    let outcome = apply_tailor(&payload.profile, delta);
    if outcome.discarded_suggestions > 0 {
        warn!(
            "tailor merge discarded {} oracle suggestions",
            outcome.discarded_suggestions
        );
    }

    Ok(TailorResponse {
        profile: outcome.profile,
        cover_letter: outcome.cover_letter,
        match_score: expose_match_score.then_some(outcome.match_score),
        keywords: outcome.keywords,
        research_sources: research.into_inner().sources,
        discarded_suggestions: outcome.discarded_suggestions,
        raw,
    })
}

fn build_tailor_prompt(
    profile: &Profile,
    job: &JobDescription,
    research: &ResearchBrief,
) -> Result<String, AppError> {
    let profile_json = serde_json::to_string_pretty(profile)
        .map_err(|e| AppError::Internal(anyhow::anyhow!("failed to serialize profile: {e}")))?;

    Ok(TAILOR_PROMPT_TEMPLATE
        .replace("{identifier_instruction}", IDENTIFIER_INSTRUCTION)
        .replace("{schema}", &tailor_schema().render())
        .replace("{profile_json}", &profile_json)
        .replace("{company}", &job.company)
        .replace("{role}", &job.role)
        .replace("{jd_text}", &job.text)
        .replace("{research_summary}", &research.summary))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::profile::Experience;

    fn sample_profile() -> Profile {
        Profile {
            name: "Ada".to_string(),
            experience: vec![Experience {
                id: "exp-1".to_string(),
                company: "Acme".to_string(),
                ..Default::default()
            }],
            ..Default::default()
        }
    }

    fn sample_job() -> JobDescription {
        JobDescription {
            company: "Globex".to_string(),
            role: "Staff Engineer".to_string(),
            text: "We need a staff engineer.".to_string(),
        }
    }

    #[tokio::test]
    async fn test_empty_jd_text_rejected_before_any_oracle_call() {
        let llm = LlmClient::new("test-key".to_string());
        let result = tailor_resume(
            &llm,
            true,
            TailorPayload {
                profile: sample_profile(),
                job: JobDescription::default(),
            },
        )
        .await;

        assert!(matches!(result, Err(AppError::Validation(_))));
    }

    #[test]
    fn test_prompt_embeds_profile_ids_job_and_research() {
        let prompt =
            build_tailor_prompt(&sample_profile(), &sample_job(), &ResearchBrief::neutral())
                .unwrap();

        // The profile JSON carries the ids the oracle must echo back.
        assert!(prompt.contains("\"id\": \"exp-1\""));
        assert!(prompt.contains("Staff Engineer at Globex"));
        assert!(prompt.contains("We need a staff engineer."));
        assert!(prompt.contains(&ResearchBrief::neutral().summary));
        assert!(prompt.contains("never change an id"));
        assert!(!prompt.contains("{schema}"));
    }

    #[test]
    fn test_match_score_omitted_from_wire_when_unexposed() {
        let response = TailorResponse {
            profile: Profile::default(),
            cover_letter: "Dear team,".to_string(),
            match_score: None,
            keywords: vec![],
            research_sources: vec![],
            discarded_suggestions: 0,
            raw: String::new(),
        };
        let json = serde_json::to_value(&response).unwrap();
        assert!(json.get("matchScore").is_none());
    }

    #[test]
    fn test_match_score_present_on_wire_when_exposed() {
        let response = TailorResponse {
            profile: Profile::default(),
            cover_letter: "Dear team,".to_string(),
            match_score: Some(0),
            keywords: vec![],
            research_sources: vec![],
            discarded_suggestions: 0,
            raw: String::new(),
        };
        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["matchScore"], 0);
    }
}
