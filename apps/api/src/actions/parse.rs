//! Parse use-case — bootstraps the initial Profile from raw resume text.

use serde::{Deserialize, Serialize};

use crate::actions::prompts::{PARSE_PROMPT_TEMPLATE, PARSE_SYSTEM};
use crate::errors::AppError;
use crate::llm_client::LlmClient;
use crate::merge::bootstrap::bootstrap_profile;
use crate::models::delta::ParsedResumeDelta;
use crate::models::profile::Profile;
use crate::schema::parse_schema;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParseResumePayload {
    pub resume_text: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ParseResumeResponse {
    pub profile: Profile,
    /// Raw oracle text, returned for diagnostics on every use-case.
    pub raw: String,
}

/// One oracle call, then wholesale bootstrap — the only use-case with no
/// prior authoritative state to protect. A malformed (non-JSON) oracle
/// response propagates as a failure; no partial Profile is returned.
pub async fn parse_resume(
    llm: &LlmClient,
    payload: ParseResumePayload,
) -> Result<ParseResumeResponse, AppError> {
    if payload.resume_text.trim().is_empty() {
        return Err(AppError::Validation("resumeText cannot be empty".to_string()));
    }

    let prompt = build_parse_prompt(&payload.resume_text);
    let (delta, raw) = llm
        .call_json::<ParsedResumeDelta>(&prompt, PARSE_SYSTEM)
        .await?;

    Ok(ParseResumeResponse {
        profile: bootstrap_profile(delta),
        raw,
    })
}

fn build_parse_prompt(resume_text: &str) -> String {
    PARSE_PROMPT_TEMPLATE
        .replace("{schema}", &parse_schema().render())
        .replace("{resume_text}", resume_text)
}
