//! Best-effort company research — the one oracle call allowed to fail.
//!
//! A research failure is absorbed into a neutral default brief rather than
//! propagated: a missing company blurb should never sink a whole tailoring
//! request. The absorbed/propagated duality is explicit in the return type
//! (`BestEffort`), not buried in control flow.

use tracing::warn;

use crate::actions::prompts::{RESEARCH_PROMPT_TEMPLATE, RESEARCH_SYSTEM};
use crate::llm_client::{LlmClient, LlmError};
use crate::models::delta::{Citation, ResearchDelta};
use crate::models::profile::JobDescription;
use crate::schema::research_schema;

/// Summary used when research fails or the oracle had nothing to say.
pub const NEUTRAL_RESEARCH_SUMMARY: &str =
    "No company research is available for this application.";

/// A value that may be degraded: `Fallback` carries the neutral default used
/// in place of a result we could not obtain.
#[derive(Debug, Clone, PartialEq)]
pub enum BestEffort<T> {
    Fresh(T),
    Fallback(T),
}

impl<T> BestEffort<T> {
    pub fn value(&self) -> &T {
        match self {
            BestEffort::Fresh(v) | BestEffort::Fallback(v) => v,
        }
    }

    pub fn into_inner(self) -> T {
        match self {
            BestEffort::Fresh(v) | BestEffort::Fallback(v) => v,
        }
    }

    pub fn is_fallback(&self) -> bool {
        matches!(self, BestEffort::Fallback(_))
    }
}

/// Research output embedded into the tailoring prompt; citations are passed
/// through to the caller unmodified.
#[derive(Debug, Clone, PartialEq)]
pub struct ResearchBrief {
    pub summary: String,
    pub sources: Vec<Citation>,
}

impl ResearchBrief {
    pub fn neutral() -> Self {
        Self {
            summary: NEUTRAL_RESEARCH_SUMMARY.to_string(),
            sources: Vec::new(),
        }
    }
}

/// Runs the research call. Must complete (or fall back) BEFORE the main
/// tailoring call is issued — its summary is embedded in that call's input.
pub async fn research_company(llm: &LlmClient, job: &JobDescription) -> BestEffort<ResearchBrief> {
    let prompt = RESEARCH_PROMPT_TEMPLATE
        .replace("{schema}", &research_schema().render())
        .replace("{company}", &job.company)
        .replace("{role}", &job.role);

    let result = llm
        .call_json::<ResearchDelta>(&prompt, RESEARCH_SYSTEM)
        .await;

    brief_from_result(result.map(|(delta, _raw)| delta), &job.company)
}

/// Pure absorption step, split out so the fallback rule is testable without
/// an oracle.
fn brief_from_result(
    result: Result<ResearchDelta, LlmError>,
    company: &str,
) -> BestEffort<ResearchBrief> {
    match result {
        Ok(delta) => BestEffort::Fresh(ResearchBrief {
            summary: match delta.summary {
                Some(summary) if !summary.trim().is_empty() => summary,
                _ => NEUTRAL_RESEARCH_SUMMARY.to_string(),
            },
            sources: delta.sources.unwrap_or_default(),
        }),
        Err(e) => {
            warn!("company research failed for {company}, using neutral brief: {e}");
            BestEffort::Fallback(ResearchBrief::neutral())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_research_failure_absorbed_into_neutral_brief() {
        let outcome = brief_from_result(Err(LlmError::EmptyContent), "Acme");

        assert!(outcome.is_fallback());
        assert_eq!(outcome.value(), &ResearchBrief::neutral());
        assert!(outcome.value().sources.is_empty());
    }

    #[test]
    fn test_successful_research_passes_citations_through() {
        let delta: ResearchDelta = serde_json::from_str(
            r#"{
                "summary": "Acme builds rockets.",
                "sources": [{"title": "Acme", "url": "https://acme.example"}]
            }"#,
        )
        .unwrap();
        let outcome = brief_from_result(Ok(delta), "Acme");

        assert!(!outcome.is_fallback());
        assert_eq!(outcome.value().summary, "Acme builds rockets.");
        assert_eq!(outcome.value().sources.len(), 1);
    }

    #[test]
    fn test_blank_summary_replaced_with_neutral_text() {
        let delta: ResearchDelta = serde_json::from_str(r#"{"summary": "  "}"#).unwrap();
        let outcome = brief_from_result(Ok(delta), "Acme");

        // A usable call with nothing to say is still Fresh, just neutral.
        assert!(!outcome.is_fallback());
        assert_eq!(outcome.value().summary, NEUTRAL_RESEARCH_SUMMARY);
    }
}
