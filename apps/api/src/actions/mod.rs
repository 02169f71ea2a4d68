//! Request Router — dispatches an inbound action name to one of the four
//! use-cases. The session is verified BEFORE any dispatch, so no oracle call
//! ever runs for an unauthenticated caller.

pub mod condense;
pub mod parse;
pub mod prompts;
pub mod research;
pub mod tailor;

use axum::{extract::State, http::HeaderMap, Json};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::info;

use crate::auth::bearer_token;
use crate::errors::AppError;
use crate::state::AppState;

pub const ACTION_PARSE_RESUME: &str = "parseResume";
pub const ACTION_TAILOR_RESUME: &str = "tailorResume";
pub const ACTION_CONDENSE_RESUME: &str = "condenseResume";
pub const ACTION_CONDENSE_COVER_LETTER: &str = "condenseCoverLetter";

/// The single inbound request shape: an action discriminator plus an
/// action-specific payload.
#[derive(Debug, Deserialize)]
pub struct AssistRequest {
    pub action: String,
    #[serde(default)]
    pub payload: Value,
}

/// POST /api/v1/assist
pub async fn handle_assist(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(request): Json<AssistRequest>,
) -> Result<Json<Value>, AppError> {
    let token = bearer_token(&headers)?;
    let user = state.sessions.verify(token).await?;

    info!("dispatching {} for user {}", request.action, user.user_id);

    match request.action.as_str() {
        ACTION_PARSE_RESUME => {
            respond(parse::parse_resume(&state.llm, decode(request.payload)?).await?)
        }
        ACTION_TAILOR_RESUME => respond(
            tailor::tailor_resume(
                &state.llm,
                state.config.expose_match_score,
                decode(request.payload)?,
            )
            .await?,
        ),
        ACTION_CONDENSE_RESUME => {
            respond(condense::condense_resume(&state.llm, decode(request.payload)?).await?)
        }
        ACTION_CONDENSE_COVER_LETTER => {
            respond(condense::condense_cover_letter(&state.llm, decode(request.payload)?).await?)
        }
        other => Err(AppError::UnknownAction(other.to_string())),
    }
}

fn decode<T: DeserializeOwned>(payload: Value) -> Result<T, AppError> {
    serde_json::from_value(payload).map_err(|e| AppError::Validation(format!("invalid payload: {e}")))
}

fn respond<T: Serialize>(response: T) -> Result<Json<Value>, AppError> {
    serde_json::to_value(response)
        .map(Json)
        .map_err(|e| AppError::Internal(anyhow::anyhow!("failed to serialize response: {e}")))
}
