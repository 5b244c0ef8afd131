use axum::{extract::State, Json};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::{
    models::notification::NotificationOutcome, services::notifier::NotificationOrchestrator,
    state::AppState,
};

/// Status envelope returned to the trigger. Always reports success.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InvocationResponse {
    pub status_code: u16,
    pub is_base64_encoded: bool,
    pub body: String,
    pub headers: BTreeMap<String, String>,
}

impl InvocationResponse {
    pub fn from_outcome(outcome: &NotificationOutcome) -> Self {
        let body = serde_json::to_string(outcome).unwrap_or_default();
        let headers = BTreeMap::from([("Content-Type".to_string(), "application/json".to_string())]);

        Self {
            status_code: 200,
            is_base64_encoded: false,
            body,
            headers,
        }
    }
}

/// Runs one notification pass and wraps its outcome.
pub async fn run_invocation(
    notifier: &NotificationOrchestrator,
    reference: NaiveDate,
) -> InvocationResponse {
    let outcome = notifier.run(reference).await;
    InvocationResponse::from_outcome(&outcome)
}

pub async fn invoke(State(state): State<AppState>) -> Json<InvocationResponse> {
    let reference = state.config.reference_date();
    Json(run_invocation(&state.notifier, reference).await)
}
