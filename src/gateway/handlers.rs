use axum::{
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
    response::{IntoResponse, Json},
};
use serde_json::json;

use super::{AppState, RecommendBody};
use crate::briefing;
use crate::engine;

/// GET /health — always public
pub(super) async fn handle_health() -> impl IntoResponse {
    Json(json!({"status": "ok"}))
}

/// POST /recommend — run the engine over the posted history + score
pub(super) async fn handle_recommend(
    State(_state): State<AppState>,
    body: Result<Json<RecommendBody>, JsonRejection>,
) -> impl IntoResponse {
    let Json(body) = match body {
        Ok(b) => b,
        Err(e) => {
            let err = json!({
                "error": format!(
                    "Invalid JSON: {e}. Expected: {{\"records\": [...], \"current_score\": 0.5}}"
                )
            });
            return (StatusCode::BAD_REQUEST, Json(err));
        }
    };

    let received_at = chrono::Utc::now();
    match engine::recommend(&body.records, body.current_score) {
        Ok(report) => {
            tracing::info!(
                %received_at,
                score = body.current_score,
                records = body.records.len(),
                "recommendation served"
            );
            match serde_json::to_value(&report) {
                Ok(value) => (StatusCode::OK, Json(value)),
                Err(e) => (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({"error": e.to_string()})),
                ),
            }
        }
        Err(e) => {
            tracing::warn!(%received_at, error = %e, "recommendation rejected");
            (StatusCode::BAD_REQUEST, Json(json!({"error": e.to_string()})))
        }
    }
}

/// POST /brief — engine plus injected provider; 503 without a provider
pub(super) async fn handle_brief(
    State(state): State<AppState>,
    body: Result<Json<RecommendBody>, JsonRejection>,
) -> impl IntoResponse {
    let Json(body) = match body {
        Ok(b) => b,
        Err(e) => {
            let err = json!({"error": format!("Invalid JSON: {e}")});
            return (StatusCode::BAD_REQUEST, Json(err));
        }
    };

    let received_at = chrono::Utc::now();

    let Some(provider) = state.provider.clone() else {
        tracing::warn!(%received_at, "briefing requested without a configured provider");
        let err = json!({"error": "no text-generation provider configured"});
        return (StatusCode::SERVICE_UNAVAILABLE, Json(err));
    };

    let report = match engine::recommend(&body.records, body.current_score) {
        Ok(report) => report,
        Err(e) => {
            tracing::warn!(%received_at, error = %e, "briefing rejected");
            return (StatusCode::BAD_REQUEST, Json(json!({"error": e.to_string()})));
        }
    };

    match briefing::compose_briefing(provider.as_ref(), &report, &state.model, state.temperature)
        .await
    {
        Ok(text) => match serde_json::to_value(&report) {
            Ok(report_value) => {
                tracing::info!(
                    %received_at,
                    score = body.current_score,
                    records = body.records.len(),
                    "briefing served"
                );
                (
                    StatusCode::OK,
                    Json(json!({"report": report_value, "briefing": text})),
                )
            }
            Err(e) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({"error": e.to_string()})),
            ),
        },
        Err(e) => {
            tracing::warn!(%received_at, error = %e, "provider call failed");
            (StatusCode::BAD_GATEWAY, Json(json!({"error": e.to_string()})))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::providers::Provider;
    use serde_json::Value;
    use std::sync::Arc;

    fn engine_only_state() -> AppState {
        AppState {
            provider: None,
            model: "gpt-4o-mini".to_string(),
            temperature: 0.7,
        }
    }

    #[derive(Debug)]
    struct CannedProvider;

    #[async_trait::async_trait]
    impl Provider for CannedProvider {
        async fn chat_with_system(
            &self,
            _system_prompt: Option<&str>,
            _message: &str,
            _model: &str,
            _temperature: f64,
        ) -> anyhow::Result<String> {
            Ok("you are doing well".to_string())
        }
    }

    fn briefing_state() -> AppState {
        AppState {
            provider: Some(Arc::new(CannedProvider)),
            model: "gpt-4o-mini".to_string(),
            temperature: 0.7,
        }
    }

    fn body(records: Vec<Value>, current_score: f64) -> Result<Json<RecommendBody>, JsonRejection> {
        Ok(Json(RecommendBody {
            records,
            current_score,
        }))
    }

    #[tokio::test]
    async fn recommend_returns_ok_for_valid_input() {
        let response = handle_recommend(State(engine_only_state()), body(vec![], 0.5))
            .await
            .into_response();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn recommend_rejects_out_of_range_scores() {
        let response = handle_recommend(State(engine_only_state()), body(vec![], 1.5))
            .await
            .into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn recommend_rejects_malformed_records() {
        let records = vec![json!({"score": 0.5})];
        let response = handle_recommend(State(engine_only_state()), body(records, 0.5))
            .await
            .into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn brief_without_provider_is_unavailable() {
        let response = handle_brief(State(engine_only_state()), body(vec![], 0.5))
            .await
            .into_response();
        assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
    }

    #[tokio::test]
    async fn brief_with_provider_serves_report_and_briefing() {
        let response = handle_brief(State(briefing_state()), body(vec![], 0.5))
            .await
            .into_response();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn brief_rejects_out_of_range_scores() {
        let response = handle_brief(State(briefing_state()), body(vec![], 1.5))
            .await
            .into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}
