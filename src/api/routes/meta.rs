use axum::extract::State;
use axum::Json;
use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::api::state::AppState;

pub const WELCOME: &str = "-- Welcome to the NBA 22-23 Season Player Breakdown --";

pub async fn root() -> Json<&'static str> {
    Json(WELCOME)
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
    pub players: usize,
    pub loaded_at: DateTime<Utc>,
}

pub async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    let players = state.store.read().await.len();

    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
        players,
        loaded_at: state.loaded_at,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::build_router;
    use crate::config::AppConfig;
    use crate::ingest::{build_profile, sample_row};
    use crate::store::ProfileStore;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use serde_json::Value;
    use tower::util::ServiceExt;

    async fn get_json(app: axum::Router, uri: &str) -> (StatusCode, Value) {
        let resp = app
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = resp.status();
        let body = axum::body::to_bytes(resp.into_body(), usize::MAX)
            .await
            .unwrap();
        let json: Value = serde_json::from_slice(&body).unwrap_or(Value::Null);
        (status, json)
    }

    #[tokio::test]
    async fn test_root_welcome() {
        let state = AppState::new(ProfileStore::default(), AppConfig::default());
        let (status, json) = get_json(build_router(state), "/").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(json, WELCOME);
    }

    #[tokio::test]
    async fn test_health_counts_players() {
        let store = ProfileStore::new(vec![build_profile(&sample_row("Jane Doe", 5, 10))]);
        let state = AppState::new(store, AppConfig::default());
        let (status, json) = get_json(build_router(state), "/health").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["status"], "ok");
        assert_eq!(json["players"], 1);
        assert!(json["loaded_at"].is_string());
    }
}
