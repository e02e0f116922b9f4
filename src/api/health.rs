//! Health check endpoints for Kubernetes probes

use std::time::Instant;

use axum::{extract::State, http::StatusCode, response::IntoResponse};

use crate::api::types::Json;
use serde::Serialize;

use super::state::AppState;
use crate::domain::EnrollmentFilters;

/// Detailed health response with component status
#[derive(Serialize)]
pub struct HealthResponse {
    pub status: HealthStatus,
    pub version: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub checks: Option<Vec<HealthCheck>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub latency_ms: Option<u64>,
}

/// Health check status
#[derive(Serialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum HealthStatus {
    Healthy,
    Unhealthy,
}

/// Individual component health check
#[derive(Serialize)]
pub struct HealthCheck {
    pub name: String,
    pub status: HealthStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub latency_ms: Option<u64>,
}

/// Simple health check - returns 200 if the service is running
/// Used for basic liveness probes
pub async fn health_check() -> impl IntoResponse {
    let response = HealthResponse {
        status: HealthStatus::Healthy,
        version: env!("CARGO_PKG_VERSION").to_string(),
        checks: None,
        latency_ms: None,
    };

    (StatusCode::OK, Json(response))
}

/// Readiness check with dependency verification
/// Checks if the service can handle requests
pub async fn ready_check(State(state): State<AppState>) -> impl IntoResponse {
    let start = Instant::now();
    let storage_check = check_storage(&state).await;

    let overall_status = storage_check.status;
    let latency = start.elapsed().as_millis() as u64;
    let response = HealthResponse {
        status: overall_status,
        version: env!("CARGO_PKG_VERSION").to_string(),
        checks: Some(vec![storage_check]),
        latency_ms: Some(latency),
    };

    let status_code = match overall_status {
        HealthStatus::Healthy => StatusCode::OK,
        HealthStatus::Unhealthy => StatusCode::SERVICE_UNAVAILABLE,
    };

    (status_code, Json(response))
}

/// Liveness check - simple check to verify the service is running
/// Used for Kubernetes liveness probes to detect crashes
pub async fn live_check() -> impl IntoResponse {
    StatusCode::OK
}

async fn check_storage(state: &AppState) -> HealthCheck {
    let start = Instant::now();

    match state
        .enrollment_service
        .count(&EnrollmentFilters::new())
        .await
    {
        Ok(_) => HealthCheck {
            name: "enrollment_storage".to_string(),
            status: HealthStatus::Healthy,
            message: None,
            latency_ms: Some(start.elapsed().as_millis() as u64),
        },
        Err(e) => HealthCheck {
            name: "enrollment_storage".to_string(),
            status: HealthStatus::Unhealthy,
            message: Some(e.to_string()),
            latency_ms: Some(start.elapsed().as_millis() as u64),
        },
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::body::to_bytes;

    use super::*;
    use crate::api::state::EnrollmentServiceTrait;
    use crate::config::PaginationConfig;
    use crate::domain::{DomainError, Enrollment};

    struct StubService {
        storage_up: bool,
    }

    #[async_trait::async_trait]
    impl EnrollmentServiceTrait for StubService {
        async fn create(&self, _: &str, _: &str) -> Result<Enrollment, DomainError> {
            Err(DomainError::internal("unused"))
        }

        async fn get(&self, id: &str) -> Result<Enrollment, DomainError> {
            Err(DomainError::not_found(id))
        }

        async fn get_all(
            &self,
            _: &EnrollmentFilters,
            _: usize,
            _: Option<usize>,
        ) -> Result<Vec<Enrollment>, DomainError> {
            Ok(Vec::new())
        }

        async fn update(&self, _: &str, _: Option<&str>) -> Result<(), DomainError> {
            Ok(())
        }

        async fn count(&self, _: &EnrollmentFilters) -> Result<usize, DomainError> {
            if self.storage_up {
                Ok(0)
            } else {
                Err(DomainError::storage("connection refused"))
            }
        }
    }

    fn state(storage_up: bool) -> AppState {
        AppState::new(
            Arc::new(StubService { storage_up }),
            PaginationConfig::default(),
        )
    }

    async fn body_json(response: axum::response::Response) -> serde_json::Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[test]
    fn test_health_status_serialization() {
        assert_eq!(
            serde_json::to_string(&HealthStatus::Healthy).unwrap(),
            "\"healthy\""
        );
        assert_eq!(
            serde_json::to_string(&HealthStatus::Unhealthy).unwrap(),
            "\"unhealthy\""
        );
    }

    #[tokio::test]
    async fn test_health_check() {
        let response = health_check().await.into_response();
        assert_eq!(response.status(), StatusCode::OK);

        let json = body_json(response).await;
        assert_eq!(json["status"], "healthy");
        assert!(json.get("checks").is_none());
    }

    #[tokio::test]
    async fn test_ready_check_healthy() {
        let response = ready_check(State(state(true))).await.into_response();
        assert_eq!(response.status(), StatusCode::OK);

        let json = body_json(response).await;
        assert_eq!(json["checks"][0]["name"], "enrollment_storage");
        assert_eq!(json["checks"][0]["status"], "healthy");
    }

    #[tokio::test]
    async fn test_ready_check_storage_down() {
        let response = ready_check(State(state(false))).await.into_response();
        assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);

        let json = body_json(response).await;
        assert_eq!(json["status"], "unhealthy");
        assert_eq!(
            json["checks"][0]["message"],
            "Storage error: connection refused"
        );
    }
}
