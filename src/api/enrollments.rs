//! Enrollment endpoints

use axum::extract::{Path, Query, State};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::api::state::AppState;
use crate::api::types::{ApiError, ApiResponse, Json};
use crate::domain::enrollment::{validate_course_id, validate_user_id};
use crate::domain::{Enrollment, EnrollmentFilters, PageMeta};

/// Request to create a new enrollment
#[derive(Debug, Clone, Deserialize)]
pub struct CreateEnrollmentRequest {
    #[serde(default)]
    pub user_id: String,
    #[serde(default)]
    pub course_id: String,
}

/// Request to update an enrollment
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateEnrollmentRequest {
    #[serde(default)]
    pub status: Option<String>,
}

/// Query parameters for listing enrollments.
///
/// `page` and `limit` are kept as raw strings; anything that is not a
/// positive integer falls back to the defaults.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ListEnrollmentsQuery {
    pub user_id: Option<String>,
    pub course_id: Option<String>,
    pub page: Option<String>,
    pub limit: Option<String>,
}

impl ListEnrollmentsQuery {
    fn filters(&self) -> EnrollmentFilters {
        let mut filters = EnrollmentFilters::new();

        if let Some(user_id) = &self.user_id {
            filters = filters.with_user_id(user_id.as_str());
        }

        if let Some(course_id) = &self.course_id {
            filters = filters.with_course_id(course_id.as_str());
        }

        filters
    }
}

fn parse_positive(value: Option<&str>) -> usize {
    value
        .and_then(|v| v.trim().parse::<i64>().ok())
        .filter(|v| *v > 0)
        .map(|v| v as usize)
        .unwrap_or(0)
}

/// Enrollment response
#[derive(Debug, Clone, Serialize)]
pub struct EnrollmentResponse {
    pub id: String,
    pub user_id: String,
    pub course_id: String,
    pub status: String,
    pub created_at: String,
    pub updated_at: String,
}

impl From<&Enrollment> for EnrollmentResponse {
    fn from(enrollment: &Enrollment) -> Self {
        Self {
            id: enrollment.id().as_str().to_string(),
            user_id: enrollment.user_id().to_string(),
            course_id: enrollment.course_id().to_string(),
            status: enrollment.status().to_string(),
            created_at: enrollment.created_at().to_rfc3339(),
            updated_at: enrollment.updated_at().to_rfc3339(),
        }
    }
}

/// POST /enrollments
pub async fn create_enrollment(
    State(state): State<AppState>,
    Json(request): Json<CreateEnrollmentRequest>,
) -> Result<ApiResponse<EnrollmentResponse>, ApiError> {
    debug!(user_id = %request.user_id, course_id = %request.course_id, "Creating enrollment");

    validate_user_id(&request.user_id)?;
    validate_course_id(&request.course_id)?;

    let enrollment = state
        .enrollment_service
        .create(&request.user_id, &request.course_id)
        .await?;

    Ok(ApiResponse::created(EnrollmentResponse::from(&enrollment)))
}

/// GET /enrollments
pub async fn list_enrollments(
    State(state): State<AppState>,
    Query(query): Query<ListEnrollmentsQuery>,
) -> Result<ApiResponse<Vec<EnrollmentResponse>>, ApiError> {
    let filters = query.filters();
    debug!(?filters, page = ?query.page, limit = ?query.limit, "Listing enrollments");

    let total = state.enrollment_service.count(&filters).await?;
    let meta = PageMeta::new(
        parse_positive(query.page.as_deref()),
        parse_positive(query.limit.as_deref()),
        total,
        state.pagination.default_limit,
        state.pagination.max_limit,
    );

    let enrollments = state
        .enrollment_service
        .get_all(&filters, meta.offset(), Some(meta.limit()))
        .await?;

    let data: Vec<EnrollmentResponse> = enrollments.iter().map(EnrollmentResponse::from).collect();

    Ok(ApiResponse::ok(data).with_meta(meta))
}

/// GET /enrollments/{id}
pub async fn get_enrollment(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<ApiResponse<EnrollmentResponse>, ApiError> {
    debug!(id = %id, "Getting enrollment");

    let enrollment = state.enrollment_service.get(&id).await?;

    Ok(ApiResponse::ok(EnrollmentResponse::from(&enrollment)))
}

/// PATCH /enrollments/{id}
pub async fn update_enrollment(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(request): Json<UpdateEnrollmentRequest>,
) -> Result<ApiResponse<EnrollmentResponse>, ApiError> {
    debug!(id = %id, status = ?request.status, "Updating enrollment");

    state
        .enrollment_service
        .update(&id, request.status.as_deref())
        .await?;

    let enrollment = state.enrollment_service.get(&id).await?;

    Ok(ApiResponse::ok(EnrollmentResponse::from(&enrollment)))
}
