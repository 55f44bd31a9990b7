use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Router,
};
use chrono::Local;
use serde_json::json;

use super::domain::{BuildingType, CertificationError, Standard};
use super::service::{
    CertificationService, CertificationServiceError, ReportRequest, ScoreRequest,
};

/// Router exposing the catalog, scoring, and report endpoints.
pub fn certification_router(service: Arc<CertificationService>) -> Router {
    Router::new()
        .route("/api/v1/programs", get(programs_handler))
        .route(
            "/api/v1/programs/:standard/:building_type/criteria",
            get(criteria_handler),
        )
        .route("/api/v1/score", post(score_handler))
        .route("/api/v1/report", post(report_handler))
        .with_state(service)
}

pub(crate) async fn programs_handler(State(service): State<Arc<CertificationService>>) -> Response {
    (StatusCode::OK, axum::Json(service.programs())).into_response()
}

pub(crate) async fn criteria_handler(
    State(service): State<Arc<CertificationService>>,
    Path((standard, building_type)): Path<(String, String)>,
) -> Response {
    let criteria = parse_program(&standard, &building_type)
        .and_then(|(standard, building_type)| service.criteria(standard, building_type));

    match criteria {
        Ok(criteria) => (StatusCode::OK, axum::Json(criteria)).into_response(),
        Err(error) => bad_request(&error),
    }
}

pub(crate) async fn score_handler(
    State(service): State<Arc<CertificationService>>,
    axum::Json(request): axum::Json<ScoreRequest>,
) -> Response {
    match service.score(&request) {
        Ok(scorecard) => (StatusCode::OK, axum::Json(scorecard)).into_response(),
        Err(error) => bad_request(&error),
    }
}

pub(crate) async fn report_handler(
    State(service): State<Arc<CertificationService>>,
    axum::Json(request): axum::Json<ReportRequest>,
) -> Response {
    let today = Local::now().date_naive();
    match service.report(&request, today) {
        Ok(report) => (StatusCode::OK, axum::Json(report)).into_response(),
        Err(CertificationServiceError::Project(error)) => {
            let payload = json!({
                "error": error.to_string(),
                "issues": error.issues,
            });
            (StatusCode::UNPROCESSABLE_ENTITY, axum::Json(payload)).into_response()
        }
        Err(CertificationServiceError::Certification(error)) => bad_request(&error),
    }
}

fn parse_program(
    standard: &str,
    building_type: &str,
) -> Result<(Standard, BuildingType), CertificationError> {
    Ok((standard.parse()?, building_type.parse()?))
}

fn bad_request(error: &CertificationError) -> Response {
    let payload = json!({
        "error": error.to_string(),
    });
    (StatusCode::BAD_REQUEST, axum::Json(payload)).into_response()
}
