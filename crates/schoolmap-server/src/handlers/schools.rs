//! School registration and listing handlers.

use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::Json;

use crate::error::ApiError;
use crate::schema::schools::{
    AddSchoolRequest, AddSchoolResponse, ListSchoolsQuery, SchoolView,
};
use crate::state::AppState;

/// Registers a new school.
///
/// `POST /api/schools/addSchool`
pub async fn add_school(
    State(state): State<AppState>,
    Json(req): Json<AddSchoolRequest>,
) -> Result<(StatusCode, Json<AddSchoolResponse>), ApiError> {
    let mut service = state.service.lock().await;
    let school_id = service.add_school(req)?;
    Ok((
        StatusCode::CREATED,
        Json(AddSchoolResponse {
            message: "School added successfully".to_string(),
            school_id: school_id.0,
        }),
    ))
}

/// Lists all schools sorted by proximity to the query point.
///
/// `GET /api/schools/listSchools?latitude=..&longitude=..`
pub async fn list_schools(
    State(state): State<AppState>,
    Query(query): Query<ListSchoolsQuery>,
) -> Result<Json<Vec<SchoolView>>, ApiError> {
    let service = state.service.lock().await;
    let schools =
        service.list_schools(query.latitude.as_deref(), query.longitude.as_deref())?;
    Ok(Json(schools))
}
