//! Course endpoints.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;

use crate::error::{AppError, ErrorBody};
use crate::extractors::{AppJson, AppQuery};
use crate::model::{Course, CourseFilter, CoursePatch, NewCourse};
use crate::service::validation::{normalize_roster, validate_enrollment, validate_name};
use crate::service::CourseService;
use crate::state::AppState;

use super::parse_id;

#[utoipa::path(
    get,
    path = "/api/v1/courses",
    operation_id = "list_courses",
    params(CourseFilter),
    responses((status = 200, body = [Course])),
    tag = "courses"
)]
pub async fn list(
    State(state): State<AppState>,
    AppQuery(filter): AppQuery<CourseFilter>,
) -> Result<impl IntoResponse, AppError> {
    let courses = CourseService::list(&state.pool, &filter).await?;
    Ok(Json(courses))
}

#[utoipa::path(
    get,
    path = "/api/v1/courses/{id}",
    operation_id = "read_course",
    params(("id" = String, Path)),
    responses((status = 200, body = Course), (status = 404, body = ErrorBody)),
    tag = "courses"
)]
pub async fn read(
    State(state): State<AppState>,
    Path(id_str): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_id(&id_str)?;
    let course = CourseService::get(&state.pool, id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("course {}", id)))?;
    Ok(Json(course))
}

#[utoipa::path(
    post,
    path = "/api/v1/courses",
    operation_id = "create_course",
    request_body = NewCourse,
    responses((status = 201, body = Course), (status = 400, body = ErrorBody)),
    tag = "courses"
)]
pub async fn create(
    State(state): State<AppState>,
    AppJson(mut new): AppJson<NewCourse>,
) -> Result<impl IntoResponse, AppError> {
    validate_name(&new.name)?;
    new.students = normalize_roster(new.students);
    validate_enrollment(&new.students, state.config.max_students_per_course())?;
    let course = CourseService::create(&state.pool, &new).await?;
    Ok((StatusCode::CREATED, Json(course)))
}

#[utoipa::path(
    patch,
    path = "/api/v1/courses/{id}",
    operation_id = "update_course",
    params(("id" = String, Path)),
    request_body = CoursePatch,
    responses((status = 200, body = Course), (status = 404, body = ErrorBody)),
    tag = "courses"
)]
pub async fn update(
    State(state): State<AppState>,
    Path(id_str): Path<String>,
    AppJson(mut patch): AppJson<CoursePatch>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_id(&id_str)?;
    if let Some(name) = &patch.name {
        validate_name(name)?;
    }
    if let Some(roster) = patch.students.take() {
        let roster = normalize_roster(roster);
        validate_enrollment(&roster, state.config.max_students_per_course())?;
        patch.students = Some(roster);
    }
    let course = CourseService::update(&state.pool, id, &patch)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("course {}", id)))?;
    Ok(Json(course))
}

#[utoipa::path(
    delete,
    path = "/api/v1/courses/{id}",
    operation_id = "delete_course",
    params(("id" = String, Path)),
    responses((status = 204), (status = 404, body = ErrorBody)),
    tag = "courses"
)]
pub async fn delete(
    State(state): State<AppState>,
    Path(id_str): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_id(&id_str)?;
    if !CourseService::delete(&state.pool, id).await? {
        return Err(AppError::NotFound(format!("course {}", id)));
    }
    Ok(StatusCode::NO_CONTENT)
}
