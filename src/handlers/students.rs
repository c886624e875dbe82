//! Student endpoints.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;

use crate::error::{AppError, ErrorBody};
use crate::extractors::{AppJson, AppQuery};
use crate::model::{NewStudent, Student, StudentFilter, StudentPatch};
use crate::service::validation::validate_name;
use crate::service::StudentService;
use crate::state::AppState;

use super::parse_id;

#[utoipa::path(
    get,
    path = "/api/v1/students",
    operation_id = "list_students",
    params(StudentFilter),
    responses((status = 200, body = [Student])),
    tag = "students"
)]
pub async fn list(
    State(state): State<AppState>,
    AppQuery(filter): AppQuery<StudentFilter>,
) -> Result<impl IntoResponse, AppError> {
    let students = StudentService::list(&state.pool, &filter).await?;
    Ok(Json(students))
}

#[utoipa::path(
    get,
    path = "/api/v1/students/{id}",
    operation_id = "read_student",
    params(("id" = String, Path)),
    responses((status = 200, body = Student), (status = 404, body = ErrorBody)),
    tag = "students"
)]
pub async fn read(
    State(state): State<AppState>,
    Path(id_str): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_id(&id_str)?;
    let student = StudentService::get(&state.pool, id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("student {}", id)))?;
    Ok(Json(student))
}

#[utoipa::path(
    post,
    path = "/api/v1/students",
    operation_id = "create_student",
    request_body = NewStudent,
    responses((status = 201, body = Student), (status = 400, body = ErrorBody)),
    tag = "students"
)]
pub async fn create(
    State(state): State<AppState>,
    AppJson(new): AppJson<NewStudent>,
) -> Result<impl IntoResponse, AppError> {
    validate_name(&new.name)?;
    let student = StudentService::create(&state.pool, &new).await?;
    Ok((StatusCode::CREATED, Json(student)))
}

#[utoipa::path(
    patch,
    path = "/api/v1/students/{id}",
    operation_id = "update_student",
    params(("id" = String, Path)),
    request_body = StudentPatch,
    responses((status = 200, body = Student), (status = 404, body = ErrorBody)),
    tag = "students"
)]
pub async fn update(
    State(state): State<AppState>,
    Path(id_str): Path<String>,
    AppJson(patch): AppJson<StudentPatch>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_id(&id_str)?;
    if let Some(name) = &patch.name {
        validate_name(name)?;
    }
    let student = StudentService::update(&state.pool, id, &patch)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("student {}", id)))?;
    Ok(Json(student))
}

#[utoipa::path(
    delete,
    path = "/api/v1/students/{id}",
    operation_id = "delete_student",
    params(("id" = String, Path)),
    responses((status = 204), (status = 404, body = ErrorBody)),
    tag = "students"
)]
pub async fn delete(
    State(state): State<AppState>,
    Path(id_str): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_id(&id_str)?;
    if !StudentService::delete(&state.pool, id).await? {
        return Err(AppError::NotFound(format!("student {}", id)));
    }
    Ok(StatusCode::NO_CONTENT)
}
