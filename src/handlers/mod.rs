//! HTTP handlers. Thin: parse, validate, call the service, shape the
//! response.

pub mod courses;
pub mod students;

use crate::error::AppError;

/// Path ids arrive as strings so a non-numeric id maps to 400, not to a
/// router-level 404.
pub(crate) fn parse_id(id_str: &str) -> Result<i64, AppError> {
    id_str
        .parse::<i64>()
        .map_err(|_| AppError::BadRequest(format!("invalid id: {}", id_str)))
}
