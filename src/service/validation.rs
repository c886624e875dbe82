//! Input checks applied before anything touches the database.

use std::collections::HashSet;

use crate::error::AppError;

/// Drops repeated ids while keeping first-seen order. Runs before the cap
/// check so duplicates never count against the limit.
pub fn normalize_roster(student_ids: Vec<i64>) -> Vec<i64> {
    let mut seen = HashSet::with_capacity(student_ids.len());
    student_ids
        .into_iter()
        .filter(|id| seen.insert(*id))
        .collect()
}

/// Enforces the per-course enrollment cap. The boundary is inclusive: a
/// roster of exactly `max_allowed` students passes.
pub fn validate_enrollment(student_ids: &[i64], max_allowed: u32) -> Result<(), AppError> {
    if student_ids.len() > max_allowed as usize {
        return Err(AppError::Validation(format!(
            "students exceeds the maximum allowed per course: {}",
            max_allowed
        )));
    }
    Ok(())
}

pub fn validate_name(name: &str) -> Result<(), AppError> {
    if name.trim().is_empty() {
        return Err(AppError::Validation("name must not be blank".to_string()));
    }
    Ok(())
}
