//! Domain types and their wire representations.
//!
//! The same structs serve as request payloads and responses; rosters are
//! carried as plain student id lists rather than nested objects.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow, ToSchema)]
pub struct Student {
    pub id: i64,
    pub name: String,
    pub birth_date: Option<NaiveDate>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Course {
    pub id: i64,
    pub name: String,
    pub students: Vec<i64>,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct NewStudent {
    pub name: String,
    pub birth_date: Option<NaiveDate>,
}

/// Partial update; absent fields keep their stored value.
#[derive(Debug, Deserialize, ToSchema)]
pub struct StudentPatch {
    pub name: Option<String>,
    pub birth_date: Option<NaiveDate>,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct NewCourse {
    pub name: String,
    #[serde(default)]
    pub students: Vec<i64>,
}

/// Partial update; a present `students` list replaces the whole roster.
#[derive(Debug, Deserialize, ToSchema)]
pub struct CoursePatch {
    pub name: Option<String>,
    pub students: Option<Vec<i64>>,
}

#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct CourseFilter {
    pub id: Option<i64>,
    pub name: Option<String>,
}

#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct StudentFilter {
    pub id: Option<i64>,
    pub name: Option<String>,
    pub birth_date: Option<NaiveDate>,
}
