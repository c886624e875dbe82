//! OpenAPI document, served at `/api-docs/openapi.json`.

use utoipa::OpenApi;

use crate::error::{ErrorBody, ErrorDetail};
use crate::model::{Course, CoursePatch, NewCourse, NewStudent, Student, StudentPatch};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "coursebook",
        description = "Course and student enrollment API"
    ),
    paths(
        crate::handlers::courses::list,
        crate::handlers::courses::read,
        crate::handlers::courses::create,
        crate::handlers::courses::update,
        crate::handlers::courses::delete,
        crate::handlers::students::list,
        crate::handlers::students::read,
        crate::handlers::students::create,
        crate::handlers::students::update,
        crate::handlers::students::delete,
    ),
    components(schemas(
        Course,
        NewCourse,
        CoursePatch,
        Student,
        NewStudent,
        StudentPatch,
        ErrorBody,
        ErrorDetail,
    )),
    tags(
        (name = "courses", description = "Courses and their rosters"),
        (name = "students", description = "Students")
    )
)]
pub struct ApiDoc;
