//! Resource routes under `/api/v1`.
//!
//! Each collection is registered with and without a trailing slash so
//! clients written against either convention work unchanged.

use axum::routing::get;
use axum::Router;

use crate::handlers::{courses, students};
use crate::state::AppState;

pub fn api_routes(state: AppState) -> Router {
    let course_collection = get(courses::list).post(courses::create);
    let course_item = get(courses::read)
        .patch(courses::update)
        .delete(courses::delete);
    let student_collection = get(students::list).post(students::create);
    let student_item = get(students::read)
        .patch(students::update)
        .delete(students::delete);

    Router::new()
        .route("/courses", course_collection.clone())
        .route("/courses/", course_collection)
        .route("/courses/:id", course_item.clone())
        .route("/courses/:id/", course_item)
        .route("/students", student_collection.clone())
        .route("/students/", student_collection)
        .route("/students/:id", student_item.clone())
        .route("/students/:id/", student_item)
        .with_state(state)
}
