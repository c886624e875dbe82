//! Business logic between handlers and SQL.

pub mod courses;
pub mod students;
pub mod validation;

pub use courses::CourseService;
pub use students::StudentService;
