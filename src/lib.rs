//! Coursebook: course and student enrollment REST backend.
//!
//! Students and courses are flat resources under `/api/v1`; a course
//! carries its roster as a list of student ids, capped by a configurable
//! enrollment limit.

pub mod config;
pub mod error;
pub mod model;
pub mod state;
pub mod store;
pub mod service;
pub mod extractors;
pub mod handlers;
pub mod routes;
pub mod openapi;

pub use config::AppConfig;
pub use error::AppError;
pub use routes::app;
pub use state::AppState;
pub use store::{connect, ensure_tables};
pub use service::{CourseService, StudentService};
