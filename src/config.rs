//! Runtime configuration.
//!
//! Everything is read from the environment once at startup; the enrollment
//! cap alone stays adjustable afterwards so operators can tune it without a
//! restart.

use std::env;
use std::sync::atomic::{AtomicU32, Ordering};

use crate::error::AppError;

pub const DEFAULT_DATABASE_URL: &str = "sqlite://coursebook.db";
pub const DEFAULT_BIND_ADDR: &str = "127.0.0.1:3000";
pub const DEFAULT_MAX_STUDENTS_PER_COURSE: u32 = 20;

#[derive(Debug)]
pub struct AppConfig {
    pub database_url: String,
    pub bind_addr: String,
    max_students_per_course: AtomicU32,
}

impl AppConfig {
    pub fn new(database_url: String, bind_addr: String, max_students_per_course: u32) -> Self {
        Self {
            database_url,
            bind_addr,
            max_students_per_course: AtomicU32::new(max_students_per_course),
        }
    }

    /// Reads `DATABASE_URL`, `BIND_ADDR` and `MAX_STUDENTS_PER_COURSE`,
    /// falling back to defaults for any that are unset.
    pub fn from_env() -> Result<Self, AppError> {
        let database_url =
            env::var("DATABASE_URL").unwrap_or_else(|_| DEFAULT_DATABASE_URL.to_string());
        let bind_addr = env::var("BIND_ADDR").unwrap_or_else(|_| DEFAULT_BIND_ADDR.to_string());
        let max_students_per_course = match env::var("MAX_STUDENTS_PER_COURSE") {
            Ok(raw) => raw.parse::<u32>().map_err(|_| {
                AppError::Config(format!("MAX_STUDENTS_PER_COURSE is not a number: {}", raw))
            })?,
            Err(_) => DEFAULT_MAX_STUDENTS_PER_COURSE,
        };
        Ok(Self::new(database_url, bind_addr, max_students_per_course))
    }

    /// Current enrollment cap. Read at validation time, not at startup, so
    /// an override applies to every request that follows it.
    pub fn max_students_per_course(&self) -> u32 {
        self.max_students_per_course.load(Ordering::Relaxed)
    }

    pub fn set_max_students_per_course(&self, cap: u32) {
        self.max_students_per_course.store(cap, Ordering::Relaxed);
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::new(
            DEFAULT_DATABASE_URL.to_string(),
            DEFAULT_BIND_ADDR.to_string(),
            DEFAULT_MAX_STUDENTS_PER_COURSE,
        )
    }
}
