//! Course CRUD against SQLite, roster included.
//!
//! A course row never travels alone: every read joins in the roster from
//! `course_students`, and every write that touches the roster happens in
//! the same transaction as the course row.

use std::collections::HashMap;

use sqlx::{Sqlite, SqlitePool, Transaction};

use crate::error::AppError;
use crate::model::{Course, CourseFilter, CoursePatch, NewCourse};

#[derive(sqlx::FromRow)]
struct CourseRow {
    id: i64,
    name: String,
}

pub struct CourseService;

impl CourseService {
    /// List courses with their rosters. Filters are exact-match and
    /// conjunctive.
    pub async fn list(pool: &SqlitePool, filter: &CourseFilter) -> Result<Vec<Course>, AppError> {
        let mut sql = String::from("SELECT id, name FROM courses");
        let mut clauses: Vec<&str> = Vec::new();
        if filter.id.is_some() {
            clauses.push("id = ?");
        }
        if filter.name.is_some() {
            clauses.push("name = ?");
        }
        if !clauses.is_empty() {
            sql.push_str(" WHERE ");
            sql.push_str(&clauses.join(" AND "));
        }
        sql.push_str(" ORDER BY id");
        tracing::debug!(sql = %sql, "query");

        let mut query = sqlx::query_as::<_, CourseRow>(&sql);
        if let Some(id) = filter.id {
            query = query.bind(id);
        }
        if let Some(name) = &filter.name {
            query = query.bind(name);
        }
        let rows = query.fetch_all(pool).await?;

        let ids: Vec<i64> = rows.iter().map(|r| r.id).collect();
        let mut rosters = Self::rosters_for(pool, &ids).await?;
        let courses = rows
            .into_iter()
            .map(|row| Course {
                id: row.id,
                name: row.name,
                students: rosters.remove(&row.id).unwrap_or_default(),
            })
            .collect();
        Ok(courses)
    }

    pub async fn get(pool: &SqlitePool, id: i64) -> Result<Option<Course>, AppError> {
        let Some(row) = sqlx::query_as::<_, CourseRow>("SELECT id, name FROM courses WHERE id = ?")
            .bind(id)
            .fetch_optional(pool)
            .await?
        else {
            return Ok(None);
        };
        let students = sqlx::query_scalar::<_, i64>(
            "SELECT student_id FROM course_students WHERE course_id = ? ORDER BY rowid",
        )
        .bind(id)
        .fetch_all(pool)
        .await?;
        Ok(Some(Course {
            id: row.id,
            name: row.name,
            students,
        }))
    }

    /// Course row and roster are committed together; an unknown student id
    /// rolls back the whole create.
    pub async fn create(pool: &SqlitePool, new: &NewCourse) -> Result<Course, AppError> {
        let mut tx = pool.begin().await?;
        let result = sqlx::query("INSERT INTO courses (name) VALUES (?)")
            .bind(&new.name)
            .execute(&mut *tx)
            .await?;
        let id = result.last_insert_rowid();
        insert_roster(&mut tx, id, &new.students).await?;
        tx.commit().await?;
        Ok(Course {
            id,
            name: new.name.clone(),
            students: new.students.clone(),
        })
    }

    /// Applies the supplied fields; a present roster replaces the stored
    /// one wholesale. Returns None when the id does not exist.
    pub async fn update(
        pool: &SqlitePool,
        id: i64,
        patch: &CoursePatch,
    ) -> Result<Option<Course>, AppError> {
        let mut tx = pool.begin().await?;
        let Some(row) = sqlx::query_as::<_, CourseRow>("SELECT id, name FROM courses WHERE id = ?")
            .bind(id)
            .fetch_optional(&mut *tx)
            .await?
        else {
            return Ok(None);
        };

        let name = patch.name.clone().unwrap_or(row.name);
        sqlx::query("UPDATE courses SET name = ? WHERE id = ?")
            .bind(&name)
            .bind(id)
            .execute(&mut *tx)
            .await?;

        let students = match &patch.students {
            Some(roster) => {
                sqlx::query("DELETE FROM course_students WHERE course_id = ?")
                    .bind(id)
                    .execute(&mut *tx)
                    .await?;
                insert_roster(&mut tx, id, roster).await?;
                roster.clone()
            }
            None => {
                sqlx::query_scalar::<_, i64>(
                    "SELECT student_id FROM course_students WHERE course_id = ? ORDER BY rowid",
                )
                .bind(id)
                .fetch_all(&mut *tx)
                .await?
            }
        };
        tx.commit().await?;
        Ok(Some(Course { id, name, students }))
    }

    pub async fn delete(pool: &SqlitePool, id: i64) -> Result<bool, AppError> {
        let result = sqlx::query("DELETE FROM courses WHERE id = ?")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Batch-loads rosters for a list of course ids, preserving enrollment
    /// order within each course. Ids are queried in chunks to stay under
    /// SQLite's host-parameter limit per statement.
    async fn rosters_for(
        pool: &SqlitePool,
        course_ids: &[i64],
    ) -> Result<HashMap<i64, Vec<i64>>, AppError> {
        const CHUNK: usize = 500;
        let mut rosters: HashMap<i64, Vec<i64>> = HashMap::new();
        for chunk in course_ids.chunks(CHUNK) {
            let placeholders = vec!["?"; chunk.len()].join(", ");
            let sql = format!(
                "SELECT course_id, student_id FROM course_students WHERE course_id IN ({}) ORDER BY rowid",
                placeholders
            );
            let mut query = sqlx::query_as::<_, (i64, i64)>(&sql);
            for id in chunk {
                query = query.bind(id);
            }
            for (course_id, student_id) in query.fetch_all(pool).await? {
                rosters.entry(course_id).or_default().push(student_id);
            }
        }
        Ok(rosters)
    }
}

async fn insert_roster(
    tx: &mut Transaction<'_, Sqlite>,
    course_id: i64,
    student_ids: &[i64],
) -> Result<(), AppError> {
    for student_id in student_ids {
        sqlx::query("INSERT INTO course_students (course_id, student_id) VALUES (?, ?)")
            .bind(course_id)
            .bind(student_id)
            .execute(&mut **tx)
            .await
            .map_err(|e| roster_error(e, *student_id))?;
    }
    Ok(())
}

/// Surfaces an unknown student id as an integrity error instead of a bare
/// database failure.
fn roster_error(e: sqlx::Error, student_id: i64) -> AppError {
    match &e {
        sqlx::Error::Database(db) if db.is_foreign_key_violation() => {
            AppError::Integrity(format!("unknown student id: {}", student_id))
        }
        _ => AppError::Db(e),
    }
}
