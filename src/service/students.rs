//! Student CRUD against SQLite.

use sqlx::SqlitePool;

use crate::error::AppError;
use crate::model::{NewStudent, Student, StudentFilter, StudentPatch};

pub struct StudentService;

impl StudentService {
    /// List students, newest ids last. Filters are exact-match and
    /// conjunctive.
    pub async fn list(pool: &SqlitePool, filter: &StudentFilter) -> Result<Vec<Student>, AppError> {
        let mut sql = String::from("SELECT id, name, birth_date FROM students");
        let mut clauses: Vec<&str> = Vec::new();
        if filter.id.is_some() {
            clauses.push("id = ?");
        }
        if filter.name.is_some() {
            clauses.push("name = ?");
        }
        if filter.birth_date.is_some() {
            clauses.push("birth_date = ?");
        }
        if !clauses.is_empty() {
            sql.push_str(" WHERE ");
            sql.push_str(&clauses.join(" AND "));
        }
        sql.push_str(" ORDER BY id");
        tracing::debug!(sql = %sql, "query");

        let mut query = sqlx::query_as::<_, Student>(&sql);
        if let Some(id) = filter.id {
            query = query.bind(id);
        }
        if let Some(name) = &filter.name {
            query = query.bind(name);
        }
        if let Some(birth_date) = filter.birth_date {
            query = query.bind(birth_date);
        }
        let students = query.fetch_all(pool).await?;
        Ok(students)
    }

    pub async fn get(pool: &SqlitePool, id: i64) -> Result<Option<Student>, AppError> {
        let student =
            sqlx::query_as::<_, Student>("SELECT id, name, birth_date FROM students WHERE id = ?")
                .bind(id)
                .fetch_optional(pool)
                .await?;
        Ok(student)
    }

    pub async fn create(pool: &SqlitePool, new: &NewStudent) -> Result<Student, AppError> {
        let result = sqlx::query("INSERT INTO students (name, birth_date) VALUES (?, ?)")
            .bind(&new.name)
            .bind(new.birth_date)
            .execute(pool)
            .await?;
        Ok(Student {
            id: result.last_insert_rowid(),
            name: new.name.clone(),
            birth_date: new.birth_date,
        })
    }

    /// Applies the supplied fields only; returns None when the id does not
    /// exist.
    pub async fn update(
        pool: &SqlitePool,
        id: i64,
        patch: &StudentPatch,
    ) -> Result<Option<Student>, AppError> {
        let mut tx = pool.begin().await?;
        let Some(mut student) =
            sqlx::query_as::<_, Student>("SELECT id, name, birth_date FROM students WHERE id = ?")
                .bind(id)
                .fetch_optional(&mut *tx)
                .await?
        else {
            return Ok(None);
        };
        if let Some(name) = &patch.name {
            student.name = name.clone();
        }
        if let Some(birth_date) = patch.birth_date {
            student.birth_date = Some(birth_date);
        }
        sqlx::query("UPDATE students SET name = ?, birth_date = ? WHERE id = ?")
            .bind(&student.name)
            .bind(student.birth_date)
            .bind(id)
            .execute(&mut *tx)
            .await?;
        tx.commit().await?;
        Ok(Some(student))
    }

    /// Returns true when a row was removed. Enrollments referencing the
    /// student cascade away with it.
    pub async fn delete(pool: &SqlitePool, id: i64) -> Result<bool, AppError> {
        let result = sqlx::query("DELETE FROM students WHERE id = ?")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
