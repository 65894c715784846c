use super::migrations::run_migrations;
use crate::error::{ApiError, ApiResult};
use crate::DbConnection;
use rusqlite::{params, params_from_iter, Connection, Row};
use shared_types::{Category, Question};
use std::path::Path;
use std::sync::{Arc, Mutex, MutexGuard};

/// Validated input for a new question row.
#[derive(Debug, Clone)]
pub struct NewQuestion {
    pub question: String,
    pub answer: String,
    pub category: i64,
    pub difficulty: i64,
}

#[derive(Clone)]
pub struct Database {
    connection: DbConnection,
}

impl Database {
    pub fn open(db_path: &Path) -> ApiResult<Self> {
        if let Some(parent) = db_path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent).map_err(|e| {
                    ApiError::Internal(format!("Failed to create database directory: {e}"))
                })?;
            }
        }

        Self::from_connection(Connection::open(db_path)?)
    }

    pub fn open_in_memory() -> ApiResult<Self> {
        Self::from_connection(Connection::open_in_memory()?)
    }

    fn from_connection(mut conn: Connection) -> ApiResult<Self> {
        // Question.category -> categories.id is only enforced with this on
        conn.execute("PRAGMA foreign_keys = ON", [])?;
        run_migrations(&mut conn)?;

        Ok(Database {
            connection: Arc::new(Mutex::new(conn)),
        })
    }

    fn lock(&self) -> ApiResult<MutexGuard<'_, Connection>> {
        self.connection
            .lock()
            .map_err(|e| ApiError::Internal(format!("Failed to acquire database lock: {e}")))
    }

    pub fn list_categories(&self) -> ApiResult<Vec<Category>> {
        let conn = self.lock()?;
        let categories = conn
            .prepare("SELECT id, type FROM categories ORDER BY id ASC")?
            .query_map([], |row| {
                Ok(Category {
                    id: row.get(0)?,
                    kind: row.get(1)?,
                })
            })?
            .collect::<Result<Vec<_>, _>>()?;

        Ok(categories)
    }

    pub fn insert_category(&self, kind: &str) -> ApiResult<Category> {
        let conn = self.lock()?;
        conn.execute("INSERT INTO categories (type) VALUES (?1)", params![kind])?;

        Ok(Category {
            id: conn.last_insert_rowid(),
            kind: kind.to_string(),
        })
    }

    pub fn count_categories(&self) -> ApiResult<i64> {
        let conn = self.lock()?;
        let count = conn.query_row("SELECT COUNT(*) FROM categories", [], |row| row.get(0))?;
        Ok(count)
    }

    pub fn list_questions(&self) -> ApiResult<Vec<Question>> {
        let conn = self.lock()?;
        let questions = conn
            .prepare(
                "SELECT id, question, answer, category, difficulty
                 FROM questions
                 ORDER BY id ASC",
            )?
            .query_map([], question_from_row)?
            .collect::<Result<Vec<_>, _>>()?;

        Ok(questions)
    }

    pub fn list_questions_in_category(&self, category_id: i64) -> ApiResult<Vec<Question>> {
        let conn = self.lock()?;
        let questions = conn
            .prepare(
                "SELECT id, question, answer, category, difficulty
                 FROM questions
                 WHERE category = ?1
                 ORDER BY id ASC",
            )?
            .query_map(params![category_id], question_from_row)?
            .collect::<Result<Vec<_>, _>>()?;

        Ok(questions)
    }

    /// Questions still open in a quiz round, in id order: optionally limited
    /// to one category, never one whose id is in `exclude`.
    pub fn quiz_candidates(
        &self,
        category: Option<i64>,
        exclude: &[i64],
    ) -> ApiResult<Vec<Question>> {
        let mut sql = String::from(
            "SELECT id, question, answer, category, difficulty
             FROM questions
             WHERE 1 = 1",
        );
        let mut binds = Vec::with_capacity(exclude.len() + 1);

        if let Some(category_id) = category {
            sql.push_str(" AND category = ?");
            binds.push(category_id);
        }
        if !exclude.is_empty() {
            let placeholders = vec!["?"; exclude.len()].join(", ");
            sql.push_str(&format!(" AND id NOT IN ({placeholders})"));
            binds.extend_from_slice(exclude);
        }
        sql.push_str(" ORDER BY id ASC");

        let conn = self.lock()?;
        let questions = conn
            .prepare(&sql)?
            .query_map(params_from_iter(binds), question_from_row)?
            .collect::<Result<Vec<_>, _>>()?;

        Ok(questions)
    }

    /// Case-insensitive substring match on the question text. The term is
    /// matched literally, so `%` and `_` are not wildcards.
    pub fn search_questions(&self, term: &str) -> ApiResult<Vec<Question>> {
        let conn = self.lock()?;
        let questions = conn
            .prepare(
                "SELECT id, question, answer, category, difficulty
                 FROM questions
                 WHERE instr(lower(question), lower(?1)) > 0
                 ORDER BY id ASC",
            )?
            .query_map(params![term], question_from_row)?
            .collect::<Result<Vec<_>, _>>()?;

        Ok(questions)
    }

    pub fn insert_question(&self, new_question: &NewQuestion) -> ApiResult<Question> {
        let conn = self.lock()?;
        conn.execute(
            r#"
            INSERT INTO questions (question, answer, category, difficulty)
            VALUES (?1, ?2, ?3, ?4)
            "#,
            params![
                new_question.question,
                new_question.answer,
                new_question.category,
                new_question.difficulty,
            ],
        )?;

        Ok(Question {
            id: conn.last_insert_rowid(),
            question: new_question.question.clone(),
            answer: new_question.answer.clone(),
            category: new_question.category,
            difficulty: new_question.difficulty,
        })
    }

    /// Returns false when no question had this id.
    pub fn delete_question(&self, question_id: i64) -> ApiResult<bool> {
        let conn = self.lock()?;
        let deleted = conn.execute("DELETE FROM questions WHERE id = ?1", params![question_id])?;
        Ok(deleted > 0)
    }
}

fn question_from_row(row: &Row<'_>) -> rusqlite::Result<Question> {
    Ok(Question {
        id: row.get(0)?,
        question: row.get(1)?,
        answer: row.get(2)?,
        category: row.get(3)?,
        difficulty: row.get(4)?,
    })
}
