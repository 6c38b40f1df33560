use anyhow::{Context, Result};
use sqlx::SqlitePool;

use crate::models::{NewQuestion, Question};

pub struct QuestionService {
    db: SqlitePool,
}

impl QuestionService {
    pub fn new(db: SqlitePool) -> Self {
        Self { db }
    }

    pub async fn list_all(&self) -> Result<Vec<Question>> {
        sqlx::query_as::<_, Question>(
            "SELECT id, question, answer, category, difficulty FROM question ORDER BY id",
        )
        .fetch_all(&self.db)
        .await
        .context("Failed to list questions")
    }

    pub async fn list_by_category(&self, category_id: i64) -> Result<Vec<Question>> {
        sqlx::query_as::<_, Question>(
            "SELECT id, question, answer, category, difficulty
             FROM question WHERE category = ?1 ORDER BY id",
        )
        .bind(category_id)
        .fetch_all(&self.db)
        .await
        .context("Failed to list questions by category")
    }

    pub async fn find(&self, id: i64) -> Result<Option<Question>> {
        sqlx::query_as::<_, Question>(
            "SELECT id, question, answer, category, difficulty FROM question WHERE id = ?1",
        )
        .bind(id)
        .fetch_optional(&self.db)
        .await
        .context("Failed to look up question")
    }

    /// Case-insensitive substring match against the question text, executed
    /// store-side. SQLite's LIKE is case-insensitive for ASCII.
    pub async fn search(&self, term: &str) -> Result<Vec<Question>> {
        sqlx::query_as::<_, Question>(
            "SELECT id, question, answer, category, difficulty
             FROM question
             WHERE question LIKE '%' || ?1 || '%' ESCAPE '\\'
             ORDER BY id",
        )
        .bind(escape_like(term))
        .fetch_all(&self.db)
        .await
        .context("Failed to search questions")
    }

    pub async fn insert(&self, new_question: &NewQuestion) -> Result<i64> {
        let result = sqlx::query(
            "INSERT INTO question (question, answer, category, difficulty)
             VALUES (?1, ?2, ?3, ?4)",
        )
        .bind(&new_question.question)
        .bind(&new_question.answer)
        .bind(new_question.category)
        .bind(new_question.difficulty)
        .execute(&self.db)
        .await
        .context("Failed to insert question")?;

        Ok(result.last_insert_rowid())
    }

    pub async fn delete(&self, id: i64) -> Result<()> {
        sqlx::query("DELETE FROM question WHERE id = ?1")
            .bind(id)
            .execute(&self.db)
            .await
            .context("Failed to delete question")?;

        Ok(())
    }
}

/// Escapes the LIKE wildcards so a search term matches literally.
fn escape_like(term: &str) -> String {
    term.replace('\\', "\\\\")
        .replace('%', "\\%")
        .replace('_', "\\_")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escape_like_passes_plain_terms_through() {
        assert_eq!(escape_like("lake"), "lake");
    }

    #[test]
    fn escape_like_escapes_wildcards() {
        assert_eq!(escape_like("100%_done"), "100\\%\\_done");
        assert_eq!(escape_like("back\\slash"), "back\\\\slash");
    }
}
