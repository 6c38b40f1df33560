use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A question row, serialized field-for-field as the wire format.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Question {
    pub id: i64,
    pub question: String,
    pub answer: String,
    pub category: i64,
    pub difficulty: i64,
}

/// Insert payload after validation, with all fields known present.
#[derive(Debug, Clone)]
pub struct NewQuestion {
    pub question: String,
    pub answer: String,
    pub category: i64,
    pub difficulty: i64,
}

/// Create-question body. Every field is optional at the schema level so that
/// an absent field and a present-but-empty string can both be rejected with
/// 422, while a body that is not JSON at all is rejected with 400 by the
/// extractor.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateQuestionRequest {
    #[serde(default)]
    pub question: Option<String>,
    #[serde(default)]
    pub answer: Option<String>,
    #[serde(default)]
    pub difficulty: Option<i64>,
    #[serde(default)]
    pub category: Option<i64>,
}

impl CreateQuestionRequest {
    /// Returns `None` when any field is absent or an empty string.
    pub fn into_new_question(self) -> Option<NewQuestion> {
        let question = self.question.filter(|s| !s.is_empty())?;
        let answer = self.answer.filter(|s| !s.is_empty())?;
        let difficulty = self.difficulty?;
        let category = self.category?;

        Some(NewQuestion {
            question,
            answer,
            category,
            difficulty,
        })
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct SearchRequest {
    #[serde(rename = "searchTerm", default)]
    pub search_term: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct QuizCategoryRef {
    pub id: i64,
}

/// Quiz body: both fields are required; `quiz_category.id == 0` means
/// "all categories".
#[derive(Debug, Clone, Deserialize)]
pub struct QuizRequest {
    #[serde(default)]
    pub previous_questions: Option<Vec<i64>>,
    #[serde(default)]
    pub quiz_category: Option<QuizCategoryRef>,
}

/// Page number query parameter, parsed leniently: anything that is not a
/// positive integer falls back to the first page instead of rejecting the
/// request.
#[derive(Debug, Clone, Deserialize)]
pub struct PageQuery {
    #[serde(default)]
    page: Option<String>,
}

impl PageQuery {
    pub fn page(&self) -> u32 {
        self.page
            .as_deref()
            .and_then(|raw| raw.parse().ok())
            .unwrap_or(1)
    }
}
