use async_trait::async_trait;
use serde::Serialize;
use sqlx::types::Json;
use sqlx::PgPool;

use crate::survey::errors::SurveyError;
use crate::survey::models::Survey;
use crate::survey::models::SurveyAnswer;
use crate::survey::ports::SurveyRepository;

pub struct PostgresSurveyRepository {
    pool: PgPool,
}

impl PostgresSurveyRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// JSONB representation of one answer.
#[derive(Debug, Serialize)]
struct AnswerDocument<'a> {
    answer: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    image: Option<&'a str>,
}

impl<'a> From<&'a SurveyAnswer> for AnswerDocument<'a> {
    fn from(answer: &'a SurveyAnswer) -> Self {
        Self {
            answer: &answer.answer,
            image: answer.image.as_deref(),
        }
    }
}

#[async_trait]
impl SurveyRepository for PostgresSurveyRepository {
    async fn add(&self, survey: Survey) -> Result<Survey, SurveyError> {
        let answers: Vec<AnswerDocument<'_>> =
            survey.answers.as_slice().iter().map(Into::into).collect();

        sqlx::query(
            r#"
            INSERT INTO surveys (id, question, answers, created_at)
            VALUES ($1, $2, $3, $4)
            "#,
        )
        .bind(survey.id.0)
        .bind(survey.question.as_str())
        .bind(Json(&answers))
        .bind(survey.created_at)
        .execute(&self.pool)
        .await
        .map_err(|e| SurveyError::DatabaseError(e.to_string()))?;

        Ok(survey)
    }
}
