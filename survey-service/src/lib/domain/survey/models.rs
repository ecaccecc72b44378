use std::fmt;

use chrono::DateTime;
use chrono::Utc;
use uuid::Uuid;

use crate::survey::errors::AnswerError;
use crate::survey::errors::QuestionError;

/// Survey aggregate entity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Survey {
    pub id: SurveyId,
    pub question: Question,
    pub answers: SurveyAnswers,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SurveyId(pub Uuid);

impl SurveyId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for SurveyId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for SurveyId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question(String);

impl Question {
    pub fn new(question: String) -> Result<Self, QuestionError> {
        if question.trim().is_empty() {
            return Err(QuestionError::Blank);
        }
        Ok(Self(question))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// One selectable answer, optionally illustrated by an image URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SurveyAnswer {
    pub answer: String,
    pub image: Option<String>,
}

impl SurveyAnswer {
    pub fn new(answer: String, image: Option<String>) -> Result<Self, AnswerError> {
        if answer.trim().is_empty() {
            return Err(AnswerError::Blank);
        }
        Ok(Self { answer, image })
    }
}

/// Non-empty list of answers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SurveyAnswers(Vec<SurveyAnswer>);

impl SurveyAnswers {
    pub fn new(answers: Vec<SurveyAnswer>) -> Result<Self, AnswerError> {
        if answers.is_empty() {
            return Err(AnswerError::Empty);
        }
        Ok(Self(answers))
    }

    pub fn as_slice(&self) -> &[SurveyAnswer] {
        &self.0
    }
}

/// Command to publish a new survey
#[derive(Debug, Clone)]
pub struct AddSurveyCommand {
    pub question: Question,
    pub answers: SurveyAnswers,
}

impl AddSurveyCommand {
    pub fn new(question: Question, answers: SurveyAnswers) -> Self {
        Self { question, answers }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_question_blank() {
        assert_eq!(Question::new("  ".to_string()), Err(QuestionError::Blank));
    }

    #[test]
    fn test_answers_must_not_be_empty() {
        assert_eq!(SurveyAnswers::new(vec![]), Err(AnswerError::Empty));
    }

    #[test]
    fn test_answer_blank() {
        assert_eq!(
            SurveyAnswer::new(String::new(), Some("any_image".to_string())),
            Err(AnswerError::Blank)
        );
    }
}
