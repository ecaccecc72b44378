use thiserror::Error;

/// Error for Question validation failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum QuestionError {
    #[error("Question must not be blank")]
    Blank,
}

/// Error for SurveyAnswer validation failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum AnswerError {
    #[error("Answer must not be blank")]
    Blank,

    #[error("A survey needs at least one answer")]
    Empty,
}

/// Top-level error for all survey-related operations
#[derive(Debug, Clone, Error)]
pub enum SurveyError {
    #[error("Invalid question: {0}")]
    InvalidQuestion(#[from] QuestionError),

    #[error("Invalid answers: {0}")]
    InvalidAnswers(#[from] AnswerError),

    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Unknown error: {0}")]
    Unknown(String),
}
