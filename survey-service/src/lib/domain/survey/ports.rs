use async_trait::async_trait;

use crate::survey::errors::SurveyError;
use crate::survey::models::AddSurveyCommand;
use crate::survey::models::Survey;

/// Port for survey domain service operations.
#[async_trait]
pub trait SurveyServicePort: Send + Sync + 'static {
    /// Publish a new survey dated now.
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn add_survey(&self, command: AddSurveyCommand) -> Result<Survey, SurveyError>;
}

/// Persistence operations for the survey aggregate.
#[async_trait]
pub trait SurveyRepository: Send + Sync + 'static {
    async fn add(&self, survey: Survey) -> Result<Survey, SurveyError>;
}
