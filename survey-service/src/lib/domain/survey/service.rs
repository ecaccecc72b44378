use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;

use crate::survey::errors::SurveyError;
use crate::survey::models::AddSurveyCommand;
use crate::survey::models::Survey;
use crate::survey::models::SurveyId;
use crate::survey::ports::SurveyRepository;
use crate::survey::ports::SurveyServicePort;

pub struct SurveyService<SR>
where
    SR: SurveyRepository,
{
    repository: Arc<SR>,
}

impl<SR> SurveyService<SR>
where
    SR: SurveyRepository,
{
    pub fn new(repository: Arc<SR>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<SR> SurveyServicePort for SurveyService<SR>
where
    SR: SurveyRepository,
{
    async fn add_survey(&self, command: AddSurveyCommand) -> Result<Survey, SurveyError> {
        let survey = Survey {
            id: SurveyId::new(),
            question: command.question,
            answers: command.answers,
            created_at: Utc::now(),
        };

        let created = self.repository.add(survey).await?;
        tracing::info!(
            survey_id = %created.id,
            answers = created.answers.as_slice().len(),
            "Survey created"
        );

        Ok(created)
    }
}

#[cfg(test)]
mod tests {
    use mockall::mock;

    use super::*;
    use crate::survey::models::Question;
    use crate::survey::models::SurveyAnswer;
    use crate::survey::models::SurveyAnswers;

    mock! {
        pub TestSurveyRepository {}

        #[async_trait]
        impl SurveyRepository for TestSurveyRepository {
            async fn add(&self, survey: Survey) -> Result<Survey, SurveyError>;
        }
    }

    fn fake_command() -> AddSurveyCommand {
        AddSurveyCommand::new(
            Question::new("any_question".to_string()).unwrap(),
            SurveyAnswers::new(vec![SurveyAnswer::new(
                "any_answer".to_string(),
                Some("any_image".to_string()),
            )
            .unwrap()])
            .unwrap(),
        )
    }

    #[tokio::test]
    async fn test_add_survey_calls_repository_with_command_values() {
        let mut repository = MockTestSurveyRepository::new();

        repository
            .expect_add()
            .withf(|survey| {
                survey.question.as_str() == "any_question"
                    && survey.answers.as_slice()
                        == [SurveyAnswer {
                            answer: "any_answer".to_string(),
                            image: Some("any_image".to_string()),
                        }]
            })
            .times(1)
            .returning(|survey| Ok(survey));

        let service = SurveyService::new(Arc::new(repository));

        let survey = service.add_survey(fake_command()).await.unwrap();
        assert_eq!(survey.question.as_str(), "any_question");
    }

    #[tokio::test]
    async fn test_add_survey_repository_failure_propagates() {
        let mut repository = MockTestSurveyRepository::new();

        repository
            .expect_add()
            .times(1)
            .returning(|_| Err(SurveyError::DatabaseError("insert failed".to_string())));

        let service = SurveyService::new(Arc::new(repository));

        let result = service.add_survey(fake_command()).await;
        assert!(matches!(result, Err(SurveyError::DatabaseError(_))));
    }
}
