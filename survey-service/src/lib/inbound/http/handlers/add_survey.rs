use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Extension;
use axum::Json;
use serde::Deserialize;

use super::required;
use super::ApiError;
use super::ParamError;
use crate::inbound::http::middleware::AuthenticatedAccount;
use crate::inbound::http::router::AppState;
use crate::survey::models::AddSurveyCommand;
use crate::survey::models::Question;
use crate::survey::models::SurveyAnswer;
use crate::survey::models::SurveyAnswers;

pub async fn add_survey(
    State(state): State<AppState>,
    Extension(caller): Extension<AuthenticatedAccount>,
    body: Result<Json<AddSurveyRequest>, JsonRejection>,
) -> Result<StatusCode, ApiError> {
    let Json(body) = body?;
    let command = body.try_into_command()?;

    let survey = state.survey_service.add_survey(command).await?;
    tracing::debug!(survey_id = %survey.id, account_id = %caller.account_id, "Survey added");

    Ok(StatusCode::NO_CONTENT)
}

/// HTTP request body for publishing a survey (raw JSON)
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct AddSurveyRequest {
    question: Option<String>,
    answers: Option<Vec<AnswerRequest>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct AnswerRequest {
    answer: Option<String>,
    image: Option<String>,
}

impl AddSurveyRequest {
    fn try_into_command(self) -> Result<AddSurveyCommand, ParamError> {
        let question = required(self.question, "question")?;
        let answers = self.answers.ok_or(ParamError::Missing("answers"))?;

        let question = Question::new(question).map_err(|_| ParamError::Invalid("question"))?;
        let answers = answers
            .into_iter()
            .map(|a| {
                let answer = required(a.answer, "answer")?;
                SurveyAnswer::new(answer, a.image).map_err(|_| ParamError::Invalid("answer"))
            })
            .collect::<Result<Vec<_>, _>>()?;
        let answers = SurveyAnswers::new(answers).map_err(|_| ParamError::Invalid("answers"))?;

        Ok(AddSurveyCommand::new(question, answers))
    }
}
