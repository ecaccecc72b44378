//! Postgres-backed adapter tests.
//!
//! Require a reachable server (see `DATABASE_URL`); run with `cargo test -- --ignored`.

mod common;

use chrono::Utc;
use common::fake_account;
use common::TestDb;
use survey_service::account::errors::AccountError;
use survey_service::account::models::AccessToken;
use survey_service::account::models::AccountId;
use survey_service::account::models::EmailAddress;
use survey_service::account::models::Role;
use survey_service::account::ports::AccountRepository;
use survey_service::error_log::ErrorLogRepository;
use survey_service::outbound::repositories::PostgresAccountRepository;
use survey_service::outbound::repositories::PostgresErrorLogRepository;
use survey_service::outbound::repositories::PostgresSurveyRepository;
use survey_service::survey::models::Question;
use survey_service::survey::models::Survey;
use survey_service::survey::models::SurveyAnswer;
use survey_service::survey::models::SurveyAnswers;
use survey_service::survey::models::SurveyId;
use survey_service::survey::ports::SurveyRepository;

#[tokio::test]
#[ignore = "requires Postgres"]
async fn test_account_add_and_load_by_email() {
    let db = TestDb::new().await;
    let repository = PostgresAccountRepository::new(db.pool.clone());

    let account = fake_account(None);
    repository.add(account.clone()).await.unwrap();

    let email = EmailAddress::new("valid_email@mail.com".to_string()).unwrap();
    let loaded = repository.load_by_email(&email).await.unwrap().unwrap();

    assert_eq!(loaded.id, account.id);
    assert_eq!(loaded.name, account.name);
    assert_eq!(loaded.password_hash, "hashed_password");

    let other = EmailAddress::new("other_email@mail.com".to_string()).unwrap();
    assert!(repository.load_by_email(&other).await.unwrap().is_none());
}

#[tokio::test]
#[ignore = "requires Postgres"]
async fn test_account_duplicate_email() {
    let db = TestDb::new().await;
    let repository = PostgresAccountRepository::new(db.pool.clone());

    let mut first = fake_account(None);
    first.access_token = None;
    repository.add(first).await.unwrap();

    let mut second = fake_account(None);
    second.access_token = None;
    let result = repository.add(second).await;

    assert!(matches!(result, Err(AccountError::EmailAlreadyExists(_))));
}

#[tokio::test]
#[ignore = "requires Postgres"]
async fn test_account_update_and_load_by_token() {
    let db = TestDb::new().await;
    let repository = PostgresAccountRepository::new(db.pool.clone());

    let mut account = fake_account(None);
    account.access_token = None;
    repository.add(account.clone()).await.unwrap();

    let token = AccessToken::new("fresh_token");
    repository
        .update_access_token(&account.id, &token)
        .await
        .unwrap();

    let loaded = repository.load_by_token(&token, None).await.unwrap();
    assert_eq!(loaded.map(|a| a.id), Some(account.id));

    let as_admin = repository
        .load_by_token(&token, Some(Role::admin()))
        .await
        .unwrap();
    assert!(as_admin.is_none());
}

#[tokio::test]
#[ignore = "requires Postgres"]
async fn test_admin_passes_every_role() {
    let db = TestDb::new().await;
    let repository = PostgresAccountRepository::new(db.pool.clone());

    let mut account = fake_account(Some(Role::admin()));
    account.access_token = Some(AccessToken::new("admin_token"));
    repository.add(account.clone()).await.unwrap();

    let token = AccessToken::new("admin_token");
    assert!(repository.load_by_token(&token, None).await.unwrap().is_some());
    assert!(repository
        .load_by_token(&token, Some(Role::admin()))
        .await
        .unwrap()
        .is_some());
}

#[tokio::test]
#[ignore = "requires Postgres"]
async fn test_update_access_token_unknown_account() {
    let db = TestDb::new().await;
    let repository = PostgresAccountRepository::new(db.pool.clone());

    let result = repository
        .update_access_token(&AccountId::new(), &AccessToken::new("any_token"))
        .await;

    assert!(matches!(result, Err(AccountError::NotFound(_))));
}

#[tokio::test]
#[ignore = "requires Postgres"]
async fn test_survey_add_stores_answers() {
    let db = TestDb::new().await;
    let repository = PostgresSurveyRepository::new(db.pool.clone());

    let survey = Survey {
        id: SurveyId::new(),
        question: Question::new("Which framework?".to_string()).unwrap(),
        answers: SurveyAnswers::new(vec![
            SurveyAnswer::new("axum".to_string(), Some("http://image.com/axum.png".to_string()))
                .unwrap(),
            SurveyAnswer::new("actix".to_string(), None).unwrap(),
        ])
        .unwrap(),
        created_at: Utc::now(),
    };
    repository.add(survey.clone()).await.unwrap();

    let answers: serde_json::Value = sqlx::query_scalar("SELECT answers FROM surveys WHERE id = $1")
        .bind(survey.id.0)
        .fetch_one(&db.pool)
        .await
        .unwrap();

    assert_eq!(
        answers,
        serde_json::json!([
            { "answer": "axum", "image": "http://image.com/axum.png" },
            { "answer": "actix" }
        ])
    );
}

#[tokio::test]
#[ignore = "requires Postgres"]
async fn test_error_log_stores_stack() {
    let db = TestDb::new().await;
    let repository = PostgresErrorLogRepository::new(db.pool.clone());

    repository.log_error("any_stack").await.unwrap();

    let stacks: Vec<String> = sqlx::query_scalar("SELECT stack FROM error_logs")
        .fetch_all(&db.pool)
        .await
        .unwrap();

    assert_eq!(stacks, vec!["any_stack".to_string()]);
}
