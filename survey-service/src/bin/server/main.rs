use std::sync::Arc;

use sqlx::postgres::PgPoolOptions;
use survey_service::account::authenticator::Authenticator;
use survey_service::account::service::AccountService;
use survey_service::config::Config;
use survey_service::inbound::http::router::create_router;
use survey_service::inbound::http::router::AppState;
use survey_service::outbound::cryptography::Argon2Adapter;
use survey_service::outbound::cryptography::JwtAdapter;
use survey_service::outbound::repositories::PostgresAccountRepository;
use survey_service::outbound::repositories::PostgresErrorLogRepository;
use survey_service::outbound::repositories::PostgresSurveyRepository;
use survey_service::survey::service::SurveyService;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "survey_service=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!(
        service = "survey-service",
        version = env!("CARGO_PKG_VERSION"),
        "Service starting"
    );

    let config = Config::load()?;

    tracing::info!(
        http_port = config.server.http_port,
        request_timeout_secs = config.server.request_timeout_secs,
        max_connections = config.database.max_connections,
        token_expiration_hours = config.jwt.expiration_hours,
        "Configuration loaded"
    );

    let pg_pool = PgPoolOptions::new()
        .max_connections(config.database.max_connections)
        .connect(&config.database.url)
        .await?;
    tracing::info!(
        max_connections = config.database.max_connections,
        database = "postgresql",
        "Database connection pool created"
    );

    sqlx::migrate!("./migrations").run(&pg_pool).await?;
    tracing::info!(database = "postgresql", "Database migrations completed");

    let account_repository = Arc::new(PostgresAccountRepository::new(pg_pool.clone()));
    let survey_repository = Arc::new(PostgresSurveyRepository::new(pg_pool.clone()));
    let error_log = Arc::new(PostgresErrorLogRepository::new(pg_pool));

    let argon2 = Arc::new(Argon2Adapter::new());
    let jwt = Arc::new(JwtAdapter::new(
        config.jwt.secret.as_bytes(),
        config.jwt.expiration_hours,
    ));

    let authenticator = Authenticator::new(
        Arc::clone(&account_repository),
        Arc::clone(&argon2),
        Arc::clone(&jwt),
    );
    let account_service = AccountService::new(account_repository, argon2, jwt);
    let survey_service = SurveyService::new(survey_repository);

    let state = AppState {
        account_service: Arc::new(account_service),
        authenticator: Arc::new(authenticator),
        survey_service: Arc::new(survey_service),
        error_log,
    };

    let http_address = format!("0.0.0.0:{}", config.server.http_port);
    let http_listener = tokio::net::TcpListener::bind(&http_address).await?;
    tracing::info!(
        address = %http_address,
        port = config.server.http_port,
        protocol = "http",
        "Http server listening"
    );

    let http_application = create_router(state, config.server.request_timeout());

    if let Err(e) = axum::serve(http_listener, http_application).await {
        tracing::error!(error = %e, "Server error");
        return Err(e.into());
    }

    tracing::info!("Server exited successfully");

    Ok(())
}
