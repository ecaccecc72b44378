pub mod account;
pub mod error_log;
pub mod survey;

pub use account::PostgresAccountRepository;
pub use error_log::PostgresErrorLogRepository;
pub use survey::PostgresSurveyRepository;
