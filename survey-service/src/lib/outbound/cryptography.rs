pub mod argon2;
pub mod jwt;

pub use self::argon2::Argon2Adapter;
pub use self::jwt::JwtAdapter;
