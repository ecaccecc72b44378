//! Credential utilities for the survey service.
//!
//! - Password hashing (Argon2id, PHC string format)
//! - Access token signing and verification (HS256)
//!
//! The service adapts these behind its own ports, so the domain never depends
//! on this crate directly.
//!
//! # Examples
//!
//! ## Password Hashing
//! ```
//! use auth::PasswordHasher;
//!
//! let hasher = PasswordHasher::new();
//! let hash = hasher.hash("my_password").unwrap();
//! assert!(hasher.verify("my_password", &hash).unwrap());
//! assert!(!hasher.verify("other_password", &hash).unwrap());
//! ```
//!
//! ## Access Tokens
//! ```
//! use auth::{AccessClaims, TokenSigner};
//!
//! let signer = TokenSigner::new(b"secret_key_at_least_32_bytes_long!");
//! let claims = AccessClaims::for_subject("account-1", 24);
//! let token = signer.sign(&claims).unwrap();
//! let decoded = signer.verify(&token).unwrap();
//! assert_eq!(decoded.sub, "account-1");
//! ```

pub mod password;
pub mod token;

pub use password::PasswordError;
pub use password::PasswordHasher;
pub use token::AccessClaims;
pub use token::TokenError;
pub use token::TokenSigner;
