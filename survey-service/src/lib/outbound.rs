pub mod cryptography;
pub mod repositories;
