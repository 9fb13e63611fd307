//! Authentication utilities

mod certification;
mod jwt;
mod password;

pub use certification::generate_verification_code;
pub use jwt::{AccessToken, Claims, JwtService};
pub use password::{hash_password, validate_nickname, validate_password_rules, verify_password};
