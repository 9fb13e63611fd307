//! # moge-common
//!
//! Shared utilities including configuration, error handling, authentication, and telemetry.

pub mod auth;
pub mod config;
pub mod error;
pub mod telemetry;

// Re-export commonly used types at crate root
pub use auth::{
    generate_verification_code, hash_password, validate_nickname, validate_password_rules,
    verify_password, AccessToken, Claims, JwtService,
};
pub use config::{
    AppConfig, AppSettings, ConfigError, CorsConfig, DatabaseConfig, Environment, JwtConfig,
    ListingConfig, RateLimitConfig, ServerConfig, VerificationConfig,
};
pub use error::{domain_status, AppError};
pub use telemetry::{try_init_tracing, try_init_tracing_with_config, TracingConfig, TracingError};
