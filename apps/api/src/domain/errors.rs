use thiserror::Error;

/// Errors that can occur while managing hospital records
#[derive(Debug, Error)]
pub enum HospitalError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Migration failed: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),

    #[error("Password hashing failed: {0}")]
    PasswordHash(#[from] bcrypt::BcryptError),

    #[error("Hospital id is required for update")]
    MissingId,

    #[error("Hospital password is required")]
    MissingPassword,

    #[error("Hospital not found: {0}")]
    NotFound(i32),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type HospitalResult<T> = Result<T, HospitalError>;
