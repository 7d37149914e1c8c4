use thiserror::Error;

/// Errors reported by repository implementations
#[derive(Debug, Error)]
pub enum RepositoryError {
    /// A uniqueness constraint rejected the write
    #[error("Unique constraint violated: {0}")]
    Conflict(String),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Failure of a store that is not backed by SQL
    #[error("Storage error: {0}")]
    Storage(String),
}

impl RepositoryError {
    /// Classifies a sqlx error, turning PostgreSQL unique violations (SQLSTATE
    /// `23505`) into [`RepositoryError::Conflict`]
    pub fn from_sqlx(err: sqlx::Error) -> Self {
        if let sqlx::Error::Database(db_err) = &err {
            if db_err.code().as_deref() == Some("23505") {
                let constraint = db_err.constraint().unwrap_or("unknown").to_string();
                return RepositoryError::Conflict(constraint);
            }
        }
        RepositoryError::Database(err)
    }

    /// Returns true for uniqueness violations
    pub fn is_conflict(&self) -> bool {
        matches!(self, RepositoryError::Conflict(_))
    }
}

pub type RepositoryResult<T> = Result<T, RepositoryError>;
