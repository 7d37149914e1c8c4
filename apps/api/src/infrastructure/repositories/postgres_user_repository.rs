use async_trait::async_trait;
use sqlx::PgPool;

use crate::domain::repositories::{RepositoryResult, User, UserRepository};
use crate::domain::user::value_objects::{Email, Username};

/// PostgreSQL implementation of UserRepository
pub struct PostgresUserRepository {
    pool: PgPool,
}

impl PostgresUserRepository {
    /// Creates a new PostgresUserRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(sqlx::FromRow)]
struct UserRow {
    id: i64,
    username: String,
    email: String,
    password: String,
    confirmed: bool,
    facebook: Option<String>,
}

/// Stored users are accepted as written; values the current rules reject
/// are only logged.
impl From<UserRow> for User {
    fn from(row: UserRow) -> Self {
        let username = match Username::new(row.username.as_str()) {
            Ok(username) => username,
            Err(e) => {
                tracing::warn!(user_id = row.id, error = %e, "stored username fails validation");
                Username::from_stored(row.username)
            }
        };
        let email = match Email::new(row.email.as_str()) {
            Ok(email) => email,
            Err(e) => {
                tracing::warn!(user_id = row.id, error = %e, "stored email fails validation");
                Email::from_stored(row.email)
            }
        };

        User {
            id: row.id,
            username,
            email,
            password: row.password,
            confirmed: row.confirmed,
            facebook: row.facebook,
        }
    }
}

#[async_trait]
impl UserRepository for PostgresUserRepository {
    async fn find_by_id(&self, id: i64) -> RepositoryResult<Option<User>> {
        let row = sqlx::query_as::<_, UserRow>(
            r#"
            SELECT id, username, email, password, confirmed, facebook
            FROM users
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(User::from))
    }
}
