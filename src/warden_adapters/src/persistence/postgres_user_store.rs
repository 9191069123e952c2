use secrecy::{ExposeSecret, Secret};
use sqlx::{PgPool, Pool, Postgres};
use warden_core::{PasswordHash, User, UserStore, UserStoreError, Username};

/// User store backed by the `users` table. `username` is the primary key, so
/// the database rejects the second of two racing inserts.
#[derive(Clone)]
pub struct PostgresUserStore {
    pool: PgPool,
}

impl PostgresUserStore {
    pub fn new(pool: Pool<Postgres>) -> Self {
        PostgresUserStore { pool }
    }
}

#[async_trait::async_trait]
impl UserStore for PostgresUserStore {
    #[tracing::instrument(name = "Adding user to PostgreSQL", skip_all)]
    async fn insert_if_absent(&self, user: User) -> Result<(), UserStoreError> {
        let query = sqlx::query(
            r#"
                INSERT INTO users (username, password_hash)
                VALUES ($1, $2)
            "#,
        )
        .bind(user.username().as_str())
        .bind(user.password_hash().as_ref().expose_secret());

        query.execute(&self.pool).await.map_err(|e| {
            if let Some(db_err) = e.as_database_error() {
                if db_err.is_unique_violation() {
                    return UserStoreError::UserAlreadyExists;
                }
            }
            UserStoreError::UnexpectedError(e.to_string())
        })?;

        Ok(())
    }

    #[tracing::instrument(name = "Retrieving user from PostgreSQL", skip_all)]
    async fn get_user(&self, username: &Username) -> Result<User, UserStoreError> {
        let query = sqlx::query_as::<_, (String, String)>(
            r#"
                SELECT username, password_hash
                FROM users
                WHERE username = $1
            "#,
        )
        .bind(username.as_str());

        let row = query
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| UserStoreError::UnexpectedError(e.to_string()))?;

        let Some((username, password_hash)) = row else {
            return Err(UserStoreError::UserNotFound);
        };

        let username =
            Username::parse(username).map_err(|e| UserStoreError::UnexpectedError(e.to_string()))?;
        Ok(User::new(
            username,
            PasswordHash::new(Secret::from(password_hash)),
        ))
    }
}
