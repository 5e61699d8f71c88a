use async_trait::async_trait;
use sqlx::PgPool;

use crate::application::ports::{UserStore, UserStoreError};
use crate::domain::entities::User;

/// `users` table keyed by email
pub struct PostgresUserStore {
    pool: PgPool,
}

impl PostgresUserStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserStore for PostgresUserStore {
    async fn insert(&self, user: &User) -> Result<User, UserStoreError> {
        let admin: bool = sqlx::query_scalar(
            r#"
            INSERT INTO users (email, name, password_hash, admin)
            VALUES ($1, $2, $3, NOT EXISTS (SELECT 1 FROM users))
            RETURNING admin
            "#,
        )
        .bind(user.email())
        .bind(user.name())
        .bind(user.password_hash())
        .fetch_one(&self.pool)
        .await
        .map_err(|e| match e {
            sqlx::Error::Database(db) if db.is_unique_violation() => {
                UserStoreError::DuplicateEmail(user.email().to_string())
            }
            other => UserStoreError::Database(other),
        })?;

        let mut stored = user.clone();
        if admin {
            stored.promote_to_admin();
        }
        Ok(stored)
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, UserStoreError> {
        let row = sqlx::query_as::<_, UserRow>(
            "SELECT email, name, password_hash, admin FROM users WHERE email = $1",
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(UserRow::into_domain))
    }
}

#[derive(sqlx::FromRow)]
struct UserRow {
    email: String,
    name: String,
    password_hash: String,
    admin: bool,
}

impl UserRow {
    fn into_domain(self) -> User {
        User::reconstruct(self.email, self.name, self.password_hash, self.admin)
    }
}
