use sqlx::PgPool;
use uuid::Uuid;

use crate::auth::repo_types::User;
use crate::db::{timed, DbError};
use crate::error::{AppError, AppResult};

impl User {
    /// Find a user by email.
    pub async fn find_by_email(db: &PgPool, email: &str) -> AppResult<Option<User>> {
        let user = timed(
            "find user by email",
            sqlx::query_as::<_, User>(
                r#"
                SELECT id, name, email, password_hash, created_at
                FROM users
                WHERE email = $1
                "#,
            )
            .bind(email)
            .fetch_optional(db),
        )
        .await?;
        Ok(user)
    }

    pub async fn find_by_id(db: &PgPool, id: Uuid) -> AppResult<Option<User>> {
        let user = timed(
            "find user by id",
            sqlx::query_as::<_, User>(
                r#"
                SELECT id, name, email, password_hash, created_at
                FROM users
                WHERE id = $1
                "#,
            )
            .bind(id)
            .fetch_optional(db),
        )
        .await?;
        Ok(user)
    }

    /// Create a new user with a hashed password. The unique email index turns a duplicate into a conflict.
    pub async fn create(
        db: &PgPool,
        name: &str,
        email: &str,
        password_hash: &str,
    ) -> AppResult<User> {
        timed(
            "insert user",
            sqlx::query_as::<_, User>(
                r#"
                INSERT INTO users (id, name, email, password_hash)
                VALUES ($1, $2, $3, $4)
                RETURNING id, name, email, password_hash, created_at
                "#,
            )
            .bind(Uuid::new_v4())
            .bind(name)
            .bind(email)
            .bind(password_hash)
            .fetch_one(db),
        )
        .await
        .map_err(|e| match e {
            DbError::UniqueViolation { .. } => email_taken(),
            other => other.into(),
        })
    }
}

pub fn email_taken() -> AppError {
    AppError::Conflict("Email already registered".into())
}
