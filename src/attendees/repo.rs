use sqlx::PgPool;
use uuid::Uuid;

use super::repo_types::Attendee;
use crate::{
    auth::dto::PublicUser,
    db::{timed, DbError},
    error::{AppError, AppResult},
    events::repo_types::Event,
};

impl Attendee {
    /// Inserts the pair. Conflict if it already exists, NotFound if the user or event is gone.
    pub async fn create(db: &PgPool, event_id: Uuid, user_id: Uuid) -> AppResult<Attendee> {
        timed(
            "insert attendee",
            sqlx::query_as::<_, Attendee>(
                r#"
                INSERT INTO attendees (id, user_id, event_id)
                VALUES ($1, $2, $3)
                RETURNING id, user_id, event_id
                "#,
            )
            .bind(Uuid::new_v4())
            .bind(user_id)
            .bind(event_id)
            .fetch_one(db),
        )
        .await
        .map_err(|e| match e {
            DbError::UniqueViolation { .. } => already_attending(),
            DbError::ForeignKeyViolation { .. } => {
                AppError::NotFound("User or event not found".into())
            }
            other => other.into(),
        })
    }

    pub async fn find(db: &PgPool, event_id: Uuid, user_id: Uuid) -> AppResult<Option<Attendee>> {
        let row = timed(
            "find attendee",
            sqlx::query_as::<_, Attendee>(
                r#"
                SELECT id, user_id, event_id
                FROM attendees
                WHERE event_id = $1 AND user_id = $2
                "#,
            )
            .bind(event_id)
            .bind(user_id)
            .fetch_optional(db),
        )
        .await?;
        Ok(row)
    }

    pub async fn users_by_event(db: &PgPool, event_id: Uuid) -> AppResult<Vec<PublicUser>> {
        let rows = timed(
            "list attendees of event",
            sqlx::query_as::<_, PublicUser>(
                r#"
                SELECT u.id, u.name, u.email
                  FROM users u
                  JOIN attendees a ON a.user_id = u.id
                 WHERE a.event_id = $1
                 ORDER BY u.name ASC
                "#,
            )
            .bind(event_id)
            .fetch_all(db),
        )
        .await?;
        Ok(rows)
    }

    pub async fn events_by_user(db: &PgPool, user_id: Uuid) -> AppResult<Vec<Event>> {
        let rows = timed(
            "list events of attendee",
            sqlx::query_as::<_, Event>(
                r#"
                SELECT e.id, e.name, e.owner_id, e.description, e.date, e.location, e.created_at
                  FROM events e
                  JOIN attendees a ON a.event_id = e.id
                 WHERE a.user_id = $1
                 ORDER BY e.date ASC
                "#,
            )
            .bind(user_id)
            .fetch_all(db),
        )
        .await?;
        Ok(rows)
    }

    /// Removes the pair; a missing pair is a no-op. Returns rows affected.
    pub async fn delete(db: &PgPool, user_id: Uuid, event_id: Uuid) -> AppResult<u64> {
        let res = timed(
            "delete attendee",
            sqlx::query("DELETE FROM attendees WHERE user_id = $1 AND event_id = $2")
                .bind(user_id)
                .bind(event_id)
                .execute(db),
        )
        .await?;
        Ok(res.rows_affected())
    }
}

pub fn already_attending() -> AppError {
    AppError::Conflict("User is already an attendee of this event".into())
}
