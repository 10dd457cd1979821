use sqlx::PgPool;
use uuid::Uuid;

use super::{dto::EventRequest, repo_types::Event};
use crate::db::timed;
use crate::error::AppResult;
use crate::utils::date::normalize_date;

impl Event {
    pub async fn create(db: &PgPool, owner_id: Uuid, input: &EventRequest) -> AppResult<Event> {
        let date = normalize_date(&input.date)?;
        let event = timed(
            "insert event",
            sqlx::query_as::<_, Event>(
                r#"
                INSERT INTO events (id, owner_id, name, description, date, location)
                VALUES ($1, $2, $3, $4, $5, $6)
                RETURNING id, name, owner_id, description, date, location, created_at
                "#,
            )
            .bind(Uuid::new_v4())
            .bind(owner_id)
            .bind(input.name.trim())
            .bind(input.description.trim())
            .bind(date)
            .bind(input.location.trim())
            .fetch_one(db),
        )
        .await?;
        Ok(event)
    }

    /// All events; empty when there are none.
    pub async fn list_all(db: &PgPool) -> AppResult<Vec<Event>> {
        let rows = timed(
            "list events",
            sqlx::query_as::<_, Event>(
                r#"
                SELECT id, name, owner_id, description, date, location, created_at
                FROM events
                ORDER BY date ASC, created_at ASC
                "#,
            )
            .fetch_all(db),
        )
        .await?;
        Ok(rows)
    }

    pub async fn find_by_id(db: &PgPool, id: Uuid) -> AppResult<Option<Event>> {
        let row = timed(
            "find event",
            sqlx::query_as::<_, Event>(
                r#"
                SELECT id, name, owner_id, description, date, location, created_at
                FROM events
                WHERE id = $1
                "#,
            )
            .bind(id)
            .fetch_optional(db),
        )
        .await?;
        Ok(row)
    }

    /// Overwrites the mutable fields. `owner_id` is never touched.
    pub async fn update(db: &PgPool, id: Uuid, input: &EventRequest) -> AppResult<Option<Event>> {
        let date = normalize_date(&input.date)?;
        let row = timed(
            "update event",
            sqlx::query_as::<_, Event>(
                r#"
                UPDATE events
                   SET name = $2, description = $3, date = $4, location = $5
                 WHERE id = $1
                RETURNING id, name, owner_id, description, date, location, created_at
                "#,
            )
            .bind(id)
            .bind(input.name.trim())
            .bind(input.description.trim())
            .bind(date)
            .bind(input.location.trim())
            .fetch_optional(db),
        )
        .await?;
        Ok(row)
    }

    /// Returns whether a row was deleted. Attendee rows go with it (`ON DELETE CASCADE`).
    pub async fn delete(db: &PgPool, id: Uuid) -> AppResult<bool> {
        let res = timed(
            "delete event",
            sqlx::query("DELETE FROM events WHERE id = $1")
                .bind(id)
                .execute(db),
        )
        .await?;
        Ok(res.rows_affected() > 0)
    }
}
