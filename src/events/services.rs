use sqlx::PgPool;
use tracing::warn;
use uuid::Uuid;

use super::repo_types::Event;
use crate::{
    auth::extractors::AuthUser,
    error::{AppError, AppResult},
};

/// Rejects with Forbidden unless `user` owns `event`.
pub fn ensure_owner(event: &Event, user: AuthUser, action: &str) -> AppResult<()> {
    if event.owner_id != user.0 {
        warn!(event_id = %event.id, user_id = %user.0, action, "caller is not the event owner");
        return Err(AppError::Forbidden(format!(
            "You are not authorized to {action}"
        )));
    }
    Ok(())
}

pub fn event_not_found() -> AppError {
    AppError::NotFound("Event not found".into())
}

/// Loads the event for a mutation: NotFound first, then Forbidden, before any write.
pub async fn owned_event(
    db: &PgPool,
    event_id: Uuid,
    user: AuthUser,
    action: &str,
) -> AppResult<Event> {
    let event = Event::find_by_id(db, event_id)
        .await?
        .ok_or_else(event_not_found)?;
    ensure_owner(&event, user, action)?;
    Ok(event)
}
