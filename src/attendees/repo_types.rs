use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Join row: `user_id` attends `event_id`. Unique per pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Attendee {
    pub id: Uuid,
    pub user_id: Uuid,
    pub event_id: Uuid,
}
