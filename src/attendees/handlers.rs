use axum::{
    extract::State,
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use serde::Serialize;
use tracing::{info, instrument, warn};
use uuid::Uuid;

use super::{repo::already_attending, repo_types::Attendee};
use crate::{
    auth::{dto::PublicUser, extractors::AuthUser, repo_types::User},
    error::{AppError, AppResult},
    events::{repo_types::Event, services::owned_event},
    extract::ApiPath,
    state::AppState,
};

#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

pub fn read_routes() -> Router<AppState> {
    Router::new()
        .route("/events/:id/attendees", get(list_attendees))
        .route("/attendees/:id/events", get(list_events_of_attendee))
}

pub fn write_routes() -> Router<AppState> {
    Router::new().route(
        "/events/:id/attendees/:user_id",
        post(add_attendee).delete(remove_attendee),
    )
}

#[instrument(skip(state))]
pub async fn add_attendee(
    State(state): State<AppState>,
    user: AuthUser,
    ApiPath((event_id, user_id)): ApiPath<(Uuid, Uuid)>,
) -> AppResult<(StatusCode, Json<Attendee>)> {
    let event = owned_event(&state.db, event_id, user, "add attendees to this event").await?;

    let target = User::find_by_id(&state.db, user_id)
        .await?
        .ok_or_else(|| AppError::NotFound("User not found".into()))?;

    if Attendee::find(&state.db, event.id, target.id).await?.is_some() {
        warn!(event_id = %event.id, user_id = %target.id, "already an attendee");
        return Err(already_attending());
    }

    let attendee = Attendee::create(&state.db, event.id, target.id).await?;

    info!(event_id = %event.id, user_id = %target.id, "attendee added");
    Ok((StatusCode::CREATED, Json(attendee)))
}

#[instrument(skip(state))]
pub async fn remove_attendee(
    State(state): State<AppState>,
    user: AuthUser,
    ApiPath((event_id, user_id)): ApiPath<(Uuid, Uuid)>,
) -> AppResult<Json<MessageResponse>> {
    let event = owned_event(&state.db, event_id, user, "remove attendees from this event").await?;

    if Attendee::find(&state.db, event.id, user_id).await?.is_none() {
        return Err(AppError::NotFound("Attendee not found".into()));
    }

    Attendee::delete(&state.db, user_id, event.id).await?;

    info!(event_id = %event.id, user_id = %user_id, "attendee removed");
    Ok(Json(MessageResponse {
        message: "Attendee removed from event successfully".into(),
    }))
}

#[instrument(skip(state))]
pub async fn list_attendees(
    State(state): State<AppState>,
    ApiPath(event_id): ApiPath<Uuid>,
) -> AppResult<Json<Vec<PublicUser>>> {
    let users = Attendee::users_by_event(&state.db, event_id).await?;
    Ok(Json(users))
}

#[instrument(skip(state))]
pub async fn list_events_of_attendee(
    State(state): State<AppState>,
    ApiPath(user_id): ApiPath<Uuid>,
) -> AppResult<Json<Vec<Event>>> {
    let events = Attendee::events_by_user(&state.db, user_id).await?;
    if events.is_empty() {
        return Err(AppError::NotFound("No events found for this attendee".into()));
    }
    Ok(Json(events))
}
