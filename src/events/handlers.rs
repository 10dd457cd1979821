use axum::{
    extract::State,
    http::{header, HeaderMap, HeaderValue, StatusCode},
    routing::{get, post, put},
    Json, Router,
};
use tracing::{info, instrument, warn};
use uuid::Uuid;

use super::{
    dto::EventRequest,
    repo_types::Event,
    services::{event_not_found, owned_event},
};
use crate::{
    auth::extractors::AuthUser,
    error::{AppError, AppResult},
    extract::{ApiJson, ApiPath},
    state::AppState,
};

pub fn read_routes() -> Router<AppState> {
    Router::new()
        .route("/events", get(list_events))
        .route("/events/:id", get(get_event))
}

pub fn write_routes() -> Router<AppState> {
    Router::new()
        .route("/events", post(create_event))
        .route("/events/:id", put(update_event).delete(delete_event))
}

#[instrument(skip(state))]
pub async fn list_events(State(state): State<AppState>) -> AppResult<Json<Vec<Event>>> {
    let events = Event::list_all(&state.db).await?;
    if events.is_empty() {
        return Err(AppError::NotFound("No events found".into()));
    }
    Ok(Json(events))
}

#[instrument(skip(state))]
pub async fn get_event(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<Uuid>,
) -> AppResult<Json<Event>> {
    let event = Event::find_by_id(&state.db, id)
        .await?
        .ok_or_else(event_not_found)?;
    Ok(Json(event))
}

#[instrument(skip(state, payload))]
pub async fn create_event(
    State(state): State<AppState>,
    user: AuthUser,
    ApiJson(payload): ApiJson<EventRequest>,
) -> AppResult<(StatusCode, HeaderMap, Json<Event>)> {
    payload.validate().map_err(|e| {
        warn!(error = %e, "create_event rejected");
        e
    })?;

    let event = Event::create(&state.db, user.0, &payload).await?;

    let mut headers = HeaderMap::new();
    if let Ok(location) = HeaderValue::from_str(&format!("/api/v1/events/{}", event.id)) {
        headers.insert(header::LOCATION, location);
    }

    info!(event_id = %event.id, owner_id = %user.0, "event created");
    Ok((StatusCode::CREATED, headers, Json(event)))
}

/// The body is only inspected after existence and ownership have been checked.
#[instrument(skip(state, payload))]
pub async fn update_event(
    State(state): State<AppState>,
    user: AuthUser,
    ApiPath(id): ApiPath<Uuid>,
    payload: Result<ApiJson<EventRequest>, AppError>,
) -> AppResult<Json<Event>> {
    owned_event(&state.db, id, user, "update this event").await?;

    let ApiJson(payload) = payload?;
    payload.validate()?;

    let event = Event::update(&state.db, id, &payload)
        .await?
        .ok_or_else(event_not_found)?;

    info!(event_id = %event.id, "event updated");
    Ok(Json(event))
}

#[instrument(skip(state))]
pub async fn delete_event(
    State(state): State<AppState>,
    user: AuthUser,
    ApiPath(id): ApiPath<Uuid>,
) -> AppResult<StatusCode> {
    owned_event(&state.db, id, user, "delete this event").await?;

    if !Event::delete(&state.db, id).await? {
        return Err(event_not_found());
    }

    info!(event_id = %id, "event deleted");
    Ok(StatusCode::NO_CONTENT)
}
