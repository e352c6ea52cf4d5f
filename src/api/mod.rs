use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::{StatusCode, header};
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::Router;
use chrono::Utc;
use serde_json::Value;
use tower_http::trace::TraceLayer;
use tracing::{debug, info, warn};

use crate::error::AppError;
use crate::hateoas::{TodoItemCollectionResponse, TodoItemResponse};
use crate::models::*;
use crate::state::AppState;
use crate::timeframe::{Timeframe, start_of_day};
use crate::validation;

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/todos", get(list_todos).post(create_todo))
        .route(
            "/todos/{id}",
            get(get_todo).patch(update_todo).delete(delete_todo),
        )
        .route("/todos/{id}/completion", post(set_completion_percentage))
        .route("/todos/{id}/complete", post(set_complete))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn health(State(state): State<AppState>) -> Result<StatusCode, AppError> {
    state.store.ping().await?;
    Ok(StatusCode::OK)
}

async fn create_todo(
    State(state): State<AppState>,
    payload: Result<Json<TodoItemInput>, JsonRejection>,
) -> Result<Response, AppError> {
    let Json(input) = payload?;

    if let Err(errors) = validation::validate_new(&input) {
        warn!("rejected todo: {}", errors.join(", "));
        return Err(AppError::Validation(errors));
    }

    let todo = state.store.insert(NewTodoItem::from_input(input)).await?;
    info!("created todo {}", todo.id);

    let location = format!("/todos/{}", todo.id);
    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(TodoItemResponse::new(todo)),
    )
        .into_response())
}

async fn list_todos(
    State(state): State<AppState>,
) -> Result<Json<TodoItemCollectionResponse>, AppError> {
    let todos = state.store.fetch_all().await?;
    Ok(Json(TodoItemCollectionResponse::new(todos)))
}

/// `/todos/{id}` is shared by numeric ids and alphabetic timeframe aliases.
async fn get_todo(
    State(state): State<AppState>,
    Path(key): Path<String>,
) -> Result<Response, AppError> {
    if let Ok(id) = key.parse::<i64>() {
        return get_todo_by_id(&state, id).await.map(IntoResponse::into_response);
    }

    if !key.is_empty() && key.chars().all(|c| c.is_ascii_alphabetic()) {
        return get_todos_by_timeframe(&state, &key)
            .await
            .map(IntoResponse::into_response);
    }

    Err(AppError::NotFound)
}

async fn get_todo_by_id(state: &AppState, id: i64) -> Result<Json<TodoItemResponse>, AppError> {
    let todo = state
        .store
        .find_by_id(id)
        .await?
        .ok_or(AppError::NotFound)?;
    Ok(Json(TodoItemResponse::new(todo)))
}

async fn get_todos_by_timeframe(
    state: &AppState,
    token: &str,
) -> Result<Json<TodoItemCollectionResponse>, AppError> {
    let timeframe: Timeframe = token.parse()?;
    let today = start_of_day(Utc::now());

    let (from, to) = timeframe.window(today);
    let candidates = state.store.fetch_expiring_between(from, to).await?;
    let todos = timeframe.filter(candidates, today);
    debug!("{} todos match timeframe {}", todos.len(), timeframe);
    Ok(Json(TodoItemCollectionResponse::new(todos)))
}

async fn update_todo(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: Result<Json<TodoItemInput>, JsonRejection>,
) -> Result<StatusCode, AppError> {
    let id = parse_id(&id)?;
    let Json(input) = payload?;

    validation::validate_patch(&input).map_err(AppError::Validation)?;

    let mut todo = state
        .store
        .find_by_id(id)
        .await?
        .ok_or(AppError::NotFound)?;

    todo.merge(input);
    save(&state, &todo).await?;
    info!("updated todo {}", id);
    Ok(StatusCode::NO_CONTENT)
}

async fn set_completion_percentage(
    State(state): State<AppState>,
    Path(id): Path<String>,
    body: Result<Json<Value>, JsonRejection>,
) -> Result<StatusCode, AppError> {
    let id = parse_id(&id)?;
    let mut todo = state
        .store
        .find_by_id(id)
        .await?
        .ok_or(AppError::NotFound)?;

    let Json(body) = body?;
    todo.completion_percentage = extract_completion_percentage(&body)?;

    save(&state, &todo).await?;
    info!("todo {} is {}% complete", id, todo.completion_percentage);
    Ok(StatusCode::NO_CONTENT)
}

async fn set_complete(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, AppError> {
    let id = parse_id(&id)?;
    let mut todo = state
        .store
        .find_by_id(id)
        .await?
        .ok_or(AppError::NotFound)?;

    todo.completion_percentage = 100;
    save(&state, &todo).await?;
    info!("todo {} marked complete", id);
    Ok(StatusCode::NO_CONTENT)
}

async fn delete_todo(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, AppError> {
    let id = parse_id(&id)?;
    if state.store.delete(id).await? {
        info!("deleted todo {}", id);
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::NotFound)
    }
}

fn parse_id(key: &str) -> Result<i64, AppError> {
    key.parse().map_err(|_| AppError::NotFound)
}

/// A row that vanished between lookup and write reads as not found.
async fn save(state: &AppState, todo: &TodoItem) -> Result<(), AppError> {
    if state.store.update(todo).await? {
        Ok(())
    } else {
        Err(AppError::NotFound)
    }
}
