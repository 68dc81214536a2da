//! JSON API handlers.
//!
//! Stateless translation layer: validate the minimal request shape, call
//! the corresponding service, map outcomes to status codes. No handler
//! mutates store state directly.

use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde::{Deserialize, Serialize};

use crate::application::newsletter::SubscribeError;
use crate::domain::entities::SubscriberRecord;

use super::error::ApiError;
use super::state::ApiState;

#[derive(Debug, Deserialize)]
pub struct SubscribeRequest {
    pub email: String,
}

#[derive(Debug, Serialize)]
pub struct SubscribeResponse {
    pub success: bool,
    pub subscriber: SubscriberRecord,
}

#[derive(Debug, Serialize)]
pub struct SubscriberCountResponse {
    pub count: u64,
}

#[derive(Debug, Serialize)]
pub struct SubscriberListResponse {
    pub subscribers: Vec<SubscriberRecord>,
    pub count: u64,
}

pub async fn list_posts(State(state): State<ApiState>) -> Result<impl IntoResponse, ApiError> {
    let posts = state
        .posts
        .list()
        .await
        .map_err(|err| ApiError::internal("Failed to fetch blog posts", err.to_string()))?;

    Ok(Json(posts))
}

pub async fn get_post(
    State(state): State<ApiState>,
    Path(slug): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let post = state
        .posts
        .find_by_slug(&slug)
        .await
        .map_err(|err| ApiError::internal("Failed to fetch blog post", err.to_string()))?;

    match post {
        Some(post) => Ok(Json(post)),
        None => Err(ApiError::not_found("Blog post not found")),
    }
}

pub async fn subscribe(
    State(state): State<ApiState>,
    payload: Result<Json<SubscribeRequest>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    // A malformed body takes the same rejection path as a malformed address.
    let Json(payload) = payload.map_err(|rejection| {
        ApiError::bad_request("Invalid email address", Some(rejection.to_string()))
    })?;

    match state.newsletter.subscribe(&payload.email).await {
        Ok(subscriber) => Ok((
            StatusCode::CREATED,
            Json(SubscribeResponse {
                success: true,
                subscriber,
            }),
        )),
        Err(SubscribeError::InvalidEmail(detail)) => {
            Err(ApiError::bad_request("Invalid email address", Some(detail)))
        }
        Err(SubscribeError::AlreadySubscribed) => {
            Err(ApiError::bad_request("Email already subscribed", None))
        }
        Err(SubscribeError::Repo(err)) => {
            Err(ApiError::internal("Failed to subscribe", err.to_string()))
        }
    }
}

pub async fn subscriber_count(
    State(state): State<ApiState>,
) -> Result<impl IntoResponse, ApiError> {
    let count = state.newsletter.count().await.map_err(|err| {
        ApiError::internal("Failed to fetch subscribers count", err.to_string())
    })?;

    Ok(Json(SubscriberCountResponse { count }))
}

pub async fn list_subscribers(
    State(state): State<ApiState>,
) -> Result<impl IntoResponse, ApiError> {
    let (subscribers, count) = state
        .newsletter
        .list_with_count()
        .await
        .map_err(|err| ApiError::internal("Failed to fetch subscribers", err.to_string()))?;

    Ok(Json(SubscriberListResponse { subscribers, count }))
}

pub async fn health() -> StatusCode {
    StatusCode::NO_CONTENT
}
