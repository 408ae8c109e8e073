//! Handlers for activity group endpoints.

use axum::{
    Json,
    extract::State,
    http::StatusCode,
};

use crate::api::dto::activity_group::{
    ActivityGroupItem, CreateActivityGroupRequest, UpdateActivityGroupRequest,
};
use crate::api::dto::envelope::{DeletedResource, Envelope};
use crate::api::extract::{JsonPayload, ListQuery, PathId};
use crate::error::AppError;
use crate::state::AppState;

/// Lists all activity groups.
///
/// # Endpoint
///
/// `GET /activity-groups`
///
/// # Query Parameters
///
/// - `location` (optional): `true` adds the location placeholder to the envelope
///
/// # Errors
///
/// Returns 404 if the table is empty.
pub async fn list_activity_groups_handler(
    State(state): State<AppState>,
    ListQuery(params): ListQuery,
) -> Result<Json<Envelope<Vec<ActivityGroupItem>>>, AppError> {
    let groups = state.activity_group_service.list_activity_groups().await?;

    let items = groups.into_iter().map(ActivityGroupItem::from).collect();

    Ok(Json(
        Envelope::success("Success", items).with_location(params.include_location()),
    ))
}

/// Fetches one activity group.
///
/// # Endpoint
///
/// `GET /activity-groups/{id}`
///
/// # Errors
///
/// Returns 404 if no group has this id.
pub async fn get_activity_group_handler(
    path: PathId,
    State(state): State<AppState>,
) -> Result<Json<Envelope<ActivityGroupItem>>, AppError> {
    let id = path.value.ok_or_else(|| AppError::not_found("No data found"))?;

    let group = state.activity_group_service.get_activity_group(id).await?;

    Ok(Json(Envelope::success("Success", group.into())))
}

/// Creates an activity group.
///
/// # Endpoint
///
/// `POST /activity-groups`
///
/// # Request Body
///
/// ```json
/// { "title": "Sprint Planning", "email": "a@b.com" }
/// ```
///
/// # Errors
///
/// Returns 400 if the content type is not JSON or a field is missing.
pub async fn create_activity_group_handler(
    State(state): State<AppState>,
    JsonPayload(payload): JsonPayload<CreateActivityGroupRequest>,
) -> Result<(StatusCode, Json<Envelope<ActivityGroupItem>>), AppError> {
    let (title, email) = payload.into_parts()?;

    let group = state
        .activity_group_service
        .create_activity_group(title, email)
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(Envelope::success(
            "Activity group added successfully",
            group.into(),
        )),
    ))
}

/// Changes the title of an activity group.
///
/// # Endpoint
///
/// `PATCH /activity-groups/{id}`
///
/// `email` and `createdAt` are echoed from the stored row; `updatedAt`
/// repeats `createdAt`.
///
/// # Errors
///
/// Returns 400 if the title is missing.
/// Returns 404 if no group has this id.
pub async fn update_activity_group_handler(
    path: PathId,
    State(state): State<AppState>,
    JsonPayload(payload): JsonPayload<UpdateActivityGroupRequest>,
) -> Result<Json<Envelope<ActivityGroupItem>>, AppError> {
    let title = payload.into_title()?;
    let id = path
        .value
        .ok_or_else(|| AppError::update_target_missing("Activity group not found."))?;

    let group = state.activity_group_service.update_title(id, title).await?;

    Ok(Json(Envelope::success("Success", group.into())))
}

/// Deletes an activity group.
///
/// # Endpoint
///
/// `DELETE /activity-groups/{id}`
///
/// # Errors
///
/// Returns 404 if no group has this id.
pub async fn delete_activity_group_handler(
    path: PathId,
    State(state): State<AppState>,
) -> Result<Json<Envelope<DeletedResource>>, AppError> {
    let id = path.value.ok_or_else(|| {
        AppError::not_found(format!("Activity group with ID {} Not Found", path.raw))
    })?;

    state.activity_group_service.delete_activity_group(id).await?;

    Ok(Json(Envelope::success(
        format!("Activity group with ID {} Deleted", id),
        DeletedResource { id },
    )))
}
