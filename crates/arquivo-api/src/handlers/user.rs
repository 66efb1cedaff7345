//! User lookup handler.

use axum::Json;
use axum::extract::{Query, State};

use arquivo_core::error::AppError;
use arquivo_entity::user::User;

use crate::dto::request::UserLookupQuery;
use crate::dto::response::ApiResponse;
use crate::state::AppState;

/// GET /api/users?email=...
pub async fn get_by_email(
    State(state): State<AppState>,
    Query(query): Query<UserLookupQuery>,
) -> Result<Json<ApiResponse<User>>, AppError> {
    let email = query
        .email
        .ok_or_else(|| AppError::validation("email query parameter is required"))?;

    let user = state.user_service.get_by_email(&email).await?;
    Ok(Json(ApiResponse::ok(user)))
}
