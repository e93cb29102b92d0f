use crate::error::AppError;
use crate::extract::{ValidPath, ValidQuery};
use crate::models::{RenameQuery, RenameUserResponse, UserPath};
use crate::state::AppState;
use axum::{extract::State, Json};
use types::user::User;

/// GET /users/{user_id}
///
/// Every stored user with this id; an empty list when there is none.
pub async fn get_user(
    State(state): State<AppState>,
    ValidPath(path): ValidPath<UserPath>,
) -> Json<Vec<User>> {
    Json(state.store.find_users_by_id(path.user_id))
}

/// POST /users/{user_id}?new_name=...
pub async fn change_user_name(
    State(state): State<AppState>,
    ValidPath(path): ValidPath<UserPath>,
    ValidQuery(query): ValidQuery<RenameQuery>,
) -> Result<Json<RenameUserResponse>, AppError> {
    let user = state.store.rename_user(path.user_id, query.new_name)?;
    Ok(Json(RenameUserResponse::ok(user)))
}
