use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use tracing::instrument;

use fitness_core::AppError;
use fitness_models::admins::{Admin, AdminTypeResponse, CreateAdminDto, CreatedAdmin};

use crate::middleware::auth::AuthUser;
use crate::modules::admins::service::AdminService;
use crate::state::AppState;
use crate::validator::ValidatedJson;

#[utoipa::path(
    get,
    path = "/api/admins",
    responses(
        (status = 200, description = "List of admins", body = Vec<Admin>),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Admin role required")
    ),
    tag = "Admins",
    security(("bearer_auth" = []))
)]
#[instrument(skip(state))]
pub async fn get_admins(State(state): State<AppState>) -> Result<Json<Vec<Admin>>, AppError> {
    let admins = AdminService::get_admins(&state.db).await?;
    Ok(Json(admins))
}

#[utoipa::path(
    post,
    path = "/api/admins",
    request_body = CreateAdminDto,
    responses(
        (status = 201, description = "Admin created", body = CreatedAdmin),
        (status = 400, description = "Invalid input or login already taken"),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Admin role required"),
        (status = 422, description = "Validation error")
    ),
    tag = "Admins",
    security(("bearer_auth" = []))
)]
#[instrument(skip(state, dto))]
pub async fn create_admin(
    State(state): State<AppState>,
    ValidatedJson(dto): ValidatedJson<CreateAdminDto>,
) -> Result<(StatusCode, Json<CreatedAdmin>), AppError> {
    let id = AdminService::create_admin(&state.db, dto).await?;
    Ok((StatusCode::CREATED, Json(CreatedAdmin { id })))
}

/// Whether the calling admin is a super admin
#[utoipa::path(
    get,
    path = "/api/admins/type",
    responses(
        (status = 200, description = "Admin type of the caller", body = AdminTypeResponse),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Admin role required"),
        (status = 404, description = "Caller no longer exists")
    ),
    tag = "Admins",
    security(("bearer_auth" = []))
)]
#[instrument(skip(state))]
pub async fn get_admin_type(
    State(state): State<AppState>,
    auth_user: AuthUser,
) -> Result<Json<AdminTypeResponse>, AppError> {
    let is_super = AdminService::is_super(&state.db, auth_user.user_id()).await?;
    Ok(Json(AdminTypeResponse { is_super }))
}

#[utoipa::path(
    get,
    path = "/api/admins/{id}",
    params(("id" = i32, Path, description = "Admin ID")),
    responses(
        (status = 200, description = "Admin details", body = Admin),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Admin role required"),
        (status = 404, description = "Admin not found")
    ),
    tag = "Admins",
    security(("bearer_auth" = []))
)]
#[instrument(skip(state))]
pub async fn get_admin(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<Admin>, AppError> {
    let admin = AdminService::get_admin_by_id(&state.db, id).await?;
    Ok(Json(admin))
}

#[utoipa::path(
    delete,
    path = "/api/admins/{id}",
    params(("id" = i32, Path, description = "Admin ID")),
    responses(
        (status = 204, description = "Admin deleted"),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Admin role required"),
        (status = 404, description = "Admin not found")
    ),
    tag = "Admins",
    security(("bearer_auth" = []))
)]
#[instrument(skip(state))]
pub async fn delete_admin(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<StatusCode, AppError> {
    AdminService::delete_admin(&state.db, id).await?;
    Ok(StatusCode::NO_CONTENT)
}
