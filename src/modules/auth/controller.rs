use axum::{Json, extract::State};
use serde::Serialize;
use tracing::instrument;
use utoipa::ToSchema;

use fitness_core::AppError;
use fitness_models::auth::{AdminSignInDto, TokenResponse, TrainerSignInDto};

use crate::modules::auth::service::AuthService;
use crate::state::AppState;
use crate::validator::ValidatedJson;

#[derive(Serialize, ToSchema)]
pub struct ErrorResponse {
    pub error: String,
}

/// Sign in as an admin with login and password
#[utoipa::path(
    post,
    path = "/api/auth/admin/sign-in",
    request_body = AdminSignInDto,
    responses(
        (status = 200, description = "Token issued", body = TokenResponse),
        (status = 400, description = "Malformed request body", body = ErrorResponse),
        (status = 401, description = "Unknown login or wrong password", body = ErrorResponse),
        (status = 422, description = "Validation error", body = ErrorResponse)
    ),
    tag = "Authentication"
)]
#[instrument(skip_all)]
pub async fn admin_sign_in(
    State(state): State<AppState>,
    ValidatedJson(dto): ValidatedJson<AdminSignInDto>,
) -> Result<Json<TokenResponse>, AppError> {
    let response = AuthService::sign_in_admin(&state.db, &state.token_codec, dto).await?;
    Ok(Json(response))
}

/// Sign in as a trainer with the access token issued at creation
#[utoipa::path(
    post,
    path = "/api/auth/trainer/sign-in",
    request_body = TrainerSignInDto,
    responses(
        (status = 200, description = "Token issued", body = TokenResponse),
        (status = 400, description = "Malformed request body", body = ErrorResponse),
        (status = 401, description = "Unknown trainer token", body = ErrorResponse)
    ),
    tag = "Authentication"
)]
#[instrument(skip_all)]
pub async fn trainer_sign_in(
    State(state): State<AppState>,
    ValidatedJson(dto): ValidatedJson<TrainerSignInDto>,
) -> Result<Json<TokenResponse>, AppError> {
    let response = AuthService::sign_in_trainer(&state.db, &state.token_codec, dto).await?;
    Ok(Json(response))
}
