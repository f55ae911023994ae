use anyhow::anyhow;
use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use chrono::Utc;
use tracing::instrument;

use fitness_core::AppError;
use fitness_models::trainers::{
    CashParams, CashResponse, CreateTrainerDto, CreatedTrainer, Trainer,
};

use crate::middleware::auth::AuthUser;
use crate::modules::trainers::service::{TrainerService, month_bounds};
use crate::state::AppState;
use crate::validator::ValidatedJson;

#[utoipa::path(
    get,
    path = "/api/trainers",
    responses(
        (status = 200, description = "List of trainers with their access tokens", body = Vec<Trainer>),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Admin role required")
    ),
    tag = "Trainers",
    security(("bearer_auth" = []))
)]
#[instrument(skip(state))]
pub async fn get_trainers(State(state): State<AppState>) -> Result<Json<Vec<Trainer>>, AppError> {
    let trainers = TrainerService::get_trainers(&state.db).await?;
    Ok(Json(trainers))
}

#[utoipa::path(
    post,
    path = "/api/trainers",
    request_body = CreateTrainerDto,
    responses(
        (status = 201, description = "Trainer created; the token is their sign-in credential", body = CreatedTrainer),
        (status = 400, description = "Invalid input"),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Admin role required"),
        (status = 422, description = "Validation error")
    ),
    tag = "Trainers",
    security(("bearer_auth" = []))
)]
#[instrument(skip(state, dto))]
pub async fn create_trainer(
    State(state): State<AppState>,
    ValidatedJson(dto): ValidatedJson<CreateTrainerDto>,
) -> Result<(StatusCode, Json<CreatedTrainer>), AppError> {
    let created = TrainerService::create_trainer(&state.db, dto).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

#[utoipa::path(
    get,
    path = "/api/trainers/{id}",
    params(("id" = i32, Path, description = "Trainer ID")),
    responses(
        (status = 200, description = "Trainer details", body = Trainer),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Admin role required"),
        (status = 404, description = "Trainer not found")
    ),
    tag = "Trainers",
    security(("bearer_auth" = []))
)]
#[instrument(skip(state))]
pub async fn get_trainer(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<Trainer>, AppError> {
    let trainer = TrainerService::get_trainer_by_id(&state.db, id).await?;
    Ok(Json(trainer))
}

#[utoipa::path(
    delete,
    path = "/api/trainers/{id}",
    params(("id" = i32, Path, description = "Trainer ID")),
    responses(
        (status = 204, description = "Trainer deleted"),
        (status = 400, description = "Trainer still has workouts"),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Admin role required"),
        (status = 404, description = "Trainer not found")
    ),
    tag = "Trainers",
    security(("bearer_auth" = []))
)]
#[instrument(skip(state))]
pub async fn delete_trainer(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<StatusCode, AppError> {
    TrainerService::delete_trainer(&state.db, id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Trainer's share of today's revenue
#[utoipa::path(
    get,
    path = "/api/trainers/cash/day",
    params(CashParams),
    responses(
        (status = 200, description = "Half the price of the trainer's workouts today (UTC)", body = CashResponse),
        (status = 400, description = "trainer_id missing for an admin caller"),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Trainer not found")
    ),
    tag = "Trainers",
    security(("bearer_auth" = []))
)]
#[instrument(skip(state))]
pub async fn get_cash_by_day(
    State(state): State<AppState>,
    auth_user: AuthUser,
    Query(params): Query<CashParams>,
) -> Result<Json<CashResponse>, AppError> {
    let trainer_id = cash_target(&auth_user, &params)?;
    let today = Utc::now().date_naive();

    let cash = TrainerService::get_cash(&state.db, trainer_id, today, today).await?;
    Ok(Json(CashResponse { trainer_id, cash }))
}

/// Trainer's share of this month's revenue
#[utoipa::path(
    get,
    path = "/api/trainers/cash/month",
    params(CashParams),
    responses(
        (status = 200, description = "Half the price of the trainer's workouts this month (UTC)", body = CashResponse),
        (status = 400, description = "trainer_id missing for an admin caller"),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Trainer not found")
    ),
    tag = "Trainers",
    security(("bearer_auth" = []))
)]
#[instrument(skip(state))]
pub async fn get_cash_by_month(
    State(state): State<AppState>,
    auth_user: AuthUser,
    Query(params): Query<CashParams>,
) -> Result<Json<CashResponse>, AppError> {
    let trainer_id = cash_target(&auth_user, &params)?;
    let (first, last) = month_bounds(Utc::now().date_naive());

    let cash = TrainerService::get_cash(&state.db, trainer_id, first, last).await?;
    Ok(Json(CashResponse { trainer_id, cash }))
}

/// Trainers always see their own figures; admins name the trainer.
fn cash_target(auth_user: &AuthUser, params: &CashParams) -> Result<i32, AppError> {
    match auth_user.trainer_scope() {
        Some(own_id) => Ok(own_id),
        None => params
            .trainer_id
            .ok_or_else(|| AppError::bad_request(anyhow!("trainer_id is required"))),
    }
}
