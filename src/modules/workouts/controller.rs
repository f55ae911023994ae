use anyhow::anyhow;
use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use chrono::NaiveDate;
use tracing::instrument;

use fitness_core::AppError;
use fitness_models::workouts::{
    ByDateParams, ByIntervalParams, ChangeStatusDto, CreateWorkoutDto, CreatedWorkout,
    UpdateWorkoutDto, Workout, WorkoutFilterParams, parse_day,
};

use crate::middleware::auth::AuthUser;
use crate::modules::workouts::service::WorkoutService;
use crate::state::AppState;
use crate::validator::ValidatedJson;

fn day_param(value: &str) -> Result<NaiveDate, AppError> {
    parse_day(value).map_err(|e| AppError::bad_request(anyhow!(e)))
}

#[utoipa::path(
    get,
    path = "/api/workouts",
    params(WorkoutFilterParams),
    responses(
        (status = 200, description = "Workouts, limited to the caller's own for trainers", body = Vec<Workout>),
        (status = 401, description = "Unauthorized")
    ),
    tag = "Workouts",
    security(("bearer_auth" = []))
)]
#[instrument(skip(state))]
pub async fn get_workouts(
    State(state): State<AppState>,
    auth_user: AuthUser,
    Query(filters): Query<WorkoutFilterParams>,
) -> Result<Json<Vec<Workout>>, AppError> {
    let workouts =
        WorkoutService::get_workouts(&state.db, filters, auth_user.trainer_scope()).await?;
    Ok(Json(workouts))
}

#[utoipa::path(
    post,
    path = "/api/workouts",
    request_body = CreateWorkoutDto,
    responses(
        (status = 201, description = "Workout scheduled", body = CreatedWorkout),
        (status = 400, description = "Invalid input or unknown client, trainer or workout type"),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Admin role required"),
        (status = 422, description = "Validation error")
    ),
    tag = "Workouts",
    security(("bearer_auth" = []))
)]
#[instrument(skip(state, dto))]
pub async fn create_workout(
    State(state): State<AppState>,
    auth_user: AuthUser,
    ValidatedJson(dto): ValidatedJson<CreateWorkoutDto>,
) -> Result<(StatusCode, Json<CreatedWorkout>), AppError> {
    let id = WorkoutService::create_workout(&state.db, dto, auth_user.user_id()).await?;
    Ok((StatusCode::CREATED, Json(CreatedWorkout { id })))
}

#[utoipa::path(
    get,
    path = "/api/workouts/by-date",
    params(ByDateParams),
    responses(
        (status = 200, description = "Workouts on the given UTC day", body = Vec<Workout>),
        (status = 400, description = "Unparseable date"),
        (status = 401, description = "Unauthorized")
    ),
    tag = "Workouts",
    security(("bearer_auth" = []))
)]
#[instrument(skip(state))]
pub async fn get_workouts_by_date(
    State(state): State<AppState>,
    auth_user: AuthUser,
    Query(params): Query<ByDateParams>,
) -> Result<Json<Vec<Workout>>, AppError> {
    let day = day_param(&params.date)?;

    let workouts =
        WorkoutService::get_workouts_by_date(&state.db, day, auth_user.trainer_scope()).await?;
    Ok(Json(workouts))
}

#[utoipa::path(
    get,
    path = "/api/workouts/by-interval",
    params(ByIntervalParams),
    responses(
        (status = 200, description = "Workouts between two UTC days, inclusive", body = Vec<Workout>),
        (status = 400, description = "Unparseable dates or 'from' after 'to'"),
        (status = 401, description = "Unauthorized")
    ),
    tag = "Workouts",
    security(("bearer_auth" = []))
)]
#[instrument(skip(state))]
pub async fn get_workouts_by_interval(
    State(state): State<AppState>,
    auth_user: AuthUser,
    Query(params): Query<ByIntervalParams>,
) -> Result<Json<Vec<Workout>>, AppError> {
    let from = day_param(&params.from)?;
    let to = day_param(&params.to)?;

    let workouts =
        WorkoutService::get_workouts_by_interval(&state.db, from, to, auth_user.trainer_scope())
            .await?;
    Ok(Json(workouts))
}

#[utoipa::path(
    get,
    path = "/api/workouts/{id}",
    params(("id" = i32, Path, description = "Workout ID")),
    responses(
        (status = 200, description = "Workout details", body = Workout),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Workout not found or not the caller's")
    ),
    tag = "Workouts",
    security(("bearer_auth" = []))
)]
#[instrument(skip(state))]
pub async fn get_workout(
    State(state): State<AppState>,
    auth_user: AuthUser,
    Path(id): Path<i32>,
) -> Result<Json<Workout>, AppError> {
    let workout =
        WorkoutService::get_workout_by_id(&state.db, id, auth_user.trainer_scope()).await?;
    Ok(Json(workout))
}

#[utoipa::path(
    put,
    path = "/api/workouts/{id}",
    params(("id" = i32, Path, description = "Workout ID")),
    request_body = UpdateWorkoutDto,
    responses(
        (status = 200, description = "Workout updated", body = Workout),
        (status = 400, description = "Invalid input or unknown client, trainer or workout type"),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Admin role required"),
        (status = 404, description = "Workout not found"),
        (status = 422, description = "Validation error")
    ),
    tag = "Workouts",
    security(("bearer_auth" = []))
)]
#[instrument(skip(state, dto))]
pub async fn update_workout(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    ValidatedJson(dto): ValidatedJson<UpdateWorkoutDto>,
) -> Result<Json<Workout>, AppError> {
    let workout = WorkoutService::update_workout(&state.db, id, dto).await?;
    Ok(Json(workout))
}

#[utoipa::path(
    delete,
    path = "/api/workouts/{id}",
    params(("id" = i32, Path, description = "Workout ID")),
    responses(
        (status = 204, description = "Workout deleted"),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Admin role required"),
        (status = 404, description = "Workout not found")
    ),
    tag = "Workouts",
    security(("bearer_auth" = []))
)]
#[instrument(skip(state))]
pub async fn delete_workout(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<StatusCode, AppError> {
    WorkoutService::delete_workout(&state.db, id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Mark a workout scheduled, done or cancelled
#[utoipa::path(
    patch,
    path = "/api/workouts/{id}/status",
    params(("id" = i32, Path, description = "Workout ID")),
    request_body = ChangeStatusDto,
    responses(
        (status = 200, description = "Status changed", body = Workout),
        (status = 400, description = "Unknown status"),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Workout not found or not the caller's")
    ),
    tag = "Workouts",
    security(("bearer_auth" = []))
)]
#[instrument(skip(state, dto))]
pub async fn change_workout_status(
    State(state): State<AppState>,
    auth_user: AuthUser,
    Path(id): Path<i32>,
    ValidatedJson(dto): ValidatedJson<ChangeStatusDto>,
) -> Result<Json<Workout>, AppError> {
    let workout =
        WorkoutService::change_status(&state.db, id, dto.status, auth_user.trainer_scope())
            .await?;
    Ok(Json(workout))
}
