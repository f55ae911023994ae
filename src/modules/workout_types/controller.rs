use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use tracing::instrument;

use fitness_core::AppError;
use fitness_models::workout_types::{CreatedWorkoutType, WorkoutType, WorkoutTypeDto};

use crate::modules::workout_types::service::WorkoutTypeService;
use crate::state::AppState;
use crate::validator::ValidatedJson;

#[utoipa::path(
    get,
    path = "/api/workout-types",
    responses(
        (status = 200, description = "List of workout types", body = Vec<WorkoutType>),
        (status = 401, description = "Unauthorized")
    ),
    tag = "Workout Types",
    security(("bearer_auth" = []))
)]
#[instrument(skip(state))]
pub async fn get_workout_types(
    State(state): State<AppState>,
) -> Result<Json<Vec<WorkoutType>>, AppError> {
    let workout_types = WorkoutTypeService::get_workout_types(&state.db).await?;
    Ok(Json(workout_types))
}

#[utoipa::path(
    post,
    path = "/api/workout-types",
    request_body = WorkoutTypeDto,
    responses(
        (status = 201, description = "Workout type created", body = CreatedWorkoutType),
        (status = 400, description = "Invalid input"),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Admin role required"),
        (status = 422, description = "Validation error")
    ),
    tag = "Workout Types",
    security(("bearer_auth" = []))
)]
#[instrument(skip(state, dto))]
pub async fn create_workout_type(
    State(state): State<AppState>,
    ValidatedJson(dto): ValidatedJson<WorkoutTypeDto>,
) -> Result<(StatusCode, Json<CreatedWorkoutType>), AppError> {
    let id = WorkoutTypeService::create_workout_type(&state.db, dto).await?;
    Ok((StatusCode::CREATED, Json(CreatedWorkoutType { id })))
}

#[utoipa::path(
    get,
    path = "/api/workout-types/{id}",
    params(("id" = i32, Path, description = "Workout type ID")),
    responses(
        (status = 200, description = "Workout type details", body = WorkoutType),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Workout type not found")
    ),
    tag = "Workout Types",
    security(("bearer_auth" = []))
)]
#[instrument(skip(state))]
pub async fn get_workout_type(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<WorkoutType>, AppError> {
    let workout_type = WorkoutTypeService::get_workout_type_by_id(&state.db, id).await?;
    Ok(Json(workout_type))
}

#[utoipa::path(
    put,
    path = "/api/workout-types/{id}",
    params(("id" = i32, Path, description = "Workout type ID")),
    request_body = WorkoutTypeDto,
    responses(
        (status = 200, description = "Workout type updated", body = WorkoutType),
        (status = 400, description = "Invalid input"),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Admin role required"),
        (status = 404, description = "Workout type not found"),
        (status = 422, description = "Validation error")
    ),
    tag = "Workout Types",
    security(("bearer_auth" = []))
)]
#[instrument(skip(state, dto))]
pub async fn update_workout_type(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    ValidatedJson(dto): ValidatedJson<WorkoutTypeDto>,
) -> Result<Json<WorkoutType>, AppError> {
    let workout_type = WorkoutTypeService::update_workout_type(&state.db, id, dto).await?;
    Ok(Json(workout_type))
}

#[utoipa::path(
    delete,
    path = "/api/workout-types/{id}",
    params(("id" = i32, Path, description = "Workout type ID")),
    responses(
        (status = 204, description = "Workout type deleted"),
        (status = 400, description = "Workout type still used by workouts"),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Admin role required"),
        (status = 404, description = "Workout type not found")
    ),
    tag = "Workout Types",
    security(("bearer_auth" = []))
)]
#[instrument(skip(state))]
pub async fn delete_workout_type(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<StatusCode, AppError> {
    WorkoutTypeService::delete_workout_type(&state.db, id).await?;
    Ok(StatusCode::NO_CONTENT)
}
