//! Workout persistence.
//!
//! Every read takes a `trainer_scope`: `Some(id)` restricts results to that
//! trainer's workouts, `None` (admins) returns everything.

use anyhow::anyhow;
use chrono::NaiveDate;
use sqlx::PgPool;
use tracing::{debug, info, instrument, warn};

use fitness_core::AppError;
use fitness_models::workouts::{
    CreateWorkoutDto, UpdateWorkoutDto, Workout, WorkoutFilterParams, WorkoutRow, WorkoutStatus,
};

const SELECT_WORKOUTS: &str = r#"SELECT
        w.id,
        w.status,
        w.date,
        w.admin_id,
        c.id AS client_id,
        c.first_name AS client_first_name,
        c.last_name AS client_last_name,
        c.phone_number AS client_phone_number,
        t.id AS trainer_id,
        t.first_name AS trainer_first_name,
        t.last_name AS trainer_last_name,
        wt.id AS workout_type_id,
        wt.title AS workout_type_title,
        wt.price AS workout_type_price
       FROM workouts w
       JOIN clients c ON c.id = w.client_id
       JOIN trainers t ON t.id = w.trainer_id
       JOIN workout_types wt ON wt.id = w.workout_type_id"#;

const ORDER_WORKOUTS: &str = " ORDER BY w.date, w.id";

fn map_write_error(e: sqlx::Error) -> AppError {
    if let sqlx::Error::Database(db_err) = &e
        && db_err.is_foreign_key_violation()
    {
        warn!("Workout references a missing client, trainer or workout type");
        return AppError::bad_request(anyhow!(
            "Referenced client, trainer or workout type does not exist"
        ));
    }
    AppError::from(e)
}

pub struct WorkoutService;

impl WorkoutService {
    #[instrument(skip(db), fields(db.operation = "SELECT", db.table = "workouts"))]
    pub async fn get_workouts(
        db: &PgPool,
        filters: WorkoutFilterParams,
        trainer_scope: Option<i32>,
    ) -> Result<Vec<Workout>, AppError> {
        let trainer_id = trainer_scope.or(filters.trainer_id);
        let query = format!(
            "{} WHERE ($1::int IS NULL OR w.trainer_id = $1) AND ($2::int IS NULL OR w.client_id = $2){}",
            SELECT_WORKOUTS, ORDER_WORKOUTS
        );

        let rows = sqlx::query_as::<_, WorkoutRow>(&query)
            .bind(trainer_id)
            .bind(filters.client_id)
            .fetch_all(db)
            .await?;

        debug!(count = rows.len(), "Fetched workouts");
        Ok(rows.into_iter().map(Workout::from).collect())
    }

    /// Workouts whose UTC calendar day is `day`.
    #[instrument(skip(db), fields(db.operation = "SELECT", db.table = "workouts"))]
    pub async fn get_workouts_by_date(
        db: &PgPool,
        day: NaiveDate,
        trainer_scope: Option<i32>,
    ) -> Result<Vec<Workout>, AppError> {
        Self::get_workouts_by_interval(db, day, day, trainer_scope).await
    }

    /// Workouts whose UTC calendar day falls in `from..=to`.
    #[instrument(skip(db), fields(db.operation = "SELECT", db.table = "workouts"))]
    pub async fn get_workouts_by_interval(
        db: &PgPool,
        from: NaiveDate,
        to: NaiveDate,
        trainer_scope: Option<i32>,
    ) -> Result<Vec<Workout>, AppError> {
        if from > to {
            return Err(AppError::bad_request(anyhow!(
                "'from' must not be later than 'to'"
            )));
        }

        let query = format!(
            "{} WHERE (w.date AT TIME ZONE 'UTC')::date BETWEEN $1 AND $2 AND ($3::int IS NULL OR w.trainer_id = $3){}",
            SELECT_WORKOUTS, ORDER_WORKOUTS
        );

        let rows = sqlx::query_as::<_, WorkoutRow>(&query)
            .bind(from)
            .bind(to)
            .bind(trainer_scope)
            .fetch_all(db)
            .await?;

        debug!(count = rows.len(), "Fetched workouts in interval");
        Ok(rows.into_iter().map(Workout::from).collect())
    }

    #[instrument(skip(db), fields(db.operation = "SELECT", db.table = "workouts"))]
    pub async fn get_workout_by_id(
        db: &PgPool,
        id: i32,
        trainer_scope: Option<i32>,
    ) -> Result<Workout, AppError> {
        let query = format!(
            "{} WHERE w.id = $1 AND ($2::int IS NULL OR w.trainer_id = $2)",
            SELECT_WORKOUTS
        );

        sqlx::query_as::<_, WorkoutRow>(&query)
            .bind(id)
            .bind(trainer_scope)
            .fetch_optional(db)
            .await?
            .map(Workout::from)
            .ok_or_else(|| AppError::not_found(anyhow!("Workout not found")))
    }

    /// Schedules a workout on behalf of `admin_id`.
    #[instrument(skip(db, dto), fields(db.operation = "INSERT", db.table = "workouts"))]
    pub async fn create_workout(
        db: &PgPool,
        dto: CreateWorkoutDto,
        admin_id: i32,
    ) -> Result<i32, AppError> {
        let id = sqlx::query_scalar::<_, i32>(
            r#"INSERT INTO workouts (client_id, trainer_id, workout_type_id, admin_id, date)
               VALUES ($1, $2, $3, $4, COALESCE($5, NOW()))
               RETURNING id"#,
        )
        .bind(dto.client_id)
        .bind(dto.trainer_id)
        .bind(dto.workout_type_id)
        .bind(admin_id)
        .bind(dto.date)
        .fetch_one(db)
        .await
        .map_err(map_write_error)?;

        info!(workout.id = %id, admin.id = %admin_id, "Workout created");
        Ok(id)
    }

    #[instrument(skip(db, dto), fields(db.operation = "UPDATE", db.table = "workouts"))]
    pub async fn update_workout(
        db: &PgPool,
        id: i32,
        dto: UpdateWorkoutDto,
    ) -> Result<Workout, AppError> {
        let result = sqlx::query(
            r#"UPDATE workouts
               SET client_id = $2, trainer_id = $3, workout_type_id = $4, date = $5
               WHERE id = $1"#,
        )
        .bind(id)
        .bind(dto.client_id)
        .bind(dto.trainer_id)
        .bind(dto.workout_type_id)
        .bind(dto.date)
        .execute(db)
        .await
        .map_err(map_write_error)?;

        if result.rows_affected() == 0 {
            return Err(AppError::not_found(anyhow!("Workout not found")));
        }

        info!(workout.id = %id, "Workout updated");
        Self::get_workout_by_id(db, id, None).await
    }

    #[instrument(skip(db), fields(db.operation = "DELETE", db.table = "workouts"))]
    pub async fn delete_workout(db: &PgPool, id: i32) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM workouts WHERE id = $1")
            .bind(id)
            .execute(db)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::not_found(anyhow!("Workout not found")));
        }

        info!(workout.id = %id, "Workout deleted");
        Ok(())
    }

    #[instrument(skip(db), fields(db.operation = "UPDATE", db.table = "workouts"))]
    pub async fn change_status(
        db: &PgPool,
        id: i32,
        status: WorkoutStatus,
        trainer_scope: Option<i32>,
    ) -> Result<Workout, AppError> {
        let result = sqlx::query(
            r#"UPDATE workouts SET status = $2
               WHERE id = $1 AND ($3::int IS NULL OR trainer_id = $3)"#,
        )
        .bind(id)
        .bind(status.as_str())
        .bind(trainer_scope)
        .execute(db)
        .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::not_found(anyhow!("Workout not found")));
        }

        info!(workout.id = %id, status = %status, "Workout status changed");
        Self::get_workout_by_id(db, id, trainer_scope).await
    }
}

