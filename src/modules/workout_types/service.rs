use anyhow::anyhow;
use sqlx::PgPool;
use tracing::{debug, info, instrument, warn};

use fitness_core::AppError;
use fitness_models::workout_types::{WorkoutType, WorkoutTypeDto};

pub struct WorkoutTypeService;

impl WorkoutTypeService {
    #[instrument(skip(db), fields(db.operation = "SELECT", db.table = "workout_types"))]
    pub async fn get_workout_types(db: &PgPool) -> Result<Vec<WorkoutType>, AppError> {
        let workout_types = sqlx::query_as::<_, WorkoutType>(
            "SELECT id, title, price FROM workout_types ORDER BY id",
        )
        .fetch_all(db)
        .await?;

        debug!(count = workout_types.len(), "Fetched workout types");
        Ok(workout_types)
    }

    #[instrument(skip(db), fields(db.operation = "SELECT", db.table = "workout_types"))]
    pub async fn get_workout_type_by_id(db: &PgPool, id: i32) -> Result<WorkoutType, AppError> {
        sqlx::query_as::<_, WorkoutType>("SELECT id, title, price FROM workout_types WHERE id = $1")
            .bind(id)
            .fetch_optional(db)
            .await?
            .ok_or_else(|| AppError::not_found(anyhow!("Workout type not found")))
    }

    #[instrument(skip(db, dto), fields(db.operation = "INSERT", db.table = "workout_types"))]
    pub async fn create_workout_type(db: &PgPool, dto: WorkoutTypeDto) -> Result<i32, AppError> {
        let id = sqlx::query_scalar::<_, i32>(
            "INSERT INTO workout_types (title, price) VALUES ($1, $2) RETURNING id",
        )
        .bind(&dto.title)
        .bind(dto.price)
        .fetch_one(db)
        .await?;

        info!(workout_type.id = %id, "Workout type created");
        Ok(id)
    }

    #[instrument(skip(db, dto), fields(db.operation = "UPDATE", db.table = "workout_types"))]
    pub async fn update_workout_type(
        db: &PgPool,
        id: i32,
        dto: WorkoutTypeDto,
    ) -> Result<WorkoutType, AppError> {
        let workout_type = sqlx::query_as::<_, WorkoutType>(
            r#"UPDATE workout_types SET title = $2, price = $3
               WHERE id = $1
               RETURNING id, title, price"#,
        )
        .bind(id)
        .bind(&dto.title)
        .bind(dto.price)
        .fetch_optional(db)
        .await?
        .ok_or_else(|| AppError::not_found(anyhow!("Workout type not found")))?;

        info!(workout_type.id = %id, "Workout type updated");
        Ok(workout_type)
    }

    #[instrument(skip(db), fields(db.operation = "DELETE", db.table = "workout_types"))]
    pub async fn delete_workout_type(db: &PgPool, id: i32) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM workout_types WHERE id = $1")
            .bind(id)
            .execute(db)
            .await
            .map_err(|e| {
                if let sqlx::Error::Database(db_err) = &e
                    && db_err.is_foreign_key_violation()
                {
                    warn!(workout_type.id = %id, "Workout type still in use");
                    return AppError::bad_request(anyhow!(
                        "Workout type is used by workouts and cannot be deleted"
                    ));
                }
                AppError::from(e)
            })?;

        if result.rows_affected() == 0 {
            return Err(AppError::not_found(anyhow!("Workout type not found")));
        }

        info!(workout_type.id = %id, "Workout type deleted");
        Ok(())
    }
}
