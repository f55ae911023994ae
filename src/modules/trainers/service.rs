use anyhow::anyhow;
use chrono::{Datelike, NaiveDate};
use sqlx::PgPool;
use tracing::{debug, info, instrument, warn};
use uuid::Uuid;

use fitness_core::AppError;
use fitness_models::trainers::{CreateTrainerDto, CreatedTrainer, Trainer};

pub struct TrainerService;

impl TrainerService {
    #[instrument(skip(db), fields(db.operation = "SELECT", db.table = "trainers"))]
    pub async fn get_trainers(db: &PgPool) -> Result<Vec<Trainer>, AppError> {
        let trainers = sqlx::query_as::<_, Trainer>(
            "SELECT id, token, first_name, last_name FROM trainers ORDER BY id",
        )
        .fetch_all(db)
        .await?;

        debug!(count = trainers.len(), "Fetched trainers");
        Ok(trainers)
    }

    #[instrument(skip(db), fields(db.operation = "SELECT", db.table = "trainers"))]
    pub async fn get_trainer_by_id(db: &PgPool, id: i32) -> Result<Trainer, AppError> {
        sqlx::query_as::<_, Trainer>(
            "SELECT id, token, first_name, last_name FROM trainers WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(db)
        .await?
        .ok_or_else(|| AppError::not_found(anyhow!("Trainer not found")))
    }

    /// Creates a trainer with a fresh opaque access token.
    #[instrument(skip(db, dto), fields(db.operation = "INSERT", db.table = "trainers"))]
    pub async fn create_trainer(
        db: &PgPool,
        dto: CreateTrainerDto,
    ) -> Result<CreatedTrainer, AppError> {
        let created = sqlx::query_as::<_, CreatedTrainer>(
            r#"INSERT INTO trainers (token, first_name, last_name)
               VALUES ($1, $2, $3)
               RETURNING id, token"#,
        )
        .bind(Uuid::new_v4().to_string())
        .bind(&dto.first_name)
        .bind(&dto.last_name)
        .fetch_one(db)
        .await?;

        info!(trainer.id = %created.id, "Trainer created");
        Ok(created)
    }

    #[instrument(skip(db), fields(db.operation = "DELETE", db.table = "trainers"))]
    pub async fn delete_trainer(db: &PgPool, id: i32) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM trainers WHERE id = $1")
            .bind(id)
            .execute(db)
            .await
            .map_err(|e| {
                if let sqlx::Error::Database(db_err) = &e
                    && db_err.is_foreign_key_violation()
                {
                    warn!(trainer.id = %id, "Trainer still has workouts");
                    return AppError::bad_request(anyhow!(
                        "Trainer has workouts and cannot be deleted"
                    ));
                }
                AppError::from(e)
            })?;

        if result.rows_affected() == 0 {
            return Err(AppError::not_found(anyhow!("Trainer not found")));
        }

        info!(trainer.id = %id, "Trainer deleted");
        Ok(())
    }

    /// The trainer's share of revenue for workouts dated `from..=to` (UTC days).
    #[instrument(skip(db), fields(db.operation = "SELECT", db.table = "workouts"))]
    pub async fn get_cash(
        db: &PgPool,
        trainer_id: i32,
        from: NaiveDate,
        to: NaiveDate,
    ) -> Result<i64, AppError> {
        let exists =
            sqlx::query_scalar::<_, bool>("SELECT EXISTS(SELECT 1 FROM trainers WHERE id = $1)")
                .bind(trainer_id)
                .fetch_one(db)
                .await?;
        if !exists {
            return Err(AppError::not_found(anyhow!("Trainer not found")));
        }

        let cash = sqlx::query_scalar::<_, i64>(
            r#"SELECT COALESCE(SUM(wt.price), 0) / 2
               FROM workouts w
               JOIN workout_types wt ON wt.id = w.workout_type_id
               WHERE w.trainer_id = $1
                 AND (w.date AT TIME ZONE 'UTC')::date BETWEEN $2 AND $3"#,
        )
        .bind(trainer_id)
        .bind(from)
        .bind(to)
        .fetch_one(db)
        .await?;

        debug!(trainer.id = %trainer_id, cash, "Computed trainer cash");
        Ok(cash)
    }
}

/// First and last calendar day of the month containing `day`.
pub fn month_bounds(day: NaiveDate) -> (NaiveDate, NaiveDate) {
    let first = day.with_day(1).unwrap_or(day);
    let next_month = if first.month() == 12 {
        NaiveDate::from_ymd_opt(first.year() + 1, 1, 1)
    } else {
        NaiveDate::from_ymd_opt(first.year(), first.month() + 1, 1)
    };
    let last = next_month.and_then(|d| d.pred_opt()).unwrap_or(first);

    (first, last)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_month_bounds_mid_month() {
        assert_eq!(month_bounds(date(2024, 4, 17)), (date(2024, 4, 1), date(2024, 4, 30)));
    }

    #[test]
    fn test_month_bounds_leap_february() {
        assert_eq!(month_bounds(date(2024, 2, 1)), (date(2024, 2, 1), date(2024, 2, 29)));
        assert_eq!(month_bounds(date(2023, 2, 28)), (date(2023, 2, 1), date(2023, 2, 28)));
    }

    #[test]
    fn test_month_bounds_december() {
        assert_eq!(month_bounds(date(2024, 12, 31)), (date(2024, 12, 1), date(2024, 12, 31)));
    }
}
