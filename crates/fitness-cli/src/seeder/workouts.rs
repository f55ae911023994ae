//! Workout type and workout seeding.

use std::time::Instant;

use anyhow::{Result, bail};
use chrono::{Duration, Utc};
use fake::Fake;
use rayon::prelude::*;
use sqlx::{PgPool, Postgres, QueryBuilder};

use super::BATCH_SIZE;
use super::models::{WorkoutSeed, WorkoutTypeSeed};

const DISCIPLINES: &[&str] = &[
    "Yoga", "Boxing", "Pilates", "CrossFit", "Stretching", "Spinning", "Swimming", "Kettlebell",
];
const LEVELS: &[&str] = &["Intro", "Group", "Personal", "Advanced"];

/// Widest accepted spread either side of today, in days.
pub const MAX_SPREAD_DAYS: i64 = 3650;

pub fn generate_workout_types(count: usize) -> Vec<WorkoutTypeSeed> {
    (0..count)
        .into_par_iter()
        .map(|i| WorkoutTypeSeed {
            title: format!(
                "{} {}",
                LEVELS[(0..LEVELS.len()).fake::<usize>()],
                DISCIPLINES[i % DISCIPLINES.len()]
            ),
            // Prices in steps of 50
            price: (10..80).fake::<i32>() * 50,
        })
        .collect()
}

/// Generates workouts over random existing clients, trainers and types.
///
/// Past workouts are mostly done; future ones are scheduled. `spread_days` is
/// clamped to `1..=MAX_SPREAD_DAYS`.
pub fn generate_workouts(
    count: usize,
    client_ids: &[i32],
    trainer_ids: &[i32],
    workout_type_ids: &[i32],
    spread_days: i64,
) -> Vec<WorkoutSeed> {
    let now = Utc::now();
    let spread_minutes = spread_days.clamp(1, MAX_SPREAD_DAYS) * 24 * 60;

    (0..count)
        .into_par_iter()
        .map(|_| {
            let offset_minutes = (-spread_minutes..spread_minutes).fake::<i64>();
            let date = now + Duration::minutes(offset_minutes);
            let status = if date > now {
                "scheduled"
            } else if (0..10).fake::<u8>() == 0 {
                "cancelled"
            } else {
                "done"
            };

            WorkoutSeed {
                client_id: pick(client_ids),
                trainer_id: pick(trainer_ids),
                workout_type_id: pick(workout_type_ids),
                status,
                date,
            }
        })
        .collect()
}

fn pick(ids: &[i32]) -> i32 {
    ids[(0..ids.len()).fake::<usize>()]
}

pub async fn seed_workout_types(db: &PgPool, count: usize) -> Result<Vec<i32>> {
    let start_time = Instant::now();
    println!("🏷️  Seeding {} workout types...", count);

    let workout_types = generate_workout_types(count);
    let mut tx = db.begin().await?;
    let mut ids = Vec::with_capacity(workout_types.len());

    for chunk in workout_types.chunks(BATCH_SIZE) {
        let mut query = QueryBuilder::<Postgres>::new("INSERT INTO workout_types (title, price) ");
        query.push_values(chunk, |mut row, workout_type| {
            row.push_bind(workout_type.title.clone())
                .push_bind(workout_type.price);
        });
        query.push(" RETURNING id");

        ids.extend(query.build_query_scalar::<i32>().fetch_all(&mut *tx).await?);
    }

    tx.commit().await?;
    println!(
        "   ✓ Inserted {} workout types in {:?}",
        ids.len(),
        start_time.elapsed()
    );

    Ok(ids)
}

pub async fn seed_workouts(
    db: &PgPool,
    count: usize,
    client_ids: &[i32],
    trainer_ids: &[i32],
    workout_type_ids: &[i32],
    spread_days: i64,
) -> Result<u64> {
    if client_ids.is_empty() || trainer_ids.is_empty() || workout_type_ids.is_empty() {
        bail!("Workouts need at least one client, trainer and workout type");
    }

    let start_time = Instant::now();
    println!("📅 Seeding {} workouts...", count);

    let workouts = generate_workouts(
        count,
        client_ids,
        trainer_ids,
        workout_type_ids,
        spread_days,
    );
    let mut tx = db.begin().await?;
    let mut inserted = 0;

    for chunk in workouts.chunks(BATCH_SIZE) {
        let mut query = QueryBuilder::<Postgres>::new(
            "INSERT INTO workouts (client_id, trainer_id, workout_type_id, status, date) ",
        );
        query.push_values(chunk, |mut row, workout| {
            row.push_bind(workout.client_id)
                .push_bind(workout.trainer_id)
                .push_bind(workout.workout_type_id)
                .push_bind(workout.status)
                .push_bind(workout.date);
        });

        inserted += query.build().execute(&mut *tx).await?.rows_affected();
    }

    tx.commit().await?;
    println!("   ✓ Inserted {} workouts in {:?}", inserted, start_time.elapsed());

    Ok(inserted)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_workout_type_prices_are_positive_steps() {
        for workout_type in generate_workout_types(16) {
            assert!(workout_type.price >= 500);
            assert_eq!(workout_type.price % 50, 0);
        }
    }

    #[test]
    fn test_workouts_reference_given_ids() {
        let workouts = generate_workouts(100, &[1, 2], &[7], &[3, 4, 5], 10);
        let now = Utc::now();

        for workout in &workouts {
            assert!([1, 2].contains(&workout.client_id));
            assert_eq!(workout.trainer_id, 7);
            assert!([3, 4, 5].contains(&workout.workout_type_id));
            assert!(workout.date <= now + Duration::days(10));
            assert!(workout.date >= now - Duration::days(11));
        }
    }

    #[test]
    fn test_huge_spread_is_clamped() {
        let now = Utc::now();
        let limit = Duration::days(MAX_SPREAD_DAYS + 1);

        for spread_days in [i64::MAX, i64::MIN, 0] {
            let workouts = generate_workouts(50, &[1], &[1], &[1], spread_days);
            assert_eq!(workouts.len(), 50);
            assert!(workouts.iter().all(|w| w.date < now + limit && w.date > now - limit));
        }
    }

    #[test]
    fn test_future_workouts_are_scheduled() {
        let workouts = generate_workouts(100, &[1], &[1], &[1], 5);
        let now = Utc::now();
        for workout in workouts.iter().filter(|w| w.date > now + Duration::minutes(1)) {
            assert_eq!(workout.status, "scheduled");
        }
    }
}
