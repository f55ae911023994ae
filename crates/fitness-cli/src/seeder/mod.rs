//! Development data seeding.
//!
//! Generation runs on Rayon's thread pool; inserts are batched multi-row
//! statements inside one transaction per table.

use std::time::Instant;

use anyhow::Result;
use sqlx::PgPool;

pub mod models;
pub mod people;
pub mod workouts;

pub use models::SeedConfig;

pub(crate) const BATCH_SIZE: usize = 500;

/// Seeds workout types, clients, trainers and then workouts linking them.
pub async fn seed_all(db: &PgPool, config: SeedConfig) -> Result<()> {
    let start_time = Instant::now();
    println!("🌱 Seeding database...\n");

    let workout_type_ids = workouts::seed_workout_types(db, config.workout_types).await?;
    let client_ids = people::seed_clients(db, config.clients).await?;
    let trainer_ids = people::seed_trainers(db, config.trainers).await?;

    if config.workouts > 0 {
        workouts::seed_workouts(
            db,
            config.workouts,
            &client_ids,
            &trainer_ids,
            &workout_type_ids,
            config.spread_days,
        )
        .await?;
    }

    println!("\n✅ Seeding finished in {:?}", start_time.elapsed());
    Ok(())
}

/// Deletes workouts, clients, trainers and workout types. Admins are kept.
pub async fn clear_all(db: &PgPool) -> Result<()> {
    let start_time = Instant::now();
    println!("🗑️  Clearing seeded data...");

    let mut tx = db.begin().await?;
    for table in ["workouts", "clients", "trainers", "workout_types"] {
        let deleted = sqlx::query(&format!("DELETE FROM {}", table))
            .execute(&mut *tx)
            .await?
            .rows_affected();
        println!("   ✓ Deleted {} rows from {}", deleted, table);
    }
    tx.commit().await?;

    println!("✅ Cleared in {:?}", start_time.elapsed());
    Ok(())
}
