//! Client and trainer seeding.

use std::time::Instant;

use anyhow::Result;
use fake::Fake;
use fake::faker::name::en::{FirstName, LastName};
use fake::faker::phone_number::en::CellNumber;
use rayon::prelude::*;
use sqlx::{PgPool, Postgres, QueryBuilder};
use uuid::Uuid;

use super::BATCH_SIZE;
use super::models::{ClientSeed, TrainerSeed};

/// Generates client data in parallel using Rayon
pub fn generate_clients(count: usize) -> Vec<ClientSeed> {
    (0..count)
        .into_par_iter()
        .map(|_| ClientSeed {
            first_name: FirstName().fake(),
            last_name: LastName().fake(),
            phone_number: CellNumber().fake(),
        })
        .collect()
}

/// Generates trainers, each with a fresh sign-in token
pub fn generate_trainers(count: usize) -> Vec<TrainerSeed> {
    (0..count)
        .into_par_iter()
        .map(|_| TrainerSeed {
            token: Uuid::new_v4().to_string(),
            first_name: FirstName().fake(),
            last_name: LastName().fake(),
        })
        .collect()
}

pub async fn seed_clients(db: &PgPool, count: usize) -> Result<Vec<i32>> {
    let start_time = Instant::now();
    println!("🧍 Seeding {} clients...", count);

    let clients = generate_clients(count);
    let mut tx = db.begin().await?;
    let mut ids = Vec::with_capacity(clients.len());

    for chunk in clients.chunks(BATCH_SIZE) {
        let mut query = QueryBuilder::<Postgres>::new(
            "INSERT INTO clients (first_name, last_name, phone_number) ",
        );
        query.push_values(chunk, |mut row, client| {
            row.push_bind(client.first_name.clone())
                .push_bind(client.last_name.clone())
                .push_bind(client.phone_number.clone());
        });
        query.push(" RETURNING id");

        ids.extend(query.build_query_scalar::<i32>().fetch_all(&mut *tx).await?);
    }

    tx.commit().await?;
    println!("   ✓ Inserted {} clients in {:?}", ids.len(), start_time.elapsed());

    Ok(ids)
}

pub async fn seed_trainers(db: &PgPool, count: usize) -> Result<Vec<i32>> {
    let start_time = Instant::now();
    println!("🏋️  Seeding {} trainers...", count);

    let trainers = generate_trainers(count);
    let mut tx = db.begin().await?;
    let mut ids = Vec::with_capacity(trainers.len());

    for chunk in trainers.chunks(BATCH_SIZE) {
        let mut query =
            QueryBuilder::<Postgres>::new("INSERT INTO trainers (token, first_name, last_name) ");
        query.push_values(chunk, |mut row, trainer| {
            row.push_bind(trainer.token.clone())
                .push_bind(trainer.first_name.clone())
                .push_bind(trainer.last_name.clone());
        });
        query.push(" RETURNING id");

        ids.extend(query.build_query_scalar::<i32>().fetch_all(&mut *tx).await?);
    }

    tx.commit().await?;
    println!("   ✓ Inserted {} trainers in {:?}", ids.len(), start_time.elapsed());

    Ok(ids)
}
