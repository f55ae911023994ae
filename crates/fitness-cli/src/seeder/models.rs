//! Seed row shapes and seeding configuration.

use chrono::{DateTime, Utc};

pub struct WorkoutTypeSeed {
    pub title: String,
    pub price: i32,
}

pub struct ClientSeed {
    pub first_name: String,
    pub last_name: String,
    pub phone_number: String,
}

pub struct TrainerSeed {
    pub token: String,
    pub first_name: String,
    pub last_name: String,
}

pub struct WorkoutSeed {
    pub client_id: i32,
    pub trainer_id: i32,
    pub workout_type_id: i32,
    pub status: &'static str,
    pub date: DateTime<Utc>,
}

/// How many rows of each kind to create.
#[derive(Clone, Debug)]
pub struct SeedConfig {
    pub workout_types: usize,
    pub clients: usize,
    pub trainers: usize,
    pub workouts: usize,
    /// Workouts are spread over this many days either side of today.
    pub spread_days: i64,
}

impl Default for SeedConfig {
    fn default() -> Self {
        Self {
            workout_types: 8,
            clients: 50,
            trainers: 6,
            workouts: 200,
            spread_days: 30,
        }
    }
}
