//! # Fitness CLI
//!
//! Administrative tooling for the fitness API: bootstrapping admins and
//! filling a development database with fake data.
//!
//! ## Usage
//!
//! ```ignore
//! use fitness_cli::seeder::{SeedConfig, seed_all};
//!
//! seed_all(&pool, SeedConfig::default()).await?;
//! ```

pub mod admins;
pub mod seeder;
