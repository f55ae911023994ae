//! # Fitness Models
//!
//! Domain models and DTOs for the fitness API: database entities, request
//! bodies with their validation rules, query parameters and response shapes.
//!
//! # Modules
//!
//! - [`admins`]: Studio administrators
//! - [`auth`]: Sign-in requests and token responses
//! - [`clients`]: Studio clients
//! - [`trainers`]: Trainers and their revenue
//! - [`workout_types`]: Priced workout kinds
//! - [`workouts`]: Scheduled workouts, status and date filters

pub mod admins;
pub mod auth;
pub mod clients;
pub mod trainers;
pub mod workout_types;
pub mod workouts;
