pub mod admins;
pub mod auth;
pub mod clients;
pub mod trainers;
pub mod workout_types;
pub mod workouts;
