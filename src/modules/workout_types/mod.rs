pub mod controller;
pub mod router;
pub mod service;

pub use router::init_workout_types_router;
