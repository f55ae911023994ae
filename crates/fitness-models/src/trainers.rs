//! Trainer models.
//!
//! A trainer signs in with the opaque `token` issued when the trainer was
//! created, so [`Trainer`] is only ever returned to admins.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Trainer {
    pub id: i32,
    pub token: String,
    pub first_name: String,
    pub last_name: String,
}

/// A trainer as embedded in workout responses, without the access token.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct TrainerSummary {
    pub id: i32,
    pub first_name: String,
    pub last_name: String,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateTrainerDto {
    #[validate(length(min = 1, max = 100))]
    pub first_name: String,
    #[validate(length(min = 1, max = 100))]
    pub last_name: String,
}

#[derive(Debug, Serialize, Deserialize, FromRow, ToSchema)]
pub struct CreatedTrainer {
    pub id: i32,
    pub token: String,
}

#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct CashParams {
    /// Trainer to report on. Required for admins, ignored for trainers.
    pub trainer_id: Option<i32>,
}

/// Half the summed workout-type price of a trainer's workouts in a period.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct CashResponse {
    pub trainer_id: i32,
    pub cash: i64,
}
