//! Workout models.
//!
//! Workouts are read through a join with their client, trainer and workout
//! type. The flat [`WorkoutRow`] is what the query returns; [`Workout`] is the
//! nested shape served to callers.

use std::fmt;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

use crate::clients::Client;
use crate::trainers::TrainerSummary;
use crate::workout_types::WorkoutType;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum WorkoutStatus {
    Scheduled,
    Done,
    Cancelled,
}

impl WorkoutStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            WorkoutStatus::Scheduled => "scheduled",
            WorkoutStatus::Done => "done",
            WorkoutStatus::Cancelled => "cancelled",
        }
    }
}

impl fmt::Display for WorkoutStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, FromRow)]
pub struct WorkoutRow {
    pub id: i32,
    pub status: String,
    pub date: DateTime<Utc>,
    pub admin_id: Option<i32>,
    pub client_id: i32,
    pub client_first_name: String,
    pub client_last_name: String,
    pub client_phone_number: String,
    pub trainer_id: i32,
    pub trainer_first_name: String,
    pub trainer_last_name: String,
    pub workout_type_id: i32,
    pub workout_type_title: String,
    pub workout_type_price: i32,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct Workout {
    pub id: i32,
    pub client: Client,
    pub trainer: TrainerSummary,
    pub workout_type: WorkoutType,
    pub status: String,
    pub date: DateTime<Utc>,
    /// Admin who scheduled the workout, if still present
    pub admin_id: Option<i32>,
}

impl From<WorkoutRow> for Workout {
    fn from(row: WorkoutRow) -> Self {
        Self {
            id: row.id,
            client: Client {
                id: row.client_id,
                first_name: row.client_first_name,
                last_name: row.client_last_name,
                phone_number: row.client_phone_number,
            },
            trainer: TrainerSummary {
                id: row.trainer_id,
                first_name: row.trainer_first_name,
                last_name: row.trainer_last_name,
            },
            workout_type: WorkoutType {
                id: row.workout_type_id,
                title: row.workout_type_title,
                price: row.workout_type_price,
            },
            status: row.status,
            date: row.date,
            admin_id: row.admin_id,
        }
    }
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateWorkoutDto {
    #[validate(range(min = 1))]
    pub client_id: i32,
    #[validate(range(min = 1))]
    pub trainer_id: i32,
    #[validate(range(min = 1))]
    pub workout_type_id: i32,
    /// Defaults to now
    pub date: Option<DateTime<Utc>>,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct UpdateWorkoutDto {
    #[validate(range(min = 1))]
    pub client_id: i32,
    #[validate(range(min = 1))]
    pub trainer_id: i32,
    #[validate(range(min = 1))]
    pub workout_type_id: i32,
    pub date: DateTime<Utc>,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct ChangeStatusDto {
    pub status: WorkoutStatus,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct CreatedWorkout {
    pub id: i32,
}

#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct WorkoutFilterParams {
    pub trainer_id: Option<i32>,
    pub client_id: Option<i32>,
}

#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ByDateParams {
    /// `YYYY-MM-DD` or an RFC 3339 timestamp
    pub date: String,
}

#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ByIntervalParams {
    /// First day, inclusive
    pub from: String,
    /// Last day, inclusive
    pub to: String,
}

/// Parses a calendar day from `YYYY-MM-DD` or an RFC 3339 timestamp.
///
/// Timestamps resolve to their UTC calendar day.
pub fn parse_day(value: &str) -> Result<NaiveDate, String> {
    let value = value.trim();

    if let Ok(day) = NaiveDate::parse_from_str(value, "%Y-%m-%d") {
        return Ok(day);
    }

    DateTime::parse_from_rfc3339(value)
        .map(|ts| ts.with_timezone(&Utc).date_naive())
        .map_err(|_| format!("Invalid date '{}': expected YYYY-MM-DD or RFC 3339", value))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_plain_date() {
        assert_eq!(
            parse_day("2024-02-29"),
            Ok(NaiveDate::from_ymd_opt(2024, 2, 29).unwrap())
        );
    }

    #[test]
    fn test_parse_timestamp_uses_utc_day() {
        assert_eq!(
            parse_day("2024-03-01T01:30:00+03:00"),
            Ok(NaiveDate::from_ymd_opt(2024, 2, 29).unwrap())
        );
        assert_eq!(
            parse_day("2024-03-01T10:00:00Z"),
            Ok(NaiveDate::from_ymd_opt(2024, 3, 1).unwrap())
        );
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!(parse_day("yesterday").is_err());
        assert!(parse_day("2024-13-01").is_err());
        assert!(parse_day("").is_err());
    }

    #[test]
    fn test_status_wire_format() {
        assert_eq!(
            serde_json::from_str::<ChangeStatusDto>(r#"{"status":"done"}"#)
                .unwrap()
                .status,
            WorkoutStatus::Done
        );
        assert!(serde_json::from_str::<ChangeStatusDto>(r#"{"status":"finished"}"#).is_err());
        assert_eq!(WorkoutStatus::Cancelled.as_str(), "cancelled");
    }

    #[test]
    fn test_create_workout_dto_validation() {
        let valid = CreateWorkoutDto {
            client_id: 1,
            trainer_id: 2,
            workout_type_id: 3,
            date: None,
        };
        assert!(valid.validate().is_ok());

        let zero_client = CreateWorkoutDto {
            client_id: 0,
            trainer_id: 2,
            workout_type_id: 3,
            date: None,
        };
        assert!(zero_client.validate().is_err());
    }

    #[test]
    fn test_row_maps_to_nested_workout() {
        let row = WorkoutRow {
            id: 5,
            status: "scheduled".to_string(),
            date: DateTime::parse_from_rfc3339("2024-03-01T10:00:00Z")
                .unwrap()
                .with_timezone(&Utc),
            admin_id: Some(1),
            client_id: 2,
            client_first_name: "Maria".to_string(),
            client_last_name: "Ivanova".to_string(),
            client_phone_number: "+79001234567".to_string(),
            trainer_id: 3,
            trainer_first_name: "Ivan".to_string(),
            trainer_last_name: "Petrov".to_string(),
            workout_type_id: 4,
            workout_type_title: "Boxing".to_string(),
            workout_type_price: 1500,
        };

        let workout = Workout::from(row);
        assert_eq!(workout.client.id, 2);
        assert_eq!(workout.trainer.last_name, "Petrov");
        assert_eq!(workout.workout_type.price, 1500);

        let json = serde_json::to_string(&workout).unwrap();
        assert!(!json.contains("token"));
    }
}
