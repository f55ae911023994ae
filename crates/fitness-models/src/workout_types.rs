use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct WorkoutType {
    pub id: i32,
    pub title: String,
    /// Price in whole currency units
    pub price: i32,
}

/// Body for both creating and replacing a workout type.
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct WorkoutTypeDto {
    #[validate(length(min = 1, max = 100))]
    pub title: String,
    #[validate(range(min = 0))]
    pub price: i32,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct CreatedWorkoutType {
    pub id: i32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_workout_type_dto_validation() {
        let valid = WorkoutTypeDto {
            title: "Boxing".to_string(),
            price: 1500,
        };
        assert!(valid.validate().is_ok());

        let free = WorkoutTypeDto {
            title: "Trial".to_string(),
            price: 0,
        };
        assert!(free.validate().is_ok());

        let negative = WorkoutTypeDto {
            title: "Boxing".to_string(),
            price: -1,
        };
        assert!(negative.validate().is_err());

        let untitled = WorkoutTypeDto {
            title: "".to_string(),
            price: 100,
        };
        assert!(untitled.validate().is_err());
    }
}
