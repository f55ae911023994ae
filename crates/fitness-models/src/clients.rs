use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Client {
    pub id: i32,
    pub first_name: String,
    pub last_name: String,
    pub phone_number: String,
}

/// Body for both creating and replacing a client.
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct ClientDto {
    #[validate(length(min = 1, max = 100))]
    pub first_name: String,
    #[validate(length(min = 1, max = 100))]
    pub last_name: String,
    #[validate(length(min = 5, max = 20))]
    pub phone_number: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct CreatedClient {
    pub id: i32,
}
