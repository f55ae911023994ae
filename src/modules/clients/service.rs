use anyhow::anyhow;
use sqlx::PgPool;
use tracing::{debug, info, instrument};

use fitness_core::AppError;
use fitness_models::clients::{Client, ClientDto};

pub struct ClientService;

impl ClientService {
    #[instrument(skip(db), fields(db.operation = "SELECT", db.table = "clients"))]
    pub async fn get_clients(db: &PgPool) -> Result<Vec<Client>, AppError> {
        let clients = sqlx::query_as::<_, Client>(
            "SELECT id, first_name, last_name, phone_number FROM clients ORDER BY id",
        )
        .fetch_all(db)
        .await?;

        debug!(count = clients.len(), "Fetched clients");
        Ok(clients)
    }

    #[instrument(skip(db), fields(db.operation = "SELECT", db.table = "clients"))]
    pub async fn get_client_by_id(db: &PgPool, id: i32) -> Result<Client, AppError> {
        sqlx::query_as::<_, Client>(
            "SELECT id, first_name, last_name, phone_number FROM clients WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(db)
        .await?
        .ok_or_else(|| AppError::not_found(anyhow!("Client not found")))
    }

    #[instrument(skip(db, dto), fields(db.operation = "INSERT", db.table = "clients"))]
    pub async fn create_client(db: &PgPool, dto: ClientDto) -> Result<i32, AppError> {
        let id = sqlx::query_scalar::<_, i32>(
            r#"INSERT INTO clients (first_name, last_name, phone_number)
               VALUES ($1, $2, $3)
               RETURNING id"#,
        )
        .bind(&dto.first_name)
        .bind(&dto.last_name)
        .bind(&dto.phone_number)
        .fetch_one(db)
        .await?;

        info!(client.id = %id, "Client created");
        Ok(id)
    }

    /// Replaces every field of the client.
    #[instrument(skip(db, dto), fields(db.operation = "UPDATE", db.table = "clients"))]
    pub async fn update_client(db: &PgPool, id: i32, dto: ClientDto) -> Result<Client, AppError> {
        let client = sqlx::query_as::<_, Client>(
            r#"UPDATE clients
               SET first_name = $2, last_name = $3, phone_number = $4
               WHERE id = $1
               RETURNING id, first_name, last_name, phone_number"#,
        )
        .bind(id)
        .bind(&dto.first_name)
        .bind(&dto.last_name)
        .bind(&dto.phone_number)
        .fetch_optional(db)
        .await?
        .ok_or_else(|| AppError::not_found(anyhow!("Client not found")))?;

        info!(client.id = %id, "Client updated");
        Ok(client)
    }
}
