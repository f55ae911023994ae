use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use tracing::instrument;

use fitness_core::AppError;
use fitness_models::clients::{Client, ClientDto, CreatedClient};

use crate::modules::clients::service::ClientService;
use crate::state::AppState;
use crate::validator::ValidatedJson;

#[utoipa::path(
    get,
    path = "/api/clients",
    responses(
        (status = 200, description = "List of clients", body = Vec<Client>),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Admin role required")
    ),
    tag = "Clients",
    security(("bearer_auth" = []))
)]
#[instrument(skip(state))]
pub async fn get_clients(State(state): State<AppState>) -> Result<Json<Vec<Client>>, AppError> {
    let clients = ClientService::get_clients(&state.db).await?;
    Ok(Json(clients))
}

#[utoipa::path(
    post,
    path = "/api/clients",
    request_body = ClientDto,
    responses(
        (status = 201, description = "Client created", body = CreatedClient),
        (status = 400, description = "Invalid input"),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Admin role required"),
        (status = 422, description = "Validation error")
    ),
    tag = "Clients",
    security(("bearer_auth" = []))
)]
#[instrument(skip(state, dto))]
pub async fn create_client(
    State(state): State<AppState>,
    ValidatedJson(dto): ValidatedJson<ClientDto>,
) -> Result<(StatusCode, Json<CreatedClient>), AppError> {
    let id = ClientService::create_client(&state.db, dto).await?;
    Ok((StatusCode::CREATED, Json(CreatedClient { id })))
}

#[utoipa::path(
    get,
    path = "/api/clients/{id}",
    params(("id" = i32, Path, description = "Client ID")),
    responses(
        (status = 200, description = "Client details", body = Client),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Admin role required"),
        (status = 404, description = "Client not found")
    ),
    tag = "Clients",
    security(("bearer_auth" = []))
)]
#[instrument(skip(state))]
pub async fn get_client(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<Client>, AppError> {
    let client = ClientService::get_client_by_id(&state.db, id).await?;
    Ok(Json(client))
}

#[utoipa::path(
    put,
    path = "/api/clients/{id}",
    params(("id" = i32, Path, description = "Client ID")),
    request_body = ClientDto,
    responses(
        (status = 200, description = "Client updated", body = Client),
        (status = 400, description = "Invalid input"),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Admin role required"),
        (status = 404, description = "Client not found"),
        (status = 422, description = "Validation error")
    ),
    tag = "Clients",
    security(("bearer_auth" = []))
)]
#[instrument(skip(state, dto))]
pub async fn update_client(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    ValidatedJson(dto): ValidatedJson<ClientDto>,
) -> Result<Json<Client>, AppError> {
    let client = ClientService::update_client(&state.db, id, dto).await?;
    Ok(Json(client))
}
