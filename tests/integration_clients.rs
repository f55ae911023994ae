mod common;

use common::{create_test_admin, create_test_client, request, setup_test_app, unique_login};
use serde_json::json;
use sqlx::PgPool;

#[sqlx::test(migrations = "./migrations")]
async fn test_create_and_get_client(pool: PgPool) {
    let admin_id = create_test_admin(&pool, &unique_login(), false).await;
    let app = setup_test_app(pool);
    let token = app.admin_token(admin_id);

    let (status, body) = app
        .send(request(
            "POST",
            "/api/clients",
            Some(token.as_str()),
            Some(json!({
                "first_name": "Ada",
                "last_name": "Moss",
                "phone_number": "+4670123456"
            })),
        ))
        .await;
    assert_eq!(status, 201);
    let id = body["id"].as_i64().unwrap();

    let (status, body) = app
        .send(request("GET", &format!("/api/clients/{}", id), Some(token.as_str()), None))
        .await;
    assert_eq!(status, 200);
    assert_eq!(body["first_name"], "Ada");
    assert_eq!(body["phone_number"], "+4670123456");
}

#[sqlx::test(migrations = "./migrations")]
async fn test_update_client(pool: PgPool) {
    let admin_id = create_test_admin(&pool, &unique_login(), false).await;
    let client_id = create_test_client(&pool, "Old").await;
    let app = setup_test_app(pool);
    let token = app.admin_token(admin_id);

    let (status, body) = app
        .send(request(
            "PUT",
            &format!("/api/clients/{}", client_id),
            Some(token.as_str()),
            Some(json!({
                "first_name": "New",
                "last_name": "Name",
                "phone_number": "+4670000000"
            })),
        ))
        .await;

    assert_eq!(status, 200);
    assert_eq!(body["id"], client_id);
    assert_eq!(body["first_name"], "New");
}

#[sqlx::test(migrations = "./migrations")]
async fn test_update_missing_client(pool: PgPool) {
    let admin_id = create_test_admin(&pool, &unique_login(), false).await;
    let app = setup_test_app(pool);
    let token = app.admin_token(admin_id);

    let (status, _) = app
        .send(request(
            "PUT",
            "/api/clients/9999",
            Some(token.as_str()),
            Some(json!({
                "first_name": "No",
                "last_name": "One",
                "phone_number": "+4670000000"
            })),
        ))
        .await;

    assert_eq!(status, 404);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_list_clients(pool: PgPool) {
    let admin_id = create_test_admin(&pool, &unique_login(), false).await;
    create_test_client(&pool, "One").await;
    create_test_client(&pool, "Two").await;
    let app = setup_test_app(pool);
    let token = app.admin_token(admin_id);

    let (status, body) = app.send(request("GET", "/api/clients", Some(token.as_str()), None)).await;

    assert_eq!(status, 200);
    assert_eq!(body.as_array().unwrap().len(), 2);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_create_client_rejects_short_phone(pool: PgPool) {
    let admin_id = create_test_admin(&pool, &unique_login(), false).await;
    let app = setup_test_app(pool);
    let token = app.admin_token(admin_id);

    let (status, _) = app
        .send(request(
            "POST",
            "/api/clients",
            Some(token.as_str()),
            Some(json!({ "first_name": "A", "last_name": "B", "phone_number": "12" })),
        ))
        .await;

    assert_eq!(status, 422);
}
