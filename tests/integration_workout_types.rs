mod common;

use chrono::Utc;
use common::{
    create_test_admin, create_test_client, create_test_trainer, create_test_workout,
    create_test_workout_type, request, setup_test_app, unique_login,
};
use serde_json::json;
use sqlx::PgPool;

#[sqlx::test(migrations = "./migrations")]
async fn test_workout_type_crud(pool: PgPool) {
    let admin_id = create_test_admin(&pool, &unique_login(), false).await;
    let app = setup_test_app(pool);
    let token = app.admin_token(admin_id);

    let (status, body) = app
        .send(request(
            "POST",
            "/api/workout-types",
            Some(token.as_str()),
            Some(json!({ "title": "Boxing", "price": 1500 })),
        ))
        .await;
    assert_eq!(status, 201);
    let uri = format!("/api/workout-types/{}", body["id"]);

    let (status, body) = app
        .send(request(
            "PUT",
            &uri,
            Some(token.as_str()),
            Some(json!({ "title": "Boxing Pro", "price": 2000 })),
        ))
        .await;
    assert_eq!(status, 200);
    assert_eq!(body["title"], "Boxing Pro");
    assert_eq!(body["price"], 2000);

    let (status, _) = app.send(request("DELETE", &uri, Some(token.as_str()), None)).await;
    assert_eq!(status, 204);

    let (status, _) = app.send(request("GET", &uri, Some(token.as_str()), None)).await;
    assert_eq!(status, 404);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_negative_price_rejected(pool: PgPool) {
    let admin_id = create_test_admin(&pool, &unique_login(), false).await;
    let app = setup_test_app(pool);
    let token = app.admin_token(admin_id);

    let (status, _) = app
        .send(request(
            "POST",
            "/api/workout-types",
            Some(token.as_str()),
            Some(json!({ "title": "Free money", "price": -5 })),
        ))
        .await;

    assert_eq!(status, 422);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_trainer_can_read_workout_types(pool: PgPool) {
    let (trainer_id, _) = create_test_trainer(&pool, "Tess").await;
    let type_id = create_test_workout_type(&pool, "Yoga", 1000).await;
    let app = setup_test_app(pool);
    let token = app.trainer_token(trainer_id);
    let uri = format!("/api/workout-types/{}", type_id);

    let (status, body) = app
        .send(request("GET", &uri, Some(token.as_str()), None))
        .await;
    assert_eq!(status, 200);
    assert_eq!(body["title"], "Yoga");

    let (status, _) = app
        .send(request("DELETE", &uri, Some(token.as_str()), None))
        .await;
    assert_eq!(status, 403);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_delete_workout_type_in_use(pool: PgPool) {
    let admin_id = create_test_admin(&pool, &unique_login(), false).await;
    let (trainer_id, _) = create_test_trainer(&pool, "Tess").await;
    let client_id = create_test_client(&pool, "Ada").await;
    let type_id = create_test_workout_type(&pool, "Yoga", 1000).await;
    create_test_workout(&pool, client_id, trainer_id, type_id, Utc::now()).await;
    let app = setup_test_app(pool);
    let token = app.admin_token(admin_id);
    let uri = format!("/api/workout-types/{}", type_id);

    let (status, _) = app
        .send(request("DELETE", &uri, Some(token.as_str()), None))
        .await;

    assert_eq!(status, 400);
}
