mod common;

use common::{ADMIN_PASSWORD, create_test_admin, request, setup_test_app, unique_login};
use serde_json::json;
use sqlx::PgPool;

#[sqlx::test(migrations = "./migrations")]
async fn test_create_admin_then_sign_in(pool: PgPool) {
    let admin_id = create_test_admin(&pool, &unique_login(), true).await;
    let app = setup_test_app(pool);
    let token = app.admin_token(admin_id);
    let login = unique_login();

    let (status, body) = app
        .send(request(
            "POST",
            "/api/admins",
            Some(token.as_str()),
            Some(json!({
                "login": login,
                "password": "secret123",
                "first_name": "Nora",
                "last_name": "Lind"
            })),
        ))
        .await;
    assert_eq!(status, 201);
    assert!(body["id"].as_i64().unwrap() > 0);

    let (status, _) = app
        .send(request(
            "POST",
            "/api/auth/admin/sign-in",
            None,
            Some(json!({ "login": login, "password": "secret123" })),
        ))
        .await;
    assert_eq!(status, 200);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_create_admin_duplicate_login(pool: PgPool) {
    let login = unique_login();
    let admin_id = create_test_admin(&pool, &login, true).await;
    let app = setup_test_app(pool);
    let token = app.admin_token(admin_id);

    let (status, _) = app
        .send(request(
            "POST",
            "/api/admins",
            Some(token.as_str()),
            Some(json!({
                "login": login,
                "password": ADMIN_PASSWORD,
                "first_name": "Dup",
                "last_name": "Licate"
            })),
        ))
        .await;

    assert_eq!(status, 400);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_create_admin_validation(pool: PgPool) {
    let admin_id = create_test_admin(&pool, &unique_login(), false).await;
    let app = setup_test_app(pool);
    let token = app.admin_token(admin_id);

    let (status, body) = app
        .send(request(
            "POST",
            "/api/admins",
            Some(token.as_str()),
            Some(json!({
                "login": "ok_login",
                "password": "123",
                "first_name": "Short",
                "last_name": "Password"
            })),
        ))
        .await;

    assert_eq!(status, 422);
    assert!(body["error"].as_str().unwrap().contains("password"));
}

#[sqlx::test(migrations = "./migrations")]
async fn test_list_get_and_delete_admin(pool: PgPool) {
    let caller = create_test_admin(&pool, &unique_login(), true).await;
    let victim_login = unique_login();
    let victim = create_test_admin(&pool, &victim_login, false).await;
    let app = setup_test_app(pool);
    let token = app.admin_token(caller);

    let (status, body) = app.send(request("GET", "/api/admins", Some(token.as_str()), None)).await;
    assert_eq!(status, 200);
    assert_eq!(body.as_array().unwrap().len(), 2);
    assert!(body.as_array().unwrap().iter().all(|a| a.get("password").is_none()));

    let uri = format!("/api/admins/{}", victim);
    let (status, body) = app.send(request("GET", &uri, Some(token.as_str()), None)).await;
    assert_eq!(status, 200);
    assert_eq!(body["login"], victim_login);

    let (status, _) = app.send(request("DELETE", &uri, Some(token.as_str()), None)).await;
    assert_eq!(status, 204);

    let (status, _) = app.send(request("GET", &uri, Some(token.as_str()), None)).await;
    assert_eq!(status, 404);

    let (status, _) = app.send(request("DELETE", &uri, Some(token.as_str()), None)).await;
    assert_eq!(status, 404);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_admin_type_reports_super_flag(pool: PgPool) {
    let regular = create_test_admin(&pool, &unique_login(), false).await;
    let superuser = create_test_admin(&pool, &unique_login(), true).await;
    let app = setup_test_app(pool);

    let token = app.admin_token(regular);
    let (status, body) = app
        .send(request("GET", "/api/admins/type", Some(token.as_str()), None))
        .await;
    assert_eq!(status, 200);
    assert_eq!(body["type"], false);

    let token = app.admin_token(superuser);
    let (_, body) = app.send(request("GET", "/api/admins/type", Some(token.as_str()), None)).await;
    assert_eq!(body["type"], true);
}
