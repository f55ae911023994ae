use anyhow::{Result, anyhow, bail};
use sqlx::PgPool;

use fitness_core::hash_password;

pub struct NewAdmin {
    pub login: String,
    pub password: String,
    pub first_name: String,
    pub last_name: String,
    pub is_super: bool,
}

/// Inserts an admin with a hashed password and returns its id.
///
/// Fails if the login is already taken.
pub async fn create_admin(db: &PgPool, admin: &NewAdmin) -> Result<i32> {
    if admin.login.trim().is_empty() {
        bail!("Login must not be empty");
    }
    if admin.password.len() < 6 {
        bail!("Password must be at least 6 characters");
    }

    let password_hash = hash_password(&admin.password)
        .map_err(|e| anyhow!("Failed to hash password: {}", e.error))?;

    let id = sqlx::query_scalar::<_, i32>(
        r#"INSERT INTO admins (login, password, first_name, last_name, super)
           VALUES ($1, $2, $3, $4, $5)
           ON CONFLICT (login) DO NOTHING
           RETURNING id"#,
    )
    .bind(admin.login.trim())
    .bind(&password_hash)
    .bind(&admin.first_name)
    .bind(&admin.last_name)
    .bind(admin.is_super)
    .fetch_optional(db)
    .await?;

    id.ok_or_else(|| anyhow!("An admin with login '{}' already exists", admin.login.trim()))
}
