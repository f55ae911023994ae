use anyhow::anyhow;
use sqlx::PgPool;
use tracing::{debug, info, instrument, warn};

use fitness_core::{AppError, hash_password};
use fitness_models::admins::{Admin, CreateAdminDto};

pub struct AdminService;

impl AdminService {
    #[instrument(skip(db), fields(db.operation = "SELECT", db.table = "admins"))]
    pub async fn get_admins(db: &PgPool) -> Result<Vec<Admin>, AppError> {
        let admins = sqlx::query_as::<_, Admin>(
            "SELECT id, login, first_name, last_name, super FROM admins ORDER BY id",
        )
        .fetch_all(db)
        .await?;

        debug!(count = admins.len(), "Fetched admins");
        Ok(admins)
    }

    #[instrument(skip(db), fields(db.operation = "SELECT", db.table = "admins"))]
    pub async fn get_admin_by_id(db: &PgPool, id: i32) -> Result<Admin, AppError> {
        sqlx::query_as::<_, Admin>(
            "SELECT id, login, first_name, last_name, super FROM admins WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(db)
        .await?
        .ok_or_else(|| AppError::not_found(anyhow!("Admin not found")))
    }

    #[instrument(
        skip(db, dto),
        fields(db.operation = "INSERT", db.table = "admins", admin.login = %dto.login)
    )]
    pub async fn create_admin(db: &PgPool, dto: CreateAdminDto) -> Result<i32, AppError> {
        let password_hash = hash_password(&dto.password)?;

        let id = sqlx::query_scalar::<_, i32>(
            r#"INSERT INTO admins (login, password, first_name, last_name, super)
               VALUES ($1, $2, $3, $4, $5)
               RETURNING id"#,
        )
        .bind(&dto.login)
        .bind(&password_hash)
        .bind(&dto.first_name)
        .bind(&dto.last_name)
        .bind(dto.is_super)
        .fetch_one(db)
        .await
        .map_err(|e| {
            if let sqlx::Error::Database(db_err) = &e
                && db_err.is_unique_violation()
            {
                warn!("Admin login already taken");
                return AppError::bad_request(anyhow!("An admin with this login already exists"));
            }
            AppError::from(e)
        })?;

        info!(admin.id = %id, "Admin created");
        Ok(id)
    }

    #[instrument(skip(db), fields(db.operation = "DELETE", db.table = "admins"))]
    pub async fn delete_admin(db: &PgPool, id: i32) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM admins WHERE id = $1")
            .bind(id)
            .execute(db)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::not_found(anyhow!("Admin not found")));
        }

        info!(admin.id = %id, "Admin deleted");
        Ok(())
    }

    /// Whether the admin is a super admin.
    #[instrument(skip(db), fields(db.operation = "SELECT", db.table = "admins"))]
    pub async fn is_super(db: &PgPool, id: i32) -> Result<bool, AppError> {
        sqlx::query_scalar::<_, bool>("SELECT super FROM admins WHERE id = $1")
            .bind(id)
            .fetch_optional(db)
            .await?
            .ok_or_else(|| AppError::not_found(anyhow!("Admin not found")))
    }
}
