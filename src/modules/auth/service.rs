use chrono::Utc;
use sqlx::PgPool;
use tracing::{info, instrument};

use fitness_auth::{AdminCredential, CredentialStore, SignedIn, TokenCodec, TrainerCredential};
use fitness_core::AppError;
use fitness_models::auth::{AdminSignInDto, TokenResponse, TrainerSignInDto};

/// Credential lookups backed by the `admins` and `trainers` tables.
pub struct PgCredentials<'a>(pub &'a PgPool);

impl CredentialStore for PgCredentials<'_> {
    async fn admin_by_login(&self, login: &str) -> Result<Option<AdminCredential>, AppError> {
        let admin = sqlx::query_as::<_, (i32, String)>(
            "SELECT id, password FROM admins WHERE login = $1",
        )
        .bind(login)
        .fetch_optional(self.0)
        .await?;

        Ok(admin.map(|(id, password_hash)| AdminCredential { id, password_hash }))
    }

    async fn trainer_by_token(&self, token: &str) -> Result<Option<TrainerCredential>, AppError> {
        let id = sqlx::query_scalar::<_, i32>("SELECT id FROM trainers WHERE token = $1")
            .bind(token)
            .fetch_optional(self.0)
            .await?;

        Ok(id.map(|id| TrainerCredential { id }))
    }
}

pub struct AuthService;

impl AuthService {
    #[instrument(skip(db, codec, dto), fields(auth.login = %dto.login))]
    pub async fn sign_in_admin(
        db: &PgPool,
        codec: &TokenCodec,
        dto: AdminSignInDto,
    ) -> Result<TokenResponse, AppError> {
        let store = PgCredentials(db);
        let signed =
            fitness_auth::sign_in_admin(&store, codec, &dto.login, &dto.password, Utc::now())
                .await?;
        info!(admin.id = %signed.identity.user_id, "Admin signed in");

        Ok(to_response(signed))
    }

    #[instrument(skip(db, codec, dto))]
    pub async fn sign_in_trainer(
        db: &PgPool,
        codec: &TokenCodec,
        dto: TrainerSignInDto,
    ) -> Result<TokenResponse, AppError> {
        let store = PgCredentials(db);
        let signed = fitness_auth::sign_in_trainer(&store, codec, &dto.token, Utc::now()).await?;
        info!(trainer.id = %signed.identity.user_id, "Trainer signed in");

        Ok(to_response(signed))
    }
}

fn to_response(signed: SignedIn) -> TokenResponse {
    TokenResponse {
        token: signed.token,
        expires_at: signed.expires_at,
    }
}
