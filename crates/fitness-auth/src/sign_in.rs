//! Exchanging stored credentials for tokens.
//!
//! Credential lookup is abstracted behind [`CredentialStore`] so the sign-in
//! rules can be exercised without a database. The server implements it over
//! its PostgreSQL pool.

use std::future::Future;

use chrono::{DateTime, Utc};
use tracing::{instrument, warn};

use fitness_core::{AppError, verify_password};

use crate::claims::{Identity, Role};
use crate::errors::AuthError;
use crate::jwt::TokenCodec;

/// Stored admin login material.
#[derive(Debug, Clone)]
pub struct AdminCredential {
    pub id: i32,
    pub password_hash: String,
}

/// A trainer matched by their opaque access token.
#[derive(Debug, Clone, Copy)]
pub struct TrainerCredential {
    pub id: i32,
}

pub trait CredentialStore {
    fn admin_by_login(
        &self,
        login: &str,
    ) -> impl Future<Output = Result<Option<AdminCredential>, AppError>> + Send;

    fn trainer_by_token(
        &self,
        token: &str,
    ) -> impl Future<Output = Result<Option<TrainerCredential>, AppError>> + Send;
}

/// A freshly issued token.
#[derive(Debug, Clone)]
pub struct SignedIn {
    pub token: String,
    pub expires_at: DateTime<Utc>,
    pub identity: Identity,
}

#[instrument(skip(store, codec, password), fields(auth.login = %login))]
pub async fn sign_in_admin<S>(
    store: &S,
    codec: &TokenCodec,
    login: &str,
    password: &str,
    now: DateTime<Utc>,
) -> Result<SignedIn, AppError>
where
    S: CredentialStore + Sync,
{
    let Some(admin) = store.admin_by_login(login).await? else {
        warn!("Admin sign-in failed: unknown login");
        return Err(AuthError::CredentialNotFound.into());
    };

    if !verify_password(password, &admin.password_hash)? {
        warn!(admin.id = %admin.id, "Admin sign-in failed: wrong password");
        return Err(AuthError::InvalidCredential.into());
    }

    issue(codec, admin.id, Role::Admin, now)
}

#[instrument(skip(store, codec, token))]
pub async fn sign_in_trainer<S>(
    store: &S,
    codec: &TokenCodec,
    token: &str,
    now: DateTime<Utc>,
) -> Result<SignedIn, AppError>
where
    S: CredentialStore + Sync,
{
    let Some(trainer) = store.trainer_by_token(token).await? else {
        warn!("Trainer sign-in failed: unknown token");
        return Err(AuthError::CredentialNotFound.into());
    };

    issue(codec, trainer.id, Role::Trainer, now)
}

fn issue(
    codec: &TokenCodec,
    user_id: i32,
    role: Role,
    now: DateTime<Utc>,
) -> Result<SignedIn, AppError> {
    let token = codec.issue(user_id, role, now)?;

    Ok(SignedIn {
        token,
        expires_at: codec.expires_at(now)?,
        identity: Identity { user_id, role },
    })
}
