//! JWT issuing and verification.
//!
//! Tokens are HS256-signed JWTs whose payload is a [`Claims`] value. The
//! signing key and token lifetime are fixed when the [`TokenCodec`] is built
//! from [`JwtConfig`] at startup and shared read-only for the life of the
//! process.
//!
//! Both operations take the current instant explicitly so expiry can be
//! exercised deterministically.
//!
//! # Example
//!
//! ```ignore
//! use chrono::Utc;
//! use fitness_auth::{Role, TokenCodec};
//! use fitness_config::JwtConfig;
//!
//! let codec = TokenCodec::new(&JwtConfig::from_env());
//!
//! let token = codec.issue(7, Role::Trainer, Utc::now())?;
//! let identity = codec.verify(&token, Utc::now())?;
//! assert_eq!(identity.user_id, 7);
//! ```

use std::fmt;

use chrono::{DateTime, Duration, Utc};
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};

use fitness_config::JwtConfig;

use crate::claims::{Claims, Identity, Role};
use crate::errors::AuthError;

/// The only algorithm tokens are signed with or accepted under.
pub const SIGNING_ALGORITHM: Algorithm = Algorithm::HS256;

/// Issues and verifies identity tokens with a single process-wide secret.
#[derive(Clone)]
pub struct TokenCodec {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
    ttl: Duration,
}

impl TokenCodec {
    pub fn new(config: &JwtConfig) -> Self {
        let mut validation = Validation::new(SIGNING_ALGORITHM);
        // Expiry is compared against the caller's clock in `decode_claims`.
        validation.validate_exp = false;
        validation.leeway = 0;
        validation.set_required_spec_claims(&["exp"]);

        Self {
            encoding_key: EncodingKey::from_secret(config.secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(config.secret.as_bytes()),
            validation,
            ttl: config.token_ttl(),
        }
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    /// Creates a signed token for `user_id` acting as `role`.
    ///
    /// The token carries `iat = now` and `exp = now + ttl`, so it verifies
    /// successfully at any instant strictly before `exp`.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError::TokenCreation`] if signing fails or the expiry is
    /// out of range.
    pub fn issue(&self, user_id: i32, role: Role, now: DateTime<Utc>) -> Result<String, AuthError> {
        let claims = Claims {
            user_id,
            role,
            iat: now.timestamp(),
            exp: self.expires_at(now)?.timestamp(),
        };

        encode(&Header::new(SIGNING_ALGORITHM), &claims, &self.encoding_key)
            .map_err(|e| AuthError::TokenCreation(e.to_string()))
    }

    /// Verifies a token and returns the identity it carries.
    ///
    /// # Errors
    ///
    /// - [`AuthError::WrongAlgorithm`] if the header names any algorithm other
    ///   than HS256 (checked before the signature or the expiry)
    /// - [`AuthError::InvalidSignature`] if the MAC does not match
    /// - [`AuthError::Expired`] if `now` is at or past `exp`
    /// - [`AuthError::Malformed`] for anything that is not a decodable token
    ///   with a known role
    pub fn verify(&self, token: &str, now: DateTime<Utc>) -> Result<Identity, AuthError> {
        self.decode_claims(token, now).map(Identity::from)
    }

    /// Like [`TokenCodec::verify`] but returns the full payload.
    pub fn decode_claims(&self, token: &str, now: DateTime<Utc>) -> Result<Claims, AuthError> {
        let claims = decode::<Claims>(token, &self.decoding_key, &self.validation)?.claims;

        if now.timestamp() >= claims.exp {
            return Err(AuthError::Expired);
        }

        Ok(claims)
    }

    /// The instant a token issued at `now` stops being accepted.
    pub fn expires_at(&self, now: DateTime<Utc>) -> Result<DateTime<Utc>, AuthError> {
        now.checked_add_signed(self.ttl)
            .ok_or_else(|| AuthError::TokenCreation("token expiry out of range".to_string()))
    }
}

impl fmt::Debug for TokenCodec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TokenCodec")
            .field("algorithm", &SIGNING_ALGORITHM)
            .field("ttl", &self.ttl)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use serde::Serialize;

    fn config(secret: &str) -> JwtConfig {
        JwtConfig {
            secret: secret.to_string(),
            token_ttl_hours: 1460,
        }
    }

    fn codec() -> TokenCodec {
        TokenCodec::new(&config("test-secret"))
    }

    fn t0() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).unwrap()
    }

    #[test]
    fn test_issue_then_verify_returns_identity() {
        let codec = codec();
        let token = codec.issue(7, Role::Trainer, t0()).unwrap();

        let identity = codec.verify(&token, t0()).unwrap();
        assert_eq!(identity, Identity { user_id: 7, role: Role::Trainer });
    }

    #[test]
    fn test_claims_carry_iat_and_exp() {
        let codec = codec();
        let token = codec.issue(1, Role::Admin, t0()).unwrap();

        let claims = codec.decode_claims(&token, t0()).unwrap();
        assert_eq!(claims.iat, t0().timestamp());
        assert_eq!(claims.exp, t0().timestamp() + 1460 * 3600);
    }

    #[test]
    fn test_valid_until_one_second_before_expiry() {
        let codec = codec();
        let token = codec.issue(1, Role::Admin, t0()).unwrap();

        let last_valid = t0() + codec.ttl() - Duration::seconds(1);
        assert!(codec.verify(&token, last_valid).is_ok());
    }

    #[test]
    fn test_expired_at_exactly_exp() {
        let codec = codec();
        let token = codec.issue(1, Role::Admin, t0()).unwrap();

        let result = codec.verify(&token, t0() + codec.ttl());
        assert_eq!(result, Err(AuthError::Expired));
    }

    #[test]
    fn test_admin_token_one_second_and_just_past_ttl() {
        let codec = codec();
        let token = codec.issue(42, Role::Admin, t0()).unwrap();

        let identity = codec.verify(&token, t0() + Duration::seconds(1)).unwrap();
        assert_eq!(identity, Identity { user_id: 42, role: Role::Admin });

        let late = t0() + codec.ttl() + Duration::seconds(1);
        assert_eq!(codec.verify(&token, late), Err(AuthError::Expired));
    }

    #[test]
    fn test_expired_long_after() {
        let codec = codec();
        let token = codec.issue(1, Role::Trainer, t0()).unwrap();

        let result = codec.verify(&token, t0() + Duration::days(365));
        assert_eq!(result, Err(AuthError::Expired));
    }

    #[test]
    fn test_other_secret_is_invalid_signature() {
        let token = TokenCodec::new(&config("other-secret"))
            .issue(1, Role::Admin, t0())
            .unwrap();

        assert_eq!(codec().verify(&token, t0()), Err(AuthError::InvalidSignature));
    }

    #[test]
    fn test_tampered_payload_is_rejected() {
        let codec = codec();
        let token = codec.issue(1, Role::Trainer, t0()).unwrap();
        let other = codec.issue(2, Role::Admin, t0()).unwrap();

        // Splice the admin payload onto the trainer signature.
        let parts: Vec<&str> = token.split('.').collect();
        let other_parts: Vec<&str> = other.split('.').collect();
        let forged = format!("{}.{}.{}", parts[0], other_parts[1], parts[2]);

        assert_eq!(codec.verify(&forged, t0()), Err(AuthError::InvalidSignature));
    }

    #[test]
    fn test_other_algorithm_is_rejected_before_expiry() {
        let codec = codec();
        let claims = Claims {
            user_id: 1,
            role: Role::Admin,
            iat: t0().timestamp(),
            exp: t0().timestamp() - 10,
        };
        let token = encode(
            &Header::new(Algorithm::HS512),
            &claims,
            &EncodingKey::from_secret(b"test-secret"),
        )
        .unwrap();

        assert_eq!(codec.verify(&token, t0()), Err(AuthError::WrongAlgorithm));
    }

    #[test]
    fn test_unsigned_token_is_rejected() {
        // {"alg":"none","typ":"JWT"} . {}
        let token = "eyJhbGciOiJub25lIiwidHlwIjoiSldUIn0.e30.";
        assert_eq!(codec().verify(token, t0()), Err(AuthError::Malformed));
    }

    #[test]
    fn test_garbage_is_malformed() {
        let codec = codec();
        assert_eq!(codec.verify("", t0()), Err(AuthError::Malformed));
        assert_eq!(codec.verify("not-a-token", t0()), Err(AuthError::Malformed));
        assert_eq!(codec.verify("a.b.c", t0()), Err(AuthError::Malformed));
    }

    #[test]
    fn test_unknown_role_is_malformed() {
        #[derive(Serialize)]
        struct Foreign {
            user_id: i32,
            role: &'static str,
            iat: i64,
            exp: i64,
        }

        let token = encode(
            &Header::new(SIGNING_ALGORITHM),
            &Foreign {
                user_id: 1,
                role: "owner",
                iat: t0().timestamp(),
                exp: t0().timestamp() + 60,
            },
            &EncodingKey::from_secret(b"test-secret"),
        )
        .unwrap();

        assert_eq!(codec().verify(&token, t0()), Err(AuthError::Malformed));
    }

    #[test]
    fn test_missing_exp_is_malformed() {
        #[derive(Serialize)]
        struct NoExp {
            user_id: i32,
            role: Role,
            iat: i64,
        }

        let token = encode(
            &Header::new(SIGNING_ALGORITHM),
            &NoExp {
                user_id: 1,
                role: Role::Admin,
                iat: t0().timestamp(),
            },
            &EncodingKey::from_secret(b"test-secret"),
        )
        .unwrap();

        assert_eq!(codec().verify(&token, t0()), Err(AuthError::Malformed));
    }

    #[test]
    fn test_expires_at_matches_ttl() {
        let codec = codec();
        assert_eq!(codec.expires_at(t0()).unwrap(), t0() + Duration::hours(1460));
    }

    #[test]
    fn test_expiry_past_calendar_range_fails_issue() {
        let codec = TokenCodec::new(&JwtConfig {
            secret: "test-secret".to_string(),
            token_ttl_hours: fitness_config::jwt::MAX_TOKEN_TTL_HOURS,
        });
        let near_end = DateTime::<Utc>::MAX_UTC - Duration::days(1);

        assert!(matches!(codec.expires_at(near_end), Err(AuthError::TokenCreation(_))));
        assert!(matches!(
            codec.issue(1, Role::Admin, near_end),
            Err(AuthError::TokenCreation(_))
        ));
    }

    #[test]
    fn test_oversized_ttl_setting_still_issues() {
        let config = JwtConfig::from_lookup(|key| match key {
            "JWT_TOKEN_TTL_HOURS" => Some("10000000000".to_string()),
            _ => None,
        });
        let codec = TokenCodec::new(&config);

        assert!(codec.expires_at(Utc::now()).is_ok());
        let token = codec.issue(3, Role::Trainer, t0()).unwrap();
        assert_eq!(
            codec.verify(&token, t0()).unwrap(),
            Identity { user_id: 3, role: Role::Trainer }
        );
    }

    #[test]
    fn test_debug_hides_keys() {
        let rendered = format!("{:?}", codec());
        assert!(!rendered.contains("test-secret"));
        assert!(rendered.contains("HS256"));
    }
}
