//! Token codec and access policy for the fitness API.
//!
//! A request is handled in two phases:
//!
//! 1. **Authenticate**: [`extract_bearer`] pulls the token from the
//!    `Authorization` header and [`TokenCodec::verify`] recovers the caller's
//!    [`Identity`].
//! 2. **Authorize**: [`authorize`] checks that identity against the
//!    [`RequiredRole`] declared for the route.
//!
//! Failure at either phase is terminal for the request. Tokens are obtained
//! through [`sign_in_admin`] and [`sign_in_trainer`].

pub mod bearer;
pub mod claims;
pub mod errors;
pub mod jwt;
pub mod policy;
pub mod sign_in;

pub use bearer::extract_bearer;
pub use claims::{Claims, Identity, Role};
pub use errors::AuthError;
pub use jwt::{SIGNING_ALGORITHM, TokenCodec};
pub use policy::{RequiredRole, authorize};
pub use sign_in::{
    AdminCredential, CredentialStore, SignedIn, TrainerCredential, sign_in_admin, sign_in_trainer,
};
