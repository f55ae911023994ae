//! Authentication and authorization middleware.
//!
//! - [`auth`]: verifies the bearer token and exposes the caller as [`auth::AuthUser`]
//! - [`role`]: per-route-group role guards
//!
//! # Request Flow
//!
//! 1. Client sends `Authorization: Bearer <token>`
//! 2. [`auth::authenticate`] verifies the token and stores the caller's identity
//!    in the request extensions, or answers 401
//! 3. The guard installed by [`role::guard`] checks the identity against the
//!    group's required role, or answers 403
//! 4. The handler reads the caller through the [`auth::AuthUser`] extractor

pub mod auth;
pub mod role;
