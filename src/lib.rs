//! # Fitness Studio API
//!
//! A REST API built with Axum and PostgreSQL for running a fitness studio:
//! administrators, trainers, clients, workout types and scheduled workouts.
//!
//! ## Architecture
//!
//! ```text
//! src/
//! ├── middleware/       # Token authentication and role guards
//! ├── modules/          # Feature modules
//! │   ├── auth/         # Admin and trainer sign-in
//! │   ├── admins/
//! │   ├── trainers/     # Trainers and their revenue
//! │   ├── clients/
//! │   ├── workout_types/
//! │   └── workouts/
//! ├── docs.rs           # OpenAPI document
//! ├── logging.rs        # Tracing setup and request logging
//! ├── router.rs         # Route tree
//! └── validator.rs      # Validated JSON extractor
//! ```
//!
//! Each feature module has a `controller.rs` (HTTP handlers), `service.rs`
//! (queries) and `router.rs` (routes and their required role).
//!
//! ## Roles
//!
//! | Role | Can |
//! |------|-----|
//! | Admin | Everything |
//! | Trainer | Read workout types and their own workouts, change workout status, see their own revenue |
//!
//! Admins sign in with login and password. Trainers sign in with the opaque
//! token generated when an admin created them. Both receive a JWT valid for
//! `JWT_TOKEN_TTL_HOURS` (default 1460).
//!
//! ## Bootstrapping
//!
//! Creating admins over HTTP requires an admin token, so the first one comes
//! from the CLI:
//!
//! ```bash
//! cargo run -p fitness-cli -- create-admin --super
//! ```
//!
//! API documentation is served at `/swagger-ui` and `/scalar`.

pub mod docs;
pub mod logging;
pub mod middleware;
pub mod modules;
pub mod router;
pub mod state;
pub mod validator;

pub use fitness_auth;
pub use fitness_config;
pub use fitness_core;
pub use fitness_db;
