//! Somaleo interaction layer.
//!
//! HTTP clients for the remote tutor service: [`TutorApiClient`] implements
//! the `TutorBackend` and `ProfileSource` traits from `somaleo-core`,
//! [`AuthApiClient`] drives the `/auth/*` endpoints with a development
//! fallback account.

pub mod auth_api;
pub mod tutor_api;

pub use auth_api::AuthApiClient;
pub use tutor_api::TutorApiClient;
