//! Somaleo infrastructure layer.
//!
//! Filesystem implementations of the persistence traits defined in
//! `somaleo-core`: the transcript cache, the session token store, and
//! configuration loading, all rooted under one base directory resolved by
//! [`paths::SomaleoPaths`].

pub mod config_service;
pub mod history_cache;
pub mod paths;
pub mod token_store;

pub use config_service::ConfigService;
pub use history_cache::{DEFAULT_SESSION_KEY, FileHistoryCache};
pub use paths::SomaleoPaths;
pub use token_store::FileTokenStore;
