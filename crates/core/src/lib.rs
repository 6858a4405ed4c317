//! Storefront core types and utilities

pub mod config;
pub mod error;
#[cfg(all(feature = "subscriber", not(target_arch = "wasm32")))]
pub mod logging;
#[cfg(not(target_arch = "wasm32"))]
pub mod state_dir;
pub mod storage;
pub mod validation;

pub use config::{ApiConfig, LogConfig, StorageConfig, StorefrontConfig};
pub use error::{StorageError, StorageResult};
pub use storage::{ACCESS_KEY, MemoryStore, REFRESH_KEY, TokenStore};
pub use validation::{ValidateConfig, validators};

#[cfg(not(target_arch = "wasm32"))]
pub use state_dir::StateDir;
#[cfg(not(target_arch = "wasm32"))]
pub use storage::FileStore;
#[cfg(target_arch = "wasm32")]
pub use storage::BrowserStore;
