// src/core/mod.rs
//! Configuration and the two HTTP clients everything else builds on

pub mod auth_client;
pub mod config_manager;
pub mod service_client;

pub use auth_client::{Account, AuthClient, AuthClientConfig};
pub use config_manager::ConfigManager;
pub use service_client::{Identity, ServiceClient};
