// src/config/mod.rs
pub mod policy;
pub mod services;

pub use policy::{PolicyConfig, DEFAULT_POLICY_PATH, ENV_POLICY_PATH};
pub use services::ServicesConfig;
