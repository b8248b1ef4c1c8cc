//! Cube service client: remote and local backends behind one trait, plus the
//! controller that turns service responses into store updates.
//!
//! # Invariants
//! - Service responses are validated before they reach the store.
//! - A failed call leaves the stored state untouched.
//! - Reset is local and never calls a service.

pub mod config;
pub mod controller;
pub mod error;
pub mod http;
pub mod local;
pub mod service;
pub mod wire;

pub use config::{ClientConfig, ConfigError};
pub use controller::CubeController;
pub use error::ServiceError;
pub use http::HttpCubeService;
pub use local::LocalCubeService;
pub use service::{CubeService, Prediction};
