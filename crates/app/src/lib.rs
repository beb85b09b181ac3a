//! Application layer: configuration, fixture catalog, role-gated page views.
//!
//! Pages are plain functions from `(session user, catalog, filter)` to a view
//! model; rendering is left to the caller.

pub mod authz;
pub mod config;
pub mod errors;
pub mod fixtures;
pub mod pages;

pub use crate::config::{AppConfig, ConfigError};
pub use errors::PageError;
pub use fixtures::{Catalog, FixtureError};
