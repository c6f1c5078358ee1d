//! # Coffee Shop Environment
//!
//! Deployment environment configuration for the coffee shop application.
//!
//! Each deployment variant (development, production) registers a complete
//! configuration record: the production flag, the API server base URL and
//! the Auth0 settings the public client is registered with. Records are
//! resolved through a layered pipeline (registered defaults, then an
//! optional per-variant TOML file, then `COFFEESHOP_*` environment
//! variables), validated eagerly, and immutable once published.

pub mod environment;
pub mod loader;
pub mod variant;

pub use environment::{AuthSettings, Environment};
pub use loader::{active, init, load, ENV_PREFIX};
pub use variant::Variant;
