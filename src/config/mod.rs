//! Configuration management.
//!
//! # Data Flow
//! ```text
//! config file (TOML, optional)
//!     → loader.rs (parse & deserialize, defaults when absent)
//!     → validation.rs (semantic checks)
//!     → FaucetConfig (validated, immutable)
//! ```
//!
//! # Design Decisions
//! - All fields have defaults, so a missing or empty config file is valid
//! - Validation separates syntactic (serde) from semantic checks
//! - The RPC endpoint is ordinary configuration; the CLI can override it

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::{load_config, ConfigError};
pub use schema::FaucetConfig;
