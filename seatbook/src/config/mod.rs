//! Configuration system for seatbook.
//!
//! Configuration is merged from these sources, highest precedence first:
//!
//! 1. Programmatic overrides (via `ConfigBuilder::with_config`)
//! 2. Environment variables (`SEATBOOK_*`)
//! 3. User config (`<data dir>/config.yaml`)
//! 4. Built-in defaults
//!
//! # Examples
//!
//! ```no_run
//! use seatbook::config::ConfigBuilder;
//!
//! let config = ConfigBuilder::new().build().unwrap();
//! println!("busy timeout: {:?}", config.busy_timeout_seconds);
//! ```

pub mod builder;
pub mod environment;
pub mod loader;
pub mod schema;

pub use builder::ConfigBuilder;
pub use environment::EnvironmentConfig;
pub use loader::ConfigLoader;
pub use schema::{Config, OutputFormat};
