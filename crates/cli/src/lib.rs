//! `warehouse-cli` — demo orchestration over the inventory ledger.
//!
//! Everything here is glue: read configuration, pick a recorder, run a fixed
//! sequence of ledger operations and print the results.

pub mod config;
pub mod demo;

pub use config::{ConfigError, DemoConfig, RecorderKind};
pub use demo::{SAVED_STORE, run_demo};
