//! Killer darts scorekeeper (workspace facade crate).
//!
//! The scoring engine, key handling and terminal views live in dedicated
//! crates under `crates/` and are re-exported here. This crate adds the
//! pieces the binaries share: the [`App`] controller, [`AppConfig`], logger
//! setup and the headless script runner.

pub use killer_darts_core as core;
pub use killer_darts_input as input;
pub use killer_darts_term as term;
pub use killer_darts_types as types;

pub mod app;
pub mod config;
pub mod logging;
pub mod script;

pub use app::App;
pub use config::AppConfig;
