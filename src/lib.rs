//! Hockey rink renderer (workspace facade crate).
//!
//! The drawing code lives in dedicated crates under `crates/`; this package
//! re-exports them as `hockey_rink::{core,term,types}` and hosts the CLI.

pub mod logger;

pub use rink_core as core;
pub use rink_term as term;
pub use rink_types as types;
