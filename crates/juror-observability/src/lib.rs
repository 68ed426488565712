//! # juror-observability
//!
//! Tracing subscriber setup and the spans every juror run is recorded under.

pub mod tracing_setup;

pub use tracing_setup::{init_from_config, init_tracing, init_tracing_json};
