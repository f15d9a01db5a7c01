//! Reality checks for strategic objectives.
//!
//! The [`workflows::reality_check`] engine scores how coherent an objective is with the KPIs
//! meant to prove it. [`workflows::runs`] wraps the engine with submission validation, run
//! history and HTTP routes.

pub mod config;
pub mod error;
pub mod telemetry;
pub mod workflows;
