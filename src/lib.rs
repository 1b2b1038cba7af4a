//! formguard - A strict, deterministic field-validation descriptor engine

pub mod cli;
pub mod descriptor;
pub mod model;
pub mod observability;
pub mod overrides;
pub mod resolve;
pub mod rules;
