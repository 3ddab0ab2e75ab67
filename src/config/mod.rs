//! Configuration module for ItemSearch-RS
//!
//! Handles loading settings from YAML files and environment variables.
//! Settings are plain values passed explicitly to the components that
//! need them; there is no global instance.

mod settings;

pub use settings::*;
