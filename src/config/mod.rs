//! Configuration model for the presets CLI.
//!
//! The config is an optional YAML file. Unknown fields are ignored and every
//! field has a default, so an empty file is a valid config.

mod model;
mod operations;


pub use model::Config;
