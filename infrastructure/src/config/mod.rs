//! Configuration loading

mod file_config;
mod loader;

pub use file_config::{FileConfig, GeminiConfig, PersonaConfig};
pub use loader::ConfigLoader;
