//! Infrastructure layer for parlor
//!
//! Adapters for external collaborators: the Gemini generation backend
//! and the configuration file/environment loader.

pub mod config;
pub mod providers;

pub use config::{ConfigLoader, FileConfig, GeminiConfig};
pub use providers::failsafe::FailsafeGenerator;
pub use providers::gemini::GeminiClient;
