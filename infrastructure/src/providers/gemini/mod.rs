//! Google Gemini backend adapter

mod client;
mod wire;

pub use client::GeminiClient;
