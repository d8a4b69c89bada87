//! Generation backend adapters
//!
//! [`gemini::GeminiClient`] is the fallible HTTP client;
//! [`failsafe::FailsafeGenerator`] wraps it into the infallible
//! [`ReplyGenerator`](parlor_application::ReplyGenerator) port.

pub mod failsafe;
pub mod gemini;

use crate::providers::gemini::GeminiClient;
use async_trait::async_trait;
use parlor_application::ports::reply_generator::GeneratorError;
use parlor_domain::Transcript;

/// A fallible backend client, as seen by [`failsafe::FailsafeGenerator`].
///
/// Split from the application port so failure absorption lives in exactly
/// one place: clients report errors honestly, the failsafe wrapper turns
/// them into the persona's fallback line.
#[async_trait]
pub trait BackendClient: Send + Sync {
    async fn request_reply(&self, transcript: &Transcript) -> Result<String, GeneratorError>;
}

#[async_trait]
impl BackendClient for GeminiClient {
    async fn request_reply(&self, transcript: &Transcript) -> Result<String, GeneratorError> {
        self.generate_content(transcript).await
    }
}
