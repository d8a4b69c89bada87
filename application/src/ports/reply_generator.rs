//! Reply generator port
//!
//! Defines the interface for the generation backend. Implementations
//! (adapters) live in the infrastructure layer.

use async_trait::async_trait;
use parlor_domain::Transcript;
use thiserror::Error;

/// Errors a fallible backend client can produce.
///
/// These never cross the [`ReplyGenerator`] boundary: the infrastructure
/// adapter absorbs them and substitutes the persona's in-character
/// fallback line. They are typed here so use-case tests can simulate
/// every failure mode the adapter must swallow.
#[derive(Error, Debug)]
pub enum GeneratorError {
    #[error("Connection error: {0}")]
    ConnectionError(String),

    #[error("Request failed: {0}")]
    RequestFailed(String),

    #[error("Malformed response: {0}")]
    MalformedResponse(String),

    #[error("Missing credentials: {0}")]
    MissingCredentials(String),

    #[error("Timeout")]
    Timeout,
}

/// Generation backend for host replies
///
/// One request/response exchange per call: given the transcript so far
/// (possibly empty, for the opening line), produce one display-ready
/// host reply. Infallible by contract — any internal failure resolves
/// to an in-character fallback string, never an error, so the session
/// controller has no error branch and the session can never get stuck
/// awaiting a reply.
#[async_trait]
pub trait ReplyGenerator: Send + Sync {
    async fn generate_reply(&self, transcript: &Transcript) -> String;
}
