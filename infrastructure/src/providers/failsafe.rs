//! Failure-absorbing wrapper around a fallible backend client
//!
//! The session controller and presentation layer never see a failed
//! generation call: whatever goes wrong below this boundary, the session
//! always receives some display-ready string and returns to idle.

use crate::providers::BackendClient;
use async_trait::async_trait;
use parlor_application::ReplyGenerator;
use parlor_domain::{HostPersona, Transcript};
use std::sync::Arc;
use tracing::warn;

/// Implements the [`ReplyGenerator`] port over any [`BackendClient`],
/// substituting the persona's in-character fallback line on failure.
pub struct FailsafeGenerator {
    client: Arc<dyn BackendClient>,
    persona: HostPersona,
}

impl FailsafeGenerator {
    pub fn new(client: Arc<dyn BackendClient>, persona: HostPersona) -> Self {
        Self { client, persona }
    }
}

#[async_trait]
impl ReplyGenerator for FailsafeGenerator {
    async fn generate_reply(&self, transcript: &Transcript) -> String {
        match self.client.request_reply(transcript).await {
            Ok(reply) => reply,
            Err(e) => {
                warn!("Backend call failed, substituting fallback line: {}", e);
                self.persona.fallback_line.clone()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use parlor_application::ports::reply_generator::GeneratorError;
    use parlor_application::SessionController;

    struct AlwaysFails(fn() -> GeneratorError);

    #[async_trait]
    impl BackendClient for AlwaysFails {
        async fn request_reply(&self, _transcript: &Transcript) -> Result<String, GeneratorError> {
            Err((self.0)())
        }
    }

    struct AlwaysSucceeds;

    #[async_trait]
    impl BackendClient for AlwaysSucceeds {
        async fn request_reply(&self, _transcript: &Transcript) -> Result<String, GeneratorError> {
            Ok("And the crowd goes wild!".to_string())
        }
    }

    #[tokio::test]
    async fn test_success_passes_reply_through() {
        let generator =
            FailsafeGenerator::new(Arc::new(AlwaysSucceeds), HostPersona::default());

        let reply = generator.generate_reply(&Transcript::new()).await;
        assert_eq!(reply, "And the crowd goes wild!");
    }

    #[tokio::test]
    async fn test_every_failure_mode_yields_fallback_line() {
        let persona = HostPersona::default().with_fallback_line("Lights flickered!");
        let failures: Vec<fn() -> GeneratorError> = vec![
            || GeneratorError::Timeout,
            || GeneratorError::ConnectionError("refused".to_string()),
            || GeneratorError::RequestFailed("HTTP 500".to_string()),
            || GeneratorError::MalformedResponse("not json".to_string()),
            || GeneratorError::MissingCredentials("no key".to_string()),
        ];

        for failure in failures {
            let generator =
                FailsafeGenerator::new(Arc::new(AlwaysFails(failure)), persona.clone());
            let reply = generator.generate_reply(&Transcript::new()).await;
            assert_eq!(reply, "Lights flickered!");
            assert!(!reply.is_empty());
        }
    }

    #[tokio::test]
    async fn test_failed_backend_still_returns_session_to_idle() {
        let generator = Arc::new(FailsafeGenerator::new(
            Arc::new(AlwaysFails(|| GeneratorError::Timeout)),
            HostPersona::default(),
        ));
        let mut controller = SessionController::new(generator);

        controller.start().await.unwrap();
        controller.submit("hello?").await.unwrap();

        let state = controller.snapshot();
        assert!(!state.is_busy());
        assert_eq!(state.transcript.len(), 3);
        // Host slots hold the fallback line, not an error
        assert_eq!(
            state.transcript.messages()[2].text,
            HostPersona::default().fallback_line
        );
    }
}
