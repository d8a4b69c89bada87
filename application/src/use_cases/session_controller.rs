//! Session controller use case.
//!
//! The sole mutator of [`SessionState`]. Enforces the one-request-at-a-time
//! discipline as a two-state machine: `Idle --start/submit--> AwaitingReply
//! --(reply appended)--> Idle`. Ignoring `submit` while awaiting a reply is
//! a property of this state machine, not of UI-level input disabling.

use crate::ports::reply_generator::ReplyGenerator;
use parlor_domain::{DomainError, Message, SessionState, SessionStatus};
use std::sync::Arc;
use tracing::{debug, info};

/// Drives one hosted game session.
///
/// Owns the transcript and status; the presentation layer reads through
/// [`snapshot()`](SessionController::snapshot) and never mutates. The
/// generator port is infallible, so both operations always return the
/// session to `Idle` with a host message appended.
pub struct SessionController {
    state: SessionState,
    generator: Arc<dyn ReplyGenerator>,
}

impl SessionController {
    pub fn new(generator: Arc<dyn ReplyGenerator>) -> Self {
        Self {
            state: SessionState::new(),
            generator,
        }
    }

    /// Open the session: fetch the host's opening line.
    ///
    /// Single-invocation: once the transcript holds the opening message,
    /// further calls are rejected without mutating anything.
    pub async fn start(&mut self) -> Result<(), DomainError> {
        if !self.state.transcript.is_empty() || self.state.is_busy() {
            debug!("start ignored: session already started");
            return Err(DomainError::AlreadyStarted);
        }

        info!("Starting session");
        self.state.status = SessionStatus::AwaitingReply;
        let opening = self.generator.generate_reply(&self.state.transcript).await;
        self.state.transcript.push(Message::host(opening));
        self.state.status = SessionStatus::Idle;

        Ok(())
    }

    /// Submit one user message and await the host's reply.
    ///
    /// Rejected without mutation when `text` trims to empty or while a
    /// reply is already outstanding. On acceptance the transcript grows
    /// by exactly two messages: the user's, then the host's.
    pub async fn submit(&mut self, text: &str) -> Result<(), DomainError> {
        let text = text.trim();
        if text.is_empty() {
            debug!("submit ignored: empty input");
            return Err(DomainError::EmptySubmission);
        }
        if self.state.is_busy() {
            debug!("submit ignored: awaiting host reply");
            return Err(DomainError::Busy);
        }

        debug!(chars = text.len(), "Submitting user message");
        self.state.transcript.push(Message::user(text));
        self.state.status = SessionStatus::AwaitingReply;
        let reply = self.generator.generate_reply(&self.state.transcript).await;
        self.state.transcript.push(Message::host(reply));
        self.state.status = SessionStatus::Idle;

        Ok(())
    }

    /// Current (transcript, status, phase) snapshot for rendering.
    pub fn snapshot(&self) -> SessionState {
        self.state.clone()
    }
}
