//! Session state machine and game phase tag

use super::entities::Transcript;
use serde::{Deserialize, Serialize};
use std::fmt;

/// The two states of a session
///
/// `AwaitingReply` covers the whole interval between issuing a backend
/// request and appending its result; no second request may be issued
/// while in it. Transitions: `Idle --start/submit--> AwaitingReply`,
/// `AwaitingReply --(reply appended)--> Idle`. There is no terminal
/// state; sessions end by external teardown.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum SessionStatus {
    #[default]
    Idle,
    AwaitingReply,
}

impl SessionStatus {
    pub fn is_busy(&self) -> bool {
        matches!(self, SessionStatus::AwaitingReply)
    }
}

/// Stage tag for the party game
///
/// Carried on [`SessionState`] and shown by the presentation layer.
/// Nothing transitions it and nothing gates on it; the host drives the
/// game entirely through conversation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GamePhase {
    #[default]
    Welcome,
    WhatIf,
    MemoryChallenge,
    IfIWereYou,
    Finale,
}

impl fmt::Display for GamePhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            GamePhase::Welcome => "Welcome",
            GamePhase::WhatIf => "What If",
            GamePhase::MemoryChallenge => "Memory Challenge",
            GamePhase::IfIWereYou => "If I Were You",
            GamePhase::Finale => "Finale",
        };
        write!(f, "{}", label)
    }
}

/// Complete state of one hosted session (Entity)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SessionState {
    pub transcript: Transcript,
    pub status: SessionStatus,
    pub phase: GamePhase,
}

impl SessionState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_busy(&self) -> bool {
        self.status.is_busy()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_state_is_idle_and_empty() {
        let state = SessionState::new();
        assert_eq!(state.status, SessionStatus::Idle);
        assert!(!state.is_busy());
        assert!(state.transcript.is_empty());
        assert_eq!(state.phase, GamePhase::Welcome);
    }

    #[test]
    fn test_awaiting_reply_is_busy() {
        assert!(SessionStatus::AwaitingReply.is_busy());
        assert!(!SessionStatus::Idle.is_busy());
    }

    #[test]
    fn test_phase_display() {
        assert_eq!(GamePhase::Welcome.to_string(), "Welcome");
        assert_eq!(GamePhase::MemoryChallenge.to_string(), "Memory Challenge");
    }
}
