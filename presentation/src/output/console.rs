//! Console formatter for session transcripts
//!
//! A read-only projection of the session state: role label, text, and
//! time-of-day per message. Never feeds back into the controller.

use colored::Colorize;
use parlor_domain::{Message, Role, SessionState};

/// Formats session transcripts for console display
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    /// Format the whole transcript, one block per message.
    pub fn format(state: &SessionState) -> String {
        let mut output = String::new();

        for message in &state.transcript {
            output.push_str(&Self::format_message(message));
            output.push('\n');
        }

        output
    }

    /// Format a single message block.
    pub fn format_message(message: &Message) -> String {
        let time = message.timestamp.format("%H:%M");
        let label = match message.role {
            Role::Host => format!("[{}] {}", time, "Host".yellow().bold()),
            Role::User => format!("[{}] {}", time, "You".cyan().bold()),
        };
        format!("{}\n{}\n", label, message.text)
    }

    /// Format the session state as JSON
    pub fn format_json(state: &SessionState) -> String {
        serde_json::to_string_pretty(state).unwrap_or_else(|_| "{}".to_string())
    }

    /// Banner line shown above the chat: host title plus the phase badge.
    pub fn banner(state: &SessionState) -> String {
        format!(
            "{}  {}",
            "The Merry Host - live from the Studio of Laughs".bold(),
            format!("[{}]", state.phase).dimmed()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use parlor_domain::{GamePhase, Transcript};

    fn state_with(messages: &[Message]) -> SessionState {
        let mut transcript = Transcript::new();
        for m in messages {
            transcript.push(m.clone());
        }
        SessionState {
            transcript,
            ..SessionState::new()
        }
    }

    #[test]
    fn test_format_shows_messages_in_order() {
        colored::control::set_override(false);
        let state = state_with(&[Message::host("Welcome!"), Message::user("hi")]);

        let output = ConsoleFormatter::format(&state);
        let host_at = output.find("Welcome!").unwrap();
        let user_at = output.find("hi").unwrap();
        assert!(host_at < user_at);
        assert!(output.contains("Host"));
        assert!(output.contains("You"));
    }

    #[test]
    fn test_format_message_includes_time_of_day() {
        colored::control::set_override(false);
        let message = Message::host("Hello!");
        let expected = message.timestamp.format("%H:%M").to_string();

        let block = ConsoleFormatter::format_message(&message);
        assert!(block.contains(&expected));
    }

    #[test]
    fn test_format_json_round_trips_transcript_length() {
        let state = state_with(&[Message::host("A"), Message::user("B")]);
        let json = ConsoleFormatter::format_json(&state);

        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["transcript"]["messages"].as_array().unwrap().len(), 2);
        assert_eq!(value["status"], "Idle");
    }

    #[test]
    fn test_banner_shows_phase() {
        colored::control::set_override(false);
        let state = SessionState {
            phase: GamePhase::Finale,
            ..SessionState::new()
        };
        assert!(ConsoleFormatter::banner(&state).contains("Finale"));
    }
}
