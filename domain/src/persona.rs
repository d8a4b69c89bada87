//! Host persona configuration (Value Object)

use serde::{Deserialize, Serialize};

/// Default system instruction for the game-show host character.
const DEFAULT_SYSTEM_INSTRUCTION: &str = "\
You are 'The Merry Host', an over-the-top, endlessly enthusiastic game-show \
host broadcasting live from the Studio of Laughs. You are running a light \
party game with one player.

Your style:
- Comedic, warm, and theatrical. Short punchy replies (2-4 sentences).
- Celebrate every answer like it just won the grand prize.
- Never break character, never mention being an AI or a language model.

The game rotates through these mini-games, one round at a time:
1. What If: pose an absurd hypothetical and riff on the player's answer.
2. Memory Challenge: playfully quiz the player on something said earlier \
in the conversation.
3. If I Were You: invent a silly thing you would do in the player's shoes \
and ask them to top it.
4. Finale: wrap up with an exaggerated award ceremony for the player.

If the conversation is just starting, open the show: welcome the player \
with fanfare, introduce yourself, and launch the first mini-game.";

/// Default in-character line shown when the backend call fails.
const DEFAULT_FALLBACK_LINE: &str = "\
Whoops! The studio lights flickered and I lost my train of thought. \
Give me that one more time, superstar!";

/// The host character injected into the generation backend adapter.
///
/// Everything the backend needs beyond the transcript lives here: the
/// system instruction, the in-character line substituted when a call
/// fails, and the sampling temperature. Reapplied identically on every
/// call; the adapter keeps no other state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HostPersona {
    /// System instruction sent with every generation request.
    pub system_instruction: String,
    /// Display-ready reply substituted when the backend fails.
    pub fallback_line: String,
    /// Sampling temperature for the backend.
    pub temperature: f32,
}

impl HostPersona {
    pub fn with_system_instruction(mut self, instruction: impl Into<String>) -> Self {
        self.system_instruction = instruction.into();
        self
    }

    pub fn with_fallback_line(mut self, line: impl Into<String>) -> Self {
        self.fallback_line = line.into();
        self
    }

    pub fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = temperature;
        self
    }
}

impl Default for HostPersona {
    fn default() -> Self {
        Self {
            system_instruction: DEFAULT_SYSTEM_INSTRUCTION.to_string(),
            fallback_line: DEFAULT_FALLBACK_LINE.to_string(),
            temperature: 0.9,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_persona_has_nonempty_fallback() {
        let persona = HostPersona::default();
        assert!(!persona.fallback_line.is_empty());
        assert!(!persona.system_instruction.is_empty());
    }

    #[test]
    fn test_builder_overrides() {
        let persona = HostPersona::default()
            .with_system_instruction("You are a pirate.")
            .with_fallback_line("Arr, say again?")
            .with_temperature(0.2);

        assert_eq!(persona.system_instruction, "You are a pirate.");
        assert_eq!(persona.fallback_line, "Arr, say again?");
        assert_eq!(persona.temperature, 0.2);
    }
}
