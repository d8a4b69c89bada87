//! Gemini `generateContent` wire types and transcript translation

use parlor_domain::{HostPersona, Role, Transcript};
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(super) struct GeminiRequest {
    pub contents: Vec<GeminiContent>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub system_instruction: Option<GeminiContent>,
    pub generation_config: GeminiGenerationConfig,
}

#[derive(Debug, Serialize, Deserialize)]
pub(super) struct GeminiContent {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    pub parts: Vec<GeminiPart>,
}

#[derive(Debug, Serialize, Deserialize)]
pub(super) struct GeminiPart {
    pub text: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(super) struct GeminiGenerationConfig {
    pub temperature: f32,
}

#[derive(Debug, Deserialize)]
pub(super) struct GeminiResponse {
    #[serde(default)]
    pub candidates: Vec<GeminiCandidate>,
}

#[derive(Debug, Deserialize)]
pub(super) struct GeminiCandidate {
    pub content: GeminiContent,
}

#[derive(Debug, Deserialize)]
pub(super) struct GeminiErrorResponse {
    pub error: GeminiApiError,
}

#[derive(Debug, Deserialize)]
pub(super) struct GeminiApiError {
    pub message: String,
}

/// Map a transcript onto a Gemini request.
///
/// `Role::User` maps to `"user"` and `Role::Host` to `"model"`; order is
/// preserved exactly. The persona's system instruction rides in
/// `systemInstruction`, reapplied identically on every call.
pub(super) fn build_request(persona: &HostPersona, transcript: &Transcript) -> GeminiRequest {
    let contents = transcript
        .iter()
        .map(|message| GeminiContent {
            role: Some(
                match message.role {
                    Role::User => "user",
                    Role::Host => "model",
                }
                .to_string(),
            ),
            parts: vec![GeminiPart {
                text: message.text.clone(),
            }],
        })
        .collect();

    GeminiRequest {
        contents,
        system_instruction: Some(GeminiContent {
            role: None,
            parts: vec![GeminiPart {
                text: persona.system_instruction.clone(),
            }],
        }),
        generation_config: GeminiGenerationConfig {
            temperature: persona.temperature,
        },
    }
}

/// Pull the reply text out of a decoded response.
///
/// Joins all text parts of the first candidate; `None` when the response
/// carries no candidates or only empty parts.
pub(super) fn extract_text(response: GeminiResponse) -> Option<String> {
    let candidate = response.candidates.into_iter().next()?;
    let text = candidate
        .content
        .parts
        .into_iter()
        .map(|part| part.text)
        .collect::<Vec<_>>()
        .join("");

    if text.is_empty() { None } else { Some(text) }
}
