//! Domain layer for parlor
//!
//! This crate contains the core entities and value objects for a hosted
//! party-game session. It has no dependencies on infrastructure or
//! presentation concerns.
//!
//! # Core Concepts
//!
//! ## Session
//!
//! One user chats with an AI "host" persona. The session owns an
//! append-only [`Transcript`] of [`Message`]s and a two-state
//! [`SessionStatus`] that guards the single outstanding backend call.
//!
//! ## Persona
//!
//! The host character is a [`HostPersona`] value injected into the
//! backend adapter at construction, never ambient global state.

pub mod core;
pub mod persona;
pub mod session;

// Re-export commonly used types
pub use crate::core::error::DomainError;
pub use persona::HostPersona;
pub use session::{
    entities::{Message, Role, Transcript},
    state::{GamePhase, SessionState, SessionStatus},
};
