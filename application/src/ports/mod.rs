//! Ports (interfaces) for external collaborators

pub mod reply_generator;
