//! Application layer for parlor
//!
//! Use cases and ports. The [`SessionController`] is the sole mutator of
//! session state; the [`ReplyGenerator`] port is how it talks to the
//! generation backend. Adapters live in the infrastructure layer.

pub mod ports;
pub mod use_cases;

pub use ports::reply_generator::{GeneratorError, ReplyGenerator};
pub use use_cases::session_controller::SessionController;
