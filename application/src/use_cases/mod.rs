//! Application use cases

pub mod session_controller;
