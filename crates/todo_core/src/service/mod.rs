//! Core use-case services.
//!
//! # Responsibility
//! - Orchestrate store calls into use-case level APIs.
//! - Keep HTTP/CLI adapters decoupled from storage details.

pub mod todo_service;
