//! HTTP adapter for the todo core.
//!
//! Routes are thin: each one validates input, calls exactly one
//! `TodoService` operation and serializes the result.

pub mod api;
pub mod error;

pub use api::{router, CreateTodoRequest, SharedService};
pub use error::ApiError;
