//! Todo domain model.
//!
//! # Responsibility
//! - Define the data structures shared by stores, services and adapters.
//!
//! # Invariants
//! - Every todo is identified by a `TodoId` unique within its collection.
//! - The collection order is insertion order.

pub mod todo;
