//! Shared helpers for integration tests.

pub mod entity_assertions;
