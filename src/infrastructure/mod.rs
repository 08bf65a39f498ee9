//! Infrastructure layer for external integrations.
//!
//! Implements interfaces defined by the domain layer with concrete storage
//! backends.

pub mod persistence;
