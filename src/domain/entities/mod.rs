//! Core domain entities representing the business data model.
//!
//! Entities are plain data structures without business logic. Creation
//! inputs use separate structs (`NewShortLink`) so storage-assigned fields
//! never appear half-initialized.

pub mod link;

pub use link::{NewShortLink, ShortLink};
