//! API schema types for request/response definitions.
//!
//! Types use serde derives for JSON serialization/deserialization.

pub mod schools;
