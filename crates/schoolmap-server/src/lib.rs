//! HTTP/JSON API server for registering schools and listing them by
//! proximity to a caller-supplied location.
//!
//! This crate contains the server framework, API schema types, error
//! handling, and route definitions. Business logic (validation, distance
//! ranking) lives in [`service::SchoolService`]; persistence sits behind
//! the `SchoolStore` trait from schoolmap-storage.

pub mod error;
pub mod handlers;
pub mod router;
pub mod schema;
pub mod service;
pub mod state;
