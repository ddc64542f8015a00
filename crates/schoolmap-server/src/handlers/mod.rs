//! HTTP handler modules for the schoolmap API.
//!
//! Handlers are thin: they parse requests, acquire the service lock,
//! delegate to [`SchoolService`], and return JSON responses. No business
//! logic lives here.
//!
//! [`SchoolService`]: crate::service::SchoolService

pub mod schools;
