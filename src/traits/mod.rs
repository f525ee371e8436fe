//! Trait abstractions for dependency injection and testability.
//!
//! - [`HttpClient`] - HTTP operations used by the backend client

pub mod http;

pub use http::{Headers, HttpClient, HttpError, Response};
