//! Error types for the posts API client.
//!
//! # Design
//! `NotFound` gets a dedicated variant because callers frequently distinguish
//! "the post does not exist" from "the server returned an unexpected status."
//! `Transport` carries failures the host hit before any response existed
//! (connection refused, DNS, timeout); the host converts its I/O error into
//! this variant so screens see one error type for every failure mode.

use thiserror::Error;

/// Errors surfaced by `PostClient` parse methods or reported by the host.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The host failed to execute the request at all.
    #[error("transport error: {0}")]
    Transport(String),

    /// The server returned 404 — the requested post does not exist.
    #[error("post not found")]
    NotFound,

    /// The server returned a non-2xx status other than 404.
    #[error("HTTP {status}: {body}")]
    Http { status: u16, body: String },

    /// The response body could not be deserialized into the expected type.
    #[error("deserialization failed: {0}")]
    Deserialization(String),
}
