//! Synchronous client core for a blog-reading frontend.
//!
//! # Overview
//! Builds `HttpRequest` values and parses `HttpResponse` values without
//! touching the network (host-does-IO pattern). The caller executes the
//! actual HTTP round-trip, making the core fully deterministic and testable.
//!
//! # Design
//! - `PostClient` is stateless — it holds only `base_url`.
//! - Each read operation is split into `build_*` (produces request) and
//!   `parse_*` (consumes response), so the I/O boundary is explicit.
//! - `ListScreen` and `DetailScreen` own the per-mount fetch lifecycle
//!   (loading / ready / failed) and derive their rendered views — filtered,
//!   paginated, highlighted — as pure functions of in-memory state.
//! - Types use owned `String` / `Vec` fields; DTOs are defined independently
//!   from the mock-server crate, and integration tests catch schema drift.

pub mod client;
pub mod error;
pub mod http;
pub mod page;
pub mod route;
pub mod screen;
pub mod search;
pub mod types;

pub use client::{PostClient, DEFAULT_BASE_URL};
pub use error::ApiError;
pub use http::{HttpMethod, HttpRequest, HttpResponse};
pub use route::Route;
pub use screen::{
    DetailScreen, DetailView, FetchState, ListItem, ListScreen, ListView, PendingFetch, Ticket,
};
pub use search::Span;
pub use types::Post;
