//! Domain DTOs for the posts API.
//!
//! # Design
//! These types mirror the remote API's schema (JSONPlaceholder-shaped) but
//! are defined independently from the mock-server crate; integration tests
//! catch any schema drift between the two.

use serde::{Deserialize, Serialize};

/// A single blog post returned by the API. Immutable once fetched — the
/// client never mutates or writes posts back.
///
/// Unknown fields in the wire JSON are ignored during deserialization.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Post {
    pub id: u64,
    pub title: String,
    pub body: String,
    #[serde(rename = "userId", default)]
    pub user_id: u64,
}
