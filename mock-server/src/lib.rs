//! In-process replica of the external posts API (JSONPlaceholder-shaped).
//!
//! Serves `GET /posts` and `GET /posts/{id}` over a fixed, read-only corpus.
//! Used by the core crate's integration tests and runnable standalone.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tokio::net::TcpListener;

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Post {
    pub id: u64,
    pub title: String,
    pub body: String,
    #[serde(rename = "userId")]
    pub user_id: u64,
}

/// The API is read-only, so the whole state is an immutable shared slice;
/// list order is the corpus order.
pub type Db = Arc<Vec<Post>>;

/// The fixed corpus the standalone server and most tests run against.
/// Deliberately longer than one page (10) so pagination is exercisable.
pub fn seed_posts() -> Vec<Post> {
    let entries: [(&str, &str); 12] = [
        ("Hello World", "A first post to greet every reader out there."),
        ("Rust without fear", "Ownership and borrowing explained slowly."),
        ("Cooking with cast iron", "Heat management beats fancy cookware."),
        ("On writing less", "Hello brevity, goodbye filler paragraphs."),
        ("Trail notes, day 3", "Rain all morning, sun by the ridge line."),
        ("A tour of the night sky", "Start with the moon, work outward."),
        ("Why schedules slip", "Estimates compound; buffers do not."),
        ("The quiet value of logs", "You only miss them when they're gone."),
        ("Sourdough, attempt nine", "The starter finally behaves in winter."),
        ("Reading old codebases", "Every odd name once had a good reason."),
        ("Maps and territories", "A model is useful until it is believed."),
        ("Closing the loop", "Ship, observe, adjust, and ship again."),
    ];
    entries
        .iter()
        .enumerate()
        .map(|(i, (title, body))| Post {
            id: i as u64 + 1,
            title: (*title).to_string(),
            body: (*body).to_string(),
            user_id: i as u64 % 3 + 1,
        })
        .collect()
}

pub fn app() -> Router {
    app_with_posts(seed_posts())
}

pub fn app_with_posts(posts: Vec<Post>) -> Router {
    let db: Db = Arc::new(posts);
    Router::new()
        .route("/posts", get(list_posts))
        .route("/posts/{id}", get(get_post))
        .with_state(db)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

async fn list_posts(State(db): State<Db>) -> Json<Vec<Post>> {
    Json(db.as_ref().clone())
}

async fn get_post(State(db): State<Db>, Path(id): Path<u64>) -> Result<Json<Post>, StatusCode> {
    db.iter()
        .find(|post| post.id == id)
        .cloned()
        .map(Json)
        .ok_or(StatusCode::NOT_FOUND)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn post_serializes_to_wire_shape() {
        let post = Post {
            id: 1,
            title: "Test".to_string(),
            body: "Body".to_string(),
            user_id: 2,
        };
        let json = serde_json::to_value(&post).unwrap();
        assert_eq!(json["id"], 1);
        assert_eq!(json["title"], "Test");
        assert_eq!(json["body"], "Body");
        assert_eq!(json["userId"], 2);
    }

    #[test]
    fn seed_spans_more_than_one_page() {
        assert!(seed_posts().len() > 10);
    }

    #[test]
    fn seed_ids_are_unique_and_sequential() {
        let posts = seed_posts();
        let ids: Vec<u64> = posts.iter().map(|p| p.id).collect();
        let expected: Vec<u64> = (1..=posts.len() as u64).collect();
        assert_eq!(ids, expected);
    }
}
