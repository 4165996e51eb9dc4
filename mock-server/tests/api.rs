use axum::http::{Request, StatusCode};
use http_body_util::BodyExt;
use mock_server::{app, app_with_posts, seed_posts, Post};
use tower::ServiceExt;

async fn body_json<T: serde::de::DeserializeOwned>(response: axum::response::Response) -> T {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

async fn body_bytes(response: axum::response::Response) -> bytes::Bytes {
    response.into_body().collect().await.unwrap().to_bytes()
}

fn get(uri: &str) -> Request<String> {
    Request::builder().uri(uri).body(String::new()).unwrap()
}

// --- list ---

#[tokio::test]
async fn list_posts_returns_full_seed_in_order() {
    let resp = app().oneshot(get("/posts")).await.unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let posts: Vec<Post> = body_json(resp).await;
    assert_eq!(posts, seed_posts());
}

#[tokio::test]
async fn list_posts_empty_corpus() {
    let resp = app_with_posts(Vec::new()).oneshot(get("/posts")).await.unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let posts: Vec<Post> = body_json(resp).await;
    assert!(posts.is_empty());
}

// --- get ---

#[tokio::test]
async fn get_post_by_id() {
    let resp = app().oneshot(get("/posts/1")).await.unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let post: Post = body_json(resp).await;
    assert_eq!(post.id, 1);
    assert_eq!(post.title, "Hello World");
}

#[tokio::test]
async fn get_missing_post_returns_404() {
    let resp = app().oneshot(get("/posts/999")).await.unwrap();

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    assert!(body_bytes(resp).await.is_empty());
}

#[tokio::test]
async fn get_non_numeric_id_is_an_error_status() {
    let resp = app().oneshot(get("/posts/abc")).await.unwrap();

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

// --- wire shape ---

#[tokio::test]
async fn posts_expose_camel_case_user_id() {
    let resp = app().oneshot(get("/posts/2")).await.unwrap();

    let value: serde_json::Value = body_json(resp).await;
    assert!(value.get("userId").is_some());
    assert!(value.get("user_id").is_none());
}
