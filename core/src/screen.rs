//! Per-mount fetch lifecycles and view derivation for the two screens.
//!
//! # Design
//! A screen is a small state machine: mounting (or navigating to a new
//! identifier) puts it in `Loading` and hands the host a [`PendingFetch`]
//! to execute; the host reports the outcome through `resolve`, which moves
//! the screen to `Ready` or `Failed` exactly once. Every mount mints a fresh
//! [`Ticket`], and `resolve` ignores outcomes carrying a stale one, so a
//! response that arrives after the user has navigated on is a no-op rather
//! than a state corruption.
//!
//! Rendered views are derived on demand from in-memory state — nothing is
//! cached. The search query is owned by the host and passed into
//! [`ListScreen::view`] by reference on every call.

use tracing::warn;

use crate::client::PostClient;
use crate::error::ApiError;
use crate::http::{HttpRequest, HttpResponse};
use crate::page::{clamp_page, page_slice, total_pages};
use crate::route::Route;
use crate::search::{filter_posts, highlight, Span};
use crate::types::Post;

/// User-visible message when the post collection cannot be fetched.
pub const LIST_FETCH_FAILED: &str = "Failed to fetch posts";
/// User-visible message when a single post cannot be fetched.
pub const DETAIL_FETCH_FAILED: &str = "Failed to fetch post data";

/// Fetch lifecycle of one screen mount. Transitions `Loading -> Ready` or
/// `Loading -> Failed`, exactly once; a new mount or navigation is the only
/// way back to `Loading`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchState<T> {
    Loading,
    Ready(T),
    Failed(String),
}

/// Identifies which mount a fetch outcome belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ticket(u64);

/// A request the host must execute, paired with the ticket to hand back to
/// `resolve` along with the outcome.
#[derive(Debug, Clone)]
pub struct PendingFetch {
    pub ticket: Ticket,
    pub request: HttpRequest,
}

/// The post list: fetches the full collection once per mount and derives a
/// filtered, paginated, highlighted view from it.
#[derive(Debug)]
pub struct ListScreen {
    client: PostClient,
    state: FetchState<Vec<Post>>,
    page: u32,
    generation: u64,
}

/// One rendering of the list screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListView {
    Loading,
    Failed(String),
    Ready {
        items: Vec<ListItem>,
        page: u32,
        total_pages: u32,
        filtered_count: usize,
    },
}

/// A displayed post: highlighted title and body plus the route of its
/// detail screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListItem {
    pub id: u64,
    pub route: Route,
    pub title: Vec<Span>,
    pub body: Vec<Span>,
}

impl ListScreen {
    /// Mount the screen: state is `Loading` on page 1, and the returned
    /// fetch must be executed by the host.
    pub fn mount(client: PostClient) -> (Self, PendingFetch) {
        let screen = Self {
            client,
            state: FetchState::Loading,
            page: 1,
            generation: 0,
        };
        let pending = PendingFetch {
            ticket: Ticket(0),
            request: screen.client.build_list_posts(),
        };
        (screen, pending)
    }

    /// Navigate away and back: discard any previous result, invalidate
    /// outstanding tickets, and start a fresh fetch. This is the only retry
    /// affordance.
    pub fn remount(&mut self) -> PendingFetch {
        self.generation += 1;
        self.state = FetchState::Loading;
        self.page = 1;
        PendingFetch {
            ticket: Ticket(self.generation),
            request: self.client.build_list_posts(),
        }
    }

    /// Apply a fetch outcome. Outcomes for a superseded mount, or arriving
    /// after this mount already resolved, are ignored.
    pub fn resolve(&mut self, ticket: Ticket, outcome: Result<HttpResponse, ApiError>) {
        if ticket.0 != self.generation || !matches!(self.state, FetchState::Loading) {
            return;
        }
        let result = outcome.and_then(|response| self.client.parse_list_posts(response));
        self.state = match result {
            Ok(posts) => FetchState::Ready(posts),
            Err(error) => {
                warn!(%error, "post collection fetch failed");
                FetchState::Failed(LIST_FETCH_FAILED.to_string())
            }
        };
    }

    pub fn state(&self) -> &FetchState<Vec<Post>> {
        &self.state
    }

    pub fn page(&self) -> u32 {
        self.page
    }

    /// Jump to a 1-based page. Out-of-range values are tolerated here and
    /// clamped during derivation; hosts reacting to a query edit should call
    /// `set_page(1)`.
    pub fn set_page(&mut self, page: u32) {
        self.page = page.max(1);
    }

    /// Derive the rendered view for the current state and `query`. Pure —
    /// recomputed on every call, never cached, and `self` is not mutated.
    pub fn view(&self, query: &str) -> ListView {
        let posts = match &self.state {
            FetchState::Loading => return ListView::Loading,
            FetchState::Failed(message) => return ListView::Failed(message.clone()),
            FetchState::Ready(posts) => posts,
        };
        let filtered = filter_posts(posts, query);
        let total_pages = total_pages(filtered.len());
        let page = clamp_page(self.page, total_pages);
        let items = page_slice(&filtered, page)
            .iter()
            .map(|post| ListItem {
                id: post.id,
                route: Route::Post(post.id),
                title: highlight(&post.title, query),
                body: highlight(&post.body, query),
            })
            .collect();
        ListView::Ready {
            items,
            page,
            total_pages,
            filtered_count: filtered.len(),
        }
    }
}

/// A single post's detail: fetches by identifier, refetching whenever the
/// route identifier changes.
#[derive(Debug)]
pub struct DetailScreen {
    client: PostClient,
    id: u64,
    state: FetchState<Post>,
    generation: u64,
}

/// One rendering of the detail screen. `Ready` carries the screen's fixed
/// two-tier layout: a "Post Title" heading over the actual title, then a
/// "Description" heading over the body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DetailView {
    Loading,
    Failed(String),
    Ready {
        title_heading: &'static str,
        title: String,
        body_heading: &'static str,
        body: String,
    },
}

impl DetailScreen {
    pub fn mount(client: PostClient, id: u64) -> (Self, PendingFetch) {
        let screen = Self {
            client,
            id,
            state: FetchState::Loading,
            generation: 0,
        };
        let pending = PendingFetch {
            ticket: Ticket(0),
            request: screen.client.build_get_post(id),
        };
        (screen, pending)
    }

    /// The route identifier changed: re-enter `Loading` for the new post and
    /// invalidate any outstanding ticket.
    pub fn navigate(&mut self, id: u64) -> PendingFetch {
        self.generation += 1;
        self.id = id;
        self.state = FetchState::Loading;
        PendingFetch {
            ticket: Ticket(self.generation),
            request: self.client.build_get_post(id),
        }
    }

    /// Apply a fetch outcome; stale or duplicate outcomes are ignored. Any
    /// failure is terminal for this identifier — there is no retry.
    pub fn resolve(&mut self, ticket: Ticket, outcome: Result<HttpResponse, ApiError>) {
        if ticket.0 != self.generation || !matches!(self.state, FetchState::Loading) {
            return;
        }
        let result = outcome.and_then(|response| self.client.parse_get_post(response));
        self.state = match result {
            Ok(post) => FetchState::Ready(post),
            Err(error) => {
                warn!(%error, id = self.id, "post detail fetch failed");
                FetchState::Failed(DETAIL_FETCH_FAILED.to_string())
            }
        };
    }

    pub fn id(&self) -> u64 {
        self.id
    }

    pub fn state(&self) -> &FetchState<Post> {
        &self.state
    }

    pub fn view(&self) -> DetailView {
        match &self.state {
            FetchState::Loading => DetailView::Loading,
            FetchState::Failed(message) => DetailView::Failed(message.clone()),
            FetchState::Ready(post) => DetailView::Ready {
                title_heading: "Post Title",
                title: post.title.clone(),
                body_heading: "Description",
                body: post.body.clone(),
            },
        }
    }
}
