//! Navigation routes: `/` for the list screen, `/post/{id}` for detail.

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    List,
    Post(u64),
}

impl Route {
    /// Parse a path into a route. Unknown paths and non-numeric identifiers
    /// yield `None`.
    pub fn parse(path: &str) -> Option<Route> {
        if path == "/" {
            return Some(Route::List);
        }
        let id = path.strip_prefix("/post/")?;
        if id.is_empty() || id.contains('/') {
            return None;
        }
        id.parse().ok().map(Route::Post)
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Route::List => write!(f, "/"),
            Route::Post(id) => write!(f, "/post/{id}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_list_and_post_routes() {
        assert_eq!(Route::parse("/"), Some(Route::List));
        assert_eq!(Route::parse("/post/7"), Some(Route::Post(7)));
    }

    #[test]
    fn rejects_unknown_and_malformed_paths() {
        assert_eq!(Route::parse(""), None);
        assert_eq!(Route::parse("/posts"), None);
        assert_eq!(Route::parse("/post/"), None);
        assert_eq!(Route::parse("/post/abc"), None);
        assert_eq!(Route::parse("/post/1/extra"), None);
    }

    #[test]
    fn display_roundtrips_through_parse() {
        for route in [Route::List, Route::Post(42)] {
            assert_eq!(Route::parse(&route.to_string()), Some(route));
        }
    }
}
