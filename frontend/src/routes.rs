//! Client-side routes and `history.pushState` navigation.

use wasm_bindgen::JsValue;
use web_sys::UrlSearchParams;

#[derive(Clone, Debug, PartialEq)]
pub enum Route {
    Home,
    /// `/datasets?q=…`; the query seeds the listing search box.
    Datasets { query: String },
    Dataset(u64),
    Categories,
    Category(u64),
    Contribute,
    Dashboard,
    Login,
    NotFound,
}

impl Route {
    /// Parses a pathname. `query` is the already decoded `q` search
    /// parameter, if any.
    pub fn parse(path: &str, query: Option<String>) -> Self {
        let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();
        match segments.as_slice() {
            [] => Route::Home,
            ["datasets"] => Route::Datasets {
                query: query.unwrap_or_default(),
            },
            ["datasets", id] => id.parse().map(Route::Dataset).unwrap_or(Route::NotFound),
            ["categories"] => Route::Categories,
            ["categories", id] => id.parse().map(Route::Category).unwrap_or(Route::NotFound),
            ["contribute"] => Route::Contribute,
            ["dashboard"] => Route::Dashboard,
            ["login"] => Route::Login,
            _ => Route::NotFound,
        }
    }

    pub fn path(&self) -> String {
        match self {
            Route::Home => "/".to_string(),
            Route::Datasets { query } if query.is_empty() => "/datasets".to_string(),
            Route::Datasets { query } => {
                let encoded: String = js_sys::encode_uri_component(query).into();
                format!("/datasets?q={encoded}")
            }
            Route::Dataset(id) => format!("/datasets/{id}"),
            Route::Categories => "/categories".to_string(),
            Route::Category(id) => format!("/categories/{id}"),
            Route::Contribute => "/contribute".to_string(),
            Route::Dashboard => "/dashboard".to_string(),
            Route::Login => "/login".to_string(),
            Route::NotFound => "/404".to_string(),
        }
    }

    pub fn datasets() -> Self {
        Route::Datasets {
            query: String::new(),
        }
    }

    /// Header entry this route belongs to.
    pub fn section(&self) -> &'static str {
        match self {
            Route::Home => "home",
            Route::Datasets { .. } | Route::Dataset(_) => "datasets",
            Route::Categories | Route::Category(_) => "categories",
            Route::Contribute => "contribute",
            Route::Dashboard => "dashboard",
            Route::Login => "login",
            Route::NotFound => "",
        }
    }
}

/// Route of the current browser location.
pub fn current() -> Route {
    let Some(location) = web_sys::window().map(|w| w.location()) else {
        return Route::Home;
    };
    let path = location.pathname().unwrap_or_default();
    let query = location
        .search()
        .ok()
        .and_then(|search| UrlSearchParams::new_with_str(&search).ok())
        .and_then(|params| params.get("q"));
    Route::parse(&path, query)
}

/// Pushes a history entry for `route` and scrolls back to the top.
pub fn push(route: &Route) {
    if let Some(window) = web_sys::window() {
        if let Ok(history) = window.history() {
            history
                .push_state_with_url(&JsValue::NULL, "", Some(&route.path()))
                .ok();
        }
        window.scroll_to_with_x_and_y(0.0, 0.0);
    }
}

/// Replaces the current history entry; used for access redirects so that
/// "back" does not bounce the user into the redirect again.
pub fn replace(route: &Route) {
    if let Some(history) = web_sys::window().and_then(|w| w.history().ok()) {
        history
            .replace_state_with_url(&JsValue::NULL, "", Some(&route.path()))
            .ok();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_known_paths() {
        assert_eq!(Route::parse("/", None), Route::Home);
        assert_eq!(Route::parse("/datasets/", None), Route::datasets());
        assert_eq!(
            Route::parse("/datasets", Some("flood".into())),
            Route::Datasets {
                query: "flood".into()
            }
        );
        assert_eq!(Route::parse("/datasets/42", None), Route::Dataset(42));
        assert_eq!(Route::parse("/categories", None), Route::Categories);
        assert_eq!(Route::parse("/categories/3/", None), Route::Category(3));
        assert_eq!(Route::parse("/dashboard", None), Route::Dashboard);
        assert_eq!(Route::parse("/login", None), Route::Login);
        assert_eq!(Route::parse("/contribute", None), Route::Contribute);
    }

    #[test]
    fn unknown_paths_are_not_found() {
        assert_eq!(Route::parse("/datasets/abc", None), Route::NotFound);
        assert_eq!(Route::parse("/map", None), Route::NotFound);
        assert_eq!(Route::parse("/categories/health", None), Route::NotFound);
        assert_eq!(Route::parse("/datasets/1/extra", None), Route::NotFound);
    }

    #[test]
    fn paths_round_trip_without_query() {
        for route in [
            Route::Home,
            Route::datasets(),
            Route::Dataset(7),
            Route::Categories,
            Route::Category(12),
            Route::Contribute,
            Route::Dashboard,
            Route::Login,
        ] {
            assert_eq!(Route::parse(&route.path(), None), route);
        }
    }
}
