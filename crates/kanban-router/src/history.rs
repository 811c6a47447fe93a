//! History modes: how the current route is reflected in the address bar
//!
//! `web` mode puts the route path after the deployment base
//! (`/app/projects/7`); `hash` mode keeps the document URL fixed and stores
//! the route in the fragment (`/app/#/projects/7`).

use serde::{Deserialize, Serialize};
use std::borrow::Cow;

use crate::path::{join_base, normalize_path};

/// Environment variable holding the deployment base path
pub const BASE_URL_ENV: &str = "BASE_URL";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HistoryMode {
    /// Full paths through the HTML5 history API
    #[default]
    Web,
    /// Route kept in the URL fragment
    Hash,
}

/// A history mode bound to a deployment base path
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct History {
    mode: HistoryMode,
    base: String,
}

impl Default for History {
    fn default() -> Self {
        Self::web("/")
    }
}

impl History {
    /// `base` is normalized, so `app/`, `/app` and `/app/` are equivalent
    pub fn new(mode: HistoryMode, base: &str) -> Self {
        Self {
            mode,
            base: normalize_path(base).into_owned(),
        }
    }

    pub fn web(base: &str) -> Self {
        Self::new(HistoryMode::Web, base)
    }

    pub fn hash(base: &str) -> Self {
        Self::new(HistoryMode::Hash, base)
    }

    /// Web history rooted at `$BASE_URL`, or `/` when unset
    pub fn from_env() -> Self {
        let base = std::env::var(BASE_URL_ENV).unwrap_or_else(|_| "/".to_string());
        tracing::debug!(%base, "history base from environment");
        Self::web(&base)
    }

    pub fn mode(&self) -> HistoryMode {
        self.mode
    }

    /// Normalized base path, `/` for root deployments
    pub fn base(&self) -> &str {
        &self.base
    }

    /// Address-bar URL for a route path
    ///
    /// ```
    /// use kanban_router::History;
    ///
    /// assert_eq!(History::web("/app").href("/projects/7"), "/app/projects/7");
    /// assert_eq!(History::hash("/").href("/projects/7"), "/#/projects/7");
    /// assert_eq!(History::hash("/app").href("/login"), "/app/#/login");
    /// ```
    pub fn href(&self, path: &str) -> String {
        match self.mode {
            HistoryMode::Web => join_base(&self.base, path),
            HistoryMode::Hash => format!("{}#{}", join_base(&self.base, "/"), path),
        }
    }

    /// Route location (`path?query#fragment`) carried by an address-bar URL
    ///
    /// In web mode the base is stripped; a location outside the base is
    /// returned unchanged so that it fails to resolve instead of silently
    /// matching. In hash mode the fragment is the route location and an
    /// absent fragment means `/`, but only when the document path lies under
    /// the base; otherwise the location is returned unchanged as in web mode.
    ///
    /// ```
    /// use kanban_router::History;
    ///
    /// let web = History::web("/app");
    /// assert_eq!(web.location_to_path("/app/projects/7?tab=done"), "/projects/7?tab=done");
    /// assert_eq!(web.location_to_path("/app"), "/");
    ///
    /// let hash = History::hash("/app");
    /// assert_eq!(hash.location_to_path("/app/#/projects/7"), "/projects/7");
    /// assert_eq!(hash.location_to_path("/app/"), "/");
    /// assert_eq!(hash.location_to_path("/other/#/login"), "/other/#/login");
    /// ```
    pub fn location_to_path<'a>(&self, location: &'a str) -> Cow<'a, str> {
        match self.mode {
            HistoryMode::Web => self.strip_base(location),
            HistoryMode::Hash => {
                let (document, fragment) = match location.split_once('#') {
                    Some((document, fragment)) => (document, Some(fragment)),
                    None => (location, None),
                };

                // a bare fragment ("#/login") is relative to the current document
                if !document.is_empty() && !self.is_under_base(document) {
                    tracing::debug!(%location, base = %self.base, "location outside history base");
                    return Cow::Borrowed(location);
                }

                match fragment {
                    Some(route) if !route.is_empty() => Cow::Borrowed(route),
                    _ => Cow::Borrowed("/"),
                }
            }
        }
    }

    /// Whether `document` is the base itself or a path below it
    fn is_under_base(&self, document: &str) -> bool {
        if self.base == "/" {
            return true;
        }

        match document.strip_prefix(self.base.as_str()) {
            Some(rest) => rest.is_empty() || rest.starts_with('/') || rest.starts_with('?'),
            None => false,
        }
    }

    fn strip_base<'a>(&self, location: &'a str) -> Cow<'a, str> {
        if self.base == "/" {
            return Cow::Borrowed(location);
        }

        match location.strip_prefix(self.base.as_str()) {
            Some("") => Cow::Borrowed("/"),
            Some(rest) if rest.starts_with('/') => Cow::Borrowed(rest),
            Some(rest) if rest.starts_with('?') || rest.starts_with('#') => {
                Cow::Owned(format!("/{}", rest))
            }
            _ => Cow::Borrowed(location),
        }
    }
}
