//! Path utilities for validation and normalization
//!
//! All functions are pure: same input, same output, no side effects.
use std::borrow::Cow;

pub mod location;
pub use location::{parse_query, Location};

/// Validates if a path is in canonical form
///
/// # Rules
///
/// - Must start with `/`
/// - Must not contain `//` or `\`
/// - Must not end with `/` (except root `/`)
/// - Must not be empty
///
/// # Examples
///
/// ```
/// use kanban_router::path::is_valid_path;
///
/// assert!(is_valid_path("/"));
/// assert!(is_valid_path("/projects/42"));
///
/// assert!(!is_valid_path(""));
/// assert!(!is_valid_path("login"));
/// assert!(!is_valid_path("/projects/"));
/// assert!(!is_valid_path("/projects//42"));
/// assert!(!is_valid_path("/projects\\42"));
/// ```
pub fn is_valid_path(path: &str) -> bool {
    if path.is_empty() || !path.starts_with('/') {
        return false;
    }

    if path.contains("//") || path.contains('\\') {
        return false;
    }

    path == "/" || !path.ends_with('/')
}

/// Normalize a path to canonical form
///
/// Returns `Cow::Borrowed` when the input is already canonical and
/// `Cow::Owned` when it had to be rewritten.
///
/// - Trailing slashes: `/projects/` → `/projects`
/// - Double slashes: `/projects//42` → `/projects/42`
/// - Backslashes: `\projects\42` → `/projects/42`
/// - Missing leading slash: `login` → `/login`
///
/// # Examples
///
/// ```
/// use kanban_router::path::normalize_path;
/// use std::borrow::Cow;
///
/// assert!(matches!(normalize_path("/login"), Cow::Borrowed("/login")));
/// assert_eq!(normalize_path("/projects/"), "/projects");
/// assert_eq!(normalize_path("\\projects\\7"), "/projects/7");
/// assert_eq!(normalize_path(""), "/");
/// ```
pub fn normalize_path(path: &str) -> Cow<'_, str> {
    if is_valid_path(path) {
        return Cow::Borrowed(path);
    }

    let normalized = path
        .replace('\\', "/")
        .split('/')
        .filter(|s| !s.is_empty())
        .collect::<Vec<_>>()
        .join("/");

    if normalized.is_empty() {
        Cow::Borrowed("/")
    } else {
        Cow::Owned(format!("/{}", normalized))
    }
}

/// Joins a base prefix and a canonical path without doubling the separator
///
/// ```
/// use kanban_router::path::join_base;
///
/// assert_eq!(join_base("/", "/login"), "/login");
/// assert_eq!(join_base("/app", "/login"), "/app/login");
/// assert_eq!(join_base("/app", "/"), "/app/");
/// ```
pub fn join_base(base: &str, path: &str) -> String {
    let base = base.trim_end_matches('/');
    if base.is_empty() {
        path.to_string()
    } else {
        format!("{}{}", base, path)
    }
}
