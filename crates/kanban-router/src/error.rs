//! Error type shared by route construction, matching and URL generation

use thiserror::Error;

/// Everything that can go wrong while building or querying a route table
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RouteError {
    /// The requested path matches no route. The host shell picks the fallback.
    #[error("no route matches path '{path}'")]
    NotFound { path: String },

    /// Navigation by a name that is not declared in the table
    #[error("unknown route name '{name}'")]
    UnknownRouteName { name: String },

    /// URL generation was missing a value for a pattern parameter
    #[error("route '{route}' requires a non-empty value for parameter '{param}'")]
    MissingParam { route: String, param: String },

    #[error("route name '{name}' is declared more than once")]
    DuplicateName { name: String },

    /// Two patterns with the same shape (`/projects/:id` and `/projects/:pid`)
    #[error("path '{path}' overlaps with already declared path '{existing}'")]
    DuplicatePath { path: String, existing: String },

    /// A parameter the route's view has no input property for
    #[error("view '{view}' of route '{route}' cannot consume parameter '{param}'")]
    UnconsumedParam {
        route: String,
        view: String,
        param: String,
    },

    #[error("invalid route pattern '{pattern}': {reason}")]
    InvalidPattern { pattern: String, reason: String },

    #[error("unknown view '{view}'")]
    UnknownView { view: String },
}

impl RouteError {
    /// True for the one error a host is expected to handle at runtime
    pub fn is_not_found(&self) -> bool {
        matches!(self, RouteError::NotFound { .. })
    }
}

pub type Result<T> = std::result::Result<T, RouteError>;
