//! # Kanban Router
//!
//! The route table of the kanban web client: which view is shown for which
//! URL, how to build URLs for named routes, and how routes appear in the
//! address bar.
//!
//! - Literal routes (`/projects`)
//! - Single-segment parameters (`/projects/:id`), optionally forwarded to the
//!   view as input properties
//! - Navigation by route name
//! - Web and hash history modes under a deployment base path
//!
//! ## Path Normalization
//!
//! Requested paths are normalized before matching:
//! - Trailing slashes: `/projects/` → `/projects`
//! - Double slashes: `/projects//7` → `/projects/7`
//! - Backslashes: `\projects\7` → `/projects/7`
//! - Query strings and fragments are split off and do not affect matching
//!
//! ## Example
//!
//! ```
//! use kanban_router::{app, RouteError};
//!
//! let table = app::routes().unwrap();
//!
//! let m = table.resolve("/projects/42").unwrap();
//! assert_eq!(m.name(), "project details");
//! assert_eq!(m.param("id"), Some("42"));
//!
//! let url = table.url_for_params("project details", &[("id", "7")]).unwrap();
//! assert_eq!(url, "/projects/7");
//!
//! assert!(matches!(
//!     table.resolve("/does-not-exist"),
//!     Err(RouteError::NotFound { .. })
//! ));
//! ```

pub mod app;
pub mod config;
mod error;
mod history;
pub mod path;
pub mod route;
mod table;
mod view;

pub use config::Config;
pub use error::{Result, RouteError};
pub use history::{History, HistoryMode, BASE_URL_ENV};
pub use path::{is_valid_path, normalize_path, Location};
pub use route::{Params, PatternSegment, Route, RouteMatch};
pub use table::RouteTable;
pub use view::View;
