//! The kanban client's own route table

use once_cell::sync::OnceCell;

use crate::error::Result;
use crate::history::History;
use crate::route::Route;
use crate::table::RouteTable;
use crate::view::View;

/// Route names used for navigation by name
pub mod names {
    pub const HOME: &str = "home";
    pub const LOGIN: &str = "login";
    pub const REGISTER: &str = "register";
    pub const PROJECTS: &str = "projects";
    pub const PROJECT_DETAILS: &str = "project details";
}

/// The five application routes, in declaration order
pub fn declared_routes() -> Result<Vec<Route>> {
    Ok(vec![
        Route::new("/", names::HOME, View::Main)?,
        Route::new("/login", names::LOGIN, View::Login)?,
        Route::new("/signup", names::REGISTER, View::Register)?,
        Route::new("/projects", names::PROJECTS, View::Projects)?,
        Route::new("/projects/:id", names::PROJECT_DETAILS, View::KanbanBoard)?.with_props(),
    ])
}

/// Application table with web history at `/`
///
/// ```
/// use kanban_router::app;
///
/// let table = app::routes().unwrap();
/// assert_eq!(table.resolve("/signup").unwrap().name(), app::names::REGISTER);
/// ```
pub fn routes() -> Result<RouteTable> {
    routes_with_history(History::default())
}

pub fn routes_with_history(history: History) -> Result<RouteTable> {
    RouteTable::new()
        .with_history(history)
        .with_routes(declared_routes()?)
}

static SHARED: OnceCell<RouteTable> = OnceCell::new();

/// Process-wide application table, built on first use
///
/// History is web mode under `$BASE_URL`. Later changes to the environment
/// have no effect once the table exists.
pub fn shared() -> Result<&'static RouteTable> {
    SHARED.get_or_try_init(|| {
        tracing::debug!("building shared application route table");
        routes_with_history(History::from_env())
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_declared_routes_are_distinct() {
        let routes = declared_routes().unwrap();
        assert_eq!(routes.len(), 5);

        let names: HashSet<_> = routes.iter().map(|r| r.name.as_str()).collect();
        let paths: HashSet<_> = routes.iter().map(|r| r.pattern.as_str()).collect();
        assert_eq!(names.len(), routes.len());
        assert_eq!(paths.len(), routes.len());
    }

    #[test]
    fn test_only_board_forwards_props() {
        let forwarding: Vec<_> = declared_routes()
            .unwrap()
            .into_iter()
            .filter(|r| r.props_from_params)
            .map(|r| r.name)
            .collect();
        assert_eq!(forwarding, vec![names::PROJECT_DETAILS.to_string()]);
    }

    #[test]
    fn test_shared_is_built_once() {
        let first = shared().unwrap() as *const RouteTable;
        let second = shared().unwrap() as *const RouteTable;
        assert_eq!(first, second);
    }
}
