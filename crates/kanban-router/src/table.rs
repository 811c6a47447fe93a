//! The route table: an immutable, ordered set of routes plus a history mode
//!
//! Construction enforces the table invariants (unique names, unique paths,
//! every parameter consumable by its view). Once built, the table is only
//! read: resolution and URL generation take `&self`.

use std::collections::HashMap;

use crate::error::{Result, RouteError};
use crate::history::History;
use crate::path::{normalize_path, Location};
use crate::route::{Params, Route, RouteMatch};

/// Ordered route collection with name lookup
#[derive(Debug, Clone)]
pub struct RouteTable {
    /// Routes in declaration order
    routes: Vec<Route>,
    /// Indices into `routes`, sorted by priority; declaration order breaks ties
    match_order: Vec<usize>,
    named_routes: HashMap<String, usize>,
    history: History,
    case_insensitive: bool,
}

impl Default for RouteTable {
    fn default() -> Self {
        Self::new()
    }
}

impl RouteTable {
    /// Empty table with web history at `/` and case-insensitive matching
    pub fn new() -> Self {
        Self {
            routes: Vec::new(),
            match_order: Vec::new(),
            named_routes: HashMap::new(),
            history: History::default(),
            case_insensitive: true,
        }
    }

    // ========================================================================
    // Builder Methods
    // ========================================================================

    pub fn with_history(mut self, history: History) -> Self {
        self.history = history;
        self
    }

    /// Switches between case-insensitive (default) and exact literal matching
    ///
    /// Routes already in the table are checked again under the new mode, so
    /// `/login` and `/LOGIN` cannot both survive a switch to case-insensitive.
    pub fn with_case_insensitive(mut self, case_insensitive: bool) -> Result<Self> {
        self.case_insensitive = case_insensitive;
        self.check_unique_paths()?;
        Ok(self)
    }

    /// Appends a route, rejecting anything that breaks a table invariant
    ///
    /// # Examples
    ///
    /// ```
    /// use kanban_router::{Route, RouteError, RouteTable, View};
    ///
    /// let table = RouteTable::new()
    ///     .with_route(Route::new("/login", "login", View::Login).unwrap())
    ///     .unwrap();
    ///
    /// let err = table
    ///     .with_route(Route::new("/sign-in", "login", View::Login).unwrap())
    ///     .unwrap_err();
    /// assert!(matches!(err, RouteError::DuplicateName { .. }));
    /// ```
    pub fn with_route(mut self, route: Route) -> Result<Self> {
        self.check_route(&route)?;

        tracing::debug!(
            name = %route.name,
            pattern = %route.pattern,
            view = %route.view,
            "route registered"
        );

        let index = self.routes.len();
        self.named_routes.insert(route.name.clone(), index);
        self.routes.push(route);
        self.rebuild_match_order();
        Ok(self)
    }

    /// Appends several routes, stopping at the first invalid one
    pub fn with_routes<I>(self, routes: I) -> Result<Self>
    where
        I: IntoIterator<Item = Route>,
    {
        routes
            .into_iter()
            .try_fold(self, |table, route| table.with_route(route))
    }

    fn check_route(&self, route: &Route) -> Result<()> {
        if self.named_routes.contains_key(&route.name) {
            return Err(RouteError::DuplicateName {
                name: route.name.clone(),
            });
        }

        let shape = self.comparable_shape(route);
        if let Some(existing) = self
            .routes
            .iter()
            .find(|existing| self.comparable_shape(existing) == shape)
        {
            return Err(RouteError::DuplicatePath {
                path: route.pattern.clone(),
                existing: existing.pattern.clone(),
            });
        }

        if let Some(param) = route.params.iter().find(|p| !route.view.accepts(p)) {
            return Err(RouteError::UnconsumedParam {
                route: route.name.clone(),
                view: route.view.to_string(),
                param: param.clone(),
            });
        }

        Ok(())
    }

    fn check_unique_paths(&self) -> Result<()> {
        let mut seen: HashMap<String, &Route> = HashMap::new();
        for route in &self.routes {
            if let Some(existing) = seen.insert(self.comparable_shape(route), route) {
                return Err(RouteError::DuplicatePath {
                    path: route.pattern.clone(),
                    existing: existing.pattern.clone(),
                });
            }
        }
        Ok(())
    }

    fn comparable_shape(&self, route: &Route) -> String {
        let shape = route.shape();
        if self.case_insensitive {
            shape.to_ascii_lowercase()
        } else {
            shape
        }
    }

    fn rebuild_match_order(&mut self) {
        let mut order: Vec<usize> = (0..self.routes.len()).collect();
        // stable sort: declaration order survives within a priority
        order.sort_by_key(|&i| self.routes[i].priority);
        self.match_order = order;
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    /// Routes in declaration order
    pub fn routes(&self) -> &[Route] {
        &self.routes
    }

    pub fn len(&self) -> usize {
        self.routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    pub fn is_case_insensitive(&self) -> bool {
        self.case_insensitive
    }

    pub fn get_route_by_name(&self, name: &str) -> Option<&Route> {
        self.named_routes.get(name).map(|&i| &self.routes[i])
    }

    // ========================================================================
    // Resolution
    // ========================================================================

    /// Resolves a requested path to the first matching route
    ///
    /// Query string and fragment are split off and returned decoded in the
    /// match; they take no part in route selection. Literal routes are tried
    /// before parameterized ones.
    ///
    /// # Examples
    ///
    /// ```
    /// use kanban_router::app;
    ///
    /// let table = app::routes().unwrap();
    ///
    /// let m = table.resolve("/projects/42?tab=done").unwrap();
    /// assert_eq!(m.name(), "project details");
    /// assert_eq!(m.props().get("id"), Some(&"42"));
    /// assert_eq!(m.query_value("tab"), Some("done"));
    ///
    /// assert!(table.resolve("/does-not-exist").unwrap_err().is_not_found());
    /// ```
    pub fn resolve(&self, requested: &str) -> Result<RouteMatch<'_>> {
        let location = Location::parse(requested);
        let path = normalize_path(location.path);

        let found = self.match_order.iter().find_map(|&i| {
            let route = &self.routes[i];
            tracing::trace!(candidate = %route.pattern, %path, "trying route");
            route
                .matches_with_options(&path, self.case_insensitive)
                .map(|params| (route, params))
        });

        match found {
            Some((route, params)) => {
                tracing::debug!(%path, name = %route.name, "route resolved");
                Ok(RouteMatch {
                    route,
                    params,
                    query: location.query_pairs(),
                    fragment: location.fragment.map(str::to_string),
                })
            }
            None => {
                tracing::debug!(%path, "no route matched");
                Err(RouteError::NotFound {
                    path: path.into_owned(),
                })
            }
        }
    }

    /// Resolves an address-bar URL, interpreting it through the history mode
    ///
    /// ```
    /// use kanban_router::{app, History};
    ///
    /// let table = app::routes().unwrap().with_history(History::hash("/"));
    /// let m = table.resolve_location("/#/signup").unwrap();
    /// assert_eq!(m.name(), "register");
    /// ```
    pub fn resolve_location(&self, location: &str) -> Result<RouteMatch<'_>> {
        let route_location = self.history.location_to_path(location);
        self.resolve(&route_location)
    }

    /// Builds the path for a named route
    ///
    /// ```
    /// use kanban_router::{app, Params};
    ///
    /// let table = app::routes().unwrap();
    /// let mut params = Params::new();
    /// params.insert("id".to_string(), "7".to_string());
    ///
    /// assert_eq!(table.resolve_by_name("project details", &params).unwrap(), "/projects/7");
    /// assert!(table.resolve_by_name("dashboard", &params).is_err());
    /// ```
    pub fn resolve_by_name(&self, name: &str, params: &Params) -> Result<String> {
        let route = self
            .get_route_by_name(name)
            .ok_or_else(|| RouteError::UnknownRouteName {
                name: name.to_string(),
            })?;
        route.generate_url(params)
    }

    /// [`resolve_by_name`](Self::resolve_by_name) taking parameter tuples
    ///
    /// ```
    /// use kanban_router::app;
    ///
    /// let table = app::routes().unwrap();
    /// let url = table.url_for_params("project details", &[("id", "42")]).unwrap();
    /// assert_eq!(url, "/projects/42");
    /// ```
    pub fn url_for_params(&self, name: &str, params: &[(&str, &str)]) -> Result<String> {
        let param_map: Params = params
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();

        self.resolve_by_name(name, &param_map)
    }

    /// Address-bar URL for a named route under the table's history mode
    pub fn href_for(&self, name: &str, params: &Params) -> Result<String> {
        let path = self.resolve_by_name(name, params)?;
        Ok(self.history.href(&path))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::view::View;

    fn route(path: &str, name: &str, view: View) -> Route {
        Route::new(path, name, view).unwrap()
    }

    #[test]
    fn test_duplicate_path_detected_across_param_names() {
        let table = RouteTable::new()
            .with_route(route("/projects/:id", "a", View::KanbanBoard))
            .unwrap();
        let err = table
            .with_route(route("/projects/:id/", "b", View::KanbanBoard))
            .unwrap_err();
        assert_eq!(
            err,
            RouteError::DuplicatePath {
                path: "/projects/:id".to_string(),
                existing: "/projects/:id".to_string(),
            }
        );
    }

    #[test]
    fn test_duplicate_path_respects_case_mode() {
        let insensitive = RouteTable::new()
            .with_route(route("/login", "login", View::Login))
            .unwrap();
        assert!(insensitive
            .with_route(route("/LOGIN", "login2", View::Login))
            .is_err());

        let sensitive = RouteTable::new()
            .with_case_insensitive(false)
            .unwrap()
            .with_route(route("/login", "login", View::Login))
            .unwrap();
        assert!(sensitive
            .with_route(route("/LOGIN", "login2", View::Login))
            .is_ok());
    }

    #[test]
    fn test_switching_to_case_insensitive_rechecks_paths() {
        let table = RouteTable::new()
            .with_case_insensitive(false)
            .unwrap()
            .with_route(route("/login", "a", View::Login))
            .unwrap()
            .with_route(route("/LOGIN", "b", View::Login))
            .unwrap();
        assert_eq!(table.len(), 2);

        let err = table.with_case_insensitive(true).unwrap_err();
        assert_eq!(
            err,
            RouteError::DuplicatePath {
                path: "/LOGIN".to_string(),
                existing: "/login".to_string(),
            }
        );
    }

    #[test]
    fn test_unconsumed_param_rejected() {
        let err = RouteTable::new()
            .with_route(route("/projects/:slug", "p", View::Projects))
            .unwrap_err();
        assert_eq!(
            err,
            RouteError::UnconsumedParam {
                route: "p".to_string(),
                view: "Projects".to_string(),
                param: "slug".to_string(),
            }
        );
    }

    #[test]
    fn test_literal_wins_regardless_of_declaration_order() {
        let table = RouteTable::new()
            .with_routes([
                route("/projects/:id", "board", View::KanbanBoard),
                route("/projects/new", "new", View::Projects),
            ])
            .unwrap();

        assert_eq!(table.resolve("/projects/new").unwrap().name(), "new");
        assert_eq!(table.resolve("/projects/old").unwrap().name(), "board");
    }

    #[test]
    fn test_case_sensitive_table() {
        let table = RouteTable::new()
            .with_case_insensitive(false)
            .unwrap()
            .with_route(route("/login", "login", View::Login))
            .unwrap();
        assert!(table.resolve("/login").is_ok());
        assert!(table.resolve("/Login").is_err());
    }

    #[test]
    fn test_not_found_reports_normalized_path() {
        let err = RouteTable::new().resolve("//nowhere/?q=1").unwrap_err();
        assert_eq!(
            err,
            RouteError::NotFound {
                path: "/nowhere".to_string()
            }
        );
    }

    #[test]
    fn test_href_for_uses_history() {
        let table = RouteTable::new()
            .with_history(History::hash("/board"))
            .with_route(route("/projects/:id", "board", View::KanbanBoard))
            .unwrap();
        let mut params = Params::new();
        params.insert("id".to_string(), "5".to_string());
        assert_eq!(table.href_for("board", &params).unwrap(), "/board/#/projects/5");
    }
}
