//! Route definitions and matching
//!
//! A [`Route`] pairs a path pattern with a symbolic name and the view it
//! selects. Matching and URL generation are pure functions of the route.

pub mod parser;
pub mod pattern;

pub use parser::{calculate_priority, parse_pattern, ParsedPattern};
pub use pattern::{classify_segment, PatternSegment};

use std::collections::HashMap;

use crate::error::{Result, RouteError};
use crate::path::location::decode_segment;
use crate::view::View;

/// Captured path parameters, keyed by parameter name
pub type Params = HashMap<String, String>;

/// A single entry of the route table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Route {
    /// Canonical URL pattern like `/projects/:id`
    pub pattern: String,
    /// Symbolic name used for navigation by name
    pub name: String,
    /// View rendered when this route is current
    pub view: View,
    /// Whether captured params are passed to the view as input properties
    pub props_from_params: bool,
    /// Parameter names in pattern order
    pub params: Vec<String>,
    /// Matching precedence (lower = tried first)
    pub priority: usize,
    segments: Vec<PatternSegment>,
}

impl Route {
    /// Parses `path` and builds a route without prop forwarding
    ///
    /// # Examples
    ///
    /// ```
    /// use kanban_router::{Route, View};
    ///
    /// let route = Route::new("/projects/:id", "project details", View::KanbanBoard)
    ///     .unwrap()
    ///     .with_props();
    /// assert_eq!(route.params, vec!["id"]);
    /// assert!(route.props_from_params);
    /// ```
    pub fn new(path: &str, name: impl Into<String>, view: View) -> Result<Self> {
        let ParsedPattern {
            pattern,
            segments,
            params,
            priority,
        } = parse_pattern(path)?;

        Ok(Route {
            pattern,
            name: name.into(),
            view,
            props_from_params: false,
            params,
            priority,
            segments,
        })
    }

    /// Forward captured params to the view
    pub fn with_props(self) -> Self {
        self.with_props_from_params(true)
    }

    pub fn with_props_from_params(mut self, enabled: bool) -> Self {
        self.props_from_params = enabled;
        self
    }

    pub fn segments(&self) -> &[PatternSegment] {
        &self.segments
    }

    pub fn is_dynamic(&self) -> bool {
        !self.params.is_empty()
    }

    /// Pattern with parameter names erased, used to detect overlapping paths
    pub fn shape(&self) -> String {
        let body = self
            .segments
            .iter()
            .map(|seg| match seg {
                PatternSegment::Static(text) => text.as_str(),
                PatternSegment::Param(_) => ":",
            })
            .collect::<Vec<_>>()
            .join("/");
        format!("/{}", body)
    }

    /// Matches this route against a path (case-sensitive)
    pub fn matches(&self, path: &str) -> Option<Params> {
        self.matches_with_options(path, false)
    }

    /// Matches this route against a path
    ///
    /// The path is split on `/` with empty segments dropped, so trailing and
    /// doubled slashes do not affect the result. Each parameter consumes one
    /// segment and its value is percent-decoded.
    ///
    /// ```
    /// use kanban_router::{Route, View};
    ///
    /// let route = Route::new("/projects/:id", "project details", View::KanbanBoard).unwrap();
    /// let params = route.matches_with_options("/Projects/a%20b", true).unwrap();
    /// assert_eq!(params.get("id"), Some(&"a b".to_string()));
    /// assert!(route.matches("/projects").is_none());
    /// ```
    pub fn matches_with_options(&self, path: &str, case_insensitive: bool) -> Option<Params> {
        let path_segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();

        if path_segments.len() != self.segments.len() {
            return None;
        }

        fn match_segments(
            pattern_segments: &[PatternSegment],
            path_segments: &[&str],
            mut params: Params,
            case_insensitive: bool,
        ) -> Option<Params> {
            let (pattern_seg, rest_pattern) = match pattern_segments.split_first() {
                Some(split) => split,
                None => return path_segments.is_empty().then_some(params),
            };
            let (path_seg, rest_path) = path_segments.split_first()?;

            match pattern_seg {
                PatternSegment::Param(name) => {
                    params.insert(name.clone(), decode_segment(path_seg));
                }
                PatternSegment::Static(text) => {
                    let matches = if case_insensitive {
                        text.eq_ignore_ascii_case(path_seg)
                    } else {
                        text.as_str() == *path_seg
                    };
                    if !matches {
                        return None;
                    }
                }
            }

            match_segments(rest_pattern, rest_path, params, case_insensitive)
        }

        match_segments(&self.segments, &path_segments, Params::new(), case_insensitive)
    }

    /// Generates a URL for this route by substituting parameters
    ///
    /// Values are percent-encoded so each one stays a single segment.
    /// Extra entries in `params` are ignored.
    ///
    /// ```
    /// use kanban_router::{Params, Route, View};
    ///
    /// let route = Route::new("/projects/:id", "project details", View::KanbanBoard).unwrap();
    ///
    /// let mut params = Params::new();
    /// params.insert("id".to_string(), "7".to_string());
    /// assert_eq!(route.generate_url(&params).unwrap(), "/projects/7");
    ///
    /// assert!(route.generate_url(&Params::new()).is_err());
    /// ```
    pub fn generate_url(&self, params: &Params) -> Result<String> {
        let segments = self
            .segments
            .iter()
            .map(|segment| match segment {
                PatternSegment::Static(text) => Ok(text.clone()),
                PatternSegment::Param(name) => params
                    .get(name)
                    .filter(|value| !value.is_empty())
                    .map(|value| urlencoding::encode(value).into_owned())
                    .ok_or_else(|| RouteError::MissingParam {
                        route: self.name.clone(),
                        param: name.clone(),
                    }),
            })
            .collect::<Result<Vec<String>>>()?;

        Ok(format!("/{}", segments.join("/")))
    }
}

/// Result of resolving a location against the table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteMatch<'a> {
    /// The matched route
    pub route: &'a Route,
    /// Decoded path parameters
    pub params: Params,
    /// Decoded query pairs, in order
    pub query: Vec<(String, String)>,
    /// Fragment without the leading `#`
    pub fragment: Option<String>,
}

impl<'a> RouteMatch<'a> {
    pub fn name(&self) -> &'a str {
        &self.route.name
    }

    pub fn view(&self) -> View {
        self.route.view
    }

    pub fn param(&self, name: &str) -> Option<&str> {
        self.params.get(name).map(String::as_str)
    }

    /// Properties handed to the view: the path params when the route
    /// forwards them, nothing otherwise
    pub fn props(&self) -> HashMap<&str, &str> {
        if !self.route.props_from_params {
            return HashMap::new();
        }
        self.params
            .iter()
            .map(|(k, v)| (k.as_str(), v.as_str()))
            .collect()
    }

    /// First query value for `key`
    pub fn query_value(&self, key: &str) -> Option<&str> {
        self.query
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board() -> Route {
        Route::new("/projects/:id", "project details", View::KanbanBoard)
            .unwrap()
            .with_props()
    }

    #[test]
    fn test_route_static() {
        let route = Route::new("/signup", "register", View::Register).unwrap();
        assert_eq!(route.pattern, "/signup");
        assert!(!route.is_dynamic());
        assert_eq!(route.priority, 0);
        assert!(route.matches("/signup").is_some());
        assert!(route.matches("/signup/").is_some());
        assert!(route.matches("/register").is_none());
    }

    #[test]
    fn test_root_matches_only_root() {
        let route = Route::new("/", "home", View::Main).unwrap();
        assert!(route.matches("/").is_some());
        assert!(route.matches("").is_some());
        assert!(route.matches("/login").is_none());
    }

    #[test]
    fn test_param_requires_non_empty_segment() {
        let route = board();
        assert!(route.matches("/projects/").is_none());
        assert!(route.matches("/projects//").is_none());
        assert!(route.matches("/projects/1/cards").is_none());
    }

    #[test]
    fn test_shape_erases_param_names() {
        let other = Route::new("/projects/:pid", "other", View::KanbanBoard).unwrap();
        assert_eq!(board().shape(), other.shape());
        assert_eq!(board().shape(), "/projects/:");
    }

    #[test]
    fn test_case_sensitivity() {
        let route = board();
        assert!(route.matches("/PROJECTS/9").is_none());
        let params = route.matches_with_options("/PROJECTS/Nine", true).unwrap();
        assert_eq!(params.get("id"), Some(&"Nine".to_string()));
    }

    #[test]
    fn test_encoded_slash_stays_in_param() {
        let params = board().matches("/projects/a%2Fb").unwrap();
        assert_eq!(params.get("id"), Some(&"a/b".to_string()));
    }

    #[test]
    fn test_generate_url_encodes_values() {
        let mut params = Params::new();
        params.insert("id".to_string(), "a/b c".to_string());
        assert_eq!(board().generate_url(&params).unwrap(), "/projects/a%2Fb%20c");
    }

    #[test]
    fn test_generate_url_rejects_empty_value() {
        let mut params = Params::new();
        params.insert("id".to_string(), String::new());
        let err = board().generate_url(&params).unwrap_err();
        assert_eq!(
            err,
            RouteError::MissingParam {
                route: "project details".to_string(),
                param: "id".to_string(),
            }
        );
    }

    #[test]
    fn test_generate_url_root() {
        let route = Route::new("/", "home", View::Main).unwrap();
        assert_eq!(route.generate_url(&Params::new()).unwrap(), "/");
    }

    #[test]
    fn test_props_follow_flag() {
        let with_props = board();
        let params = with_props.matches("/projects/42").unwrap();
        let m = RouteMatch {
            route: &with_props,
            params,
            query: Vec::new(),
            fragment: None,
        };
        assert_eq!(m.props().get("id"), Some(&"42"));

        let without = board().with_props_from_params(false);
        let m = RouteMatch {
            route: &without,
            params: without.matches("/projects/42").unwrap(),
            query: Vec::new(),
            fragment: None,
        };
        assert!(m.props().is_empty());
        assert_eq!(m.param("id"), Some("42"));
    }
}
