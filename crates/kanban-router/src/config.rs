// File: src/config.rs
// Purpose: Route table configuration parsing from kanban-routes.toml

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::app;
use crate::history::{History, HistoryMode, BASE_URL_ENV};
use crate::route::Route;
use crate::table::RouteTable;
use crate::view::View;

/// Default config file name, looked up in the working directory
pub const DEFAULT_CONFIG_FILE: &str = "kanban-routes.toml";

/// Router configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct Config {
    #[serde(default)]
    pub history: HistoryConfig,

    #[serde(default)]
    pub routing: RoutingConfig,

    /// Route declarations; empty means the built-in application routes
    #[serde(default)]
    pub routes: Vec<RouteConfig>,
}

/// History configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct HistoryConfig {
    #[serde(default)]
    pub mode: HistoryMode,

    /// Deployment base path (e.g. "/app")
    #[serde(default = "default_base")]
    pub base: String,
}

/// Matching configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RoutingConfig {
    /// Whether literal segments match case-insensitively (default: true)
    #[serde(default = "default_true")]
    pub case_insensitive: bool,
}

/// One `[[routes]]` entry
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RouteConfig {
    pub path: String,
    pub name: String,
    pub view: View,

    /// Forward path params to the view as input properties
    #[serde(default)]
    pub props: bool,
}

fn default_base() -> String {
    "/".to_string()
}

fn default_true() -> bool {
    true
}

impl Default for HistoryConfig {
    fn default() -> Self {
        Self {
            mode: HistoryMode::default(),
            base: default_base(),
        }
    }
}

impl Default for RoutingConfig {
    fn default() -> Self {
        Self {
            case_insensitive: true,
        }
    }
}

impl RouteConfig {
    pub fn to_route(&self) -> crate::Result<Route> {
        Ok(Route::new(&self.path, self.name.clone(), self.view)?.with_props_from_params(self.props))
    }
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();

        // Missing file means defaults
        if !path.exists() {
            tracing::debug!(?path, "config file not found, using defaults");
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {:?}", path))?;

        if content.trim().is_empty() {
            return Ok(Self::default());
        }

        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {:?}", path))?;

        tracing::debug!(?path, routes = config.routes.len(), "config loaded");
        Ok(config)
    }

    /// Load configuration from default path (./kanban-routes.toml)
    pub fn load_default() -> Result<Self> {
        Self::load(DEFAULT_CONFIG_FILE)
    }

    /// Replaces the history base when `base` is given
    pub fn with_base_override(mut self, base: Option<String>) -> Self {
        if let Some(base) = base {
            self.history.base = base;
        }
        self
    }

    /// Applies `$BASE_URL` on top of the file settings
    pub fn with_env_overrides(self) -> Self {
        let base = std::env::var(BASE_URL_ENV).ok();
        self.with_base_override(base)
    }

    pub fn history(&self) -> History {
        History::new(self.history.mode, &self.history.base)
    }

    /// Builds and validates the configured route table
    pub fn build_table(&self) -> Result<RouteTable> {
        let routes = if self.routes.is_empty() {
            app::declared_routes()?
        } else {
            self.routes
                .iter()
                .map(RouteConfig::to_route)
                .collect::<crate::Result<Vec<_>>>()?
        };

        let table = RouteTable::new()
            .with_history(self.history())
            .with_case_insensitive(self.routing.case_insensitive)
            .and_then(|table| table.with_routes(routes))
            .context("Invalid route table")?;

        Ok(table)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::RouteError;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.history.mode, HistoryMode::Web);
        assert_eq!(config.history.base, "/");
        assert!(config.routing.case_insensitive);
        assert!(config.routes.is_empty());
    }

    #[test]
    fn test_empty_config_builds_app_table() {
        let config = toml::from_str::<Config>("").unwrap_or_default();
        let table = config.build_table().unwrap();
        assert_eq!(table.len(), 5);
        assert_eq!(table.resolve("/projects/3").unwrap().param("id"), Some("3"));
    }

    #[test]
    fn test_custom_table() {
        let toml = r#"
            [history]
            mode = "hash"
            base = "/kanban"

            [routing]
            case_insensitive = false

            [[routes]]
            path = "/"
            name = "home"
            view = "main"

            [[routes]]
            path = "/boards/:id"
            name = "board"
            view = "kanban-board"
            props = true
        "#;
        let config: Config = toml::from_str(toml).unwrap();
        let table = config.build_table().unwrap();

        assert_eq!(table.len(), 2);
        assert!(!table.is_case_insensitive());
        assert_eq!(table.history().base(), "/kanban");

        let m = table.resolve_location("/kanban/#/boards/9").unwrap();
        assert_eq!(m.name(), "board");
        assert_eq!(m.props().get("id"), Some(&"9"));
    }

    #[test]
    fn test_invalid_table_is_an_error() {
        let toml = r#"
            [[routes]]
            path = "/a"
            name = "same"
            view = "main"

            [[routes]]
            path = "/b"
            name = "same"
            view = "login"
        "#;
        let config: Config = toml::from_str(toml).unwrap();
        let err = config.build_table().unwrap_err();
        assert!(matches!(
            err.downcast_ref::<RouteError>(),
            Some(RouteError::DuplicateName { .. })
        ));
    }

    #[test]
    fn test_unknown_view_fails_to_parse() {
        let toml = r#"
            [[routes]]
            path = "/a"
            name = "a"
            view = "dashboard"
        "#;
        assert!(toml::from_str::<Config>(toml).is_err());
    }

    #[test]
    fn test_base_override() {
        let config = Config::default().with_base_override(Some("/app/".to_string()));
        assert_eq!(config.history().base(), "/app");

        let config = Config::default().with_base_override(None);
        assert_eq!(config.history().base(), "/");
    }

    #[test]
    fn test_missing_file_is_default() {
        let config = Config::load("/definitely/not/here/kanban-routes.toml").unwrap();
        assert_eq!(config, Config::default());
    }
}
