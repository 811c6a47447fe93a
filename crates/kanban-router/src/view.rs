//! Page-level views a route can select
//!
//! The table only references views; rendering lives in the client.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::RouteError;

/// The kanban client's page components
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum View {
    /// Landing page
    Main,
    Login,
    Register,
    /// List of the user's projects
    Projects,
    /// Board of one project, keyed by the `id` property
    KanbanBoard,
}

impl View {
    pub const ALL: [View; 5] = [
        View::Main,
        View::Login,
        View::Register,
        View::Projects,
        View::KanbanBoard,
    ];

    /// Component name as declared in the client
    pub fn component_name(&self) -> &'static str {
        match self {
            View::Main => "Main",
            View::Login => "Login",
            View::Register => "Register",
            View::Projects => "Projects",
            View::KanbanBoard => "KanbanBoard",
        }
    }

    /// Key used in configuration files
    pub fn key(&self) -> &'static str {
        match self {
            View::Main => "main",
            View::Login => "login",
            View::Register => "register",
            View::Projects => "projects",
            View::KanbanBoard => "kanban-board",
        }
    }

    /// Input properties the component declares
    pub fn accepted_props(&self) -> &'static [&'static str] {
        match self {
            View::KanbanBoard => &["id"],
            _ => &[],
        }
    }

    pub fn accepts(&self, prop: &str) -> bool {
        self.accepted_props().contains(&prop)
    }
}

impl fmt::Display for View {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.component_name())
    }
}

impl FromStr for View {
    type Err = RouteError;

    /// Accepts either the config key (`kanban-board`) or the component name (`KanbanBoard`)
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        View::ALL
            .into_iter()
            .find(|view| view.key() == s || view.component_name() == s)
            .ok_or_else(|| RouteError::UnknownView {
                view: s.to_string(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_str_accepts_both_spellings() {
        assert_eq!("kanban-board".parse::<View>(), Ok(View::KanbanBoard));
        assert_eq!("KanbanBoard".parse::<View>(), Ok(View::KanbanBoard));
        assert!("Dashboard".parse::<View>().is_err());
    }

    #[test]
    fn test_only_board_takes_props() {
        assert!(View::KanbanBoard.accepts("id"));
        assert!(!View::Projects.accepts("id"));
        assert!(View::Main.accepted_props().is_empty());
    }

    #[test]
    fn test_serde_key_matches_key() {
        #[derive(Deserialize)]
        struct Wrapper {
            view: View,
        }

        for view in View::ALL {
            let parsed: Wrapper = toml::from_str(&format!("view = \"{}\"", view.key())).unwrap();
            assert_eq!(parsed.view, view);
        }
    }
}
