pub mod check;
pub mod list;
pub mod resolve;
pub mod url;

use anyhow::Result;
use kanban_router::{Config, HistoryMode, RouteTable};
use std::path::PathBuf;

/// Global flags that shape the table every command works on
pub struct TableOptions {
    pub config: PathBuf,
    pub base: Option<String>,
    pub hash: bool,
}

impl TableOptions {
    /// File settings, then `BASE_URL`, then command-line flags
    pub fn load_config(&self) -> Result<Config> {
        let mut config = Config::load(&self.config)?
            .with_env_overrides()
            .with_base_override(self.base.clone());
        if self.hash {
            config.history.mode = HistoryMode::Hash;
        }
        Ok(config)
    }

    pub fn load_table(&self) -> Result<RouteTable> {
        let table = self.load_config()?.build_table()?;
        tracing::debug!(routes = table.len(), base = table.history().base(), "route table ready");
        Ok(table)
    }
}
