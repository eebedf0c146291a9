mod mutate;
mod query;
mod schema;
mod serve;

pub use mutate::handle_mutate;
pub use query::handle_query;
pub use schema::handle_schema;
pub use serve::handle_serve;

use std::sync::Arc;

use crate::config::FolioConfig;
use crate::store::Catalog;

/// Common context passed to all command handlers
pub struct CommandContext {
    pub config: FolioConfig,
    pub catalog: Arc<Catalog>,
}

impl CommandContext {
    pub fn new(config: FolioConfig) -> Self {
        Self {
            config,
            catalog: Arc::new(Catalog::seeded()),
        }
    }
}

pub(crate) fn parse_variables(raw: Option<String>) -> crate::error::Result<async_graphql::Variables> {
    match raw {
        Some(v) => Ok(serde_json::from_str(&v)?),
        None => Ok(async_graphql::Variables::default()),
    }
}
