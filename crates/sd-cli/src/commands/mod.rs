//! Command implementations.

pub mod config;
pub mod list;
pub mod resolve;
pub mod status;

pub use config::run_config;
pub use list::run_list;
pub use resolve::run_resolve;
pub use status::run_status;

use sd_storage_sql::{create_pool, PgDirectoryProvider, PoolConfig};

use crate::{CliConfig, CliResult};

/// Connects to the configured database and wraps the pool as a directory
/// provider.
async fn connect(config: &CliConfig, url_override: Option<&str>) -> CliResult<PgDirectoryProvider> {
    let url = config.effective_database_url(url_override);
    let pool = create_pool(&PoolConfig::new(url)).await?;
    Ok(PgDirectoryProvider::new(pool, config.tables.clone()))
}
