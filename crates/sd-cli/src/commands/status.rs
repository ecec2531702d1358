//! Database connectivity check.

use sd_storage_sql::{create_pool, ping, PoolConfig};

use crate::output::success;
use crate::CliConfig;

/// Checks that the configured database answers a trivial query.
///
/// # Errors
///
/// Fails with the mapped storage error when the database is unreachable.
pub async fn run_status(config: &CliConfig, database_url: Option<&str>) -> crate::CliResult<()> {
    let url = config.effective_database_url(database_url);
    let pool = create_pool(&PoolConfig::new(url)).await?;
    ping(&pool).await?;

    success("database reachable");
    Ok(())
}
