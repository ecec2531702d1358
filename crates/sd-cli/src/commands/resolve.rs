//! Identifier resolution command.

use sd_resolver::Resolver;
use uuid::Uuid;

use crate::config::OutputFormat;
use crate::CliConfig;

use super::connect;

/// Resolves an identifier and prints the result.
///
/// Mirrors the host contract: the output is always a resolved name, the
/// literal `Unknown`, or a diagnostic string; resolution failures do not
/// become a non-zero exit.
///
/// # Errors
///
/// Fails only when the database connection cannot be established or the
/// output cannot be serialized.
pub async fn run_resolve(
    id: Uuid,
    config: &CliConfig,
    database_url: Option<&str>,
    format: OutputFormat,
) -> crate::CliResult<()> {
    let provider = connect(config, database_url).await?;
    let resolver = Resolver::new(provider);

    match format {
        OutputFormat::Plain => {
            println!("{}", resolver.resolve_display(id).await);
        }
        OutputFormat::Json => {
            let value = match resolver.resolve(id).await {
                Ok(resolution) => serde_json::to_value(&resolution)?,
                Err(err) => serde_json::json!({ "error": err.diagnostic() }),
            };
            println!("{}", serde_json::to_string_pretty(&value)?);
        }
    }

    Ok(())
}
