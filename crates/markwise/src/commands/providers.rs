//! Providers command: list the AI provider catalogue.

use clap::Args;
use owo_colors::OwoColorize;
use tracing::{debug, instrument};

use markwise_core::providers::{self, ProviderScope};

/// Arguments for the `providers` subcommand.
#[derive(Args, Debug, Default)]
pub struct ProvidersArgs {
    /// Hide providers reachable only over plain HTTP.
    #[arg(long)]
    pub secure_only: bool,
}

/// Print every provider with its models.
#[instrument(name = "cmd_providers", skip_all, fields(secure_only = args.secure_only))]
pub fn cmd_providers(args: ProvidersArgs, global_json: bool) -> anyhow::Result<()> {
    debug!("executing providers command");

    let scope = if args.secure_only {
        ProviderScope::SecureOnly
    } else {
        ProviderScope::All
    };
    let list = providers::init(scope)?;

    if global_json {
        println!("{}", serde_json::to_string_pretty(list)?);
        return Ok(());
    }

    for provider in list {
        let key = if provider.api_key_required {
            "API key required".yellow().to_string()
        } else {
            "no API key".green().to_string()
        };
        println!(
            "{} ({}) {}",
            provider.name.bold(),
            provider.id,
            key
        );
        println!("  {}", provider.base_url.cyan());
        println!("  {}", provider.models.join(", ").dimmed());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lists_providers() {
        // the shared catalogue can be set once per process
        assert!(cmd_providers(ProvidersArgs::default(), true).is_ok());
    }
}
