//! Prompt command: the AI evaluation prompt or a ready-to-send request.

use anyhow::Context;
use camino::Utf8PathBuf;
use clap::Args;
use tracing::{debug, instrument};

use markwise_core::config::EvaluationSettings;
use markwise_core::evaluation::{self, EvaluationRequest};
use markwise_core::providers;

use super::read_input;

/// Environment variable holding the provider API key.
pub const API_KEY_ENV: &str = "MARKWISE_API_KEY";

/// Arguments for the `prompt` subcommand.
#[derive(Args, Debug)]
pub struct PromptArgs {
    /// File to evaluate (`-` for stdin).
    pub file: Utf8PathBuf,

    /// Print the full request (endpoint, headers, body) instead of the prompt.
    #[arg(long)]
    pub request: bool,

    /// Provider id (default: configured provider, else openai).
    #[arg(long)]
    pub provider: Option<String>,

    /// Model id (default: configured model, else the provider's first model).
    #[arg(long)]
    pub model: Option<String>,

    /// Override the provider's API root.
    #[arg(long)]
    pub base_url: Option<String>,
}

/// Print the evaluation prompt, or the request that would carry it.
#[instrument(name = "cmd_prompt", skip_all, fields(file = %args.file, request = args.request))]
pub fn cmd_prompt(
    args: PromptArgs,
    global_json: bool,
    settings: &EvaluationSettings,
    max_input_bytes: Option<usize>,
) -> anyhow::Result<()> {
    debug!(file = %args.file, "executing prompt command");

    let content = read_input(&args.file, max_input_bytes)?;

    if !args.request {
        let prompt = evaluation::build_evaluation_prompt(&content);
        if global_json {
            println!("{}", serde_json::to_string_pretty(&serde_json::json!({ "prompt": prompt }))?);
        } else {
            println!("{prompt}");
        }
        return Ok(());
    }

    let provider_id = args
        .provider
        .as_deref()
        .or(settings.provider.as_deref())
        .unwrap_or("openai");
    let provider = providers::find(provider_id)?;
    let model = args
        .model
        .as_deref()
        .or(settings.model.as_deref())
        .or_else(|| provider.models.first().copied())
        .unwrap_or_default();
    let base_url = args.base_url.as_deref().or(settings.base_url.as_deref());
    let api_key = std::env::var(API_KEY_ENV).ok();

    let mut request =
        EvaluationRequest::new(provider, model, &content, api_key.as_deref(), base_url)
            .with_context(|| format!("set {API_KEY_ENV} to build a {} request", provider.name))?;
    redact_secrets(&mut request);

    debug!(provider = provider.id, model, endpoint = %request.endpoint, "request built");
    println!("{}", serde_json::to_string_pretty(&request)?);
    Ok(())
}

/// Replace credential header values so requests can be printed safely.
fn redact_secrets(request: &mut EvaluationRequest) {
    for (name, value) in &mut request.headers {
        if name.eq_ignore_ascii_case("authorization") {
            *value = "Bearer <redacted>".to_string();
        } else if name.eq_ignore_ascii_case("x-api-key") {
            *value = "<redacted>".to_string();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use markwise_core::providers::{ProviderScope, catalogue, lookup};

    #[test]
    fn secrets_are_redacted() {
        let all = catalogue(ProviderScope::All);
        let provider = lookup(&all, "anthropic").unwrap();
        let mut request =
            EvaluationRequest::new(provider, "claude-3-haiku", "Hi.", Some("sk-live"), None)
                .unwrap();
        redact_secrets(&mut request);
        assert_eq!(request.header("x-api-key"), Some("<redacted>"));
        assert_eq!(request.header("anthropic-version"), Some("2023-06-01"));

        let provider = lookup(&all, "openai").unwrap();
        let mut request =
            EvaluationRequest::new(provider, "gpt-4", "Hi.", Some("sk-live"), None).unwrap();
        redact_secrets(&mut request);
        assert_eq!(request.header("Authorization"), Some("Bearer <redacted>"));
    }
}
