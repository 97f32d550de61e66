//! Parse-evaluation command: turn a model's reply into scores and suggestions.

use anyhow::Context;
use camino::Utf8PathBuf;
use clap::Args;
use owo_colors::OwoColorize;
use tracing::{debug, instrument};

use markwise_core::evaluation::{self, EvaluationResult, ProviderReply};
use markwise_core::providers;

use super::read_input;

/// Arguments for the `parse-evaluation` subcommand.
#[derive(Args, Debug)]
pub struct ParseEvaluationArgs {
    /// File holding the model response (`-` for stdin).
    pub file: Utf8PathBuf,

    /// Treat the input as the provider's raw JSON reply for this provider id.
    #[arg(long)]
    pub provider: Option<String>,

    /// Request time in milliseconds to attach.
    #[arg(long, default_value_t = 0)]
    pub time_taken_ms: u64,

    /// Token usage to attach (overrides usage found in a raw reply).
    #[arg(long)]
    pub tokens_used: Option<u64>,
}

/// Parse an evaluation response.
#[instrument(name = "cmd_parse_evaluation", skip_all, fields(file = %args.file))]
pub fn cmd_parse_evaluation(
    args: ParseEvaluationArgs,
    global_json: bool,
    max_input_bytes: Option<usize>,
) -> anyhow::Result<()> {
    debug!(file = %args.file, provider = ?args.provider, "executing parse-evaluation command");

    let content = read_input(&args.file, max_input_bytes)?;

    let reply = match args.provider.as_deref() {
        Some(id) => {
            let provider = providers::find(id)?;
            let json: serde_json::Value = serde_json::from_str(&content)
                .with_context(|| format!("{} is not a JSON reply", args.file))?;
            ProviderReply::from_json(provider, &json)
        }
        None => ProviderReply {
            content,
            tokens_used: 0,
        },
    };

    let result = evaluation::parse_evaluation(&reply.content).with_usage(
        args.time_taken_ms,
        args.tokens_used.unwrap_or(reply.tokens_used),
    );

    if global_json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        print_result(&result);
    }
    Ok(())
}

fn print_result(result: &EvaluationResult) {
    println!("{}  {}", "Grammar:".cyan(), result.scores.grammar);
    println!("{}  {}", "Clarity:".cyan(), result.scores.clarity);
    println!("{}  {}", "Overall:".cyan(), result.scores.overall.bold());
    if !result.suggestions.is_empty() {
        println!("\n{}", "Suggestions".bold().underline());
        for suggestion in &result.suggestions {
            println!("  - {suggestion}");
        }
    }
    if result.time_taken_ms > 0 || result.tokens_used > 0 {
        println!(
            "\n{}",
            format!(
                "{} ms, {} tokens",
                result.time_taken_ms, result.tokens_used
            )
            .dimmed()
        );
    }
}
