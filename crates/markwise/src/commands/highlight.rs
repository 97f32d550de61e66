//! Highlight command: character spans for one issue type.

use camino::Utf8PathBuf;
use clap::Args;
use owo_colors::OwoColorize;
use tracing::{debug, instrument};

use markwise_core::analysis::{self, IssueType};

use super::{display_name, read_input};

/// Arguments for the `highlight` subcommand.
#[derive(Args, Debug)]
pub struct HighlightArgs {
    /// File to analyze (`-` for stdin).
    pub file: Utf8PathBuf,

    /// Issue type to highlight.
    #[arg(long = "type", short = 't', value_enum)]
    pub issue_type: IssueType,
}

/// Print the spans an editor overlay would highlight.
#[instrument(name = "cmd_highlight", skip_all, fields(file = %args.file, issue_type = %args.issue_type))]
pub fn cmd_highlight(
    args: HighlightArgs,
    global_json: bool,
    max_input_bytes: Option<usize>,
) -> anyhow::Result<()> {
    debug!(file = %args.file, "executing highlight command");

    let content = read_input(&args.file, max_input_bytes)?;
    let spans = analysis::analyze(&content).highlight_spans(args.issue_type);

    if global_json {
        println!("{}", serde_json::to_string_pretty(&spans)?);
        return Ok(());
    }

    if spans.is_empty() {
        println!(
            "{} no {} issues in {}",
            "OK:".green(),
            args.issue_type,
            display_name(&args.file)
        );
        return Ok(());
    }
    for span in &spans {
        println!("{}..{}\t{}\t{}", span.start, span.end, span.color.dimmed(), span.text);
    }
    Ok(())
}
