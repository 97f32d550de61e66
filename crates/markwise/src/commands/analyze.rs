//! Analyze command: readability metrics and stylistic issues.

use anyhow::bail;
use camino::Utf8PathBuf;
use clap::Args;
use owo_colors::OwoColorize;
use tracing::{debug, instrument};

use markwise_core::analysis::{self, AnalysisResult, Issue, IssueType};

use super::{display_name, read_input};

/// Issues listed in text output before the rest are summarized.
pub const SUMMARY_ISSUE_LIMIT: usize = 10;

/// Arguments for the `analyze` subcommand.
#[derive(Args, Debug)]
pub struct AnalyzeArgs {
    /// File to analyze (`-` for stdin).
    pub file: Utf8PathBuf,

    /// Minimum acceptable quality score (0-100).
    #[arg(long)]
    pub score_min: Option<f64>,

    /// Maximum acceptable grade level.
    #[arg(long, allow_negative_numbers = true)]
    pub max_grade: Option<i64>,
}

/// Analyze a document and optionally gate on score and grade.
#[instrument(name = "cmd_analyze", skip_all, fields(file = %args.file))]
pub fn cmd_analyze(
    args: AnalyzeArgs,
    global_json: bool,
    config_score_min: Option<f64>,
    config_max_grade: Option<i64>,
    max_input_bytes: Option<usize>,
) -> anyhow::Result<()> {
    debug!(file = %args.file, score_min = ?args.score_min, max_grade = ?args.max_grade, "executing analyze command");

    let content = read_input(&args.file, max_input_bytes)?;
    let name = display_name(&args.file);
    let result = analysis::analyze(&content);

    if global_json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        print_report(name, &result);
    }

    if let Some(min) = args.score_min.or(config_score_min)
        && result.score < min
    {
        bail!(
            "{name} scores {:.1} (min: {min:.1}). Trim adverbs, passive voice and long sentences.",
            result.score,
        );
    }
    if let Some(max) = args.max_grade.or(config_max_grade)
        && result.grade_level > max
    {
        bail!(
            "{name} reads at grade {} (max: {max}). Use shorter sentences and simpler words.",
            result.grade_level,
        );
    }

    Ok(())
}

fn print_report(name: &str, result: &AnalysisResult) {
    println!("{}", name.bold());
    println!(
        "\n  {} {} words, {} characters, {} sentences, {} paragraphs",
        "Counts:".cyan(),
        result.word_count,
        result.char_count,
        result.sentence_count,
        result.paragraph_count,
    );
    println!(
        "  {} {:.1} min",
        "Reading time:".cyan(),
        result.reading_time
    );
    println!(
        "  {} Flesch {:.1} ({}), grade {}",
        "Readability:".cyan(),
        result.flesch_score,
        result.difficulty(),
        result.grade_level,
    );
    let score = format!("{:.0}", result.score);
    let score = if result.score >= 80.0 {
        score.green().to_string()
    } else if result.score >= 60.0 {
        score.yellow().to_string()
    } else {
        score.red().to_string()
    };
    println!("  {} {score}/100", "Score:".cyan());

    let counts: Vec<_> = IssueType::ALL
        .iter()
        .map(|t| format!("{} {t}", result.count_of(*t)))
        .collect();
    println!("\n  {} {}", "Issues:".cyan(), counts.join(", "));

    let (shown, hidden) = result.summary_issues(SUMMARY_ISSUE_LIMIT);
    for issue in shown {
        println!("{}", issue_line(issue));
    }
    if hidden > 0 {
        println!("    ... and {hidden} more");
    }
}

/// One issue row: type, position, quoted text, suggestion.
///
/// Columns are padded before styling so escape codes don't shift them.
fn issue_line(issue: &Issue) -> String {
    let kind = format!("{:<9}", issue.issue_type.as_str());
    let at = format!("{:>7}", format!("@{}", issue.position));
    format!(
        "    {} {}  {:?}  {}",
        kind.yellow(),
        at.dimmed(),
        issue.text,
        issue.suggestion.as_deref().unwrap_or_default().dimmed(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn issue_columns_align_with_styling() {
        let short = issue_line(&Issue::new(IssueType::Adverb, "only", 3));
        let long = issue_line(&Issue::new(IssueType::Qualifier, "maybe", 12_345));
        assert!(short.contains("adverb   \u{1b}[39m"), "{short:?}");
        assert!(long.contains("qualifier\u{1b}[39m"), "{long:?}");
        assert!(short.contains("     @3"), "{short:?}");
        assert!(long.contains(" @12345"), "{long:?}");
        // quoted text starts at the same byte offset on both rows
        assert_eq!(short.find("\"only\""), long.find("\"maybe\""));
    }
}
