//! Info command: version plus the settings `analyze` and `prompt` will use.

use camino::Utf8PathBuf;
use clap::Args;
use owo_colors::OwoColorize;
use serde::Serialize;
use tracing::{debug, instrument};

use markwise_core::config::{self, Config, ConfigSources};

use super::prompt::API_KEY_ENV;

/// Arguments for the `info` subcommand.
#[derive(Args, Debug, Default)]
pub struct InfoArgs {}

/// Effective settings after every config layer is merged.
#[derive(Debug, Serialize)]
struct ConfigInfo {
    #[serde(skip_serializing_if = "Option::is_none")]
    config_file: Option<String>,
    log_level: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    log_dir: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    input_limit: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    score_min: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    max_grade: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    evaluation_provider: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    evaluation_model: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    evaluation_base_url: Option<String>,
    api_key_set: bool,
}

impl ConfigInfo {
    fn new(config: &Config, sources: &ConfigSources, api_key_set: bool) -> Self {
        let evaluation = &config.evaluation;
        Self {
            config_file: sources.primary_file().map(ToString::to_string),
            log_level: config.log_level.as_str().to_string(),
            log_dir: config.log_dir.as_ref().map(ToString::to_string),
            input_limit: config.input_limit(),
            score_min: config.score_min,
            max_grade: config.max_grade,
            evaluation_provider: evaluation.provider.clone(),
            evaluation_model: evaluation.model.clone(),
            evaluation_base_url: evaluation.base_url.clone(),
            api_key_set,
        }
    }
}

#[derive(Debug, Serialize)]
struct InfoReport<'a> {
    name: &'static str,
    version: &'static str,
    description: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    user_config_dir: Option<Utf8PathBuf>,
    sources: &'a ConfigSources,
    config: ConfigInfo,
}

/// Print the version and effective configuration.
#[instrument(name = "cmd_info", skip_all, fields(json_output = global_json))]
pub fn cmd_info(
    _args: InfoArgs,
    global_json: bool,
    config: &Config,
    sources: &ConfigSources,
) -> anyhow::Result<()> {
    debug!("executing info command");

    let api_key_set = std::env::var(API_KEY_ENV).is_ok_and(|key| !key.trim().is_empty());
    let report = InfoReport {
        name: env!("CARGO_PKG_NAME"),
        version: env!("CARGO_PKG_VERSION"),
        description: env!("CARGO_PKG_DESCRIPTION"),
        user_config_dir: config::user_config_dir(),
        sources,
        config: ConfigInfo::new(config, sources, api_key_set),
    };

    if global_json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print_report(&report);
    }
    Ok(())
}

fn print_report(report: &InfoReport<'_>) {
    let cfg = &report.config;
    println!("{} {}", report.name.bold(), report.version.green());
    println!("{}", report.description.dimmed());

    section("Config files");
    let user = report
        .sources
        .user_file
        .as_ref()
        .map(ToString::to_string)
        .or_else(|| {
            report
                .user_config_dir
                .as_ref()
                .map(|dir| format!("none in {dir}"))
        });
    row("user", user.as_deref());
    let project: Vec<_> = report.sources.project_files.iter().map(|p| p.as_str()).collect();
    row("project", (!project.is_empty()).then(|| project.join(", ")).as_deref());
    for file in &report.sources.explicit_files {
        row("--config", Some(file.as_str()));
    }

    section("Analyze gates");
    row("min score", cfg.score_min.map(|v| format!("{v:.1}")).as_deref());
    row("max grade", cfg.max_grade.map(|v| v.to_string()).as_deref());
    row(
        "input limit",
        Some(
            cfg.input_limit
                .map_or_else(|| "unlimited".to_string(), |n| format!("{n} bytes"))
                .as_str(),
        ),
    );

    section("Evaluation");
    row("provider", cfg.evaluation_provider.as_deref().or(Some("openai (default)")));
    row("model", cfg.evaluation_model.as_deref());
    row("base url", cfg.evaluation_base_url.as_deref());
    row(
        "api key",
        Some(if cfg.api_key_set {
            "set"
        } else {
            "missing"
        }),
    );

    section("Logging");
    row("level", Some(cfg.log_level.as_str()));
    row("directory", cfg.log_dir.as_deref());
}

fn section(title: &str) {
    println!("\n{}", title.bold().underline());
}

fn row(label: &str, value: Option<&str>) {
    // padded before styling; escape codes would count toward the width
    let label = format!("{label:<12}");
    match value {
        Some(v) => println!("  {} {v}", label.dimmed()),
        None => println!("  {} {}", label.dimmed(), "off".dimmed()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn text_and_json_succeed() {
        let sources = ConfigSources::default();
        assert!(cmd_info(InfoArgs::default(), false, &Config::default(), &sources).is_ok());
        assert!(cmd_info(InfoArgs::default(), true, &Config::default(), &sources).is_ok());
    }

    #[test]
    fn gates_and_evaluation_flow_through() {
        let mut config = Config {
            score_min: Some(70.0),
            max_grade: Some(8),
            disable_input_limit: true,
            ..Config::default()
        };
        config.evaluation.provider = Some("ollama".to_string());
        let info = ConfigInfo::new(&config, &ConfigSources::default(), false);
        assert_eq!(info.score_min, Some(70.0));
        assert_eq!(info.max_grade, Some(8));
        assert!(info.input_limit.is_none());
        assert_eq!(info.evaluation_provider.as_deref(), Some("ollama"));
        assert!(!info.api_key_set);
    }

    #[test]
    fn primary_file_is_reported() {
        let sources = ConfigSources {
            project_files: vec![Utf8PathBuf::from("/repo/.markwise.toml")],
            explicit_files: vec![Utf8PathBuf::from("/tmp/ci.toml")],
            ..ConfigSources::default()
        };
        let info = ConfigInfo::new(&Config::default(), &sources, true);
        assert_eq!(info.config_file.as_deref(), Some("/tmp/ci.toml"));
        assert_eq!(info.log_level, "info");

        let json = serde_json::to_value(&info).unwrap();
        assert_eq!(json["api_key_set"], true);
        assert!(json.get("score_min").is_none());
    }
}
