//! MCP (Model Context Protocol) server implementation.
//!
//! Exposes the analyzer and the evaluation helpers to AI assistants over
//! stdio. Each tool delegates to `markwise-core`; nothing here computes
//! results itself.
//!
//! Text inputs are checked against the configured size limit before any
//! work is done and rejected with an invalid-params error when too large.

use rmcp::handler::server::wrapper::Parameters;
use rmcp::model::{CallToolResult, Content, Implementation, ServerCapabilities, ServerInfo};
use rmcp::schemars;
use rmcp::{ErrorData as McpError, ServerHandler, tool, tool_handler, tool_router};
use serde::Serialize;

use markwise_core::analysis::{self, IssueType};
use markwise_core::evaluation;
use markwise_core::providers::{self, ProviderScope};

/// Parameters for the `get_info` tool.
#[derive(Debug, serde::Deserialize, schemars::JsonSchema)]
pub struct GetInfoParams {
    /// Output format: "text" or "json"
    #[serde(default = "default_format")]
    pub format: String,
}

fn default_format() -> String {
    "text".to_string()
}

/// Parameters for tools that take a document.
#[derive(Debug, serde::Deserialize, schemars::JsonSchema)]
pub struct TextParams {
    /// The document text.
    pub text: String,
}

/// Parameters for the `highlight_issues` tool.
#[derive(Debug, serde::Deserialize, schemars::JsonSchema)]
pub struct HighlightParams {
    /// The document text.
    pub text: String,
    /// Issue type: "adverb", "passive", "complex", or "qualifier".
    pub issue_type: IssueType,
}

/// Parameters for the `parse_evaluation` tool.
#[derive(Debug, serde::Deserialize, schemars::JsonSchema)]
pub struct ParseEvaluationParams {
    /// The model's reply in the Grammar/Clarity/Overall/Suggestions format.
    pub response: String,
}

/// Parameters for the `list_providers` tool.
#[derive(Debug, Default, serde::Deserialize, schemars::JsonSchema)]
pub struct ListProvidersParams {
    /// Only list providers reachable over HTTPS.
    #[serde(default)]
    pub secure_only: bool,
}

/// MCP server exposing markwise to AI assistants.
#[derive(Clone)]
pub struct ProjectServer {
    tool_router: rmcp::handler::server::router::tool::ToolRouter<Self>,
    max_input_bytes: Option<usize>,
}

impl Default for ProjectServer {
    fn default() -> Self {
        Self::new(Some(markwise_core::DEFAULT_MAX_INPUT_BYTES))
    }
}

fn to_json<T: Serialize>(value: &T) -> Result<CallToolResult, McpError> {
    let json = serde_json::to_string_pretty(value)
        .map_err(|e| McpError::internal_error(format!("serialization error: {e}"), None))?;
    Ok(CallToolResult::success(vec![Content::text(json)]))
}

#[tool_router]
impl ProjectServer {
    /// Create a server that rejects text larger than `max_input_bytes`.
    pub fn new(max_input_bytes: Option<usize>) -> Self {
        Self {
            tool_router: Self::tool_router(),
            max_input_bytes,
        }
    }

    fn check_size(&self, text: &str) -> Result<(), McpError> {
        markwise_core::check_input_size(text, self.max_input_bytes)
            .map_err(|e| McpError::invalid_params(e.to_string(), None))
    }

    /// Get project information.
    #[tool(description = "Get project name, version, and description")]
    #[tracing::instrument(skip(self), fields(otel.kind = "server"))]
    fn get_info(
        &self,
        Parameters(params): Parameters<GetInfoParams>,
    ) -> Result<CallToolResult, McpError> {
        tracing::debug!(tool = "get_info", format = %params.format, "executing MCP tool");

        let info = serde_json::json!({
            "name": env!("CARGO_PKG_NAME"),
            "version": env!("CARGO_PKG_VERSION"),
            "description": env!("CARGO_PKG_DESCRIPTION"),
        });

        let text = if params.format == "json" {
            serde_json::to_string_pretty(&info)
                .map_err(|e| McpError::internal_error(format!("serialization error: {e}"), None))?
        } else {
            format!(
                "{} v{}\n{}",
                env!("CARGO_PKG_NAME"),
                env!("CARGO_PKG_VERSION"),
                env!("CARGO_PKG_DESCRIPTION"),
            )
        };

        Ok(CallToolResult::success(vec![Content::text(text)]))
    }

    /// Analyze a document.
    #[tool(
        description = "Analyze markdown text. Returns word/sentence/paragraph counts, reading time, Flesch reading ease, grade level, a 0-100 quality score, and issues (adverbs, passive voice, complex sentences, qualifiers) with character positions."
    )]
    #[tracing::instrument(skip(self, params), fields(otel.kind = "server", text_len = params.text.len()))]
    fn analyze_text(
        &self,
        Parameters(params): Parameters<TextParams>,
    ) -> Result<CallToolResult, McpError> {
        self.check_size(&params.text)?;
        let result = analysis::analyze(&params.text);
        tracing::info!(
            tool = "analyze_text",
            issues = result.issues.len(),
            score = result.score,
            "MCP tool completed"
        );
        to_json(&result)
    }

    /// Highlight spans for one issue type.
    #[tool(
        description = "List character spans (start, end, color, text) for one issue type: adverb, passive, complex, or qualifier."
    )]
    #[tracing::instrument(skip(self, params), fields(otel.kind = "server", issue_type = %params.issue_type))]
    fn highlight_issues(
        &self,
        Parameters(params): Parameters<HighlightParams>,
    ) -> Result<CallToolResult, McpError> {
        self.check_size(&params.text)?;
        let spans = analysis::analyze(&params.text).highlight_spans(params.issue_type);
        tracing::info!(tool = "highlight_issues", spans = spans.len(), "MCP tool completed");
        to_json(&spans)
    }

    /// Build the evaluation prompt.
    #[tool(
        description = "Build the prompt that asks a language model to score text for grammar, clarity, and overall quality."
    )]
    #[tracing::instrument(skip(self, params), fields(otel.kind = "server"))]
    fn evaluation_prompt(
        &self,
        Parameters(params): Parameters<TextParams>,
    ) -> Result<CallToolResult, McpError> {
        self.check_size(&params.text)?;
        let prompt = evaluation::build_evaluation_prompt(&params.text);
        Ok(CallToolResult::success(vec![Content::text(prompt)]))
    }

    /// Parse a model's evaluation reply.
    #[tool(
        description = "Parse a language model's evaluation reply into grammar, clarity, and overall scores (0-100) and a list of suggestions."
    )]
    #[tracing::instrument(skip(self, params), fields(otel.kind = "server"))]
    fn parse_evaluation(
        &self,
        Parameters(params): Parameters<ParseEvaluationParams>,
    ) -> Result<CallToolResult, McpError> {
        self.check_size(&params.response)?;
        let report = evaluation::parse_evaluation(&params.response);
        tracing::info!(
            tool = "parse_evaluation",
            overall = report.scores.overall,
            "MCP tool completed"
        );
        to_json(&report)
    }

    /// List evaluation providers.
    #[tool(description = "List AI providers that can evaluate text, with their models and base URLs.")]
    #[tracing::instrument(skip(self, params), fields(otel.kind = "server"))]
    fn list_providers(
        &self,
        Parameters(params): Parameters<ListProvidersParams>,
    ) -> Result<CallToolResult, McpError> {
        let scope = if params.secure_only {
            ProviderScope::SecureOnly
        } else {
            ProviderScope::All
        };
        to_json(&providers::catalogue(scope))
    }
}

#[tool_handler]
impl ServerHandler for ProjectServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: Default::default(),
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: env!("CARGO_PKG_NAME").to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
                ..Default::default()
            },
            instructions: Some(format!(
                "{} MCP server. Use analyze_text for readability and style feedback on markdown.",
                env!("CARGO_PKG_NAME"),
            )),
        }
    }
}
