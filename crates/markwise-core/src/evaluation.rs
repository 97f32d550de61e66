//! AI evaluation support: the prompt, request shaping, and response parsing.
//!
//! Nothing here performs network I/O. Callers build an [`EvaluationRequest`],
//! send it with whatever client they use, pull the text out of the reply with
//! [`ProviderReply::from_json`], and parse it with [`parse_evaluation`].
//!
//! The model is asked to answer in a fixed line format:
//!
//! ```text
//! Grammar: 85
//! Clarity: 78
//! Overall: 80
//! Suggestions:
//! - Shorten the second paragraph.
//! ```

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};

use crate::error::ProviderError;
use crate::providers::Provider;

/// Instruction text placed before the document.
pub const EVALUATION_PROMPT: &str = "Evaluate the following markdown text for grammar, clarity, and overall quality. Provide scores out of 100 and up to 3 suggestions for improvement.

Format your response exactly like this:
Grammar: [score]
Clarity: [score]
Overall: [score]
Suggestions:
- [suggestion1]
- [suggestion2]
- [suggestion3]

Text:
";

/// Completion budget for an evaluation request.
pub const EVALUATION_MAX_TOKENS: u32 = 500;

/// Sampling temperature for an evaluation request.
pub const EVALUATION_TEMPERATURE: f64 = 0.7;

/// `anthropic-version` header sent to the messages API.
pub const ANTHROPIC_API_VERSION: &str = "2023-06-01";

/// Application title reported to OpenRouter.
pub const OPENROUTER_TITLE: &str = "Markdown Editor";

/// The full prompt for `text`.
pub fn build_evaluation_prompt(text: &str) -> String {
    format!("{EVALUATION_PROMPT}{text}")
}

/// Scores out of 100 returned by a model.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct EvaluationScores {
    /// Grammar score.
    pub grammar: u8,
    /// Clarity score.
    pub clarity: u8,
    /// Overall quality score.
    pub overall: u8,
}

/// A parsed evaluation response.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct EvaluationReport {
    /// The three scores, each in `[0, 100]`.
    pub scores: EvaluationScores,
    /// Suggestions in the order the model gave them.
    pub suggestions: Vec<String>,
}

impl EvaluationReport {
    /// Attach request timing and token usage.
    pub fn with_usage(self, time_taken_ms: u64, tokens_used: u64) -> EvaluationResult {
        EvaluationResult {
            scores: self.scores,
            suggestions: self.suggestions,
            time_taken_ms,
            tokens_used,
        }
    }
}

/// A parsed evaluation plus how long it took and what it cost.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct EvaluationResult {
    /// The three scores, each in `[0, 100]`.
    pub scores: EvaluationScores,
    /// Suggestions in the order the model gave them.
    pub suggestions: Vec<String>,
    /// Wall-clock request time in milliseconds.
    #[serde(rename = "timeTaken")]
    pub time_taken_ms: u64,
    /// Tokens reported by the provider (0 if it reported none).
    pub tokens_used: u64,
}

/// Parse a model response in the fixed evaluation format.
///
/// Never fails. Lines are trimmed and matched by case-insensitive prefix.
/// A score is the integer at the start of the text between the first and
/// second `:`; anything unparsable counts as 0, and the last line for a label
/// wins. After a `Suggestions:` line, every line starting with `-` is taken as
/// a suggestion. Score labels are still recognized after that marker.
#[tracing::instrument(skip_all, fields(response_len = response.len()))]
pub fn parse_evaluation(response: &str) -> EvaluationReport {
    let mut report = EvaluationReport::default();
    let mut in_suggestions = false;

    for line in response.split('\n').map(str::trim) {
        if has_label(line, "grammar:") {
            report.scores.grammar = parse_score(line);
        } else if has_label(line, "clarity:") {
            report.scores.clarity = parse_score(line);
        } else if has_label(line, "overall:") {
            report.scores.overall = parse_score(line);
        } else if has_label(line, "suggestions:") {
            in_suggestions = true;
        } else if in_suggestions && let Some(rest) = line.strip_prefix('-') {
            report.suggestions.push(rest.trim().to_string());
        }
    }

    tracing::debug!(
        grammar = report.scores.grammar,
        clarity = report.scores.clarity,
        overall = report.scores.overall,
        suggestions = report.suggestions.len(),
        "evaluation parsed"
    );
    report
}

fn has_label(line: &str, label: &str) -> bool {
    line.get(..label.len())
        .is_some_and(|head| head.eq_ignore_ascii_case(label))
}

fn parse_score(line: &str) -> u8 {
    let field = line.split(':').nth(1).unwrap_or_default();
    let value = leading_integer(field.trim()).unwrap_or(0);
    // clamped to 0..=100 above, so the cast cannot truncate
    value.clamp(0, 100) as u8
}

/// Parse an optionally signed run of ASCII digits at the start of `s`,
/// ignoring whatever follows ("85/100" yields 85).
fn leading_integer(s: &str) -> Option<i64> {
    let (negative, digits) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };
    let end = digits
        .bytes()
        .position(|b| !b.is_ascii_digit())
        .unwrap_or(digits.len());
    if end == 0 {
        return None;
    }
    let magnitude = digits[..end]
        .bytes()
        .fold(0i64, |acc, b| acc.saturating_mul(10).saturating_add(i64::from(b - b'0')));
    Some(if negative { -magnitude } else { magnitude })
}

/// An evaluation request ready to hand to an HTTP client.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EvaluationRequest {
    /// Target URL.
    pub endpoint: String,
    /// Header name/value pairs, API key included.
    pub headers: Vec<(String, String)>,
    /// JSON request body.
    pub body: Value,
}

impl EvaluationRequest {
    /// Shape an evaluation request for `provider`.
    ///
    /// `base_url` overrides the provider's default API root. A blank
    /// `api_key` counts as missing.
    ///
    /// # Errors
    ///
    /// Returns [`ProviderError::MissingApiKey`] if the provider requires a
    /// key and none was given.
    pub fn new(
        provider: &Provider,
        model: &str,
        text: &str,
        api_key: Option<&str>,
        base_url: Option<&str>,
    ) -> Result<Self, ProviderError> {
        let api_key = api_key.map(str::trim).filter(|k| !k.is_empty());
        if provider.api_key_required && api_key.is_none() {
            return Err(ProviderError::MissingApiKey {
                provider: provider.name.to_string(),
            });
        }

        let mut headers = vec![("Content-Type".to_string(), "application/json".to_string())];
        match (provider.id, api_key) {
            ("anthropic", Some(key)) => {
                headers.push(("x-api-key".to_string(), key.to_string()));
                headers.push((
                    "anthropic-version".to_string(),
                    ANTHROPIC_API_VERSION.to_string(),
                ));
            }
            (id, key) => {
                if let Some(key) = key {
                    headers.push(("Authorization".to_string(), format!("Bearer {key}")));
                }
                if id == "openrouter" {
                    headers.push(("X-Title".to_string(), OPENROUTER_TITLE.to_string()));
                }
            }
        }

        let body = json!({
            "model": model,
            "max_tokens": EVALUATION_MAX_TOKENS,
            "messages": [{ "role": "user", "content": build_evaluation_prompt(text) }],
            "temperature": EVALUATION_TEMPERATURE,
        });

        Ok(Self {
            endpoint: provider.evaluation_endpoint(base_url),
            headers,
            body,
        })
    }

    /// The value of header `name`, compared case-insensitively.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }
}

/// The useful parts of a provider's JSON reply.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProviderReply {
    /// The model's text output (empty if absent).
    pub content: String,
    /// Token usage (0 if absent).
    pub tokens_used: u64,
}

impl ProviderReply {
    /// Extract the reply text and token usage.
    ///
    /// Messages-API providers report output tokens; chat-completions
    /// providers report total tokens. Missing fields yield defaults.
    pub fn from_json(provider: &Provider, reply: &Value) -> Self {
        let (content, tokens) = if provider.uses_messages_api() {
            (
                reply.pointer("/content/0/text"),
                reply.pointer("/usage/output_tokens"),
            )
        } else {
            (
                reply.pointer("/choices/0/message/content"),
                reply.pointer("/usage/total_tokens"),
            )
        };
        Self {
            content: content
                .and_then(Value::as_str)
                .unwrap_or_default()
                .to_string(),
            tokens_used: tokens.and_then(Value::as_u64).unwrap_or(0),
        }
    }
}
