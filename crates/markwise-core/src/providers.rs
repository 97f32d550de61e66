//! Catalogue of AI providers that can evaluate a document.
//!
//! The catalogue is fixed at build time and initialized once per process.
//! Call [`init`] early to pick a [`ProviderScope`]; otherwise the first call
//! to [`all`] or [`find`] initializes it with every provider.

use std::sync::OnceLock;

use serde::Serialize;

use crate::error::ProviderError;

/// An AI provider and the models it offers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Provider {
    /// Stable identifier (e.g. `"openai"`).
    pub id: &'static str,
    /// Display name.
    pub name: &'static str,
    /// Whether requests must carry an API key.
    pub api_key_required: bool,
    /// Default API root.
    pub base_url: &'static str,
    /// Known model identifiers.
    pub models: &'static [&'static str],
}

impl Provider {
    /// Whether the provider's host is on this machine or the local network.
    pub fn is_local(&self) -> bool {
        is_local_url(self.base_url)
    }

    /// Whether the provider's API root uses plain HTTP.
    pub fn is_insecure(&self) -> bool {
        self.base_url.starts_with("http://")
    }

    /// Whether the provider speaks the Anthropic messages API.
    pub fn uses_messages_api(&self) -> bool {
        self.id == "anthropic"
    }

    /// The URL an evaluation request is sent to.
    ///
    /// `base_url` overrides the provider's default API root.
    pub fn evaluation_endpoint(&self, base_url: Option<&str>) -> String {
        let root = base_url.unwrap_or(self.base_url).trim_end_matches('/');
        if self.uses_messages_api() {
            format!("{root}/v1/messages")
        } else {
            format!("{root}/chat/completions")
        }
    }
}

/// Which providers the catalogue exposes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ProviderScope {
    /// Every built-in provider.
    #[default]
    All,
    /// Only providers reachable over HTTPS. Use when serving over HTTPS,
    /// where plain-HTTP local endpoints would be blocked as mixed content.
    SecureOnly,
}

const BUILTIN_PROVIDERS: &[Provider] = &[
    Provider {
        id: "openai",
        name: "OpenAI",
        api_key_required: true,
        base_url: "https://api.openai.com/v1",
        models: &["gpt-4", "gpt-3.5-turbo"],
    },
    Provider {
        id: "anthropic",
        name: "Anthropic",
        api_key_required: true,
        base_url: "https://api.anthropic.com",
        models: &["claude-3-sonnet", "claude-3-haiku"],
    },
    Provider {
        id: "openrouter",
        name: "OpenRouter",
        api_key_required: true,
        base_url: "https://openrouter.ai/api/v1",
        models: &[
            "anthropic/claude-3.5-sonnet",
            "openai/gpt-4o",
            "openai/gpt-4-turbo",
            "google/gemini-pro-1.5",
            "meta-llama/llama-3.1-405b-instruct",
        ],
    },
    Provider {
        id: "lmstudio",
        name: "LM Studio (Local)",
        api_key_required: false,
        base_url: "http://localhost:1234/v1",
        models: &["local-model"],
    },
    Provider {
        id: "ollama",
        name: "Ollama (Local)",
        api_key_required: false,
        base_url: "http://localhost:11434/v1",
        models: &["llama2", "codellama", "mistral"],
    },
];

static CATALOGUE: OnceLock<Vec<Provider>> = OnceLock::new();

/// Build the provider list for `scope` without touching the shared catalogue.
pub fn catalogue(scope: ProviderScope) -> Vec<Provider> {
    BUILTIN_PROVIDERS
        .iter()
        .filter(|p| scope == ProviderScope::All || !p.is_insecure())
        .cloned()
        .collect()
}

/// Initialize the shared catalogue.
///
/// # Errors
///
/// Returns [`ProviderError::AlreadyInitialized`] if the catalogue was
/// already set up by an earlier `init`, [`all`] or [`find`] call.
pub fn init(scope: ProviderScope) -> Result<&'static [Provider], ProviderError> {
    CATALOGUE
        .set(catalogue(scope))
        .map_err(|_| ProviderError::AlreadyInitialized)?;
    tracing::debug!(?scope, "provider catalogue initialized");
    Ok(all())
}

/// The shared catalogue, initializing it with [`ProviderScope::All`] if needed.
pub fn all() -> &'static [Provider] {
    CATALOGUE.get_or_init(|| catalogue(ProviderScope::All))
}

/// Look up a provider by id in the shared catalogue.
///
/// # Errors
///
/// Returns [`ProviderError::Unknown`] listing the available ids.
pub fn find(id: &str) -> Result<&'static Provider, ProviderError> {
    lookup(all(), id)
}

/// Look up a provider by id in `providers`.
pub fn lookup<'a>(providers: &'a [Provider], id: &str) -> Result<&'a Provider, ProviderError> {
    providers
        .iter()
        .find(|p| p.id == id)
        .ok_or_else(|| ProviderError::Unknown {
            id: id.to_string(),
            available: providers.iter().map(|p| p.id).collect::<Vec<_>>().join(", "),
        })
}

/// Whether `url` points at localhost, loopback, or a `192.168.*` address.
pub fn is_local_url(url: &str) -> bool {
    let rest = url
        .strip_prefix("http://")
        .or_else(|| url.strip_prefix("https://"))
        .unwrap_or(url);
    let authority = rest.split(['/', '?', '#']).next().unwrap_or_default();
    let host = authority.rsplit('@').next().unwrap_or_default();
    let host = host.split(':').next().unwrap_or_default();
    host.eq_ignore_ascii_case("localhost") || host == "127.0.0.1" || host.starts_with("192.168.")
}
