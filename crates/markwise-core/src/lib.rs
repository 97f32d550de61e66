//! Core library for markwise.
//!
//! This crate holds the text analysis engine and the pieces around it used by
//! the `markwise` CLI, its MCP server, and any downstream consumers.
//!
//! # Modules
//!
//! - [`analysis`] - The analyzer: metrics, issue detection, quality score
//! - [`text`] - Word, sentence and paragraph segmentation
//! - [`syllables`] - Heuristic syllable estimation
//! - [`readability`] - Flesch Reading Ease, grade level, difficulty bands
//! - [`evaluation`] - AI evaluation prompt, request shaping, response parsing
//! - [`providers`] - Catalogue of AI providers
//! - [`config`] - Configuration loading and management
//! - [`error`] - Error types and result aliases
//!
//! # Quick Start
//!
//! ```
//! use markwise_core::{IssueType, analyze};
//!
//! let result = analyze("He ran quickly and carefully.");
//! assert_eq!(result.count_of(IssueType::Adverb), 2);
//! println!("score {:.0}, grade {}", result.score, result.grade_level);
//! ```
#![deny(unsafe_code)]

pub mod analysis;
pub mod config;
pub mod error;
pub mod evaluation;
pub mod providers;
pub mod readability;
pub mod syllables;
pub mod text;
pub mod word_lists;

pub use analysis::{AnalysisResult, HighlightSpan, Issue, IssueType, analyze};
pub use config::{Config, ConfigLoader, ConfigSources, EvaluationSettings, LogLevel};
pub use error::{ConfigError, ConfigResult, InputError, ProviderError, check_input_size};
pub use evaluation::{EvaluationReport, EvaluationResult, EvaluationScores, parse_evaluation};
pub use providers::{Provider, ProviderScope};
pub use readability::Difficulty;

/// Default maximum input size: 5 MiB.
pub const DEFAULT_MAX_INPUT_BYTES: usize = 5 * 1024 * 1024;
