//! Configuration file loading for llm-qa
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. `GEMINI_API_KEY` and `LLM_QA_*` environment variables
//! 2. `--config <path>` specified file
//! 3. Project root: `./llm-qa.toml` or `./.llm-qa.toml`
//! 4. Global: `~/.config/llm-qa/config.toml`
//! 5. Default values

mod file_config;
mod loader;

pub use file_config::{
    ConfigValidationError, DEFAULT_BIND, FileConfig, FileLlmConfig, FileOutputConfig,
    FileReplConfig, FileServerConfig,
};
pub use loader::{API_KEY_ENV, ConfigLoader, ENV_PREFIX};
