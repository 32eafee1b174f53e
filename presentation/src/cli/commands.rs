//! CLI command definitions

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Output format for one-shot answers
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Framed, human-readable answer
    Text,
    /// JSON with raw question, normalized question and answer
    Json,
}

/// How the binary should run
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunMode {
    /// Interactive prompt loop
    Chat,
    /// Answer one question and exit
    Single(String),
    /// Serve the web form
    Serve,
}

/// CLI arguments for llm-qa
#[derive(Parser, Debug)]
#[command(name = "llm-qa")]
#[command(author, version, about = "Ask a hosted LLM questions from the terminal or a web form")]
#[command(long_about = r#"
llm-qa normalizes your question (lowercase, no punctuation, single spaces)
and sends it to Google Gemini with a fixed question-answering instruction.

Without a question it starts an interactive prompt; type 'quit' or 'exit'
to leave. With --serve it runs a small web form instead.

The API key is read from GEMINI_API_KEY (a .env file in the working
directory is loaded first). Configuration files are loaded from (in
priority order):
1. --config <path>     Explicit config file
2. ./llm-qa.toml       Project-level config
3. ~/.config/llm-qa/config.toml   Global config

Example:
  llm-qa "What is the capital of France?"
  llm-qa --chat -m gemini-2.5-pro
  llm-qa --serve --bind 0.0.0.0:8080
"#)]
pub struct Cli {
    /// The question to ask (starts the interactive prompt when omitted)
    pub question: Option<String>,

    /// Start the interactive prompt
    #[arg(short, long, conflicts_with = "question")]
    pub chat: bool,

    /// Serve the web form instead of using the terminal
    #[arg(long, conflicts_with_all = ["question", "chat"])]
    pub serve: bool,

    /// Address for the web form (overrides [server] bind)
    #[arg(long, value_name = "ADDR", requires = "serve")]
    pub bind: Option<String>,

    /// Gemini model to use (overrides [llm] model)
    #[arg(short, long, value_name = "MODEL")]
    pub model: Option<String>,

    /// Output format for one-shot answers
    #[arg(short, long, value_enum, default_value = "text")]
    pub output: OutputFormat,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress progress indicators
    #[arg(short, long)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Also write logs to this file
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Path to configuration file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long)]
    pub no_config: bool,

    /// Show configuration file locations and effective settings, then exit
    #[arg(long)]
    pub show_config: bool,
}

impl Cli {
    /// Work out which front end to run
    pub fn mode(&self) -> RunMode {
        if self.serve {
            return RunMode::Serve;
        }
        match &self.question {
            Some(question) => RunMode::Single(question.clone()),
            None => RunMode::Chat,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_default_mode_is_chat() {
        let cli = Cli::try_parse_from(["llm-qa"]).unwrap();
        assert_eq!(cli.mode(), RunMode::Chat);
        assert_eq!(cli.output, OutputFormat::Text);
    }

    #[test]
    fn test_question_runs_once() {
        let cli = Cli::try_parse_from(["llm-qa", "-o", "json", "What is Rust?"]).unwrap();
        assert_eq!(cli.mode(), RunMode::Single("What is Rust?".to_string()));
        assert_eq!(cli.output, OutputFormat::Json);
    }

    #[test]
    fn test_serve_with_bind() {
        let cli = Cli::try_parse_from(["llm-qa", "--serve", "--bind", "0.0.0.0:8080"]).unwrap();
        assert_eq!(cli.mode(), RunMode::Serve);
        assert_eq!(cli.bind.as_deref(), Some("0.0.0.0:8080"));
    }

    #[test]
    fn test_conflicting_modes_rejected() {
        assert!(Cli::try_parse_from(["llm-qa", "--serve", "question"]).is_err());
        assert!(Cli::try_parse_from(["llm-qa", "--serve", "--chat"]).is_err());
        assert!(Cli::try_parse_from(["llm-qa", "--bind", "127.0.0.1:1"]).is_err());
    }

    #[test]
    fn test_verbosity_counts() {
        let cli = Cli::try_parse_from(["llm-qa", "-vv", "-m", "gemini-2.5-pro"]).unwrap();
        assert_eq!(cli.verbose, 2);
        assert_eq!(cli.model.as_deref(), Some("gemini-2.5-pro"));
    }
}
