//! REPL (Read-Eval-Print Loop) for interactive questions

use crate::ConsoleFormatter;
use crate::progress::reporter::{ProgressReporter, SimpleProgress};
use qa_application::{AskQuestionUseCase, NoProgress, ProgressNotifier};
use qa_domain::Question;
use reedline::{DefaultPrompt, DefaultPromptSegment, FileBackedHistory, Reedline, Signal};
use std::io::{IsTerminal, Write};
use std::path::PathBuf;
use tracing::{debug, warn};

const PROMPT_TEXT: &str = "Enter your question (or type 'quit' or 'exit'):";
const FAREWELL: &str = "Goodbye!";
const HISTORY_SIZE: usize = 1000;
const MAX_READ_ERRORS: usize = 3;

/// One read from the terminal
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReplInput {
    Line(String),
    /// Ctrl-C
    Interrupted,
    /// Ctrl-D
    Eof,
}

/// Source of user input for [`ChatRepl`]
pub trait LineReader {
    fn read_line(&mut self) -> std::io::Result<ReplInput>;
}

/// What to do with an entered line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineAction<'a> {
    Quit,
    Skip,
    Ask(&'a str),
}

/// Classify an entered line. `quit`/`exit` match case-insensitively and
/// only as the whole line; whitespace-only lines are skipped.
pub fn classify_line(line: &str) -> LineAction<'_> {
    let lowered = line.to_lowercase();
    if lowered == "quit" || lowered == "exit" {
        LineAction::Quit
    } else if line.trim().is_empty() {
        LineAction::Skip
    } else {
        LineAction::Ask(line)
    }
}

/// [`LineReader`] backed by reedline
pub struct ReedlineReader {
    editor: Reedline,
    prompt: DefaultPrompt,
}

impl ReedlineReader {
    /// Create a reader, persisting history to `history_path` when given
    pub fn new(history_path: Option<PathBuf>) -> Self {
        let mut editor = Reedline::create();

        if let Some(path) = history_path {
            if let Some(parent) = path.parent() {
                let _ = std::fs::create_dir_all(parent);
            }
            match FileBackedHistory::with_file(HISTORY_SIZE, path.clone()) {
                Ok(history) => editor = editor.with_history(Box::new(history)),
                Err(e) => warn!("Could not open history file {}: {}", path.display(), e),
            }
        }

        Self {
            editor,
            prompt: DefaultPrompt::new(
                DefaultPromptSegment::Basic(String::new()),
                DefaultPromptSegment::Empty,
            ),
        }
    }

    /// Default history location under the platform data directory
    pub fn default_history_path() -> Option<PathBuf> {
        dirs::data_dir().map(|p| p.join("llm-qa").join("history.txt"))
    }
}

impl LineReader for ReedlineReader {
    fn read_line(&mut self) -> std::io::Result<ReplInput> {
        Ok(match self.editor.read_line(&self.prompt)? {
            Signal::Success(line) => ReplInput::Line(line),
            Signal::CtrlC => ReplInput::Interrupted,
            Signal::CtrlD => ReplInput::Eof,
        })
    }
}

/// Whether the loop keeps going after a question
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Continue,
    Stop,
}

/// Interactive question REPL
pub struct ChatRepl {
    use_case: AskQuestionUseCase,
    model: Option<String>,
    show_progress: bool,
}

impl ChatRepl {
    /// Create a new ChatRepl
    pub fn new(use_case: AskQuestionUseCase) -> Self {
        Self {
            use_case,
            model: None,
            show_progress: true,
        }
    }

    /// Model name shown in the banner
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = Some(model.into());
        self
    }

    /// Set whether to show progress
    pub fn with_progress(mut self, show: bool) -> Self {
        self.show_progress = show;
        self
    }

    /// Run the REPL on the terminal
    pub async fn run(&self, history_path: Option<PathBuf>) -> std::io::Result<()> {
        let mut reader = ReedlineReader::new(history_path);
        self.run_with(&mut reader, &mut std::io::stdout()).await
    }

    /// Run the REPL against any line source and output sink.
    /// Ctrl-C while an answer is pending ends the loop.
    pub async fn run_with(
        &self,
        reader: &mut dyn LineReader,
        out: &mut dyn Write,
    ) -> std::io::Result<()> {
        self.run_until(reader, out, tokio::signal::ctrl_c).await
    }

    async fn run_until<F, Fut>(
        &self,
        reader: &mut dyn LineReader,
        out: &mut dyn Write,
        interrupt: F,
    ) -> std::io::Result<()>
    where
        F: Fn() -> Fut,
        Fut: Future<Output = std::io::Result<()>>,
    {
        writeln!(
            out,
            "{}",
            ConsoleFormatter::banner(self.use_case.is_available(), self.model.as_deref())
        )?;

        let mut read_errors = 0;
        loop {
            writeln!(out)?;
            writeln!(out, "{}", PROMPT_TEXT)?;
            out.flush()?;

            let input = match reader.read_line() {
                Ok(input) => {
                    read_errors = 0;
                    input
                }
                Err(e) => {
                    read_errors += 1;
                    warn!("Failed to read input: {}", e);
                    writeln!(out, "An error occurred: {}", e)?;
                    if read_errors >= MAX_READ_ERRORS {
                        return Err(e);
                    }
                    continue;
                }
            };

            let flow = match input {
                ReplInput::Line(line) => match classify_line(&line) {
                    LineAction::Quit => Flow::Stop,
                    LineAction::Skip => Flow::Continue,
                    LineAction::Ask(question) => {
                        self.process_question(question, out, interrupt()).await?
                    }
                },
                ReplInput::Interrupted | ReplInput::Eof => {
                    debug!("REPL interrupted");
                    Flow::Stop
                }
            };

            if flow == Flow::Stop {
                writeln!(out)?;
                writeln!(out, "{}", FAREWELL)?;
                break;
            }
        }

        Ok(())
    }

    async fn process_question(
        &self,
        raw: &str,
        out: &mut dyn Write,
        interrupt: impl Future<Output = std::io::Result<()>>,
    ) -> std::io::Result<Flow> {
        writeln!(out)?;
        writeln!(out, "{}", ConsoleFormatter::format_processing(&Question::new(raw)))?;
        out.flush()?;

        let progress: Box<dyn ProgressNotifier> = if !self.show_progress {
            Box::new(NoProgress)
        } else if std::io::stdout().is_terminal() {
            Box::new(ProgressReporter::new())
        } else {
            Box::new(SimpleProgress)
        };

        let interrupted = async {
            if let Err(e) = interrupt.await {
                warn!("Cannot listen for Ctrl-C: {}", e);
                std::future::pending::<()>().await;
            }
        };

        let outcome = tokio::select! {
            outcome = self.use_case.execute_with_progress(raw, progress.as_ref()) => outcome,
            _ = interrupted => {
                debug!("Interrupted while waiting for an answer");
                progress.on_request_cancelled();
                return Ok(Flow::Stop);
            }
        };

        writeln!(out)?;
        writeln!(out, "{}", ConsoleFormatter::format_answer(&outcome.answer))?;
        Ok(Flow::Continue)
    }
}
