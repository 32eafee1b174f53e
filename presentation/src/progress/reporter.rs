//! "Thinking..." spinner shown while the LLM is working

use indicatif::{ProgressBar, ProgressStyle};
use qa_application::ProgressNotifier;
use qa_domain::{Answer, Question};
use std::sync::Mutex;
use std::time::Duration;

/// Shows a spinner for the duration of one LLM request
pub struct ProgressReporter {
    spinner: Mutex<Option<ProgressBar>>,
}

impl ProgressReporter {
    pub fn new() -> Self {
        Self {
            spinner: Mutex::new(None),
        }
    }

    fn clear(&self) {
        if let Some(pb) = self.spinner.lock().ok().and_then(|mut slot| slot.take()) {
            pb.finish_and_clear();
        }
    }

    fn spinner_style() -> ProgressStyle {
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner())
    }
}

impl Default for ProgressReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressNotifier for ProgressReporter {
    fn on_request_start(&self, _question: &Question) {
        let pb = ProgressBar::new_spinner();
        pb.set_style(Self::spinner_style());
        pb.set_message("Thinking...");
        pb.enable_steady_tick(Duration::from_millis(100));

        if let Ok(mut slot) = self.spinner.lock() {
            *slot = Some(pb);
        }
    }

    fn on_request_complete(&self, _answer: &Answer) {
        self.clear();
    }

    fn on_request_cancelled(&self) {
        self.clear();
    }
}

/// Plain-text progress for terminals where a spinner is unwanted
pub struct SimpleProgress;

impl ProgressNotifier for SimpleProgress {
    fn on_request_start(&self, _question: &Question) {
        println!("Thinking...");
    }

    fn on_request_complete(&self, _answer: &Answer) {}
}
