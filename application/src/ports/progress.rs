//! Progress notification port

use qa_domain::{Answer, Question};

/// Callback for observing a question while it is being answered
pub trait ProgressNotifier: Send + Sync {
    /// Called right before the request is sent
    fn on_request_start(&self, question: &Question);

    /// Called once the answer (or failure) is known
    fn on_request_complete(&self, answer: &Answer);

    /// Called when the caller stops waiting before an answer arrives
    fn on_request_cancelled(&self) {}
}

/// No-op progress notifier
pub struct NoProgress;

impl ProgressNotifier for NoProgress {
    fn on_request_start(&self, _question: &Question) {}
    fn on_request_complete(&self, _answer: &Answer) {}
}
