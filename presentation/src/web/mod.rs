//! Web form front end
//!
//! A single page with a `question` field. Submitting it runs the same
//! pipeline as the REPL and renders the raw question, the normalized
//! question and the answer.

mod page;
mod routes;

pub use page::{PLACEHOLDER_ANSWER, PageView, render};
pub use routes::{QuestionForm, WebState, router};

use qa_application::AskQuestionUseCase;
use std::net::SocketAddr;
use tracing::info;

/// Run the web server until it fails
pub async fn serve(use_case: AskQuestionUseCase, addr: SocketAddr) -> std::io::Result<()> {
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("Listening on http://{}", listener.local_addr()?);

    axum::serve(listener, router(use_case)).await
}
