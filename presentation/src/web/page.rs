//! HTML rendering for the question form

/// Answer text shown before anything has been submitted
pub const PLACEHOLDER_ANSWER: &str = "Enter a question above to get an answer.";

/// Values rendered into the page
#[derive(Debug, Clone, Copy)]
pub struct PageView<'a> {
    pub user_question: &'a str,
    pub processed_question: &'a str,
    pub llm_response: &'a str,
}

impl Default for PageView<'_> {
    fn default() -> Self {
        Self {
            user_question: "",
            processed_question: "",
            llm_response: PLACEHOLDER_ANSWER,
        }
    }
}

/// Render the full page. All values are HTML-escaped.
pub fn render(view: &PageView<'_>) -> String {
    let processed = if view.processed_question.is_empty() {
        String::new()
    } else {
        format!(
            r#"
    <section class="processed">
      <h2>Processed question</h2>
      <p><code>{}</code></p>
    </section>"#,
            escape_html(view.processed_question)
        )
    };

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="utf-8">
  <meta name="viewport" content="width=device-width, initial-scale=1">
  <title>NLP Q&amp;A System</title>
  <style>
    body {{ font-family: system-ui, sans-serif; max-width: 48rem; margin: 2rem auto; padding: 0 1rem; }}
    textarea {{ width: 100%; min-height: 5rem; }}
    .answer {{ white-space: pre-wrap; background: #f5f5f5; padding: 1rem; border-radius: 4px; }}
  </style>
</head>
<body>
  <h1>NLP Q&amp;A System</h1>
  <form method="post" action="/">
    <label for="question">Your question</label>
    <textarea id="question" name="question">{question}</textarea>
    <button type="submit">Ask</button>
  </form>
  <main>{processed}
    <section>
      <h2>Answer</h2>
      <div class="answer">{answer}</div>
    </section>
  </main>
</body>
</html>
"#,
        question = escape_html(view.user_question),
        processed = processed,
        answer = escape_html(view.llm_response),
    )
}

fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#x27;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
