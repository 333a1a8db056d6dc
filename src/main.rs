//! Chat Cell demo host
//!
//! Drives a chat cell from stdin: every line goes through the input control
//! and the submit path, and a responder task streams an echo back word by
//! word before committing it. Display messages are written to stdout as
//! JSON lines; logs go to stderr.

use chat_cell::{ChatCell, ChatConfig, InputControl, JsonDisplayTarget, TextInput};
use std::io::Stdout;
use std::sync::Arc;
use std::time::Duration;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::mpsc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

type DemoCell = ChatCell<JsonDisplayTarget<Stdout>, Arc<TextInput>>;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logging (stdout carries the display stream)
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "chat_cell=info".into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .json()
                .with_current_span(false)
                .with_span_list(false)
                .with_writer(std::io::stderr),
        )
        .init();

    // Configuration
    let config = ChatConfig::from_env();
    let delay = Duration::from_millis(
        std::env::var("CHAT_CELL_STREAM_DELAY_MS")
            .ok()
            .and_then(|ms| ms.parse().ok())
            .unwrap_or(40),
    );

    let input = Arc::new(TextInput::new());
    let cell: DemoCell = ChatCell::new(
        JsonDisplayTarget::new(std::io::stdout()),
        JsonDisplayTarget::new(std::io::stdout()),
        Arc::clone(&input),
        config,
    );

    // The callback only queues the message; streaming happens on the
    // responder task after the input is enabled again.
    let (message_tx, message_rx) = mpsc::unbounded_channel::<String>();
    cell.connect(move |message: &str| message_tx.send(message.to_string()));

    let responder = tokio::spawn(respond(cell.clone(), message_rx, delay));
    tracing::info!(version = chat_cell::VERSION, "Chat cell ready, reading stdin");

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        input.set_value(&line);
        match cell.handle_submit() {
            Ok(outcome) => tracing::debug!(?outcome, "Submit handled"),
            Err(e) => tracing::error!(error = %e, "Submission failed"),
        }
    }

    // Dropping the callback closes the channel so the responder drains and exits.
    cell.disconnect();
    responder.await?;
    tracing::info!(turns = cell.transcript().len(), "Chat cell finished");

    Ok(())
}

/// Echo each queued message back as a streamed response
async fn respond(cell: DemoCell, mut messages: mpsc::UnboundedReceiver<String>, delay: Duration) {
    while let Some(message) = messages.recv().await {
        cell.append("echo:");
        for word in message.split_whitespace() {
            cell.append(" ");
            cell.append(word);
            tokio::time::sleep(delay).await;
        }
        if let Some(entry) = cell.commit() {
            tracing::info!(len = entry.text().len(), "Response committed");
        }
    }
}
