//! Event loop for the terminal page.
//!
//! The loop is the only writer of [`Page`]. Commands come in line by line;
//! the recommendation call runs in a spawned task and its outcome comes back
//! through a channel as one more [`Action`].

use crate::{
    client::{RecommendationError, RecommendationSource},
    command::{Command, Vocabulary, HELP},
    notify::FailureNotifier,
    render::render_page,
    submission::{run_notify, Action, Effect, Page},
    vocab,
};
use anyhow::Context;
use std::sync::Arc;
use tokio::{
    io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt},
    sync::mpsc,
};
use tracing::{debug, error, info};

struct PageRuntime {
    page: Page,
    source: Arc<dyn RecommendationSource>,
    notifier: Arc<dyn FailureNotifier>,
    completions: mpsc::Sender<Action>,
}

impl PageRuntime {
    fn apply(&mut self, action: Action) {
        match self.page.dispatch(action) {
            Some(Effect::Fetch(request)) => {
                let source = self.source.clone();
                let tx = self.completions.clone();
                tokio::spawn(async move {
                    let request_id = request.request_id;
                    let call = tokio::spawn(async move { source.recommend(&request).await });
                    // a panicking source must still end the load
                    let outcome = match call.await {
                        Ok(Ok(payload)) => {
                            info!(request_id = %request_id, "✅ Recommendations received");
                            Action::SubmitSuccess(payload)
                        }
                        Ok(Err(e)) => Action::SubmitFailure(e),
                        Err(e) => {
                            error!(request_id = %request_id, "❌ Recommendation task died: {}", e);
                            Action::SubmitFailure(RecommendationError::Other(e.to_string()))
                        }
                    };
                    // receiver only goes away when the page is closing
                    let _ = tx.send(outcome).await;
                });
            }
            Some(Effect::Notify(message)) => run_notify(self.notifier.as_ref(), message),
            None => {}
        }
    }
}

/// Runs the page until `quit` or end of input, then returns its final state.
/// Pending requests are awaited when input ends, not when the user quits.
pub async fn run<R, W>(
    input: R,
    mut out: W,
    source: Arc<dyn RecommendationSource>,
    notifier: Arc<dyn FailureNotifier>,
) -> anyhow::Result<Page>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    let (tx, mut rx) = mpsc::channel(1);
    let mut rt = PageRuntime { page: Page::default(), source, notifier, completions: tx };
    let mut lines = input.lines();
    let mut input_open = true;

    out.write_all(render_page(&rt.page).as_bytes()).await.context("writing page")?;
    out.write_all(b"type 'help' for commands\n").await?;
    out.flush().await?;

    loop {
        let text = tokio::select! {
            line = lines.next_line(), if input_open => {
                match line.context("reading input")? {
                    Some(line) => match Command::parse(&line) {
                        Ok(Command::Quit) => break,
                        Ok(Command::Help) => format!("{HELP}\n"),
                        Ok(Command::Suggest(which, prefix)) => suggestions(which, &prefix),
                        Ok(cmd) => {
                            debug!(?cmd, "command");
                            for action in cmd.into_actions() { rt.apply(action); }
                            render_page(&rt.page)
                        }
                        Err(e) => format!("{e}\n"),
                    },
                    None => {
                        input_open = false;
                        if !rt.page.submission.is_loading { break; }
                        continue;
                    }
                }
            }
            Some(action) = rx.recv() => {
                rt.apply(action);
                render_page(&rt.page)
            }
        };
        out.write_all(text.as_bytes()).await?;
        out.flush().await?;
        if !input_open && !rt.page.submission.is_loading { break; }
    }
    Ok(rt.page)
}

fn suggestions(which: Vocabulary, prefix: &str) -> String {
    let list = match which {
        Vocabulary::Colors => vocab::COLORS,
        Vocabulary::Items => vocab::CATEGORIES,
        Vocabulary::Styles => vocab::STYLES,
    };
    let hits = vocab::suggest(list, prefix);
    if hits.is_empty() { "no suggestions\n".to_string() } else { format!("{}\n", hits.join(", ")) }
}
