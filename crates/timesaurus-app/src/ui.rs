use std::io::{BufRead, Write};
use std::sync::Arc;

use kanal::{AsyncReceiver, AsyncSender};
use timesaurus_config::Config;
use timesaurus_core::Language;
use timesaurus_core::types::{AppEvent, UiEvent};
use tokio::sync::RwLock;
use tokio_util::sync::CancellationToken;

use crate::command::{Command, USAGE, parse_command};
use crate::render::{render_dashboard, render_suggestions};

/// Read stdin lines on a dedicated thread so a pending read never holds up
/// the runtime
pub fn spawn_stdin_reader() -> AsyncReceiver<String> {
    let (tx, rx) = kanal::bounded(16);

    std::thread::spawn(move || {
        let stdin = std::io::stdin();
        for line in stdin.lock().lines() {
            match line {
                Ok(line) => {
                    if tx.send(line).is_err() {
                        break;
                    }
                }
                Err(e) => {
                    tracing::error!("Failed to read stdin: {}", e);
                    break;
                }
            }
        }
        tracing::debug!("stdin reader stopping");
    });

    rx.to_async()
}

/// Presentation-side state, including the document language side effect
struct Screen {
    document_lang: Option<Language>,
    help: String,
    chart_width: u32,
    show_line_chart: bool,
    interactive: bool,
}

impl Screen {
    fn prompt<W: Write>(&self, out: &mut W) -> std::io::Result<()> {
        if self.interactive {
            let lang = self.document_lang.map(|l| l.code()).unwrap_or("--");
            write!(out, "[{lang}]> ")?;
            out.flush()?;
        }
        Ok(())
    }

    fn show<W: Write>(&mut self, event: AppEvent, out: &mut W) -> std::io::Result<()> {
        match event {
            AppEvent::ShowDashboard(view) => {
                self.help = view.help.clone();
                let frame = render_dashboard(&view, self.chart_width, self.show_line_chart);
                writeln!(out)?;
                write!(out, "{frame}")?;
                self.prompt(out)?;
            }
            AppEvent::ShowSuggestions(suggestions) => {
                write!(out, "{}", render_suggestions(&suggestions))?;
                self.prompt(out)?;
            }
            AppEvent::SetDocumentLanguage(language) => {
                tracing::debug!("Document language set to {}", language);
                self.document_lang = Some(language);
            }
            AppEvent::UiEvent(_) => {}
        }
        Ok(())
    }
}

/// Terminal front end: turns input lines into UI events and draws what the
/// event loop sends back
pub async fn ui_loop<W: Write>(
    input_rx: AsyncReceiver<String>,
    app_to_ui_rx: AsyncReceiver<AppEvent>,
    ui_to_app_tx: AsyncSender<AppEvent>,
    config: Arc<RwLock<Config>>,
    cancel: CancellationToken,
    out: &mut W,
) -> anyhow::Result<()> {
    let mut screen = {
        let config = config.read().await;
        Screen {
            document_lang: None,
            help: String::new(),
            chart_width: config.ui.chart_width,
            show_line_chart: config.ui.show_line_chart,
            interactive: atty::is(atty::Stream::Stdin),
        }
    };

    let mut reading = true;
    loop {
        tokio::select! {
            biased;

            event = app_to_ui_rx.recv() => {
                let Ok(event) = event else {
                    tracing::debug!("[UI] App channel closed");
                    break;
                };
                screen.show(event, out)?;
            }
            line = input_rx.recv(), if reading => {
                let events = match line {
                    Ok(line) => match parse_command(&line) {
                        Ok(Command::Ui(event)) => vec![event],
                        Ok(Command::Set { slot, text }) => {
                            vec![UiEvent::WordInputChange { slot, text }, UiEvent::WordCommit(slot)]
                        }
                        Ok(Command::Help) => {
                            let help = if screen.help.is_empty() { USAGE } else { screen.help.as_str() };
                            writeln!(out, "{help}")?;
                            screen.prompt(out)?;
                            vec![]
                        }
                        Err(e) => {
                            tracing::debug!("[UI] Bad command '{}': {}", line, e);
                            writeln!(out, "{e}")?;
                            screen.prompt(out)?;
                            vec![]
                        }
                    },
                    // End of input
                    Err(_) => vec![UiEvent::Close],
                };

                for event in events {
                    if event == UiEvent::Close {
                        reading = false;
                    }
                    ui_to_app_tx.send(AppEvent::UiEvent(event)).await?;
                }
            }
            _ = cancel.cancelled() => {
                tracing::debug!("[UI] Cancelled");
                break;
            }
        }
    }

    out.flush()?;
    Ok(())
}
