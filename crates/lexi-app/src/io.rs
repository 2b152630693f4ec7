use std::io::BufRead;

use kanal::AsyncSender;
use lexi_types::AppEvent;

/// Turn one prompt line into an event; blank lines produce nothing
pub fn parse_line(line: &str) -> Option<AppEvent> {
    let line = line.trim();
    if line.is_empty() {
        return None;
    }

    let Some(command) = line.strip_prefix(':') else {
        return Some(AppEvent::Submit(line.to_string()));
    };

    let mut parts = command.split_whitespace();
    let name = parts.next().unwrap_or_default();
    let index = parts.next().map(str::parse::<usize>);

    let event = match (name, index) {
        ("random" | "r", None) => AppEvent::RandomWord,
        ("history" | "h", None) => AppEvent::ShowHistory,
        ("history" | "h", Some(Ok(n))) if n > 0 => AppEvent::SearchHistory(n),
        ("syn" | "s", Some(Ok(n))) if n > 0 => AppEvent::SearchSynonym(n),
        ("clear-history", None) => AppEvent::ClearHistory,
        ("clear" | "c", None) => AppEvent::ClearResults,
        ("help" | "?", None) => AppEvent::Help,
        ("quit" | "q" | "exit", None) => AppEvent::Quit,
        _ => AppEvent::Notice(format!("Unknown command: {line} (try :help)")),
    };

    Some(event)
}

/// Read prompt lines on a dedicated thread until EOF or `:quit`.
///
/// Blocking stdin reads would keep the runtime from shutting down, so this
/// stays off the tokio pool.
pub fn spawn_stdin_reader(event_tx: AsyncSender<AppEvent>) -> std::thread::JoinHandle<()> {
    let tx = event_tx.clone_sync();

    std::thread::spawn(move || {
        let stdin = std::io::stdin();
        for line in stdin.lock().lines() {
            let line = match line {
                Ok(line) => line,
                Err(e) => {
                    tracing::error!("Failed to read stdin: {}", e);
                    break;
                }
            };

            let Some(event) = parse_line(&line) else {
                continue;
            };
            let quit = matches!(event, AppEvent::Quit);

            if tx.send(event).is_err() || quit {
                return;
            }
        }

        tracing::debug!("stdin closed");
        let _ = tx.send(AppEvent::Quit);
    })
}
