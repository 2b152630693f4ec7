use std::io::Write;

use kanal::AsyncReceiver;
use lexi_types::{AppEvent, SearchState};

pub const PROMPT: &str = "> ";

pub const HELP: &str = "\
Type a word to look it up.
  :random          look up a random word
  :history, :h     show the search history
  :h N             look up the N-th history word
  :syn N, :s N     look up the N-th synonym of the shown results
  :clear           clear the results
  :clear-history   forget every remembered word
  :quit, :q        exit";

/// Print everything the app sends until `Quit` or the channel closes
pub async fn ui_loop<W>(
    app_to_ui_rx: AsyncReceiver<AppEvent>,
    mut out: W,
    interactive: bool,
) -> anyhow::Result<()>
where
    W: Write + Send,
{
    if interactive {
        write!(out, "{PROMPT}")?;
        out.flush()?;
    }

    while let Ok(event) = app_to_ui_rx.recv().await {
        let mut show_prompt = interactive;

        match event {
            AppEvent::StateChanged(state) => {
                show_prompt &= !state.is_loading();
                render_state(&mut out, &state)?;
            }
            AppEvent::HistoryListed(words) => render_history(&mut out, &words)?,
            AppEvent::Notice(message) => writeln!(out, "{message}")?,
            AppEvent::Quit => break,
            _ => continue,
        }

        if show_prompt {
            write!(out, "{PROMPT}")?;
        }
        out.flush()?;
    }

    Ok(())
}

pub fn render_state<W: Write>(out: &mut W, state: &SearchState) -> std::io::Result<()> {
    match state {
        SearchState::Idle => {}
        SearchState::Loading { term } => writeln!(out, "Looking up “{term}”…")?,
        SearchState::Success { cards, .. } => {
            for card in cards {
                writeln!(out, "{card}")?;
            }

            let chips = state.synonyms();
            if !chips.is_empty() {
                writeln!(out, "Synonyms: {}", numbered(&chips))?;
            }
        }
        SearchState::Error { message } => writeln!(out, "Oops. {message}")?,
    }

    Ok(())
}

pub fn render_history<W: Write>(out: &mut W, words: &[String]) -> std::io::Result<()> {
    if words.is_empty() {
        writeln!(out, "History is empty.")
    } else {
        writeln!(out, "History: {}", numbered(words))
    }
}

fn numbered(items: &[String]) -> String {
    items
        .iter()
        .enumerate()
        .map(|(i, item)| format!("[{}] {}", i + 1, item))
        .collect::<Vec<_>>()
        .join("  ")
}
