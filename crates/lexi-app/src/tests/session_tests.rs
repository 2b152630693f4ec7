use std::collections::HashMap;
use std::io::Write;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use lexi_client::{DictionaryClient, LookupError};
use lexi_config::Config;
use lexi_core::state::AppState;
use lexi_core::storage::{JsonFileStore, KeyValueStore, MemoryStore};
use lexi_types::{AppEvent, Definition, DictionaryEntry, Meaning};
use tokio::time::timeout;

use crate::controller::AppController;

#[derive(Default)]
struct FakeClient {
    responses: HashMap<String, Vec<DictionaryEntry>>,
}

impl FakeClient {
    fn with(mut self, word: &str, synonyms: &[&str]) -> Self {
        let entry = DictionaryEntry {
            word: word.to_string(),
            meanings: vec![Meaning {
                part_of_speech: "noun".to_string(),
                definitions: vec![Definition {
                    definition: format!("meaning of {word}"),
                    example: None,
                }],
                synonyms: synonyms.iter().map(|s| s.to_string()).collect(),
            }],
            ..Default::default()
        };
        self.responses.insert(word.to_string(), vec![entry]);
        self
    }
}

#[async_trait::async_trait]
impl DictionaryClient for FakeClient {
    async fn lookup(&self, word: &str) -> Result<Vec<DictionaryEntry>, LookupError> {
        self.responses
            .get(word)
            .cloned()
            .ok_or_else(|| LookupError::NotFound(word.to_string()))
    }
}

/// Output sink the test can read after the UI task finished
#[derive(Clone, Default)]
struct SharedBuffer(Arc<Mutex<Vec<u8>>>);

impl SharedBuffer {
    fn contents(&self) -> String {
        String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
    }
}

impl Write for SharedBuffer {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

fn app_state(client: FakeClient, store: Box<dyn KeyValueStore>) -> Arc<AppState> {
    Arc::new(AppState::new(Config::default(), Arc::new(client), store))
}

/// Feed `events` as piped input and return everything the UI printed
async fn run_session(state: Arc<AppState>, events: Vec<AppEvent>) -> String {
    let out = SharedBuffer::default();
    let controller = AppController::new(state);
    let mut tasks = controller.spawn_tasks(out.clone(), false);

    let tx = controller.input_sender();
    for event in events {
        tx.send(event).await.unwrap();
    }
    tx.send(AppEvent::Quit).await.unwrap();

    let finished = timeout(Duration::from_secs(5), async {
        while let Some(result) = tasks.join_next().await {
            result.expect("task panicked").expect("task failed");
        }
    })
    .await;
    assert!(finished.is_ok(), "session did not finish");

    out.contents()
}

#[tokio::test]
async fn test_lookup_then_history() {
    let state = app_state(
        FakeClient::default().with("hello", &["hi"]),
        Box::new(MemoryStore::new()),
    );

    let out = run_session(
        state.clone(),
        vec![AppEvent::Submit("  hello ".to_string()), AppEvent::ShowHistory],
    )
    .await;

    assert!(out.contains("meaning of hello"), "{out}");
    assert!(out.contains("Synonyms: [1] hi"), "{out}");
    assert!(out.ends_with("History: [1] hello\n"), "{out}");
    assert_eq!(state.search.input().await, "  hello ");
}

#[tokio::test]
async fn test_not_found_keeps_history_empty() {
    let state = app_state(FakeClient::default(), Box::new(MemoryStore::new()));

    let out = run_session(
        state,
        vec![AppEvent::Submit("zzzzqx".to_string()), AppEvent::ShowHistory],
    )
    .await;

    assert_eq!(
        out,
        "Oops. No results found for “zzzzqx”.\nHistory is empty.\n"
    );
}

#[tokio::test]
async fn test_synonym_pick_searches_the_chip() {
    let state = app_state(
        FakeClient::default()
            .with("happy", &["glad", "cheerful"])
            .with("cheerful", &[]),
        Box::new(MemoryStore::new()),
    );

    let out = run_session(
        state.clone(),
        vec![
            AppEvent::Submit("happy".to_string()),
            AppEvent::SearchSynonym(2),
            AppEvent::SearchSynonym(5),
        ],
    )
    .await;

    assert!(out.contains("meaning of cheerful"), "{out}");
    assert!(out.contains("No synonym #5 in the current results"), "{out}");
    assert_eq!(state.search.history().await, vec!["cheerful", "happy"]);
}

#[tokio::test]
async fn test_history_pick_and_clear() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("store.json");

    let state = app_state(
        FakeClient::default().with("one", &[]).with("two", &[]),
        Box::new(JsonFileStore::new(&path)),
    );

    let out = run_session(
        state.clone(),
        vec![
            AppEvent::Submit("one".to_string()),
            AppEvent::Submit("two".to_string()),
            AppEvent::SearchHistory(2),
            AppEvent::SearchHistory(9),
        ],
    )
    .await;

    assert!(out.contains("No history entry #9"), "{out}");
    assert_eq!(state.search.history().await, vec!["one", "two"]);

    // A new session over the same file sees the remembered words
    let reopened = app_state(FakeClient::default(), Box::new(JsonFileStore::new(&path)));
    assert_eq!(reopened.search.history().await, vec!["one", "two"]);

    let out = run_session(reopened.clone(), vec![AppEvent::ClearHistory]).await;
    assert_eq!(out, "History is empty.\n");
    assert!(reopened.search.history().await.is_empty());
}

#[tokio::test]
async fn test_clear_results_and_notices() {
    let state = app_state(
        FakeClient::default().with("hello", &[]),
        Box::new(MemoryStore::new()),
    );

    let out = run_session(
        state.clone(),
        vec![
            AppEvent::Submit("hello".to_string()),
            AppEvent::ClearResults,
            AppEvent::Notice("Unknown command: :dance (try :help)".to_string()),
        ],
    )
    .await;

    assert!(out.ends_with("Unknown command: :dance (try :help)\n"), "{out}");
    assert_eq!(state.search.state(), lexi_types::SearchState::Idle);
    assert!(state.search.input().await.is_empty());
}
