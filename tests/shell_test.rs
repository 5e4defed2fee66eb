mod helpers;

use std::io::Cursor;

use helpers::{RecordingStore, ScriptedModel};
use lumalite::cli::history;
use lumalite::cli::shell::run_shell;
use lumalite::companion::CompanionAgent;
use lumalite::error::{CompanionError, LlmError};
use lumalite::journal::{EntryStore, NewEntry};

/// Run the shell over scripted stdin and return its result and stdout.
async fn drive(model: ScriptedModel, input: &str) -> (anyhow::Result<()>, String) {
    let agent = CompanionAgent::new(model, RecordingStore::new());
    let mut input = Cursor::new(input.to_string());
    let mut out = Vec::new();
    let result = run_shell(&agent, &mut input, &mut out).await;
    (result, String::from_utf8(out).unwrap())
}

#[tokio::test]
async fn check_in_prints_trimmed_reply_then_exits() {
    let (result, out) = drive(
        ScriptedModel::replying("  Breathe. You've got this.  "),
        "1\nI feel stuck\n3\n",
    )
    .await;

    result.unwrap();
    assert!(out.contains("How are you feeling right now?"));
    assert!(out.contains("LumaLite says:\nBreathe. You've got this.\n"));
    assert!(out.trim_end().ends_with("Take care. Come back when you're ready."));
}

#[tokio::test]
async fn brain_dump_prints_categories_and_persists() {
    let model = ScriptedModel::replying(
        r#"{"tasks": ["buy milk"], "worries": ["rent"], "ideas": [], "random": []}"#,
    );
    let agent = CompanionAgent::new(model, RecordingStore::new());
    let mut input = Cursor::new("2\nmilk, rent\n3\n".to_string());
    let mut out = Vec::new();

    run_shell(&agent, &mut input, &mut out).await.unwrap();

    let out = String::from_utf8(out).unwrap();
    assert!(out.contains("Organized Thoughts:"));
    assert!(out.contains("Tasks:\n  - buy milk\n"));
    assert!(out.contains("Worries:\n  - rent\n"));
    assert_eq!(agent.journal().list_all().unwrap().len(), 1);
}

#[tokio::test]
async fn unparsable_reply_prints_envelope() {
    let model = ScriptedModel::replying("I'm not sure how to help with that");
    let agent = CompanionAgent::new(&model, RecordingStore::new());
    let mut input = Cursor::new("2\n\n3\n".to_string());
    let mut out = Vec::new();

    run_shell(&agent, &mut input, &mut out).await.unwrap();

    let out = String::from_utf8(out).unwrap();
    assert!(out.contains("Sorry, I couldn't organize that properly."));
    assert!(out.contains("Raw reply:\n  I'm not sure how to help with that\n"));

    // The empty line reaches the prompt unchanged.
    let requests = model.requests.lock().unwrap();
    assert_eq!(requests.len(), 1);
    assert!(requests[0][0].content.contains("brain dump:\n\"\"\n"));
}

#[tokio::test]
async fn invalid_utf8_input_does_not_end_the_session() {
    let model = ScriptedModel::replying("That sounds lovely.");
    let agent = CompanionAgent::new(&model, RecordingStore::new());
    let mut input = Cursor::new(b"1\ncaf\xe9\n3\n".to_vec());
    let mut out = Vec::new();

    run_shell(&agent, &mut input, &mut out).await.unwrap();

    assert_eq!(model.request_count(), 1);
    let requests = model.requests.lock().unwrap();
    assert!(requests[0][0].content.contains("\"caf\u{FFFD}\""));
    assert!(String::from_utf8(out).unwrap().contains("That sounds lovely."));
}

#[tokio::test]
async fn end_of_input_exits_cleanly() {
    let (result, out) = drive(ScriptedModel::new(vec![]), "").await;

    result.unwrap();
    assert!(out.contains("What would you like to do today?"));
    assert!(out.contains("Take care."));
}

#[tokio::test]
async fn unknown_choice_exits_without_calling_model() {
    let model = ScriptedModel::new(vec![]);
    let agent = CompanionAgent::new(&model, RecordingStore::new());
    let mut input = Cursor::new("9\n1\nshould not be read\n".to_string());
    let mut out = Vec::new();

    run_shell(&agent, &mut input, &mut out).await.unwrap();
    assert_eq!(model.request_count(), 0);
}

#[tokio::test]
async fn model_failure_ends_the_shell_with_error() {
    let (result, _) = drive(ScriptedModel::failing(503, "unavailable"), "1\nhello\n3\n").await;

    let err = result.unwrap_err();
    let companion = err.downcast_ref::<CompanionError>().expect("companion error");
    assert!(matches!(
        companion,
        CompanionError::Llm(LlmError::Status { status: 503, .. })
    ));
}

#[test]
fn history_commands_render_store_contents() {
    let store = RecordingStore::new();
    let mut out = Vec::new();
    history::latest(&store, &mut out).unwrap();
    assert_eq!(String::from_utf8(out).unwrap(), "No entries yet.\n");

    let parsed = serde_json::json!({
        "tasks": ["call mom"],
        "worries": [],
        "ideas": [],
        "random": []
    });
    let entry = NewEntry::from_categories("brain_dump", parsed.as_object().unwrap());
    let saved = store.create(&entry).unwrap();

    let mut out = Vec::new();
    history::history(&store, &mut out).unwrap();
    let text = String::from_utf8(out).unwrap();
    assert!(text.starts_with("Brain dumps (1)\n"));
    assert!(text.contains(&format!("Entry #{} [brain_dump]", saved.id)));
    assert!(text.contains("  - call mom\n"));

    let mut out = Vec::new();
    history::forget(&store, saved.id, &mut out).unwrap();
    let text = String::from_utf8(out).unwrap();
    assert!(text.starts_with(&format!("Deleted entry {}", saved.id)));

    let mut out = Vec::new();
    history::forget(&store, saved.id, &mut out).unwrap();
    assert!(String::from_utf8(out).unwrap().contains("nothing deleted"));
}
