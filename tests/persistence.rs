//! Persistence and recovery tests for the rulebot engine.
//!
//! These tests verify that trained responses survive an engine restart and
//! that damaged or unusable training files never stop the engine.

use std::fs;
use std::path::Path;

use rulebot::config::EngineConfig;
use rulebot::engine::Engine;

fn persistent_engine(file: &Path) -> Engine {
    Engine::new(EngineConfig {
        training_file: Some(file.to_path_buf()),
        seed: Some(1),
        ..Default::default()
    })
}

#[test]
fn trained_response_survives_restart() {
    let dir = tempfile::TempDir::new().unwrap();
    let file = dir.path().join("training_data.txt");

    // First session: teach and ask.
    let first_reply = {
        let mut engine = persistent_engine(&file);
        engine.train("What is Rust", "A systems programming language.");
        engine.get_response("what is rust")
    };
    assert_eq!(first_reply, "A systems programming language.");

    // Second session: reload from the file.
    {
        let mut engine = persistent_engine(&file);
        assert_eq!(engine.get_response("what is rust"), first_reply);
    }
}

#[test]
fn file_records_normalized_question_and_trimmed_answer() {
    let dir = tempfile::TempDir::new().unwrap();
    let file = dir.path().join("training_data.txt");

    let mut engine = persistent_engine(&file);
    engine.train("  Favorite FOOD ", "  Pizza Margherita  ");

    assert_eq!(fs::read_to_string(&file).unwrap(), "favorite food|Pizza Margherita\n");
}

#[test]
fn retraining_last_write_wins_after_restart() {
    let dir = tempfile::TempDir::new().unwrap();
    let file = dir.path().join("training_data.txt");

    {
        let mut engine = persistent_engine(&file);
        engine.train("best editor", "vim");
        engine.train("best editor", "helix");
        assert_eq!(engine.get_response("best editor"), "helix");
    }

    // Both lines are kept; the later one wins on reload.
    assert_eq!(fs::read_to_string(&file).unwrap().lines().count(), 2);
    let mut engine = persistent_engine(&file);
    assert_eq!(engine.get_response("best editor"), "helix");
}

#[test]
fn trained_file_entries_override_builtins() {
    let dir = tempfile::TempDir::new().unwrap();
    let file = dir.path().join("training_data.txt");
    fs::write(&file, "hello|Howdy, partner!\n").unwrap();

    let mut engine = persistent_engine(&file);
    assert_eq!(engine.get_response("hello"), "Howdy, partner!");
}

#[test]
fn malformed_lines_are_skipped() {
    let dir = tempfile::TempDir::new().unwrap();
    let file = dir.path().join("training_data.txt");
    fs::write(&file, "onlyonepart\na|b|c\nquokka facts|They smile a lot.\n").unwrap();

    let engine = persistent_engine(&file);
    let builtin_only = Engine::new(EngineConfig::memory_only());
    assert_eq!(engine.lexicon().len(), builtin_only.lexicon().len() + 1);
    assert!(engine.lexicon().lookup("onlyonepart").is_none());
    assert!(engine.lexicon().lookup("a").is_none());
    assert_eq!(engine.lexicon().lookup("quokka facts"), Some("They smile a lot."));
}

#[test]
fn answer_with_separator_does_not_reload() {
    let dir = tempfile::TempDir::new().unwrap();
    let file = dir.path().join("training_data.txt");

    {
        let mut engine = persistent_engine(&file);
        engine.train("pipe question", "left | right");
        assert_eq!(engine.get_response("pipe question"), "left | right");
    }

    assert!(!file.exists());
    let engine = persistent_engine(&file);
    assert!(engine.lexicon().lookup("pipe question").is_none());
}

#[test]
fn multiline_question_is_not_written() {
    let dir = tempfile::TempDir::new().unwrap();
    let file = dir.path().join("training_data.txt");

    {
        let mut engine = persistent_engine(&file);
        engine.train("foo\nbar", "baz");
        engine.train("kept", "line one\nline two");
        assert_eq!(engine.lexicon().lookup("foo\nbar"), Some("baz"));
    }

    assert!(!file.exists());
    let engine = persistent_engine(&file);
    assert!(engine.lexicon().lookup("bar").is_none());
    assert!(engine.lexicon().lookup("foo\nbar").is_none());
    assert!(engine.lexicon().lookup("kept").is_none());
}

#[test]
fn missing_file_is_not_an_error() {
    let dir = tempfile::TempDir::new().unwrap();
    let mut engine = persistent_engine(&dir.path().join("absent.txt"));
    assert_eq!(
        engine.get_response("hello"),
        "Hello there! How can I assist you today?"
    );
}

#[test]
fn unwritable_file_still_trains_in_memory() {
    let dir = tempfile::TempDir::new().unwrap();
    let file = dir.path().join("missing-dir").join("training_data.txt");

    let mut engine = persistent_engine(&file);
    engine.train("secret", "kept in memory");
    assert_eq!(engine.get_response("secret"), "kept in memory");
    assert!(!file.exists());
}

#[test]
fn unreadable_file_falls_back_to_builtins() {
    let dir = tempfile::TempDir::new().unwrap();
    // A directory cannot be read as a file.
    let engine = persistent_engine(dir.path());
    let builtin_only = Engine::new(EngineConfig::memory_only());
    assert_eq!(engine.lexicon().len(), builtin_only.lexicon().len());
}
