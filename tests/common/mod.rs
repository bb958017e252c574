//! Shared test utilities and mock infrastructure.

#![allow(dead_code, unused_imports)]

pub mod mock_backend;

use jp_quiz::{Level, Question};
use serde_json::{json, Value};
use std::path::PathBuf;
use tempfile::TempDir;

/// A small question pool mixing two JLPT levels.
pub fn sample_dataset() -> Value {
    json!([
        {"id": 1, "level": "N5", "question": "水", "answer": "みず"},
        {"id": 2, "level": "N4", "question": "駅", "answer": "えき"},
        {"id": 3, "level": "N5", "question": "山", "answer": "やま"},
        {"id": 4, "level": "N3", "question": "届", "answer": "とどけ"}
    ])
}

pub fn numbered(levels: &[i64]) -> Vec<Question> {
    levels.iter().map(|&l| Question::new(Level::int(l))).collect()
}

/// Write `content` to a config.toml inside a fresh temp dir.
pub fn temp_config(content: &str) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let config_path = temp_dir.path().join("config.toml");
    std::fs::write(&config_path, content).expect("Failed to write config");
    (temp_dir, config_path)
}
