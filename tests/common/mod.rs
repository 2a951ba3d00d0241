//! Shared test utilities and mock infrastructure.

#![allow(dead_code, unused_imports)]

pub mod mock_tmdb;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use moviefinder::config::{ApiConfig, Config, SecureString};
use moviefinder::tmdb::{Movie, ResultPage, SearchRequest, TmdbClient};
use moviefinder::ui::app::{App, UiCommand};
use moviefinder::ui::input::handle_key;
use std::path::PathBuf;
use tempfile::TempDir;
use tokio::sync::mpsc;

pub const TEST_TOKEN: &str = "test-read-access-token";

/// Create a temporary config file with the given TOML body.
pub fn temp_config(content: &str) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let config_path = temp_dir.path().join("config.toml");
    std::fs::write(&config_path, content).expect("Failed to write config");
    (temp_dir, config_path)
}

// -- TMDB helpers -------------------------------------------------------------

pub fn client_for(base_url: &str) -> TmdbClient {
    let api = ApiConfig {
        base_url: base_url.to_string(),
        timeout_seconds: Some(5),
        ..ApiConfig::default()
    };
    TmdbClient::new(&api, SecureString::new(TEST_TOKEN.to_string()))
        .expect("Failed to build client")
}

pub fn movie(id: u64, title: &str) -> Movie {
    Movie {
        id,
        title: title.to_string(),
        poster_path: Some(format!("/poster{id}.jpg")),
        backdrop_path: Some(format!("/backdrop{id}.jpg")),
        overview: format!("Overview of {title}."),
        release_date: "2008-07-16".to_string(),
        vote_average: 8.5,
    }
}

pub fn result_page(prefix: &str, count: usize, page: u32, total_pages: u32) -> ResultPage {
    ResultPage {
        page,
        results: (0..count)
            .map(|i| movie(i as u64 + 1, &format!("{prefix} {i}")))
            .collect(),
        total_pages,
        total_results: count as u32 * total_pages,
    }
}

pub fn empty_page() -> ResultPage {
    ResultPage {
        page: 1,
        results: Vec::new(),
        total_pages: 0,
        total_results: 0,
    }
}

// -- App helpers --------------------------------------------------------------

/// App with a sized screen and a command channel the test can drain.
pub fn make_app() -> (App, mpsc::Receiver<UiCommand>) {
    let mut app = App::new(&Config::default());
    let (tx, rx) = mpsc::channel(64);
    app.set_command_sender(tx);
    app.on_resize(120, 40);
    (app, rx)
}

/// Every command queued so far.
pub fn drain_commands(rx: &mut mpsc::Receiver<UiCommand>) -> Vec<(u64, SearchRequest)> {
    let mut commands = Vec::new();
    while let Ok(UiCommand::Search { seq, request }) = rx.try_recv() {
        commands.push((seq, request));
    }
    commands
}

pub fn press_key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

pub fn ctrl_key(ch: char) -> KeyEvent {
    KeyEvent::new(KeyCode::Char(ch), KeyModifiers::CONTROL)
}

pub fn type_text(app: &mut App, text: &str) {
    for ch in text.chars() {
        handle_key(app, press_key(KeyCode::Char(ch)));
    }
}
