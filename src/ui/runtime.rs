use crate::config::{Config, SecureString};
use crate::tmdb::TmdbClient;
use crate::ui::app::App;
use crate::ui::events::{AppEvent, EventHandler};
use crate::ui::input::{handle_key, handle_mouse};
use crate::ui::render::draw;
use crate::ui::terminal_guard::setup_terminal;
use crate::worker::run_search_worker;
use anyhow::Context;
use std::sync::Arc;
use tokio::sync::mpsc;

const COMMAND_QUEUE: usize = 32;

pub fn run(config: Config, token: SecureString, initial_query: Option<String>) -> anyhow::Result<()> {
    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .context("failed to start async runtime")?;

    let client = TmdbClient::new(&config.api, token).context("failed to build TMDB client")?;
    tracing::info!(base_url = client.base_url(), "starting moviefinder");

    let tick_rate = config.ui.tick_rate();
    let events = EventHandler::new(tick_rate);
    let (command_tx, command_rx) = mpsc::channel(COMMAND_QUEUE);
    runtime.spawn(run_search_worker(
        Arc::new(client),
        command_rx,
        events.sender(),
    ));

    let mut app = App::new(&config);
    app.set_command_sender(command_tx);

    let (mut terminal, guard) = setup_terminal().context("failed to set up terminal")?;
    if let Ok((cols, rows)) = crossterm::terminal::size() {
        app.on_resize(cols, rows);
    }
    if let Some(query) = initial_query {
        app.search_for(&query);
    }

    loop {
        terminal.draw(|frame| draw(frame, &app))?;
        if app.should_quit() {
            break;
        }

        match events.next(tick_rate) {
            Ok(AppEvent::Key(key)) => handle_key(&mut app, key),
            Ok(AppEvent::Mouse(mouse)) => handle_mouse(&mut app, mouse),
            Ok(AppEvent::Paste(text)) => app.on_paste(&text),
            Ok(AppEvent::Tick) => app.on_tick(),
            Ok(AppEvent::Resize(cols, rows)) => app.on_resize(cols, rows),
            Ok(AppEvent::SearchFinished { seq, outcome }) => app.on_search_finished(seq, outcome),
            Err(std::sync::mpsc::RecvTimeoutError::Timeout) => {}
            Err(std::sync::mpsc::RecvTimeoutError::Disconnected) => break,
        }
    }

    drop(guard);
    runtime.shutdown_background();
    tracing::info!("moviefinder exited");
    Ok(())
}
