use crate::config::Config;
use crate::loader::{spawn_load, CountrySource};
use crate::ui::app::App;
use crate::ui::events::{AppEvent, EventHandler};
use crate::ui::input::handle_key;
use crate::ui::render::draw;
use crate::ui::terminal_guard::setup_terminal;
use std::io;
use std::sync::mpsc::RecvTimeoutError;
use std::sync::Arc;
use std::time::Duration;
use tokio::runtime::Handle;

/// Run the UI until the user quits. The dataset fetch starts immediately and
/// reports back through the event channel.
pub fn run(config: &Config, source: Arc<dyn CountrySource>, runtime: &Handle) -> io::Result<()> {
    let (mut terminal, guard) = setup_terminal()?;
    let tick_rate = Duration::from_millis(config.ui.tick_rate_ms.max(1));
    let mut app = App::new(&config.ui);
    let events = EventHandler::new(tick_rate);

    let loaded_tx = events.sender();
    let load_task = spawn_load(runtime, source, move |result| {
        let _ = loaded_tx.send(AppEvent::CatalogLoaded(result));
    });

    if let Ok((cols, rows)) = crossterm::terminal::size() {
        app.on_resize(cols, rows);
    }

    loop {
        terminal.draw(|frame| draw(frame, &app))?;
        if app.should_quit() {
            break;
        }

        match events.next(tick_rate) {
            Ok(AppEvent::Key(key)) => handle_key(&mut app, key),
            Ok(AppEvent::Tick) => {}
            Ok(AppEvent::Resize(cols, rows)) => app.on_resize(cols, rows),
            Ok(AppEvent::CatalogLoaded(result)) => app.on_catalog_loaded(result),
            Err(RecvTimeoutError::Timeout) => {}
            Err(RecvTimeoutError::Disconnected) => break,
        }
    }

    // Quitting mid-fetch drops the request
    load_task.abort();
    drop(guard);
    Ok(())
}
