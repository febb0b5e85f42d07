use std::sync::mpsc::RecvTimeoutError;

use tokio::runtime::Handle;

use crate::config::Config;
use crate::services::Services;
use crate::shutdown::{ShutdownCoordinator, ShutdownPhase};
use crate::ui::app::App;
use crate::ui::events::{AppEvent, EventHandler};
use crate::ui::input::handle_key;
use crate::ui::render::draw;
use crate::ui::terminal_guard::setup_terminal;

/// Run the interactive UI until the user quits or a signal arrives.
///
/// Drawing and key handling stay on this thread; network calls run on
/// `runtime` and report back through the stores and the event channel.
pub fn run(config: &Config, services: Services, runtime: Handle) -> std::io::Result<()> {
    let shutdown = ShutdownCoordinator::new();
    let tick_rate = config.ui.tick_rate();
    let (mut terminal, guard) = setup_terminal()?;
    let events = EventHandler::new(tick_rate, shutdown.handle());

    {
        let handle = shutdown.handle();
        let tx = events.sender();
        // Ends on Ctrl-C, or with the UI when it quits first.
        runtime.spawn(async move {
            tokio::select! {
                result = tokio::signal::ctrl_c() => {
                    if result.is_ok() {
                        handle.signal();
                        let _ = tx.send(AppEvent::Shutdown);
                    }
                }
                _ = handle.wait() => {}
            }
        });
    }

    let mut app = App::new(services, &config.ui, runtime, &events);
    tracing::info!("UI started");

    loop {
        terminal.draw(|frame| draw(frame, &app))?;
        if app.should_quit() || shutdown.is_shutting_down() {
            break;
        }

        match events.next(tick_rate) {
            Ok(AppEvent::Key(key)) => handle_key(&mut app, key),
            Ok(AppEvent::Resize(..)) | Ok(AppEvent::Refresh) => {}
            Ok(event) => app.on_event(event),
            Err(RecvTimeoutError::Timeout) => {}
            Err(RecvTimeoutError::Disconnected) => break,
        }
    }

    shutdown.signal();
    shutdown.advance(ShutdownPhase::StoppingInput);
    drop(guard);
    shutdown.advance(ShutdownPhase::Complete);
    tracing::info!("UI stopped");
    Ok(())
}
