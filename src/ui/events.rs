use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::{self, Receiver, Sender};
use std::sync::Arc;
use std::thread;
use std::time::{Duration, Instant};

use crossterm::event::{self, Event, KeyEvent};

use crate::services::User;
use crate::shutdown::ShutdownHandle;

pub enum AppEvent {
    Key(KeyEvent),
    Tick,
    Resize(u16, u16),
    /// Some store changed; redraw.
    Refresh,
    /// Login finished; leave the login screen.
    LoggedIn(User),
    /// Logout finished; back to the login screen.
    LoggedOut,
    /// Confirmed add-to-cart from the parts screen.
    AddedToCart { quantity: u32 },
    /// OS signal received (SIGTERM, SIGINT)
    Shutdown,
}

pub struct EventHandler {
    rx: Receiver<AppEvent>,
    tx: Sender<AppEvent>,
    redraw_pending: Arc<AtomicBool>,
}

impl EventHandler {
    pub fn new(tick_rate: Duration, shutdown: ShutdownHandle) -> Self {
        let (tx, rx) = mpsc::channel();
        let event_tx = tx.clone();

        thread::spawn(move || {
            let mut last_tick = Instant::now();
            loop {
                if shutdown.is_shutting_down() {
                    break;
                }

                // Short poll so the shutdown flag is seen promptly.
                let timeout = tick_rate
                    .saturating_sub(last_tick.elapsed())
                    .min(Duration::from_millis(50));

                match event::poll(timeout) {
                    Ok(true) => match event::read() {
                        Ok(Event::Key(key)) => {
                            let _ = event_tx.send(AppEvent::Key(key));
                        }
                        Ok(Event::Resize(cols, rows)) => {
                            let _ = event_tx.send(AppEvent::Resize(cols, rows));
                        }
                        Ok(_) => {}
                        Err(err) => {
                            tracing::error!(error = %err, "Terminal read failed");
                            let _ = event_tx.send(AppEvent::Shutdown);
                            break;
                        }
                    },
                    Ok(false) => {}
                    Err(err) => {
                        tracing::error!(error = %err, "Terminal poll failed");
                        let _ = event_tx.send(AppEvent::Shutdown);
                        break;
                    }
                }

                if last_tick.elapsed() >= tick_rate {
                    if event_tx.send(AppEvent::Tick).is_err() {
                        break;
                    }
                    last_tick = Instant::now();
                }
            }
        });

        Self {
            rx,
            tx,
            redraw_pending: Arc::new(AtomicBool::new(false)),
        }
    }

    pub fn next(&self, timeout: Duration) -> Result<AppEvent, mpsc::RecvTimeoutError> {
        let event = self.rx.recv_timeout(timeout)?;
        if matches!(event, AppEvent::Refresh) {
            self.redraw_pending.store(false, Ordering::SeqCst);
        }
        Ok(event)
    }

    pub fn sender(&self) -> Sender<AppEvent> {
        self.tx.clone()
    }

    /// Store listener that queues at most one pending `Refresh`.
    pub fn redraw_notifier(&self) -> impl Fn() + Send + Sync + Clone + 'static {
        let tx = self.tx.clone();
        let pending = Arc::clone(&self.redraw_pending);
        move || {
            if !pending.swap(true, Ordering::SeqCst) {
                let _ = tx.send(AppEvent::Refresh);
            }
        }
    }
}
