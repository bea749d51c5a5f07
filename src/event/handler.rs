use crossterm::event::{self, KeyEvent, KeyEventKind};
use std::time::Duration;
use tokio::sync::mpsc;
use tracing::warn;

#[derive(Debug)]
pub enum Event {
    /// Key presses only; release and repeat events are dropped
    Key(KeyEvent),
    Resize,
    Tick,
}

/// Polls the terminal on a dedicated thread and forwards events to the UI task
pub struct EventHandler {
    rx: mpsc::UnboundedReceiver<Event>,
    _tx: mpsc::UnboundedSender<Event>,
}

impl EventHandler {
    pub fn new(tick_rate: Duration) -> Self {
        let (tx, rx) = mpsc::unbounded_channel();
        let event_tx = tx.clone();

        std::thread::spawn(move || {
            loop {
                let forwarded = match event::poll(tick_rate) {
                    Ok(true) => match event::read() {
                        Ok(event::Event::Key(key)) if key.kind == KeyEventKind::Press => {
                            event_tx.send(Event::Key(key))
                        }
                        Ok(event::Event::Resize(_, _)) => event_tx.send(Event::Resize),
                        Ok(_) => Ok(()),
                        Err(e) => {
                            warn!("Failed to read terminal event: {}", e);
                            Ok(())
                        }
                    },
                    Ok(false) => event_tx.send(Event::Tick),
                    Err(e) => {
                        warn!("Terminal poll failed: {}", e);
                        event_tx.send(Event::Tick)
                    }
                };

                if forwarded.is_err() {
                    break;
                }
            }
        });

        Self { rx, _tx: tx }
    }

    pub async fn next(&mut self) -> Option<Event> {
        self.rx.recv().await
    }
}
