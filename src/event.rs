use std::sync::mpsc;
use std::thread;
use std::time::Duration;

use crossterm::event::{self, Event, KeyEvent, MouseEvent, MouseEventKind};

pub enum AppEvent {
    Key(KeyEvent),
    Click(MouseEvent),
    Tick,
    Resize,
}

/// Reads terminal events on a background thread. A `Tick` is sent whenever
/// no input arrives within `tick_rate`, which drives scheduled round starts.
pub struct EventHandler {
    rx: mpsc::Receiver<AppEvent>,
    _tx: mpsc::Sender<AppEvent>,
}

impl EventHandler {
    pub fn new(tick_rate: Duration) -> Self {
        let (tx, rx) = mpsc::channel();
        let _tx = tx.clone();

        thread::spawn(move || {
            loop {
                let next = if event::poll(tick_rate).unwrap_or(false) {
                    match event::read() {
                        Ok(event) => translate(event),
                        Err(_) => None,
                    }
                } else {
                    Some(AppEvent::Tick)
                };
                if let Some(app_event) = next {
                    if tx.send(app_event).is_err() {
                        return;
                    }
                }
            }
        });

        Self { rx, _tx }
    }

    pub fn next(&self) -> anyhow::Result<AppEvent> {
        Ok(self.rx.recv()?)
    }
}

/// Only button presses are forwarded from the mouse; motion and release
/// events would flood the channel.
fn translate(event: Event) -> Option<AppEvent> {
    match event {
        Event::Key(key) => Some(AppEvent::Key(key)),
        Event::Mouse(mouse) if matches!(mouse.kind, MouseEventKind::Down(_)) => {
            Some(AppEvent::Click(mouse))
        }
        Event::Resize(_, _) => Some(AppEvent::Resize),
        _ => None,
    }
}
