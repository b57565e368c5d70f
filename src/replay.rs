//! Replay recorded output through a virtual console.

use crate::ansi::AnsiStripper;
use crate::asciicast::{AsciicastFile, Event};
use crate::console::VirtualConsole;

/// Slack for float error when comparing accumulated intervals to a cut-off.
const TIME_EPSILON: f64 = 1e-9;

/// Feeds output events into a [`VirtualConsole`], optionally stripping
/// escape sequences on the way.
pub struct Replayer {
    console: VirtualConsole,
    stripper: Option<AnsiStripper>,
    elapsed: f64,
}

impl Replayer {
    pub fn new(strip_ansi: bool) -> Self {
        Self {
            console: VirtualConsole::new(),
            stripper: strip_ansi.then(AnsiStripper::new),
            elapsed: 0.0,
        }
    }

    /// Process one event. Only output events touch the console, but every
    /// event advances the clock.
    pub fn feed(&mut self, event: &Event) {
        self.elapsed += event.time;
        if !event.is_output() {
            return;
        }

        match self.stripper.as_mut() {
            Some(stripper) => {
                let plain = stripper.push(event.data.as_bytes());
                self.console.submit(&plain);
            }
            None => self.console.submit(&event.data),
        }
    }

    /// Seconds of recording consumed so far.
    pub fn elapsed(&self) -> f64 {
        self.elapsed
    }

    pub fn console(&self) -> &VirtualConsole {
        &self.console
    }

    /// The current rendered console text.
    pub fn render(&self) -> String {
        self.console.to_string()
    }
}

/// Replay a recording up to `until` seconds (the whole recording if `None`)
/// and return the rendered console text.
pub fn replay(file: &AsciicastFile, until: Option<f64>, strip_ansi: bool) -> String {
    let mut replayer = Replayer::new(strip_ansi);
    for event in &file.events {
        if let Some(limit) = until {
            if replayer.elapsed() + event.time > limit + TIME_EPSILON {
                tracing::debug!(limit, elapsed = replayer.elapsed(), "replay stopped early");
                break;
            }
        }
        replayer.feed(event);
    }
    replayer.render()
}
