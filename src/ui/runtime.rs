//! Event plumbing for the tracking shell: stdin lines and periodic ticks.

use std::io::BufRead;
use std::sync::mpsc::{self, Receiver, RecvTimeoutError};
use std::time::Duration;

/// Unified event type consumed by the tracking shell
#[derive(Clone, Debug, PartialEq)]
pub enum ShellEvent {
    Line(String),
    Eof,
    Tick,
}

/// Source of user input lines
pub trait ShellEventSource {
    /// Block for up to `timeout` waiting for an event.
    fn recv_timeout(&self, timeout: Duration) -> Result<ShellEvent, RecvTimeoutError>;
}

/// Production event source: a reader thread forwards stdin lines.
pub struct StdinEventSource {
    rx: Receiver<ShellEvent>,
}

impl StdinEventSource {
    pub fn new() -> Self {
        let (tx, rx) = mpsc::channel();

        std::thread::spawn(move || {
            let stdin = std::io::stdin();
            for line in stdin.lock().lines() {
                match line {
                    Ok(l) => {
                        if tx.send(ShellEvent::Line(l)).is_err() {
                            return;
                        }
                    }
                    Err(_) => break,
                }
            }
            let _ = tx.send(ShellEvent::Eof);
        });

        Self { rx }
    }
}

impl Default for StdinEventSource {
    fn default() -> Self {
        Self::new()
    }
}

impl ShellEventSource for StdinEventSource {
    fn recv_timeout(&self, timeout: Duration) -> Result<ShellEvent, RecvTimeoutError> {
        self.rx.recv_timeout(timeout)
    }
}

/// Event source fed from a channel, for tests and scripted input
pub struct ChannelEventSource {
    rx: Receiver<ShellEvent>,
}

impl ChannelEventSource {
    pub fn new(rx: Receiver<ShellEvent>) -> Self {
        Self { rx }
    }
}

impl ShellEventSource for ChannelEventSource {
    fn recv_timeout(&self, timeout: Duration) -> Result<ShellEvent, RecvTimeoutError> {
        self.rx.recv_timeout(timeout)
    }
}

/// Configurable ticker interface
pub trait Ticker {
    fn interval(&self) -> Duration;
}

/// Fixed interval ticker
#[derive(Clone, Copy, Debug)]
pub struct FixedTicker {
    interval: Duration,
}

impl FixedTicker {
    pub fn new(interval: Duration) -> Self {
        Self { interval }
    }

    pub fn from_millis(ms: u64) -> Self {
        Self::new(Duration::from_millis(ms.max(1)))
    }
}

impl Ticker for FixedTicker {
    fn interval(&self) -> Duration {
        self.interval
    }
}

/// Runner that advances the shell one event/tick at a time
pub struct Runner<E: ShellEventSource, T: Ticker> {
    event_source: E,
    ticker: T,
}

impl<E: ShellEventSource, T: Ticker> Runner<E, T> {
    pub fn new(event_source: E, ticker: T) -> Self {
        Self {
            event_source,
            ticker,
        }
    }

    /// Blocks up to the tick interval and returns the next event, or Tick on timeout.
    /// A closed source reads as end of input.
    pub fn step(&self) -> ShellEvent {
        match self.event_source.recv_timeout(self.ticker.interval()) {
            Ok(ev) => ev,
            Err(RecvTimeoutError::Timeout) => ShellEvent::Tick,
            Err(RecvTimeoutError::Disconnected) => ShellEvent::Eof,
        }
    }
}
