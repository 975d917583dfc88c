//! Terminal feedback while the completion request is in flight.

use std::io::{IsTerminal, Write};
use std::time::{Duration, Instant};

use tokio::sync::watch;
use tokio::task::JoinHandle;

/// Braille spinner frames.
const FRAMES: &[&str] = &["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

const INTERVAL: Duration = Duration::from_millis(80);

/// A stderr spinner with an elapsed-seconds counter, run as a background task.
pub struct Spinner {
    handle: JoinHandle<()>,
    cancel: watch::Sender<bool>,
}

impl Spinner {
    /// Start only when stderr is a terminal, so piped output stays clean.
    pub fn start_if_tty(message: &str) -> Option<Self> {
        std::io::stderr()
            .is_terminal()
            .then(|| Self::start(message))
    }

    pub fn start(message: &str) -> Self {
        let (cancel_tx, mut cancel_rx) = watch::channel(false);
        let message = message.to_string();
        let started = Instant::now();

        let handle = tokio::spawn(async move {
            let mut i = 0;
            loop {
                eprint!("\x1b[2K\r{}", frame_line(i, &message, started.elapsed()));
                let _ = std::io::stderr().flush();

                tokio::select! {
                    _ = tokio::time::sleep(INTERVAL) => {}
                    _ = cancel_rx.changed() => break,
                }
                i += 1;
            }
            eprint!("\x1b[2K\r");
            let _ = std::io::stderr().flush();
        });

        Self {
            handle,
            cancel: cancel_tx,
        }
    }

    /// Stop the spinner and clear its line.
    pub async fn stop(self) {
        let _ = self.cancel.send(true);
        let _ = self.handle.await;
    }
}

fn frame_line(tick: usize, message: &str, elapsed: Duration) -> String {
    let frame = FRAMES[tick % FRAMES.len()];
    format!("{frame} {message} ({}s)", elapsed.as_secs())
}
