// src/engine/countdown.rs

//! Wall-clock driver for the session countdown.
//!
//! The engine itself counts time in explicit [`tick`](super::GameEngine::tick)
//! calls; this module supplies the one asynchronous piece that turns real
//! seconds into those calls. A `Countdown` owns a background thread that
//! emits `()` on a channel once per second. The thread holds no reference to
//! the engine - ticks only become state changes when the session owner
//! drains the channel and calls `tick()`, which checks the phase first, so a
//! message that was already in flight when the session paused or reset is
//! simply ignored.

use std::sync::mpsc::{self, Receiver, RecvTimeoutError, Sender};
use std::thread::{self, JoinHandle};
use std::time::Duration;

/// A cancellable one-second ticker.
pub struct Countdown {
    handle: Option<JoinHandle<()>>,
    stop_tx: Sender<()>,
}

impl Countdown {
    /// Spawns the ticker. Returns the handle and the receiving end of the
    /// tick channel; the caller drains the receiver and forwards each tick
    /// to its engine.
    pub fn start() -> (Self, Receiver<()>) {
        let (tick_tx, tick_rx) = mpsc::channel();
        let (stop_tx, stop_rx) = mpsc::channel();

        let handle = thread::spawn(move || {
            loop {
                match stop_rx.recv_timeout(Duration::from_secs(1)) {
                    // A full second elapsed without a stop signal.
                    Err(RecvTimeoutError::Timeout) => {
                        if tick_tx.send(()).is_err() {
                            // Receiver gone; nobody is listening anymore.
                            break;
                        }
                    }
                    // Explicit cancel, or the Countdown itself was dropped.
                    Ok(()) | Err(RecvTimeoutError::Disconnected) => break,
                }
            }
        });

        (
            Self {
                handle: Some(handle),
                stop_tx,
            },
            tick_rx,
        )
    }

    /// Stops the ticker and waits for the thread to exit. After this
    /// returns, no new tick will ever be produced; at most the ticks already
    /// sitting in the channel remain, and the engine's phase guard makes
    /// those harmless.
    pub fn cancel(mut self) {
        self.shutdown();
    }

    fn shutdown(&mut self) {
        if let Some(handle) = self.handle.take() {
            let _ = self.stop_tx.send(());
            let _ = handle.join();
        }
    }
}

impl Drop for Countdown {
    fn drop(&mut self) {
        self.shutdown();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::mpsc::TryRecvError;

    #[test]
    fn cancel_is_synchronous_and_final() {
        let (countdown, tick_rx) = Countdown::start();
        countdown.cancel();
        // cancel() joins the thread, so by now the sender half is dropped;
        // once any in-flight tick is drained the channel must report
        // disconnection, never a pending tick.
        while tick_rx.try_recv().is_ok() {}
        assert!(matches!(tick_rx.try_recv(), Err(TryRecvError::Disconnected)));
    }

    #[test]
    fn dropping_the_receiver_stops_the_thread() {
        let (countdown, tick_rx) = Countdown::start();
        drop(tick_rx);
        // cancel() joins; this must not dead-lock even though the tick
        // channel is gone.
        countdown.cancel();
    }
}
