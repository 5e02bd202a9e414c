//! Coalescing Queue
//!
//! Collapses bursts of override changes into one projection pass. Producers
//! signal through the handle; the single consumer awaits `wait`, which
//! blocks for a first signal and then absorbs further signals until the
//! debounce window lapses.

use smol::Timer;
use smol::channel::{Receiver, Sender, unbounded};
use std::time::Duration;

/// Default debounce window
pub const DEFAULT_WINDOW: Duration = Duration::from_millis(100);

/// Producer side: cheap, clonable notification handle
#[derive(Debug, Clone)]
pub struct CoalesceHandle {
    tx: Sender<()>,
}

impl CoalesceHandle {
    /// Signal that the token state changed
    pub fn notify(&self) {
        // Unbounded channel: only fails once the consumer is gone
        let _ = self.tx.try_send(());
    }
}

/// Consumer side of the queue
pub struct Coalescer {
    rx: Receiver<()>,
    window: Duration,
}

enum Tick {
    Signal,
    Closed,
    Elapsed,
}

impl Coalescer {
    /// Wait for the next coalesced batch. Returns `false` once all handles
    /// are dropped and no signal is pending.
    pub async fn wait(&self) -> bool {
        if self.rx.recv().await.is_err() {
            return false;
        }

        loop {
            let more = async {
                if self.rx.recv().await.is_ok() {
                    Tick::Signal
                } else {
                    Tick::Closed
                }
            };
            let lapse = async {
                Timer::after(self.window).await;
                Tick::Elapsed
            };

            match smol::future::race(more, lapse).await {
                // Another change inside the window restarts it
                Tick::Signal => continue,
                Tick::Closed | Tick::Elapsed => return true,
            }
        }
    }
}

/// Create a coalescing queue with the given debounce window
pub fn coalescer(window: Duration) -> (CoalesceHandle, Coalescer) {
    let (tx, rx) = unbounded();
    (CoalesceHandle { tx }, Coalescer { rx, window })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_burst_collapses_to_one_batch() {
        smol::block_on(async {
            let (handle, queue) = coalescer(Duration::from_millis(10));

            handle.notify();
            handle.notify();
            handle.notify();

            assert!(queue.wait().await);

            // Burst fully absorbed: no second batch pending
            let pending = async { queue.wait().await };
            let lapse = async {
                Timer::after(Duration::from_millis(50)).await;
                false
            };
            assert!(!smol::future::race(pending, lapse).await);
        });
    }

    #[test]
    fn test_signals_after_batch_produce_new_batch() {
        smol::block_on(async {
            let (handle, queue) = coalescer(Duration::from_millis(5));

            handle.notify();
            assert!(queue.wait().await);

            handle.notify();
            assert!(queue.wait().await);
        });
    }

    #[test]
    fn test_closed_without_signal_ends() {
        smol::block_on(async {
            let (handle, queue) = coalescer(Duration::from_millis(5));
            drop(handle);

            assert!(!queue.wait().await);
        });
    }

    #[test]
    fn test_pending_signal_survives_close() {
        smol::block_on(async {
            let (handle, queue) = coalescer(Duration::from_millis(5));
            handle.notify();
            drop(handle);

            assert!(queue.wait().await);
            assert!(!queue.wait().await);
        });
    }
}
