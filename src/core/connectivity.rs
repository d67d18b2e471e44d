//! Connectivity monitoring
//!
//! The orchestrator never reads a global online flag; it is handed a
//! [`ConnectivityMonitor`] and asks it which provider to use each time an
//! invocation starts.

use tokio::sync::watch;
use tokio_stream::wrappers::WatchStream;
use tracing::info;

/// Lazy stream of connectivity values, yielding only on change
pub type ConnectivityChanges = WatchStream<bool>;

/// Source of the current online/offline signal
pub trait ConnectivityMonitor: Send + Sync {
    /// Current connectivity
    fn is_online(&self) -> bool;

    /// Receiver that observes every connectivity transition
    fn subscribe(&self) -> watch::Receiver<bool>;

    /// Stream of connectivity changes, excluding the current value
    fn changes(&self) -> ConnectivityChanges {
        WatchStream::from_changes(self.subscribe())
    }
}

/// Connectivity driven explicitly by the host (network listener, tests, CLI flag)
#[derive(Debug)]
pub struct ManualConnectivity {
    state: watch::Sender<bool>,
}

impl ManualConnectivity {
    pub fn new(online: bool) -> Self {
        let (state, _) = watch::channel(online);
        Self { state }
    }

    pub fn online() -> Self {
        Self::new(true)
    }

    pub fn offline() -> Self {
        Self::new(false)
    }

    /// Record a connectivity transition; repeated values are ignored
    pub fn set_online(&self, online: bool) {
        let changed = self.state.send_if_modified(|current| {
            if *current == online {
                false
            } else {
                *current = online;
                true
            }
        });
        if changed {
            info!(online, "Connectivity changed");
        }
    }
}

impl Default for ManualConnectivity {
    fn default() -> Self {
        Self::online()
    }
}

impl ConnectivityMonitor for ManualConnectivity {
    fn is_online(&self) -> bool {
        *self.state.borrow()
    }

    fn subscribe(&self) -> watch::Receiver<bool> {
        self.state.subscribe()
    }
}
