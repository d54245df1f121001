// Event-scheduled single-ship reloads
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use tokio::task::JoinHandle;
use tokio::time::sleep;

use crate::client::SpaceTradersClient;
use crate::o_debug;
use crate::state::GameState;

/// One-shot reload wake-ups keyed by ship symbol.
///
/// Scheduling a wake-up for a symbol replaces any still-pending wake-up for
/// that same symbol, so a ship never accumulates duplicate reload timers no
/// matter how many commands it runs before the first one fires. Once a
/// wake-up fires it retries until a fetch succeeds; this path never gives up.
#[derive(Clone)]
pub struct ShipReloader {
    inner: Arc<ReloaderInner>,
}

struct ReloaderInner {
    client: SpaceTradersClient,
    state: Arc<GameState>,
    retry_delay: Duration,
    pending: Mutex<HashMap<String, JoinHandle<()>>>,
}

impl ShipReloader {
    pub fn new(client: SpaceTradersClient, state: Arc<GameState>, retry_delay: Duration) -> Self {
        Self {
            inner: Arc::new(ReloaderInner {
                client,
                state,
                retry_delay,
                pending: Mutex::new(HashMap::new()),
            }),
        }
    }

    /// Schedule a reload of one ship after `delay`, replacing any pending
    /// wake-up for the same symbol.
    pub fn schedule(&self, ship_symbol: &str, delay: Duration) {
        let mut pending = self.inner.pending.lock().unwrap();
        if let Some(previous) = pending.remove(ship_symbol) {
            previous.abort();
        }

        o_debug!("⏰ Reload of {} scheduled in {:?}", ship_symbol, delay);
        let inner = Arc::clone(&self.inner);
        let symbol = ship_symbol.to_string();
        let handle = tokio::spawn(async move {
            sleep(delay).await;
            loop {
                match inner.client.get_ship(&symbol).await {
                    Ok(ship) => {
                        o_debug!("🔄 Reloaded {}", symbol);
                        inner.state.upsert(ship);
                        break;
                    }
                    Err(e) => {
                        o_debug!("🔄 Reload of {} failed, retrying: {}", symbol, e);
                        sleep(inner.retry_delay).await;
                    }
                }
            }
        });
        pending.insert(ship_symbol.to_string(), handle);
    }
}
