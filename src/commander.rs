// Commander module - the per-cycle arbitration loop
use std::fs;
use std::sync::Arc;
use std::time::Duration;

use tokio::time::sleep;

use crate::client::SpaceTradersClient;
use crate::config::AutopilotConfig;
use crate::operations::ShipController;
use crate::pilots::{HaulerConfig, MinerConfig, Pilot, PilotAction};
use crate::refresh::{FleetScanner, ShipReloader};
use crate::state::GameState;
use crate::{AGENT_TOKEN_FILE, o_debug, o_error, o_info};

/// Priority of the always-available fallback that advances the fleet scan.
/// Every real pilot action outranks it; it wins only when nothing else is
/// proposed.
pub const SCAN_FALLBACK_PRIORITY: i32 = -1;

/// Stable max reduction over the cycle's candidates: the first action seen
/// keeps the lead unless a later one has a strictly greater priority. The
/// list is never re-sorted, so registration order is the tie-break.
pub fn select_action(candidates: &[PilotAction]) -> Option<&PilotAction> {
    let mut best: Option<&PilotAction> = None;
    for action in candidates {
        match best {
            Some(leader) if action.priority <= leader.priority => {}
            _ => best = Some(action),
        }
    }
    best
}

pub fn load_agent_token() -> Result<String, Box<dyn std::error::Error>> {
    let token = fs::read_to_string(AGENT_TOKEN_FILE)
        .map_err(|e| format!("Could not read {}: {} (put your agent token in that file)", AGENT_TOKEN_FILE, e))?;
    Ok(token.trim().to_string())
}

/// Runs the fleet: once per cycle, plan every pilot against the cache, pick
/// the single best action, execute it to completion, pace, repeat. The
/// command channel never carries more than one in-flight write because this
/// loop is the only thing issuing them.
pub struct Commander {
    client: SpaceTradersClient,
    state: Arc<GameState>,
    controller: ShipController,
    reloader: ShipReloader,
    scanner: FleetScanner,
    pilots: Vec<Pilot>,
    cycle_delay: Duration,
}

impl Commander {
    pub fn new(client: SpaceTradersClient, state: Arc<GameState>, config: &AutopilotConfig) -> Self {
        let reloader = ShipReloader::new(
            client.clone(),
            Arc::clone(&state),
            Duration::from_secs(config.timing.reload_retry_seconds),
        );
        let controller = ShipController::new(client.clone(), Arc::clone(&state), reloader.clone());

        // Registration order doubles as the tie-break order: miners first,
        // then haulers, each in config order.
        let mut pilots = Vec::new();
        for ship_symbol in &config.fleet.miners {
            pilots.push(Pilot::Miner(MinerConfig {
                ship_symbol: ship_symbol.clone(),
                site: config.mining.site.clone(),
                allowed_goods: config.mining.allowed_goods.clone(),
            }));
        }
        for ship_symbol in &config.fleet.haulers {
            pilots.push(Pilot::Hauler(HaulerConfig {
                ship_symbol: ship_symbol.clone(),
                source: config.mining.site.clone(),
                destination: config.hauling.marketplace.clone(),
                sellable_goods: config.hauling.sellable_goods.clone(),
                fuel_threshold: config.hauling.fuel_threshold,
                load_threshold: config.hauling.load_threshold,
            }));
        }

        Self {
            client,
            state,
            controller,
            reloader,
            scanner: FleetScanner::new(),
            pilots,
            cycle_delay: Duration::from_millis(config.timing.cycle_delay_ms),
        }
    }

    pub async fn run(mut self) -> Result<(), Box<dyn std::error::Error>> {
        o_info!("🎖️  Commander running {} pilots over {} ships", self.pilots.len(), self.state.ship_count());
        self.seed_reload_timers();

        loop {
            let candidates: Vec<PilotAction> = self
                .pilots
                .iter()
                .flat_map(|pilot| pilot.plan(&self.state))
                .collect();

            match select_action(&candidates) {
                Some(action) if action.priority >= SCAN_FALLBACK_PRIORITY => {
                    o_info!("▶️  [{}] {}", action.priority, action.command);
                    if let Err(e) = self.controller.execute(action.command.clone()).await {
                        // One failed command must not stall the rest of the
                        // fleet; report it and keep cycling.
                        o_error!("❌ Command failed: {}", e);
                    }
                }
                _ => {
                    if let Err(e) = self.scanner.step(&self.client, &self.state).await {
                        o_debug!("🔭 Fleet scan page fetch failed, will retry: {}", e);
                    }
                }
            }

            sleep(self.cycle_delay).await;
        }
    }

    /// Ships already cooling down or in transit when the cache was built get
    /// their reconciliation wake-ups up front, at whichever of the two
    /// expiries comes sooner.
    fn seed_reload_timers(&self) {
        for ship in self.state.snapshot() {
            let cooldown = (ship.cooldown.remaining_seconds > 0)
                .then(|| Duration::from_secs(ship.cooldown.remaining_seconds as u64 + 1));
            let arrival = ship.nav.route.arrival_delay();

            let delay = match (cooldown, arrival) {
                (Some(a), Some(b)) => Some(a.min(b)),
                (a, b) => a.or(b),
            };
            if let Some(delay) = delay {
                self.reloader.schedule(&ship.symbol, delay);
            }
        }
    }
}
