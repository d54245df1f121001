// Command execution layer - issues API calls and folds results into the cache
use std::sync::Arc;
use std::time::Duration;

use crate::client::SpaceTradersClient;
use crate::operations::ShipCommand;
use crate::refresh::ShipReloader;
use crate::state::{GameState, ShipPatch};
use crate::o_info;

/// Executes ship commands: verifies ownership, talks to the API, merges the
/// response fields into the cache, and schedules the follow-up reload when a
/// command starts a timer (extraction cooldown, transit arrival).
pub struct ShipController {
    client: SpaceTradersClient,
    state: Arc<GameState>,
    reloader: ShipReloader,
}

impl ShipController {
    pub fn new(client: SpaceTradersClient, state: Arc<GameState>, reloader: ShipReloader) -> Self {
        Self { client, state, reloader }
    }

    pub async fn execute(&self, command: ShipCommand) -> Result<(), Box<dyn std::error::Error>> {
        match command {
            ShipCommand::Navigate { ship_symbol, waypoint_symbol } => {
                self.orbit(&ship_symbol).await?;
                self.navigate(&ship_symbol, &waypoint_symbol).await
            }
            ShipCommand::Extract { ship_symbol } => self.extract(&ship_symbol).await,
            ShipCommand::Jettison { ship_symbol, trade_symbol, units } => {
                self.jettison(&ship_symbol, &trade_symbol, units).await
            }
            ShipCommand::Refuel { ship_symbol } => {
                self.dock(&ship_symbol).await?;
                self.refuel(&ship_symbol).await
            }
            ShipCommand::Transfer { from_symbol, to_symbol, trade_symbol, units } => {
                self.orbit(&to_symbol).await?;
                self.transfer(&from_symbol, &to_symbol, &trade_symbol, units).await
            }
            ShipCommand::Sell { ship_symbol, trade_symbol, units } => {
                self.dock(&ship_symbol).await?;
                self.sell(&ship_symbol, &trade_symbol, units).await
            }
        }
    }

    /// A command addressed to a symbol the cache has never seen is a wiring
    /// mistake, not a transient condition. Fail it immediately.
    fn ensure_owned(&self, ship_symbol: &str) -> Result<(), Box<dyn std::error::Error>> {
        if self.state.contains(ship_symbol) {
            Ok(())
        } else {
            Err(format!("No ship {} in the fleet cache", ship_symbol).into())
        }
    }

    pub async fn dock(&self, ship_symbol: &str) -> Result<(), Box<dyn std::error::Error>> {
        self.ensure_owned(ship_symbol)?;
        let nav = self.client.dock_ship(ship_symbol).await?;
        self.state.apply(ship_symbol, ShipPatch { nav: Some(nav), ..Default::default() })
    }

    pub async fn orbit(&self, ship_symbol: &str) -> Result<(), Box<dyn std::error::Error>> {
        self.ensure_owned(ship_symbol)?;
        let nav = self.client.orbit_ship(ship_symbol).await?;
        self.state.apply(ship_symbol, ShipPatch { nav: Some(nav), ..Default::default() })
    }

    pub async fn navigate(&self, ship_symbol: &str, waypoint_symbol: &str) -> Result<(), Box<dyn std::error::Error>> {
        self.ensure_owned(ship_symbol)?;
        let data = self.client.navigate_ship(ship_symbol, waypoint_symbol).await?;

        let arrival_delay = data.nav.route.arrival_delay();
        self.state.apply(ship_symbol, ShipPatch {
            fuel: Some(data.fuel),
            nav: Some(data.nav),
            ..Default::default()
        })?;

        if let Some(delay) = arrival_delay {
            o_info!("🧭 {} en route to {}, arriving in {}s", ship_symbol, waypoint_symbol, delay.as_secs());
            self.reloader.schedule(ship_symbol, delay);
        } else {
            o_info!("🧭 {} en route to {}", ship_symbol, waypoint_symbol);
        }
        Ok(())
    }

    pub async fn extract(&self, ship_symbol: &str) -> Result<(), Box<dyn std::error::Error>> {
        self.ensure_owned(ship_symbol)?;
        let data = self.client.extract_resources(ship_symbol).await?;

        o_info!(
            "⛏️  {} extracted {} x{}",
            ship_symbol,
            data.extraction.extraction_yield.symbol,
            data.extraction.extraction_yield.units
        );

        let cooldown_total = data.cooldown.total_seconds.max(0) as u64;
        self.state.apply(ship_symbol, ShipPatch {
            cooldown: Some(data.cooldown),
            cargo: Some(data.cargo),
            ..Default::default()
        })?;
        self.reloader.schedule(ship_symbol, Duration::from_secs(cooldown_total));
        Ok(())
    }

    pub async fn refuel(&self, ship_symbol: &str) -> Result<(), Box<dyn std::error::Error>> {
        self.ensure_owned(ship_symbol)?;
        let data = self.client.refuel_ship(ship_symbol).await?;

        o_info!(
            "⛽ {} refueled {} units for {} credits",
            ship_symbol,
            data.transaction.units,
            data.transaction.total_price
        );
        self.state.apply(ship_symbol, ShipPatch { fuel: Some(data.fuel), ..Default::default() })
    }

    pub async fn jettison(&self, ship_symbol: &str, trade_symbol: &str, units: i32) -> Result<(), Box<dyn std::error::Error>> {
        self.ensure_owned(ship_symbol)?;
        let cargo = self.client.jettison_cargo(ship_symbol, trade_symbol, units).await?;

        o_info!("🗑️  {} jettisoned {} x{}", ship_symbol, trade_symbol, units);
        self.state.apply(ship_symbol, ShipPatch { cargo: Some(cargo), ..Default::default() })
    }

    pub async fn sell(&self, ship_symbol: &str, trade_symbol: &str, units: i32) -> Result<(), Box<dyn std::error::Error>> {
        self.ensure_owned(ship_symbol)?;
        let data = self.client.sell_cargo(ship_symbol, trade_symbol, units).await?;

        o_info!(
            "💰 {} sold {} x{} for {} credits",
            ship_symbol,
            data.transaction.trade_symbol,
            data.transaction.units,
            data.transaction.total_price
        );
        self.state.apply(ship_symbol, ShipPatch { cargo: Some(data.cargo), ..Default::default() })
    }

    /// The response reports the sending ship's hold; the receiving side is
    /// derived locally so both holds stay consistent until the next reload.
    pub async fn transfer(&self, from_symbol: &str, to_symbol: &str, trade_symbol: &str, units: i32) -> Result<(), Box<dyn std::error::Error>> {
        self.ensure_owned(from_symbol)?;
        self.ensure_owned(to_symbol)?;
        let data = self.client.transfer_cargo(from_symbol, trade_symbol, units, to_symbol).await?;

        o_info!("📦 {} x{} moved {} -> {}", trade_symbol, units, from_symbol, to_symbol);
        self.state.apply(from_symbol, ShipPatch { cargo: Some(data.cargo), ..Default::default() })?;
        self.state.credit_cargo(to_symbol, trade_symbol, units)
    }
}
