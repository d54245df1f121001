use serde::{Deserialize, Serialize};
use crate::o_info;
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AutopilotConfig {
    pub fleet: FleetRoster,
    pub mining: MiningConfig,
    pub hauling: HaulingConfig,
    pub timing: TimingConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FleetRoster {
    /// Ship symbols flown with the miner strategy
    pub miners: Vec<String>,
    /// Ship symbols flown with the hauler strategy
    pub haulers: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MiningConfig {
    /// Waypoint the miners extract at
    pub site: String,
    /// Goods worth keeping; miners jettison everything else
    pub allowed_goods: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HaulingConfig {
    /// Waypoint the haulers sell at
    pub marketplace: String,
    /// Goods the haulers pull from miners and carry to market
    pub sellable_goods: Vec<String>,
    /// Refuel as soon as fuel drops below this many units
    pub fuel_threshold: i32,
    /// Head for market once the hold passes this many units
    pub load_threshold: i32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimingConfig {
    /// Delay between scheduler cycles in milliseconds
    pub cycle_delay_ms: u64,
    /// Backoff between reload retries in seconds
    pub reload_retry_seconds: u64,
}

impl Default for AutopilotConfig {
    fn default() -> Self {
        Self {
            fleet: FleetRoster {
                miners: Vec::new(),
                haulers: Vec::new(),
            },
            mining: MiningConfig {
                site: "X1-RV45-EC5X".to_string(),
                allowed_goods: vec![
                    "IRON_ORE".to_string(),
                    "ALUMINUM_ORE".to_string(),
                    "COPPER_ORE".to_string(),
                ],
            },
            hauling: HaulingConfig {
                marketplace: "X1-RV45-H63".to_string(),
                sellable_goods: vec![
                    "IRON_ORE".to_string(),
                    "ALUMINUM_ORE".to_string(),
                    "COPPER_ORE".to_string(),
                ],
                fuel_threshold: 100,
                load_threshold: 37,
            },
            timing: TimingConfig {
                cycle_delay_ms: 700,
                reload_retry_seconds: 1,
            },
        }
    }
}

impl AutopilotConfig {
    /// Load configuration from file, creating a default one if it doesn't exist
    pub fn load_or_create(config_path: &str) -> Result<Self, Box<dyn std::error::Error>> {
        if Path::new(config_path).exists() {
            o_info!("📋 Loading configuration from {}", config_path);
            let config_str = fs::read_to_string(config_path)?;
            let config: AutopilotConfig = toml::from_str(&config_str)?;
            Ok(config)
        } else {
            o_info!("📋 Creating default configuration at {}", config_path);
            let config = AutopilotConfig::default();
            config.save(config_path)?;
            o_info!("💡 Edit {} to assign ships and customize behavior", config_path);
            Ok(config)
        }
    }

    /// Save configuration to file
    pub fn save(&self, config_path: &str) -> Result<(), Box<dyn std::error::Error>> {
        if let Some(parent) = Path::new(config_path).parent() {
            fs::create_dir_all(parent)?;
        }

        let config_str = toml::to_string_pretty(self)?;
        fs::write(config_path, config_str)?;
        Ok(())
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<(), String> {
        if self.fleet.miners.is_empty() && self.fleet.haulers.is_empty() {
            return Err("no ships assigned - add symbols to [fleet] miners/haulers".to_string());
        }
        if self.timing.cycle_delay_ms == 0 {
            return Err("cycle_delay_ms must be greater than 0".to_string());
        }
        if self.hauling.fuel_threshold < 0 {
            return Err("fuel_threshold must not be negative".to_string());
        }
        if self.hauling.load_threshold <= 0 {
            return Err("load_threshold must be greater than 0".to_string());
        }
        Ok(())
    }

    /// Print configuration summary
    pub fn print_summary(&self) {
        o_info!("📋 Configuration Summary:");
        o_info!("   ⛏️  Miners: {:?} at {}", self.fleet.miners, self.mining.site);
        o_info!("   🚚 Haulers: {:?} selling at {}", self.fleet.haulers, self.hauling.marketplace);
        o_info!("   📦 Goods: {:?}", self.mining.allowed_goods);
        o_info!("   ⛽ Refuel below: {} units", self.hauling.fuel_threshold);
        o_info!("   ⏰ Cycle delay: {}ms", self.timing.cycle_delay_ms);
    }
}
