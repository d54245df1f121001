use serde::Deserialize;

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct Ship {
    pub symbol: String,
    pub nav: ShipNav,
    pub cooldown: ShipCooldown,
    pub mounts: Vec<ShipMount>,
    pub cargo: ShipCargo,
    pub fuel: ShipFuel,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct ShipNav {
    #[serde(rename = "systemSymbol")]
    pub system_symbol: String,
    #[serde(rename = "waypointSymbol")]
    pub waypoint_symbol: String,
    pub route: ShipRoute,
    pub status: String,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct ShipRoute {
    pub arrival: String,
}

impl ShipRoute {
    /// Time until the route's arrival timestamp, or `None` when the arrival
    /// is unparseable or already in the past.
    pub fn arrival_delay(&self) -> Option<std::time::Duration> {
        let arrival = chrono::DateTime::parse_from_rfc3339(&self.arrival).ok()?;
        (arrival.with_timezone(&chrono::Utc) - chrono::Utc::now())
            .to_std()
            .ok()
            .filter(|delay| !delay.is_zero())
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct ShipCooldown {
    #[serde(rename = "totalSeconds")]
    pub total_seconds: i32,
    #[serde(rename = "remainingSeconds")]
    pub remaining_seconds: i32,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct ShipCargo {
    pub capacity: i32,
    pub units: i32,
    pub inventory: Vec<CargoItem>,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct CargoItem {
    pub symbol: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub units: i32,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct ShipFuel {
    pub current: i32,
    pub capacity: i32,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct ShipMount {
    pub symbol: String,
    pub strength: Option<i32>,
}

impl Ship {
    /// Any mining laser or extractor mount counts as mining-capable.
    pub fn has_mining_mount(&self) -> bool {
        self.mounts.iter().any(|mount| {
            mount.symbol.contains("MINING") || mount.symbol.contains("EXTRACTOR")
        })
    }
}

// Navigation-related structures
#[derive(Debug, Deserialize, Clone)]
pub struct NavigationData {
    pub fuel: ShipFuel,
    pub nav: ShipNav,
}
