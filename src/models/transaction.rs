use serde::Deserialize;

// Mining structures
#[derive(Debug, Deserialize)]
pub struct ExtractionData {
    pub cooldown: crate::models::ShipCooldown,
    pub extraction: ExtractionResult,
    pub cargo: crate::models::ShipCargo,
}

#[derive(Debug, Deserialize)]
pub struct ExtractionResult {
    #[serde(rename = "shipSymbol")]
    pub ship_symbol: String,
    #[serde(rename = "yield")]
    pub extraction_yield: ExtractionYield,
}

#[derive(Debug, Deserialize)]
pub struct ExtractionYield {
    pub symbol: String,
    pub units: i32,
}

// Trading structures
#[derive(Debug, Deserialize)]
pub struct SellCargoData {
    pub cargo: crate::models::ShipCargo,
    pub transaction: SellTransaction,
}

#[derive(Debug, Deserialize)]
pub struct SellTransaction {
    #[serde(rename = "waypointSymbol")]
    pub waypoint_symbol: String,
    #[serde(rename = "shipSymbol")]
    pub ship_symbol: String,
    #[serde(rename = "tradeSymbol")]
    pub trade_symbol: String,
    pub units: i32,
    #[serde(rename = "pricePerUnit")]
    pub price_per_unit: i32,
    #[serde(rename = "totalPrice")]
    pub total_price: i32,
}

// Refueling structures
#[derive(Debug, Deserialize)]
pub struct RefuelData {
    pub fuel: crate::models::ShipFuel,
    pub transaction: RefuelTransaction,
}

#[derive(Debug, Deserialize)]
pub struct RefuelTransaction {
    #[serde(rename = "shipSymbol")]
    pub ship_symbol: String,
    #[serde(rename = "totalPrice")]
    pub total_price: i32,
    pub units: i32,
}

// Cargo movement structures
#[derive(Debug, Deserialize)]
pub struct JettisonData {
    pub cargo: crate::models::ShipCargo,
}

/// Transfer responses only carry the sending ship's cargo. The receiving
/// side has to be derived locally from the transferred quantity.
#[derive(Debug, Deserialize)]
pub struct TransferCargoData {
    pub cargo: crate::models::ShipCargo,
}
