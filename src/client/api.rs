use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION, CONTENT_TYPE};
use crate::models::*;
use crate::API_BASE_URL;

#[derive(Clone)]
pub struct SpaceTradersClient {
    client: reqwest::Client,
    pub token: String,
}

impl SpaceTradersClient {
    pub fn new(token: String) -> Self {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert(
            AUTHORIZATION,
            HeaderValue::from_str(&format!("Bearer {}", token)).unwrap(),
        );

        let client = reqwest::Client::builder()
            .default_headers(headers)
            .build()
            .unwrap();

        SpaceTradersClient { client, token }
    }

    // Ship operations
    pub async fn list_ships(&self, page: u32, limit: u32) -> Result<(Vec<Ship>, PageMeta), Box<dyn std::error::Error>> {
        let url = format!("{}/my/ships?page={}&limit={}", API_BASE_URL, page, limit);
        let response = self.client.get(&url).send().await?;

        if !response.status().is_success() {
            let status = response.status();
            let error_body = response.text().await.unwrap_or_else(|_| "Could not read error response".to_string());
            return Err(format!("List ships failed with status {}: {}", status, error_body).into());
        }

        let ships_response: PagedShipsResponse = response.json().await?;
        Ok((ships_response.data, ships_response.meta))
    }

    pub async fn get_ship(&self, ship_symbol: &str) -> Result<Ship, Box<dyn std::error::Error>> {
        let url = format!("{}/my/ships/{}", API_BASE_URL, ship_symbol);
        let response = self.client.get(&url).send().await?;

        if !response.status().is_success() {
            let status = response.status();
            let error_body = response.text().await.unwrap_or_else(|_| "Could not read error response".to_string());
            return Err(format!("Get ship failed with status {}: {}", status, error_body).into());
        }

        let ship_response: ShipResponse = response.json().await?;
        Ok(ship_response.data)
    }

    pub async fn orbit_ship(&self, ship_symbol: &str) -> Result<ShipNav, Box<dyn std::error::Error>> {
        let url = format!("{}/my/ships/{}/orbit", API_BASE_URL, ship_symbol);
        let response = self.client.post(&url).json(&serde_json::json!({})).send().await?;

        if !response.status().is_success() {
            let status = response.status();
            let error_body = response.text().await.unwrap_or_else(|_| "Could not read error response".to_string());
            return Err(format!("Orbit failed with status {}: {}", status, error_body).into());
        }

        let orbit_response: OrbitResponse = response.json().await?;
        Ok(orbit_response.data.nav)
    }

    pub async fn dock_ship(&self, ship_symbol: &str) -> Result<ShipNav, Box<dyn std::error::Error>> {
        let url = format!("{}/my/ships/{}/dock", API_BASE_URL, ship_symbol);
        let response = self.client.post(&url).json(&serde_json::json!({})).send().await?;

        if !response.status().is_success() {
            let status = response.status();
            let error_body = response.text().await.unwrap_or_else(|_| "Could not read error response".to_string());
            return Err(format!("Dock failed with status {}: {}", status, error_body).into());
        }

        let dock_response: DockResponse = response.json().await?;
        Ok(dock_response.data.nav)
    }

    pub async fn navigate_ship(&self, ship_symbol: &str, waypoint_symbol: &str) -> Result<NavigationData, Box<dyn std::error::Error>> {
        let url = format!("{}/my/ships/{}/navigate", API_BASE_URL, ship_symbol);
        let payload = serde_json::json!({
            "waypointSymbol": waypoint_symbol
        });
        let response = self.client.post(&url).json(&payload).send().await?;

        if !response.status().is_success() {
            let status = response.status();
            let error_body = response.text().await.unwrap_or_else(|_| "Could not read error response".to_string());
            return Err(format!("Navigation failed with status {}: {}", status, error_body).into());
        }

        let nav_response: NavigationResponse = response.json().await?;
        Ok(nav_response.data)
    }

    // Mining operations
    pub async fn extract_resources(&self, ship_symbol: &str) -> Result<ExtractionData, Box<dyn std::error::Error>> {
        let url = format!("{}/my/ships/{}/extract", API_BASE_URL, ship_symbol);
        let response = self.client.post(&url).json(&serde_json::json!({})).send().await?;

        if !response.status().is_success() {
            let status = response.status();
            let error_body = response.text().await.unwrap_or_else(|_| "Could not read error response".to_string());
            return Err(format!("Extraction failed with status {}: {}", status, error_body).into());
        }

        let extraction_response: ExtractionResponse = response.json().await?;
        Ok(extraction_response.data)
    }

    // Refueling operations
    pub async fn refuel_ship(&self, ship_symbol: &str) -> Result<RefuelData, Box<dyn std::error::Error>> {
        let url = format!("{}/my/ships/{}/refuel", API_BASE_URL, ship_symbol);
        let response = self.client.post(&url).json(&serde_json::json!({})).send().await?;

        if !response.status().is_success() {
            let status = response.status();
            let error_body = response.text().await.unwrap_or_else(|_| "Could not read error response".to_string());
            return Err(format!("Refuel failed with status {}: {}", status, error_body).into());
        }

        let refuel_response: RefuelResponse = response.json().await?;
        Ok(refuel_response.data)
    }

    // Cargo operations
    pub async fn jettison_cargo(&self, ship_symbol: &str, trade_symbol: &str, units: i32) -> Result<ShipCargo, Box<dyn std::error::Error>> {
        let url = format!("{}/my/ships/{}/jettison", API_BASE_URL, ship_symbol);
        let payload = serde_json::json!({
            "symbol": trade_symbol,
            "units": units
        });
        let response = self.client.post(&url).json(&payload).send().await?;

        if !response.status().is_success() {
            let status = response.status();
            let error_body = response.text().await.unwrap_or_else(|_| "Could not read error response".to_string());
            return Err(format!("Jettison failed with status {}: {}", status, error_body).into());
        }

        let jettison_response: JettisonResponse = response.json().await?;
        Ok(jettison_response.data.cargo)
    }

    pub async fn transfer_cargo(&self, from_symbol: &str, trade_symbol: &str, units: i32, to_symbol: &str) -> Result<TransferCargoData, Box<dyn std::error::Error>> {
        let url = format!("{}/my/ships/{}/transfer", API_BASE_URL, from_symbol);
        let payload = serde_json::json!({
            "tradeSymbol": trade_symbol,
            "units": units,
            "shipSymbol": to_symbol
        });
        let response = self.client.post(&url).json(&payload).send().await?;

        if !response.status().is_success() {
            let status = response.status();
            let error_body = response.text().await.unwrap_or_else(|_| "Could not read error response".to_string());
            return Err(format!("Cargo transfer failed with status {}: {}", status, error_body).into());
        }

        let transfer_response: TransferResponse = response.json().await?;
        Ok(transfer_response.data)
    }

    // Trading operations
    pub async fn sell_cargo(&self, ship_symbol: &str, trade_symbol: &str, units: i32) -> Result<SellCargoData, Box<dyn std::error::Error>> {
        let url = format!("{}/my/ships/{}/sell", API_BASE_URL, ship_symbol);
        let payload = serde_json::json!({
            "symbol": trade_symbol,
            "units": units
        });
        let response = self.client.post(&url).json(&payload).send().await?;

        if !response.status().is_success() {
            let status = response.status();
            let error_body = response.text().await.unwrap_or_else(|_| "Could not read error response".to_string());
            return Err(format!("Cargo sell failed with status {}: {}", status, error_body).into());
        }

        let sell_response: SellCargoResponse = response.json().await?;
        Ok(sell_response.data)
    }
}
