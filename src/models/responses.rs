use serde::Deserialize;

// API response wrappers

#[derive(Debug, Deserialize)]
pub struct ShipResponse {
    pub data: crate::models::Ship,
}

#[derive(Debug, Deserialize)]
pub struct PagedShipsResponse {
    pub data: Vec<crate::models::Ship>,
    pub meta: PageMeta,
}

#[derive(Debug, Deserialize, Clone, Copy)]
pub struct PageMeta {
    pub total: u32,
    pub page: u32,
    pub limit: u32,
}

#[derive(Debug, Deserialize)]
pub struct OrbitResponse {
    pub data: OrbitData,
}

#[derive(Debug, Deserialize)]
pub struct OrbitData {
    pub nav: crate::models::ShipNav,
}

#[derive(Debug, Deserialize)]
pub struct DockResponse {
    pub data: DockData,
}

#[derive(Debug, Deserialize)]
pub struct DockData {
    pub nav: crate::models::ShipNav,
}

#[derive(Debug, Deserialize)]
pub struct NavigationResponse {
    pub data: crate::models::NavigationData,
}

#[derive(Debug, Deserialize)]
pub struct ExtractionResponse {
    pub data: crate::models::ExtractionData,
}

#[derive(Debug, Deserialize)]
pub struct RefuelResponse {
    pub data: crate::models::RefuelData,
}

#[derive(Debug, Deserialize)]
pub struct JettisonResponse {
    pub data: crate::models::JettisonData,
}

#[derive(Debug, Deserialize)]
pub struct TransferResponse {
    pub data: crate::models::TransferCargoData,
}

#[derive(Debug, Deserialize)]
pub struct SellCargoResponse {
    pub data: crate::models::SellCargoData,
}
