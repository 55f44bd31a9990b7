use metrics_exporter_prometheus::PrometheusHandle;
use serde::de::DeserializeOwned;
use std::fs;
use std::path::Path;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;
use ultracertify::certification::{BuildingType, Standard};
use ultracertify::error::AppError;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

pub(crate) fn parse_standard(raw: &str) -> Result<Standard, String> {
    raw.parse::<Standard>().map_err(|err| err.to_string())
}

pub(crate) fn parse_building_type(raw: &str) -> Result<BuildingType, String> {
    raw.parse::<BuildingType>().map_err(|err| err.to_string())
}

pub(crate) fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T, AppError> {
    let raw = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&raw)?)
}
