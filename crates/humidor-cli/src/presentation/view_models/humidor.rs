use serde::Serialize;

use super::cigar::CigarRowViewModel;
use super::common::SaveAction;

/// A humidor with its stock level.
#[derive(Debug, Clone, Serialize)]
pub struct HumidorRowViewModel {
    pub id: String,
    pub id_short: String,
    pub name: String,
    pub quantity: u64,
    pub capacity: Option<u32>,
    /// Above 100 when overfilled.
    pub fill_percent: Option<f64>,
    pub temp: Option<f64>,
    pub humidity: Option<f64>,
    pub sensor_device_id: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct HumidorListViewModel {
    pub humidors: Vec<HumidorRowViewModel>,
    pub total_quantity: u64,
}

#[derive(Debug, Serialize)]
pub struct HumidorDetailViewModel {
    pub humidor: HumidorRowViewModel,
    pub size: Option<String>,
    pub cigars: Vec<CigarRowViewModel>,
}

#[derive(Debug, Serialize)]
pub struct HumidorSavedViewModel {
    pub action: SaveAction,
    pub id: String,
    pub name: String,
    pub size: Option<String>,
    pub capacity: Option<u32>,
    pub temp: Option<f64>,
    pub humidity: Option<f64>,
    pub sensor_device_id: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct HumidorRemovedViewModel {
    pub id: String,
    pub name: String,
    pub cigars_removed: usize,
}
