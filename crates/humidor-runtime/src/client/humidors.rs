use crate::ops::{HumidorDetail, HumidorService, RemovedHumidor};
use crate::{Error, Result};
use humidor_engine::HumidorFill;
use humidor_index::Database;
use humidor_types::{Humidor, HumidorId, non_empty};
use std::sync::Arc;

/// Field changes for a humidor. `None` leaves a field alone; an empty
/// string clears a text field.
#[derive(Debug, Clone, Default)]
pub struct HumidorFields {
    pub name: Option<String>,
    pub size: Option<String>,
    pub temp: Option<f64>,
    pub humidity: Option<f64>,
    pub sensor_device_id: Option<String>,
}

impl HumidorFields {
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..Default::default()
        }
    }

    fn apply(self, humidor: &mut Humidor) -> Result<()> {
        if let Some(name) = self.name {
            humidor.name = non_empty(&name)
                .ok_or_else(|| Error::InvalidOperation("humidor name cannot be empty".to_string()))?;
        }
        if let Some(size) = self.size {
            humidor.size = non_empty(&size);
        }
        if let Some(temp) = self.temp {
            humidor.temp = Some(temp);
        }
        if let Some(humidity) = self.humidity {
            if !(0.0..=100.0).contains(&humidity) {
                return Err(Error::InvalidOperation(format!(
                    "humidity must be between 0 and 100, got {}",
                    humidity
                )));
            }
            humidor.humidity = Some(humidity);
        }
        if let Some(device) = self.sensor_device_id {
            humidor.sensor_device_id = non_empty(&device);
        }
        Ok(())
    }
}

pub struct HumidorOps {
    db: Arc<Database>,
}

impl HumidorOps {
    pub fn new(db: Arc<Database>) -> Self {
        Self { db }
    }

    pub fn add(&self, fields: HumidorFields) -> Result<Humidor> {
        let mut humidor = Humidor::new(HumidorId::generate(), String::new());
        if fields.name.is_none() {
            return Err(Error::InvalidOperation("a humidor needs a name".to_string()));
        }
        fields.apply(&mut humidor)?;

        self.db.insert_or_update_humidor(&humidor)?;
        tracing::info!(humidor = %humidor.id, name = %humidor.name, "humidor added");
        Ok(humidor)
    }

    pub fn update(&self, key: &str, fields: HumidorFields) -> Result<Humidor> {
        let mut humidor = self.resolve(key)?;
        fields.apply(&mut humidor)?;
        self.db.insert_or_update_humidor(&humidor)?;
        Ok(humidor)
    }

    /// Every humidor with its stock and fill level.
    pub fn list(&self) -> Result<Vec<HumidorFill>> {
        HumidorService::new(&self.db).list_with_fill()
    }

    pub fn show(&self, key: &str) -> Result<HumidorDetail> {
        let humidor = self.resolve(key)?;
        HumidorService::new(&self.db).detail(humidor)
    }

    pub fn remove(&self, key: &str, force: bool) -> Result<RemovedHumidor> {
        let humidor = self.resolve(key)?;
        HumidorService::new(&self.db).remove(humidor, force)
    }

    /// Look a humidor up by id prefix, then by exact name (case-insensitive).
    pub fn resolve(&self, key: &str) -> Result<Humidor> {
        if let Some(id) = self.db.find_humidor_by_prefix(key)?
            && let Some(humidor) = self.db.get_humidor(&id)?
        {
            return Ok(humidor);
        }

        let mut named: Vec<Humidor> = self
            .db
            .list_humidors()?
            .into_iter()
            .filter(|h| h.name.eq_ignore_ascii_case(key.trim()))
            .collect();

        match named.len() {
            0 => Err(Error::NotFound(format!("humidor '{}'", key))),
            1 => Ok(named.remove(0)),
            n => Err(Error::InvalidOperation(format!(
                "{} humidors are named '{}'; use the id instead",
                n, key
            ))),
        }
    }
}
