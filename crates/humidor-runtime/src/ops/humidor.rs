use crate::{Error, Result};
use humidor_engine::{HumidorFill, dashboard};
use humidor_index::Database;
use humidor_types::{Cigar, Humidor};
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct HumidorDetail {
    pub humidor: Humidor,
    pub fill: HumidorFill,
    pub cigars: Vec<Cigar>,
}

#[derive(Debug, Clone, Serialize)]
pub struct RemovedHumidor {
    pub humidor: Humidor,
    pub cigars_removed: usize,
}

pub struct HumidorService<'a> {
    db: &'a Database,
}

impl<'a> HumidorService<'a> {
    pub fn new(db: &'a Database) -> Self {
        Self { db }
    }

    pub fn list_with_fill(&self) -> Result<Vec<HumidorFill>> {
        let humidors = self.db.list_humidors()?;
        let cigars = self.db.list_cigars()?;
        Ok(dashboard::humidor_fill(&cigars, &humidors))
    }

    pub fn detail(&self, humidor: Humidor) -> Result<HumidorDetail> {
        let cigars = self.db.list_cigars_in(&humidor.id)?;
        let fill = dashboard::humidor_fill(&cigars, std::slice::from_ref(&humidor))
            .into_iter()
            .next()
            .ok_or_else(|| Error::NotFound(format!("humidor {}", humidor.id)))?;

        Ok(HumidorDetail {
            humidor,
            fill,
            cigars,
        })
    }

    /// Delete a humidor. Without `force` an occupied humidor is refused;
    /// with it, the cigars inside go too.
    pub fn remove(&self, humidor: Humidor, force: bool) -> Result<RemovedHumidor> {
        let occupied = self.db.list_cigars_in(&humidor.id)?.len();
        if occupied > 0 && !force {
            return Err(Error::InvalidOperation(format!(
                "humidor '{}' still holds {} cigar record(s); pass --force to remove them too",
                humidor.name, occupied
            )));
        }

        let cigars_removed = if force {
            self.db.delete_humidor_cascade(&humidor.id)?
        } else {
            self.db.delete_humidor(&humidor.id)?.then_some(0)
        }
        .ok_or_else(|| Error::NotFound(format!("humidor {}", humidor.id)))?;

        tracing::info!(
            humidor = %humidor.id,
            cigars_removed,
            "humidor removed"
        );

        Ok(RemovedHumidor {
            humidor,
            cigars_removed,
        })
    }
}
