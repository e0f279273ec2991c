use crate::client::HumidorOps;
use crate::config::Config;
use crate::ops::{CigarDetail, CigarService, QuantityChange, SavedCigar};
use crate::{Error, Result};
use humidor_engine::{ActiveFilter, CigarDraft, PuroNotice, filter_cigars};
use humidor_index::Database;
use humidor_types::{Cigar, CigarAttribute, CigarId, Strength};
use std::sync::Arc;

/// Field changes for a cigar. `None` leaves a field alone; an empty string
/// clears a text field.
#[derive(Debug, Clone, Default)]
pub struct CigarFields {
    pub brand: Option<String>,
    pub name: Option<String>,
    pub shape: Option<String>,
    pub size: Option<String>,
    pub wrapper: Option<String>,
    pub binder: Option<String>,
    pub filler: Option<String>,
    pub country: Option<String>,
    pub strength: Option<String>,
    pub flavor_notes: Option<Vec<String>>,
    pub quantity: Option<u32>,
    pub price: Option<f64>,
    /// Manual puro flag, applied after the origin fields.
    pub puro: Option<bool>,
}

impl CigarFields {
    fn apply(self, draft: &mut CigarDraft) -> Result<Option<PuroNotice>> {
        let mut notice = None;

        let text = [
            (CigarAttribute::Brand, self.brand),
            (CigarAttribute::Name, self.name),
            (CigarAttribute::Shape, self.shape),
            (CigarAttribute::Size, self.size),
            (CigarAttribute::Country, self.country),
            (CigarAttribute::Wrapper, self.wrapper),
            (CigarAttribute::Binder, self.binder),
            (CigarAttribute::Filler, self.filler),
        ];
        for (attribute, value) in text {
            if let Some(value) = value
                && let Some(raised) = draft.set(attribute, Some(&value))
            {
                notice = Some(raised);
            }
        }

        if let Some(strength) = self.strength {
            let parsed = match strength.trim() {
                "" => None,
                label => Some(label.parse::<Strength>()?),
            };
            draft.set_strength(parsed);
        }
        if let Some(notes) = self.flavor_notes {
            draft.set_flavor_notes(notes);
        }
        if let Some(quantity) = self.quantity {
            draft.set_quantity(quantity);
        }
        if let Some(price) = self.price {
            draft.set_price(price);
        }
        if let Some(is_puro) = self.puro {
            draft.set_puro_override(is_puro);
        }

        // A later origin edit can undo the puro an earlier one announced
        Ok(notice.filter(|_| draft.verdict().is_puro))
    }
}

pub struct CigarOps {
    db: Arc<Database>,
    config: Arc<Config>,
}

impl CigarOps {
    pub fn new(db: Arc<Database>, config: Arc<Config>) -> Self {
        Self { db, config }
    }

    pub fn add(&self, humidor: &str, fields: CigarFields) -> Result<SavedCigar> {
        let humidor = self.humidors().resolve(humidor)?;
        let mut draft = CigarDraft::new(CigarId::generate(), humidor.id);
        let notice = fields.apply(&mut draft)?;

        if draft.cigar().brand.is_none() && draft.cigar().name.is_none() {
            return Err(Error::InvalidOperation(
                "a cigar needs at least a brand or a name".to_string(),
            ));
        }

        CigarService::new(&self.db).save(draft, notice)
    }

    /// Apply field changes to a stored cigar. `move_to` names a humidor to
    /// move the cigar into.
    pub fn edit(&self, key: &str, fields: CigarFields, move_to: Option<&str>) -> Result<SavedCigar> {
        let cigar = self.resolve(key)?;
        let mut draft = CigarDraft::from_cigar(cigar);
        let notice = fields.apply(&mut draft)?;

        if let Some(target) = move_to {
            draft.set_humidor(self.humidors().resolve(target)?.id);
        }

        CigarService::new(&self.db).save(draft, notice)
    }

    /// Add (positive) or take (negative) cigars; stock never drops below 0.
    pub fn adjust(&self, key: &str, delta: i64) -> Result<QuantityChange> {
        let cigar = self.resolve(key)?;
        CigarService::new(&self.db).adjust(&cigar.id, delta)
    }

    pub fn remove(&self, key: &str) -> Result<Cigar> {
        let cigar = self.resolve(key)?;
        self.db.delete_cigar(&cigar.id)?;
        tracing::info!(cigar = %cigar.id, "cigar removed");
        Ok(cigar)
    }

    pub fn show(&self, key: &str) -> Result<CigarDetail> {
        let cigar = self.resolve(key)?;
        CigarService::new(&self.db).detail(&cigar.id)
    }

    /// Cigars matching the filter, optionally limited to one humidor.
    pub fn list(&self, filter: &ActiveFilter, humidor: Option<&str>) -> Result<Vec<Cigar>> {
        let cigars = match humidor {
            Some(key) => {
                let humidor = self.humidors().resolve(key)?;
                self.db.list_cigars_in(&humidor.id)?
            }
            None => self.db.list_cigars()?,
        };

        let catalog = self.config.catalog();
        Ok(filter_cigars(&cigars, filter, &catalog)
            .into_iter()
            .cloned()
            .collect())
    }

    pub fn resolve(&self, key: &str) -> Result<Cigar> {
        let id = self
            .db
            .find_cigar_by_prefix(key)?
            .ok_or_else(|| Error::NotFound(format!("cigar '{}'", key)))?;
        self.db
            .get_cigar(&id)?
            .ok_or_else(|| Error::NotFound(format!("cigar '{}'", key)))
    }

    fn humidors(&self) -> HumidorOps {
        HumidorOps::new(self.db.clone())
    }
}
