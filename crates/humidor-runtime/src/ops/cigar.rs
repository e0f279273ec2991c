use crate::{Error, Result};
use humidor_engine::{CigarDraft, FilterState, NavigationRequest, PuroNotice, PuroVerdict, detect_puro_for};
use humidor_index::Database;
use humidor_types::{Cigar, CigarId, JournalEntry};
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct SavedCigar {
    pub cigar: Cigar,
    pub verdict: PuroVerdict,
    pub manual_override: bool,
    /// Set when this save turned the cigar into a puro.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub puro_notice: Option<PuroNotice>,
}

#[derive(Debug, Clone, Serialize)]
pub struct QuantityChange {
    pub cigar_id: CigarId,
    pub previous: u32,
    pub current: u32,
}

impl QuantityChange {
    pub fn delta(&self) -> i64 {
        i64::from(self.current) - i64::from(self.previous)
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct CigarDetail {
    pub cigar: Cigar,
    pub humidor_name: Option<String>,
    pub verdict: PuroVerdict,
    pub entries: Vec<JournalEntry>,
}

/// Cigars listed for a dashboard bucket.
#[derive(Debug, Clone, Serialize)]
pub struct BrowseResult {
    pub request: NavigationRequest,
    pub state: FilterState,
    pub cigars: Vec<Cigar>,
    pub total_quantity: u64,
}

pub struct CigarService<'a> {
    db: &'a Database,
}

impl<'a> CigarService<'a> {
    pub fn new(db: &'a Database) -> Self {
        Self { db }
    }

    pub fn save(&self, draft: CigarDraft, puro_notice: Option<PuroNotice>) -> Result<SavedCigar> {
        let verdict = draft.verdict();
        let manual_override = draft.has_manual_override();
        let cigar = draft.finish();

        if self.db.get_humidor(&cigar.humidor_id)?.is_none() {
            return Err(Error::NotFound(format!("humidor {}", cigar.humidor_id)));
        }

        self.db.insert_or_update_cigar(&cigar)?;
        tracing::info!(cigar = %cigar.id, is_puro = cigar.is_puro, "cigar saved");

        // A notice is only meaningful when the saved flag agrees with it
        let puro_notice = puro_notice.filter(|_| cigar.is_puro);

        Ok(SavedCigar {
            cigar,
            verdict,
            manual_override,
            puro_notice,
        })
    }

    pub fn adjust(&self, id: &CigarId, delta: i64) -> Result<QuantityChange> {
        let previous = self
            .db
            .get_cigar(id)?
            .ok_or_else(|| Error::NotFound(format!("cigar {}", id)))?
            .quantity;
        let current = self
            .db
            .adjust_quantity(id, delta)?
            .ok_or_else(|| Error::NotFound(format!("cigar {}", id)))?;

        tracing::debug!(cigar = %id, previous, current, "quantity adjusted");

        Ok(QuantityChange {
            cigar_id: id.clone(),
            previous,
            current,
        })
    }

    pub fn detail(&self, id: &CigarId) -> Result<CigarDetail> {
        let cigar = self
            .db
            .get_cigar(id)?
            .ok_or_else(|| Error::NotFound(format!("cigar {}", id)))?;
        let humidor_name = self.db.get_humidor(&cigar.humidor_id)?.map(|h| h.name);
        let entries = self.db.list_entries_for_cigar(id)?;

        Ok(CigarDetail {
            verdict: detect_puro_for(&cigar),
            cigar,
            humidor_name,
            entries,
        })
    }
}
