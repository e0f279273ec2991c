use std::collections::HashMap;

use humidor_types::{Cigar, CigarId, Humidor, HumidorId, JournalEntry};

use crate::catalog::CountryCatalog;
use crate::dashboard::{self, DashboardSettings, Panel, PanelView};

/// The loaded collection and a revision counter bumped on every change.
///
/// Derived views are keyed on the revision, so anything computed from an
/// older revision is recomputed on next access.
#[derive(Debug, Clone, Default)]
pub struct Collection {
    humidors: Vec<Humidor>,
    cigars: Vec<Cigar>,
    entries: Vec<JournalEntry>,
    revision: u64,
}

impl Collection {
    pub fn new(humidors: Vec<Humidor>, cigars: Vec<Cigar>, entries: Vec<JournalEntry>) -> Self {
        Self {
            humidors,
            cigars,
            entries,
            revision: 0,
        }
    }

    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn humidors(&self) -> &[Humidor] {
        &self.humidors
    }

    pub fn cigars(&self) -> &[Cigar] {
        &self.cigars
    }

    pub fn entries(&self) -> &[JournalEntry] {
        &self.entries
    }

    pub fn cigar(&self, id: &CigarId) -> Option<&Cigar> {
        self.cigars.iter().find(|c| &c.id == id)
    }

    pub fn humidor(&self, id: &HumidorId) -> Option<&Humidor> {
        self.humidors.iter().find(|h| &h.id == id)
    }

    pub fn cigars_in(&self, humidor_id: &HumidorId) -> Vec<&Cigar> {
        self.cigars
            .iter()
            .filter(|c| &c.humidor_id == humidor_id)
            .collect()
    }

    pub fn upsert_humidor(&mut self, humidor: Humidor) {
        match self.humidors.iter_mut().find(|h| h.id == humidor.id) {
            Some(existing) => *existing = humidor,
            None => self.humidors.push(humidor),
        }
        self.revision += 1;
    }

    pub fn upsert_cigar(&mut self, cigar: Cigar) {
        match self.cigars.iter_mut().find(|c| c.id == cigar.id) {
            Some(existing) => *existing = cigar,
            None => self.cigars.push(cigar),
        }
        self.revision += 1;
    }

    pub fn upsert_entry(&mut self, entry: JournalEntry) {
        match self.entries.iter_mut().find(|e| e.id == entry.id) {
            Some(existing) => *existing = entry,
            None => self.entries.push(entry),
        }
        self.revision += 1;
    }

    pub fn remove_cigar(&mut self, id: &CigarId) -> Option<Cigar> {
        let index = self.cigars.iter().position(|c| &c.id == id)?;
        self.revision += 1;
        Some(self.cigars.remove(index))
    }

    /// Removes the humidor together with the cigars stored in it.
    pub fn remove_humidor(&mut self, id: &HumidorId) -> Option<Humidor> {
        let index = self.humidors.iter().position(|h| &h.id == id)?;
        self.cigars.retain(|c| &c.humidor_id != id);
        self.revision += 1;
        Some(self.humidors.remove(index))
    }
}

/// Panel views computed for one collection revision.
#[derive(Debug, Default)]
pub struct PanelCache {
    revision: Option<u64>,
    views: HashMap<Panel, PanelView>,
}

impl PanelCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get_or_build(
        &mut self,
        panel: Panel,
        collection: &Collection,
        settings: &DashboardSettings,
        catalog: &CountryCatalog,
    ) -> &PanelView {
        if self.revision != Some(collection.revision()) {
            self.views.clear();
            self.revision = Some(collection.revision());
        }

        self.views.entry(panel).or_insert_with(|| {
            dashboard::build(
                panel,
                collection.cigars(),
                collection.humidors(),
                collection.entries(),
                settings,
                catalog,
            )
        })
    }

    pub fn len(&self) -> usize {
        self.views.len()
    }

    pub fn is_empty(&self) -> bool {
        self.views.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cigar(id: &str, humidor: &str, quantity: u32) -> Cigar {
        let mut cigar = Cigar::new(CigarId::new(id), HumidorId::new(humidor));
        cigar.brand = Some("Padron".to_string());
        cigar.quantity = quantity;
        cigar
    }

    #[test]
    fn test_mutations_bump_revision() {
        let mut collection = Collection::default();
        assert_eq!(collection.revision(), 0);

        collection.upsert_humidor(Humidor::new(HumidorId::new("h1"), "Desktop"));
        collection.upsert_cigar(cigar("c1", "h1", 3));
        collection.upsert_cigar(cigar("c1", "h1", 5));
        assert_eq!(collection.revision(), 3);
        assert_eq!(collection.cigars().len(), 1);
        assert_eq!(collection.cigars()[0].quantity, 5);

        assert!(collection.remove_cigar(&CigarId::new("missing")).is_none());
        assert_eq!(collection.revision(), 3);
    }

    #[test]
    fn test_remove_humidor_takes_its_cigars() {
        let mut collection = Collection::new(
            vec![
                Humidor::new(HumidorId::new("h1"), "Desktop"),
                Humidor::new(HumidorId::new("h2"), "Cabinet"),
            ],
            vec![cigar("c1", "h1", 1), cigar("c2", "h2", 1)],
            vec![],
        );

        collection.remove_humidor(&HumidorId::new("h1"));
        assert_eq!(collection.humidors().len(), 1);
        assert_eq!(collection.cigars_in(&HumidorId::new("h2")).len(), 1);
        assert!(collection.cigar(&CigarId::new("c1")).is_none());
    }

    #[test]
    fn test_panel_cache_invalidates_on_revision() {
        let mut collection = Collection::new(vec![], vec![cigar("c1", "h1", 3)], vec![]);
        let settings = DashboardSettings::default();
        let catalog = CountryCatalog::default();
        let mut cache = PanelCache::new();

        let first = cache
            .get_or_build(Panel::TopBrands, &collection, &settings, &catalog)
            .clone();
        assert_eq!(first.buckets()[0].quantity, 3);
        cache.get_or_build(Panel::Wrappers, &collection, &settings, &catalog);
        assert_eq!(cache.len(), 2);

        collection.upsert_cigar(cigar("c2", "h1", 4));
        let second = cache.get_or_build(Panel::TopBrands, &collection, &settings, &catalog);
        assert_eq!(second.buckets()[0].quantity, 7);
        assert_eq!(cache.len(), 1);
    }
}
