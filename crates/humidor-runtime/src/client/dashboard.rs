use crate::config::Config;
use crate::ops::BrowseResult;
use crate::{Error, Result};
use humidor_engine::{Collection, NavigationRequest, Panel, PanelCache, PanelView, filter_cigars};
use humidor_index::Database;
use std::sync::Arc;

/// Dashboard over a snapshot of the collection.
///
/// Panels are built on first request and reused until the snapshot's
/// revision moves.
pub struct DashboardOps {
    db: Arc<Database>,
    config: Arc<Config>,
    collection: Collection,
    cache: PanelCache,
}

impl DashboardOps {
    pub fn load(db: Arc<Database>, config: Arc<Config>) -> Result<Self> {
        let collection = Self::snapshot(&db)?;
        Ok(Self {
            db,
            config,
            collection,
            cache: PanelCache::new(),
        })
    }

    fn snapshot(db: &Database) -> Result<Collection> {
        Ok(Collection::new(
            db.list_humidors()?,
            db.list_cigars()?,
            db.list_entries(None)?,
        ))
    }

    /// Re-read the store. Cached panels are dropped.
    pub fn refresh(&mut self) -> Result<()> {
        self.collection = Self::snapshot(&self.db)?;
        self.cache = PanelCache::new();
        Ok(())
    }

    pub fn collection(&self) -> &Collection {
        &self.collection
    }

    pub fn panel(&mut self, panel: Panel) -> &PanelView {
        self.cache.get_or_build(
            panel,
            &self.collection,
            &self.config.dashboard,
            &self.config.catalog(),
        )
    }

    /// The configured panels, in configured order.
    pub fn panels(&mut self) -> Vec<PanelView> {
        let panels = self.config.dashboard.panels.clone();
        panels
            .into_iter()
            .map(|panel| self.panel(panel).clone())
            .collect()
    }

    pub fn cached_panels(&self) -> usize {
        self.cache.len()
    }

    /// Follow a dashboard bucket to the cigars it counts.
    pub fn browse(&self, panel: Panel, label: &str) -> Result<BrowseResult> {
        let catalog = self.config.catalog();
        let request = NavigationRequest::from_bucket(panel, label, &catalog).ok_or_else(|| {
            Error::InvalidOperation(format!(
                "'{}' on the {} panel does not lead to a cigar list",
                label,
                panel.title()
            ))
        })?;

        let cigars: Vec<_> = filter_cigars(self.collection.cigars(), &request.filter, &catalog)
            .into_iter()
            .cloned()
            .collect();
        let total_quantity = cigars.iter().map(|c| u64::from(c.quantity)).sum();

        tracing::debug!(
            %panel,
            label,
            filter = %request.filter,
            matches = cigars.len(),
            "browse from dashboard"
        );

        Ok(BrowseResult {
            state: request.clone().into_filter_state(),
            request,
            cigars,
            total_quantity,
        })
    }
}
