use crate::handlers::HandlerContext;
use crate::presentation::presenters;
use crate::types::PanelArg;
use anyhow::Result;
use humidor_engine::Panel;
use humidor_runtime::HumidorHub;

/// Without `--panel`, the configured panels in configured order.
pub fn handle(hub: &HumidorHub, panels: Vec<PanelArg>, ctx: &HandlerContext) -> Result<()> {
    let mut dashboard = hub.dashboard()?;

    let views = if panels.is_empty() {
        dashboard.panels()
    } else {
        panels
            .into_iter()
            .map(|panel| dashboard.panel(panel.into()).clone())
            .collect()
    };

    tracing::debug!(panels = views.len(), "dashboard built");
    ctx.render(presenters::present_dashboard(views))
}

pub fn browse(hub: &HumidorHub, panel: PanelArg, label: String, ctx: &HandlerContext) -> Result<()> {
    let panel: Panel = panel.into();
    let result = hub.dashboard()?.browse(panel, &label)?;
    ctx.render(presenters::present_browse(panel, label, result))
}
