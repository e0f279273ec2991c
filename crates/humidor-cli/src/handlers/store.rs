use crate::args::StoreCommand;
use crate::handlers::HandlerContext;
use crate::presentation::presenters;
use anyhow::Result;
use humidor_runtime::{DATABASE_FILE, HumidorHub};

pub fn handle(hub: &HumidorHub, command: StoreCommand, ctx: &HandlerContext) -> Result<()> {
    let vacuumed = match command {
        StoreCommand::Stats => false,
        StoreCommand::Vacuum => {
            hub.database().vacuum()?;
            true
        }
    };

    let db_path = hub.data_dir().join(DATABASE_FILE);
    let stats = hub.stats()?;
    ctx.render(presenters::present_store(stats, hub.data_dir(), &db_path, vacuumed))
}
