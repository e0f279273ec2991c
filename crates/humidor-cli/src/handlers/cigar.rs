use crate::args::{CigarCommand, CigarFilterArgs};
use crate::handlers::HandlerContext;
use crate::presentation::presenters;
use crate::presentation::view_models::SaveAction;
use anyhow::{Context, Result};
use humidor_engine::{ActiveFilter, CountryFilter, FilterState, StrengthFilter};
use humidor_runtime::HumidorHub;

pub fn handle(hub: &HumidorHub, command: CigarCommand, ctx: &HandlerContext) -> Result<()> {
    let cigars = hub.cigars();

    match command {
        CigarCommand::Add { humidor, fields } => {
            let saved = cigars.add(&humidor, fields.into())?;
            ctx.render(presenters::present_cigar_saved(saved, SaveAction::Created))
        }
        CigarCommand::Edit {
            cigar,
            move_to,
            fields,
        } => {
            let saved = cigars.edit(&cigar, fields.into(), move_to.as_deref())?;
            ctx.render(presenters::present_cigar_saved(saved, SaveAction::Updated))
        }
        CigarCommand::List { humidor, filter } => {
            let filter = build_filter(filter)?;
            let found = cigars.list(&filter, humidor.as_deref())?;
            let humidor_name = match humidor {
                Some(key) => Some(hub.humidors().resolve(&key)?.name),
                None => None,
            };
            ctx.render(presenters::present_cigar_list(
                FilterState::local(filter),
                humidor_name,
                found,
            ))
        }
        CigarCommand::Show { cigar } => {
            ctx.render(presenters::present_cigar_detail(cigars.show(&cigar)?))
        }
        CigarCommand::Adjust { cigar, delta } => {
            let target = cigars.resolve(&cigar)?;
            let change = cigars.adjust(target.id.as_str(), delta)?;
            ctx.render(presenters::present_quantity(change, target.display_name()))
        }
        CigarCommand::Remove { cigar } => {
            ctx.render(presenters::present_cigar_removed(cigars.remove(&cigar)?))
        }
    }
}

/// At most one flag is set; clap rejects combinations.
fn build_filter(args: CigarFilterArgs) -> Result<ActiveFilter> {
    if let Some(query) = args.search {
        return Ok(ActiveFilter::search(&query));
    }
    if let Some(brand) = args.brand {
        return Ok(ActiveFilter::brand(&brand));
    }
    if let Some(wrapper) = args.wrapper {
        return Ok(ActiveFilter::wrapper(&wrapper));
    }
    if let Some(strength) = args.strength {
        let parsed: StrengthFilter = strength
            .parse()
            .with_context(|| format!("Invalid --strength '{}'", strength))?;
        return Ok(ActiveFilter::Strength(parsed));
    }
    if let Some(country) = args.country {
        return Ok(ActiveFilter::Country(CountryFilter::parse(&country)));
    }
    Ok(ActiveFilter::None)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_filter_picks_the_given_flag() {
        let filter = build_filter(CigarFilterArgs {
            country: Some("Other".to_string()),
            ..Default::default()
        })
        .unwrap();
        assert_eq!(filter, ActiveFilter::Country(CountryFilter::Other));

        let filter = build_filter(CigarFilterArgs {
            search: Some("   ".to_string()),
            ..Default::default()
        })
        .unwrap();
        assert_eq!(filter, ActiveFilter::None);
    }

    #[test]
    fn test_build_filter_rejects_unknown_strength() {
        let result = build_filter(CigarFilterArgs {
            strength: Some("extra hot".to_string()),
            ..Default::default()
        });
        assert!(result.is_err());
    }
}
