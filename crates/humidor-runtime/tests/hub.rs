use humidor_engine::{ActiveFilter, CountryFilter, OTHER_COUNTRIES_LABEL, Panel, StrengthFilter};
use humidor_runtime::{
    CigarFields, Config, Error, ExportFormat, HumidorFields, HumidorHub, ImportOptions, NewEntry,
    Result,
};
use humidor_types::{CollectionKind, Strength};
use tempfile::TempDir;

fn fields(brand: &str, name: &str, country: &str, quantity: u32) -> CigarFields {
    CigarFields {
        brand: Some(brand.to_string()),
        name: Some(name.to_string()),
        country: Some(country.to_string()),
        quantity: Some(quantity),
        ..Default::default()
    }
}

fn stocked_hub() -> Result<HumidorHub> {
    let hub = HumidorHub::open_in_memory(Config::default())?;
    hub.humidors().add(HumidorFields {
        size: Some("Desktop (100 count)".to_string()),
        ..HumidorFields::named("Desktop")
    })?;
    hub.humidors().add(HumidorFields::named("Cabinet"))?;

    let cigars = hub.cigars();
    cigars.add(
        "desktop",
        CigarFields {
            wrapper: Some("Nicaraguan Maduro".to_string()),
            binder: Some("Nicaraguan".to_string()),
            filler: Some("Nicaraguan".to_string()),
            strength: Some("Medium-Full".to_string()),
            price: Some(18.5),
            ..fields("Padron", "1964 Anniversary", "Nicaragua", 10)
        },
    )?;
    cigars.add(
        "desktop",
        CigarFields {
            wrapper: Some("Connecticut".to_string()),
            strength: Some("Mild".to_string()),
            ..fields("Davidoff", "Signature 2000", "Dominican Republic", 6)
        },
    )?;
    cigars.add(
        "cabinet",
        CigarFields {
            strength: Some("Full".to_string()),
            ..fields("Tatuaje", "Havana VI", "Peru", 4)
        },
    )?;
    cigars.add(
        "cabinet",
        CigarFields {
            flavor_notes: Some(vec!["Vanilla".to_string()]),
            ..fields("Acid", "Kuba Kuba", "", 2)
        },
    )?;
    Ok(hub)
}

#[test]
fn test_adding_a_puro_reports_it() -> Result<()> {
    let hub = HumidorHub::open_in_memory(Config::default())?;
    hub.humidors().add(HumidorFields::named("Desktop"))?;

    let saved = hub.cigars().add(
        "Desktop",
        CigarFields {
            wrapper: Some("Nicaraguan Habano".to_string()),
            binder: Some("Nicaraguan".to_string()),
            filler: Some("Esteli, Jalapa".to_string()),
            ..fields("Oliva", "Serie V", "Nicaragua", 5)
        },
    )?;

    assert!(saved.cigar.is_puro);
    assert_eq!(saved.puro_notice.map(|n| n.country), Some("nicaragua"));

    // Manual override wins over detection on the same save
    let overridden = hub.cigars().edit(
        saved.cigar.id.as_str(),
        CigarFields {
            puro: Some(false),
            ..Default::default()
        },
        None,
    )?;
    assert!(!overridden.cigar.is_puro);
    assert!(overridden.manual_override);
    assert!(overridden.puro_notice.is_none());
    Ok(())
}

#[test]
fn test_invalid_input_is_rejected() -> Result<()> {
    let hub = stocked_hub()?;

    let bad_strength = hub.cigars().add(
        "desktop",
        CigarFields {
            strength: Some("Nuclear".to_string()),
            ..fields("Padron", "1926", "Nicaragua", 1)
        },
    );
    assert!(matches!(bad_strength, Err(Error::Types(_))));

    let nameless = hub.cigars().add("desktop", CigarFields::default());
    assert!(matches!(nameless, Err(Error::InvalidOperation(_))));

    let nowhere = hub.cigars().add("garage", fields("Padron", "1926", "Nicaragua", 1));
    assert!(matches!(nowhere, Err(Error::NotFound(_))));
    Ok(())
}

#[test]
fn test_quantity_never_goes_negative() -> Result<()> {
    let hub = stocked_hub()?;
    let id = hub.cigars().list(&ActiveFilter::search("tatuaje"), None)?[0].id.clone();

    let change = hub.cigars().adjust(id.as_str(), -10)?;
    assert_eq!((change.previous, change.current), (4, 0));
    assert_eq!(change.delta(), -4);

    let change = hub.cigars().adjust(id.as_str(), 3)?;
    assert_eq!(change.current, 3);
    Ok(())
}

#[test]
fn test_local_filters_on_cigar_list() -> Result<()> {
    let hub = stocked_hub()?;
    let cigars = hub.cigars();
    let brands = |filter: ActiveFilter| -> Result<Vec<String>> {
        Ok(cigars
            .list(&filter, None)?
            .into_iter()
            .filter_map(|c| c.brand)
            .collect())
    };

    assert_eq!(brands(ActiveFilter::search("KUBA"))?, vec!["Acid"]);
    assert_eq!(brands(ActiveFilter::wrapper("connecticut"))?, vec!["Davidoff"]);
    assert_eq!(
        brands(ActiveFilter::Strength(StrengthFilter::Level(Strength::Full)))?,
        vec!["Tatuaje"]
    );
    assert_eq!(
        brands(ActiveFilter::Strength(StrengthFilter::Flavored))?,
        vec!["Acid"]
    );
    // Peru is outside the featured countries; a blank country counts as other
    assert_eq!(
        brands(ActiveFilter::Country(CountryFilter::Other))?,
        vec!["Tatuaje", "Acid"]
    );

    let in_cabinet = cigars.list(&ActiveFilter::None, Some("Cabinet"))?;
    assert_eq!(in_cabinet.len(), 2);
    Ok(())
}

#[test]
fn test_dashboard_panels_are_cached_per_snapshot() -> Result<()> {
    let hub = stocked_hub()?;
    let mut dashboard = hub.dashboard()?;

    let views = dashboard.panels();
    let keys: Vec<Panel> = views.iter().map(|v| v.panel).collect();
    assert_eq!(keys, Config::default().dashboard.panels);
    assert_eq!(dashboard.cached_panels(), keys.len());

    let top = dashboard.panel(Panel::TopBrands).buckets()[0].clone();
    assert_eq!((top.label.as_str(), top.quantity), ("Padron", 10));
    assert_eq!(dashboard.cached_panels(), keys.len());

    hub.cigars().add("cabinet", fields("Oliva", "Serie V", "Nicaragua", 20))?;
    assert_eq!(dashboard.panel(Panel::TopBrands).buckets()[0].label, "Padron");

    dashboard.refresh()?;
    assert_eq!(dashboard.cached_panels(), 0);
    assert_eq!(dashboard.panel(Panel::TopBrands).buckets()[0].label, "Oliva");
    Ok(())
}

#[test]
fn test_browse_from_country_category() -> Result<()> {
    let hub = stocked_hub()?;
    let dashboard = hub.dashboard()?;

    let nicaragua = dashboard.browse(Panel::Countries, "Nicaraguan Cigars")?;
    assert_eq!(nicaragua.total_quantity, 10);
    assert_eq!(nicaragua.cigars[0].brand.as_deref(), Some("Padron"));

    let other = dashboard.browse(Panel::Countries, OTHER_COUNTRIES_LABEL)?;
    assert_eq!(other.total_quantity, 6);

    assert!(matches!(
        dashboard.browse(Panel::Summary, "Total"),
        Err(Error::InvalidOperation(_))
    ));
    Ok(())
}

#[test]
fn test_journal_entry_snapshots_cigar_and_takes_stock() -> Result<()> {
    let hub = stocked_hub()?;
    let padron = hub.cigars().list(&ActiveFilter::search("padron"), None)?[0].clone();

    let entry = hub.journal().add(NewEntry {
        cigar: padron.id.to_string(),
        experience_rating: Some(4.5),
        notes: Some("Cocoa and espresso".to_string()),
        burn_time_minutes: Some(75),
        from_stock: true,
        ..Default::default()
    })?;
    assert_eq!(entry.cigar_brand.as_deref(), Some("Padron"));
    assert_eq!(hub.cigars().resolve(padron.id.as_str())?.quantity, 9);

    let rejected = hub.journal().add(NewEntry {
        cigar: padron.id.to_string(),
        experience_rating: Some(4.3),
        ..Default::default()
    });
    assert!(matches!(rejected, Err(Error::Types(_))));

    // Deleting the cigar keeps the entry searchable by its snapshot
    hub.cigars().remove(padron.id.as_str())?;
    let found = hub.journal().list(None, Some("padron"))?;
    assert_eq!(found.len(), 1);

    let summary = hub.journal().summary()?;
    assert_eq!(summary.entries, 1);
    assert_eq!(summary.average_experience, Some(4.5));
    assert_eq!(summary.total_burn_minutes, 75);
    Ok(())
}

#[test]
fn test_remove_occupied_humidor_needs_force() -> Result<()> {
    let hub = stocked_hub()?;

    assert!(matches!(
        hub.humidors().remove("cabinet", false),
        Err(Error::InvalidOperation(_))
    ));

    let removed = hub.humidors().remove("cabinet", true)?;
    assert_eq!(removed.cigars_removed, 2);
    assert_eq!(hub.stats()?.cigars, 2);
    Ok(())
}

#[test]
fn test_humidor_detail_reports_fill() -> Result<()> {
    let hub = stocked_hub()?;
    let detail = hub.humidors().show("desktop")?;

    assert_eq!(detail.cigars.len(), 2);
    assert_eq!(detail.fill.quantity, 16);
    assert_eq!(detail.fill.capacity, Some(100));
    assert_eq!(detail.fill.fill_percent, Some(16.0));
    Ok(())
}

#[test]
fn test_export_then_import_into_fresh_workspace() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let source = stocked_hub()?;
    let path = temp_dir.path().join("exports").join("collection.json");
    let written = source.transfer().export_file(ExportFormat::Json, &path)?;
    assert_eq!(written, 6);

    let target = HumidorHub::open(temp_dir.path().join("data"))?;
    let report = target
        .transfer()
        .import_file(&path, ImportOptions::default())?;
    assert_eq!(report.counts.cigars, 4);
    assert!(report.skipped.is_empty());

    let stats = target.stats()?;
    assert_eq!(stats.humidors, 2);
    assert_eq!(stats.total_quantity, 22);
    Ok(())
}

#[test]
fn test_csv_export_has_one_row_per_cigar() -> Result<()> {
    let hub = stocked_hub()?;
    let mut out = Vec::new();
    let written = hub.transfer().export_to(ExportFormat::Csv, &mut out)?;
    assert_eq!(written, 4);

    let text = String::from_utf8(out).map_err(|e| Error::Export(e.to_string()))?;
    let mut lines = text.lines();
    assert!(lines.next().is_some_and(|header| header.starts_with("id,humidor,brand")));
    assert_eq!(lines.count(), 4);
    assert!(text.contains(",Desktop,Padron,1964 Anniversary,"));
    Ok(())
}

#[test]
fn test_import_is_lenient_with_web_exports() -> Result<()> {
    let hub = HumidorHub::open_in_memory(Config::default())?;
    let document = r#"{
        "humidors": [
            {"id": "h1", "name": "Desktop", "size": "150 count", "goveeDeviceId": ""},
            {"name": ""}
        ],
        "cigars": [
            {"id": "c1", "humidorId": "h1", "brand": "Padron", "name": "1926",
             "wrapper": "Nicaraguan", "binder": "Nicaraguan", "filler": "Nicaraguan",
             "quantity": "5", "price": "$21.00"},
            {"humidorId": "h1", "brand": "Oliva", "quantity": -2, "strength": ""},
            {"id": "c3", "humidorId": "missing", "brand": "Ghost"},
            "not a record"
        ],
        "journalEntries": [
            {"id": "e1", "cigarId": "c1", "experienceRating": 4.5, "dateSmoked": "2024-03-01T20:00:00Z"},
            {"id": "e2", "cigarId": "c1", "experienceRating": 9}
        ]
    }"#;

    let report = hub.transfer().import_str(document, ImportOptions::default())?;
    assert_eq!(report.counts.humidors, 1);
    assert_eq!(report.counts.cigars, 2);
    assert_eq!(report.counts.journal_entries, 1);

    let skipped: Vec<(CollectionKind, usize)> = report
        .skipped
        .iter()
        .map(|s| (s.collection, s.position))
        .collect();
    assert_eq!(
        skipped,
        vec![
            (CollectionKind::Humidors, 1),
            (CollectionKind::Cigars, 3),
            (CollectionKind::Cigars, 2),
            (CollectionKind::JournalEntries, 1),
        ]
    );

    let padron = hub.cigars().resolve("c1")?;
    assert_eq!(padron.quantity, 5);
    assert_eq!(padron.price, 21.0);
    assert!(padron.is_puro);

    let entry = hub.journal().show("e1")?;
    assert_eq!(entry.cigar_brand.as_deref(), Some("Padron"));

    // Replacing wipes what was there before
    let report = hub.transfer().import_str(
        r#"{"humidors": [{"id": "h9", "name": "Travel"}]}"#,
        ImportOptions { replace: true },
    )?;
    assert_eq!(report.counts.humidors, 1);
    assert_eq!(hub.stats()?.cigars, 0);
    Ok(())
}

#[test]
fn test_import_skips_entries_for_unknown_cigars() -> Result<()> {
    let hub = stocked_hub()?;
    let padron = hub.cigars().list(&ActiveFilter::brand("Padron"), None)?[0].clone();
    let document = format!(
        r#"{{
            "journalEntries": [
                {{"id": "e1", "cigarId": "{}", "experienceRating": 4}},
                {{"id": "e2", "cigarId": "c-gone", "experienceRating": 3}}
            ]
        }}"#,
        padron.id
    );

    let report = hub.transfer().import_str(&document, ImportOptions::default())?;
    assert_eq!(report.counts.journal_entries, 1);
    assert_eq!(report.skipped.len(), 1);
    assert_eq!(report.skipped[0].collection, CollectionKind::JournalEntries);
    assert_eq!(report.skipped[0].position, 1);
    assert!(report.skipped[0].reason.contains("unknown cigar c-gone"));
    assert!(hub.journal().show("e1").is_ok());

    // Existing cigars do not count once the import replaces them
    let report = hub.transfer().import_str(&document, ImportOptions { replace: true })?;
    assert_eq!(report.counts.journal_entries, 0);
    assert_eq!(report.skipped.len(), 2);
    assert_eq!(hub.stats()?.journal_entries, 0);
    Ok(())
}

#[test]
fn test_browse_unknown_bucket_finds_cigars_without_the_attribute() -> Result<()> {
    let hub = stocked_hub()?;
    let mut dashboard = hub.dashboard()?;

    let unknown = dashboard
        .panel(Panel::Wrappers)
        .buckets()
        .iter()
        .find(|b| b.label == "Unknown")
        .map(|b| b.quantity)
        .unwrap();
    let browsed = dashboard.browse(Panel::Wrappers, "Unknown")?;
    assert!(!browsed.cigars.is_empty());
    assert!(browsed.cigars.iter().all(|c| c.wrapper.is_none()));
    assert_eq!(browsed.total_quantity, unknown);
    Ok(())
}
