use crate::{Error, Result};
use chrono::{DateTime, Utc};
use humidor_engine::detect_puro_for;
use humidor_index::{Database, ImportCounts};
use humidor_types::{
    Cigar, CigarId, CollectionKind, EntryId, Humidor, HumidorId, JournalEntry,
};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::{HashMap, HashSet};
use std::io::{Read, Write};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    /// Whole collection: humidors, cigars and journal entries
    Json,
    /// Cigars only, one row per record
    Csv,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CollectionDocument {
    pub app_id: String,
    pub user_id: String,
    pub exported_at: DateTime<Utc>,
    pub humidors: Vec<Humidor>,
    pub cigars: Vec<Cigar>,
    pub journal_entries: Vec<JournalEntry>,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct ImportOptions {
    /// Clear the current scope before writing.
    pub replace: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct SkippedRecord {
    pub collection: CollectionKind,
    /// Zero-based index in the source array.
    pub position: usize,
    pub reason: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct ImportReport {
    pub counts: ImportCounts,
    pub skipped: Vec<SkippedRecord>,
}

const CSV_HEADER: [&str; 15] = [
    "id",
    "humidor",
    "brand",
    "name",
    "shape",
    "size",
    "wrapper",
    "binder",
    "filler",
    "country",
    "strength",
    "quantity",
    "price",
    "is_puro",
    "flavor_notes",
];

pub struct TransferService<'a> {
    db: &'a Database,
}

impl<'a> TransferService<'a> {
    pub fn new(db: &'a Database) -> Self {
        Self { db }
    }

    pub fn document(&self) -> Result<CollectionDocument> {
        let scope = self.db.scope();
        Ok(CollectionDocument {
            app_id: scope.app_id.clone(),
            user_id: scope.user_id.clone(),
            exported_at: Utc::now(),
            humidors: self.db.list_humidors()?,
            cigars: self.db.list_cigars()?,
            journal_entries: self.db.list_entries(None)?,
        })
    }

    /// Write the collection in the given format. Returns the number of
    /// records written.
    pub fn export<W: Write>(&self, format: ExportFormat, writer: W) -> Result<usize> {
        let document = self.document()?;
        let written = match format {
            ExportFormat::Json => {
                serde_json::to_writer_pretty(writer, &document)?;
                document.humidors.len() + document.cigars.len() + document.journal_entries.len()
            }
            ExportFormat::Csv => write_cigar_csv(writer, &document)?,
        };

        tracing::info!(?format, records = written, "collection exported");
        Ok(written)
    }

    pub fn import<R: Read>(&self, reader: R, options: ImportOptions) -> Result<ImportReport> {
        let root: Value = serde_json::from_reader(reader)?;
        self.import_value(root, options)
    }

    pub fn import_str(&self, input: &str, options: ImportOptions) -> Result<ImportReport> {
        let root: Value = serde_json::from_str(input)?;
        self.import_value(root, options)
    }

    fn import_value(&self, root: Value, options: ImportOptions) -> Result<ImportReport> {
        let Value::Object(mut root) = root else {
            return Err(Error::Export(
                "import document must be a JSON object".to_string(),
            ));
        };

        let mut skipped = Vec::new();

        let humidors: Vec<Humidor> = decode_all(
            take_array(&mut root, &["humidors"])?,
            CollectionKind::Humidors,
            || HumidorId::generate().to_string(),
            &mut skipped,
        )
        .into_iter()
        .filter_map(|(position, _, humidor): (usize, bool, Humidor)| {
            if humidor.name.trim().is_empty() {
                skipped.push(skip(CollectionKind::Humidors, position, "humidor has no name"));
                None
            } else {
                Some(humidor)
            }
        })
        .collect();

        let mut known_humidors: HashSet<HumidorId> =
            humidors.iter().map(|h| h.id.clone()).collect();
        if !options.replace {
            known_humidors.extend(self.db.list_humidors()?.into_iter().map(|h| h.id));
        }

        let cigars: Vec<Cigar> = decode_all(
            take_array(&mut root, &["cigars"])?,
            CollectionKind::Cigars,
            || CigarId::generate().to_string(),
            &mut skipped,
        )
        .into_iter()
        .filter_map(|(position, flagged, mut cigar): (usize, bool, Cigar)| {
            if !known_humidors.contains(&cigar.humidor_id) {
                skipped.push(skip(
                    CollectionKind::Cigars,
                    position,
                    &format!("unknown humidor {}", cigar.humidor_id),
                ));
                return None;
            }
            if !flagged {
                cigar.is_puro = detect_puro_for(&cigar).is_puro;
            }
            Some(cigar)
        })
        .collect();

        let by_id: HashMap<&CigarId, &Cigar> = cigars.iter().map(|c| (&c.id, c)).collect();
        let mut known_cigars: HashSet<CigarId> = HashSet::new();
        if !options.replace {
            known_cigars.extend(self.db.list_cigars()?.into_iter().map(|c| c.id));
        }

        let entries: Vec<JournalEntry> = decode_all(
            take_array(&mut root, &["journalEntries", "journal_entries"])?,
            CollectionKind::JournalEntries,
            || EntryId::generate().to_string(),
            &mut skipped,
        )
        .into_iter()
        .filter_map(|(position, _, mut entry): (usize, bool, JournalEntry)| {
            match by_id.get(&entry.cigar_id) {
                // Snapshot the cigar when the document left it out
                Some(cigar) => {
                    if entry.cigar_brand.is_none() {
                        entry.cigar_brand = cigar.brand.clone();
                    }
                    if entry.cigar_name.is_none() {
                        entry.cigar_name = cigar.name.clone();
                    }
                }
                None if known_cigars.contains(&entry.cigar_id) => {}
                None => {
                    skipped.push(skip(
                        CollectionKind::JournalEntries,
                        position,
                        &format!("unknown cigar {}", entry.cigar_id),
                    ));
                    return None;
                }
            }
            Some(entry)
        })
        .collect();

        let counts = self
            .db
            .import(&humidors, &cigars, &entries, options.replace)?;

        for record in &skipped {
            tracing::warn!(
                collection = %record.collection,
                position = record.position,
                reason = %record.reason,
                "record skipped during import"
            );
        }
        tracing::info!(
            humidors = counts.humidors,
            cigars = counts.cigars,
            journal_entries = counts.journal_entries,
            skipped = skipped.len(),
            "collection imported"
        );

        Ok(ImportReport { counts, skipped })
    }
}

fn write_cigar_csv<W: Write>(writer: W, document: &CollectionDocument) -> Result<usize> {
    let names: HashMap<&HumidorId, &str> = document
        .humidors
        .iter()
        .map(|h| (&h.id, h.name.as_str()))
        .collect();

    let mut wtr = csv::Writer::from_writer(writer);
    wtr.write_record(CSV_HEADER)?;

    for cigar in &document.cigars {
        let text = |value: &Option<String>| value.clone().unwrap_or_default();
        wtr.write_record([
            cigar.id.to_string(),
            names
                .get(&cigar.humidor_id)
                .map(|name| name.to_string())
                .unwrap_or_else(|| cigar.humidor_id.to_string()),
            text(&cigar.brand),
            text(&cigar.name),
            text(&cigar.shape),
            text(&cigar.size),
            text(&cigar.wrapper),
            text(&cigar.binder),
            text(&cigar.filler),
            text(&cigar.country),
            cigar.strength.map(|s| s.to_string()).unwrap_or_default(),
            cigar.quantity.to_string(),
            format!("{:.2}", cigar.price),
            cigar.is_puro.to_string(),
            cigar.flavor_notes.join("; "),
        ])?;
    }

    wtr.flush()?;
    Ok(document.cigars.len())
}

fn take_array(root: &mut Map<String, Value>, keys: &[&str]) -> Result<Vec<Value>> {
    for key in keys {
        match root.remove(*key) {
            Some(Value::Array(values)) => return Ok(values),
            Some(Value::Null) | None => continue,
            Some(_) => {
                return Err(Error::Export(format!("'{}' must be an array", key)));
            }
        }
    }
    Ok(Vec::new())
}

/// Decode each object of a collection array. Records without a usable id get
/// a fresh one; records that fail to decode are reported and dropped.
///
/// The flag in each result says whether the record carried `isPuro`.
fn decode_all<T, G>(
    values: Vec<Value>,
    kind: CollectionKind,
    generate_id: G,
    skipped: &mut Vec<SkippedRecord>,
) -> Vec<(usize, bool, T)>
where
    T: DeserializeOwned,
    G: Fn() -> String,
{
    let mut decoded = Vec::with_capacity(values.len());

    for (position, value) in values.into_iter().enumerate() {
        let Value::Object(mut map) = value else {
            skipped.push(skip(kind, position, "not a JSON object"));
            continue;
        };

        let id = match map.get("id") {
            Some(Value::String(s)) if !s.trim().is_empty() => s.trim().to_string(),
            Some(Value::Number(n)) => n.to_string(),
            _ => generate_id(),
        };
        map.insert("id".to_string(), Value::String(id));
        let flagged = matches!(map.get("isPuro"), Some(Value::Bool(_)));

        match serde_json::from_value::<T>(Value::Object(map)) {
            Ok(record) => decoded.push((position, flagged, record)),
            Err(err) => skipped.push(skip(kind, position, &err.to_string())),
        }
    }

    decoded
}

fn skip(collection: CollectionKind, position: usize, reason: &str) -> SkippedRecord {
    SkippedRecord {
        collection,
        position,
        reason: reason.to_string(),
    }
}
