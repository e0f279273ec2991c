//! Sample collection documents in the export/import wire format.

use serde_json::{Value, json};

pub const DESKTOP_ID: &str = "hum-desktop";
pub const CABINET_ID: &str = "hum-cabinet";
pub const PADRON_ID: &str = "cig-padron";
pub const DAVIDOFF_ID: &str = "cig-davidoff";
pub const TATUAJE_ID: &str = "cig-tatuaje";
pub const ACID_ID: &str = "cig-acid";

/// Two humidors, four cigars (16 + 6 on hand) and one journal entry.
///
/// Quantities and prices are deliberately mixed between numbers and strings,
/// the way hand-edited exports arrive.
pub fn sample_collection() -> Value {
    json!({
        "appId": "humidor-hub",
        "userId": "local",
        "humidors": [
            {
                "id": DESKTOP_ID,
                "name": "Desktop",
                "size": "Desktop (100 count)",
                "temp": 68.0,
                "humidity": 65.0
            },
            {
                "id": CABINET_ID,
                "name": "Cabinet",
                "goveeDeviceId": "AA:BB:CC:DD"
            }
        ],
        "cigars": [
            {
                "id": PADRON_ID,
                "humidorId": DESKTOP_ID,
                "brand": "Padron",
                "name": "1964 Anniversary",
                "wrapper": "Nicaraguan Maduro",
                "binder": "Nicaraguan",
                "filler": "Nicaraguan",
                "country": "Nicaragua",
                "strength": "Medium-Full",
                "quantity": "10",
                "price": "18.50"
            },
            {
                "id": DAVIDOFF_ID,
                "humidorId": DESKTOP_ID,
                "brand": "Davidoff",
                "name": "Signature 2000",
                "wrapper": "Connecticut",
                "country": "Dominican Republic",
                "strength": "Mild",
                "quantity": 6,
                "price": 14
            },
            {
                "id": TATUAJE_ID,
                "humidorId": CABINET_ID,
                "brand": "Tatuaje",
                "name": "Havana VI",
                "country": "Peru",
                "strength": "Full",
                "quantity": 4,
                "price": 9.75
            },
            {
                "id": ACID_ID,
                "humidorId": CABINET_ID,
                "brand": "Acid",
                "name": "Kuba Kuba",
                "country": "",
                "flavorNotes": ["Vanilla"],
                "quantity": 2
            }
        ],
        "journalEntries": [
            {
                "id": "ent-first",
                "cigarId": PADRON_ID,
                "dateSmoked": "2024-05-01T20:00:00Z",
                "experienceRating": 4.5,
                "notes": "Cocoa and espresso",
                "burnTimeMinutes": 75
            }
        ]
    })
}
