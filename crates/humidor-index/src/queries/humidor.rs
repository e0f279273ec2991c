use humidor_types::{Humidor, HumidorId, UserScope};
use rusqlite::{Connection, OptionalExtension, Row, params};

use crate::Result;

const COLUMNS: &str = "id, name, size, temp, humidity, sensor_device_id";

pub fn insert_or_update(conn: &Connection, scope: &UserScope, humidor: &Humidor) -> Result<()> {
    conn.execute(
        r#"
        INSERT INTO humidors (app_id, user_id, id, name, size, temp, humidity, sensor_device_id)
        VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)
        ON CONFLICT(app_id, user_id, id) DO UPDATE SET
            name = ?4,
            size = ?5,
            temp = ?6,
            humidity = ?7,
            sensor_device_id = ?8
        "#,
        params![
            &scope.app_id,
            &scope.user_id,
            humidor.id.as_str(),
            &humidor.name,
            &humidor.size,
            &humidor.temp,
            &humidor.humidity,
            &humidor.sensor_device_id
        ],
    )?;

    Ok(())
}

pub fn get(conn: &Connection, scope: &UserScope, id: &HumidorId) -> Result<Option<Humidor>> {
    let result = conn
        .query_row(
            &format!(
                "SELECT {} FROM humidors WHERE app_id = ?1 AND user_id = ?2 AND id = ?3",
                COLUMNS
            ),
            params![&scope.app_id, &scope.user_id, id.as_str()],
            from_row,
        )
        .optional()?;

    Ok(result)
}

pub fn list(conn: &Connection, scope: &UserScope) -> Result<Vec<Humidor>> {
    let mut stmt = conn.prepare(&format!(
        "SELECT {} FROM humidors WHERE app_id = ?1 AND user_id = ?2 ORDER BY rowid",
        COLUMNS
    ))?;

    let humidors = stmt
        .query_map([&scope.app_id, &scope.user_id], from_row)?
        .collect::<std::result::Result<Vec<_>, rusqlite::Error>>()?;

    Ok(humidors)
}

/// Returns whether a row was removed.
pub fn delete(conn: &Connection, scope: &UserScope, id: &HumidorId) -> Result<bool> {
    let removed = conn.execute(
        "DELETE FROM humidors WHERE app_id = ?1 AND user_id = ?2 AND id = ?3",
        params![&scope.app_id, &scope.user_id, id.as_str()],
    )?;

    Ok(removed > 0)
}

fn from_row(row: &Row<'_>) -> rusqlite::Result<Humidor> {
    Ok(Humidor {
        id: HumidorId::new(row.get::<_, String>(0)?),
        name: row.get(1)?,
        size: row.get(2)?,
        temp: row.get(3)?,
        humidity: row.get(4)?,
        sensor_device_id: row.get(5)?,
    })
}
