use humidor_types::{Cigar, CigarId, HumidorId, UserScope};
use rusqlite::{Connection, OptionalExtension, Row, params};

use super::{conversion_error, count_from_sql};
use crate::Result;

const COLUMNS: &str = "id, humidor_id, brand, name, shape, size, wrapper, binder, filler, \
                       country, strength, flavor_notes, quantity, price, is_puro";

pub fn insert_or_update(conn: &Connection, scope: &UserScope, cigar: &Cigar) -> Result<()> {
    let flavor_notes = serde_json::to_string(&cigar.flavor_notes)?;
    let strength = cigar.strength.map(|s| s.label());

    conn.execute(
        r#"
        INSERT INTO cigars (app_id, user_id, id, humidor_id, brand, name, shape, size,
                            wrapper, binder, filler, country, strength, flavor_notes,
                            quantity, price, is_puro)
        VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12, ?13, ?14, ?15, ?16, ?17)
        ON CONFLICT(app_id, user_id, id) DO UPDATE SET
            humidor_id = ?4,
            brand = ?5,
            name = ?6,
            shape = ?7,
            size = ?8,
            wrapper = ?9,
            binder = ?10,
            filler = ?11,
            country = ?12,
            strength = ?13,
            flavor_notes = ?14,
            quantity = ?15,
            price = ?16,
            is_puro = ?17
        "#,
        params![
            &scope.app_id,
            &scope.user_id,
            cigar.id.as_str(),
            cigar.humidor_id.as_str(),
            &cigar.brand,
            &cigar.name,
            &cigar.shape,
            &cigar.size,
            &cigar.wrapper,
            &cigar.binder,
            &cigar.filler,
            &cigar.country,
            strength,
            flavor_notes,
            i64::from(cigar.quantity),
            cigar.price,
            cigar.is_puro
        ],
    )?;

    Ok(())
}

pub fn get(conn: &Connection, scope: &UserScope, id: &CigarId) -> Result<Option<Cigar>> {
    let result = conn
        .query_row(
            &format!(
                "SELECT {} FROM cigars WHERE app_id = ?1 AND user_id = ?2 AND id = ?3",
                COLUMNS
            ),
            params![&scope.app_id, &scope.user_id, id.as_str()],
            from_row,
        )
        .optional()?;

    Ok(result)
}

pub fn list(conn: &Connection, scope: &UserScope) -> Result<Vec<Cigar>> {
    let mut stmt = conn.prepare(&format!(
        "SELECT {} FROM cigars WHERE app_id = ?1 AND user_id = ?2 ORDER BY rowid",
        COLUMNS
    ))?;

    let cigars = stmt
        .query_map([&scope.app_id, &scope.user_id], from_row)?
        .collect::<std::result::Result<Vec<_>, rusqlite::Error>>()?;

    Ok(cigars)
}

pub fn list_by_humidor(
    conn: &Connection,
    scope: &UserScope,
    humidor_id: &HumidorId,
) -> Result<Vec<Cigar>> {
    let mut stmt = conn.prepare(&format!(
        r#"
        SELECT {}
        FROM cigars
        WHERE app_id = ?1 AND user_id = ?2 AND humidor_id = ?3
        ORDER BY rowid
        "#,
        COLUMNS
    ))?;

    let cigars = stmt
        .query_map(
            params![&scope.app_id, &scope.user_id, humidor_id.as_str()],
            from_row,
        )?
        .collect::<std::result::Result<Vec<_>, rusqlite::Error>>()?;

    Ok(cigars)
}

pub fn count_in_humidor(conn: &Connection, scope: &UserScope, humidor_id: &HumidorId) -> Result<usize> {
    let count: i64 = conn.query_row(
        r#"
        SELECT COUNT(*)
        FROM cigars
        WHERE app_id = ?1 AND user_id = ?2 AND humidor_id = ?3
        "#,
        params![&scope.app_id, &scope.user_id, humidor_id.as_str()],
        |row| row.get(0),
    )?;

    Ok(count as usize)
}

/// Rows are clamped the same way `list` clamps them, so both totals agree.
pub fn total_quantity(conn: &Connection, scope: &UserScope) -> Result<u64> {
    let total: i64 = conn.query_row(
        r#"
        SELECT COALESCE(SUM(MIN(MAX(quantity, 0), ?3)), 0)
        FROM cigars
        WHERE app_id = ?1 AND user_id = ?2
        "#,
        params![&scope.app_id, &scope.user_id, i64::from(u32::MAX)],
        |row| row.get(0),
    )?;

    Ok(total.max(0) as u64)
}

/// Add `delta` to the stored quantity, staying within `0..=u32::MAX`.
/// Returns the new quantity, or None when the cigar does not exist.
///
/// The sum is computed here rather than in SQL, where a large delta would
/// overflow into a REAL. Run inside a transaction.
pub fn adjust_quantity(
    conn: &Connection,
    scope: &UserScope,
    id: &CigarId,
    delta: i64,
) -> Result<Option<u32>> {
    let current = conn
        .query_row(
            "SELECT quantity FROM cigars WHERE app_id = ?1 AND user_id = ?2 AND id = ?3",
            params![&scope.app_id, &scope.user_id, id.as_str()],
            |row| row.get::<_, i64>(0),
        )
        .optional()?;
    let Some(current) = current else {
        return Ok(None);
    };

    let quantity = count_from_sql(i64::from(count_from_sql(current)).saturating_add(delta));
    conn.execute(
        "UPDATE cigars SET quantity = ?4 WHERE app_id = ?1 AND user_id = ?2 AND id = ?3",
        params![&scope.app_id, &scope.user_id, id.as_str(), i64::from(quantity)],
    )?;

    Ok(Some(quantity))
}

pub fn delete(conn: &Connection, scope: &UserScope, id: &CigarId) -> Result<bool> {
    let removed = conn.execute(
        "DELETE FROM cigars WHERE app_id = ?1 AND user_id = ?2 AND id = ?3",
        params![&scope.app_id, &scope.user_id, id.as_str()],
    )?;

    Ok(removed > 0)
}

pub fn delete_by_humidor(conn: &Connection, scope: &UserScope, humidor_id: &HumidorId) -> Result<usize> {
    let removed = conn.execute(
        "DELETE FROM cigars WHERE app_id = ?1 AND user_id = ?2 AND humidor_id = ?3",
        params![&scope.app_id, &scope.user_id, humidor_id.as_str()],
    )?;

    Ok(removed)
}

fn from_row(row: &Row<'_>) -> rusqlite::Result<Cigar> {
    let flavor_notes: String = row.get(11)?;
    let flavor_notes: Vec<String> =
        serde_json::from_str(&flavor_notes).map_err(|e| conversion_error(11, e))?;

    Ok(Cigar {
        id: CigarId::new(row.get::<_, String>(0)?),
        humidor_id: HumidorId::new(row.get::<_, String>(1)?),
        brand: row.get(2)?,
        name: row.get(3)?,
        shape: row.get(4)?,
        size: row.get(5)?,
        wrapper: row.get(6)?,
        binder: row.get(7)?,
        filler: row.get(8)?,
        country: row.get(9)?,
        strength: row
            .get::<_, Option<String>>(10)?
            .and_then(|s| s.parse().ok()),
        flavor_notes,
        quantity: count_from_sql(row.get(12)?),
        price: row.get(13)?,
        is_puro: row.get(14)?,
    })
}
