//! Builds the SELECT, INSERT, UPDATE and DELETE statements for `stocks`.

pub const TABLE: &str = "stocks";

/// Writable columns, in bind order.
pub const COLUMNS: [&str; 7] = ["date", "trade_code", "open", "high", "low", "close", "volume"];

const PRICE_COLUMNS: [&str; 5] = ["open", "high", "low", "close", "volume"];

/// Quote identifier for MySQL.
fn quoted(s: &str) -> String {
    format!("`{}`", s.replace('`', "``"))
}

/// Projection that decodes the same regardless of the concrete column types
/// (INT or BIGINT id, DATE or VARCHAR date, DECIMAL/FLOAT/DOUBLE prices).
/// Adding a float literal yields DOUBLE on every MySQL and MariaDB release.
fn select_column_list() -> String {
    let mut cols = vec![
        format!("CAST({0} AS SIGNED) AS {0}", quoted("id")),
        format!("CAST({0} AS CHAR) AS {0}", quoted("date")),
        quoted("trade_code"),
    ];
    cols.extend(
        PRICE_COLUMNS
            .iter()
            .map(|c| format!("{0} + 0E0 AS {0}", quoted(c))),
    );
    cols.join(", ")
}

/// Full scan ordered by date, then id. Columns are table-qualified in ORDER BY
/// so the sort uses the stored values rather than the projected aliases.
pub fn select_all() -> String {
    let table = quoted(TABLE);
    format!(
        "SELECT {} FROM {table} ORDER BY {table}.{} ASC, {table}.{} ASC",
        select_column_list(),
        quoted("date"),
        quoted("id"),
    )
}

pub fn insert() -> String {
    let cols = COLUMNS.iter().map(|c| quoted(c)).collect::<Vec<_>>().join(", ");
    let placeholders = vec!["?"; COLUMNS.len()].join(", ");
    format!("INSERT INTO {} ({}) VALUES ({})", quoted(TABLE), cols, placeholders)
}

/// Full-row overwrite; the id is bound last.
pub fn update_by_id() -> String {
    let sets = COLUMNS
        .iter()
        .map(|c| format!("{} = ?", quoted(c)))
        .collect::<Vec<_>>()
        .join(", ");
    format!("UPDATE {} SET {} WHERE {} = ?", quoted(TABLE), sets, quoted("id"))
}

pub fn delete_by_id() -> String {
    format!("DELETE FROM {} WHERE {} = ?", quoted(TABLE), quoted("id"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn select_orders_by_date_then_id() {
        assert_eq!(
            select_all(),
            "SELECT CAST(`id` AS SIGNED) AS `id`, CAST(`date` AS CHAR) AS `date`, `trade_code`, \
             `open` + 0E0 AS `open`, `high` + 0E0 AS `high`, \
             `low` + 0E0 AS `low`, `close` + 0E0 AS `close`, \
             `volume` + 0E0 AS `volume` \
             FROM `stocks` ORDER BY `stocks`.`date` ASC, `stocks`.`id` ASC"
        );
    }

    #[test]
    fn select_avoids_double_cast() {
        let sql = select_all();
        assert!(!sql.contains("AS DOUBLE"));
        for col in ["open", "high", "low", "close", "volume"] {
            assert!(sql.contains(&format!("`{col}` + 0E0 AS `{col}`")), "{col} not widened");
        }
    }

    #[test]
    fn insert_binds_seven_values() {
        assert_eq!(
            insert(),
            "INSERT INTO `stocks` (`date`, `trade_code`, `open`, `high`, `low`, `close`, `volume`) \
             VALUES (?, ?, ?, ?, ?, ?, ?)"
        );
    }

    #[test]
    fn update_overwrites_every_column() {
        let sql = update_by_id();
        assert_eq!(
            sql,
            "UPDATE `stocks` SET `date` = ?, `trade_code` = ?, `open` = ?, `high` = ?, \
             `low` = ?, `close` = ?, `volume` = ? WHERE `id` = ?"
        );
        assert_eq!(sql.matches('?').count(), COLUMNS.len() + 1);
    }

    #[test]
    fn delete_by_primary_key() {
        assert_eq!(delete_by_id(), "DELETE FROM `stocks` WHERE `id` = ?");
    }

    #[test]
    fn quoting_escapes_backticks() {
        assert_eq!(quoted("we`ird"), "`we``ird`");
    }
}
