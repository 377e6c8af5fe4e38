//! Statement logging via `tracing` (crate feature `tracing`).

use crate::config::MapperConfig;
use crate::error::MapperError;
use crate::sql::QueryResult;

#[cfg_attr(not(feature = "tracing"), allow(dead_code))]
pub(crate) fn truncate_sql_bytes(sql: &str, max_bytes: usize) -> &str {
    if sql.len() <= max_bytes {
        return sql;
    }
    let mut end = max_bytes;
    while end > 0 && !sql.is_char_boundary(end) {
        end -= 1;
    }
    &sql[..end]
}

#[cfg(feature = "tracing")]
pub(crate) fn log_statement(
    config: &MapperConfig,
    data_source: &str,
    table: &str,
    operation: &str,
    result: &QueryResult,
) {
    if !config.log_sql {
        return;
    }
    let sql = match config.max_logged_sql_length {
        Some(max) if result.sql().len() > max => {
            format!("{}...", truncate_sql_bytes(result.sql(), max))
        }
        _ => result.sql().to_string(),
    };
    tracing::debug!(
        target: "pgsql_mapper.sql",
        data_source,
        table,
        operation,
        param_count = result.params().len(),
        sql = %sql,
    );
}

#[cfg(feature = "tracing")]
pub(crate) fn log_rejected(
    config: &MapperConfig,
    data_source: &str,
    table: &str,
    operation: &str,
    err: &MapperError,
) {
    if !config.log_sql {
        return;
    }
    tracing::debug!(
        target: "pgsql_mapper.sql",
        data_source,
        table,
        operation,
        error = %err,
        "statement rejected",
    );
}

#[cfg(not(feature = "tracing"))]
pub(crate) fn log_statement(
    _config: &MapperConfig,
    _data_source: &str,
    _table: &str,
    _operation: &str,
    _result: &QueryResult,
) {
}

#[cfg(not(feature = "tracing"))]
pub(crate) fn log_rejected(
    _config: &MapperConfig,
    _data_source: &str,
    _table: &str,
    _operation: &str,
    _err: &MapperError,
) {
}

#[cfg(test)]
mod tests {
    use super::truncate_sql_bytes;

    #[test]
    fn truncates_on_char_boundary() {
        assert_eq!(truncate_sql_bytes("SELECT 1", 100), "SELECT 1");
        assert_eq!(truncate_sql_bytes("SELECT 1", 6), "SELECT");
        // 'é' is two bytes; cutting inside it backs off.
        assert_eq!(truncate_sql_bytes("aé", 2), "a");
    }
}
