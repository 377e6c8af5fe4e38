//! Mappers: one type per logical entity, one method per logical operation.
//!
//! Every method is a pure function of its [`MapperContext`] and returns a
//! finished [`QueryResult`] or a construction error. Nothing here talks to a
//! database.
//!
//! Besides the entity-specific operations, every mapper gets the generic
//! single-table CRUD statements from the [`Mapper`] trait. Column names passed
//! to them double as parameter keys, and a column written as `name@FUNC`
//! (e.g. `gmt_modified@NOW()`) renders the dialect's function token instead of
//! a placeholder.

use crate::base::DialectBase;
use crate::context::MapperContext;
use crate::dialect::TrustedFunction;
use crate::error::{MapperError, MapperResult};
use crate::sql::{QueryResult, Sql, sql};
use std::any::Any;

pub mod config_info_gray;
pub mod config_tags_relation;
pub mod group_capacity;
pub mod tenant_info;

pub use config_info_gray::ConfigInfoGrayMapper;
pub use config_tags_relation::ConfigTagsRelationMapper;
pub use group_capacity::GroupCapacityMapper;
pub use tenant_info::TenantInfoMapper;

/// Common surface of all mappers.
pub trait Mapper: Any + Send + Sync {
    /// Table this mapper targets.
    fn table_name(&self) -> &'static str;

    /// The dialect base this mapper delegates to.
    fn base(&self) -> &DialectBase;

    /// Dialect identity of this mapper.
    fn data_source(&self) -> &'static str {
        self.base().dialect_id()
    }

    /// Resolve a logical function name for this mapper's dialect.
    fn function(&self, name: &str) -> MapperResult<&'static str> {
        self.base().resolve_function(name)
    }

    /// `SELECT c1,c2 FROM <table> WHERE w1 = ? AND w2 = ?`
    fn select(
        &self,
        columns: &[&str],
        where_columns: &[&str],
        ctx: &MapperContext,
    ) -> MapperResult<QueryResult> {
        let base = self.base();
        let table = self.table_name();
        base.build(table, "select", || {
            require_columns("columns", columns)?;
            let mut q = sql("SELECT ");
            q.push(&quote_all(base, columns)?.join(","));
            q.push(" FROM ").push(table);
            push_where_eq(&mut q, base, where_columns, ctx)?;
            Ok(q)
        })
    }

    /// `INSERT INTO <table>(c1, c2) VALUES(?, NOW())`
    fn insert(&self, columns: &[&str], ctx: &MapperContext) -> MapperResult<QueryResult> {
        let base = self.base();
        let table = self.table_name();
        base.build(table, "insert", || {
            require_columns("columns", columns)?;
            let targets = columns
                .iter()
                .map(|c| split_function(base, c))
                .collect::<MapperResult<Vec<_>>>()?;

            let mut q = sql("INSERT INTO ");
            q.push(table).push("(");
            let names: Vec<&str> = targets.iter().map(|t| t.ident.as_str()).collect();
            q.push(&names.join(", "));
            q.push(") VALUES(");
            for (i, target) in targets.iter().enumerate() {
                if i != 0 {
                    q.push(", ");
                }
                match target.function {
                    Some(token) => {
                        q.push(token);
                    }
                    None => {
                        q.push_bind(ctx.required_update(target.key)?.clone());
                    }
                }
            }
            q.push(")");
            Ok(q)
        })
    }

    /// `UPDATE <table> SET c1 = ?,c2 = NOW() WHERE w1 = ?`
    fn update(
        &self,
        columns: &[&str],
        where_columns: &[&str],
        ctx: &MapperContext,
    ) -> MapperResult<QueryResult> {
        let base = self.base();
        let table = self.table_name();
        base.build(table, "update", || {
            require_columns("columns", columns)?;
            let mut q = sql("UPDATE ");
            q.push(table).push(" SET ");
            for (i, column) in columns.iter().enumerate() {
                if i != 0 {
                    q.push(",");
                }
                let target = split_function(base, column)?;
                q.push(&target.ident).push(" = ");
                match target.function {
                    Some(token) => {
                        q.push(token);
                    }
                    None => {
                        q.push_bind(ctx.required_update(target.key)?.clone());
                    }
                }
            }
            push_where_eq(&mut q, base, where_columns, ctx)?;
            Ok(q)
        })
    }

    /// `DELETE FROM <table> WHERE w1 = ? AND w2 = ?`; at least one predicate is required.
    fn delete(&self, where_columns: &[&str], ctx: &MapperContext) -> MapperResult<QueryResult> {
        let base = self.base();
        let table = self.table_name();
        base.build(table, "delete", || {
            require_columns("where_columns", where_columns)?;
            let mut q = sql("DELETE FROM ");
            q.push(table);
            push_where_eq(&mut q, base, where_columns, ctx)?;
            Ok(q)
        })
    }

    /// `SELECT count(*) FROM <table> WHERE w1 = ?`
    fn count(&self, where_columns: &[&str], ctx: &MapperContext) -> MapperResult<QueryResult> {
        let base = self.base();
        let table = self.table_name();
        base.build(table, "count", || {
            let mut q = sql("SELECT ");
            q.push(base.function(TrustedFunction::Count));
            q.push(" FROM ").push(table);
            push_where_eq(&mut q, base, where_columns, ctx)?;
            Ok(q)
        })
    }
}

/// A write target: quoted column plus either a parameter key or a function token.
struct Target<'a> {
    ident: String,
    key: &'a str,
    function: Option<&'static str>,
}

fn split_function<'a>(base: &DialectBase, column: &'a str) -> MapperResult<Target<'a>> {
    match column.split_once('@') {
        Some((name, function)) => Ok(Target {
            ident: base.quote_ident(name)?,
            key: name,
            function: Some(base.resolve_function(function)?),
        }),
        None => Ok(Target {
            ident: base.quote_ident(column)?,
            key: column,
            function: None,
        }),
    }
}

fn require_columns(name: &str, columns: &[&str]) -> MapperResult<()> {
    if columns.is_empty() {
        return Err(MapperError::EmptyValueList(name.to_string()));
    }
    Ok(())
}

fn quote_all(base: &DialectBase, columns: &[&str]) -> MapperResult<Vec<String>> {
    columns.iter().map(|c| base.quote_ident(c)).collect()
}

/// Append ` WHERE a = ? AND b = ?` with values read from where-parameters.
fn push_where_eq(
    q: &mut Sql,
    base: &DialectBase,
    where_columns: &[&str],
    ctx: &MapperContext,
) -> MapperResult<()> {
    for (i, column) in where_columns.iter().enumerate() {
        q.push(if i == 0 { " WHERE " } else { " AND " });
        q.push(&base.quote_ident(column)?).push(" = ");
        q.push_bind(ctx.required_where(column)?.clone());
    }
    Ok(())
}
