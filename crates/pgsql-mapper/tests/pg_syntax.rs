//! Every emitted template must be accepted by the PostgreSQL parser.

mod common;

use common::all_statements;
use pgsql_mapper::prelude::*;

#[test]
fn templates_parse_as_postgresql() {
    let registry = MapperRegistry::for_dialect(DialectBase::pgsql());
    for (name, result) in all_statements(&registry) {
        let q = result.unwrap();
        if let Err(e) = pg_query::parse(q.sql()) {
            panic!("{name}: {e}\n{}", q.sql());
        }
    }
}
