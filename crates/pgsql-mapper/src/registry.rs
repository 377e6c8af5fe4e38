//! Mapper registration: (dialect, table) -> mapper instance.
//!
//! Each mapper module submits a [`MapperRegistration`] through `inventory`.
//! [`MapperRegistry::for_dialect`] collects the registrations of one dialect
//! and builds them against a shared [`DialectBase`].
//!
//! # Example
//! ```ignore
//! use pgsql_mapper::{DialectBase, GroupCapacityMapper, MapperRegistry, tables};
//!
//! let registry = MapperRegistry::for_dialect(DialectBase::pgsql());
//! let capacity = registry
//!     .get_as::<GroupCapacityMapper>(tables::GROUP_CAPACITY)
//!     .expect("registered");
//! ```

use crate::base::DialectBase;
use crate::mapper::Mapper;
use std::any::Any;
use std::collections::BTreeMap;
use std::sync::Arc;

/// Registration entry for one mapper implementation.
pub struct MapperRegistration {
    /// Dialect identity the mapper targets.
    pub data_source: &'static str,
    /// Table the mapper targets.
    pub table_name: &'static str,
    /// Build the mapper from a dialect base.
    pub build: fn(DialectBase) -> Arc<dyn Mapper>,
}

inventory::collect!(MapperRegistration);

/// All mappers registered for one dialect, keyed by table name.
#[derive(Clone)]
pub struct MapperRegistry {
    base: DialectBase,
    mappers: BTreeMap<&'static str, Arc<dyn Mapper>>,
}

impl MapperRegistry {
    /// Instantiate every registration whose data source matches `base`'s dialect.
    pub fn for_dialect(base: DialectBase) -> Self {
        let data_source = base.dialect_id();
        let mappers = inventory::iter::<MapperRegistration>
            .into_iter()
            .filter(|r| r.data_source == data_source)
            .map(|r| (r.table_name, (r.build)(base.clone())))
            .collect();
        Self { base, mappers }
    }

    pub fn base(&self) -> &DialectBase {
        &self.base
    }

    pub fn data_source(&self) -> &'static str {
        self.base.dialect_id()
    }

    /// Mapper for `table`, if one is registered for this dialect.
    pub fn get(&self, table: &str) -> Option<Arc<dyn Mapper>> {
        self.mappers.get(table).cloned()
    }

    /// Mapper for `table` as its concrete type.
    pub fn get_as<M: Mapper>(&self, table: &str) -> Option<&M> {
        let mapper: &dyn Mapper = &**self.mappers.get(table)?;
        let any: &dyn Any = mapper;
        any.downcast_ref::<M>()
    }

    /// Registered table names, sorted.
    pub fn tables(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.mappers.keys().copied()
    }

    pub fn len(&self) -> usize {
        self.mappers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.mappers.is_empty()
    }
}

impl std::fmt::Debug for MapperRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MapperRegistry")
            .field("data_source", &self.data_source())
            .field("tables", &self.mappers.keys().collect::<Vec<_>>())
            .finish()
    }
}
