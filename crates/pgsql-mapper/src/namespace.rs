//! Default-tenant provider.
//!
//! Some capacity statements are scoped to the default tenant. The id comes
//! from the host through [`NamespaceProvider`] and is always bound as a
//! parameter, never spliced into SQL text.

use std::fmt;

/// Supplies the current default tenant id.
pub trait NamespaceProvider: Send + Sync {
    fn default_namespace_id(&self) -> String;
}

impl<F> NamespaceProvider for F
where
    F: Fn() -> String + Send + Sync,
{
    fn default_namespace_id(&self) -> String {
        self()
    }
}

/// A fixed default tenant id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StaticNamespace(pub String);

impl StaticNamespace {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }
}

impl NamespaceProvider for StaticNamespace {
    fn default_namespace_id(&self) -> String {
        self.0.clone()
    }
}

impl fmt::Debug for dyn NamespaceProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NamespaceProvider").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use crate::base::DialectBase;

    #[test]
    fn debug_does_not_call_the_provider() {
        let base = DialectBase::pgsql()
            .with_namespace_provider(|| -> String { panic!("provider called") });
        let rendered = format!("{base:?}");
        assert!(rendered.contains("NamespaceProvider { .. }"));
    }
}
