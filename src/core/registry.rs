use std::collections::HashMap;

use url::Url;

use crate::domain::ports::Resource;
use crate::utils::error::{Result, WaitError};

/// Constructor signature every probe kind exposes to the registry.
///
/// The factory receives the identifier as the caller wrote it; the registry
/// parses a `Url` only to pick the factory, never to rewrite the input.
pub type ResourceFactory = fn(Option<&str>) -> Result<Box<dyn Resource>>;

/// One probe kind's registration: the schemes it answers for and its factory.
pub struct ResourcePlugin {
    pub schemes: &'static [&'static str],
    pub factory: ResourceFactory,
}

/// Explicit scheme-to-factory table, built and owned by the host's
/// composition root and passed by reference wherever probes get resolved.
#[derive(Default)]
pub struct Registry {
    factories: HashMap<String, ResourceFactory>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, plugin: ResourcePlugin) {
        for scheme in plugin.schemes {
            tracing::trace!(scheme, "registering resource factory");
            self.factories.insert((*scheme).to_string(), plugin.factory);
        }
    }

    pub fn supports(&self, scheme: &str) -> bool {
        self.factories.contains_key(scheme)
    }

    /// Resolve `uri` to a probe via the factory registered for its scheme.
    pub fn resolve(&self, uri: &str) -> Result<Box<dyn Resource>> {
        let parsed = Url::parse(uri).map_err(|e| WaitError::InvalidResourceIdentifier {
            uri: uri.to_string(),
            reason: e.to_string(),
        })?;

        let factory = self
            .factories
            .get(parsed.scheme())
            .ok_or_else(|| WaitError::UnsupportedScheme(parsed.scheme().to_string()))?;

        factory(Some(uri))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::fs;

    #[test]
    fn resolve_unknown_scheme_fails() {
        let registry = Registry::new();
        let err = registry.resolve("file:///tmp/x").unwrap_err();
        assert!(matches!(err, WaitError::UnsupportedScheme(scheme) if scheme == "file"));
    }

    #[test]
    fn resolve_unparseable_uri_fails() {
        let mut registry = Registry::new();
        registry.register(fs::plugin());
        let err = registry.resolve("not a uri").unwrap_err();
        assert!(matches!(err, WaitError::InvalidResourceIdentifier { .. }));
    }

    #[test]
    fn registered_scheme_is_supported() {
        let mut registry = Registry::new();
        registry.register(fs::plugin());
        assert!(registry.supports("file"));
        assert!(!registry.supports("http"));
    }
}
