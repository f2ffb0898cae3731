use std::collections::HashMap;

use crate::component::MultiSelect;
use crate::config::MultiSelectConfig;
use crate::error::{MultiSelectError, Result};

/// Tag the built-in component registers under
pub const MULTI_SELECT_TAG: &str = "multi-select";

pub type ComponentFactory = fn(MultiSelectConfig) -> Result<MultiSelect>;

/// Tag name to component factory. Built once by the host at startup.
pub struct ComponentRegistry {
    factories: HashMap<String, ComponentFactory>,
}

impl ComponentRegistry {
    pub fn new() -> Self {
        Self {
            factories: HashMap::new(),
        }
    }

    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        registry.factories.insert(MULTI_SELECT_TAG.to_string(), MultiSelect::new);
        registry
    }

    pub fn register(&mut self, tag: &str, factory: ComponentFactory) -> Result<()> {
        if self.factories.contains_key(tag) {
            return Err(MultiSelectError::AlreadyRegistered(tag.to_string()));
        }
        self.factories.insert(tag.to_string(), factory);
        tracing::debug!("Registered component {}", tag);
        Ok(())
    }

    pub fn create(&self, tag: &str, config: MultiSelectConfig) -> Result<MultiSelect> {
        let factory = self
            .factories
            .get(tag)
            .ok_or_else(|| MultiSelectError::UnknownComponent(tag.to_string()))?;

        factory(config)
    }

    pub fn is_registered(&self, tag: &str) -> bool {
        self.factories.contains_key(tag)
    }

    pub fn tags(&self) -> Vec<&str> {
        let mut tags: Vec<&str> = self.factories.keys().map(String::as_str).collect();
        tags.sort_unstable();
        tags
    }
}

impl Default for ComponentRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn locked_select(mut config: MultiSelectConfig) -> Result<MultiSelect> {
        config.locked = true;
        MultiSelect::new(config)
    }

    #[test]
    fn test_defaults_register_multi_select() {
        let registry = ComponentRegistry::with_defaults();
        assert!(registry.is_registered(MULTI_SELECT_TAG));

        let select = registry.create(MULTI_SELECT_TAG, MultiSelectConfig::default()).unwrap();
        assert_eq!(select.selection().count(), 3);
    }

    #[test]
    fn test_empty_registry_has_nothing() {
        let registry = ComponentRegistry::default();
        assert!(registry.tags().is_empty());
        let err = registry.create(MULTI_SELECT_TAG, MultiSelectConfig::default()).unwrap_err();
        assert!(matches!(err, MultiSelectError::UnknownComponent(tag) if tag == "multi-select"));
    }

    #[test]
    fn test_duplicate_registration_rejected() {
        let mut registry = ComponentRegistry::with_defaults();
        let err = registry.register(MULTI_SELECT_TAG, locked_select).unwrap_err();
        assert!(matches!(err, MultiSelectError::AlreadyRegistered(_)));
    }

    #[test]
    fn test_custom_factory() {
        let mut registry = ComponentRegistry::with_defaults();
        registry.register("locked-select", locked_select).unwrap();
        assert_eq!(registry.tags(), ["locked-select", "multi-select"]);

        let select = registry.create("locked-select", MultiSelectConfig::default()).unwrap();
        assert!(select.is_locked());
    }
}
