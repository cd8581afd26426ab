//! Component type registry
//!
//! Maps component type tags to their resolved default option. Each
//! variant's default is resolved once, when it is registered; the registry
//! is then frozen and only hands out shared references, so it can be read
//! from any number of threads without locking.

use std::collections::BTreeMap;
use std::sync::{Arc, OnceLock};

use chart_option::OptionMap;
use tracing::{debug, error, info};

use crate::instance::ComponentOption;
use crate::layout::LayoutMode;
use crate::model::{SliderZoomModel, ZoomVariant};

/// Errors that can occur when registering or looking up component types
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum RegistryError {
    #[error("Unknown component type: {0}")]
    UnknownType(String),

    #[error("Component type already registered: {0}")]
    DuplicateType(String),
}

/// A registered component type
#[derive(Debug, Clone)]
pub struct RegisteredComponent {
    type_tag: &'static str,
    layout_mode: LayoutMode,
    default_option: Arc<OptionMap>,
}

impl RegisteredComponent {
    pub fn type_tag(&self) -> &'static str {
        self.type_tag
    }

    pub fn layout_mode(&self) -> LayoutMode {
        self.layout_mode
    }

    /// The resolved default option, shared by every instance of this type
    pub fn default_option(&self) -> &Arc<OptionMap> {
        &self.default_option
    }

    /// Create a per-instance option with `user_option` layered over the default
    pub fn instantiate(&self, user_option: &OptionMap) -> ComponentOption {
        ComponentOption::instantiate(self, user_option)
    }
}

/// Collects component types before the registry is frozen
#[derive(Debug, Default)]
pub struct RegistryBuilder {
    components: BTreeMap<&'static str, RegisteredComponent>,
}

impl RegistryBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register variant `V` with its process-wide default option
    pub fn register<V: ZoomVariant>(&mut self) -> Result<&mut Self, RegistryError> {
        if self.components.contains_key(V::TYPE) {
            return Err(RegistryError::DuplicateType(V::TYPE.to_string()));
        }

        let default_option = V::default_option().clone();
        debug!(
            type_tag = V::TYPE,
            layout_mode = %V::LAYOUT_MODE,
            keys = default_option.len(),
            "registered component type"
        );

        self.components.insert(
            V::TYPE,
            RegisteredComponent {
                type_tag: V::TYPE,
                layout_mode: V::LAYOUT_MODE,
                default_option: Arc::new(default_option),
            },
        );
        Ok(self)
    }

    pub fn build(self) -> ComponentRegistry {
        ComponentRegistry {
            components: self.components,
        }
    }
}

/// Frozen table of registered component types
#[derive(Debug, Default)]
pub struct ComponentRegistry {
    components: BTreeMap<&'static str, RegisteredComponent>,
}

impl ComponentRegistry {
    pub fn builder() -> RegistryBuilder {
        RegistryBuilder::new()
    }

    /// Registry holding every built-in variant
    pub fn builtin() -> Result<Self, RegistryError> {
        let mut builder = Self::builder();
        builder.register::<SliderZoomModel>()?;
        Ok(builder.build())
    }

    pub fn get(&self, type_tag: &str) -> Result<&RegisteredComponent, RegistryError> {
        self.components
            .get(type_tag)
            .ok_or_else(|| RegistryError::UnknownType(type_tag.to_string()))
    }

    pub fn default_option(&self, type_tag: &str) -> Result<Arc<OptionMap>, RegistryError> {
        self.get(type_tag).map(|c| Arc::clone(&c.default_option))
    }

    pub fn instantiate(
        &self,
        type_tag: &str,
        user_option: &OptionMap,
    ) -> Result<ComponentOption, RegistryError> {
        Ok(self.get(type_tag)?.instantiate(user_option))
    }

    /// Registered components in type-tag order
    pub fn components(&self) -> impl Iterator<Item = &RegisteredComponent> {
        self.components.values()
    }

    pub fn types(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.components.keys().copied()
    }

    pub fn len(&self) -> usize {
        self.components.len()
    }

    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }
}

/// The process-wide registry, built on first access
pub fn global() -> &'static ComponentRegistry {
    static GLOBAL: OnceLock<ComponentRegistry> = OnceLock::new();
    GLOBAL.get_or_init(|| match ComponentRegistry::builtin() {
        Ok(registry) => {
            info!(types = registry.len(), "component registry ready");
            registry
        }
        Err(e) => {
            error!(error = %e, "failed to register built-in components");
            ComponentRegistry::default()
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chart_option::option_map;

    #[test]
    fn test_builtin_has_slider() {
        let registry = ComponentRegistry::builtin().unwrap();
        let slider = registry.get("dataZoom.slider").unwrap();

        assert_eq!(slider.type_tag(), "dataZoom.slider");
        assert_eq!(slider.layout_mode(), LayoutMode::Box);
        assert_eq!(slider.default_option().get_bool("show"), Some(true));
        assert_eq!(registry.types().collect::<Vec<_>>(), vec!["dataZoom.slider"]);
    }

    #[test]
    fn test_duplicate_registration() {
        let mut builder = ComponentRegistry::builder();
        builder.register::<SliderZoomModel>().unwrap();
        let err = builder.register::<SliderZoomModel>().unwrap_err();

        assert_eq!(err, RegistryError::DuplicateType("dataZoom.slider".to_string()));
    }

    #[test]
    fn test_unknown_type() {
        let registry = ComponentRegistry::builtin().unwrap();
        let err = registry.get("dataZoom.inside").unwrap_err();
        assert!(err.to_string().contains("dataZoom.inside"));
    }

    #[test]
    fn test_default_shared_not_copied() {
        let registry = ComponentRegistry::builtin().unwrap();
        let a = registry.default_option("dataZoom.slider").unwrap();
        let b = registry.default_option("dataZoom.slider").unwrap();
        assert!(Arc::ptr_eq(&a, &b));
    }

    #[test]
    fn test_registered_default_is_variant_default() {
        let registry = ComponentRegistry::builtin().unwrap();
        let registered = registry.default_option("dataZoom.slider").unwrap();
        assert_eq!(registered.as_ref(), SliderZoomModel::default_option());
    }

    #[test]
    fn test_instantiate_leaves_default_alone() {
        let registry = ComponentRegistry::builtin().unwrap();
        let before = registry.default_option("dataZoom.slider").unwrap();

        let instance = registry
            .instantiate("dataZoom.slider", &option_map! { "show" => false })
            .unwrap();

        assert_eq!(instance.get_bool("show"), Some(false));
        assert_eq!(before.get_bool("show"), Some(true));
    }

    #[test]
    fn test_global_is_shared() {
        assert!(std::ptr::eq(global(), global()));
        assert!(global().get("dataZoom.slider").is_ok());
    }
}
