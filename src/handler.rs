//! Record handlers and the class instance factory
//!
//! A handler binds a class name to its singular variable identity and to
//! the collection endpoint it is served from. Handlers are looked up in a
//! [`HandlerRegistry`] populated at startup; lookup failure is a typed
//! [`Error::UnknownClass`].

use crate::error::{Error, Result};
use crate::naming;
use crate::registry::{self, Category};
use std::collections::HashMap;
use std::fmt;

/// Identity handed to a handler constructor
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassIdentity {
    /// Plural class name (`ProfessionalSoldiers`)
    pub class_name: String,
    /// Singular variable name (`professional_soldier`)
    pub variable_name: String,
    /// Category the class is published under
    pub category: Category,
}

/// Handler for the records of one variable class
pub trait RecordHandler: Send + Sync + fmt::Debug {
    /// Plural class name
    fn class_name(&self) -> &str;

    /// Singular variable name
    fn variable_name(&self) -> &str;

    /// Category the class belongs to
    fn category(&self) -> Category;

    /// Collection endpoint path, relative to the service base URL
    fn endpoint(&self) -> &str;

    /// Record field holding the variable value, if the class carries one
    fn value_field(&self) -> Option<&str> {
        Some(self.variable_name())
    }
}

/// Constructor registered for a class name
pub type HandlerConstructor = fn(ClassIdentity) -> Box<dyn RecordHandler>;

fn collection_endpoint(category: Category, class_name: &str) -> String {
    format!("/{}/{}/", category, naming::endpoint_segment(class_name))
}

// ============================================================================
// Built-in Handlers
// ============================================================================

/// A coded variable (`wf`, `sc`, `general`, `crisisdb`, `rt`)
///
/// Records carry the value under the variable name, e.g.
/// `{"professional_soldier": "present", "year_from": -300, ...}`.
#[derive(Debug, Clone)]
pub struct VariableClass {
    identity: ClassIdentity,
    endpoint: String,
}

impl VariableClass {
    /// Create a handler for a variable class
    pub fn new(identity: ClassIdentity) -> Self {
        let endpoint = collection_endpoint(identity.category, &identity.class_name);
        Self { identity, endpoint }
    }

    /// Constructor suitable for [`HandlerRegistry::register`]
    pub fn boxed(identity: ClassIdentity) -> Box<dyn RecordHandler> {
        Box::new(Self::new(identity))
    }
}

impl RecordHandler for VariableClass {
    fn class_name(&self) -> &str {
        &self.identity.class_name
    }

    fn variable_name(&self) -> &str {
        &self.identity.variable_name
    }

    fn category(&self) -> Category {
        self.identity.category
    }

    fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

/// A core entity collection (polities, NGAs, references)
///
/// Core records describe entities rather than coded values.
#[derive(Debug, Clone)]
pub struct CoreClass {
    identity: ClassIdentity,
    endpoint: String,
}

impl CoreClass {
    /// Create a handler for a core entity class
    pub fn new(identity: ClassIdentity) -> Self {
        let endpoint = collection_endpoint(identity.category, &identity.class_name);
        Self { identity, endpoint }
    }

    /// Constructor suitable for [`HandlerRegistry::register`]
    pub fn boxed(identity: ClassIdentity) -> Box<dyn RecordHandler> {
        Box::new(Self::new(identity))
    }
}

impl RecordHandler for CoreClass {
    fn class_name(&self) -> &str {
        &self.identity.class_name
    }

    fn variable_name(&self) -> &str {
        &self.identity.variable_name
    }

    fn category(&self) -> Category {
        self.identity.category
    }

    fn endpoint(&self) -> &str {
        &self.endpoint
    }

    fn value_field(&self) -> Option<&str> {
        None
    }
}

// ============================================================================
// Handler Registry
// ============================================================================

#[derive(Clone)]
struct Registration {
    category: Category,
    constructor: HandlerConstructor,
}

/// Registration table from class name to handler constructor
#[derive(Clone, Default)]
pub struct HandlerRegistry {
    handlers: HashMap<String, Registration>,
}

impl HandlerRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry with a handler for every class in the class registry
    pub fn builtin() -> Self {
        let mut registry = Self::new();
        for (category, names) in registry::variable_classes() {
            let constructor: HandlerConstructor = match category {
                Category::Core => CoreClass::boxed,
                _ => VariableClass::boxed,
            };
            for name in names {
                registry.register(*name, *category, constructor);
            }
        }
        registry
    }

    /// Register a constructor for a class name, replacing any previous one
    pub fn register(
        &mut self,
        class_name: impl Into<String>,
        category: Category,
        constructor: HandlerConstructor,
    ) -> &mut Self {
        self.handlers.insert(
            class_name.into(),
            Registration {
                category,
                constructor,
            },
        );
        self
    }

    /// Check if a class name has a handler
    pub fn contains(&self, class_name: &str) -> bool {
        self.handlers.contains_key(class_name)
    }

    /// Number of registered handlers
    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    /// Check if no handler is registered
    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }

    /// Construct the handler for `class_name`.
    ///
    /// An unregistered class is always [`Error::UnknownClass`]. For a
    /// registered one, `expected_variable_name` is the caller's statement
    /// of which variable it wants and must match the resolved name.
    pub fn instantiate(
        &self,
        class_name: &str,
        expected_variable_name: &str,
    ) -> Result<Box<dyn RecordHandler>> {
        let registration = self
            .handlers
            .get(class_name)
            .ok_or_else(|| Error::unknown_class(class_name))?;

        let resolved = naming::variable_name(class_name);
        if resolved != expected_variable_name {
            return Err(Error::VariableNameMismatch {
                class_name: class_name.to_string(),
                expected: expected_variable_name.to_string(),
                resolved,
            });
        }

        Ok((registration.constructor)(ClassIdentity {
            class_name: class_name.to_string(),
            variable_name: resolved,
            category: registration.category,
        }))
    }

    /// Construct the handler for `class_name` under its resolved variable name
    pub fn resolve(&self, class_name: &str) -> Result<Box<dyn RecordHandler>> {
        self.instantiate(class_name, &naming::variable_name(class_name))
    }
}

impl fmt::Debug for HandlerRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HandlerRegistry")
            .field("handlers", &self.handlers.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_instantiate_registered_class() {
        let registry = HandlerRegistry::builtin();
        let handler = registry
            .instantiate("ProfessionalSoldiers", "professional_soldier")
            .unwrap();

        assert_eq!(handler.class_name(), "ProfessionalSoldiers");
        assert_eq!(handler.variable_name(), "professional_soldier");
        assert_eq!(handler.category(), Category::Sc);
        assert_eq!(handler.endpoint(), "/sc/professional-soldiers/");
        assert_eq!(handler.value_field(), Some("professional_soldier"));
    }

    #[test]
    fn test_instantiate_unknown_class() {
        let registry = HandlerRegistry::builtin();
        let err = registry.instantiate("FakeClasses", "fake_class").unwrap_err();
        assert!(matches!(err, Error::UnknownClass { ref class_name } if class_name == "FakeClasses"));
    }

    #[test]
    fn test_unknown_class_wins_over_name_mismatch() {
        let registry = HandlerRegistry::builtin();
        let err = registry.instantiate("FakeClasses", "fake").unwrap_err();
        assert!(matches!(err, Error::UnknownClass { ref class_name } if class_name == "FakeClasses"));
    }

    #[test]
    fn test_instantiate_variable_name_mismatch() {
        let registry = HandlerRegistry::builtin();
        let err = registry.instantiate("Roads", "bridge").unwrap_err();
        assert!(matches!(
            err,
            Error::VariableNameMismatch { ref resolved, .. } if resolved == "road"
        ));
    }

    #[test]
    fn test_core_class_has_no_value_field() {
        let registry = HandlerRegistry::builtin();
        let handler = registry.resolve("Polities").unwrap();
        assert_eq!(handler.endpoint(), "/core/polities/");
        assert_eq!(handler.value_field(), None);
    }

    #[test]
    fn test_builtin_covers_class_registry() {
        let registry = HandlerRegistry::builtin();
        let known: usize = registry::variable_classes().values().map(|s| s.len()).sum();
        assert_eq!(registry.len(), known);
        assert!(registry.contains("Coppers"));
        assert!(!registry.contains("BigPonies"));
    }

    #[test]
    fn test_register_custom_handler() {
        let mut registry = HandlerRegistry::new();
        assert!(registry.is_empty());
        assert!(registry.resolve("BigPonies").is_err());

        registry.register("BigPonies", Category::Wf, VariableClass::boxed);
        let handler = registry.instantiate("BigPonies", "big_pony").unwrap();
        assert_eq!(handler.endpoint(), "/wf/big-ponies/");
    }
}
