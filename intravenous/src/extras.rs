//! Arguments supplied by the caller at resolution time

use crate::registry::Instance;
use std::{collections::HashMap, sync::Arc};

/// Extra arguments for the target of a `get` call.
///
/// They apply to the requested factory only, never to the dependencies
/// resolved on its behalf.
#[derive(Debug, Clone, Default)]
pub enum Extras {
    /// Every parameter is auto-injected
    #[default]
    None,
    /// Literal argument list, disables auto-injection
    Positional(Positional),
    /// Per-parameter overrides, consulted before the registry
    Named(Named)
}

impl From<()> for Extras {
    #[inline]
    fn from(_: ()) -> Self {
        Extras::None
    }
}

impl From<Positional> for Extras {
    #[inline]
    fn from(positional: Positional) -> Self {
        if positional.is_empty() {
            Extras::None
        } else {
            Extras::Positional(positional)
        }
    }
}

impl From<Named> for Extras {
    #[inline]
    fn from(named: Named) -> Self {
        Extras::Named(named)
    }
}

/// An ordered list of extra arguments
///
/// # Example
/// ```
/// use intravenous::Positional;
///
/// let extras = Positional::new()
///     .with("extra1")
///     .with(42_u32);
///
/// assert_eq!(extras.len(), 2);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Positional {
    values: Vec<Instance>
}

impl Positional {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a value
    #[inline]
    pub fn with<T: Send + Sync + 'static>(self, value: T) -> Self {
        self.with_instance(Arc::new(value))
    }

    /// Appends an already shared instance
    #[inline]
    pub fn with_instance(mut self, instance: Instance) -> Self {
        self.values.push(instance);
        self
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    #[inline]
    pub(crate) fn as_slice(&self) -> &[Instance] {
        &self.values
    }
}

/// Extra arguments keyed by parameter name
///
/// # Example
/// ```
/// use intravenous::Named;
///
/// let extras = Named::new()
///     .with("b", "b")
///     .with("c", "c");
///
/// assert!(extras.contains("b"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct Named {
    values: HashMap<String, Instance>
}

impl Named {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value for the parameter `name`, replacing a previous one
    #[inline]
    pub fn with<T: Send + Sync + 'static>(self, name: impl Into<String>, value: T) -> Self {
        self.with_instance(name, Arc::new(value))
    }

    /// Sets an already shared instance for the parameter `name`
    #[inline]
    pub fn with_instance(mut self, name: impl Into<String>, instance: Instance) -> Self {
        self.values.insert(name.into(), instance);
        self
    }

    #[inline]
    pub fn contains(&self, name: &str) -> bool {
        self.values.contains_key(name)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    #[inline]
    pub(crate) fn get(&self, name: &str) -> Option<&Instance> {
        self.values.get(name)
    }
}
