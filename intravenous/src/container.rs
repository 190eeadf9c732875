//! Dependency Injection container and tools

use crate::{
    error::Error,
    extras::Extras,
    registry::{Instance, Registration, Registry},
    resolver::Resolver,
    signature::CONTAINER
};
use std::{
    any::type_name,
    fmt::{Debug, Formatter},
    sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard}
};

pub use self::{
    factory::GenericFactory,
    from_args::{Args, FromArgument}
};

pub mod factory;
pub mod from_args;

/// Creates a new, empty container
#[inline]
pub fn create() -> Container {
    Container::new()
}

/// Stores `registration` unless `name` is reserved
fn insert_registration(registry: &mut Registry, name: String, registration: Registration) {
    if name == CONTAINER {
        #[cfg(feature = "tracing")]
        tracing::warn!("\"{CONTAINER}\" is reserved for the container itself, registration ignored");
        return;
    }

    let kind = registration.kind();
    let replaced = registry.insert(name.clone(), registration).is_some();

    #[cfg(feature = "tracing")]
    tracing::debug!(name = %name, %kind, replaced, "registered");
    #[cfg(not(feature = "tracing"))]
    let _ = (name, kind, replaced);
}

/// Represents a DI container builder,
/// that collects registrations before the container is handed out.
#[derive(Debug)]
pub struct ContainerBuilder {
    registry: Registry
}

impl Default for ContainerBuilder {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl ContainerBuilder {
    /// Creates a new DI container builder
    #[inline]
    pub fn new() -> Self {
        Self { registry: Registry::new() }
    }

    /// Build a DI container
    #[inline]
    pub fn build(self) -> Container {
        Container {
            registry: Arc::new(RwLock::new(self.registry))
        }
    }

    /// Register a value or a factory under `name`
    pub fn register(&mut self, name: impl Into<String>, registration: impl Into<Registration>) {
        insert_registration(&mut self.registry, name.into(), registration.into());
    }

    /// Register a value that is returned unchanged on every resolution
    pub fn register_value<T: Send + Sync + 'static>(&mut self, name: impl Into<String>, value: T) {
        self.register(name, Registration::value(value));
    }

    /// Register a factory that receives its assembled argument list
    pub fn register_factory<T, F, I, S>(&mut self, name: impl Into<String>, deps: I, factory: F)
    where
        T: Send + Sync + 'static,
        F: Fn(&Args) -> Result<T, Error> + Send + Sync + 'static,
        I: IntoIterator<Item = S>,
        S: AsRef<str>
    {
        self.register(name, Registration::factory(deps, factory));
    }

    /// Register a typed factory, see [`GenericFactory`]
    pub fn register_fn<T, F, P, I, S>(&mut self, name: impl Into<String>, deps: I, factory: F)
    where
        T: Send + Sync + 'static,
        F: GenericFactory<P, Output = T>,
        I: IntoIterator<Item = S>,
        S: AsRef<str>
    {
        self.register(name, Registration::from_fn(deps, factory));
    }
}

/// Represents a DI container, that resolves dependencies by name.
///
/// Cloning is cheap: clones share the same registrations.
///
/// # Example
/// ```
/// use std::sync::Arc;
/// use intravenous::Container;
///
/// struct Greeter(Arc<String>);
///
/// let container = intravenous::create();
/// container.register_value("name", String::from("world"));
/// container.register_fn("greeter", ["name"], |name: Arc<String>| Ok(Greeter(name)));
///
/// let greeter = container.resolve::<Greeter>("greeter").unwrap();
/// assert_eq!(greeter.0.as_str(), "world");
/// ```
#[derive(Clone)]
pub struct Container {
    registry: Arc<RwLock<Registry>>
}

impl Default for Container {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl Debug for Container {
    #[inline]
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Container")
            .field("names", &self.names())
            .finish()
    }
}

impl Container {
    /// Creates a new, empty container
    #[inline]
    pub fn new() -> Self {
        ContainerBuilder::new().build()
    }

    /// Registers a value or a factory under `name`, replacing any previous registration.
    ///
    /// The name `container` is reserved and cannot be registered.
    pub fn register(&self, name: impl Into<String>, registration: impl Into<Registration>) {
        insert_registration(&mut self.write(), name.into(), registration.into());
    }

    /// Registers a value that is returned unchanged on every resolution
    pub fn register_value<T: Send + Sync + 'static>(&self, name: impl Into<String>, value: T) {
        self.register(name, Registration::value(value));
    }

    /// Registers a factory that receives its assembled argument list
    ///
    /// # Example
    /// ```
    /// use intravenous::Container;
    ///
    /// let container = Container::new();
    /// container.register_value("a", 1_i32);
    /// container.register_factory("b", ["a"], |args| Ok(*args.get::<i32>(0)? + 1));
    ///
    /// let b = container.resolve::<i32>("b").unwrap();
    /// assert_eq!(*b, 2);
    /// ```
    pub fn register_factory<T, F, I, S>(&self, name: impl Into<String>, deps: I, factory: F)
    where
        T: Send + Sync + 'static,
        F: Fn(&Args) -> Result<T, Error> + Send + Sync + 'static,
        I: IntoIterator<Item = S>,
        S: AsRef<str>
    {
        self.register(name, Registration::factory(deps, factory));
    }

    /// Registers a typed factory, see [`GenericFactory`]
    pub fn register_fn<T, F, P, I, S>(&self, name: impl Into<String>, deps: I, factory: F)
    where
        T: Send + Sync + 'static,
        F: GenericFactory<P, Output = T>,
        I: IntoIterator<Item = S>,
        S: AsRef<str>
    {
        self.register(name, Registration::from_fn(deps, factory));
    }

    /// Resolves `name`, auto-injecting every declared dependency
    #[inline]
    pub fn get(&self, name: &str) -> Result<Instance, Error> {
        self.get_with(name, Extras::None)
    }

    /// Resolves `name` using extra arguments supplied by the caller.
    ///
    /// Extras apply to the requested factory only. Values ignore them.
    pub fn get_with(&self, name: &str, extras: impl Into<Extras>) -> Result<Instance, Error> {
        let extras = extras.into();
        let result = Resolver::new(self).resolve(name, &[], &extras);

        #[cfg(feature = "tracing")]
        if let Err(err) = &result {
            tracing::debug!(name, %err, "resolution failed");
        }

        result
    }

    /// Resolves `name` and downcasts it to `T`
    #[inline]
    pub fn resolve<T: Send + Sync + 'static>(&self, name: &str) -> Result<Arc<T>, Error> {
        self.resolve_with(name, Extras::None)
    }

    /// Resolves `name` with extra arguments and downcasts it to `T`
    pub fn resolve_with<T: Send + Sync + 'static>(&self, name: &str, extras: impl Into<Extras>) -> Result<Arc<T>, Error> {
        self.get_with(name, extras)?
            .downcast::<T>()
            .map_err(|_| Error::ResolveFailed {
                name: name.to_owned(),
                type_name: type_name::<T>()
            })
    }

    /// Returns `true` if `name` has a registration
    #[inline]
    pub fn contains(&self, name: &str) -> bool {
        self.read().contains(name)
    }

    /// Registered names in ascending order
    #[inline]
    pub fn names(&self) -> Vec<String> {
        self.read().names()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.read().len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns `true` if both handles share the same registrations
    #[inline]
    pub fn ptr_eq(this: &Self, other: &Self) -> bool {
        Arc::ptr_eq(&this.registry, &other.registry)
    }

    /// Clones the registration out so that no lock is held while factories run
    #[inline]
    pub(crate) fn lookup(&self, name: &str) -> Option<Registration> {
        self.read().lookup(name).cloned()
    }

    #[inline]
    fn read(&self) -> RwLockReadGuard<'_, Registry> {
        self.registry
            .read()
            .unwrap_or_else(PoisonError::into_inner)
    }

    #[inline]
    fn write(&self) -> RwLockWriteGuard<'_, Registry> {
        self.registry
            .write()
            .unwrap_or_else(PoisonError::into_inner)
    }
}
