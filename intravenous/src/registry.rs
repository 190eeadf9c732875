//! Name to registration mapping

use crate::{
    container::{Args, GenericFactory},
    error::Error,
    signature::Signature
};
use std::{
    any::Any,
    collections::HashMap,
    fmt::{Debug, Display, Formatter},
    sync::Arc
};

/// A type-erased, shared instance produced or stored by the container
pub type Instance = Arc<
    dyn Any
    + Send
    + Sync
>;

type FactoryFn = Arc<
    dyn Fn(&Args) -> Result<Instance, Error>
    + Send
    + Sync
>;

/// A constructor together with the names of the dependencies it declares
#[derive(Clone)]
pub struct Factory {
    signature: Signature,
    factory_fn: FactoryFn
}

impl Debug for Factory {
    #[inline]
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Factory")
            .field("signature", &self.signature)
            .finish_non_exhaustive()
    }
}

impl Factory {
    /// Wraps a function that receives the assembled argument list
    pub fn new<T, F>(signature: Signature, factory: F) -> Self
    where
        T: Send + Sync + 'static,
        F: Fn(&Args) -> Result<T, Error> + Send + Sync + 'static
    {
        let factory_fn = Arc::new(move |args: &Args| -> Result<Instance, Error> {
            factory(args).map(|t| Arc::new(t) as Instance)
        });
        Self { signature, factory_fn }
    }

    /// Wraps a typed closure, see [`GenericFactory`]
    pub fn from_fn<T, F, P>(signature: Signature, factory: F) -> Self
    where
        T: Send + Sync + 'static,
        F: GenericFactory<P, Output = T>
    {
        Self::new(signature, move |args: &Args| factory.call(args))
    }

    /// Declared parameter names
    #[inline]
    pub fn signature(&self) -> &Signature {
        &self.signature
    }

    #[inline]
    pub(crate) fn invoke(&self, args: &Args) -> Result<Instance, Error> {
        (self.factory_fn)(args)
    }
}

/// What a registration holds
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Kind {
    Value,
    Factory
}

impl Display for Kind {
    #[inline]
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Kind::Value => f.write_str("value"),
            Kind::Factory => f.write_str("factory")
        }
    }
}

/// Either a literal value handed out as is, or a factory invoked on every resolution
#[derive(Clone)]
pub enum Registration {
    Value(Instance),
    Factory(Factory)
}

impl Debug for Registration {
    #[inline]
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Registration::Value(_) => f.write_str("Value(..)"),
            Registration::Factory(factory) => Debug::fmt(factory, f)
        }
    }
}

impl From<Factory> for Registration {
    #[inline]
    fn from(factory: Factory) -> Self {
        Registration::Factory(factory)
    }
}

impl Registration {
    /// A value returned unchanged by every resolution
    #[inline]
    pub fn value<T: Send + Sync + 'static>(value: T) -> Self {
        Registration::Value(Arc::new(value))
    }

    /// A value that is already shared
    #[inline]
    pub fn instance(instance: Instance) -> Self {
        Registration::Value(instance)
    }

    /// A factory receiving the assembled argument list
    #[inline]
    pub fn factory<T, F, I, S>(deps: I, factory: F) -> Self
    where
        T: Send + Sync + 'static,
        F: Fn(&Args) -> Result<T, Error> + Send + Sync + 'static,
        I: IntoIterator<Item = S>,
        S: AsRef<str>
    {
        Registration::Factory(Factory::new(Signature::new(deps), factory))
    }

    /// A factory written as a typed closure
    #[inline]
    pub fn from_fn<T, F, P, I, S>(deps: I, factory: F) -> Self
    where
        T: Send + Sync + 'static,
        F: GenericFactory<P, Output = T>,
        I: IntoIterator<Item = S>,
        S: AsRef<str>
    {
        Registration::Factory(Factory::from_fn(Signature::new(deps), factory))
    }

    #[inline]
    pub fn kind(&self) -> Kind {
        match self {
            Registration::Value(_) => Kind::Value,
            Registration::Factory(_) => Kind::Factory
        }
    }
}

/// Registrations keyed by dependency name, last write wins
#[derive(Debug, Default, Clone)]
pub(crate) struct Registry {
    entries: HashMap<String, Registration>
}

impl Registry {
    #[inline]
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Stores a registration and returns the one it replaced, if any
    #[inline]
    pub(crate) fn insert(&mut self, name: String, registration: Registration) -> Option<Registration> {
        self.entries.insert(name, registration)
    }

    #[inline]
    pub(crate) fn lookup(&self, name: &str) -> Option<&Registration> {
        self.entries.get(name)
    }

    #[inline]
    pub(crate) fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    pub(crate) fn names(&self) -> Vec<String> {
        let mut names = self.entries
            .keys()
            .cloned()
            .collect::<Vec<_>>();
        names.sort_unstable();
        names
    }

    #[inline]
    pub(crate) fn len(&self) -> usize {
        self.entries.len()
    }
}
