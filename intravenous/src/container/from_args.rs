//! Extractors for fetching factory arguments

use super::{Error, Container};
use crate::registry::Instance;
use std::{any::type_name, sync::Arc};

/// The argument list a factory is invoked with.
///
/// Arguments are either auto-injected in the order of the factory's declared
/// parameters, or the literal positional extras supplied by the caller.
#[derive(Debug, Clone)]
pub struct Args {
    values: Vec<Instance>,
    names: Option<Arc<[String]>>
}

impl Args {
    #[inline]
    pub(crate) fn new(values: Vec<Instance>, names: Option<Arc<[String]>>) -> Self {
        Self { values, names }
    }

    /// Number of arguments actually received
    #[inline]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = &Instance> {
        self.values.iter()
    }

    /// Parameter names the arguments are bound to.
    ///
    /// Empty when the factory received a literal argument list.
    #[inline]
    pub fn parameter_names(&self) -> &[String] {
        self.names.as_deref().unwrap_or_default()
    }

    /// Untyped argument at `index`
    #[inline]
    pub fn instance(&self, index: usize) -> Option<&Instance> {
        self.values.get(index)
    }

    /// Downcasts the argument at `index` and returns a shared pointer to it
    pub fn get<T: Send + Sync + 'static>(&self, index: usize) -> Result<Arc<T>, Error> {
        let instance = self.values
            .get(index)
            .ok_or(Error::ArgumentCount { expected: index + 1, actual: self.len() })?;
        instance
            .clone()
            .downcast::<T>()
            .map_err(|_| self.resolve_failed::<T>(index))
    }

    /// Downcasts the argument bound to the parameter `name`
    pub fn by_name<T: Send + Sync + 'static>(&self, name: &str) -> Result<Arc<T>, Error> {
        let index = self.parameter_names()
            .iter()
            .position(|param| param == name)
            .filter(|&index| index < self.len())
            .ok_or_else(|| Error::UnknownDependency(name.to_owned()))?;
        self.get(index)
    }

    /// Returns the container passed at `index`
    pub fn container(&self, index: usize) -> Result<Container, Error> {
        self.get::<Container>(index)
            .map(|c| c.as_ref().clone())
    }

    #[inline]
    fn resolve_failed<T>(&self, index: usize) -> Error {
        let name = self.parameter_names()
            .get(index)
            .cloned()
            .unwrap_or_else(|| format!("#{index}"));
        Error::ResolveFailed { name, type_name: type_name::<T>() }
    }
}

/// A trait that defines how to extract `Self` from a factory's argument list
pub trait FromArgument: Sized + Send + Sync {
    /// Extracts `Self` from the argument at `index`
    fn from_argument(args: &Args, index: usize) -> Result<Self, Error>;
}

impl<T: Send + Sync + 'static> FromArgument for Arc<T> {
    #[inline]
    fn from_argument(args: &Args, index: usize) -> Result<Self, Error> {
        args.get::<T>(index)
    }
}

impl FromArgument for Container {
    #[inline]
    fn from_argument(args: &Args, index: usize) -> Result<Self, Error> {
        args.container(index)
    }
}
