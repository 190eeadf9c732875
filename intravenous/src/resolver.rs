//! Recursive, name-based dependency resolution

use crate::{
    container::{Args, Container},
    error::Error,
    extras::{Extras, Named, Positional},
    registry::{Factory, Instance, Registration},
    signature::CONTAINER
};
use std::sync::Arc;

/// Resolves names against the registry of a single container.
///
/// A resolver carries no state of its own between calls: the active
/// resolution path is passed down explicitly, so each branch of the
/// dependency graph sees only its own ancestry.
pub(crate) struct Resolver<'a> {
    container: &'a Container
}

impl<'a> Resolver<'a> {
    #[inline]
    pub(crate) fn new(container: &'a Container) -> Self {
        Self { container }
    }

    /// Produces the instance registered under `name`.
    ///
    /// `path` holds the factories currently being built on this branch,
    /// outermost first, and does not include `name` itself.
    pub(crate) fn resolve(&self, name: &str, path: &[String], extras: &Extras) -> Result<Instance, Error> {
        if name == CONTAINER {
            return Ok(self.container_instance());
        }

        let registration = self.container
            .lookup(name)
            .ok_or_else(|| Error::UnknownDependency(name.to_owned()))?;

        match registration {
            Registration::Value(value) => Ok(value),
            Registration::Factory(factory) => {
                if path.iter().any(|ancestor| ancestor == name) {
                    return Err(Error::circular(path, name));
                }
                let mut branch = path.to_vec();
                branch.push(name.to_owned());
                self.instantiate(name, &factory, &branch, extras)
            }
        }
    }

    fn instantiate(&self, name: &str, factory: &Factory, path: &[String], extras: &Extras) -> Result<Instance, Error> {
        let args = match extras {
            Extras::Positional(positional) if !positional.is_empty() =>
                self.positional_args(factory, positional, path)?,
            Extras::Named(named) => self.named_args(factory, named, path)?,
            _ => self.injected_args(factory, path)?
        };

        #[cfg(feature = "tracing")]
        tracing::trace!(name, args = args.len(), "invoking factory");
        #[cfg(not(feature = "tracing"))]
        let _ = name;

        factory.invoke(&args)
    }

    /// Every declared parameter resolved through the registry
    fn injected_args(&self, factory: &Factory, path: &[String]) -> Result<Args, Error> {
        let signature = factory.signature();
        let values = signature
            .parameter_names()
            .iter()
            .map(|param| self.resolve(param, path, &Extras::None))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Args::new(values, Some(signature.shared())))
    }

    /// Named extras first, the registry for everything else
    fn named_args(&self, factory: &Factory, named: &Named, path: &[String]) -> Result<Args, Error> {
        let signature = factory.signature();
        let values = signature
            .parameter_names()
            .iter()
            .map(|param| match named.get(param) {
                Some(value) => Ok(value.clone()),
                None => self.resolve(param, path, &Extras::None)
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Args::new(values, Some(signature.shared())))
    }

    /// Positional extras switch auto-injection off.
    ///
    /// When any declared parameter could have been injected, the extras become
    /// the complete argument list. Otherwise they fill the parameters left to
    /// right and whatever remains unfilled goes through the registry.
    fn positional_args(&self, factory: &Factory, positional: &Positional, path: &[String]) -> Result<Args, Error> {
        let signature = factory.signature();
        let params = signature.parameter_names();
        let extras = positional.as_slice();

        if signature.wants_container() || params.iter().any(|param| self.container.contains(param)) {
            #[cfg(feature = "tracing")]
            tracing::trace!(extras = extras.len(), "positional extras disable auto-injection");
            return Ok(Args::new(extras.to_vec(), None));
        }

        let mut values = extras.to_vec();
        for param in params.iter().skip(extras.len()) {
            values.push(self.resolve(param, path, &Extras::None)?);
        }
        Ok(Args::new(values, Some(signature.shared())))
    }

    #[inline]
    fn container_instance(&self) -> Instance {
        Arc::new(self.container.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::NO_DEPS;

    #[test]
    fn it_returns_container_without_lookup() {
        let container = Container::new();
        let resolver = Resolver::new(&container);

        let instance = resolver.resolve(CONTAINER, &[], &Extras::None).unwrap();
        let resolved = instance.downcast::<Container>().unwrap();

        assert!(Container::ptr_eq(&container, &resolved));
    }

    #[test]
    fn it_does_not_check_values_for_cycles() {
        let container = Container::new();
        container.register_value("a", 1_i32);
        let resolver = Resolver::new(&container);

        let path = ["a".to_owned()];
        let instance = resolver.resolve("a", &path, &Extras::None).unwrap();

        assert_eq!(instance.downcast_ref::<i32>(), Some(&1));
    }

    #[test]
    fn it_detects_factory_on_path() {
        let container = Container::new();
        container.register_factory("b", NO_DEPS, |_| Ok(()));
        let resolver = Resolver::new(&container);

        let path = ["a".to_owned(), "b".to_owned(), "c".to_owned()];
        let err = resolver.resolve("b", &path, &Extras::None).unwrap_err();

        assert_eq!(err.to_string(), "Circular reference: b --> c --> b");
    }

    #[test]
    fn it_lets_sibling_branches_share_a_dependency() {
        let container = Container::new();
        container.register_factory("shared", NO_DEPS, |_| Ok(0_u8));
        container.register_factory("left", ["shared"], |_| Ok(1_u8));
        container.register_factory("right", ["shared"], |_| Ok(2_u8));
        container.register_factory("root", ["left", "right", "shared"], |args| Ok(args.len()));
        let resolver = Resolver::new(&container);

        let instance = resolver.resolve("root", &[], &Extras::None).unwrap();

        assert_eq!(instance.downcast_ref::<usize>(), Some(&3));
    }

    #[test]
    fn it_fills_unresolvable_parameters_from_extras() {
        let container = Container::new();
        container.register_factory("sum", ["x", "y"], |args| {
            Ok(*args.by_name::<i32>("x")? + *args.by_name::<i32>("y")?)
        });
        let resolver = Resolver::new(&container);

        let extras = Extras::from(Positional::new().with(2_i32).with(3_i32));
        let instance = resolver.resolve("sum", &[], &extras).unwrap();

        assert_eq!(instance.downcast_ref::<i32>(), Some(&5));
    }

    #[test]
    fn it_appends_surplus_extras() {
        let container = Container::new();
        container.register_factory("first", ["x"], |args| Ok(args.clone()));
        let resolver = Resolver::new(&container);

        let extras = Extras::from(Positional::new().with(1_i32).with(2_i32).with(3_i32));
        let instance = resolver.resolve("first", &[], &extras).unwrap();
        let args = instance.downcast::<Args>().unwrap();

        assert_eq!(args.len(), 3);
        assert_eq!(args.parameter_names(), ["x"]);
        assert_eq!(*args.by_name::<i32>("x").unwrap(), 1);
        assert_eq!(*args.get::<i32>(2).unwrap(), 3);
    }

    #[test]
    fn it_treats_container_parameter_as_resolvable() {
        let container = Container::new();
        container.register_factory("literal", ["x", "container"], |args| Ok(args.clone()));
        let resolver = Resolver::new(&container);

        let extras = Extras::from(Positional::new().with(1_i32));
        let instance = resolver.resolve("literal", &[], &extras).unwrap();
        let args = instance.downcast::<Args>().unwrap();

        assert_eq!(args.len(), 1);
        assert!(args.parameter_names().is_empty());
    }

    #[test]
    fn it_resolves_remaining_parameters_after_extras() {
        let container = Container::new();
        container.register_factory("sum", ["x", "y"], |_| Ok(0_i32));
        let resolver = Resolver::new(&container);

        let extras = Extras::from(Positional::new().with(2_i32));
        let err = resolver.resolve("sum", &[], &extras).unwrap_err();

        assert_eq!(err, Error::UnknownDependency("y".into()));
    }

    #[test]
    fn it_does_not_pass_extras_to_nested_dependencies() {
        let container = Container::new();
        container.register_factory("inner", ["x"], |args| Ok(args.len()));
        container.register_factory("outer", ["inner", "x"], |args| args.get::<usize>(0).map(|n| *n));
        let resolver = Resolver::new(&container);

        let extras = Extras::from(Named::new().with("x", 1_i32));
        let err = resolver.resolve("outer", &[], &extras).unwrap_err();

        assert_eq!(err, Error::UnknownDependency("x".into()));
    }
}
