//! Generic factory for constructing registered types

use super::{Args, Error, FromArgument};

/// A trait that describes a generic factory function
/// whose parameters are extracted from the assembled argument list
///
/// Parameters are matched to arguments by position. An argument list whose length
/// differs from the closure's arity fails with [`Error::ArgumentCount`].
pub trait GenericFactory<Params>: Send + Sync + 'static {
    /// A type of object that will be constructed
    type Output;

    /// Calls a generic function and returns either constructed object or error
    fn call(&self, args: &Args) -> Result<Self::Output, Error>;
}

impl<F, R> GenericFactory<()> for F
where
    F: Fn() -> R + Send + Sync + 'static
{
    type Output = R;

    #[inline]
    fn call(&self, args: &Args) -> Result<Self::Output, Error> {
        if !args.is_empty() {
            return Err(Error::ArgumentCount { expected: 0, actual: args.len() });
        }
        Ok(self())
    }
}

macro_rules! define_generic_factory ({ $arity:literal => $($param:ident $index:literal)* } => {
    impl<F, R, $($param,)*> GenericFactory<($($param,)*)> for F
    where
        F: Fn($($param),*) -> Result<R, Error> + Send + Sync + 'static,
        $($param: FromArgument,)*
    {
        type Output = R;

        #[inline]
        #[allow(non_snake_case)]
        fn call(&self, args: &Args) -> Result<Self::Output, Error> {
            if args.len() != $arity {
                return Err(Error::ArgumentCount { expected: $arity, actual: args.len() });
            }
            $(let $param = $param::from_argument(args, $index)?;)*
            (self)($($param,)*)
        }
    }
});

define_generic_factory! { 1 => T1 0 }
define_generic_factory! { 2 => T1 0 T2 1 }
define_generic_factory! { 3 => T1 0 T2 1 T3 2 }
define_generic_factory! { 4 => T1 0 T2 1 T3 2 T4 3 }
define_generic_factory! { 5 => T1 0 T2 1 T3 2 T4 3 T5 4 }

#[cfg(test)]
mod tests {
    use crate::{Container, Positional, NO_DEPS};
    use super::*;
    use std::sync::Arc;

    #[derive(Debug, Clone, Copy)]
    struct X(i32);

    #[derive(Debug, Clone, Copy)]
    struct Y(i32);

    #[derive(Debug)]
    struct Point(Arc<X>, Arc<Y>);

    #[test]
    fn it_resolves_by_injection() {
        let container = Container::new();
        container.register_fn("x", NO_DEPS, || X(1));
        container.register_fn("y", NO_DEPS, || Y(2));
        container.register_fn("point", ["x", "y"], |x: Arc<X>, y: Arc<Y>| Ok(Point(x, y)));

        let point = container.resolve::<Point>("point").unwrap();

        assert_eq!(point.0.0, 1);
        assert_eq!(point.1.0, 2);
    }

    #[test]
    fn it_resolves_from_container() {
        let container = Container::new();
        container.register_value("x", X(1));
        container.register_value("y", Y(2));
        container.register_fn("point", ["container"], |c: Container| {
            let x = c.resolve::<X>("x")?;
            let y = c.resolve::<Y>("y")?;
            Ok(Point(x, y))
        });

        let point = container.resolve::<Point>("point").unwrap();

        assert_eq!(point.0.0, 1);
        assert_eq!(point.1.0, 2);
    }

    #[test]
    fn it_fails_when_arguments_are_missing() {
        let container = Container::new();
        container.register_value("x", X(0));
        container.register_fn("point", ["x", "y"], |x: Arc<X>, y: Arc<Y>| Ok(Point(x, y)));

        let extras = Positional::new().with(X(1));
        let err = container.get_with("point", extras).unwrap_err();

        assert_eq!(err, Error::ArgumentCount { expected: 2, actual: 1 });
    }

    #[test]
    fn it_fails_when_arguments_are_surplus() {
        let container = Container::new();
        container.register_value("x", 0_i32);
        container.register_fn("one", ["x"], |x: Arc<i32>| Ok(*x));

        let extras = Positional::new().with(1_i32).with(2_i32);
        let err = container.get_with("one", extras).unwrap_err();

        assert_eq!(err, Error::ArgumentCount { expected: 1, actual: 2 });
    }

    #[test]
    fn it_fails_when_arguments_are_passed_to_nullary_factory() {
        let container = Container::new();
        container.register_fn("x", NO_DEPS, || X(1));

        let err = container.get_with("x", Positional::new().with(1_i32)).unwrap_err();

        assert_eq!(err, Error::ArgumentCount { expected: 0, actual: 1 });
    }

    #[test]
    fn it_fails_on_argument_type_mismatch() {
        let container = Container::new();
        container.register_value("x", Y(1));
        container.register_fn("wrapper", ["x"], |x: Arc<X>| Ok(x.0));

        let err = container.get("wrapper").unwrap_err();

        assert!(matches!(err, Error::ResolveFailed { ref name, .. } if name == "x"));
    }
}
