//! Name-based dependency injection
//!
//! Register values and factories under string names, then request instances by name.
//! A factory declares the names of its dependencies, the container resolves them
//! recursively, reports circular references and always injects itself
//! for a parameter named `container`.
//!
//! # Example
//! ```
//! use intravenous::Named;
//!
//! let container = intravenous::create();
//! container.register_value("a", "from registry");
//! container.register_factory("test", ["a", "b"], |args| {
//!     let a = args.by_name::<&str>("a")?;
//!     let b = args.by_name::<&str>("b")?;
//!     Ok(format!("{a}, {b}"))
//! });
//!
//! let test = container
//!     .resolve_with::<String>("test", Named::new().with("b", "from extras"))
//!     .unwrap();
//!
//! assert_eq!(test.as_str(), "from registry, from extras");
//! ```

pub use crate::{
    container::{Args, Container, ContainerBuilder, FromArgument, GenericFactory, create},
    error::Error,
    extras::{Extras, Named, Positional},
    registry::{Factory, Instance, Kind, Registration},
    signature::{CONTAINER, NO_DEPS, Signature},
};

pub mod error;
pub mod container;
pub mod extras;
pub mod registry;
pub mod signature;
mod resolver;
