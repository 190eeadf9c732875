//! Declared parameter lists of factories

use std::{fmt::{Debug, Formatter}, sync::Arc};

/// Name that always resolves to the container itself
pub const CONTAINER: &str = "container";

/// Declared parameters of a factory without dependencies
pub const NO_DEPS: [&str; 0] = [];

/// An ordered list of the parameter names a factory depends on.
///
/// The order defines both the resolution order and how positional
/// extras are mapped onto parameters.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct Signature {
    params: Arc<[String]>
}

impl Debug for Signature {
    #[inline]
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.params.iter()).finish()
    }
}

impl<S: AsRef<str>> FromIterator<S> for Signature {
    #[inline]
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let params = iter
            .into_iter()
            .map(|name| name.as_ref().to_owned())
            .collect::<Vec<_>>();
        Self { params: params.into() }
    }
}

impl Signature {
    /// Creates a signature from declared parameter names
    #[inline]
    pub fn new<I, S>(params: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>
    {
        params.into_iter().collect()
    }

    /// Parameter names in declaration order
    #[inline]
    pub fn parameter_names(&self) -> &[String] {
        &self.params
    }

    /// Shared handle to the parameter names
    #[inline]
    pub(crate) fn shared(&self) -> Arc<[String]> {
        self.params.clone()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.params.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.params.is_empty()
    }

    /// Returns `true` if any parameter is named [`CONTAINER`]
    #[inline]
    pub fn wants_container(&self) -> bool {
        self.params.iter().any(|p| p == CONTAINER)
    }
}
