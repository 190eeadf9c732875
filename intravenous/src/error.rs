//! Describes dependency resolution errors

use std::fmt::{Display, Formatter};

/// Separator between the names of a circular reference chain
const CHAIN_SEPARATOR: &str = " --> ";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// A parameter has no registration and was not supplied as an extra
    UnknownDependency(String),
    /// A factory transitively depends on itself.
    ///
    /// Holds the chain from the first occurrence of the repeated name
    /// through its repetition, e.g. `["b", "c", "b"]`
    CircularReference(Vec<String>),
    /// The instance registered under `name` is not of the requested type
    ResolveFailed {
        name: String,
        type_name: &'static str
    },
    /// A typed factory was invoked with the wrong number of arguments
    ArgumentCount {
        expected: usize,
        actual: usize
    },
    Other(String)
}

impl Display for Error {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::UnknownDependency(name) => write!(f, "Unknown dependency: {name}"),
            Error::CircularReference(chain) => write!(f, "Circular reference: {}", chain.join(CHAIN_SEPARATOR)),
            Error::ResolveFailed { name, type_name } => write!(f, "Unable to resolve \"{name}\" as {type_name}"),
            Error::ArgumentCount { expected, actual } => write!(f, "Expected {expected} argument(s) but got {actual}"),
            Error::Other(msg) => write!(f, "{msg}")
        }
    }
}

impl std::error::Error for Error {}

impl Error {
    /// Builds a [`Error::CircularReference`] from the active resolution path
    /// and the name that was found on it again.
    pub(crate) fn circular(path: &[String], repeated: &str) -> Self {
        let start = path
            .iter()
            .position(|name| name == repeated)
            .unwrap_or(0);
        let mut chain = path[start..].to_vec();
        chain.push(repeated.to_owned());
        Error::CircularReference(chain)
    }

    /// Creates a free-form error, handy inside user factories
    #[inline]
    pub fn other(msg: impl Into<String>) -> Self {
        Error::Other(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::Error;

    #[test]
    fn it_formats_unknown_dependency() {
        let err = Error::UnknownDependency("a4".into());

        assert_eq!(err.to_string(), "Unknown dependency: a4");
    }

    #[test]
    fn it_formats_circular_reference() {
        let path = ["b".to_owned(), "c".to_owned(), "d".to_owned()];

        let err = Error::circular(&path, "b");

        assert_eq!(err.to_string(), "Circular reference: b --> c --> d --> b");
    }

    #[test]
    fn it_starts_chain_at_first_occurrence() {
        let path = ["a".to_owned(), "b".to_owned(), "c".to_owned()];

        let err = Error::circular(&path, "b");

        assert_eq!(err, Error::CircularReference(vec!["b".into(), "c".into(), "b".into()]));
    }

    #[test]
    fn it_formats_argument_count() {
        let err = Error::ArgumentCount { expected: 2, actual: 3 };

        assert_eq!(err.to_string(), "Expected 2 argument(s) but got 3");
    }
}
