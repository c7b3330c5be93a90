use core::fmt::{self, Display};
use thiserror::Error;

#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum Error {
    /// Replacer was neither a function, an array-like value nor absent.
    #[error("Invalid replacer passed to stringify() function")]
    InvalidReplacer,
    /// A deferred value failed instead of settling.
    #[error("deferred value rejected: {0}")]
    Rejected(String),
    #[error("Unrecognized deferred adapter `{0}`")]
    UnrecognizedAdapter(String),
}

impl Error {
    pub fn rejected(reason: impl Display) -> Self {
        Error::Rejected(reason.to_string())
    }
}

/// Result type returned by the stringify functions.
pub type Result<T> = core::result::Result<T, Error>;

/// Position of a value inside its holder.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Key {
    Index(usize),
    Name(String),
}

impl Key {
    /// The key of the synthetic root holder.
    pub fn root() -> Self {
        Key::Name(String::new())
    }

    pub fn as_index(&self) -> Option<usize> {
        match self {
            Key::Index(i) => Some(*i),
            Key::Name(_) => None,
        }
    }

    pub fn as_name(&self) -> Option<&str> {
        match self {
            Key::Index(_) => None,
            Key::Name(name) => Some(name),
        }
    }
}

impl Display for Key {
    fn fmt(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Key::Index(i) => write!(formatter, "{}", i),
            Key::Name(name) => formatter.write_str(name),
        }
    }
}

impl From<usize> for Key {
    fn from(index: usize) -> Self {
        Key::Index(index)
    }
}

impl From<&str> for Key {
    fn from(name: &str) -> Self {
        Key::Name(name.to_string())
    }
}

impl From<String> for Key {
    fn from(name: String) -> Self {
        Key::Name(name)
    }
}
