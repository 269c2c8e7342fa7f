//! Parsing of OParl type tags.
//!
//! A type tag has the shape `<namespace>/<name>`. Servers in the wild use
//! namespace variants (`http://` instead of `https://`, trailing version
//! suffixes, ...), so parsing only splits the tag; deciding whether the
//! namespace is acceptable is left to the caller.

use std::fmt;
use std::str::FromStr;

use crate::Error;

/// Official OParl 1.0 schema namespace.
pub const SCHEMA_URI: &str = "https://schema.oparl.org/1.0";

/// A type tag split at its last `/` into namespace and kind name.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TypeUri {
    namespace: String,
    name: String,
}

impl TypeUri {
    /// Parses a type tag.
    ///
    /// Fails if the tag contains no `/` or if the name after the last `/`
    /// is empty. The name is not checked against the known kinds.
    pub fn parse(uri: &str) -> crate::Result<Self> {
        match uri.rsplit_once('/') {
            Some((namespace, name)) if !name.is_empty() => Ok(Self {
                namespace: namespace.to_string(),
                name: name.to_string(),
            }),
            _ => Err(Error::MalformedTypeUri(uri.to_string())),
        }
    }

    /// Builds the type tag for `name` in `namespace`.
    #[must_use]
    pub fn new(namespace: &str, name: &str) -> Self {
        Self {
            namespace: namespace.trim_end_matches('/').to_string(),
            name: name.to_string(),
        }
    }

    /// Returns the namespace part (everything before the last `/`).
    #[must_use]
    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    /// Returns the kind name (everything after the last `/`).
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns true if the namespace is the official OParl 1.0 one.
    #[must_use]
    pub fn is_canonical(&self) -> bool {
        self.namespace == SCHEMA_URI
    }
}

impl fmt::Display for TypeUri {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.namespace, self.name)
    }
}

impl FromStr for TypeUri {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}
