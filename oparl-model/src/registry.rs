//! Resolution of type tags to schemas.

use oparl_types::{Kind, SCHEMA_URI, TypeUri};
use std::collections::BTreeMap;
use thiserror::Error;

use crate::{Diagnostic, DiagnosticKind, Schema};

/// Result type for registry lookups.
pub type RegistryResult<T> = Result<T, RegistryError>;

/// Fatal type tag resolution failures.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    /// The tag cannot be split into namespace and kind name.
    #[error("invalid type URI \"{0}\"")]
    MalformedTypeTag(String),

    /// The kind name is unknown or has no registered schema.
    #[error("unknown type \"{name}\" in type URI \"{uri}\"")]
    UnknownType { name: String, uri: String },
}

/// Outcome of a successful [`TypeRegistry::resolve`].
#[derive(Debug, Clone)]
pub struct Resolution<'a> {
    pub kind: Kind,
    pub schema: &'a Schema,
    /// Set when the tag's namespace is not the registry's canonical one.
    pub diagnostic: Option<Diagnostic>,
}

/// Maps type tags to the schema of their kind.
#[derive(Debug, Clone)]
pub struct TypeRegistry {
    namespace: String,
    schemas: BTreeMap<Kind, Schema>,
}

impl Default for TypeRegistry {
    fn default() -> Self {
        Self::new(SCHEMA_URI)
    }
}

impl TypeRegistry {
    /// Creates an empty registry whose canonical namespace is `namespace`.
    #[must_use]
    pub fn new(namespace: &str) -> Self {
        Self {
            namespace: namespace.trim_end_matches('/').to_string(),
            schemas: BTreeMap::new(),
        }
    }

    /// Registers `schema` under its kind, replacing any previous one.
    #[must_use]
    pub fn register(mut self, schema: Schema) -> Self {
        self.schemas.insert(schema.kind, schema);
        self
    }

    /// The canonical namespace.
    #[must_use]
    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    #[must_use]
    pub fn schema(&self, kind: Kind) -> Option<&Schema> {
        self.schemas.get(&kind)
    }

    /// Registered kinds in order.
    pub fn kinds(&self) -> impl Iterator<Item = Kind> + '_ {
        self.schemas.keys().copied()
    }

    /// Canonical type tag of `kind` (e.g. `https://schema.oparl.org/1.0/Body`).
    #[must_use]
    pub fn type_uri(&self, kind: Kind) -> String {
        TypeUri::new(&self.namespace, kind.as_str()).to_string()
    }

    /// Resolves a type tag to its kind and schema.
    ///
    /// The kind is looked up by the name suffix alone. A namespace other
    /// than the canonical one still resolves but yields a
    /// [`DiagnosticKind::SchemaMismatch`] on the resolution.
    pub fn resolve(&self, type_tag: &str) -> RegistryResult<Resolution<'_>> {
        let uri = TypeUri::parse(type_tag)
            .map_err(|_| RegistryError::MalformedTypeTag(type_tag.to_string()))?;

        let unknown = || RegistryError::UnknownType {
            name: uri.name().to_string(),
            uri: type_tag.to_string(),
        };
        let kind: Kind = uri.name().parse().map_err(|_| unknown())?;
        let schema = self.schemas.get(&kind).ok_or_else(unknown)?;

        let diagnostic = (uri.namespace() != self.namespace).then(|| {
            Diagnostic::new(
                DiagnosticKind::SchemaMismatch,
                type_tag,
                format!(
                    "invalid schema URI \"{}\" in type URI \"{}\" (should be \"{}\")",
                    uri.namespace(),
                    type_tag,
                    self.namespace
                ),
            )
        });

        Ok(Resolution {
            kind,
            schema,
            diagnostic,
        })
    }
}
