use serde::{Deserialize, Serialize};
use std::fmt;

/// The class of a non-fatal deviation from the expected data shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DiagnosticKind {
    /// A type tag used a namespace other than the canonical one.
    SchemaMismatch,
    /// Data loaded for a resource carried a different `id`.
    IdMismatch,
    /// A field did not have the shape the schema demands.
    SpecificationViolation,
    /// A field value could not be parsed (e.g. an invalid date string).
    ContentMalformed,
    /// A collection page changed between two fetches.
    PaginationInconsistent,
}

impl DiagnosticKind {
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            DiagnosticKind::SchemaMismatch => "schema_mismatch",
            DiagnosticKind::IdMismatch => "id_mismatch",
            DiagnosticKind::SpecificationViolation => "specification_violation",
            DiagnosticKind::ContentMalformed => "content_malformed",
            DiagnosticKind::PaginationInconsistent => "pagination_inconsistent",
        }
    }
}

impl fmt::Display for DiagnosticKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A structured, non-fatal report emitted without aborting the surrounding
/// operation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Diagnostic {
    pub kind: DiagnosticKind,
    /// Identifier of the resource (or URL of the collection, or the type
    /// tag) the report is about.
    pub subject: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
    pub message: String,
}

impl Diagnostic {
    pub fn new(kind: DiagnosticKind, subject: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            kind,
            subject: subject.into(),
            field: None,
            message: message.into(),
        }
    }

    #[must_use]
    pub fn with_field(mut self, field: impl Into<String>) -> Self {
        self.field = Some(field.into());
        self
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.kind, self.message)
    }
}
