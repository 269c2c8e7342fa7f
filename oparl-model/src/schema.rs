use oparl_types::Kind;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// How the raw JSON value of a field is converted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "category", content = "target", rename_all = "snake_case")]
pub enum FieldCategory {
    /// Passed through unchanged. The category of every unlisted field.
    Plain,
    /// An ISO 8601 date (`2016-04-01`).
    Date,
    /// An ISO 8601 date-time with offset.
    DateTime,
    /// An object embedded in the parent's JSON body.
    EmbeddedObject,
    /// A list of embedded objects.
    EmbeddedObjectList,
    /// The URL of another resource of the given kind, loaded lazily.
    Reference(Kind),
    /// A list of URLs of resources of the given kind.
    ReferenceList(Kind),
    /// The URL of a paginated list of resources.
    ExternalCollection,
}

/// Describes how each field of one resource kind is converted.
///
/// A field name maps to at most one category: registering a field a second
/// time replaces its earlier category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Schema {
    pub kind: Kind,
    fields: BTreeMap<String, FieldCategory>,
}

impl Schema {
    /// Creates the schema for `kind` with the fields common to all OParl
    /// objects (`created` and `modified` as date-times).
    #[must_use]
    pub fn new(kind: Kind) -> Self {
        Self::empty(kind).datetime("created").datetime("modified")
    }

    /// Creates a schema with no typed fields at all.
    #[must_use]
    pub fn empty(kind: Kind) -> Self {
        Self {
            kind,
            fields: BTreeMap::new(),
        }
    }

    /// Sets the category of `field`.
    #[must_use]
    pub fn field(mut self, field: &str, category: FieldCategory) -> Self {
        self.fields.insert(field.to_string(), category);
        self
    }

    /// Shorthand for a date field.
    #[must_use]
    pub fn date(self, field: &str) -> Self {
        self.field(field, FieldCategory::Date)
    }

    /// Shorthand for a date-time field.
    #[must_use]
    pub fn datetime(self, field: &str) -> Self {
        self.field(field, FieldCategory::DateTime)
    }

    /// Shorthand for an embedded object field.
    #[must_use]
    pub fn embedded(self, field: &str) -> Self {
        self.field(field, FieldCategory::EmbeddedObject)
    }

    /// Shorthand for an embedded object list field.
    #[must_use]
    pub fn embedded_list(self, field: &str) -> Self {
        self.field(field, FieldCategory::EmbeddedObjectList)
    }

    /// Shorthand for a reference to a resource of kind `target`.
    #[must_use]
    pub fn reference(self, field: &str, target: Kind) -> Self {
        self.field(field, FieldCategory::Reference(target))
    }

    /// Shorthand for a list of references to resources of kind `target`.
    #[must_use]
    pub fn reference_list(self, field: &str, target: Kind) -> Self {
        self.field(field, FieldCategory::ReferenceList(target))
    }

    /// Shorthand for an external (paginated) list field.
    #[must_use]
    pub fn external_list(self, field: &str) -> Self {
        self.field(field, FieldCategory::ExternalCollection)
    }

    /// Returns the category of `field`, [`FieldCategory::Plain`] if unlisted.
    #[must_use]
    pub fn category(&self, field: &str) -> FieldCategory {
        self.fields
            .get(field)
            .copied()
            .unwrap_or(FieldCategory::Plain)
    }

    /// Iterates over the explicitly categorized fields in name order.
    pub fn fields(&self) -> impl Iterator<Item = (&str, FieldCategory)> {
        self.fields.iter().map(|(name, cat)| (name.as_str(), *cat))
    }
}
