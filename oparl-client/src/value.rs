use chrono::{DateTime, FixedOffset, NaiveDate};

use crate::collection::PaginatedCollection;
use crate::entity::Entity;

/// A converted field value.
///
/// Cloning is cheap for entities and collections: the clone is a handle to
/// the same instance.
#[derive(Debug, Clone)]
pub enum Value {
    /// Plain JSON, either by schema or as the fallback of a failed
    /// conversion.
    Json(serde_json::Value),
    Date(NaiveDate),
    DateTime(DateTime<FixedOffset>),
    Entity(Entity),
    List(Vec<Value>),
    Collection(PaginatedCollection),
}

impl Value {
    #[must_use]
    pub fn as_json(&self) -> Option<&serde_json::Value> {
        match self {
            Value::Json(v) => Some(v),
            _ => None,
        }
    }

    /// The string content of a plain JSON string.
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        self.as_json().and_then(serde_json::Value::as_str)
    }

    #[must_use]
    pub fn as_date(&self) -> Option<NaiveDate> {
        match self {
            Value::Date(d) => Some(*d),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_datetime(&self) -> Option<DateTime<FixedOffset>> {
        match self {
            Value::DateTime(dt) => Some(*dt),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_entity(&self) -> Option<&Entity> {
        match self {
            Value::Entity(e) => Some(e),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_list(&self) -> Option<&[Value]> {
        match self {
            Value::List(items) => Some(items),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_collection(&self) -> Option<&PaginatedCollection> {
        match self {
            Value::Collection(c) => Some(c),
            _ => None,
        }
    }
}

impl From<serde_json::Value> for Value {
    fn from(value: serde_json::Value) -> Self {
        Value::Json(value)
    }
}

impl From<Entity> for Value {
    fn from(entity: Entity) -> Self {
        Value::Entity(entity)
    }
}
