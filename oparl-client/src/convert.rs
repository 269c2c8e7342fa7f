//! Conversion of raw JSON field values according to a schema.

use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime};
use oparl_model::{Diagnostic, DiagnosticKind, FieldCategory, Kind, Schema};
use serde_json::Value as Json;

use crate::client::Client;
use crate::error::ClientResult;
use crate::value::Value;

/// A converted value together with the diagnostics its conversion raised.
#[derive(Debug)]
pub struct Conversion {
    pub value: Value,
    pub diagnostics: Vec<Diagnostic>,
}

/// Converts the raw value of `field` of a resource described by `schema`.
///
/// Shape deviations never fail the conversion: they produce a diagnostic
/// and a documented fallback value. Errors come only from nested
/// construction (an embedded body without `id`, a failed download of a URL
/// found where an embedded object was expected, ...).
///
/// `owner` is the identifier of the resource the field belongs to and is
/// only used in diagnostics.
pub fn convert(
    client: &Client,
    schema: &Schema,
    field: &str,
    raw: &Json,
    owner: &str,
) -> ClientResult<Conversion> {
    let mut conv = Converter {
        client,
        kind: schema.kind,
        field,
        owner,
        diagnostics: Vec::new(),
    };
    let value = match schema.category(field) {
        FieldCategory::Plain => Value::Json(raw.clone()),
        FieldCategory::Date => conv.date(raw),
        FieldCategory::DateTime => conv.datetime(raw),
        FieldCategory::EmbeddedObject => conv.object(raw, false)?,
        FieldCategory::EmbeddedObjectList => {
            let values = conv
                .ensure_list(raw)
                .into_iter()
                .map(|item| conv.object(item, true))
                .collect::<ClientResult<Vec<_>>>()?;
            Value::List(values)
        }
        FieldCategory::Reference(target) => conv.reference(raw, target, false)?,
        FieldCategory::ReferenceList(target) => {
            let values = conv
                .ensure_list(raw)
                .into_iter()
                .map(|item| conv.reference(item, target, true))
                .collect::<ClientResult<Vec<_>>>()?;
            Value::List(values)
        }
        FieldCategory::ExternalCollection => conv.collection(raw),
    };
    Ok(Conversion {
        value,
        diagnostics: conv.diagnostics,
    })
}

struct Converter<'a> {
    client: &'a Client,
    kind: Kind,
    field: &'a str,
    owner: &'a str,
    diagnostics: Vec<Diagnostic>,
}

impl Converter<'_> {
    fn emit(&mut self, kind: DiagnosticKind, message: String) {
        self.diagnostics.push(
            Diagnostic::new(kind, self.owner, format!("In object \"{}\": {message}", self.owner))
                .with_field(self.field),
        );
    }

    fn violation(&mut self, message: String) {
        self.emit(DiagnosticKind::SpecificationViolation, message);
    }

    fn ensure_list<'j>(&mut self, raw: &'j Json) -> Vec<&'j Json> {
        match raw {
            Json::Array(items) => items.iter().collect(),
            other => {
                self.violation(format!(
                    "Field \"{}\" of type \"{}\" must contain a list, but a non-list value was found instead.",
                    self.field, self.kind
                ));
                vec![other]
            }
        }
    }

    fn date(&mut self, raw: &Json) -> Value {
        match raw.as_str().and_then(parse_date) {
            Some(date) => Value::Date(date),
            None => {
                self.emit(
                    DiagnosticKind::ContentMalformed,
                    format!(
                        "Field \"{}\" contains an invalid date string ({raw}).",
                        self.field
                    ),
                );
                Value::Json(raw.clone())
            }
        }
    }

    fn datetime(&mut self, raw: &Json) -> Value {
        match raw.as_str().and_then(parse_datetime) {
            Some(dt) => Value::DateTime(dt),
            None => {
                self.emit(
                    DiagnosticKind::ContentMalformed,
                    format!(
                        "Field \"{}\" contains an invalid date-time string ({raw}).",
                        self.field
                    ),
                );
                Value::Json(raw.clone())
            }
        }
    }

    /// Embedded object rule. A string is taken to be the URL of the object
    /// and is downloaded right away.
    fn object(&mut self, raw: &Json, in_list: bool) -> ClientResult<Value> {
        match raw {
            Json::Object(_) => Ok(Value::Entity(self.client.from_json(raw)?)),
            Json::String(url) => {
                let message = if in_list {
                    format!(
                        "The list in field \"{}\" of type \"{}\" must contain objects, but an URL (\"{url}\") was found instead.",
                        self.field, self.kind
                    )
                } else {
                    format!(
                        "Field \"{}\" of type \"{}\" must contain an object, but a URL (\"{url}\") was found instead.",
                        self.field, self.kind
                    )
                };
                self.violation(message);
                Ok(Value::Entity(self.client.from_identifier(url)?))
            }
            other => {
                self.violation(format!(
                    "Field \"{}\" of type \"{}\" must contain an object, but {other} was found instead.",
                    self.field, self.kind
                ));
                Ok(Value::Json(other.clone()))
            }
        }
    }

    /// Reference rule. An embedded body is accepted and built eagerly.
    fn reference(&mut self, raw: &Json, target: Kind, in_list: bool) -> ClientResult<Value> {
        match raw {
            Json::String(url) => {
                let type_tag = self.client.registry().type_uri(target);
                Ok(Value::Entity(self.client.lazy(url, &type_tag)?))
            }
            Json::Object(_) => {
                let message = if in_list {
                    format!(
                        "The list in field \"{}\" of type \"{}\" must contain references (URLs), but an object was found instead.",
                        self.field, self.kind
                    )
                } else {
                    format!(
                        "Field \"{}\" of type \"{}\" must contain an object reference (URL), but an object was found instead.",
                        self.field, self.kind
                    )
                };
                self.violation(message);
                Ok(Value::Entity(self.client.from_json(raw)?))
            }
            other => {
                self.violation(format!(
                    "Field \"{}\" of type \"{}\" must contain an object reference (URL), but {other} was found instead.",
                    self.field, self.kind
                ));
                Ok(Value::Json(other.clone()))
            }
        }
    }

    fn collection(&mut self, raw: &Json) -> Value {
        match raw {
            Json::String(url) => Value::Collection(self.client.collection(url)),
            other => {
                self.violation(format!(
                    "Field \"{}\" of type \"{}\" must contain the URL of an external list, but {other} was found instead.",
                    self.field, self.kind
                ));
                Value::Json(other.clone())
            }
        }
    }
}

/// Parses an ISO 8601 date. A full date-time is accepted and truncated.
pub(crate) fn parse_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .ok()
        .or_else(|| parse_datetime(s).map(|dt| dt.date_naive()))
}

/// Parses an ISO 8601 date-time. Values without offset are read as UTC, a
/// bare date as midnight UTC.
pub(crate) fn parse_datetime(s: &str) -> Option<DateTime<FixedOffset>> {
    DateTime::parse_from_rfc3339(s)
        .ok()
        .or_else(|| {
            NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S%.f")
                .ok()
                .map(|naive| naive.and_utc().fixed_offset())
        })
        .or_else(|| {
            NaiveDate::parse_from_str(s, "%Y-%m-%d")
                .ok()
                .and_then(|date| date.and_hms_opt(0, 0, 0))
                .map(|naive| naive.and_utc().fixed_offset())
        })
}
