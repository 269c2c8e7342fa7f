//! Schema model for the OParl client.
//!
//! Defines the static configuration the conversion engine is generic over:
//! - [`Schema`]: per-kind table of field name → [`FieldCategory`]
//! - [`TypeRegistry`]: resolves a type tag to its kind and schema
//! - [`Diagnostic`]: non-fatal report of a data-shape deviation
//!
//! The registry is an explicitly constructed value. [`TypeRegistry::oparl_1_0`]
//! builds the tables for the official OParl 1.0 object model; tests and
//! embedders can register their own minimal tables instead.

mod builtin;
mod diagnostic;
mod registry;
mod schema;

pub use diagnostic::{Diagnostic, DiagnosticKind};
pub use oparl_types::{Kind, SCHEMA_URI, TypeUri};
pub use registry::{RegistryError, RegistryResult, Resolution, TypeRegistry};
pub use schema::{FieldCategory, Schema};
