//! Core type definitions for the OParl client.
//!
//! This crate defines the fundamental, schema-agnostic types used throughout
//! the client:
//! - [`Kind`], the flat enumeration of OParl 1.0 resource kinds
//! - [`TypeUri`], a parsed `<namespace>/<Kind>` type tag
//! - [`SCHEMA_URI`], the canonical OParl 1.0 namespace
//!
//! Field tables and conversion rules live in `oparl-model` and
//! `oparl-client`, not here.

mod kind;
mod type_uri;

pub use kind::Kind;
pub use type_uri::{SCHEMA_URI, TypeUri};

/// Result type alias using the crate's error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while parsing type tags.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error("invalid type URI \"{0}\"")]
    MalformedTypeUri(String),

    #[error("unknown kind \"{0}\"")]
    UnknownKind(String),
}
