//! Client for OParl, the standard interface for publishing information
//! about parliaments and their work.
//!
//! OParl resources reference one another by URL, and large lists are
//! exposed as paginated "external lists" instead of embedded arrays. This
//! crate materializes that graph lazily:
//!
//! - [`Entity`]: a resource whose body is downloaded on first field access
//! - [`convert`]: turns raw JSON field values into typed [`Value`]s
//!   (dates, date-times, embedded objects, lazy references, reference
//!   lists, paginated lists) according to the kind's schema
//! - [`PaginatedCollection`]: walks an external list page by page, keeping
//!   only the current page in memory
//!
//! # Example
//!
//! ```no_run
//! use oparl_client::Client;
//!
//! let client = Client::new()?;
//! let system = client.from_identifier("https://oparl.example.org/oparl/v1")?;
//! if let Some(bodies) = system.get("body")?.as_collection() {
//!     for body in bodies {
//!         println!("{}", body?);
//!     }
//! }
//! # Ok::<(), oparl_client::ClientError>(())
//! ```
//!
//! # Diagnostics
//!
//! The client is lenient about non-compliant data seen in the wild. Such
//! deviations (a URL where an embedded object belongs, an invalid date
//! string, ...) do not fail the operation: they are reported to the
//! client's [`DiagnosticSink`] and a fallback value is used. By default they
//! are logged as `tracing` warnings; use a [`DiagnosticCollector`] to
//! inspect them programmatically.
//!
//! # Threading
//!
//! All I/O is blocking and happens inside [`Entity::load`] and page loads
//! of [`PaginatedCollection`]. Clients, entities and collections are
//! single-threaded handles (`!Send`); concurrent use is not supported.

mod client;
mod collection;
mod convert;
mod entity;
mod error;
mod fetcher;
mod sink;
mod value;

pub use client::{Client, ClientBuilder};
pub use collection::{CollectionIter, PaginatedCollection};
pub use convert::{Conversion, convert};
pub use entity::Entity;
pub use error::{ClientError, ClientResult, FetchError, FetchResult};
pub use fetcher::{Fetcher, FetcherConfig, HttpFetcher};
pub use sink::{DiagnosticCollector, DiagnosticSink, TracingSink};
pub use value::Value;

pub use oparl_model::{
    Diagnostic, DiagnosticKind, FieldCategory, Kind, RegistryError, SCHEMA_URI, Schema,
    TypeRegistry,
};
