//! Session context and construction entry points.

use oparl_model::{Diagnostic, Resolution, TypeRegistry};
use std::fmt;
use std::rc::Rc;

use crate::collection::PaginatedCollection;
use crate::entity::Entity;
use crate::error::{ClientError, ClientResult};
use crate::fetcher::{Fetcher, FetcherConfig, HttpFetcher};
use crate::sink::{DiagnosticSink, TracingSink};

/// Shared context of a client session: the type registry, the fetcher and
/// the diagnostics sink.
///
/// Cloning is cheap and yields a handle to the same session. Every entity
/// and collection keeps a handle so it can load itself later.
#[derive(Clone)]
pub struct Client {
    inner: Rc<ClientInner>,
}

struct ClientInner {
    registry: TypeRegistry,
    fetcher: Box<dyn Fetcher>,
    sink: Box<dyn DiagnosticSink>,
}

/// Builder for [`Client`].
///
/// Defaults: the OParl 1.0 registry, an [`HttpFetcher`] built from the
/// configured [`FetcherConfig`], and a [`TracingSink`].
#[derive(Default)]
pub struct ClientBuilder {
    registry: Option<TypeRegistry>,
    fetcher: Option<Box<dyn Fetcher>>,
    sink: Option<Box<dyn DiagnosticSink>>,
    http: FetcherConfig,
}

impl ClientBuilder {
    #[must_use]
    pub fn registry(mut self, registry: TypeRegistry) -> Self {
        self.registry = Some(registry);
        self
    }

    #[must_use]
    pub fn fetcher(mut self, fetcher: impl Fetcher + 'static) -> Self {
        self.fetcher = Some(Box::new(fetcher));
        self
    }

    #[must_use]
    pub fn sink(mut self, sink: impl DiagnosticSink + 'static) -> Self {
        self.sink = Some(Box::new(sink));
        self
    }

    /// Configuration of the default HTTP fetcher. Ignored when an explicit
    /// fetcher is set.
    #[must_use]
    pub fn http_config(mut self, config: FetcherConfig) -> Self {
        self.http = config;
        self
    }

    pub fn build(self) -> ClientResult<Client> {
        let fetcher = match self.fetcher {
            Some(fetcher) => fetcher,
            None => Box::new(HttpFetcher::new(&self.http)?),
        };
        Ok(Client {
            inner: Rc::new(ClientInner {
                registry: self.registry.unwrap_or_else(TypeRegistry::oparl_1_0),
                fetcher,
                sink: self.sink.unwrap_or_else(|| Box::new(TracingSink)),
            }),
        })
    }
}

impl Client {
    #[must_use]
    pub fn builder() -> ClientBuilder {
        ClientBuilder::default()
    }

    /// Client for OParl 1.0 servers over HTTP with default settings.
    pub fn new() -> ClientResult<Self> {
        Self::builder().build()
    }

    #[must_use]
    pub fn registry(&self) -> &TypeRegistry {
        &self.inner.registry
    }

    /// Builds a loaded entity from already available JSON data.
    pub fn from_json(&self, data: &serde_json::Value) -> ClientResult<Entity> {
        let id = data
            .get("id")
            .and_then(serde_json::Value::as_str)
            .ok_or(ClientError::MissingId)?;
        let type_tag = data
            .get("type")
            .and_then(serde_json::Value::as_str)
            .ok_or(ClientError::MissingType)?;
        let resolution = self.resolve(type_tag)?;
        let entity = Entity::unloaded(self.clone(), id, type_tag, resolution.kind);
        entity.populate(data, resolution.schema)?;
        Ok(entity)
    }

    /// Like [`from_json`](Self::from_json) for JSON text.
    pub fn from_json_str(&self, text: &str) -> ClientResult<Entity> {
        let data: serde_json::Value = serde_json::from_str(text)?;
        self.from_json(&data)
    }

    /// Downloads the resource at `id` and builds a loaded entity from it.
    pub fn from_identifier(&self, id: &str) -> ClientResult<Entity> {
        let data = self.fetch(id)?;
        self.from_json(&data)
    }

    /// Creates an unloaded entity. Its data is downloaded on first use.
    pub fn lazy(&self, id: &str, type_tag: &str) -> ClientResult<Entity> {
        let kind = self.resolve(type_tag)?.kind;
        Ok(Entity::unloaded(self.clone(), id, type_tag, kind))
    }

    /// Wraps the paginated list at `url`. Nothing is fetched yet.
    #[must_use]
    pub fn collection(&self, url: &str) -> PaginatedCollection {
        PaginatedCollection::new(self.clone(), url)
    }

    pub(crate) fn fetch(&self, url: &str) -> ClientResult<serde_json::Value> {
        Ok(self.inner.fetcher.fetch(url)?)
    }

    pub(crate) fn report(&self, diagnostic: Diagnostic) {
        self.inner.sink.report(diagnostic);
    }

    /// Resolves a type tag, reporting a namespace mismatch if there is one.
    pub(crate) fn resolve(&self, type_tag: &str) -> ClientResult<Resolution<'_>> {
        let mut resolution = self.inner.registry.resolve(type_tag)?;
        if let Some(diagnostic) = resolution.diagnostic.take() {
            self.report(diagnostic);
        }
        Ok(resolution)
    }
}

impl fmt::Debug for Client {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Client")
            .field("namespace", &self.inner.registry.namespace())
            .finish_non_exhaustive()
    }
}
